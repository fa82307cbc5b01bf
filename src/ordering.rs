//! Ordering policies for the binary heap engine
//!
//! A policy decides which of two priorities belongs closer to the root. The
//! heap engine in [`binary`](crate::binary) only ever asks "is this entry
//! better than that one?", so the same sift-up/sift-down code serves both a
//! min-heap and a max-heap:
//!
//! - [`MinOrder`]: natural ordering, smallest priority at the root
//! - [`MaxOrder`]: inverted natural ordering, largest priority at the root
//!
//! Policies are zero-sized types selected through a type parameter, so the
//! choice costs nothing at runtime.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_priority_heaps::ordering::{MaxOrder, MinOrder, OrderingPolicy};
//!
//! assert_eq!(MinOrder::compare(&3, &5), Ordering::Less);
//! assert_eq!(MaxOrder::compare(&3, &5), Ordering::Greater);
//! assert_eq!(MaxOrder::compare_sign(&3, &5), 1);
//! ```

use std::cmp::Ordering;

/// Three-way comparison of priorities defining which one rises toward the root
///
/// `compare(a, b)` returns:
/// - `Less` if `a` should be closer to the root than `b`
/// - `Greater` if `b` should be closer to the root than `a`
/// - `Equal` if the two are interchangeable
///
/// Implementations must be a total order: `compare(a, a) == Equal`,
/// `compare(a, b) == compare(b, a).reverse()`, and transitive.
pub trait OrderingPolicy<P: ?Sized> {
    /// Compares two priorities under this policy
    fn compare(a: &P, b: &P) -> Ordering;

    /// Same as [`compare`](Self::compare), in canonical `-1 / 0 / 1` form
    #[inline]
    fn compare_sign(a: &P, b: &P) -> i32 {
        Self::compare(a, b) as i32
    }

    /// Returns true if `a` belongs strictly closer to the root than `b`
    #[inline]
    fn is_better(a: &P, b: &P) -> bool {
        Self::compare(a, b) == Ordering::Less
    }
}

/// Min-ordering: smaller priorities are closer to the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

/// Max-ordering: larger priorities are closer to the root
///
/// Realised by inverting the natural comparison, so
/// `MaxOrder::compare(a, b) == MinOrder::compare(b, a)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<P: Ord + ?Sized> OrderingPolicy<P> for MinOrder {
    #[inline]
    fn compare(a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

impl<P: Ord + ?Sized> OrderingPolicy<P> for MaxOrder {
    #[inline]
    fn compare(a: &P, b: &P) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_first_less_than_second_is_positive() {
        assert_eq!(MaxOrder::compare_sign(&3, &5), 1);
    }

    #[test]
    fn test_max_first_greater_than_second_is_negative() {
        assert_eq!(MaxOrder::compare_sign(&5, &3), -1);
    }

    #[test]
    fn test_max_equal_is_zero() {
        assert_eq!(MaxOrder::compare_sign(&5, &5), 0);
    }

    #[test]
    fn test_max_negative_priorities() {
        assert_eq!(MaxOrder::compare_sign(&-5, &-3), 1);
        assert_eq!(MaxOrder::compare_sign(&-3, &-5), -1);
        assert_eq!(MaxOrder::compare_sign(&-5, &-5), 0);
    }

    #[test]
    fn test_max_inverts_natural_comparison() {
        let natural = 3i32.cmp(&5) as i32;
        assert_eq!(MaxOrder::compare_sign(&3, &5), -natural);
    }

    #[test]
    fn test_min_is_natural_comparison() {
        assert_eq!(MinOrder::compare_sign(&3, &5), -1);
        assert_eq!(MinOrder::compare_sign(&5, &3), 1);
        assert_eq!(MinOrder::compare_sign(&0, &0), 0);
        assert_eq!(MinOrder::compare_sign(&-5, &0), -1);
    }

    #[test]
    fn test_is_better_is_strict() {
        assert!(<MinOrder as OrderingPolicy<i32>>::is_better(&1, &2));
        assert!(!<MinOrder as OrderingPolicy<i32>>::is_better(&2, &2));
        assert!(<MaxOrder as OrderingPolicy<i32>>::is_better(&2, &1));
        assert!(!<MaxOrder as OrderingPolicy<i32>>::is_better(&2, &2));
    }

    #[test]
    fn test_unsized_priorities() {
        assert_eq!(MinOrder::compare("apple", "banana"), Ordering::Less);
        assert_eq!(MaxOrder::compare("apple", "banana"), Ordering::Greater);
    }
}
