//! Common trait for the heap types in this crate
//!
//! [`Heap`] is the interface shared by the generic engine
//! ([`BinaryHeap`](crate::binary::BinaryHeap)) and its two façades
//! ([`MinHeap`](crate::min_heap::MinHeap), [`MaxHeap`](crate::max_heap::MaxHeap)).
//! Code written against the trait works with either ordering.
//!
//! Unlike `std::collections::BinaryHeap`, which orders the stored values
//! themselves, these heaps store `(value, priority)` pairs so the ordering key
//! is kept apart from the data.

use crate::error::EmptyHeapError;

/// Base trait for priority queues keyed by a separate priority
///
/// Which end of the order sits at the root depends on the implementation:
/// a min-heap yields the smallest priority first, a max-heap the largest.
///
/// # Example
///
/// ```rust
/// use rust_priority_heaps::Heap;
/// use rust_priority_heaps::min_heap::MinHeap;
///
/// fn drain<H: Heap<&'static str, i32>>(mut heap: H) -> Vec<&'static str> {
///     let mut out = Vec::new();
///     while let Ok(value) = heap.extract_root() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap = MinHeap::new();
/// heap.add("three", 3);
/// heap.add("one", 1);
/// heap.add("two", 2);
/// assert_eq!(drain(heap), vec!["one", "two", "three"]);
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the heap
    fn len(&self) -> usize;

    /// Inserts a value with the given priority
    ///
    /// # Time Complexity
    /// O(log n); storage grows as needed.
    fn add(&mut self, value: T, priority: P);

    /// Returns the value at the root without removing it
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, EmptyHeapError>;

    /// Removes and returns the value at the root
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty. The heap is left unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_root(&mut self) -> Result<T, EmptyHeapError>;
}
