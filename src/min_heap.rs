//! Min-heap façade over the binary heap engine
//!
//! [`MinHeap`] fixes the ordering policy to [`MinOrder`], so the entry with
//! the smallest priority is always at the root and [`get_min`](MinHeap::get_min)
//! removes it.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.add("high", 10);
//! heap.add("low", 1);
//! heap.add("medium", 5);
//!
//! assert_eq!(heap.peek(), Ok(&"low"));
//! assert_eq!(heap.get_min(), Ok("low"));
//! assert_eq!(heap.get_min(), Ok("medium"));
//! assert_eq!(heap.get_min(), Ok("high"));
//! assert!(heap.get_min().is_err());
//! ```

use crate::binary::BinaryHeap;
use crate::error::EmptyHeapError;
use crate::ordering::MinOrder;
use crate::traits::Heap;

/// A binary heap that yields the smallest priority first
#[derive(Debug, Clone)]
pub struct MinHeap<T, P: Ord> {
    inner: BinaryHeap<T, P, MinOrder>,
}

impl<T, P: Ord> MinHeap<T, P> {
    /// Creates a new empty min-heap
    pub fn new() -> Self {
        Self {
            inner: BinaryHeap::new(),
        }
    }

    /// Creates a new empty min-heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every entry, keeping the allocated storage
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Inserts `value` with the given priority
    pub fn add(&mut self, value: T, priority: P) {
        self.inner.add(value, priority);
    }

    /// Returns the value with the smallest priority without removing it
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, EmptyHeapError> {
        self.inner.peek()
    }

    /// Returns the smallest priority currently in the heap
    pub fn peek_priority(&self) -> Result<&P, EmptyHeapError> {
        self.inner.peek_priority()
    }

    /// Removes and returns the value with the smallest priority
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn get_min(&mut self) -> Result<T, EmptyHeapError> {
        self.inner.extract_root()
    }

    /// Consumes the heap, returning its values in ascending priority order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.inner.into_sorted_vec()
    }
}

impl<T, P: Ord> Heap<T, P> for MinHeap<T, P> {
    fn new() -> Self {
        MinHeap::new()
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn add(&mut self, value: T, priority: P) {
        MinHeap::add(self, value, priority)
    }

    fn peek(&self) -> Result<&T, EmptyHeapError> {
        MinHeap::peek(self)
    }

    fn extract_root(&mut self) -> Result<T, EmptyHeapError> {
        self.get_min()
    }
}

impl<T, P: Ord> Default for MinHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(T, P)> for MinHeap<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for MinHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
