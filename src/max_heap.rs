//! Max-heap façade over the binary heap engine
//!
//! [`MaxHeap`] fixes the ordering policy to [`MaxOrder`], which inverts the
//! natural comparison of priorities. The entry with the largest priority is
//! always at the root and [`get_max`](MaxHeap::get_max) removes it.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::max_heap::MaxHeap;
//!
//! let mut heap = MaxHeap::new();
//! heap.add("negative", -5);
//! heap.add("positive", 5);
//! heap.add("zero", 0);
//!
//! assert_eq!(heap.get_max(), Ok("positive"));
//! assert_eq!(heap.get_max(), Ok("zero"));
//! assert_eq!(heap.get_max(), Ok("negative"));
//! ```

use crate::binary::BinaryHeap;
use crate::error::EmptyHeapError;
use crate::ordering::MaxOrder;
use crate::traits::Heap;

/// A binary heap that yields the largest priority first
#[derive(Debug, Clone)]
pub struct MaxHeap<T, P: Ord> {
    inner: BinaryHeap<T, P, MaxOrder>,
}

impl<T, P: Ord> MaxHeap<T, P> {
    /// Creates a new empty max-heap
    pub fn new() -> Self {
        Self {
            inner: BinaryHeap::new(),
        }
    }

    /// Creates a new empty max-heap with room for `capacity` entries
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

    /// Returns the value with the largest priority without removing it
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, EmptyHeapError> {
        self.inner.peek()
    }

    /// Returns the largest priority currently in the heap
    pub fn peek_priority(&self) -> Result<&P, EmptyHeapError> {
        self.inner.peek_priority()
    }

    /// Removes and returns the value with the largest priority
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn get_max(&mut self) -> Result<T, EmptyHeapError> {
        self.inner.extract_root()
    }

    /// Consumes the heap, returning its values in descending priority order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.inner.into_sorted_vec()
    }
}

impl<T, P: Ord> Heap<T, P> for MaxHeap<T, P> {
    fn new() -> Self {
        MaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        MaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MaxHeap::len(self)
    }

    fn add(&mut self, value: T, priority: P) {
        MaxHeap::add(self, value, priority)
    }

    fn peek(&self) -> Result<&T, EmptyHeapError> {
        MaxHeap::peek(self)
    }

    fn extract_root(&mut self) -> Result<T, EmptyHeapError> {
        self.get_max()
    }
}

impl<T, P: Ord> Default for MaxHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(T, P)> for MaxHeap<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for MaxHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
