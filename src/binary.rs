//! Binary heap engine parameterised by an ordering policy
//!
//! [`BinaryHeap`] stores `(value, priority)` entries in a flat `Vec`
//! interpreted as a complete binary tree: the children of index `i` live at
//! `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`. Which priority
//! wins is decided by the policy type `O` (see [`ordering`](crate::ordering)),
//! so the same sift-up/sift-down code backs both
//! [`MinHeap`](crate::min_heap::MinHeap) and [`MaxHeap`](crate::max_heap::MaxHeap).
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `add`          | O(log n) amortized |
//! | `peek`         | O(1)               |
//! | `extract_root` | O(log n)           |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::binary::BinaryHeap;
//! use rust_priority_heaps::ordering::MaxOrder;
//!
//! let mut heap: BinaryHeap<&str, i32, MaxOrder> = BinaryHeap::new();
//! heap.add("low", 1);
//! heap.add("high", 10);
//! heap.add("medium", 5);
//!
//! assert_eq!(heap.peek(), Ok(&"high"));
//! assert_eq!(heap.extract_root(), Ok("high"));
//! assert_eq!(heap.extract_root(), Ok("medium"));
//! assert_eq!(heap.extract_root(), Ok("low"));
//! assert!(heap.extract_root().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::error::EmptyHeapError;
use crate::ordering::{MinOrder, OrderingPolicy};
use crate::traits::Heap;

/// A stored value together with the priority it was added under
#[derive(Debug, Clone)]
struct Entry<T, P> {
    value: T,
    priority: P,
}

/// An array-backed binary heap ordered by the policy `O`
///
/// With the default [`MinOrder`] the smallest priority sits at the root.
/// Entries with equal priority come out in an unspecified order.
pub struct BinaryHeap<T, P: Ord, O = MinOrder> {
    data: Vec<Entry<T, P>>,
    _policy: PhantomData<O>,
}

impl<T, P: Ord, O: OrderingPolicy<P>> BinaryHeap<T, P, O> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _policy: PhantomData,
        }
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _policy: PhantomData,
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every entry, keeping the allocated storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts `value` with the given priority
    ///
    /// The entry is appended at the end of storage and sifted up until its
    /// parent is no worse than it under `O`.
    pub fn add(&mut self, value: T, priority: P) {
        let full = self.data.len() == self.data.capacity();
        self.data.push(Entry { value, priority });
        if full {
            log::trace!("heap storage grew to capacity {}", self.data.capacity());
        }
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the value at the root without removing it
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, EmptyHeapError> {
        self.peek_entry().map(|(value, _)| value)
    }

    /// Returns the priority of the root entry
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn peek_priority(&self) -> Result<&P, EmptyHeapError> {
        self.peek_entry().map(|(_, priority)| priority)
    }

    /// Returns the value and priority at the root without removing them
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    pub fn peek_entry(&self) -> Result<(&T, &P), EmptyHeapError> {
        match self.data.first() {
            Some(entry) => Ok((&entry.value, &entry.priority)),
            None => {
                log::debug!("peek on empty heap");
                Err(EmptyHeapError)
            }
        }
    }

    /// Removes and returns the value at the root
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty; nothing is mutated.
    pub fn extract_root(&mut self) -> Result<T, EmptyHeapError> {
        self.extract_entry().map(|(value, _)| value)
    }

    /// Removes and returns the value and priority at the root
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty; nothing is mutated.
    pub fn extract_entry(&mut self) -> Result<(T, P), EmptyHeapError> {
        match self.pop_root() {
            Some(entry) => Ok((entry.value, entry.priority)),
            None => {
                log::debug!("extract on empty heap");
                Err(EmptyHeapError)
            }
        }
    }

    /// Consumes the heap, returning its values in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.pop_root() {
            sorted.push(entry.value);
        }
        sorted
    }

    /// Checks the heap property over the whole storage
    ///
    /// Returns true if no entry is better than its parent under `O`.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            O::compare(&self.data[parent].priority, &self.data[i].priority) != Ordering::Greater
        })
    }

    /// Move the last entry into the root slot and restore the heap property
    fn pop_root(&mut self) -> Option<Entry<T, P>> {
        if self.data.is_empty() {
            return None;
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(root)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if O::is_better(&self.data[index].priority, &self.data[parent].priority) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && O::is_better(&self.data[left].priority, &self.data[best].priority) {
                best = left;
            }
            if right < len && O::is_better(&self.data[right].priority, &self.data[best].priority)
            {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, P: Ord, O: OrderingPolicy<P>> Heap<T, P> for BinaryHeap<T, P, O> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn add(&mut self, value: T, priority: P) {
        BinaryHeap::add(self, value, priority)
    }

    fn peek(&self) -> Result<&T, EmptyHeapError> {
        BinaryHeap::peek(self)
    }

    fn extract_root(&mut self) -> Result<T, EmptyHeapError> {
        BinaryHeap::extract_root(self)
    }
}

impl<T, P: Ord, O: OrderingPolicy<P>> Default for BinaryHeap<T, P, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: Ord + Clone, O> Clone for BinaryHeap<T, P, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _policy: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P: Ord + fmt::Debug, O> fmt::Debug for BinaryHeap<T, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("policy", &std::any::type_name::<O>())
            .field("data", &self.data)
            .finish()
    }
}

impl<T, P: Ord, O: OrderingPolicy<P>> Extend<(T, P)> for BinaryHeap<T, P, O> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for (value, priority) in iter {
            self.add(value, priority);
        }
    }
}

impl<T, P: Ord, O: OrderingPolicy<P>> FromIterator<(T, P)> for BinaryHeap<T, P, O> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
