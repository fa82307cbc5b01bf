//! Binary Heaps with Pluggable Ordering for Rust
//!
//! This crate provides an array-backed binary heap that stores values keyed by
//! a separate priority, with min- and max-ordering served by one engine.
//!
//! # Features
//!
//! - **[`BinaryHeap`](binary::BinaryHeap)**: the generic engine, parameterised by an
//!   [`OrderingPolicy`](ordering::OrderingPolicy); O(log n) insert and extract, O(1) peek
//! - **[`MinHeap`]**: smallest priority first, extracted with `get_min`
//! - **[`MaxHeap`]**: largest priority first, extracted with `get_max`
//!
//! Max-ordering is not a separate implementation: [`MaxOrder`](ordering::MaxOrder)
//! simply inverts the natural comparison of priorities.
//!
//! Peeking or extracting from an empty heap returns [`EmptyHeapError`].
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::{MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::new();
//! let mut max = MaxHeap::new();
//! for (value, priority) in [(100, 10), (50, 5), (200, 20), (10, 1), (150, 15)] {
//!     min.add(value, priority);
//!     max.add(value, priority);
//! }
//!
//! assert_eq!(min.get_min(), Ok(10));
//! assert_eq!(max.get_max(), Ok(200));
//! ```

pub mod binary;
pub mod error;
pub mod max_heap;
pub mod min_heap;
pub mod ordering;
pub mod traits;

// Re-export the main types for convenience
pub use error::EmptyHeapError;
pub use max_heap::MaxHeap;
pub use min_heap::MinHeap;
pub use traits::Heap;
