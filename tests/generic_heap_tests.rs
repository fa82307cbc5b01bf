//! Generic tests for all Heap implementations
//!
//! These tests are written once against the `Heap` trait and instantiated
//! for each heap type. Helpers are parameterised by whether the heap yields
//! the smallest (`ascending == true`) or largest priority first.

use rust_priority_heaps::binary::BinaryHeap;
use rust_priority_heaps::ordering::{MaxOrder, MinOrder};
use rust_priority_heaps::{EmptyHeapError, Heap, MaxHeap, MinHeap};

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), Err(EmptyHeapError));
    assert_eq!(heap.extract_root(), Err(EmptyHeapError));
    assert_eq!(heap.len(), 0);
}

/// Test basic add and extract operations
fn test_basic_operations<H: Heap<&'static str, i32>>(ascending: bool) {
    let mut heap = H::new();

    heap.add("five", 5);
    heap.add("one", 1);
    heap.add("ten", 10);
    heap.add("three", 3);

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);

    let mut expected = vec!["one", "three", "five", "ten"];
    if !ascending {
        expected.reverse();
    }

    assert_eq!(heap.peek(), Ok(&expected[0]));
    for value in expected {
        assert_eq!(heap.extract_root(), Ok(value));
    }
    assert_eq!(heap.extract_root(), Err(EmptyHeapError));
    assert!(heap.is_empty());
}

/// Test a single element
fn test_single_element<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    heap.add(42, 7);

    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek(), Ok(&42));
    assert_eq!(heap.extract_root(), Ok(42));
    assert!(heap.is_empty());
}

/// Test that values and priorities are independent
fn test_values_independent_of_priorities<H: Heap<i32, i32>>(ascending: bool) {
    let mut heap = H::new();
    // value is the negation of priority
    for p in [3, -7, 12, 0, 5] {
        heap.add(-p, p);
    }

    let mut priorities = vec![-7, 0, 3, 5, 12];
    if !ascending {
        priorities.reverse();
    }
    for p in priorities {
        assert_eq!(heap.extract_root(), Ok(-p));
    }
}

/// Test that ties are all returned exactly once
fn test_ties<H: Heap<usize, i32>>() {
    let mut heap = H::new();
    for i in 0..20 {
        heap.add(i, 5);
    }
    heap.add(100, 0);
    heap.add(200, 10);

    let mut out = Vec::new();
    while let Ok(v) = heap.extract_root() {
        out.push(v);
    }

    assert_eq!(out.len(), 22);
    let mut middle: Vec<usize> = out[1..21].to_vec();
    middle.sort_unstable();
    assert_eq!(middle, (0..20).collect::<Vec<_>>());
}

/// Test interleaved adds and extracts
fn test_interleaved<H: Heap<i32, i32>>(ascending: bool) {
    let mut heap = H::new();
    heap.add(5, 5);
    heap.add(2, 2);
    let first = heap.extract_root().unwrap();
    assert_eq!(first, if ascending { 2 } else { 5 });

    heap.add(9, 9);
    heap.add(1, 1);
    heap.add(7, 7);

    let mut rest = Vec::new();
    while let Ok(v) = heap.extract_root() {
        rest.push(v);
    }

    let mut expected: Vec<i32> = [2, 5, 9, 1, 7]
        .into_iter()
        .filter(|&v| v != first)
        .collect();
    expected.sort_unstable();
    if !ascending {
        expected.reverse();
    }
    assert_eq!(rest, expected);
}

/// Test that the heap can be reused after being drained
fn test_reuse_after_drain<H: Heap<i32, i32>>(ascending: bool) {
    let mut heap = H::new();
    for round in 0..3 {
        for i in 0..10 {
            heap.add(round * 100 + i, i);
        }
        let root = heap.peek().copied();
        assert_eq!(root, Ok(round * 100 + (if ascending { 0 } else { 9 })));
        for _ in 0..10 {
            assert!(heap.extract_root().is_ok());
        }
        assert!(heap.is_empty());
        assert_eq!(heap.extract_root(), Err(EmptyHeapError));
    }
}

macro_rules! heap_tests {
    ($module:ident, $heap:ident, $ascending:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap::<$heap<String, i32>>();
            }

            #[test]
            fn basic_operations() {
                test_basic_operations::<$heap<&'static str, i32>>($ascending);
            }

            #[test]
            fn single_element() {
                test_single_element::<$heap<i32, i32>>();
            }

            #[test]
            fn values_independent_of_priorities() {
                test_values_independent_of_priorities::<$heap<i32, i32>>($ascending);
            }

            #[test]
            fn ties() {
                test_ties::<$heap<usize, i32>>();
            }

            #[test]
            fn interleaved() {
                test_interleaved::<$heap<i32, i32>>($ascending);
            }

            #[test]
            fn reuse_after_drain() {
                test_reuse_after_drain::<$heap<i32, i32>>($ascending);
            }
        }
    };
}

type MinBinary<T, P> = BinaryHeap<T, P, MinOrder>;
type MaxBinary<T, P> = BinaryHeap<T, P, MaxOrder>;

heap_tests!(min_heap, MinHeap, true);
heap_tests!(max_heap, MaxHeap, false);
heap_tests!(min_binary, MinBinary, true);
heap_tests!(max_binary, MaxBinary, false);
