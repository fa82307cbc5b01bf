//! Error type for heap operations

use thiserror::Error;

/// Returned by peek and extract operations when the heap holds no entries.
///
/// An operation that fails with this error leaves the heap untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("heap is empty")]
pub struct EmptyHeapError;
