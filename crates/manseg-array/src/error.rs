//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during segmented array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not provide the requested buffer.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The array has never been allocated, or this view has been released.
    NotAllocated,
    /// Another view sharing this storage has released it.
    StorageReleased,
    /// Index past the end of the array.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },
    /// A caller-provided buffer has the wrong length.
    LengthMismatch {
        /// Length of the array.
        expected: usize,
        /// Length of the caller's buffer.
        actual: usize,
    },
    /// An [`ArrayConfig`](crate::ArrayConfig) invariant was violated.
    InvalidConfig {
        /// Which invariant failed.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::NotAllocated => write!(f, "segment storage is not allocated"),
            Self::StorageReleased => {
                write!(f, "segment storage was released through another view")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match array length {expected}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid array config: {reason}"),
        }
    }
}

impl Error for ArrayError {}
