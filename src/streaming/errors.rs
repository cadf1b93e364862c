//! errors — failure modes of the fixed-capacity ring buffer.
//!
//! ## Purpose
//! Typed rejections for buffer construction and appends, so callers can react
//! to a shape mismatch programmatically instead of parsing message strings.
//!
//! ## Conventions
//! - Every append failure is raised before the buffer mutates; callers may keep
//!   using a buffer after handling the error.
//! - `BufferResult<T>` is the alias used by all fallible streaming operations.
//! - With the `python-bindings` feature enabled, every error converts into a
//!   Python `ValueError` carrying the `Display` text.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Convenience alias for results produced by ring-buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Failure modes of `RingBuffer` construction and appends.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    // ---- Construction ----
    /// A capacity of zero records could never hold or return data.
    ZeroCapacity,
    // ---- Appending ----
    /// The appended array is 0-dimensional, so it has no leading record axis.
    MissingRecordAxis,
    /// The appended records do not match the shape fixed at first append.
    RecordShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },
}

impl std::error::Error for BufferError {}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::ZeroCapacity => {
                write!(f, "ring buffer capacity must be at least one record")
            }
            BufferError::MissingRecordAxis => {
                write!(f, "appended data must have a leading record axis, got a 0-dimensional array")
            }
            BufferError::RecordShapeMismatch { expected, actual } => write!(
                f,
                "record shape mismatch: buffer holds records of shape {expected:?}, got records of shape {actual:?}"
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<BufferError> for PyErr {
    fn from(err: BufferError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
