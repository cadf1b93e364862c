//! errors — validation failures raised while constructing labeled containers.
//!
//! ## Purpose
//! Single home for everything that can go wrong when a `SignalData` is assembled
//! from user-supplied parts, so callers can match on one enum instead of parsing
//! message strings.
//!
//! ## Conventions
//! - Variants carry the offending values; messages are assembled lazily in
//!   `Display` and can be asserted on exactly in tests.
//! - `DataResult<T>` is the alias used by all fallible container operations.
//! - With the `python-bindings` feature enabled, every error converts into a
//!   Python `ValueError` carrying the `Display` text.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Convenience alias for results produced by container construction.
pub type DataResult<T> = Result<T, DataError>;

/// Validation failures detected while building a `SignalData`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    // ---- Construction validation ----
    /// The number of axis descriptions, names or units does not match the
    /// dimensionality of the payload.
    DimensionMismatch { ndim: usize, axes: usize, names: usize, units: usize },
    /// An axis label collection is not exactly as long as the corresponding
    /// payload dimension.
    AxisLengthMismatch { name: String, axis: usize, expected: usize, actual: usize },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::DimensionMismatch { ndim, axes, names, units } => write!(
                f,
                "data has {ndim} dimensions but {axes} axes, {names} names and {units} units were supplied"
            ),
            DataError::AxisLengthMismatch { name, axis, expected, actual } => write!(
                f,
                "axis {axis} ('{name}') has {actual} labels but the matching data dimension has length {expected}"
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<DataError> for PyErr {
    fn from(err: DataError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
