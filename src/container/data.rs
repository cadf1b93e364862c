//! data — self-describing n-dimensional container for streaming signal code.
//!
//! ## Purpose
//! Couple a numeric payload with per-dimension metadata (axis labels, dimension
//! names, units) so that windows cut from a stream stay interpretable as they
//! move through processing stages: every dimension says what it is, how its
//! positions are labeled and in which unit.
//!
//! ## Key behaviors
//! - `SignalData::new` validates that the metadata matches the payload shape and
//!   rejects inconsistent inputs with a typed `DataError`.
//! - `SignalData::copy_with` derives a new container from an existing one,
//!   replacing only the parts supplied as overrides and cloning the rest.
//! - Equality compares all four parts structurally and never fails; containers
//!   of different shapes are simply unequal.
//!
//! ## Invariants & assumptions
//! - `axes`, `names` and `units` all have exactly `data.ndim()` entries.
//! - `axes[i].len() == data.shape()[i]` for every dimension `i`.
//! - The invariants are established once in `new`. Fields stay public, so code
//!   mutating a container in place is responsible for keeping them intact.
//! - `copy_with` performs no re-validation: overrides are taken as-is, which
//!   permits deliberately inconsistent intermediate states while a processing
//!   step is still patching metadata up.
//!
//! ## Conventions
//! - Payloads are `f64` arrays of dynamic dimensionality (`ArrayD<f64>`).
//! - By processing convention the leading axis is the one windows grow along
//!   (usually time); nothing in this module enforces that.
//!
//! ## Downstream usage
//! - Windows read out of `streaming::RingBuffer` are typically wrapped in a
//!   `SignalData` before being handed to processing code.
//! - The Python bindings expose this type as `Data`.
//!
//! ## Testing notes
//! - Unit tests cover construction, both validation failures, override
//!   semantics, deep-copy independence and structural equality.

use crate::container::axes::AxisLabels;
use crate::container::errors::{DataError, DataResult};
use ndarray::ArrayD;

/// Self-describing n-dimensional signal container.
///
/// ## Fields
/// - `data`: numeric payload of arbitrary dimensionality.
/// - `axes`: per-dimension labels, one entry per dimension of `data`.
/// - `names`: human-readable name of each dimension (e.g. "time", "channel").
/// - `units`: unit of each dimension's labels (e.g. "ms", "#").
///
/// ## Equality
/// Structural across all four fields. Standard `f64` semantics apply to the
/// payload: a container whose data holds a NaN is unequal to every container,
/// including a copy of itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalData {
    pub data: ArrayD<f64>,
    pub axes: Vec<AxisLabels>,
    pub names: Vec<String>,
    pub units: Vec<String>,
}

impl SignalData {
    /// Build a container after checking the metadata against the payload shape.
    ///
    /// # Arguments
    /// - `data`: numeric payload of any dimensionality.
    /// - `axes`: one label collection per payload dimension.
    /// - `names`: one dimension name per payload dimension.
    /// - `units`: one unit per payload dimension.
    ///
    /// # Errors
    /// - `DataError::DimensionMismatch` when any of `axes`, `names` or `units`
    ///   does not have exactly `data.ndim()` entries.
    /// - `DataError::AxisLengthMismatch` when an axis carries a different number
    ///   of labels than the length of its dimension. Axes are checked in order
    ///   and the first offender is reported.
    pub fn new(
        data: ArrayD<f64>, axes: Vec<AxisLabels>, names: Vec<String>, units: Vec<String>,
    ) -> DataResult<SignalData> {
        let ndim = data.ndim();
        if axes.len() != ndim || names.len() != ndim || units.len() != ndim {
            return Err(DataError::DimensionMismatch {
                ndim,
                axes: axes.len(),
                names: names.len(),
                units: units.len(),
            });
        }
        for (dim, axis) in axes.iter().enumerate() {
            if axis.len() != data.shape()[dim] {
                return Err(DataError::AxisLengthMismatch {
                    name: names[dim].clone(),
                    axis: dim,
                    expected: data.shape()[dim],
                    actual: axis.len(),
                });
            }
        }
        Ok(SignalData { data, axes, names, units })
    }

    /// Dimensionality of the payload.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Shape of the payload.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Derive a new container, replacing only the parts set on `overrides`.
    ///
    /// Parts left unset are deep-cloned from `self`, so the result never shares
    /// storage with the source. Overrides are not validated: processing steps
    /// routinely build intermediate containers whose metadata is patched up in a
    /// later step.
    pub fn copy_with(&self, overrides: DataOverrides) -> SignalData {
        SignalData {
            data: overrides.data.unwrap_or_else(|| self.data.clone()),
            axes: overrides.axes.unwrap_or_else(|| self.axes.clone()),
            names: overrides.names.unwrap_or_else(|| self.names.clone()),
            units: overrides.units.unwrap_or_else(|| self.units.clone()),
        }
    }
}

/// Optional replacement parts consumed by [`SignalData::copy_with`].
///
/// Built via chained setters; every part left unset is cloned from the source
/// container instead.
#[derive(Debug, Clone, Default)]
pub struct DataOverrides {
    pub data: Option<ArrayD<f64>>,
    pub axes: Option<Vec<AxisLabels>>,
    pub names: Option<Vec<String>>,
    pub units: Option<Vec<String>>,
}

impl DataOverrides {
    /// Start with no overrides set.
    pub fn new() -> DataOverrides {
        DataOverrides::default()
    }

    /// Replace the payload.
    pub fn data(mut self, data: ArrayD<f64>) -> DataOverrides {
        self.data = Some(data);
        self
    }

    /// Replace all axis label collections.
    pub fn axes(mut self, axes: Vec<AxisLabels>) -> DataOverrides {
        self.axes = Some(axes);
        self
    }

    /// Replace the dimension names.
    pub fn names(mut self, names: Vec<String>) -> DataOverrides {
        self.names = Some(names);
        self
    }

    /// Replace the dimension units.
    pub fn units(mut self, units: Vec<String>) -> DataOverrides {
        self.units = Some(units);
        self
    }
}
