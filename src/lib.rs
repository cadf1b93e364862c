//! rust_signals — streaming signal-data primitives with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the streaming primitives to Python via the `_rust_signals` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and the `types` submodule used by the `rust_signals`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`container` and `streaming`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_signals` Python extension.
//! - Register the `types` submodule under `rust_signals` so that dot-notation
//!   imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All buffering and validation logic is implemented in the inner Rust
//!   modules; this file performs only FFI glue, input conversion, and error
//!   mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (`SignalData`,
//!   `RingBuffer`).
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_signals.types` and are typically
//!   wrapped by thin pure-Python facades in the top-level `rust_signals`
//!   package.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_signals` module defined
//!   here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   streaming integration test; smoke tests for the PyO3 bindings live on the
//!   Python side.

pub mod container;
pub mod streaming;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayDyn};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyList},
};

#[cfg(feature = "python-bindings")]
use crate::{
    container::{
        axes::AxisLabels,
        data::{DataOverrides, SignalData},
    },
    utils::{extract_axes, extract_f64_array_dyn},
};

/// Data — Python-facing wrapper for the labeled signal container.
///
/// Purpose
/// -------
/// Expose [`SignalData`] to Python callers while preserving the core Rust
/// validation and error handling.
///
/// Key behaviors
/// -------------
/// - Validate and convert Python array-likes into the Rust container at
///   construction time.
/// - Provide a `copy` method mirroring [`SignalData::copy_with`]: keyword
///   arguments replace parts, everything else is deep-copied, and nothing is
///   re-validated.
/// - Support structural equality via `==`; comparison never raises, foreign
///   types are simply unequal.
///
/// Parameters
/// ----------
/// Constructed from Python via `Data(data, axes, names, units)`:
/// - `data`: n-dimensional float64 array-like payload.
/// - `axes`: sequence holding one label collection per payload dimension
///   (float64 arrays or sequences of strings).
/// - `names`: sequence of dimension names.
/// - `units`: sequence of dimension units.
///
/// Fields
/// ------
/// - `inner`: [`SignalData`]
///   Validated Rust-side container that all accessors read from.
///
/// Invariants
/// ----------
/// - `inner` satisfies the invariants documented on [`SignalData`] at
///   construction time; `copy` may deliberately produce inconsistent
///   intermediates, matching the Rust semantics.
///
/// Performance
/// -----------
/// - Property access copies into Python-owned containers; the payload getter
///   allocates one numpy array per call.
///
/// Notes
/// -----
/// - Native Rust callers should use [`SignalData`] directly; this type exists
///   solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_signals.types")]
pub struct Data {
    /// Underlying Rust container.
    pub inner: SignalData,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Data {
    /// Build a validated container from Python array-likes.
    #[new]
    #[pyo3(text_signature = "(data, axes, names, units, /)")]
    pub fn new<'py>(
        py: Python<'py>, data: &Bound<'py, PyAny>, axes: &Bound<'py, PyAny>, names: Vec<String>,
        units: Vec<String>,
    ) -> PyResult<Data> {
        let payload = extract_f64_array_dyn(py, data)?;
        let axes = extract_axes(axes)?;
        let inner = SignalData::new(payload.as_array().to_owned(), axes, names, units)?;
        Ok(Data { inner })
    }

    /// The payload as a numpy array (copied).
    #[getter]
    pub fn data<'py>(&self, py: Python<'py>) -> Bound<'py, PyArrayDyn<f64>> {
        self.inner.data.clone().into_pyarray(py)
    }

    /// Axis labels, one entry per dimension: numeric labels come back as
    /// float64 numpy arrays, textual labels as lists of strings.
    #[getter]
    pub fn axes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        let axes = PyList::empty(py);
        for axis in &self.inner.axes {
            match axis {
                AxisLabels::Values(values) => axes.append(values.clone().into_pyarray(py))?,
                AxisLabels::Names(names) => axes.append(names.clone())?,
            }
        }
        Ok(axes)
    }

    /// Dimension names.
    #[getter]
    pub fn names(&self) -> Vec<String> {
        self.inner.names.clone()
    }

    /// Dimension units.
    #[getter]
    pub fn units(&self) -> Vec<String> {
        self.inner.units.clone()
    }

    /// Dimensionality of the payload.
    #[getter]
    pub fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    /// Shape of the payload.
    #[getter]
    pub fn shape(&self) -> Vec<usize> {
        self.inner.shape().to_vec()
    }

    /// Copy the container, replacing only the supplied parts.
    ///
    /// Overrides are not validated, so a processing step may deliberately
    /// produce an inconsistent intermediate and patch it up afterwards.
    #[pyo3(
        signature = (data = None, axes = None, names = None, units = None),
        text_signature = "(self, /, data=None, axes=None, names=None, units=None)"
    )]
    pub fn copy<'py>(
        &self, py: Python<'py>, data: Option<&Bound<'py, PyAny>>, axes: Option<&Bound<'py, PyAny>>,
        names: Option<Vec<String>>, units: Option<Vec<String>>,
    ) -> PyResult<Data> {
        let mut overrides = DataOverrides::new();
        if let Some(raw) = data {
            overrides = overrides.data(extract_f64_array_dyn(py, raw)?.as_array().to_owned());
        }
        if let Some(raw) = axes {
            overrides = overrides.axes(extract_axes(raw)?);
        }
        if let Some(names) = names {
            overrides = overrides.names(names);
        }
        if let Some(units) = units {
            overrides = overrides.units(units);
        }
        Ok(Data { inner: self.inner.copy_with(overrides) })
    }

    /// Structural equality across payload, axes, names and units.
    pub fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        match other.extract::<PyRef<'_, Data>>() {
            Ok(other) => self.inner == other.inner,
            Err(_) => false,
        }
    }
}

/// RingBuffer — Python-facing wrapper for the fixed-capacity circular buffer.
///
/// Purpose
/// -------
/// Expose [`streaming::RingBuffer`] to Python polling loops that append
/// incoming batches and periodically read back the buffered window.
///
/// Key behaviors
/// -------------
/// - Convert Python array-likes into `f64` array views and delegate to the
///   core `append`/`get` implementation.
/// - Surface rejected appends (missing record axis, record shape mismatch) as
///   Python `ValueError`s while leaving the buffer untouched.
/// - Expose `length`, `full` and `idx` as read-only properties and the current
///   record count via `len(buffer)`.
///
/// Parameters
/// ----------
/// Constructed from Python via `RingBuffer(length)`:
/// - `length`: capacity in records; must be at least 1.
///
/// Fields
/// ------
/// - `inner`: [`streaming::RingBuffer`]
///   Rust-side buffer that owns the circular storage.
///
/// Invariants
/// ----------
/// - `inner` upholds the cursor and fill-state invariants documented on the
///   Rust type; this wrapper adds no state of its own.
///
/// Performance
/// -----------
/// - `append` copies the incoming batch into the circular storage; `get`
///   allocates one numpy array holding the stitched window.
///
/// Notes
/// -----
/// - Native Rust callers should use [`streaming::RingBuffer`] directly; this
///   type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_signals.types")]
pub struct RingBuffer {
    /// Underlying Rust ring buffer.
    pub inner: streaming::RingBuffer,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl RingBuffer {
    /// Create a buffer retaining the most recent `length` records.
    #[new]
    #[pyo3(text_signature = "(length, /)")]
    pub fn new(length: usize) -> PyResult<RingBuffer> {
        Ok(RingBuffer { inner: streaming::RingBuffer::new(length)? })
    }

    /// Append a batch of records; the leading axis indexes records.
    #[pyo3(text_signature = "(self, data, /)")]
    pub fn append<'py>(&mut self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<()> {
        let batch = extract_f64_array_dyn(py, data)?;
        self.inner.append(batch.as_array())?;
        Ok(())
    }

    /// The buffered window in chronological order, as a numpy array.
    #[pyo3(text_signature = "(self, /)")]
    pub fn get<'py>(&self, py: Python<'py>) -> Bound<'py, PyArrayDyn<f64>> {
        self.inner.get().into_pyarray(py)
    }

    /// Capacity in records.
    #[getter]
    pub fn length(&self) -> usize {
        self.inner.length()
    }

    /// Whether a write has wrapped at least once.
    #[getter]
    pub fn full(&self) -> bool {
        self.inner.is_full()
    }

    /// Next slot to write; the oldest record's position once full.
    #[getter]
    pub fn idx(&self) -> usize {
        self.inner.idx()
    }

    /// Number of records currently buffered.
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// _rust_signals — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_signals` Python module and register the `types`
/// submodule used by the public `rust_signals` package.
///
/// Key behaviors
/// -------------
/// - Create the `types` submodule and attach it to the parent module.
/// - Register the submodule in `sys.modules` so it is importable via a dotted
///   path from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_rust_signals`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_signals<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let types_mod = PyModule::new(_py, "types")?;
    types(_py, m, &types_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_signals.types", types_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn types<'py>(
    _py: Python, rust_signals: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Data>()?;
    m.add_class::<RingBuffer>()?;
    rust_signals.add_submodule(m)?;
    Ok(())
}
