#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::container::axes::AxisLabels;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec/Array → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArrayDyn,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array_dyn<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArrayDyn<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArrayDyn<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArrayDyn<f64>>() {
            return Ok(series_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a float64 numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(Array1::from(vec).into_dyn().into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_axis_labels(raw_labels: &Bound<'_, PyAny>) -> PyResult<AxisLabels> {
    if let Ok(values) = raw_labels.extract::<PyReadonlyArray1<f64>>() {
        return Ok(AxisLabels::Values(values.as_array().to_owned()));
    }

    if let Ok(names) = raw_labels.extract::<Vec<String>>() {
        return Ok(AxisLabels::Names(names));
    }

    let values: Vec<f64> = raw_labels.extract().map_err(|_| {
        PyTypeError::new_err(
            "invalid axis labels (expected a 1-D float64 array, a sequence of floats, or a sequence of strings)",
        )
    })?;
    Ok(AxisLabels::Values(Array1::from(values)))
}

#[cfg(feature = "python-bindings")]
pub fn extract_axes(raw_axes: &Bound<'_, PyAny>) -> PyResult<Vec<AxisLabels>> {
    let entries: Vec<Bound<'_, PyAny>> = raw_axes.extract().map_err(|_| {
        PyTypeError::new_err("axes must be a sequence holding one label collection per dimension")
    })?;
    entries.iter().map(extract_axis_labels).collect()
}
