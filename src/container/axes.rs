//! axes — label collections attached to the dimensions of a signal container.

use ndarray::Array1;

/// Labels for one dimension of a `SignalData`.
///
/// Continuous dimensions (time, frequency) carry numeric labels; categorical
/// dimensions (channels, classes) carry textual ones. Mixing kinds across the
/// axes of a single container is expected and supported.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisLabels {
    /// Numeric labels, e.g. sample times in milliseconds or frequencies in hertz.
    Values(Array1<f64>),
    /// Textual labels, e.g. channel or class names.
    Names(Vec<String>),
}

impl AxisLabels {
    /// Number of labels. Must equal the length of the labeled dimension.
    pub fn len(&self) -> usize {
        match self {
            AxisLabels::Values(values) => values.len(),
            AxisLabels::Names(names) => names.len(),
        }
    }

    /// True when the axis carries no labels (a zero-length dimension).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for AxisLabels {
    fn from(values: Vec<f64>) -> AxisLabels {
        AxisLabels::Values(Array1::from(values))
    }
}

impl From<Array1<f64>> for AxisLabels {
    fn from(values: Array1<f64>) -> AxisLabels {
        AxisLabels::Values(values)
    }
}

impl From<Vec<String>> for AxisLabels {
    fn from(names: Vec<String>) -> AxisLabels {
        AxisLabels::Names(names)
    }
}

impl<'a> From<Vec<&'a str>> for AxisLabels {
    fn from(names: Vec<&'a str>) -> AxisLabels {
        AxisLabels::Names(names.into_iter().map(str::to_string).collect())
    }
}
