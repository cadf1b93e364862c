//! container — self-describing data model for multi-dimensional signals.
//!
//! ## Purpose
//! Group the labeled-container surface in one place: the payload-plus-metadata
//! type handed between acquisition and processing stages, the axis label
//! representation and the validation errors raised on construction.
//!
//! ## Submodules
//! - `axes`: label collections attached to individual dimensions.
//! - `data`: the `SignalData` container and its override-based copy mechanism.
//! - `errors`: typed validation failures with `Display` and Python conversions.
//!
//! ## Downstream usage
//! - `use rust_signals::container::prelude::*;` pulls in the whole surface.
//! - The `streaming` module is independent of this one; the two meet in user
//!   code when buffered windows are wrapped into containers.

pub mod axes;
pub mod data;
pub mod errors;

// ---- Re-exports (primary public surface) ----
pub use axes::AxisLabels;
pub use data::{DataOverrides, SignalData};
pub use errors::{DataError, DataResult};

/// Convenience prelude for downstream code.
pub mod prelude {
    pub use super::axes::AxisLabels;
    pub use super::data::{DataOverrides, SignalData};
    pub use super::errors::{DataError, DataResult};
}
