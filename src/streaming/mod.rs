//! streaming — constant-memory buffering for unbounded record streams.
//!
//! ## Purpose
//! House the online side of the crate: the circular buffer that turns an
//! endless sequence of incoming batches into a bounded, chronologically
//! ordered window, plus its failure modes.
//!
//! ## Submodules
//! - `ring`: the fixed-capacity `RingBuffer` over the leading record axis.
//! - `errors`: typed construction and append failures.
//!
//! ## Downstream usage
//! - `use rust_signals::streaming::prelude::*;` pulls in the whole surface.
//! - Windows read via `RingBuffer::get` are plain `ArrayD<f64>` values and can
//!   be wrapped into `container::SignalData` by the caller.

pub mod errors;
pub mod ring;

// ---- Re-exports (primary public surface) ----
pub use errors::{BufferError, BufferResult};
pub use ring::RingBuffer;

/// Convenience prelude for downstream code.
pub mod prelude {
    pub use super::errors::{BufferError, BufferResult};
    pub use super::ring::RingBuffer;
}
