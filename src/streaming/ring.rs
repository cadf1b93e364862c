//! ring — fixed-capacity circular buffer over the leading record axis.
//!
//! ## Purpose
//! Retain the most recent `length` records of an unbounded stream in constant
//! memory, so polling code can append arbitrarily sized batches and read back
//! a chronologically ordered window at any time.
//!
//! ## Key behaviors
//! - Storage is allocated lazily on the first non-empty append; that append
//!   fixes the per-record shape (everything after the leading axis) for the
//!   buffer's lifetime.
//! - Batches larger than the capacity are truncated to their most recent
//!   `length` records before writing; the dropped records are never stored.
//! - Writes reaching the end of storage wrap around to the front; `get`
//!   reassembles the window in chronological order regardless of where the
//!   write cursor sits.
//! - Appends validate before mutating: a rejected batch leaves contents,
//!   cursor and fill state untouched, and the buffer stays usable.
//!
//! ## Invariants & assumptions
//! - `0 <= idx < length` between calls; `idx` is the next slot to write and,
//!   once full, also the position of the oldest record.
//! - `full` flips to true on the first write that reaches slot `length` and
//!   never reverts; from then on the logical window always holds `length`
//!   records.
//! - A write wraps exactly when `idx + n >= length` for a post-truncation
//!   batch of `n` records, so an exactly-fitting batch takes the wrap path
//!   and leaves `idx` at 0.
//! - On a wrap, the first `l1 = length - idx` records fill the tail slots and
//!   the remaining `l2 = n - l1` overwrite the front.
//!
//! ## Conventions
//! - Records are `f64` arrays of arbitrary (possibly zero) dimensionality; a
//!   1-D batch streams scalar records.
//! - `get` on a buffer that never stored anything returns an empty 1-D array.
//!
//! ## Testing notes
//! - Unit tests walk partial fills, wraps, exact fits, oversized batches,
//!   shape rejections and multi-dimensional records against hand-computed
//!   windows.

use crate::streaming::errors::{BufferError, BufferResult};
use log::debug;
use ndarray::{concatenate, ArrayD, ArrayViewD, Axis, IxDyn, Slice};

/// Lazily allocated backing storage of a [`RingBuffer`].
///
/// The record shape is unknown until data arrives, so a fresh buffer sits in
/// `Uninitialized` until the first non-empty append allocates.
#[derive(Debug, Clone)]
enum BufferState {
    Uninitialized,
    Allocated(ArrayD<f64>),
}

/// Fixed-capacity circular buffer over the leading record axis.
///
/// ## Fields
/// - `length`: capacity in records, fixed at construction.
/// - `state`: lazily allocated storage of shape `[length, record_shape...]`.
/// - `full`: whether a write has wrapped at least once.
/// - `idx`: next slot to write, also the oldest record's position once full.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    length: usize,
    state: BufferState,
    full: bool,
    idx: usize,
}

impl RingBuffer {
    /// Create a buffer that retains the most recent `length` records.
    ///
    /// Storage is not allocated here; the first non-empty append fixes the
    /// record shape and allocates `[length, record_shape...]` in one piece.
    ///
    /// # Errors
    /// - `BufferError::ZeroCapacity` when `length` is 0.
    pub fn new(length: usize) -> BufferResult<RingBuffer> {
        if length == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(RingBuffer { length, state: BufferState::Uninitialized, full: false, idx: 0 })
    }

    /// Append a batch of records, overwriting the oldest data once full.
    ///
    /// The leading axis of `batch` indexes records; everything after it is the
    /// per-record shape. An empty batch is a no-op, even before the record
    /// shape is fixed. A batch larger than the capacity contributes only its
    /// most recent `length` records.
    ///
    /// # Arguments
    /// - `batch`: records to append, shaped `[n, record_shape...]`.
    ///
    /// # Errors
    /// - `BufferError::MissingRecordAxis` for a 0-dimensional `batch`.
    /// - `BufferError::RecordShapeMismatch` when the trailing shape differs
    ///   from the one fixed at first append; the buffer is left untouched.
    pub fn append(&mut self, batch: ArrayViewD<'_, f64>) -> BufferResult<()> {
        let n = match batch.shape().first() {
            Some(&n) => n,
            None => return Err(BufferError::MissingRecordAxis),
        };
        if n == 0 {
            return Ok(());
        }
        match &mut self.state {
            BufferState::Uninitialized => {
                let mut shape = Vec::with_capacity(batch.ndim());
                shape.push(self.length);
                shape.extend_from_slice(&batch.shape()[1..]);
                debug!(
                    "allocating ring buffer storage for {} records of shape {:?}",
                    self.length,
                    &shape[1..]
                );
                self.state = BufferState::Allocated(ArrayD::zeros(IxDyn(&shape)));
            }
            BufferState::Allocated(store) => {
                if store.shape()[1..] != batch.shape()[1..] {
                    return Err(BufferError::RecordShapeMismatch {
                        expected: store.shape()[1..].to_vec(),
                        actual: batch.shape()[1..].to_vec(),
                    });
                }
            }
        }

        // Oversized batches only ever contribute their most recent records.
        let start = n.saturating_sub(self.length);
        if start > 0 {
            debug!("batch of {n} records truncated to the most recent {}", self.length);
        }
        let batch = batch.slice_axis(Axis(0), Slice::from(start..));
        let n = n - start;

        let store = match &mut self.state {
            BufferState::Allocated(store) => store,
            BufferState::Uninitialized => unreachable!("storage was allocated above"),
        };
        if self.idx + n < self.length {
            store.slice_axis_mut(Axis(0), Slice::from(self.idx..self.idx + n)).assign(&batch);
            self.idx += n;
        } else {
            // The write reaches the end of storage: the first l1 records fill
            // the tail slots, the remaining l2 wrap around to the front.
            let l1 = self.length - self.idx;
            let l2 = n - l1;
            self.full = true;
            store
                .slice_axis_mut(Axis(0), Slice::from(self.length - l1..self.length))
                .assign(&batch.slice_axis(Axis(0), Slice::from(..l1)));
            store
                .slice_axis_mut(Axis(0), Slice::from(..l2))
                .assign(&batch.slice_axis(Axis(0), Slice::from(l1..)));
            self.idx = l2;
        }
        Ok(())
    }

    /// Read the buffered window in chronological order, oldest record first.
    ///
    /// Returns an owned array of shape `[len(), record_shape...]`. Before the
    /// buffer wraps this is a prefix of storage; afterwards it is the two
    /// storage segments around the write cursor stitched back together. A
    /// buffer that never stored anything returns an empty 1-D array.
    pub fn get(&self) -> ArrayD<f64> {
        match &self.state {
            BufferState::Uninitialized => ArrayD::zeros(IxDyn(&[0])),
            BufferState::Allocated(store) => {
                if self.full {
                    let oldest = store.slice_axis(Axis(0), Slice::from(self.idx..));
                    let newest = store.slice_axis(Axis(0), Slice::from(..self.idx));
                    concatenate(Axis(0), &[oldest, newest])
                        .expect("window segments share the record shape")
                } else {
                    store.slice_axis(Axis(0), Slice::from(..self.idx)).to_owned()
                }
            }
        }
    }

    /// Capacity in records.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of records currently buffered.
    pub fn len(&self) -> usize {
        if self.full {
            self.length
        } else {
            self.idx
        }
    }

    /// True while no record has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once a write has wrapped; from then on `len() == length()`.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Next slot to write; the oldest record's position once full.
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// Per-record shape fixed at first append, `None` before any data arrived.
    pub fn record_shape(&self) -> Option<&[usize]> {
        match &self.state {
            BufferState::Allocated(store) => Some(&store.shape()[1..]),
            BufferState::Uninitialized => None,
        }
    }
}
