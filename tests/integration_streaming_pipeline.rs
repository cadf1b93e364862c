//! Integration tests for the streaming buffer and labeled containers.
//!
//! Purpose
//! -------
//! - Validate the end-to-end polling pipeline: batches of multi-channel
//!   records flow into a `RingBuffer`, windows are read back in
//!   chronological order, and the windows are wrapped into validated
//!   `SignalData` containers for downstream processing.
//! - Exercise realistic acquisition patterns (idle polls, bursts larger
//!   than the capacity, exact fills) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `streaming::ring::RingBuffer`:
//!   - Append/get across partial fills, wraps, truncation and recovery
//!     after a rejected batch, checked against a naive reference model.
//! - `container::data::SignalData`:
//!   - Construction from buffered windows with time and channel labels.
//!   - `copy_with` overrides and structural equality on derived containers.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of cursor arithmetic and error `Display`
//!   formatting — these are covered by unit tests.
//! - Python bindings and user-facing API wrappers — those are expected to
//!   be tested at a higher integration or system level.
use ndarray::{ArrayD, IxDyn};
use rust_signals::{
    container::{
        axes::AxisLabels,
        data::{DataOverrides, SignalData},
    },
    streaming::{errors::BufferError, ring::RingBuffer},
};

/// Purpose
/// -------
/// Construct a batch of consecutive multi-channel records whose values
/// encode their own chronology, so reordering bugs surface as value
/// mismatches rather than silent passes.
///
/// Parameters
/// ----------
/// - `first_record`: Global index of the batch's first record.
/// - `rows`: Number of records in the batch; zero yields an empty batch.
/// - `channels`: Number of channels per record; must be `> 0`.
///
/// Returns
/// -------
/// - A `[rows, channels]` array where record `t`, channel `c` holds
///   `t * 10 + c`.
///
/// Usage
/// -----
/// - Used by every pipeline test to stream a deterministic, globally
///   numbered record sequence through the buffer.
fn make_batch(first_record: usize, rows: usize, channels: usize) -> ArrayD<f64> {
    let mut flat = Vec::with_capacity(rows * channels);
    for t in first_record..first_record + rows {
        for c in 0..channels {
            flat.push(t as f64 * 10.0 + c as f64);
        }
    }
    ArrayD::from_shape_vec(IxDyn(&[rows, channels]), flat)
        .expect("row-major batch construction should match the requested shape")
}

/// Purpose
/// -------
/// Read a buffer's window back as plain per-record rows so tests can
/// compare it against a reference history kept as `Vec<Vec<f64>>`.
///
/// Returns
/// -------
/// - One vector per buffered record, oldest first; empty for a buffer
///   that never stored anything.
fn window_rows(buffer: &RingBuffer) -> Vec<Vec<f64>> {
    buffer.get().outer_iter().map(|record| record.iter().copied().collect()).collect()
}

#[test]
// Purpose
// -------
// Ensure the buffer tracks a naive "keep the last `capacity` records"
// reference model through a realistic polling sequence, including idle
// polls, a burst larger than the capacity and an exactly-filling batch.
//
// Given
// -----
// - A buffer of capacity 6 over 3-channel records.
// - Batch sizes [0, 2, 3, 1, 9, 0, 6, 4] streamed in order, with record
//   values numbered globally across batches.
// - A reference history accumulating every streamed record.
//
// Expect
// ------
// - After every append the window equals the last `capacity` records of
//   the history, in arrival order.
// - `len()` matches the reference window size and `is_full()` flips
//   exactly when the history reaches the capacity.
// - The final window has shape `[capacity, channels]`.
fn polling_loop_tracks_reference_window_across_wraps() {
    let capacity = 6;
    let channels = 3;
    let batch_sizes = [0usize, 2, 3, 1, 9, 0, 6, 4];

    let mut buffer = RingBuffer::new(capacity).expect("RingBuffer::new should accept capacity 6");
    let mut history: Vec<Vec<f64>> = Vec::new();
    let mut next_record = 0;

    for &rows in &batch_sizes {
        let batch = make_batch(next_record, rows, channels);
        next_record += rows;
        for record in batch.outer_iter() {
            history.push(record.iter().copied().collect());
        }

        buffer.append(batch.view()).expect("well-shaped appends should succeed");

        let expected: Vec<Vec<f64>> = history[history.len().saturating_sub(capacity)..].to_vec();
        assert_eq!(window_rows(&buffer), expected);
        assert_eq!(buffer.len(), expected.len());
        assert_eq!(buffer.is_full(), history.len() >= capacity);
    }

    assert!(buffer.is_full());
    assert_eq!(buffer.get().shape(), &[capacity, channels]);
}

#[test]
// Purpose
// -------
// Verify that a buffered window can be wrapped into a validated labeled
// container and re-labeled via `copy_with` without touching the payload.
//
// Given
// -----
// - A buffer of capacity 4 over 2-channel records, fed 7 records at a
//   nominal 10 ms period so the window holds records 3..=6.
// - A `SignalData` built from the window with millisecond time labels
//   and channel names.
// - A copy overriding the time labels and units to seconds.
//
// Expect
// ------
// - Container construction succeeds and the payload corners carry the
//   expected record values.
// - The rescaled copy differs structurally from the snapshot while
//   sharing an equal payload, names and channel labels.
fn buffered_window_feeds_labeled_containers() {
    let capacity = 4;
    let channels = 2;
    let mut buffer = RingBuffer::new(capacity).expect("RingBuffer::new should accept capacity 4");
    buffer.append(make_batch(0, 3, channels).view()).expect("first batch should append");
    buffer.append(make_batch(3, 4, channels).view()).expect("second batch should append");

    // Seven records streamed; the window holds records 3..=6.
    let window = buffer.get();
    assert_eq!(window.shape(), &[capacity, channels]);

    let times: Vec<f64> = (3..7).map(|t| t as f64 * 10.0).collect();
    let snapshot = SignalData::new(
        window,
        vec![AxisLabels::from(times), AxisLabels::from(vec!["c1", "c2"])],
        vec!["time".to_string(), "channel".to_string()],
        vec!["ms".to_string(), "#".to_string()],
    )
    .expect("window metadata should validate against the window shape");

    assert_eq!(snapshot.shape(), &[4, 2]);
    assert_eq!(snapshot.data[[0, 0]], 30.0);
    assert_eq!(snapshot.data[[3, 1]], 61.0);

    let rescaled = snapshot.copy_with(
        DataOverrides::new()
            .axes(vec![
                AxisLabels::from(vec![0.003, 0.004, 0.005, 0.006]),
                AxisLabels::from(vec!["c1", "c2"]),
            ])
            .units(vec!["s".to_string(), "#".to_string()]),
    );
    assert_ne!(rescaled, snapshot);
    assert_eq!(rescaled.data, snapshot.data);
    assert_eq!(rescaled.units, vec!["s", "#"]);
    assert_eq!(rescaled.names, snapshot.names);
}

#[test]
// Purpose
// -------
// Confirm that a malformed batch arriving mid-stream is rejected without
// disturbing the buffered window, and that the stream recovers once
// well-shaped batches resume.
//
// Given
// -----
// - A buffer of capacity 5 over 2-channel records, fed 3 records.
// - A malformed batch of 4-channel records.
// - A well-shaped 4-record batch streamed after the rejection.
//
// Expect
// ------
// - The malformed append returns `RecordShapeMismatch` naming both
//   shapes and the window is unchanged.
// - The recovery batch fills the buffer; the final window spans records
//   2..=6 in order.
fn shape_rejection_mid_stream_preserves_window() {
    let capacity = 5;
    let channels = 2;
    let mut buffer = RingBuffer::new(capacity).expect("RingBuffer::new should accept capacity 5");
    buffer.append(make_batch(0, 3, channels).view()).expect("initial batch should append");
    let before = window_rows(&buffer);

    let malformed = make_batch(3, 2, 4);
    match buffer.append(malformed.view()) {
        Err(BufferError::RecordShapeMismatch { expected, actual }) => {
            assert_eq!(expected, vec![2]);
            assert_eq!(actual, vec![4]);
        }
        other => panic!("expected RecordShapeMismatch, got {other:?}"),
    }
    assert_eq!(window_rows(&buffer), before);

    buffer.append(make_batch(3, 4, channels).view()).expect("recovery batch should append");
    assert!(buffer.is_full());
    let rows = window_rows(&buffer);
    assert_eq!(rows.len(), capacity);
    assert_eq!(rows[0], vec![20.0, 21.0]);
    assert_eq!(rows[4], vec![60.0, 61.0]);
}
