//! inflammation: statistical helpers for patient inflammation trial data.
//!
//! This crate provides the per-day reductions (mean, max, min, standard
//! deviation, threshold exceedance) and the row-wise patient normaliser
//! used to rescale each patient's series into [0, 1].
//!
//! The design favors small, pure, testable functions over `ndarray`
//! matrices with a single typed error enum; there is no I/O, no
//! configuration, and no shared state.
pub mod error;
pub mod preprocessing;
pub mod stats;
