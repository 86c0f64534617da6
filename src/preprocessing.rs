//! Row-wise normalisation of reading matrices.
//!
//! Rescales each patient's series so its maximum maps to 1.0, preserving
//! relative proportions within the row. Negative readings are invalid
//! domain data here and are rejected before any arithmetic runs.

use ndarray::{Array2, Axis};

use crate::error::AnalysisError;

/// Normalise each patient row of a reading matrix to the [0, 1] range.
///
/// Each row is divided by its own maximum. Rows whose maximum is 0 (a
/// patient with no nonzero readings) come back as all zeros rather than
/// dividing by zero. Values that land below 0 after division are clipped
/// to 0; nothing is clipped above 1 since the row maximum maps exactly
/// to 1.0.
///
/// # Arguments
///
/// * `data` - A 2D array with one row per patient and one column per day.
///
/// # Returns
///
/// A freshly allocated matrix of the same shape, or
/// `AnalysisError::NegativeReading` naming the first offending element if
/// any reading is negative. The input is never mutated.
pub fn patient_normalise(data: &Array2<f64>) -> Result<Array2<f64>, AnalysisError> {
    for ((patient, day), &value) in data.indexed_iter() {
        if value < 0.0 {
            return Err(AnalysisError::NegativeReading { patient, day, value });
        }
    }

    log::debug!(
        "normalising {} patients over {} days",
        data.nrows(),
        data.ncols()
    );

    let mut normalised = data.clone();
    if normalised.ncols() == 0 {
        return Ok(normalised);
    }

    for (patient, mut row) in normalised.axis_iter_mut(Axis(0)).enumerate() {
        let row_max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if row_max <= 0.0 {
            log::warn!("patient {} has no nonzero readings, row left at zero", patient);
            row.fill(0.0);
            continue;
        }

        row.mapv_inplace(|value| {
            let scaled = value / row_max;
            if scaled < 0.0 {
                0.0
            } else {
                scaled
            }
        });
    }

    Ok(normalised)
}
