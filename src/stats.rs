//! Per-day reductions over a reading matrix.
//!
//! A reading matrix is an `Array2<f64>` with one row per patient and one
//! column per day. Every function here aggregates down the patient axis and
//! returns a sequence with one entry per day. Negative readings are valid
//! input for these summaries; only normalisation rejects them.

use ndarray::{Array1, Array2, Axis};
use ndarray_stats::QuantileExt;

use crate::error::AnalysisError;

/// Mean inflammation per day across all patients.
///
/// # Arguments
///
/// * `data` - A 2D array with one row per patient and one column per day.
///
/// # Returns
///
/// A 1D array with one mean per day, or `AnalysisError::EmptyMatrix` when
/// the cohort has no patients.
pub fn daily_mean(data: &Array2<f64>) -> Result<Array1<f64>, AnalysisError> {
    data.mean_axis(Axis(0)).ok_or(AnalysisError::EmptyMatrix)
}

/// Maximum inflammation per day across all patients.
///
/// Fails with `AnalysisError::UndefinedOrder` if a NaN reading makes the
/// comparison for some day undefined.
pub fn daily_max(data: &Array2<f64>) -> Result<Array1<f64>, AnalysisError> {
    if data.nrows() == 0 {
        return Err(AnalysisError::EmptyMatrix);
    }

    let mut maxima = Array1::zeros(data.ncols());
    for (day, readings) in data.axis_iter(Axis(1)).enumerate() {
        maxima[day] = *readings
            .max()
            .map_err(|_| AnalysisError::UndefinedOrder { day })?;
    }
    Ok(maxima)
}

/// Minimum inflammation per day across all patients.
///
/// Fails with `AnalysisError::UndefinedOrder` if a NaN reading makes the
/// comparison for some day undefined.
pub fn daily_min(data: &Array2<f64>) -> Result<Array1<f64>, AnalysisError> {
    if data.nrows() == 0 {
        return Err(AnalysisError::EmptyMatrix);
    }

    let mut minima = Array1::zeros(data.ncols());
    for (day, readings) in data.axis_iter(Axis(1)).enumerate() {
        minima[day] = *readings
            .min()
            .map_err(|_| AnalysisError::UndefinedOrder { day })?;
    }
    Ok(minima)
}

/// Population standard deviation of inflammation per day across all patients.
pub fn daily_std_dev(data: &Array2<f64>) -> Result<Array1<f64>, AnalysisError> {
    if data.nrows() == 0 {
        return Err(AnalysisError::EmptyMatrix);
    }
    Ok(data.std_axis(Axis(0), 0.0))
}

/// For one patient, whether each day's reading exceeds `threshold`.
///
/// # Arguments
///
/// * `data` - A 2D array with one row per patient and one column per day.
/// * `patient` - Row index of the patient of interest.
/// * `threshold` - Reading above which a day counts as exceeding.
pub fn daily_above_threshold(
    data: &Array2<f64>,
    patient: usize,
    threshold: f64,
) -> Result<Array1<bool>, AnalysisError> {
    if patient >= data.nrows() {
        return Err(AnalysisError::PatientOutOfBounds {
            patient,
            patients: data.nrows(),
        });
    }

    Ok(data.row(patient).mapv(|reading| reading > threshold))
}
