use std::error::Error;
use std::fmt;

/// Custom error type for analysis failures over a reading matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The matrix has no patient rows, so the reduction is undefined.
    EmptyMatrix,
    /// A NaN reading left the ordering for a day undefined.
    UndefinedOrder { day: usize },
    /// A patient index past the end of the cohort.
    PatientOutOfBounds { patient: usize, patients: usize },
    /// A negative reading, which is invalid domain data for normalisation.
    NegativeReading {
        patient: usize,
        day: usize,
        value: f64,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::EmptyMatrix => {
                write!(f, "Reading matrix has no patient rows")
            }
            AnalysisError::UndefinedOrder { day } => {
                write!(f, "NaN reading on day {} leaves the ordering undefined", day)
            }
            AnalysisError::PatientOutOfBounds { patient, patients } => {
                write!(
                    f,
                    "Patient index {} out of bounds for a cohort of {}",
                    patient, patients
                )
            }
            AnalysisError::NegativeReading { patient, day, value } => {
                write!(
                    f,
                    "Negative reading {} for patient {} on day {}",
                    value, patient, day
                )
            }
        }
    }
}

impl Error for AnalysisError {}
