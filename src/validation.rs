//! Input validation for simulation runs.
//!
//! Checks the job list and unit count before any scheduling state is
//! created. Detects:
//! - Non-positive burst times
//! - A unit count of zero
//!
//! An empty job list is deliberately *not* an error: it yields an empty
//! summary with absent averages. All problems are collected and reported
//! together so the input layer can surface every bad row at once.

use std::error::Error;
use std::fmt;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job's burst time is zero (it must be strictly positive).
    InvalidBurstTime,
    /// The requested unit count is zero.
    InvalidUnitCount,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

/// Validates the input for one simulation run.
///
/// Checks:
/// 1. `num_units >= 1`
/// 2. Every job has `burst_time > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Example
/// ```
/// use schedsim::models::Job;
/// use schedsim::validation::validate_input;
///
/// let jobs = vec![Job::new(1, "J1").with_burst(4)];
/// assert!(validate_input(&jobs, 2).is_ok());
/// assert!(validate_input(&jobs, 0).is_err());
/// ```
pub fn validate_input(jobs: &[Job], num_units: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if num_units < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidUnitCount,
            "Unit count must be at least 1",
        ));
    }

    for job in jobs {
        if job.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Job '{}' (id {}) has zero burst time", job.name, job.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
