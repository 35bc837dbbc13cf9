//! Input validation for sequencing problems.
//!
//! Checks structural integrity of jobs and machines before any search
//! state is built. Detects:
//! - Missing job identifiers
//! - Non-positive processing times
//! - Total processing time beyond the `i64` range
//! - Machine references that do not match a configured machine
//! - Duplicate or absent machines
//!
//! Every problem found is reported, not just the first one.

use crate::models::{Job, Machine};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job has an empty identifier.
    MissingId,
    /// A job's processing time is zero or negative.
    NonPositiveProcessingTime,
    /// A job references a machine that isn't configured.
    InvalidMachineReference,
    /// Two machines share the same ID.
    DuplicateId,
    /// Jobs were supplied but no machine is configured.
    NoMachines,
    /// The processing times do not fit in one `i64` sum.
    ProcessingTimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a sequencing problem.
///
/// Checks:
/// 1. No duplicate machine IDs
/// 2. At least one machine when there are jobs
/// 3. Every job has a non-empty ID
/// 4. Every processing time is positive
/// 5. Every job's machine ID names a configured machine
/// 6. The processing times sum without overflow, so every start, end and
///    cost derived from them is representable
///
/// An empty job list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], machines: &[Machine]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut machine_ids = HashSet::new();
    for m in machines {
        if !machine_ids.insert(m.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate machine ID: {}", m.id),
            ));
        }
    }

    if machines.is_empty() && !jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            format!("{} job(s) supplied but no machines configured", jobs.len()),
        ));
    }

    for (position, job) in jobs.iter().enumerate() {
        if job.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Job at position {position} has no id"),
            ));
        }

        if job.processing_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveProcessingTime,
                format!(
                    "Job '{}' has non-positive processing time {}",
                    job.id, job.processing_time
                ),
            ));
        }

        if !machines.is_empty() && !machine_ids.contains(&job.machine_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMachineReference,
                format!(
                    "Job '{}' references unknown machine {}",
                    job.id, job.machine_id
                ),
            ));
        }
    }

    let total = jobs
        .iter()
        .filter(|job| job.processing_time > 0)
        .try_fold(0_i64, |sum, job| sum.checked_add(job.processing_time));
    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ProcessingTimeOverflow,
            format!(
                "Total processing time of {} job(s) exceeds {}",
                jobs.len(),
                i64::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
