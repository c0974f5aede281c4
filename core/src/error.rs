//! Error types for the QC workflow.
//!
//! - [`ValidationError`] - rejected user input (files, missing fields)
//! - [`JobError`] - failures of a generation run
//! - [`WorkflowError`] - top-level wrapper, adds phase-transition errors
//!
//! Every validation failure is recovered locally: the caller shows the
//! matching notice and the state stays where it was.

use thiserror::Error;

use crate::types::SlotKind;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors caused by user input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Extension missing or not in the allow-list.
    #[error("Unsupported file format: {name}")]
    UnsupportedFormat { name: String },

    /// A singleton slot already holds a file.
    #[error("Slot '{slot}' already holds a file")]
    SlotOccupied { slot: SlotKind },

    /// Neither a requirement file nor requirement text.
    #[error("Missing assignment requirement")]
    MissingRequirement,

    /// No completed draft uploaded.
    #[error("Missing completed draft")]
    MissingDraft,

    /// Nickname empty after trimming.
    #[error("Missing nickname")]
    MissingNickname,
}

// =============================================================================
// Job Errors
// =============================================================================

/// Errors from a generation run.
///
/// The simulated source never produces these; a real status source would.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum JobError {
    /// Files could not be handed over.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// The source did not finish within the poll budget.
    #[error("Analysis timed out after {ticks} polls")]
    Timeout { ticks: u32 },

    /// The analysis itself failed.
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    /// The report was produced but could not be delivered.
    #[error("Report delivery failed: {0}")]
    ReportDelivery(String),
}

// =============================================================================
// Workflow Errors (top-level)
// =============================================================================

/// Top-level workflow error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Generation run error.
    #[error("Job error: {0}")]
    Job(#[from] JobError),

    /// Action not allowed in the current phase.
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        phase: &'static str,
        action: &'static str,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for generation runs.
pub type JobResult<T> = Result<T, JobError>;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let err: WorkflowError = ValidationError::MissingDraft.into();
        assert!(err.to_string().contains("completed draft"));

        let err: WorkflowError = JobError::Timeout { ticks: 3 }.into();
        assert!(err.to_string().contains("3 polls"));
    }

    #[test]
    fn test_unsupported_format_names_file() {
        let err = ValidationError::UnsupportedFormat {
            name: "virus.exe".into(),
        };
        assert!(err.to_string().contains("virus.exe"));
    }
}
