//! # AI QC - upload and submission workflow
//!
//! Platform-independent logic behind the QC upload form: file validation,
//! upload slots, the submission state machine and the (simulated) progress
//! driver. Nothing here touches the browser; the Leptos frontend wires these
//! types to signals, file inputs and timers.
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ file picks │───▶│ validator  │───▶│    slots     │───▶│ submission  │
//! │ (handles)  │    │ (ext list) │    │ (1, 1, many) │    │ (phases)    │
//! └────────────┘    └────────────┘    └──────────────┘    └──────┬──────┘
//!                                                                │ ticket
//!                                                         ┌──────▼──────┐
//!                                                         │  progress   │
//!                                                         │  (drive)    │
//!                                                         └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Compile-time constants and [`Timing`]
//! - [`error`] - Error hierarchy
//! - [`types`] - File handles, slot ids
//! - [`notice`] - Notices and the [`Notifier`] seam
//! - [`validator`] - Extension allow-list
//! - [`slots`] - Single and multi-file slots
//! - [`submission`] - Submission state machine
//! - [`progress`] - Status sources and the run loop
//! - [`form`] - The whole form

pub mod config;
pub mod error;
pub mod types;

pub mod notice;
pub mod validator;

pub mod slots;
pub mod submission;
pub mod form;

pub mod progress;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::Timing;

pub use error::{
    JobError, JobResult, ValidationError, ValidationResult, WorkflowError, WorkflowResult,
};

pub use types::{format_size_mb, FileHandle, FileMeta, SlotId, SlotKind, UploadSlot};

pub use notice::{LogNotifier, Notice, Notifier, Severity};

pub use validator::{accept_attribute, formats_hint, is_supported};

pub use slots::{MultiSlot, SingleSlot};

pub use submission::{GenerationTicket, Phase, Submission};

pub use form::QcForm;

pub use progress::{drive, CancelToken, JobStatus, RunOutcome, SimulatedJob, StatusSource};
