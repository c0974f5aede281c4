//! Workflow configuration.
//!
//! Centralized constants for the QC upload flow. Everything here is fixed at
//! compile time; [`Timing`] bundles the progress-driver values so tests can
//! shorten or bound a run.

/// File extensions accepted by every upload slot (lowercase, no dot).
pub const SUPPORTED_FORMATS: &[&str] = &[
    "doc", "docx", "pdf", "txt", "pages", "ppt", "pptx", "key", "xls", "xlsx", "jpg", "jpeg",
    "png",
];

/// Interval between two progress polls, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 800;

/// Pause between reaching 100% and opening the report, in milliseconds.
pub const FINALIZE_DELAY_MS: u32 = 500;

/// Smallest simulated progress increment (inclusive).
pub const MIN_STEP: f64 = 5.0;

/// Largest simulated progress increment (exclusive).
pub const MAX_STEP: f64 = 20.0;

/// Polls allowed before a run is declared timed out.
///
/// The simulated job needs at most 21 polls.
pub const MAX_TICKS: u32 = 120;

/// Length of generated slot ids.
pub const ID_LENGTH: usize = 9;

/// Timing parameters for one generation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Delay before each poll
    pub tick_ms: u32,
    /// Delay after completion before the report opens
    pub finalize_delay_ms: u32,
    /// Upper bound on polls
    pub max_ticks: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_ms: TICK_INTERVAL_MS,
            finalize_delay_ms: FINALIZE_DELAY_MS,
            max_ticks: MAX_TICKS,
        }
    }
}
