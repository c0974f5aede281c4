//! Browser-side services.
//!
//! # Services
//!
//! - [`files`] - `web_sys::File` handles and file-picker controls
//! - [`toaster`] - toast notifications (the workflow's notifier)
//! - [`generation`] - runs the simulated QC job on browser timers
//! - [`scroll`] - smooth scrolling and scroll position

pub mod files;
pub mod toaster;
pub mod generation;
pub mod scroll;

pub use files::*;
pub use toaster::*;
pub use generation::*;
pub use scroll::*;
