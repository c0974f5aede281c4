//! UI Components for the AI QC landing page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Navigation`] - Sticky top bar with section links
//! - [`Hero`] - Headline, highlights and stats
//! - [`Introduction`] - Feature cards and closing call to action
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`QcSection`] - Upload form and submission flow
//! - [`SingleUploadBox`] / [`MultiUploadBox`] - File drop areas
//! - [`InfoDialog`], [`GeneratingDialog`], [`FailedDialog`], [`ReportDialog`] - Flow dialogs
//! - [`ToastStack`] - On-screen notices

mod navigation;
mod hero;
mod qc;
mod upload_box;
mod dialogs;
mod introduction;
mod footer;
mod toast;

pub use navigation::*;
pub use hero::*;
pub use qc::*;
pub use upload_box::*;
pub use dialogs::*;
pub use introduction::*;
pub use footer::*;
pub use toast::*;
