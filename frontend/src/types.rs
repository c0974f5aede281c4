//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - on-screen notices
//! - **File Types** - display summaries of uploaded files
//! - **Layout Types** - scroll targets shared between sections

use aiqc::{FileHandle, Notice, SlotId, UploadSlot};
use leptos::{create_node_ref, html, NodeRef};

// =============================================================================
// Toast Types
// =============================================================================

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    /// Session-unique key
    pub id: u64,
    pub notice: Notice,
}

impl ToastEntry {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> String {
        format!("toast {}", self.notice.severity.css_class())
    }
}

// =============================================================================
// File Types
// =============================================================================

/// What the upload boxes display for one file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub id: SlotId,
    pub name: String,
    /// e.g. `1.25 MB`
    pub size: String,
}

impl<F: FileHandle> From<&UploadSlot<F>> for FileSummary {
    fn from(slot: &UploadSlot<F>) -> Self {
        Self {
            id: slot.id.clone(),
            name: slot.name().to_string(),
            size: slot.size_label(),
        }
    }
}

// =============================================================================
// Layout Types
// =============================================================================

/// Sections that other components scroll to.
///
/// Created once by the page layout and handed down, so no component has to
/// look an element up by id.
#[derive(Clone, Copy)]
pub struct SectionRefs {
    pub qc: NodeRef<html::Section>,
    pub introduction: NodeRef<html::Section>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            qc: create_node_ref(),
            introduction: create_node_ref(),
        }
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiqc::FileMeta;

    #[test]
    fn test_file_summary_from_slot() {
        let slot = UploadSlot::new(FileMeta::new("thesis.pdf", 3 * 1024 * 1024));
        let summary = FileSummary::from(&slot);
        assert_eq!(summary.name, "thesis.pdf");
        assert_eq!(summary.size, "3.00 MB");
        assert_eq!(summary.id, slot.id);
    }

    #[test]
    fn test_toast_css_class() {
        let entry = ToastEntry {
            id: 1,
            notice: Notice::destructive("t", "d"),
        };
        assert_eq!(entry.css_class(), "toast toast-destructive");
    }
}
