//! Common types used across the workflow.
//!
//! # Categories
//!
//! - **File Types** - the [`FileHandle`] seam and the plain [`FileMeta`]
//! - **Slot Types** - [`SlotKind`], [`SlotId`], [`UploadSlot`]

use std::fmt;

use rand::Rng;

use crate::config::ID_LENGTH;

// =============================================================================
// File Types
// =============================================================================

/// A user-selected file, held by handle only.
///
/// The workflow never reads file contents; name and size are all it needs.
pub trait FileHandle {
    /// File name as reported by the picker
    fn name(&self) -> &str;
    /// Size in bytes
    fn size(&self) -> u64;
}

/// Plain file description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// File name
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl FileHandle for FileMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Format a byte count as megabytes with two decimals (`1.50 MB`).
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

// =============================================================================
// Slot Types
// =============================================================================

/// The three upload slots of the QC form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Assignment requirement (single file)
    Requirement,
    /// Completed draft (single file)
    Draft,
    /// Supporting material (any number of files)
    Supporting,
}

impl SlotKind {
    /// Label shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Requirement => "作业要求",
            SlotKind::Draft => "完成文稿",
            SlotKind::Supporting => "其他资料",
        }
    }

    /// Whether the picker for this slot allows several files.
    pub fn is_multiple(&self) -> bool {
        matches!(self, SlotKind::Supporting)
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Requirement => write!(f, "requirement"),
            SlotKind::Draft => write!(f, "draft"),
            SlotKind::Supporting => write!(f, "supporting"),
        }
    }
}

/// Locally generated removal key for an uploaded file.
///
/// Unique enough for one session; collisions are not checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(String);

impl SlotId {
    const ALPHABET: &'static [u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    /// Generate a random base-36 id.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..ID_LENGTH)
            .map(|_| Self::ALPHABET[rng.gen_range(0..Self::ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One accepted file plus its removal key.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSlot<F> {
    pub id: SlotId,
    pub file: F,
}

impl<F: FileHandle> UploadSlot<F> {
    pub fn new(file: F) -> Self {
        Self {
            id: SlotId::generate(&mut rand::thread_rng()),
            file,
        }
    }

    pub fn name(&self) -> &str {
        self.file.name()
    }

    /// Size for display, e.g. `0.25 MB`.
    pub fn size_label(&self) -> String {
        format_size_mb(self.file.size())
    }
}
