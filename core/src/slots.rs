//! Upload slots.
//!
//! - [`SingleSlot`] holds at most one file and refuses a second one until
//!   the first is removed.
//! - [`MultiSlot`] holds an ordered list; new batches are appended.

use crate::error::{ValidationError, ValidationResult};
use crate::notice::{Notice, Notifier};
use crate::types::{FileHandle, SlotId, SlotKind, UploadSlot};
use crate::validator;

// =============================================================================
// Single-file slot
// =============================================================================

/// Slot that holds zero or one file.
#[derive(Clone, Debug)]
pub struct SingleSlot<F> {
    kind: SlotKind,
    entry: Option<UploadSlot<F>>,
}

impl<F: FileHandle> SingleSlot<F> {
    pub fn new(kind: SlotKind) -> Self {
        Self { kind, entry: None }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn get(&self) -> Option<&UploadSlot<F>> {
        self.entry.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.entry.is_some()
    }

    /// Store `file` if the slot is free and the file is supported.
    ///
    /// The occupied check runs first: an occupied slot never changes and
    /// always answers with the occupied notice.
    pub fn attach<N: Notifier + ?Sized>(
        &mut self,
        file: F,
        notifier: &N,
    ) -> ValidationResult<SlotId> {
        let result = self.try_attach(file);
        match &result {
            Ok(id) => {
                let name = self.entry.as_ref().map(|e| e.name()).unwrap_or_default();
                log::info!("📎 {} slot <- {} ({})", self.kind, name, id);
                notifier.notify(Notice::file_attached(name));
            }
            Err(err) => {
                log::warn!("⚠️ {} slot rejected file: {}", self.kind, err);
                notifier.notify(Notice::from(err));
            }
        }
        result
    }

    fn try_attach(&mut self, file: F) -> ValidationResult<SlotId> {
        if self.entry.is_some() {
            return Err(ValidationError::SlotOccupied { slot: self.kind });
        }
        validator::validate(&file)?;
        let entry = UploadSlot::new(file);
        let id = entry.id.clone();
        self.entry = Some(entry);
        Ok(id)
    }

    /// Empty the slot, returning what it held.
    pub fn detach(&mut self) -> Option<UploadSlot<F>> {
        let removed = self.entry.take();
        if let Some(entry) = &removed {
            log::info!("🗑️ {} slot cleared ({})", self.kind, entry.name());
        }
        removed
    }
}

// =============================================================================
// Multi-file slot
// =============================================================================

/// Ordered, unbounded list of files.
#[derive(Clone, Debug)]
pub struct MultiSlot<F> {
    entries: Vec<UploadSlot<F>>,
}

impl<F> Default for MultiSlot<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: FileHandle> MultiSlot<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[UploadSlot<F>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every supported file of the batch, in order.
    ///
    /// Each rejected file gets its own notice; accepted files are summarized
    /// by one count notice. Returns the number appended.
    pub fn attach_many<I, N>(&mut self, files: I, notifier: &N) -> usize
    where
        I: IntoIterator<Item = F>,
        N: Notifier + ?Sized,
    {
        let before = self.entries.len();
        for file in files {
            match validator::validate(&file) {
                Ok(()) => self.entries.push(UploadSlot::new(file)),
                Err(err) => {
                    log::warn!("⚠️ supporting files rejected: {}", err);
                    notifier.notify(Notice::from(&err));
                }
            }
        }

        let added = self.entries.len() - before;
        if added > 0 {
            log::info!("📎 {} supporting file(s) added, {} total", added, self.entries.len());
            notifier.notify(Notice::files_attached(added));
        }
        added
    }

    /// Remove the entry with `id`; the others keep their order.
    pub fn detach_one(&mut self, id: &SlotId) -> Option<UploadSlot<F>> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        let removed = self.entries.remove(index);
        log::info!("🗑️ supporting file removed ({})", removed.name());
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Severity;
    use crate::types::FileMeta;
    use std::cell::RefCell;

    fn file(name: &str) -> FileMeta {
        FileMeta::new(name, 1024)
    }

    #[test]
    fn test_single_attach_then_reject_duplicate() {
        let sink = RefCell::new(Vec::new());
        let mut slot = SingleSlot::new(SlotKind::Draft);

        let id = slot.attach(file("report.txt"), &sink).unwrap();
        let err = slot.attach(file("report.txt"), &sink).unwrap_err();

        assert_eq!(err, ValidationError::SlotOccupied { slot: SlotKind::Draft });
        assert_eq!(slot.get().unwrap().id, id);
        let notices = sink.into_inner();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Normal);
        assert_eq!(notices[1].title, "已有文件");
    }

    #[test]
    fn test_occupied_wins_over_bad_format() {
        let sink = RefCell::new(Vec::new());
        let mut slot = SingleSlot::new(SlotKind::Requirement);
        slot.attach(file("brief.pdf"), &sink).unwrap();

        let err = slot.attach(file("brief.exe"), &sink).unwrap_err();

        assert!(matches!(err, ValidationError::SlotOccupied { .. }));
        assert_eq!(slot.get().unwrap().name(), "brief.pdf");
        assert_eq!(sink.borrow().last().unwrap().title, "已有文件");
    }

    #[test]
    fn test_single_rejects_unsupported() {
        let sink = RefCell::new(Vec::new());
        let mut slot = SingleSlot::new(SlotKind::Requirement);

        assert!(slot.attach(file("brief.zip"), &sink).is_err());
        assert!(!slot.is_occupied());
        assert!(sink.borrow()[0].is_destructive());
    }

    #[test]
    fn test_detach_allows_same_name_again() {
        let sink = RefCell::new(Vec::new());
        let mut slot = SingleSlot::new(SlotKind::Draft);
        slot.attach(file("essay.docx"), &sink).unwrap();

        let removed = slot.detach().unwrap();
        assert_eq!(removed.name(), "essay.docx");
        assert!(slot.detach().is_none());
        assert!(slot.attach(file("essay.docx"), &sink).is_ok());
    }

    #[test]
    fn test_attach_many_mixed_batch() {
        let sink = RefCell::new(Vec::new());
        let mut slot = MultiSlot::new();
        slot.attach_many(vec![file("first.png")], &sink);
        sink.borrow_mut().clear();

        let added = slot.attach_many(
            vec![
                file("a.pdf"),
                file("bad.zip"),
                file("b.xlsx"),
                file("noext"),
                file("c.KEY"),
            ],
            &sink,
        );

        assert_eq!(added, 3);
        let names: Vec<_> = slot.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["first.png", "a.pdf", "b.xlsx", "c.KEY"]);

        let notices = sink.into_inner();
        let rejected = notices.iter().filter(|n| n.is_destructive()).count();
        assert_eq!(rejected, 2);
        assert_eq!(notices.last().unwrap(), &Notice::files_attached(3));
    }

    #[test]
    fn test_attach_many_all_invalid_has_no_summary() {
        let sink = RefCell::new(Vec::new());
        let mut slot: MultiSlot<FileMeta> = MultiSlot::new();

        assert_eq!(slot.attach_many(vec![file("x.gif"), file("y.mp4")], &sink), 0);
        assert!(slot.is_empty());
        assert!(sink.borrow().iter().all(|n| n.is_destructive()));
        assert_eq!(sink.borrow().len(), 2);
    }

    #[test]
    fn test_detach_one_keeps_order() {
        let sink = RefCell::new(Vec::new());
        let mut slot = MultiSlot::new();
        slot.attach_many(vec![file("a.pdf"), file("b.pdf"), file("c.pdf")], &sink);
        let middle = slot.entries()[1].id.clone();

        let removed = slot.detach_one(&middle).unwrap();

        assert_eq!(removed.name(), "b.pdf");
        let names: Vec<_> = slot.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["a.pdf", "c.pdf"]);
        assert!(slot.detach_one(&middle).is_none());
        assert_eq!(slot.len(), 2);
    }
}
