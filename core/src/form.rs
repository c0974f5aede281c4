//! The QC form: three upload slots plus the submission flow.

use crate::error::{ValidationError, ValidationResult, WorkflowResult};
use crate::notice::Notifier;
use crate::slots::{MultiSlot, SingleSlot};
use crate::submission::Submission;
use crate::types::{FileHandle, SlotId, SlotKind, UploadSlot};

/// Everything the user has entered in one session.
#[derive(Clone, Debug)]
pub struct QcForm<F> {
    pub requirement: SingleSlot<F>,
    pub draft: SingleSlot<F>,
    pub supporting: MultiSlot<F>,
    pub submission: Submission,
}

impl<F: FileHandle> Default for QcForm<F> {
    fn default() -> Self {
        Self {
            requirement: SingleSlot::new(SlotKind::Requirement),
            draft: SingleSlot::new(SlotKind::Draft),
            supporting: MultiSlot::new(),
            submission: Submission::new(),
        }
    }
}

impl<F: FileHandle> QcForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one file to the slot of `kind`.
    ///
    /// `Supporting` is routed through [`MultiSlot::attach_many`] and yields
    /// no id; a rejected file is still an error.
    pub fn attach<N: Notifier + ?Sized>(
        &mut self,
        kind: SlotKind,
        file: F,
        notifier: &N,
    ) -> ValidationResult<Option<SlotId>> {
        match kind {
            SlotKind::Requirement => self.requirement.attach(file, notifier).map(Some),
            SlotKind::Draft => self.draft.attach(file, notifier).map(Some),
            SlotKind::Supporting => {
                let name = file.name().to_string();
                match self.supporting.attach_many(Some(file), notifier) {
                    0 => Err(ValidationError::UnsupportedFormat { name }),
                    _ => Ok(None),
                }
            }
        }
    }

    /// Clear a singleton slot.
    pub fn detach(&mut self, kind: SlotKind) -> Option<UploadSlot<F>> {
        match kind {
            SlotKind::Requirement => self.requirement.detach(),
            SlotKind::Draft => self.draft.detach(),
            SlotKind::Supporting => None,
        }
    }

    /// Open the nickname dialog if the form is complete.
    pub fn submit<N: Notifier + ?Sized>(&mut self, notifier: &N) -> WorkflowResult<()> {
        let has_requirement_file = self.requirement.is_occupied();
        let has_draft = self.draft.is_occupied();
        self.submission
            .submit(has_requirement_file, has_draft, notifier)
    }
}
