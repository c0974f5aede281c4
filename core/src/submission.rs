//! Submission state machine.
//!
//! ```text
//!   Idle ──submit──▶ InfoCapture ──confirm──▶ Generating ──complete──▶ ReportReady
//!    ▲                  │                      │      │                   │
//!    └────close_info────┘   ◀─cancel_generation┘      fail                │
//!    ▲                                                 ▼                  │
//!    ├──────────────dismiss_failure────────────── Failed ──retry─▶ Generating
//!    └─────────────────────────close_report───────────────────────────────┘
//! ```
//!
//! Each generation run is identified by a [`GenerationTicket`]. Progress and
//! completion updates carry the ticket and are dropped once the run has been
//! cancelled or replaced, so a late timer callback cannot touch the state.

use crate::error::{JobError, ValidationError, WorkflowError, WorkflowResult};
use crate::notice::{Notice, Notifier};

/// Phase of the submission flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Form editable, no dialog open
    Idle,
    /// Nickname dialog open
    InfoCapture,
    /// Progress dialog open, a run is in flight
    Generating,
    /// The last run failed; retry or dismiss
    Failed(JobError),
    /// Report dialog open
    ReportReady,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::InfoCapture => "capturing info",
            Phase::Generating => "generating",
            Phase::Failed(_) => "failed",
            Phase::ReportReady => "showing the report",
        }
    }
}

/// Identity of one generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// Per-session submission state.
#[derive(Clone, Debug)]
pub struct Submission {
    /// Free-form assignment requirement
    pub requirement_text: String,
    /// Nickname used to match the delivered report
    pub nickname: String,
    phase: Phase,
    progress: f64,
    has_completed: bool,
    runs: u64,
    active: Option<GenerationTicket>,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            requirement_text: String::new(),
            nickname: String::new(),
            phase: Phase::Idle,
            progress: 0.0,
            has_completed: false,
            runs: 0,
            active: None,
        }
    }
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Progress of the current or last run, in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Sticky for the session once a run has completed.
    pub fn has_completed(&self) -> bool {
        self.has_completed
    }

    pub fn has_requirement_text(&self) -> bool {
        !self.requirement_text.trim().is_empty()
    }

    pub fn has_nickname(&self) -> bool {
        !self.nickname.trim().is_empty()
    }

    /// Whether `ticket` belongs to the run in flight.
    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.active == Some(ticket) && self.phase == Phase::Generating
    }

    fn invalid(&self, action: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            phase: self.phase.name(),
            action,
        }
    }

    /// Idle → InfoCapture.
    ///
    /// Needs a requirement (file or text) and a completed draft. The first
    /// missing item is reported and the phase stays Idle.
    pub fn submit<N: Notifier + ?Sized>(
        &mut self,
        has_requirement_file: bool,
        has_draft: bool,
        notifier: &N,
    ) -> WorkflowResult<()> {
        if self.phase != Phase::Idle {
            return Err(self.invalid("submit"));
        }

        let missing = if !has_requirement_file && !self.has_requirement_text() {
            Some(ValidationError::MissingRequirement)
        } else if !has_draft {
            Some(ValidationError::MissingDraft)
        } else {
            None
        };
        if let Some(err) = missing {
            log::warn!("⚠️ submit refused: {}", err);
            notifier.notify(Notice::from(&err));
            return Err(err.into());
        }

        log::info!("📝 submission accepted, asking for nickname");
        self.phase = Phase::InfoCapture;
        Ok(())
    }

    /// InfoCapture → Idle.
    pub fn close_info(&mut self) {
        if self.phase == Phase::InfoCapture {
            self.phase = Phase::Idle;
        }
    }

    /// InfoCapture → Generating, once a nickname is present.
    pub fn confirm<N: Notifier + ?Sized>(
        &mut self,
        notifier: &N,
    ) -> WorkflowResult<GenerationTicket> {
        if self.phase != Phase::InfoCapture {
            return Err(self.invalid("confirm"));
        }
        if !self.has_nickname() {
            let err = ValidationError::MissingNickname;
            log::warn!("⚠️ confirm refused: {}", err);
            notifier.notify(Notice::from(&err));
            return Err(err.into());
        }
        Ok(self.start_run())
    }

    /// Failed → Generating with a fresh ticket.
    pub fn retry(&mut self) -> WorkflowResult<GenerationTicket> {
        match self.phase {
            Phase::Failed(_) => Ok(self.start_run()),
            _ => Err(self.invalid("retry")),
        }
    }

    fn start_run(&mut self) -> GenerationTicket {
        self.runs += 1;
        let ticket = GenerationTicket(self.runs);
        self.active = Some(ticket);
        self.progress = 0.0;
        self.phase = Phase::Generating;
        log::info!("🚀 generation run #{} started for '{}'", self.runs, self.nickname.trim());
        ticket
    }

    /// Raise progress for the current run. Never lowers it.
    ///
    /// Returns `false` when the ticket is stale.
    pub fn record_progress(&mut self, ticket: GenerationTicket, value: f64) -> bool {
        if !self.is_current(ticket) {
            log::debug!("ignoring progress {:.0} from stale run {:?}", value, ticket);
            return false;
        }
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
        self.progress = self.progress.max(value);
        true
    }

    /// Generating → ReportReady, once progress has reached 100.
    pub fn complete(&mut self, ticket: GenerationTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        if self.progress < 100.0 {
            log::warn!("⚠️ completion before 100% ignored ({:.0}%)", self.progress);
            return false;
        }
        self.active = None;
        self.has_completed = true;
        self.phase = Phase::ReportReady;
        log::info!("✅ report ready");
        true
    }

    /// Generating → Failed.
    pub fn fail<N: Notifier + ?Sized>(
        &mut self,
        ticket: GenerationTicket,
        error: JobError,
        notifier: &N,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        log::error!("❌ generation failed: {}", error);
        notifier.notify(Notice::from(&error));
        self.active = None;
        self.phase = Phase::Failed(error);
        true
    }

    /// Generating → Idle. Invalidates the run's ticket.
    pub fn cancel_generation(&mut self) -> bool {
        if self.phase != Phase::Generating {
            return false;
        }
        log::info!("🚫 generation cancelled at {:.0}%", self.progress);
        self.active = None;
        self.progress = 0.0;
        self.phase = Phase::Idle;
        true
    }

    /// Failed → Idle.
    pub fn dismiss_failure(&mut self) {
        if matches!(self.phase, Phase::Failed(_)) {
            self.progress = 0.0;
            self.phase = Phase::Idle;
        }
    }

    /// Reopen the report dialog after a completed run.
    pub fn view_report(&mut self) -> bool {
        if self.has_completed && self.phase == Phase::Idle {
            self.phase = Phase::ReportReady;
            true
        } else {
            false
        }
    }

    /// ReportReady → Idle.
    pub fn close_report(&mut self) {
        if self.phase == Phase::ReportReady {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ready_for_info() -> Submission {
        let mut sub = Submission::new();
        sub.requirement_text = "Write 2000 words".into();
        sub.submit(false, true, &RefCell::new(Vec::new())).unwrap();
        sub
    }

    fn generating() -> (Submission, GenerationTicket) {
        let mut sub = ready_for_info();
        sub.nickname = "小明".into();
        let ticket = sub.confirm(&RefCell::new(Vec::new())).unwrap();
        (sub, ticket)
    }

    #[test]
    fn test_submit_requires_requirement() {
        let sink = RefCell::new(Vec::new());
        let mut sub = Submission::new();
        sub.requirement_text = "   ".into();

        let err = sub.submit(false, true, &sink).unwrap_err();

        assert_eq!(err, WorkflowError::from(ValidationError::MissingRequirement));
        assert_eq!(sub.phase(), &Phase::Idle);
        assert_eq!(sink.borrow()[0].title, "请添加作业要求");
    }

    #[test]
    fn test_missing_requirement_is_reported_before_missing_draft() {
        let sink = RefCell::new(Vec::new());
        let mut sub = Submission::new();

        let err = sub.submit(false, false, &sink).unwrap_err();

        assert_eq!(err, WorkflowError::from(ValidationError::MissingRequirement));
        assert_eq!(sub.phase(), &Phase::Idle);
        assert_eq!(sink.borrow().len(), 1);
        assert_eq!(sink.borrow()[0].title, "请添加作业要求");
    }

    #[test]
    fn test_submit_requires_draft() {
        let sink = RefCell::new(Vec::new());
        let mut sub = Submission::new();

        let err = sub.submit(true, false, &sink).unwrap_err();

        assert_eq!(err, WorkflowError::from(ValidationError::MissingDraft));
        assert_eq!(sub.phase(), &Phase::Idle);
        assert_eq!(sink.borrow().len(), 1);
        assert_eq!(sink.borrow()[0].title, "请上传完成文稿");
    }

    #[test]
    fn test_submit_with_requirement_file_or_text() {
        let sink = RefCell::new(Vec::new());
        let mut sub = Submission::new();
        sub.submit(true, true, &sink).unwrap();
        assert_eq!(sub.phase(), &Phase::InfoCapture);

        let sub = ready_for_info();
        assert_eq!(sub.phase(), &Phase::InfoCapture);
        assert!(sink.borrow().is_empty());
    }

    #[test]
    fn test_empty_nickname_keeps_info_capture() {
        let sink = RefCell::new(Vec::new());
        let mut sub = ready_for_info();
        sub.nickname = " \t".into();

        let err = sub.confirm(&sink).unwrap_err();

        assert_eq!(err, WorkflowError::from(ValidationError::MissingNickname));
        assert_eq!(sub.phase(), &Phase::InfoCapture);
        assert_eq!(sink.borrow()[0].title, "请填写昵称");
    }

    #[test]
    fn test_close_info_returns_to_idle() {
        let mut sub = ready_for_info();
        sub.close_info();
        assert_eq!(sub.phase(), &Phase::Idle);
    }

    #[test]
    fn test_confirm_outside_info_capture_is_rejected() {
        let mut sub = Submission::new();
        sub.nickname = "a".into();
        let err = sub.confirm(&RefCell::new(Vec::new())).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { action: "confirm", .. }));
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let (mut sub, ticket) = generating();
        assert_eq!(sub.progress(), 0.0);

        assert!(sub.record_progress(ticket, 40.0));
        assert!(sub.record_progress(ticket, 25.0));
        assert_eq!(sub.progress(), 40.0);

        sub.record_progress(ticket, 180.0);
        assert_eq!(sub.progress(), 100.0);
    }

    #[test]
    fn test_complete_only_at_100() {
        let (mut sub, ticket) = generating();
        sub.record_progress(ticket, 99.0);
        assert!(!sub.complete(ticket));
        assert_eq!(sub.phase(), &Phase::Generating);
        assert!(!sub.has_completed());

        sub.record_progress(ticket, 100.0);
        assert!(sub.complete(ticket));
        assert_eq!(sub.phase(), &Phase::ReportReady);
        assert!(sub.has_completed());
    }

    #[test]
    fn test_cancelled_ticket_cannot_mutate() {
        let (mut sub, ticket) = generating();
        sub.record_progress(ticket, 30.0);
        assert!(sub.cancel_generation());
        assert_eq!(sub.phase(), &Phase::Idle);

        assert!(!sub.record_progress(ticket, 100.0));
        assert!(!sub.complete(ticket));
        assert_eq!(sub.progress(), 0.0);
        assert_eq!(sub.phase(), &Phase::Idle);
    }

    #[test]
    fn test_old_ticket_ignored_after_new_run() {
        let (mut sub, old) = generating();
        sub.cancel_generation();
        sub.submit(false, true, &RefCell::new(Vec::new())).unwrap();
        let new = sub.confirm(&RefCell::new(Vec::new())).unwrap();

        assert_ne!(old, new);
        assert!(!sub.record_progress(old, 90.0));
        assert!(sub.record_progress(new, 10.0));
        assert_eq!(sub.progress(), 10.0);
    }

    #[test]
    fn test_failure_then_retry() {
        let sink = RefCell::new(Vec::new());
        let (mut sub, ticket) = generating();

        assert!(sub.fail(ticket, JobError::Timeout { ticks: 120 }, &sink));
        assert_eq!(sub.phase(), &Phase::Failed(JobError::Timeout { ticks: 120 }));
        assert_eq!(sink.borrow()[0].title, "检测超时");
        assert!(!sub.record_progress(ticket, 50.0));

        let retry = sub.retry().unwrap();
        assert_ne!(retry, ticket);
        assert_eq!(sub.phase(), &Phase::Generating);
    }

    #[test]
    fn test_dismiss_failure() {
        let (mut sub, ticket) = generating();
        sub.fail(ticket, JobError::Upload("offline".into()), &RefCell::new(Vec::new()));
        sub.dismiss_failure();
        assert_eq!(sub.phase(), &Phase::Idle);
        assert!(sub.retry().is_err());
    }

    #[test]
    fn test_view_report_is_sticky() {
        let mut idle = Submission::new();
        assert!(!idle.view_report());

        let (mut sub, ticket) = generating();
        sub.record_progress(ticket, 100.0);
        sub.complete(ticket);
        sub.close_report();
        assert_eq!(sub.phase(), &Phase::Idle);

        assert!(sub.view_report());
        assert_eq!(sub.phase(), &Phase::ReportReady);
        sub.close_report();

        // a second submission is allowed and keeps the flag
        sub.submit(false, true, &RefCell::new(Vec::new())).unwrap();
        assert!(sub.has_completed());
    }
}
