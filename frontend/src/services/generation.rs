//! Runs a QC generation on browser timers.
//!
//! The run is a `spawn_local` future driving [`SimulatedJob`]. Every state
//! change goes through the run's [`GenerationTicket`], and the returned
//! [`CancelToken`] stops the loop: the QC section cancels it when the user
//! aborts and when the section unmounts.

use aiqc::{
    drive, CancelToken, GenerationTicket, QcForm, RunOutcome, SimulatedJob, Timing,
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::services::{BrowserFile, Toaster};

/// Start a run for `ticket` and return its cancel handle.
pub fn start_generation(
    form: RwSignal<QcForm<BrowserFile>>,
    ticket: GenerationTicket,
    toaster: Toaster,
) -> CancelToken {
    let cancel = CancelToken::new();
    let token = cancel.clone();

    spawn_local(async move {
        let mut job = SimulatedJob::new();
        let result = drive(
            &mut job,
            Timing::default(),
            &token,
            TimeoutFuture::new,
            |value| {
                form.try_update(|f| f.submission.record_progress(ticket, value));
            },
        )
        .await;

        if token.is_cancelled() {
            return;
        }
        match result {
            Ok(RunOutcome::Completed) => {
                form.try_update(|f| f.submission.complete(ticket));
            }
            Ok(RunOutcome::Cancelled) => {}
            Err(err) => {
                toaster.batch(|sink| form.try_update(|f| f.submission.fail(ticket, err, sink)));
            }
        }
    });

    cancel
}
