//! Generation progress.
//!
//! A run polls a [`StatusSource`] on a fixed tick until it reports
//! completion, then waits a short delay before the report is shown.
//! [`SimulatedJob`] is the only source: it invents progress from random
//! increments and carries no information about real work. A backend poller
//! would implement the same trait.
//!
//! The loop is timer-agnostic: the caller supplies `wait(ms)`, which the
//! browser backs with `gloo-timers` and tests back with ready futures.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::{Timing, MAX_STEP, MIN_STEP};
use crate::error::{JobError, JobResult};

/// One poll result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JobStatus {
    /// Still working, with progress in `[0, 100]`
    Running(f64),
    /// Work finished
    Complete,
}

/// Something that can report how far a job has got.
pub trait StatusSource {
    fn poll(&mut self) -> JobResult<JobStatus>;
}

/// Fake job: each poll adds a random step from `[MIN_STEP, MAX_STEP)`.
///
/// Progress is clamped at 100; the poll after reaching 100 reports
/// completion.
#[derive(Debug)]
pub struct SimulatedJob<R = ThreadRng> {
    value: f64,
    rng: R,
}

impl SimulatedJob<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for SimulatedJob<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulatedJob<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { value: 0.0, rng }
    }
}

impl<R: Rng> StatusSource for SimulatedJob<R> {
    fn poll(&mut self) -> JobResult<JobStatus> {
        if self.value >= 100.0 {
            return Ok(JobStatus::Complete);
        }
        let step = self.rng.gen_range(MIN_STEP..MAX_STEP);
        self.value = (self.value + step).min(100.0);
        Ok(JobStatus::Running(self.value))
    }
}

/// Shared cancellation flag for one run.
///
/// Single-threaded: clones share the flag through an `Rc`.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// How a run ended, short of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Source completed and the final delay elapsed
    Completed,
    /// Token cancelled before the run finished
    Cancelled,
}

/// Poll `source` until completion, cancellation or the tick budget runs out.
///
/// `on_progress` is never called after `cancel` is set. On completion it
/// receives a final `100.0` before the finalize delay.
pub async fn drive<S, W, Fut, P>(
    source: &mut S,
    timing: Timing,
    cancel: &CancelToken,
    mut wait: W,
    mut on_progress: P,
) -> JobResult<RunOutcome>
where
    S: StatusSource + ?Sized,
    W: FnMut(u32) -> Fut,
    Fut: Future<Output = ()>,
    P: FnMut(f64),
{
    for tick in 1..=timing.max_ticks {
        wait(timing.tick_ms).await;
        if cancel.is_cancelled() {
            log::info!("🚫 run cancelled at tick {}", tick);
            return Ok(RunOutcome::Cancelled);
        }

        match source.poll()? {
            JobStatus::Running(value) => {
                log::debug!("⏳ tick {}: {:.0}%", tick, value);
                on_progress(value);
            }
            JobStatus::Complete => {
                on_progress(100.0);
                wait(timing.finalize_delay_ms).await;
                if cancel.is_cancelled() {
                    return Ok(RunOutcome::Cancelled);
                }
                log::info!("✅ run completed after {} ticks", tick);
                return Ok(RunOutcome::Completed);
            }
        }
    }

    Err(JobError::Timeout {
        ticks: timing.max_ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{ready, Ready};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    fn no_wait(_: u32) -> Ready<()> {
        ready(())
    }

    struct Stalled;

    impl StatusSource for Stalled {
        fn poll(&mut self) -> JobResult<JobStatus> {
            Ok(JobStatus::Running(10.0))
        }
    }

    struct Broken;

    impl StatusSource for Broken {
        fn poll(&mut self) -> JobResult<JobStatus> {
            Err(JobError::AnalysisFailed("model unavailable".into()))
        }
    }

    #[test]
    fn test_simulated_steps_within_range() {
        let mut job = SimulatedJob::with_rng(StdRng::seed_from_u64(42));
        let mut last = 0.0;
        let mut polls = 0;
        loop {
            polls += 1;
            match job.poll().unwrap() {
                JobStatus::Running(value) => {
                    let step = value - last;
                    assert!(step > 0.0);
                    assert!(value == 100.0 || (step > MIN_STEP - 1e-9 && step < MAX_STEP + 1e-9));
                    last = value;
                }
                JobStatus::Complete => break,
            }
        }
        assert_eq!(last, 100.0);
        // 20 steps of at least 5 reach 100, plus the completing poll
        assert!(polls <= 21);
        assert_eq!(job.poll().unwrap(), JobStatus::Complete);
    }

    #[test]
    fn test_drive_completes_with_monotonic_progress() {
        let mut job = SimulatedJob::with_rng(StdRng::seed_from_u64(1));
        let seen = RefCell::new(Vec::new());
        let waits = RefCell::new(Vec::new());

        let outcome = block_on(drive(
            &mut job,
            Timing::default(),
            &CancelToken::new(),
            |ms| {
                waits.borrow_mut().push(ms);
                ready(())
            },
            |p| seen.borrow_mut().push(p),
        ))
        .unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        let seen = seen.into_inner();
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last(), Some(&100.0));
        let waits = waits.into_inner();
        assert_eq!(waits.last(), Some(&Timing::default().finalize_delay_ms));
        assert!(waits[..waits.len() - 1]
            .iter()
            .all(|&ms| ms == Timing::default().tick_ms));
    }

    #[test]
    fn test_cancel_stops_progress_callbacks() {
        let mut job = SimulatedJob::with_rng(StdRng::seed_from_u64(3));
        let token = CancelToken::new();
        let calls = Cell::new(0);

        let outcome = block_on(drive(&mut job, Timing::default(), &token, no_wait, |_| {
            calls.set(calls.get() + 1);
            if calls.get() == 3 {
                token.cancel();
            }
        }))
        .unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_cancel_during_finalize_delay() {
        let mut job = SimulatedJob::with_rng(StdRng::seed_from_u64(5));
        let token = CancelToken::new();

        let outcome = block_on(drive(&mut job, Timing::default(), &token, no_wait, |p| {
            if p >= 100.0 {
                token.cancel();
            }
        }))
        .unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
    }

    #[test]
    fn test_stalled_source_times_out() {
        let timing = Timing {
            max_ticks: 7,
            ..Timing::default()
        };
        let result = block_on(drive(&mut Stalled, timing, &CancelToken::new(), no_wait, |_| {}));
        assert_eq!(result, Err(JobError::Timeout { ticks: 7 }));
    }

    #[test]
    fn test_source_error_propagates() {
        let result = block_on(drive(
            &mut Broken,
            Timing::default(),
            &CancelToken::new(),
            no_wait,
            |_| {},
        ));
        assert!(matches!(result, Err(JobError::AnalysisFailed(_))));
    }

    #[test]
    fn test_token_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
