//! Toast notifications.
//!
//! [`Toaster`] is the page's [`Notifier`]: every notice is logged to the
//! console, pushed onto a reactive stack and removed again after
//! [`TOAST_DURATION_MS`]. The stack is provided as context by `App`.

use std::cell::RefCell;

use aiqc::{LogNotifier, Notice, Notifier};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::types::ToastEntry;

/// Reactive toast stack. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<ToastEntry>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Run `f` with a notice buffer and show what it collected afterwards.
    ///
    /// Lets workflow code notify from inside a signal update without
    /// touching the toast signal while that update is in progress.
    pub fn batch<T>(&self, f: impl FnOnce(&RefCell<Vec<Notice>>) -> T) -> T {
        let sink = RefCell::new(Vec::new());
        let out = f(&sink);
        for notice in sink.into_inner() {
            self.notify(notice);
        }
        out
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        LogNotifier.notify(notice.clone());

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(ToastEntry { id, notice });
            // Keep the stack short
            if toasts.len() > MAX_TOASTS {
                toasts.remove(0);
            }
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

/// The page's toaster, or a fresh one if none was provided.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        log::warn!("no Toaster in context, creating a local one");
        let toaster = Toaster::new();
        provide_context(toaster);
        toaster
    })
}
