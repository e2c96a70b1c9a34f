// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastStore` owns the ordered list of toasts and drives each one through
//! `visible → fading → removed` with scheduled tasks. State lives in a
//! `tokio::sync::watch` channel so renderers can subscribe to changes.

use super::notification::{Severity, Toast, ToastId};
use crate::error::Result;
use crate::scheduler::{self, ScheduledTask};
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Default time a toast stays visible before fading.
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(3000);

/// Default fade window between hiding a toast and removing it.
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

/// Messages sent by the toast tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

/// Durations of the toast lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// How long a toast is shown before it starts fading.
    pub display: Duration,
    /// How long the fade lasts before the toast is removed.
    pub fade: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display: DEFAULT_DISPLAY,
            fade: DEFAULT_FADE,
        }
    }
}

/// Observable state of the toast store.
#[derive(Debug, Default)]
pub struct ToastState {
    /// Toasts in display order (oldest first).
    items: Vec<Toast>,
    next_id: u64,
    /// Pending display or removal task per toast.
    timers: HashMap<ToastId, ScheduledTask>,
}

impl ToastState {
    /// Returns the toasts in display order.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Returns the number of toasts, fading ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether there are no toasts at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn cancel_all(&mut self) {
        for (_, task) in self.timers.drain() {
            task.cancel();
        }
    }
}

#[derive(Debug)]
struct Shared {
    state: watch::Sender<ToastState>,
    timing: ToastTiming,
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            state.cancel_all();
            false
        });
    }
}

/// Handle to the toast store. Clones share the same toasts.
#[derive(Debug, Clone)]
pub struct ToastStore {
    shared: Arc<Shared>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastTiming::default())
    }
}

impl ToastStore {
    /// Creates an empty store using the given lifecycle durations.
    #[must_use]
    pub fn new(timing: ToastTiming) -> Self {
        let (state, _) = watch::channel(ToastState::default());
        Self {
            shared: Arc::new(Shared { state, timing }),
        }
    }

    /// Returns the lifecycle durations of this store.
    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        self.shared.timing
    }

    /// Appends a new toast and schedules its fade-out.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NoRuntime`] when called outside a tokio
    /// runtime; the store is left unchanged.
    pub fn show(&self, severity: Severity, message: impl Into<String>) -> Result<ToastId> {
        let runtime = scheduler::current_runtime().inspect_err(|_| {
            tracing::warn!("toast dropped: no runtime to schedule its timers");
        })?;
        let message = message.into();
        let display = self.shared.timing.display;
        let mut assigned = ToastId::default();

        self.shared.state.send_modify(|state| {
            let id = ToastId::new(state.next_id);
            state.next_id += 1;

            let weak = Arc::downgrade(&self.shared);
            let task = scheduler::schedule(&runtime, display, move || {
                if let Some(store) = Self::upgrade(&weak) {
                    // Only fails without a runtime, and timers run on one.
                    let _ = store.remove(id);
                }
            });

            tracing::debug!(toast = %id, severity = %severity, "toast shown");
            state.items.push(Toast::new(id, severity, message));
            state.timers.insert(id, task);
            assigned = id;
        });

        Ok(assigned)
    }

    /// Starts the exit transition of a toast.
    ///
    /// The toast is marked hidden right away and removed from the list once the
    /// fade window has passed. A pending display timer for it is cancelled.
    /// Returns whether a toast with this ID exists. Unknown IDs and toasts that
    /// are already fading are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NoRuntime`] when a visible toast has to be
    /// faded outside a tokio runtime; the toast is left visible.
    pub fn remove(&self, id: ToastId) -> Result<bool> {
        let mut outcome = Ok(false);

        self.shared.state.send_if_modified(|state| {
            let Some(toast) = state.items.iter_mut().find(|t| t.id() == id) else {
                return false;
            };
            outcome = Ok(true);
            if !toast.is_shown() {
                return false;
            }
            let runtime = match scheduler::current_runtime() {
                Ok(runtime) => runtime,
                Err(err) => {
                    outcome = Err(err);
                    return false;
                }
            };
            toast.hide();

            let task = self.schedule_purge(&runtime, id);
            if let Some(previous) = state.timers.insert(id, task) {
                previous.cancel();
            }
            tracing::debug!(toast = %id, "toast fading");
            true
        });

        outcome
    }

    /// Routes a tray message to the store.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                if let Err(err) = self.remove(*id) {
                    tracing::warn!(toast = %id, "failed to dismiss toast: {err}");
                }
            }
        }
    }

    /// Removes every toast at once and cancels their timers.
    pub fn clear(&self) {
        self.shared.state.send_if_modified(|state| {
            let had_items = !state.is_empty();
            state.cancel_all();
            state.items.clear();
            had_items
        });
    }

    /// Returns a snapshot of the toasts in display order.
    #[must_use]
    pub fn items(&self) -> Vec<Toast> {
        self.shared.state.borrow().items.clone()
    }

    /// Returns whether any toast is visible or fading.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.shared.state.borrow().is_empty()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ToastState> {
        self.shared.state.subscribe()
    }

    /// Identity of the underlying store, shared by all clones.
    pub(crate) fn key(&self) -> usize {
        Arc::as_ptr(&self.shared) as usize
    }

    fn schedule_purge(&self, runtime: &Handle, id: ToastId) -> ScheduledTask {
        let weak = Arc::downgrade(&self.shared);
        scheduler::schedule(runtime, self.shared.timing.fade, move || {
            if let Some(store) = Self::upgrade(&weak) {
                store.purge(id);
            }
        })
    }

    fn purge(&self, id: ToastId) {
        self.shared.state.send_if_modified(|state| {
            state.timers.remove(&id);
            let before = state.items.len();
            state.items.retain(|t| t.id() != id);
            let removed = state.items.len() != before;
            if removed {
                tracing::debug!(toast = %id, "toast removed");
            }
            removed
        });
    }

    fn upgrade(weak: &Weak<Shared>) -> Option<Self> {
        weak.upgrade().map(|shared| Self { shared })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn messages(store: &ToastStore) -> Vec<String> {
        store.items().iter().map(|t| t.message().to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn new_store_is_empty() {
        let store = ToastStore::default();
        assert!(!store.has_toasts());
        assert!(store.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn show_appends_in_call_order() {
        let store = ToastStore::default();
        store.show(Severity::Info, "first").unwrap();
        store.show(Severity::Danger, "second").unwrap();
        store.show(Severity::Success, "third").unwrap();

        assert_eq!(messages(&store), vec!["first", "second", "third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn toast_fades_then_disappears() {
        let store = ToastStore::default();
        store.show(Severity::Danger, "Save failed").unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].severity(), Severity::Danger);
        assert_eq!(items[0].message(), "Save failed");
        assert!(items[0].is_shown());

        sleep_ms(2999).await;
        assert!(store.items()[0].is_shown());

        sleep_ms(2).await;
        assert_eq!(store.items().len(), 1);
        assert!(!store.items()[0].is_shown());

        sleep_ms(498).await;
        assert_eq!(store.items().len(), 1);

        sleep_ms(2).await;
        assert!(store.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_back_toasts_get_distinct_ids() {
        let store = ToastStore::default();
        let first = store.show(Severity::Info, "a").unwrap();
        let second = store.show(Severity::Info, "b").unwrap();
        assert_ne!(first, second);

        assert!(store.remove(first).unwrap());
        let items = store.items();
        assert!(!items[0].is_shown());
        assert!(items[1].is_shown());
    }

    #[tokio::test(start_paused = true)]
    async fn remove_unknown_id_is_a_no_op() {
        let store = ToastStore::default();
        store.show(Severity::Info, "kept").unwrap();
        let before = store.items();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        assert!(!store.remove(ToastId::new(42)).unwrap());
        assert_eq!(store.items(), before);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_cancels_display_timer() {
        let store = ToastStore::default();
        let id = store.show(Severity::Warning, "bye").unwrap();

        sleep_ms(1000).await;
        store.handle_message(&Message::Dismiss(id));
        assert!(!store.items()[0].is_shown());

        // Removed after the fade, long before the 3000 ms display time.
        sleep_ms(501).await;
        assert!(store.items().is_empty());

        // The cancelled display timer must not resurrect anything.
        sleep_ms(3000).await;
        assert!(store.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn removing_a_fading_toast_keeps_its_schedule() {
        let store = ToastStore::default();
        let id = store.show(Severity::Info, "x").unwrap();
        assert!(store.remove(id).unwrap());

        sleep_ms(300).await;
        assert!(store.remove(id).unwrap());

        sleep_ms(201).await;
        assert!(store.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_timing_is_respected() {
        let store = ToastStore::new(ToastTiming {
            display: Duration::from_millis(100),
            fade: Duration::from_millis(50),
        });
        store.show(Severity::Success, "quick").unwrap();

        sleep_ms(101).await;
        assert!(!store.items()[0].is_shown());
        sleep_ms(50).await;
        assert!(store.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn clear_removes_all_and_cancels_timers() {
        let store = ToastStore::default();
        for i in 0..5 {
            store.show(Severity::Info, format!("toast-{i}")).unwrap();
        }

        store.clear();
        assert!(!store.has_toasts());

        sleep_ms(4000).await;
        assert!(!store.has_toasts());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_every_transition() {
        let store = ToastStore::default();
        let mut rx = store.subscribe();

        store.show(Severity::Info, "watched").unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().items()[0].is_shown());

        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().items()[0].is_shown());

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn timers_are_inert_after_store_is_dropped() {
        let store = ToastStore::default();
        let mut rx = store.subscribe();
        store.show(Severity::Info, "orphan").unwrap();
        drop(store);

        sleep_ms(4000).await;
        assert!(rx.has_changed().is_err());
        assert_eq!(rx.borrow().len(), 1);
    }

    #[test]
    fn remove_needs_no_runtime_when_nothing_fades() {
        let store = ToastStore::default();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let (fading, visible) = runtime.block_on(async {
            let fading = store.show(Severity::Info, "fading").unwrap();
            let visible = store.show(Severity::Info, "visible").unwrap();
            store.remove(fading).unwrap();
            (fading, visible)
        });

        assert_eq!(store.remove(ToastId::new(99)), Ok(false));
        assert_eq!(store.remove(fading), Ok(true));
        assert_eq!(
            store.remove(visible),
            Err(crate::error::Error::NoRuntime)
        );
        assert!(store.items()[1].is_shown());
    }

    #[test]
    fn show_outside_runtime_fails_without_side_effects() {
        let store = ToastStore::default();
        assert_eq!(
            store.show(Severity::Info, "nope").unwrap_err(),
            crate::error::Error::NoRuntime
        );
        assert!(!store.has_toasts());
    }
}
