// SPDX-License-Identifier: MPL-2.0
//! Confirmation dialog state.
//!
//! `ConfirmStore` holds the single confirm dialog and the slot of the caller
//! waiting for its answer. [`ConfirmStore::ask`] opens the dialog and returns a
//! [`Confirmation`] future; [`ConfirmStore::close`] settles it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tokio::sync::{oneshot, watch};

/// Visual flavor of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmKind {
    /// Destructive action (red accept button).
    #[default]
    Danger,
    /// Neutral question (blue accept button).
    Info,
}

/// What happens when `ask` is called while a dialog is already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReaskPolicy {
    /// The new request takes over the dialog. The earlier caller receives
    /// [`Error::ConfirmSuperseded`] instead of an answer.
    #[default]
    Replace,
    /// The new request waits and is shown once the current one is answered.
    Queue,
}

/// Messages sent by the confirm modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user accepted (`true`) or cancelled (`false`).
    Answer(bool),
}

/// Render-facing copy of the dialog state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogSnapshot {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub kind: ConfirmKind,
}

#[derive(Debug)]
struct Prompt {
    title: String,
    message: String,
    kind: ConfirmKind,
}

type Resolver = oneshot::Sender<Result<bool>>;

/// Observable state of the confirm store.
#[derive(Debug, Default)]
pub struct ConfirmState {
    is_open: bool,
    title: String,
    message: String,
    kind: ConfirmKind,
    pending: bool,
    queued: usize,
}

impl ConfirmState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ConfirmKind {
        self.kind
    }

    /// Returns whether a caller is waiting for the open dialog's answer.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of requests waiting behind the open dialog.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued
    }

    #[must_use]
    pub fn snapshot(&self) -> DialogSnapshot {
        DialogSnapshot {
            is_open: self.is_open,
            title: self.title.clone(),
            message: self.message.clone(),
            kind: self.kind,
        }
    }

    fn present(&mut self, prompt: Prompt) {
        self.title = prompt.title;
        self.message = prompt.message;
        self.kind = prompt.kind;
        self.is_open = true;
    }

    fn sync(&mut self, waiting: &Waiting) {
        self.pending = waiting.resolver.is_some();
        self.queued = waiting.queue.len();
    }
}

/// Callers waiting for an answer. Kept outside the watched state so that
/// subscribers never keep a resolver alive.
#[derive(Debug, Default)]
struct Waiting {
    resolver: Option<Resolver>,
    queue: VecDeque<(Prompt, Resolver)>,
}

impl Waiting {
    /// Pops the oldest queued request whose caller is still waiting.
    fn next_live(&mut self) -> Option<(Prompt, Resolver)> {
        while let Some((prompt, resolver)) = self.queue.pop_front() {
            if !resolver.is_closed() {
                return Some((prompt, resolver));
            }
        }
        None
    }
}

#[derive(Debug)]
struct Shared {
    state: watch::Sender<ConfirmState>,
    waiting: Mutex<Waiting>,
}

impl Shared {
    fn waiting(&self) -> MutexGuard<'_, Waiting> {
        self.waiting.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let waiting = self
            .waiting
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        let queued = waiting.queue.drain(..).map(|(_, resolver)| resolver);
        for resolver in waiting.resolver.take().into_iter().chain(queued) {
            let _ = resolver.send(Err(Error::ConfirmAbandoned));
        }
    }
}

/// Future returned by [`ConfirmStore::ask`].
///
/// Resolves to the answer passed to [`ConfirmStore::close`], or to an error if
/// the request was superseded or the store dropped. There is no timeout.
#[derive(Debug)]
#[must_use = "a confirmation does nothing unless awaited"]
pub struct Confirmation {
    rx: oneshot::Receiver<Result<bool>>,
}

impl Future for Confirmation {
    type Output = Result<bool>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(Error::ConfirmAbandoned)))
    }
}

/// Handle to the confirm dialog store. Clones share the same dialog.
#[derive(Debug, Clone)]
pub struct ConfirmStore {
    shared: Arc<Shared>,
    policy: ReaskPolicy,
    default_kind: ConfirmKind,
}

impl Default for ConfirmStore {
    fn default() -> Self {
        Self::new(ReaskPolicy::default(), ConfirmKind::default())
    }
}

impl ConfirmStore {
    /// Creates a closed dialog.
    #[must_use]
    pub fn new(policy: ReaskPolicy, default_kind: ConfirmKind) -> Self {
        let (state, _) = watch::channel(ConfirmState::default());
        Self {
            shared: Arc::new(Shared {
                state,
                waiting: Mutex::new(Waiting::default()),
            }),
            policy,
            default_kind,
        }
    }

    /// Returns how this store handles a request made while the dialog is open.
    #[must_use]
    pub fn policy(&self) -> ReaskPolicy {
        self.policy
    }

    /// Opens the dialog and returns a future settled by the next [`close`](Self::close).
    ///
    /// `kind` falls back to the store's default kind when `None`.
    pub fn ask(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: Option<ConfirmKind>,
    ) -> Confirmation {
        let (tx, rx) = oneshot::channel();
        let prompt = Prompt {
            title: title.into(),
            message: message.into(),
            kind: kind.unwrap_or(self.default_kind),
        };
        let mut waiting = self.shared.waiting();

        if self.policy == ReaskPolicy::Queue && self.is_open() {
            tracing::debug!(title = %prompt.title, "confirmation queued");
            waiting.queue.push_back((prompt, tx));
            self.shared.state.send_if_modified(|state| {
                state.sync(&waiting);
                false
            });
            return Confirmation { rx };
        }

        if let Some(previous) = waiting.resolver.take() {
            if !previous.is_closed() {
                tracing::warn!(
                    title = %self.shared.state.borrow().title,
                    "pending confirmation superseded by a new request"
                );
            }
            let _ = previous.send(Err(Error::ConfirmSuperseded));
        }
        tracing::debug!(title = %prompt.title, kind = ?prompt.kind, "confirmation opened");
        waiting.resolver = Some(tx);
        self.shared.state.send_modify(|state| {
            state.present(prompt);
            state.sync(&waiting);
        });

        Confirmation { rx }
    }

    /// Closes the dialog and hands `result` to the waiting caller.
    ///
    /// Returns whether a pending confirmation was settled. Without one this is
    /// a no-op.
    pub fn close(&self, result: bool) -> bool {
        let mut waiting = self.shared.waiting();
        if !self.is_open() && waiting.resolver.is_none() {
            return false;
        }

        // The caller may have stopped waiting; the answer is dropped then.
        let settled = waiting
            .resolver
            .take()
            .is_some_and(|resolver| resolver.send(Ok(result)).is_ok());
        tracing::debug!(result, settled, "confirmation closed");

        let next = waiting.next_live();
        self.shared.state.send_modify(|state| {
            state.is_open = false;
            if let Some((prompt, resolver)) = next {
                state.present(prompt);
                waiting.resolver = Some(resolver);
            }
            state.sync(&waiting);
        });

        settled
    }

    /// Routes a modal message to the store.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Answer(result) => {
                self.close(*result);
            }
        }
    }

    /// Returns a copy of the dialog's display fields.
    #[must_use]
    pub fn snapshot(&self) -> DialogSnapshot {
        self.shared.state.borrow().snapshot()
    }

    /// Returns whether the dialog is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.shared.state.borrow().is_open
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ConfirmState> {
        self.shared.state.subscribe()
    }

    /// Identity of the underlying store, shared by all clones.
    pub(crate) fn key(&self) -> usize {
        Arc::as_ptr(&self.shared) as usize
    }
}
