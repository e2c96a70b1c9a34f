// SPDX-License-Identifier: MPL-2.0
//! Store subscriptions for the application.
//!
//! Toast timers and calls to the global helpers change the stores outside
//! `App::update`; watching the stores turns each change into a message.

use super::Message;
use crate::feedback::Feedback;
use iced::futures::{stream, Stream};
use iced::Subscription;
use std::hash::{Hash, Hasher};

/// Feedback handle keyed by the identity of its stores.
#[derive(Debug, Clone)]
pub struct WatchedStores(pub Feedback);

impl Hash for WatchedStores {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.toasts().key().hash(state);
        self.0.confirm().key().hash(state);
    }
}

/// Creates a subscription that emits [`Message::StoresChanged`] whenever the
/// toast store or the confirm store changes.
pub fn create_store_subscription(feedback: &Feedback) -> Subscription<Message> {
    Subscription::run_with(WatchedStores(feedback.clone()), store_changes)
}

/// Stream of change notifications; ends when either store is dropped.
pub fn store_changes(watched: &WatchedStores) -> impl Stream<Item = Message> {
    let toasts = watched.0.toasts().subscribe();
    let confirm = watched.0.confirm().subscribe();

    stream::unfold((toasts, confirm), |(mut toasts, mut confirm)| async move {
        tokio::select! {
            changed = toasts.changed() => changed.ok()?,
            changed = confirm.changed() => changed.ok()?,
        }
        Some((Message::StoresChanged, (toasts, confirm)))
    })
}
