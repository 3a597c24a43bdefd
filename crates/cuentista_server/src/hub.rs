//! Completion hub for blocking waits on story generation.
//!
//! Polling is the primary completion signal; the hub adds an in-process
//! notification channel keyed by story id so the wait endpoint can park
//! instead of busy-polling. Workers signal the hub after the terminal
//! write lands, which means a waiter that subscribes first and re-checks
//! the persisted status afterwards can never miss the transition.

use cuentista_core::StoryId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Per-story completion notifications.
#[derive(Debug, Default)]
pub struct CompletionHub {
    waiters: Mutex<HashMap<i32, Arc<Notify>>>,
}

impl CompletionHub {
    /// An empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the notifier for a story.
    ///
    /// Callers must create the `notified()` future from the returned handle
    /// *before* re-reading the story status, otherwise a terminal write
    /// landing in between is missed and the wait runs to its timeout.
    pub fn subscribe(&self, id: StoryId) -> Arc<Notify> {
        let mut waiters = self.waiters.lock().expect("waiter map poisoned");
        Arc::clone(
            waiters
                .entry(id.as_i32())
                .or_insert_with(|| Arc::new(Notify::new())),
        )
    }

    /// Signal that a story reached a terminal state.
    ///
    /// Wakes every current waiter and drops the entry; late subscribers
    /// fall back to reading the persisted status.
    pub fn notify(&self, id: StoryId) {
        let notify = {
            let mut waiters = self.waiters.lock().expect("waiter map poisoned");
            waiters.remove(&id.as_i32())
        };
        if let Some(notify) = notify {
            notify.notify_waiters();
        }
    }

    /// Number of stories currently being waited on.
    pub fn pending_waiters(&self) -> usize {
        self.waiters.lock().expect("waiter map poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn waiter_wakes_on_notify() {
        let hub = Arc::new(CompletionHub::new());
        let id = StoryId::from(7);

        let notify = hub.subscribe(id);
        let notified = notify.notified();
        tokio::pin!(notified);

        hub.notify(id);

        tokio::time::timeout(Duration::from_millis(100), notified)
            .await
            .expect("waiter should wake promptly");
        assert_eq!(hub.pending_waiters(), 0);
    }

    #[tokio::test]
    async fn notify_without_waiters_is_harmless() {
        let hub = CompletionHub::new();
        hub.notify(StoryId::from(99));
        assert_eq!(hub.pending_waiters(), 0);
    }

    #[tokio::test]
    async fn waiters_on_different_stories_are_independent() {
        let hub = Arc::new(CompletionHub::new());
        let waiting = hub.subscribe(StoryId::from(1));
        let notified = waiting.notified();
        tokio::pin!(notified);

        hub.notify(StoryId::from(2));

        let woke = tokio::time::timeout(Duration::from_millis(50), notified)
            .await
            .is_ok();
        assert!(!woke, "story 1 waiter must not wake for story 2");
    }
}
