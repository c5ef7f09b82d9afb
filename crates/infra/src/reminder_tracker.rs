use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use workflowgo_domain::TrackedReminderKey;

/// Remembers which interview reminders have already been delivered so that
/// every (user, interview) pair is reminded at most once.
///
/// Shared between the send reminders job and the cleanup job. Nothing is
/// persisted, a restart forgets every delivered reminder.
#[derive(Debug, Default)]
pub struct NotifiedReminders {
    keys: Mutex<HashSet<TrackedReminderKey>>,
}

impl NotifiedReminders {
    pub fn new() -> Self {
        Default::default()
    }

    // The set stays valid even if a holder panicked, every operation is a
    // single insert, lookup or removal.
    fn keys(&self) -> MutexGuard<'_, HashSet<TrackedReminderKey>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if the key was not tracked before
    pub fn add(&self, key: TrackedReminderKey) -> bool {
        self.keys().insert(key)
    }

    pub fn contains(&self, key: &TrackedReminderKey) -> bool {
        self.keys().contains(key)
    }

    /// Returns `true` if the key was tracked
    pub fn remove(&self, key: &TrackedReminderKey) -> bool {
        self.keys().remove(key)
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}
