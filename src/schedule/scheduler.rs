//! Virtual-clock task queue.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifies a scheduled task. Unique per scheduler, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Single-threaded queue of deferred payloads.
///
/// Tasks fire in order of due time; tasks due at the same instant fire in
/// the order they were scheduled.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: u64,
    next_id: u64,
    /// (due, id) -> payload
    queue: BTreeMap<(u64, u64), T>,
    /// id -> due, for cancellation
    due_by_id: FxHashMap<u64, u64>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BTreeMap::new(),
            due_by_id: FxHashMap::default(),
        }
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Schedule `payload` to fire `delay_ms` from now.
    ///
    /// A zero delay fires on the next `advance`, even `advance(0)`.
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;

        let due = self.now.saturating_add(delay_ms);
        self.queue.insert((due, id), payload);
        self.due_by_id.insert(id, due);

        TaskHandle(id)
    }

    /// Cancel a pending task.
    ///
    /// Returns true if the task was pending, false if it already fired or
    /// was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.due_by_id.remove(&handle.0) {
            Some(due) => self.queue.remove(&(due, handle.0)).is_some(),
            None => false,
        }
    }

    /// Check if a task is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.due_by_id.contains_key(&handle.0)
    }

    /// Move the clock forward by `ms` and drain every task now due.
    pub fn advance(&mut self, ms: u64) -> Vec<(TaskHandle, T)> {
        self.now = self.now.saturating_add(ms);

        let mut fired = Vec::new();
        while let Some(task) = self.pop_due() {
            fired.push(task);
        }
        fired
    }

    /// Jump the clock to the earliest pending task and fire it alone.
    ///
    /// Returns `None` (and leaves the clock alone) if nothing is pending.
    pub fn advance_to_next(&mut self) -> Option<(TaskHandle, T)> {
        let due = self.next_due()?;
        self.now = self.now.max(due);
        self.pop_due()
    }

    fn pop_due(&mut self) -> Option<(TaskHandle, T)> {
        let (&(due, id), _) = self.queue.iter().next()?;
        if due > self.now {
            return None;
        }
        let payload = self.queue.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        Some((TaskHandle(id), payload))
    }
}
