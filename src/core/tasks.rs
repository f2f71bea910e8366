//! Cancellable deferred callbacks ("thinking delays").
//!
//! Tasks are plain values of the owning game's action type, stamped with the
//! session generation that scheduled them. The queue only hands back due
//! tasks; deciding whether a task is stale is the caller's job.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A task whose deadline has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTask<T> {
    pub id: TaskId,
    pub generation: u64,
    pub action: T,
}

#[derive(Debug, Clone)]
struct Scheduled<T> {
    id: TaskId,
    due: Instant,
    generation: u64,
    action: T,
}

#[derive(Debug, Clone)]
pub struct TaskQueue<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, generation: u64, action: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: now + delay,
            generation,
            action,
        });
        id
    }

    /// Cancel everything. Returns how many tasks were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Remove and return every task due at `now`, earliest deadline first
    /// (ties in scheduling order).
    pub fn take_due(&mut self, now: Instant) -> Vec<DueTask<T>> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = pending;
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter()
            .map(|t| DueTask {
                id: t.id,
                generation: t.generation,
                action: t.action,
            })
            .collect()
    }
}
