//! # Suspect Queue
//!
//! FIFO backlog of suspects awaiting trial, with a companion identity set for
//! O(1) membership checks. An identity appears at most once.

use std::collections::{HashSet, VecDeque};

use super::identity::PlayerId;
use super::suspect::QueuedSuspect;
use crate::error::{TrialError, TrialResult};

/// Ordered backlog of suspects.
#[derive(Debug, Default)]
pub struct SuspectQueue {
    entries: VecDeque<QueuedSuspect>,
    members: HashSet<PlayerId>,
}

impl SuspectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail. Returns the 1-based position of the new entry.
    pub fn enqueue(&mut self, suspect: QueuedSuspect) -> TrialResult<usize> {
        if !self.members.insert(suspect.suspect_id()) {
            return Err(TrialError::DuplicateSuspect {
                suspect: suspect.suspect_name().to_string(),
            });
        }
        self.entries.push_back(suspect);
        Ok(self.entries.len())
    }

    /// Remove and return the head.
    pub fn dequeue_next(&mut self) -> Option<QueuedSuspect> {
        let next = self.entries.pop_front()?;
        self.members.remove(&next.suspect_id());
        Some(next)
    }

    /// Remove the entry for `suspect_id` if present. Idempotent.
    pub fn remove(&mut self, suspect_id: PlayerId) -> Option<QueuedSuspect> {
        if !self.members.remove(&suspect_id) {
            return None;
        }
        let index = self
            .entries
            .iter()
            .position(|entry| entry.suspect_id() == suspect_id)?;
        self.entries.remove(index)
    }

    pub fn contains(&self, suspect_id: PlayerId) -> bool {
        self.members.contains(&suspect_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &QueuedSuspect> {
        self.entries.iter()
    }
}
