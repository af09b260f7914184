//! Copy acknowledgments
//!
//! After a copy action the UI shows "Copied" for a fixed duration. Each copy
//! target owns at most one pending deadline: copying the same target again
//! replaces it instead of stacking a second timer.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a "Copied" acknowledgment stays visible
pub const COPIED_DURATION: Duration = Duration::from_secs(2);

/// What a copy action copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// One caption, by 0-based position
    Caption(usize),
    /// The whole batch formatted as a thread
    Thread,
}

/// Pending acknowledgment deadlines keyed by target
#[derive(Debug, Clone, Default)]
pub struct CopyAcks {
    deadlines: HashMap<CopyTarget, Instant>,
    duration: Duration,
}

impl CopyAcks {
    pub fn new() -> Self {
        Self::with_duration(COPIED_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            deadlines: HashMap::new(),
            duration,
        }
    }

    /// Start (or restart) the acknowledgment for a target
    pub fn acknowledge(&mut self, target: CopyTarget, now: Instant) {
        self.deadlines.insert(target, now + self.duration);
    }

    /// Whether the target's acknowledgment is visible at `now`
    pub fn is_active(&self, target: CopyTarget, now: Instant) -> bool {
        self.deadlines
            .get(&target)
            .is_some_and(|deadline| now < *deadline)
    }

    /// Drop expired deadlines; returns true if anything reverted
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|_, deadline| now < *deadline);
        self.deadlines.len() != before
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
