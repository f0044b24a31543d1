//! Conclusion scheduler driven by hand.
//!
//! Nothing fires on its own: a test reads the armed timers and calls
//! `on_conclusion_timer` itself, which makes races easy to stage.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::TrialId;
use crate::ports::outbound::{ConclusionHandle, ConclusionScheduler};

/// A timer the coordinator asked for.
#[derive(Clone, Debug)]
pub struct ArmedTimer {
    pub trial: TrialId,
    pub delay: Duration,
    cancelled: Arc<AtomicBool>,
}

impl ArmedTimer {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

struct ManualHandle {
    cancelled: Arc<AtomicBool>,
}

impl ConclusionHandle for ManualHandle {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    armed: RwLock<Vec<ArmedTimer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every timer ever scheduled, oldest first.
    pub fn armed(&self) -> Vec<ArmedTimer> {
        self.armed.read().clone()
    }

    /// Timers not yet cancelled.
    pub fn pending(&self) -> Vec<ArmedTimer> {
        self.armed
            .read()
            .iter()
            .filter(|timer| !timer.is_cancelled())
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<ArmedTimer> {
        self.armed.read().last().cloned()
    }
}

impl ConclusionScheduler for ManualScheduler {
    fn schedule(&self, trial: TrialId, delay: Duration) -> Box<dyn ConclusionHandle> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.armed.write().push(ArmedTimer {
            trial,
            delay,
            cancelled: Arc::clone(&cancelled),
        });
        Box::new(ManualHandle { cancelled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(TrialId::new(), Duration::from_secs(5));
        assert_eq!(scheduler.pending().len(), 1);

        handle.cancel();
        handle.cancel();
        assert!(scheduler.pending().is_empty());
        assert!(scheduler.armed()[0].is_cancelled());
    }
}
