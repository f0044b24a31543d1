//! Conclusion timers on the tokio runtime
//!
//! A timer is a task that sleeps for the trial duration and then posts
//! `HostEvent::ConclusionDue` into the control loop. It never calls the
//! coordinator itself.

use bay_trial::{ConclusionHandle, ConclusionScheduler, HostEvent, TrialId};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub struct TokioConclusionScheduler {
    events: mpsc::UnboundedSender<HostEvent>,
}

impl TokioConclusionScheduler {
    pub fn new(events: mpsc::UnboundedSender<HostEvent>) -> Self {
        Self { events }
    }
}

struct TaskHandle {
    task: JoinHandle<()>,
}

impl ConclusionHandle for TaskHandle {
    fn cancel(&self) {
        self.task.abort();
    }
}

impl ConclusionScheduler for TokioConclusionScheduler {
    fn schedule(&self, trial: TrialId, delay: Duration) -> Box<dyn ConclusionHandle> {
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(trial_id = %trial, "Conclusion timer fired");
            if events.send(HostEvent::ConclusionDue { trial }).is_err() {
                warn!(trial_id = %trial, "Control loop closed before the trial concluded");
            }
        });
        Box::new(TaskHandle { task })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_posts_conclusion_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TokioConclusionScheduler::new(tx);
        let trial = TrialId::new();
        let _handle = scheduler.schedule(trial, Duration::from_secs(120));

        tokio::time::sleep(Duration::from_secs(119)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some(HostEvent::ConclusionDue { trial }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TokioConclusionScheduler::new(tx);
        let handle = scheduler.schedule(TrialId::new(), Duration::from_secs(120));
        handle.cancel();
        handle.cancel();

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert!(rx.try_recv().is_err());
    }
}
