//! Outgoing announcements broadcast to the whole server

use serde::{Deserialize, Serialize};

use crate::domain::{Player, TrialId, Verdict};

/// Server-wide announcement, rendered by the host's presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Announcement {
    /// A trial opened and voting began
    TrialStarted {
        trial_id: TrialId,
        suspect: Player,
        accusation: String,
    },
    /// A suspect was condemned to the queue
    SuspectQueued { suspect: Player, position: usize },
    /// An admin dismissed the trial
    TrialDismissed {
        trial_id: TrialId,
        suspect: Player,
        dismissed_by: String,
    },
    /// The accused disconnected; no verdict
    TrialVoided { trial_id: TrialId, suspect: Player },
    /// Voting closed
    VerdictReached(Verdict),
}

impl Announcement {
    /// Trial the announcement belongs to, if any.
    pub fn trial_id(&self) -> Option<TrialId> {
        match self {
            Self::TrialStarted { trial_id, .. }
            | Self::TrialDismissed { trial_id, .. }
            | Self::TrialVoided { trial_id, .. } => Some(*trial_id),
            Self::VerdictReached(verdict) => Some(verdict.trial_id),
            Self::SuspectQueued { .. } => None,
        }
    }
}
