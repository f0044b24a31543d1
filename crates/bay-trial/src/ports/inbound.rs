//! Driving Ports (API - Inbound)
//!
//! Operations the host invokes on the trial engine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{
    BlockPos, EligibilityZone, Interaction, Location, Player, PlayerId, Tally, TrialId,
    TrialPhase, Verdict, VoteReceipt, WorldId,
};
use crate::error::TrialResult;

/// Non-fatal side-effect problem reported alongside a successful operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollaboratorNotice {
    /// The suspect was already banned; queued regardless
    AlreadyBanned,
    /// The ban service failed; queued regardless
    BanFailed(String),
    /// No NPC spawn point configured
    NpcSpawnUnset,
    /// The NPC could not be spawned
    NpcSpawnFailed(String),
    /// No ban sign bound
    BanSignUnset,
    /// The bound sign could not be written
    BanSignFailed(String),
}

/// A trial was opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialStarted {
    pub trial_id: TrialId,
    pub suspect: Player,
    pub accusation: String,
    pub notices: Vec<CollaboratorNotice>,
}

/// A suspect joined the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueReceipt {
    /// 1-based queue position
    pub position: usize,
    pub accusation: String,
    pub notices: Vec<CollaboratorNotice>,
}

/// A vote was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteOutcome {
    pub receipt: VoteReceipt,
    /// Standings after the vote
    pub tally: Tally,
}

/// Snapshot of the running trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialStatus {
    pub trial_id: TrialId,
    pub suspect: Player,
    pub accusation: String,
    pub remaining: Duration,
    pub tally: Tally,
    pub queue_len: usize,
}

/// What an interaction did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The clicked sign is now the ban sign
    SignBound(Location),
    /// A binding was pending but the block is not a sign; binding dropped
    NotASign,
    /// First zone corner recorded
    FirstCornerSet(BlockPos),
    /// Second zone corner recorded
    SecondCornerSet(BlockPos),
    /// Both corners set; zone installed
    ZoneDefined(EligibilityZone),
    /// Click in another world; pending selection discarded
    SelectionAborted,
}

/// Primary trial API.
pub trait TrialApi: Send + Sync {
    /// Open a trial for `suspect`, or for the queue head when `None`.
    fn start_trial(&self, suspect: Option<Player>, reason: Option<&str>)
        -> TrialResult<TrialStarted>;

    /// Ban `suspect` and append them to the queue.
    fn queue_suspect(&self, suspect: Player, reason: Option<&str>) -> TrialResult<QueueReceipt>;

    /// Record `voter`'s choice, standing at `location`.
    fn cast_vote(
        &self,
        voter: PlayerId,
        option: &str,
        location: Location,
    ) -> TrialResult<VoteOutcome>;

    /// Dismiss the running trial without a verdict.
    fn cancel_trial(&self, dismissed_by: &str) -> TrialResult<Player>;

    /// Conclusion timer fired for `trial`. No-op unless that trial is active.
    fn on_conclusion_timer(&self, trial: TrialId) -> Option<Verdict>;

    /// A player left the server. Returns true when their trial was voided.
    fn on_suspect_disconnected(&self, player: PlayerId) -> bool;

    /// Block interaction by `actor`.
    fn on_interaction(
        &self,
        actor: PlayerId,
        interaction: Interaction,
        location: Location,
    ) -> Vec<InteractionOutcome>;

    /// Set where the suspect NPC appears.
    fn set_npc_location(&self, location: Location);

    /// Start an interactive zone selection for `admin` in `world`.
    fn begin_zone_selection(&self, admin: PlayerId, world: WorldId);

    /// Make `admin`'s next secondary click bind the ban sign.
    fn begin_sign_binding(&self, admin: PlayerId);

    /// Running trial snapshot, `None` when idle.
    fn status(&self) -> Option<TrialStatus>;

    fn phase(&self) -> TrialPhase;

    fn queue_len(&self) -> usize;

    fn zone(&self) -> Option<EligibilityZone>;
}
