//! Trial Coordinator - Core business logic
//!
//! Owns the single active trial, the suspect queue, the voting zone and the
//! pending admin selections. Every mutation happens under one mutex; world
//! side effects (bans, NPC, sign, broadcasts) run after it is released.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, TrialConfig};
use crate::domain::{
    EligibilityZone, Interaction, Location, PendingZoneSelection, Player, PlayerId,
    PunishmentOption, QueuedSuspect, SelectionStep, SuspectQueue, TrialId, TrialPhase,
    TrialSession, TrialState, Verdict, WorldId,
};
use crate::error::{TrialError, TrialResult};
use crate::events::Announcement;
use crate::metrics;
use crate::ports::inbound::{
    CollaboratorNotice, InteractionOutcome, QueueReceipt, TrialApi, TrialStarted, TrialStatus,
    VoteOutcome,
};
use crate::ports::outbound::{
    BanGateway, BanStatus, ConclusionHandle, ConclusionScheduler, NpcStage, SignBoard,
    TrialAnnouncer,
};
use crate::presentation::SignText;

/// Outbound collaborators of the coordinator
#[derive(Clone)]
pub struct TrialPorts {
    pub announcer: Arc<dyn TrialAnnouncer>,
    pub bans: Arc<dyn BanGateway>,
    pub npc: Arc<dyn NpcStage>,
    pub signs: Arc<dyn SignBoard>,
    pub scheduler: Arc<dyn ConclusionScheduler>,
}

/// Internal state guarded by the coordinator mutex
#[derive(Default)]
struct CoordinatorState {
    /// Idle / Active / Concluding
    trial: TrialState,
    /// Suspects awaiting trial
    queue: SuspectQueue,
    /// Armed timer of the active trial
    conclusion: Option<Box<dyn ConclusionHandle>>,
    /// Voting arena; `None` means votes are accepted anywhere
    zone: Option<EligibilityZone>,
    /// Where the suspect NPC appears
    npc_spawn: Option<Location>,
    /// Bound ban sign
    ban_sign: Option<Location>,
    /// In-progress zone definitions by admin
    zone_selections: HashMap<PlayerId, PendingZoneSelection>,
    /// Admins whose next secondary click binds the ban sign
    sign_bindings: HashSet<PlayerId>,
}

impl CoordinatorState {
    fn disarm_conclusion(&mut self) {
        if let Some(handle) = self.conclusion.take() {
            handle.cancel();
        }
    }
}

/// Trial coordinator
pub struct TrialCoordinator {
    config: TrialConfig,
    state: Mutex<CoordinatorState>,
    ports: TrialPorts,
}

impl TrialCoordinator {
    /// Build a coordinator. Fails when `config` does not validate.
    pub fn new(config: TrialConfig, ports: TrialPorts) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: Mutex::new(CoordinatorState::default()),
            ports,
        })
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Accusee of the running trial.
    pub fn active_suspect(&self) -> Option<Player> {
        self.state.lock().trial.active().map(TrialSession::suspect)
    }

    /// Queued suspects in trial order.
    pub fn queued_suspects(&self) -> Vec<Player> {
        self.state.lock().queue.iter().map(QueuedSuspect::suspect).collect()
    }

    pub fn npc_location(&self) -> Option<Location> {
        self.state.lock().npc_spawn
    }

    pub fn ban_sign(&self) -> Option<Location> {
        self.state.lock().ban_sign
    }

    /// Whether `admin` has a zone selection in progress.
    pub fn is_selecting_zone(&self, admin: PlayerId) -> bool {
        self.state.lock().zone_selections.contains_key(&admin)
    }

    /// Whether `admin`'s next secondary click binds the ban sign.
    pub fn is_binding_sign(&self, admin: PlayerId) -> bool {
        self.state.lock().sign_bindings.contains(&admin)
    }

    /// Write the accusee's lines to the bound sign.
    fn write_accusation_sign(
        &self,
        sign: Option<Location>,
        suspect: &Player,
        accusation: &str,
        notices: &mut Vec<CollaboratorNotice>,
    ) {
        let Some(at) = sign else {
            notices.push(CollaboratorNotice::BanSignUnset);
            return;
        };
        let text = SignText::accusation(&suspect.name, accusation, self.config.sign_line_width);
        if let Err(e) = self.ports.signs.write(at, &text) {
            let reason = e.to_string();
            let failure = e.into_trial_error("ban sign");
            warn!(location = %at.position, error = %failure, "Configured ban sign could not be updated");
            notices.push(CollaboratorNotice::BanSignFailed(reason));
        }
    }

    fn bind_sign(&self, admin: PlayerId, at: Location) -> InteractionOutcome {
        if !self.ports.signs.is_sign(at) {
            debug!(admin = %admin, location = %at.position, "Ban sign binding dropped, not a sign");
            return InteractionOutcome::NotASign;
        }
        self.state.lock().ban_sign = Some(at);
        if let Err(e) = self.ports.signs.write(at, &SignText::idle()) {
            warn!(location = %at.position, error = %e, "Freshly bound ban sign could not be reset");
        }
        info!(admin = %admin, location = %at.position, "Ban sign bound");
        InteractionOutcome::SignBound(at)
    }

    fn advance_zone_selection(
        &self,
        admin: PlayerId,
        interaction: Interaction,
        at: Location,
    ) -> Vec<InteractionOutcome> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let Some(selection) = state.zone_selections.get_mut(&admin) else {
            return Vec::new();
        };

        let mut outcomes = Vec::new();
        match selection.apply(interaction, at) {
            SelectionStep::WorldMismatch => {
                state.zone_selections.remove(&admin);
                debug!(admin = %admin, "Zone selection aborted, click in another world");
                return vec![InteractionOutcome::SelectionAborted];
            }
            SelectionStep::FirstCornerSet(pos) => {
                outcomes.push(InteractionOutcome::FirstCornerSet(pos))
            }
            SelectionStep::SecondCornerSet(pos) => {
                outcomes.push(InteractionOutcome::SecondCornerSet(pos))
            }
        }

        if selection.is_complete() {
            match selection.finalize() {
                Ok(zone) => {
                    state.zone = Some(zone);
                    state.zone_selections.remove(&admin);
                    info!(
                        admin = %admin,
                        min = %zone.min(),
                        max = %zone.max(),
                        "Voting zone updated"
                    );
                    outcomes.push(InteractionOutcome::ZoneDefined(zone));
                }
                Err(e) => warn!(admin = %admin, error = %e, "Zone selection could not be finalized"),
            }
        }
        outcomes
    }
}

impl TrialApi for TrialCoordinator {
    fn start_trial(
        &self,
        suspect: Option<Player>,
        reason: Option<&str>,
    ) -> TrialResult<TrialStarted> {
        let (trial_id, suspect, accusation, ban_sign) = {
            let mut state = self.state.lock();
            if !state.trial.is_idle() {
                return Err(TrialError::AlreadyActive);
            }

            let target = match suspect {
                Some(player) => {
                    state.queue.remove(player.id);
                    QueuedSuspect::new(&player, reason, &self.config.default_accusation)
                }
                None => state.queue.dequeue_next().ok_or(TrialError::QueueEmpty)?,
            };

            if state.conclusion.is_some() {
                warn!("Stale conclusion timer found while idle, cancelling it");
                state.disarm_conclusion();
            }

            let (trial_id, suspect, accusation) = {
                let session = state.trial.start(TrialSession::new(target))?;
                (session.id(), session.suspect(), session.accusation().to_string())
            };
            state.conclusion = Some(
                self.ports
                    .scheduler
                    .schedule(trial_id, self.config.trial_duration),
            );
            metrics::set_queue_depth(state.queue.len());
            (trial_id, suspect, accusation, state.ban_sign)
        };

        let mut notices = Vec::new();
        if ban_sign.is_some() {
            self.write_accusation_sign(ban_sign, &suspect, &accusation, &mut notices);
        }
        self.ports.announcer.announce(&Announcement::TrialStarted {
            trial_id,
            suspect: suspect.clone(),
            accusation: accusation.clone(),
        });
        self.ports.npc.despawn();

        metrics::record_trial_started();
        info!(
            trial_id = %trial_id,
            suspect = %suspect.name,
            accusation = %accusation,
            duration_secs = self.config.trial_duration.as_secs(),
            "Botany Bay trial started"
        );

        Ok(TrialStarted {
            trial_id,
            suspect,
            accusation,
            notices,
        })
    }

    fn queue_suspect(&self, suspect: Player, reason: Option<&str>) -> TrialResult<QueueReceipt> {
        let (position, accusation, npc_spawn, ban_sign) = {
            let mut state = self.state.lock();
            if state.trial.is_suspect(suspect.id) {
                return Err(TrialError::AlreadyOnTrial);
            }
            if state.queue.contains(suspect.id) {
                return Err(TrialError::AlreadyQueued);
            }

            let entry = QueuedSuspect::new(&suspect, reason, &self.config.default_accusation);
            let accusation = entry.accusation().to_string();
            let position = state.queue.enqueue(entry)?;
            metrics::set_queue_depth(state.queue.len());
            (position, accusation, state.npc_spawn, state.ban_sign)
        };

        let mut notices = Vec::new();

        match self.ports.bans.issue_ban(&suspect, &accusation) {
            Ok(BanStatus::Issued) => {}
            Ok(BanStatus::AlreadyBanned) => notices.push(CollaboratorNotice::AlreadyBanned),
            Err(e) => {
                let reason = e.to_string();
                let failure = e.into_trial_error("ban service");
                warn!(suspect = %suspect.name, error = %failure, "Ban issuance failed, queued regardless");
                notices.push(CollaboratorNotice::BanFailed(reason));
            }
        }

        match npc_spawn {
            Some(at) => {
                self.ports.npc.despawn();
                if let Err(e) = self.ports.npc.spawn(&suspect, at) {
                    let reason = e.to_string();
                    let failure = e.into_trial_error("npc stage");
                    warn!(
                        suspect = %suspect.name,
                        location = %at.position,
                        error = %failure,
                        "Failed to spawn suspect NPC"
                    );
                    notices.push(CollaboratorNotice::NpcSpawnFailed(reason));
                }
            }
            None => notices.push(CollaboratorNotice::NpcSpawnUnset),
        }

        self.write_accusation_sign(ban_sign, &suspect, &accusation, &mut notices);

        self.ports.announcer.announce(&Announcement::SuspectQueued {
            suspect: suspect.clone(),
            position,
        });

        metrics::record_suspect_queued();
        info!(
            suspect = %suspect.name,
            accusation = %accusation,
            position,
            "Suspect banned and added to the Botany Bay queue"
        );

        Ok(QueueReceipt {
            position,
            accusation,
            notices,
        })
    }

    fn cast_vote(
        &self,
        voter: PlayerId,
        option: &str,
        location: Location,
    ) -> TrialResult<VoteOutcome> {
        let mut state = self.state.lock();
        let (trial_id, suspect_id) = match state.trial.active() {
            Some(session) => (session.id(), session.suspect_id()),
            None => return Err(TrialError::NoActiveTrial),
        };
        if voter == suspect_id {
            return Err(TrialError::SuspectCannotVote);
        }
        if let Some(zone) = &state.zone {
            if !zone.contains_location(&location) {
                return Err(TrialError::OutsideEligibleZone);
            }
        }
        let option = PunishmentOption::resolve(option).ok_or_else(|| TrialError::UnknownOption {
            input: option.trim().to_string(),
        })?;

        let receipt = state.trial.cast_vote(voter, option)?;
        let tally = state
            .trial
            .active()
            .map(TrialSession::tally)
            .unwrap_or_default();

        metrics::record_vote(receipt.changed());
        debug!(
            trial_id = %trial_id,
            voter = %voter,
            option = option.id(),
            changed = receipt.changed(),
            "Vote recorded"
        );

        Ok(VoteOutcome { receipt, tally })
    }

    fn cancel_trial(&self, dismissed_by: &str) -> TrialResult<Player> {
        let session = {
            let mut state = self.state.lock();
            let session = state.trial.cancel()?;
            state.disarm_conclusion();
            session
        };

        let suspect = session.suspect();
        self.ports.announcer.announce(&Announcement::TrialDismissed {
            trial_id: session.id(),
            suspect: suspect.clone(),
            dismissed_by: dismissed_by.to_string(),
        });

        metrics::record_trial_dismissed();
        info!(
            trial_id = %session.id(),
            suspect = %suspect.name,
            dismissed_by,
            "Botany Bay trial dismissed"
        );
        Ok(suspect)
    }

    fn on_conclusion_timer(&self, trial: TrialId) -> Option<Verdict> {
        let verdict = {
            let mut state = self.state.lock();
            match state.trial.active() {
                Some(session) if session.id() == trial => {}
                Some(session) => {
                    warn!(
                        fired = %trial,
                        active = %session.id(),
                        "Ignoring conclusion timer of a different trial"
                    );
                    return None;
                }
                None => {
                    debug!(trial_id = %trial, "Conclusion timer fired with no active trial");
                    return None;
                }
            }
            // fired; nothing left to cancel
            state.conclusion = None;
            state.trial.conclude()?
        };

        self.ports
            .announcer
            .announce(&Announcement::VerdictReached(verdict.clone()));

        metrics::record_verdict(verdict.outcome.id());
        info!(
            trial_id = %verdict.trial_id,
            suspect = %verdict.suspect.name,
            outcome = verdict.outcome.id(),
            votes = verdict.tally.total(),
            "Botany Bay trial concluded"
        );
        Some(verdict)
    }

    fn on_suspect_disconnected(&self, player: PlayerId) -> bool {
        let voided = {
            let mut state = self.state.lock();
            state.zone_selections.remove(&player);
            state.sign_bindings.remove(&player);

            if state.trial.is_suspect(player) {
                state.disarm_conclusion();
                state.trial.cancel().ok()
            } else {
                None
            }
        };

        let Some(session) = voided else {
            return false;
        };

        self.ports.announcer.announce(&Announcement::TrialVoided {
            trial_id: session.id(),
            suspect: session.suspect(),
        });

        metrics::record_trial_voided();
        info!(
            trial_id = %session.id(),
            suspect = %session.suspect_name(),
            "Accused disconnected, trial voided"
        );
        true
    }

    fn on_interaction(
        &self,
        actor: PlayerId,
        interaction: Interaction,
        location: Location,
    ) -> Vec<InteractionOutcome> {
        let mut outcomes = Vec::new();

        if interaction == Interaction::Secondary {
            let binding = self.state.lock().sign_bindings.remove(&actor);
            if binding {
                outcomes.push(self.bind_sign(actor, location));
            }
        }

        outcomes.extend(self.advance_zone_selection(actor, interaction, location));
        outcomes
    }

    fn set_npc_location(&self, location: Location) {
        self.state.lock().npc_spawn = Some(location);
        self.ports.npc.despawn();
        info!(location = %location.position, "NPC spawn point set");
    }

    fn begin_zone_selection(&self, admin: PlayerId, world: WorldId) {
        self.state
            .lock()
            .zone_selections
            .insert(admin, PendingZoneSelection::new(world));
        debug!(admin = %admin, world = %world, "Zone selection started");
    }

    fn begin_sign_binding(&self, admin: PlayerId) {
        self.state.lock().sign_bindings.insert(admin);
        debug!(admin = %admin, "Waiting for ban sign click");
    }

    fn status(&self) -> Option<TrialStatus> {
        let state = self.state.lock();
        state.trial.active().map(|session| TrialStatus {
            trial_id: session.id(),
            suspect: session.suspect(),
            accusation: session.accusation().to_string(),
            remaining: session.remaining(self.config.trial_duration),
            tally: session.tally(),
            queue_len: state.queue.len(),
        })
    }

    fn phase(&self) -> TrialPhase {
        self.state.lock().trial.phase()
    }

    fn queue_len(&self) -> usize {
        self.state.lock().queue.len()
    }

    fn zone(&self) -> Option<EligibilityZone> {
        self.state.lock().zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        ManualScheduler, MockBanGateway, MockNpcStage, MockSignBoard, RecordingAnnouncer,
    };
    use crate::domain::{BlockPos, WorldId};
    use std::time::Duration;

    struct Fixture {
        coordinator: TrialCoordinator,
        scheduler: Arc<ManualScheduler>,
        announcer: Arc<RecordingAnnouncer>,
        npc: Arc<MockNpcStage>,
        world: WorldId,
    }

    fn fixture() -> Fixture {
        let scheduler = Arc::new(ManualScheduler::new());
        let announcer = Arc::new(RecordingAnnouncer::new());
        let npc = Arc::new(MockNpcStage::new());
        let ports = TrialPorts {
            announcer: announcer.clone(),
            bans: Arc::new(MockBanGateway::new()),
            npc: npc.clone(),
            signs: Arc::new(MockSignBoard::new()),
            scheduler: scheduler.clone(),
        };
        Fixture {
            coordinator: TrialCoordinator::new(TrialConfig::default(), ports).unwrap(),
            scheduler,
            announcer,
            npc,
            world: WorldId::random(),
        }
    }

    fn player(name: &str) -> Player {
        Player::new(PlayerId::random(), name)
    }

    #[test]
    fn test_start_arms_timer_for_trial_duration() {
        let f = fixture();
        let started = f
            .coordinator
            .start_trial(Some(player("Zezima")), Some("macroing"))
            .unwrap();

        let armed = f.scheduler.armed();
        assert_eq!(armed.len(), 1);
        assert_eq!(armed[0].trial, started.trial_id);
        assert_eq!(armed[0].delay, Duration::from_secs(120));
        assert_eq!(f.coordinator.phase(), TrialPhase::Active);
    }

    #[test]
    fn test_start_without_queue_fails() {
        let f = fixture();
        assert_eq!(
            f.coordinator.start_trial(None, None).unwrap_err(),
            TrialError::QueueEmpty
        );
        assert!(f.scheduler.armed().is_empty());
    }

    #[test]
    fn test_explicit_suspect_leaves_queue() {
        let f = fixture();
        let suspect = player("Zezima");
        f.coordinator.queue_suspect(suspect.clone(), None).unwrap();
        assert_eq!(f.coordinator.queue_len(), 1);

        let started = f.coordinator.start_trial(Some(suspect), None).unwrap();
        assert_eq!(started.accusation, "Botting-related offences");
        assert_eq!(f.coordinator.queue_len(), 0);
    }

    #[test]
    fn test_queue_rejects_active_suspect_and_duplicates() {
        let f = fixture();
        let accused = player("Zezima");
        let waiting = player("Woox");
        f.coordinator.start_trial(Some(accused.clone()), None).unwrap();
        f.coordinator.queue_suspect(waiting.clone(), None).unwrap();

        assert_eq!(
            f.coordinator.queue_suspect(accused, None).unwrap_err(),
            TrialError::AlreadyOnTrial
        );
        assert_eq!(
            f.coordinator.queue_suspect(waiting, None).unwrap_err(),
            TrialError::AlreadyQueued
        );
        assert_eq!(f.coordinator.queue_len(), 1);
    }

    #[test]
    fn test_queue_reports_missing_npc_and_sign() {
        let f = fixture();
        let receipt = f.coordinator.queue_suspect(player("Zezima"), None).unwrap();
        assert_eq!(receipt.position, 1);
        assert!(receipt.notices.contains(&CollaboratorNotice::NpcSpawnUnset));
        assert!(receipt.notices.contains(&CollaboratorNotice::BanSignUnset));
    }

    #[test]
    fn test_vote_error_precedence() {
        let f = fixture();
        let suspect = player("Zezima");
        let at = Location::new(f.world, BlockPos::new(0, 64, 0));

        assert_eq!(
            f.coordinator.cast_vote(suspect.id, "execute", at).unwrap_err(),
            TrialError::NoActiveTrial
        );

        f.coordinator.start_trial(Some(suspect.clone()), None).unwrap();
        assert_eq!(
            f.coordinator.cast_vote(suspect.id, "nonsense", at).unwrap_err(),
            TrialError::SuspectCannotVote
        );
        assert_eq!(
            f.coordinator
                .cast_vote(PlayerId::random(), "exile", at)
                .unwrap_err(),
            TrialError::UnknownOption {
                input: "exile".to_string()
            }
        );
    }

    #[test]
    fn test_vote_outside_zone_rejected() {
        let f = fixture();
        let admin = PlayerId::random();
        f.coordinator.begin_zone_selection(admin, f.world);
        f.coordinator.on_interaction(
            admin,
            Interaction::Primary,
            Location::new(f.world, BlockPos::new(10, 70, 10)),
        );
        f.coordinator.on_interaction(
            admin,
            Interaction::Secondary,
            Location::new(f.world, BlockPos::new(-10, 60, -10)),
        );
        assert!(f.coordinator.zone().is_some());

        f.coordinator.start_trial(Some(player("Zezima")), None).unwrap();
        let voter = PlayerId::random();
        let outside = Location::new(f.world, BlockPos::new(11, 65, 0));
        assert_eq!(
            f.coordinator.cast_vote(voter, "pillory", outside).unwrap_err(),
            TrialError::OutsideEligibleZone
        );
        let elsewhere = Location::new(WorldId::random(), BlockPos::new(0, 65, 0));
        assert_eq!(
            f.coordinator.cast_vote(voter, "pillory", elsewhere).unwrap_err(),
            TrialError::OutsideEligibleZone
        );
        let inside = Location::new(f.world, BlockPos::new(10, 60, -10));
        assert!(f.coordinator.cast_vote(voter, "pillory", inside).is_ok());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let f = fixture();
        let first = f
            .coordinator
            .start_trial(Some(player("Zezima")), None)
            .unwrap();
        f.coordinator.cancel_trial("Console").unwrap();
        let second = f.coordinator.start_trial(Some(player("Woox")), None).unwrap();

        assert!(f.coordinator.on_conclusion_timer(first.trial_id).is_none());
        assert_eq!(f.coordinator.phase(), TrialPhase::Active);

        let verdict = f.coordinator.on_conclusion_timer(second.trial_id).unwrap();
        assert_eq!(verdict.suspect.name, "Woox");
        assert_eq!(verdict.outcome, PunishmentOption::Release);
        assert_eq!(f.coordinator.phase(), TrialPhase::Idle);
    }

    #[test]
    fn test_cancel_disarms_timer() {
        let f = fixture();
        f.coordinator.start_trial(Some(player("Zezima")), None).unwrap();
        f.coordinator.cancel_trial("Admin").unwrap();
        assert!(f.scheduler.armed()[0].is_cancelled());
        assert_eq!(
            f.coordinator.cancel_trial("Admin").unwrap_err(),
            TrialError::NoActiveTrial
        );
    }

    #[test]
    fn test_set_npc_location_despawns() {
        let f = fixture();
        let at = Location::new(f.world, BlockPos::new(5, 64, 5));
        f.coordinator.set_npc_location(at);
        f.coordinator.queue_suspect(player("Zezima"), None).unwrap();
        assert_eq!(f.npc.current().map(|(p, _)| p.name), Some("Zezima".to_string()));

        f.coordinator.set_npc_location(at);
        assert!(f.npc.current().is_none());
    }

    #[test]
    fn test_status_when_idle_and_active() {
        let f = fixture();
        assert!(f.coordinator.status().is_none());

        f.coordinator.queue_suspect(player("Woox"), None).unwrap();
        f.coordinator.start_trial(Some(player("Zezima")), Some("fishing")).unwrap();
        let status = f.coordinator.status().unwrap();
        assert_eq!(status.suspect.name, "Zezima");
        assert_eq!(status.accusation, "fishing");
        assert_eq!(status.queue_len, 1);
        assert!(status.remaining <= Duration::from_secs(120));
        assert_eq!(status.tally.total(), 0);
    }

    #[test]
    fn test_announcements_follow_lifecycle() {
        let f = fixture();
        let started = f
            .coordinator
            .start_trial(Some(player("Zezima")), None)
            .unwrap();
        f.coordinator.on_conclusion_timer(started.trial_id);

        let seen = f.announcer.announcements();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], Announcement::TrialStarted { .. }));
        assert!(matches!(seen[1], Announcement::VerdictReached(_)));
    }

    #[test]
    fn test_new_rejects_unusable_sign_width() {
        let ports = TrialPorts {
            announcer: Arc::new(RecordingAnnouncer::new()),
            bans: Arc::new(MockBanGateway::new()),
            npc: Arc::new(MockNpcStage::new()),
            signs: Arc::new(MockSignBoard::new()),
            scheduler: Arc::new(ManualScheduler::new()),
        };
        let config = TrialConfig {
            sign_line_width: 0,
            ..TrialConfig::default()
        };
        assert!(matches!(
            TrialCoordinator::new(config, ports.clone()),
            Err(ConfigError::SignTooNarrow { width: 0 })
        ));

        let config = TrialConfig::default().with_trial_duration(Duration::ZERO);
        assert!(matches!(
            TrialCoordinator::new(config, ports),
            Err(ConfigError::ZeroTrialDuration)
        ));
    }
}
