//! # Trial Session
//!
//! One bounded voting period for one suspect, and the state machine that
//! guarantees at most one of them exists.
//!
//! ```text
//! [IDLE] ──start──→ [ACTIVE] ──conclude──→ [CONCLUDING] ──verdict──→ [IDLE]
//!                      │  ↺ cast_vote
//!                      └──────cancel / suspect fled──────────────────→ [IDLE]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::identity::{Player, PlayerId, TrialId};
use super::punishment::PunishmentOption;
use super::suspect::QueuedSuspect;
use super::tally::Tally;
use crate::error::{TrialError, TrialResult};

/// State of a single trial: the accused, the charge and one vote per voter.
#[derive(Clone, Debug)]
pub struct TrialSession {
    id: TrialId,
    suspect_id: PlayerId,
    suspect_name: String,
    accusation: String,
    started_at: Instant,
    votes: HashMap<PlayerId, PunishmentOption>,
}

/// Result of a vote cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    /// The option now held by the voter
    pub option: PunishmentOption,
    /// The voter's previous choice, if they had already voted
    pub previous: Option<PunishmentOption>,
}

impl VoteReceipt {
    /// Whether this cast replaced an earlier vote.
    pub fn changed(&self) -> bool {
        self.previous.is_some()
    }
}

impl TrialSession {
    /// Open a session for the given suspect, starting the clock now.
    pub fn new(suspect: QueuedSuspect) -> Self {
        Self::started_at(suspect, Instant::now())
    }

    /// Open a session with an explicit start instant.
    pub fn started_at(suspect: QueuedSuspect, started_at: Instant) -> Self {
        Self {
            id: TrialId::new(),
            suspect_id: suspect.suspect_id(),
            suspect_name: suspect.suspect_name().to_string(),
            accusation: suspect.accusation().to_string(),
            started_at,
            votes: HashMap::new(),
        }
    }

    pub fn id(&self) -> TrialId {
        self.id
    }

    pub fn suspect_id(&self) -> PlayerId {
        self.suspect_id
    }

    pub fn suspect_name(&self) -> &str {
        &self.suspect_name
    }

    pub fn suspect(&self) -> Player {
        Player::new(self.suspect_id, self.suspect_name.clone())
    }

    pub fn accusation(&self) -> &str {
        &self.accusation
    }

    pub fn started(&self) -> Instant {
        self.started_at
    }

    /// Insert or overwrite the voter's choice (last write wins).
    pub fn cast_vote(
        &mut self,
        voter: PlayerId,
        option: PunishmentOption,
    ) -> TrialResult<VoteReceipt> {
        if voter == self.suspect_id {
            return Err(TrialError::SuspectCannotVote);
        }
        let previous = self.votes.insert(voter, option);
        Ok(VoteReceipt { option, previous })
    }

    pub fn vote_of(&self, voter: PlayerId) -> Option<PunishmentOption> {
        self.votes.get(&voter).copied()
    }

    /// Number of distinct voters.
    pub fn voter_count(&self) -> usize {
        self.votes.len()
    }

    /// Current counts for every option.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for option in self.votes.values() {
            tally.record(*option);
        }
        tally
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Time left of `total`, clamped at zero.
    pub fn remaining(&self, total: Duration) -> Duration {
        self.remaining_at(total, Instant::now())
    }

    /// Time left of `total` as seen at `now`, clamped at zero.
    pub fn remaining_at(&self, total: Duration, now: Instant) -> Duration {
        total.saturating_sub(now.saturating_duration_since(self.started_at))
    }
}

/// Observable lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrialPhase {
    /// No trial running
    #[default]
    Idle,
    /// Accepting votes
    Active,
    /// Verdict being computed; votes are refused
    Concluding,
}

/// Final result of a concluded trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub trial_id: TrialId,
    pub suspect: Player,
    pub accusation: String,
    pub tally: Tally,
    pub outcome: PunishmentOption,
}

/// Single-slot trial state machine.
#[derive(Debug, Default)]
pub enum TrialState {
    #[default]
    Idle,
    Active(TrialSession),
    Concluding(TrialSession),
}

impl TrialState {
    pub fn phase(&self) -> TrialPhase {
        match self {
            Self::Idle => TrialPhase::Idle,
            Self::Active(_) => TrialPhase::Active,
            Self::Concluding(_) => TrialPhase::Concluding,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Idle → Active.
    pub fn start(&mut self, session: TrialSession) -> TrialResult<&TrialSession> {
        if !self.is_idle() {
            return Err(TrialError::AlreadyActive);
        }
        *self = Self::Active(session);
        self.active().ok_or(TrialError::NoActiveTrial)
    }

    /// The session accepting votes, if any.
    pub fn active(&self) -> Option<&TrialSession> {
        match self {
            Self::Active(session) => Some(session),
            _ => None,
        }
    }

    /// Whether `player` is the accused of the running trial.
    pub fn is_suspect(&self, player: PlayerId) -> bool {
        self.active()
            .is_some_and(|session| session.suspect_id() == player)
    }

    /// Cast a vote into the active session.
    pub fn cast_vote(
        &mut self,
        voter: PlayerId,
        option: PunishmentOption,
    ) -> TrialResult<VoteReceipt> {
        match self {
            Self::Active(session) => session.cast_vote(voter, option),
            _ => Err(TrialError::NoActiveTrial),
        }
    }

    /// Active → Idle without a verdict.
    pub fn cancel(&mut self) -> TrialResult<TrialSession> {
        match std::mem::take(self) {
            Self::Active(session) => Ok(session),
            other => {
                *self = other;
                Err(TrialError::NoActiveTrial)
            }
        }
    }

    /// Active → Concluding → Idle, producing the verdict.
    ///
    /// Returns `None` (and changes nothing) when no trial is active.
    pub fn conclude(&mut self) -> Option<Verdict> {
        if !matches!(self, Self::Active(_)) {
            return None;
        }
        if let Self::Active(session) = std::mem::take(self) {
            *self = Self::Concluding(session);
        }

        let verdict = match &*self {
            Self::Concluding(session) => {
                let tally = session.tally();
                Some(Verdict {
                    trial_id: session.id(),
                    suspect: session.suspect(),
                    accusation: session.accusation().to_string(),
                    outcome: tally.outcome(),
                    tally,
                })
            }
            _ => None,
        };
        *self = Self::Idle;
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PunishmentOption::{Execute, Pillory, Release};

    fn session() -> TrialSession {
        TrialSession::new(QueuedSuspect::new(
            &Player::new(PlayerId::random(), "Zezima"),
            Some("auto-mining"),
            "Botting-related offences",
        ))
    }

    #[test]
    fn test_first_vote_and_change() {
        let mut s = session();
        let voter = PlayerId::random();

        let first = s.cast_vote(voter, Execute).unwrap();
        assert!(!first.changed());

        let second = s.cast_vote(voter, Release).unwrap();
        assert!(second.changed());
        assert_eq!(second.previous, Some(Execute));
        assert_eq!(s.vote_of(voter), Some(Release));
    }

    #[test]
    fn test_revotes_do_not_double_count() {
        let mut s = session();
        let voters: Vec<_> = (0..5).map(|_| PlayerId::random()).collect();
        for (i, voter) in voters.iter().enumerate() {
            s.cast_vote(*voter, PunishmentOption::ALL[i % 3]).unwrap();
        }
        // everyone changes their mind twice
        for voter in &voters {
            s.cast_vote(*voter, Pillory).unwrap();
            s.cast_vote(*voter, Execute).unwrap();
        }
        let tally = s.tally();
        assert_eq!(tally.total() as usize, voters.len());
        assert_eq!(tally.get(Execute), 5);
        assert_eq!(s.voter_count(), 5);
    }

    #[test]
    fn test_suspect_cannot_vote() {
        let mut s = session();
        let suspect = s.suspect_id();
        assert_eq!(s.cast_vote(suspect, Release), Err(TrialError::SuspectCannotVote));
        assert_eq!(s.tally().total(), 0);
    }

    #[test]
    fn test_remaining_clamps_to_zero() {
        let start = Instant::now();
        let s = TrialSession::started_at(
            QueuedSuspect::new(&Player::new(PlayerId::random(), "x"), None, "d"),
            start,
        );
        let total = Duration::from_secs(120);
        assert_eq!(s.remaining_at(total, start), total);
        assert_eq!(
            s.remaining_at(total, start + Duration::from_secs(45)),
            Duration::from_secs(75)
        );
        assert_eq!(
            s.remaining_at(total, start + Duration::from_secs(600)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_state_start_twice_fails_and_keeps_votes() {
        let mut state = TrialState::default();
        state.start(session()).unwrap();
        let voter = PlayerId::random();
        state.cast_vote(voter, Pillory).unwrap();

        assert_eq!(state.start(session()).unwrap_err(), TrialError::AlreadyActive);
        assert_eq!(state.active().unwrap().vote_of(voter), Some(Pillory));
    }

    #[test]
    fn test_state_cancel_then_vote_fails() {
        let mut state = TrialState::default();
        state.start(session()).unwrap();
        state.cancel().unwrap();
        assert_eq!(state.phase(), TrialPhase::Idle);
        assert_eq!(
            state.cast_vote(PlayerId::random(), Execute),
            Err(TrialError::NoActiveTrial)
        );
        assert_eq!(state.cancel().unwrap_err(), TrialError::NoActiveTrial);
    }

    #[test]
    fn test_state_conclude_produces_verdict() {
        let mut state = TrialState::default();
        state.start(session()).unwrap();
        state.cast_vote(PlayerId::random(), Execute).unwrap();
        state.cast_vote(PlayerId::random(), Execute).unwrap();
        state.cast_vote(PlayerId::random(), Pillory).unwrap();

        let verdict = state.conclude().unwrap();
        assert_eq!(verdict.outcome, Execute);
        assert_eq!(verdict.tally.total(), 3);
        assert_eq!(verdict.suspect.name, "Zezima");
        assert!(state.is_idle());
    }

    #[test]
    fn test_state_conclude_when_idle_is_noop() {
        let mut state = TrialState::default();
        assert!(state.conclude().is_none());
        assert!(state.is_idle());
    }
}
