//! In-memory world collaborators: ban list, suspect NPC and sign blocks.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::{Location, Player, PlayerId};
use crate::error::CollaboratorError;
use crate::ports::outbound::{BanGateway, BanStatus, NpcStage, SignBoard};
use crate::presentation::SignText;

/// Ban list with an optional forced failure.
#[derive(Default)]
pub struct MockBanGateway {
    bans: RwLock<HashMap<PlayerId, String>>,
    failure: RwLock<Option<CollaboratorError>>,
}

impl MockBanGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every following request with `error`.
    pub fn fail_with(&self, error: CollaboratorError) {
        *self.failure.write() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.write() = None;
    }

    pub fn is_banned(&self, player: PlayerId) -> bool {
        self.bans.read().contains_key(&player)
    }

    /// Reason recorded for `player`'s ban.
    pub fn reason(&self, player: PlayerId) -> Option<String> {
        self.bans.read().get(&player).cloned()
    }
}

impl BanGateway for MockBanGateway {
    fn issue_ban(&self, suspect: &Player, reason: &str) -> Result<BanStatus, CollaboratorError> {
        if let Some(error) = self.failure.read().clone() {
            return Err(error);
        }
        let mut bans = self.bans.write();
        if bans.contains_key(&suspect.id) {
            return Ok(BanStatus::AlreadyBanned);
        }
        bans.insert(suspect.id, reason.to_string());
        Ok(BanStatus::Issued)
    }
}

/// Tracks the single spawned stand-in.
#[derive(Default)]
pub struct MockNpcStage {
    current: RwLock<Option<(Player, Location)>>,
    failure: RwLock<Option<CollaboratorError>>,
    spawned: RwLock<Vec<Player>>,
}

impl MockNpcStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: CollaboratorError) {
        *self.failure.write() = Some(error);
    }

    pub fn current(&self) -> Option<(Player, Location)> {
        self.current.read().clone()
    }

    /// Every successful spawn, oldest first.
    pub fn spawn_history(&self) -> Vec<Player> {
        self.spawned.read().clone()
    }
}

impl NpcStage for MockNpcStage {
    fn spawn(&self, suspect: &Player, at: Location) -> Result<(), CollaboratorError> {
        if let Some(error) = self.failure.read().clone() {
            *self.current.write() = None;
            return Err(error);
        }
        *self.current.write() = Some((suspect.clone(), at));
        self.spawned.write().push(suspect.clone());
        Ok(())
    }

    fn despawn(&self) {
        *self.current.write() = None;
    }
}

/// Sign blocks placed in the mock world and their text.
#[derive(Default)]
pub struct MockSignBoard {
    signs: RwLock<HashMap<Location, Option<SignText>>>,
}

impl MockSignBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a blank sign at `at`.
    pub fn place_sign(&self, at: Location) {
        self.signs.write().insert(at, None);
    }

    /// Break the sign at `at`.
    pub fn remove_sign(&self, at: Location) {
        self.signs.write().remove(&at);
    }

    pub fn text_at(&self, at: Location) -> Option<SignText> {
        self.signs.read().get(&at).cloned().flatten()
    }
}

impl SignBoard for MockSignBoard {
    fn is_sign(&self, at: Location) -> bool {
        self.signs.read().contains_key(&at)
    }

    fn write(&self, at: Location, text: &SignText) -> Result<(), CollaboratorError> {
        match self.signs.write().get_mut(&at) {
            Some(slot) => {
                *slot = Some(text.clone());
                Ok(())
            }
            None => Err(CollaboratorError::Rejected(format!(
                "no sign at {}",
                at.position
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlockPos, WorldId};

    #[test]
    fn test_second_ban_reports_already_banned() {
        let gateway = MockBanGateway::new();
        let suspect = Player::new(PlayerId::random(), "Zezima");
        assert_eq!(gateway.issue_ban(&suspect, "macroing"), Ok(BanStatus::Issued));
        assert_eq!(gateway.issue_ban(&suspect, "again"), Ok(BanStatus::AlreadyBanned));
        assert_eq!(gateway.reason(suspect.id).as_deref(), Some("macroing"));
    }

    #[test]
    fn test_writing_a_missing_sign_fails() {
        let board = MockSignBoard::new();
        let at = Location::new(WorldId::random(), BlockPos::new(1, 2, 3));
        assert!(board.write(at, &SignText::idle()).is_err());

        board.place_sign(at);
        board.write(at, &SignText::idle()).unwrap();
        assert_eq!(board.text_at(at), Some(SignText::idle()));
    }
}
