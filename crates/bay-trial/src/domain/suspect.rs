//! # Queued Suspect
//!
//! A suspect who has been banned and is waiting for a trial slot.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::identity::{Player, PlayerId};

/// Immutable queue entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedSuspect {
    suspect_id: PlayerId,
    suspect_name: String,
    accusation: String,
    queued_at: SystemTime,
}

impl QueuedSuspect {
    /// Create an entry. A blank accusation is replaced by `default_accusation`.
    pub fn new(suspect: &Player, accusation: Option<&str>, default_accusation: &str) -> Self {
        Self {
            suspect_id: suspect.id,
            suspect_name: suspect.name.clone(),
            accusation: normalize_accusation(accusation, default_accusation),
            queued_at: SystemTime::now(),
        }
    }

    pub fn suspect_id(&self) -> PlayerId {
        self.suspect_id
    }

    pub fn suspect_name(&self) -> &str {
        &self.suspect_name
    }

    pub fn accusation(&self) -> &str {
        &self.accusation
    }

    pub fn queued_at(&self) -> SystemTime {
        self.queued_at
    }

    pub fn suspect(&self) -> Player {
        Player::new(self.suspect_id, self.suspect_name.clone())
    }
}

/// Trim the given charge, falling back to `default_accusation` when it is absent or blank.
pub fn normalize_accusation(accusation: Option<&str>, default_accusation: &str) -> String {
    match accusation.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default_accusation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "Botting-related offences";

    #[test]
    fn test_blank_accusation_uses_default() {
        let player = Player::new(PlayerId::random(), "Zezima");
        assert_eq!(QueuedSuspect::new(&player, None, DEFAULT).accusation(), DEFAULT);
        assert_eq!(QueuedSuspect::new(&player, Some("   "), DEFAULT).accusation(), DEFAULT);
    }

    #[test]
    fn test_accusation_is_trimmed() {
        let player = Player::new(PlayerId::random(), "Zezima");
        let entry = QueuedSuspect::new(&player, Some("  auto-fishing "), DEFAULT);
        assert_eq!(entry.accusation(), "auto-fishing");
        assert_eq!(entry.suspect_name(), "Zezima");
        assert_eq!(entry.suspect_id(), player.id);
    }
}
