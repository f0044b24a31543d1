//! Player directory backed by a name map.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::Player;
use crate::ports::outbound::PlayerDirectory;

/// Known players keyed by lowercase name.
#[derive(Default)]
pub struct InMemoryDirectory {
    players: RwLock<HashMap<String, Player>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, player: Player) {
        self.players
            .write()
            .insert(player.name.to_lowercase(), player);
    }

    pub fn remove(&self, name: &str) -> Option<Player> {
        self.players.write().remove(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }
}

impl PlayerDirectory for InMemoryDirectory {
    fn find_by_name(&self, name: &str) -> Option<Player> {
        self.players.read().get(&name.trim().to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;

    #[test]
    fn test_lookup_ignores_case() {
        let directory = InMemoryDirectory::new();
        let player = Player::new(PlayerId::random(), "Zezima");
        directory.insert(player.clone());

        assert_eq!(directory.find_by_name("zezima"), Some(player.clone()));
        assert_eq!(directory.find_by_name(" ZEZIMA "), Some(player));
        assert!(directory.find_by_name("Woox").is_none());
    }
}
