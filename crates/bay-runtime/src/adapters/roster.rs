//! Players known to the console host
//!
//! Every name that ever joined keeps its identity, so offline players can
//! still be accused. Online players have a location and a permission set.

use bay_trial::{
    Actor, BlockPos, Location, Permission, Player, PlayerDirectory, PlayerId, WorldId,
};
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};

/// World players spawn in.
pub const DEFAULT_WORLD: &str = "world";

const SPAWN: BlockPos = BlockPos::new(0, 64, 0);

/// A connected player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnlinePlayer {
    pub player: Player,
    pub location: Location,
    pub permissions: BTreeSet<Permission>,
}

#[derive(Default)]
pub struct Roster {
    known: RwLock<HashMap<String, Player>>,
    online: RwLock<HashMap<PlayerId, OnlinePlayer>>,
    worlds: RwLock<HashMap<String, WorldId>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the world called `name`, created on first use.
    pub fn world(&self, name: &str) -> WorldId {
        let key = name.to_lowercase();
        if let Some(id) = self.worlds.read().get(&key) {
            return *id;
        }
        *self.worlds.write().entry(key).or_insert_with(WorldId::random)
    }

    /// Identity for `name`, minting one for a first-time player.
    pub fn identity(&self, name: &str) -> Player {
        let key = name.to_lowercase();
        if let Some(player) = self.known.read().get(&key) {
            return player.clone();
        }
        self.known
            .write()
            .entry(key)
            .or_insert_with(|| Player::new(PlayerId::random(), name))
            .clone()
    }

    /// Bring `name` online at spawn. Re-joining keeps the current location.
    pub fn join(&self, name: &str, admin: bool) -> OnlinePlayer {
        let player = self.identity(name);
        let permissions = if admin {
            Permission::admin()
        } else {
            Permission::spectator()
        };
        let spawn = Location::new(self.world(DEFAULT_WORLD), SPAWN);

        let mut online = self.online.write();
        let entry = online.entry(player.id).or_insert_with(|| OnlinePlayer {
            player: player.clone(),
            location: spawn,
            permissions: permissions.clone(),
        });
        entry.permissions = permissions;
        entry.clone()
    }

    /// Take `player` offline. Returns false when they were not online.
    pub fn disconnect(&self, player: PlayerId) -> bool {
        self.online.write().remove(&player).is_some()
    }

    /// Move an online player.
    pub fn move_to(&self, player: PlayerId, location: Location) -> bool {
        match self.online.write().get_mut(&player) {
            Some(entry) => {
                entry.location = location;
                true
            }
            None => false,
        }
    }

    pub fn online(&self, name: &str) -> Option<OnlinePlayer> {
        let player = self.known.read().get(&name.to_lowercase())?.clone();
        self.online.read().get(&player.id).cloned()
    }

    pub fn online_by_id(&self, player: PlayerId) -> Option<OnlinePlayer> {
        self.online.read().get(&player).cloned()
    }

    /// Command actor for an online player.
    pub fn actor(&self, name: &str) -> Option<Actor> {
        self.online(name).map(|entry| {
            Actor::player(entry.player, entry.location, entry.permissions)
        })
    }

    /// Online players sorted by name.
    pub fn online_players(&self) -> Vec<OnlinePlayer> {
        let mut players: Vec<_> = self.online.read().values().cloned().collect();
        players.sort_by(|a, b| a.player.name.cmp(&b.player.name));
        players
    }
}

impl PlayerDirectory for Roster {
    fn find_by_name(&self, name: &str) -> Option<Player> {
        self.known.read().get(&name.trim().to_lowercase()).cloned()
    }
}
