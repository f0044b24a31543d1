//! Incoming events delivered by the host
//!
//! The host serialises every command, interaction, disconnect and timer
//! firing into one stream of [`HostEvent`]s handled on a single control loop.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{Interaction, Location, Player, PlayerId, TrialId};

/// Permission nodes guarding the command surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    Start,
    Ban,
    Vote,
    Status,
    Cancel,
    SetNpc,
    SetZone,
    SetBanSign,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Self::Start,
        Self::Ban,
        Self::Vote,
        Self::Status,
        Self::Cancel,
        Self::SetNpc,
        Self::SetZone,
        Self::SetBanSign,
    ];

    /// Permission node string.
    pub const fn node(self) -> &'static str {
        match self {
            Self::Start => "botanybay.command.start",
            Self::Ban => "botanybay.command.ban",
            Self::Vote => "botanybay.command.vote",
            Self::Status => "botanybay.command.status",
            Self::Cancel => "botanybay.command.cancel",
            Self::SetNpc => "botanybay.command.setnpc",
            Self::SetZone => "botanybay.command.setzone",
            Self::SetBanSign => "botanybay.command.setbansign",
        }
    }

    /// Permissions an ordinary spectator holds.
    pub fn spectator() -> BTreeSet<Permission> {
        [Self::Vote, Self::Status].into_iter().collect()
    }

    /// Every permission.
    pub fn admin() -> BTreeSet<Permission> {
        Self::ALL.into_iter().collect()
    }
}

/// Whoever invoked a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Actor {
    /// Server console; holds every permission but has no position
    Console,
    /// A connected player standing somewhere in a world
    Player {
        player: Player,
        location: Location,
        permissions: BTreeSet<Permission>,
    },
}

impl Actor {
    pub fn player(player: Player, location: Location, permissions: BTreeSet<Permission>) -> Self {
        Self::Player {
            player,
            location,
            permissions,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        match self {
            Self::Console => true,
            Self::Player { permissions, .. } => permissions.contains(&permission),
        }
    }

    /// Name shown in broadcasts.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Console => "Console",
            Self::Player { player, .. } => &player.name,
        }
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Self::Console => None,
            Self::Player { player, .. } => Some(player.id),
        }
    }
}

/// Event from the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// A `/botanybay ...` command line (without the root label)
    Command { actor: Actor, line: String },
    /// Main-hand block interaction
    Interaction {
        actor: PlayerId,
        interaction: Interaction,
        location: Location,
    },
    /// A player left the server
    Disconnected { player: PlayerId },
    /// A conclusion timer fired
    ConclusionDue { trial: TrialId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlockPos, WorldId};

    #[test]
    fn test_console_has_every_permission() {
        for permission in Permission::ALL {
            assert!(Actor::Console.has_permission(permission));
        }
    }

    #[test]
    fn test_spectator_permissions() {
        let actor = Actor::player(
            Player::new(PlayerId::random(), "crowd"),
            Location::new(WorldId::random(), BlockPos::default()),
            Permission::spectator(),
        );
        assert!(actor.has_permission(Permission::Vote));
        assert!(actor.has_permission(Permission::Status));
        assert!(!actor.has_permission(Permission::Start));
        assert!(!actor.has_permission(Permission::SetZone));
        assert_eq!(actor.display_name(), "crowd");
    }

    #[test]
    fn test_permission_nodes_are_distinct() {
        let nodes: BTreeSet<_> = Permission::ALL.iter().map(|p| p.node()).collect();
        assert_eq!(nodes.len(), Permission::ALL.len());
    }
}
