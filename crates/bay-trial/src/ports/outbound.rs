//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The engine reaches the game host only through these traits. All calls are
//! fire-and-forget from the engine's point of view: a failure is logged and
//! surfaced as a notice, never retried, and never blocks trial progression.

use std::time::Duration;

use crate::domain::{Location, Player, TrialId};
use crate::error::CollaboratorError;
use crate::events::Announcement;
use crate::presentation::SignText;

/// Outcome of a ban request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BanStatus {
    /// A new ban was recorded (and the player kicked if online)
    Issued,
    /// The player was banned already; nothing changed
    AlreadyBanned,
}

/// Ban service of the host.
pub trait BanGateway: Send + Sync {
    /// Ban `suspect` for `reason`, kicking them if they are online.
    fn issue_ban(&self, suspect: &Player, reason: &str) -> Result<BanStatus, CollaboratorError>;
}

/// World representation of the queued suspect. At most one exists.
pub trait NpcStage: Send + Sync {
    /// Spawn a stand-in for `suspect` at `at`.
    fn spawn(&self, suspect: &Player, at: Location) -> Result<(), CollaboratorError>;

    /// Remove the current stand-in. No-op if none is spawned.
    fn despawn(&self);
}

/// Sign blocks in the world.
pub trait SignBoard: Send + Sync {
    /// Whether the block at `at` is a sign.
    fn is_sign(&self, at: Location) -> bool;

    /// Replace the sign's four lines.
    fn write(&self, at: Location, text: &SignText) -> Result<(), CollaboratorError>;
}

/// Server-wide broadcast channel.
pub trait TrialAnnouncer: Send + Sync {
    fn announce(&self, announcement: &Announcement);
}

/// Lookup of players by display name (the identity source).
pub trait PlayerDirectory: Send + Sync {
    fn find_by_name(&self, name: &str) -> Option<Player>;
}

/// Deferred one-shot timer that ends a trial.
///
/// Implementations must not invoke the coordinator from inside `schedule`;
/// the firing is delivered later as a separate event.
pub trait ConclusionScheduler: Send + Sync {
    /// Arrange for the conclusion of `trial` after `delay`.
    fn schedule(&self, trial: TrialId, delay: Duration) -> Box<dyn ConclusionHandle>;
}

/// Handle to an armed conclusion timer.
pub trait ConclusionHandle: Send {
    /// Disarm the timer. Idempotent; a no-op once fired.
    fn cancel(&self);
}
