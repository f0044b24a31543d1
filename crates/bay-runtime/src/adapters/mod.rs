//! # Adapters Layer
//!
//! Console implementations of the trial engine's outbound ports.

mod announcer;
mod bans;
mod roster;
mod scheduler;
mod world;

pub use announcer::ConsoleAnnouncer;
pub use bans::ServerBanList;
pub use roster::{OnlinePlayer, Roster, DEFAULT_WORLD};
pub use scheduler::TokioConclusionScheduler;
pub use world::{ConsoleNpcStage, WorldBlocks};
