//! # Domain Module
//!
//! Core types for the trial engine. Nothing here performs I/O.
//!
//! ## Modules
//! - identity: player/world/trial ids, block coordinates
//! - punishment: the closed punishment catalog
//! - suspect, queue: the FIFO trial backlog
//! - session: the single-trial state machine and vote book
//! - tally: counts and the tie-break outcome rule
//! - zone, selection: the voting arena and its interactive definition

pub mod identity;
pub mod punishment;
pub mod queue;
pub mod selection;
pub mod session;
pub mod suspect;
pub mod tally;
pub mod zone;

pub use identity::{BlockPos, Location, Player, PlayerId, TrialId, WorldId};
pub use punishment::PunishmentOption;
pub use queue::SuspectQueue;
pub use selection::{Interaction, PendingZoneSelection, SelectionStep};
pub use session::{TrialPhase, TrialSession, TrialState, Verdict, VoteReceipt};
pub use suspect::{normalize_accusation, QueuedSuspect};
pub use tally::{determine_outcome, Tally};
pub use zone::EligibilityZone;
