//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports. They record every call
//! so tests and the console host can observe what the engine asked for.

mod announcer;
mod directory;
mod scheduler;
mod world;

pub use announcer::RecordingAnnouncer;
pub use directory::InMemoryDirectory;
pub use scheduler::{ArmedTimer, ManualScheduler};
pub use world::{MockBanGateway, MockNpcStage, MockSignBoard};
