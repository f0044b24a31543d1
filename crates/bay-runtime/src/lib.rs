//! # bay-runtime
//!
//! Console host for the Botany Bay trial engine.
//!
//! The host stands in for a game server: players join and move by console
//! line, trial commands run as the console or as any online player, and every
//! broadcast, private reply, sign update and NPC change is printed.
//!
//! ```text
//! stdin ──lines──┐
//!                ├──→ BayHost control loop ──→ TrialCommandHandler ──→ TrialCoordinator
//! timers ───────┘            │
//!                             └──→ ConsoleOutput ──→ stdout
//! ```

pub mod adapters;
pub mod config;
pub mod console;
pub mod host;
pub mod output;

pub use config::{load_config, load_config_from};
pub use host::{BayHost, Flow};
pub use output::ConsoleOutput;
