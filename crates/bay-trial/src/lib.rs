//! # bay-trial
//!
//! Botany Bay trial engine: a public punishment vote for players accused of
//! botting.
//!
//! ## Overview
//!
//! This crate provides:
//! - **Suspect queue**: FIFO backlog of banned suspects awaiting trial
//! - **Trial session**: one active trial at a time, one current vote per voter
//! - **Verdict**: highest tally wins; any tie on the top score releases the accused
//! - **Eligibility zone**: optional arena a voter must stand in
//!
//! ## Architecture
//!
//! ```text
//! Host ──HostEvent──→ TrialCommandHandler ──→ TrialCoordinator (TrialApi)
//!                                                  │
//!                                                  ├── BanGateway / NpcStage / SignBoard
//!                                                  ├── ConclusionScheduler ──ConclusionDue──→ Host
//!                                                  └── TrialAnnouncer ──Announcement──→ Host
//! ```
//!
//! ## Trial Lifecycle
//!
//! ```text
//! [IDLE] ──start──→ [ACTIVE] ──timer──→ [CONCLUDING] ──verdict──→ [IDLE]
//!                      │
//!                      └──cancel / accused disconnects──→ [IDLE] (no verdict)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use bay_trial::{TrialApi, TrialConfig, TrialCoordinator, TrialPorts};
//!
//! let coordinator = TrialCoordinator::new(TrialConfig::default(), ports)?;
//! coordinator.queue_suspect(suspect, Some("auto-fishing"))?;
//! let started = coordinator.start_trial(None, None)?;
//! coordinator.cast_vote(voter, "pillory", voter_location)?;
//!
//! // later, when the scheduler fires
//! let verdict = coordinator.on_conclusion_timer(started.trial_id);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod handler;
pub mod metrics;
pub mod ports;
pub mod presentation;
pub mod service;

pub use config::{ConfigError, TrialConfig};
pub use domain::{
    BlockPos, EligibilityZone, Interaction, Location, Player, PlayerId, PunishmentOption,
    QueuedSuspect, Tally, TrialId, TrialPhase, Verdict, VoteReceipt, WorldId,
};
pub use error::{CollaboratorError, TrialError, TrialResult};
pub use events::{Actor, Announcement, HostEvent, Permission};
pub use handler::{parse_command, Command, CommandReply, CommandStatus, TrialCommandHandler};
pub use ports::inbound::{
    CollaboratorNotice, InteractionOutcome, QueueReceipt, TrialApi, TrialStarted, TrialStatus,
    VoteOutcome,
};
pub use ports::outbound::{
    BanGateway, BanStatus, ConclusionHandle, ConclusionScheduler, NpcStage, PlayerDirectory,
    SignBoard, TrialAnnouncer,
};
pub use presentation::SignText;
pub use service::{TrialCoordinator, TrialPorts};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
