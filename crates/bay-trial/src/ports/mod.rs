//! Ports layer (Hexagonal Architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::{
    CollaboratorNotice, InteractionOutcome, QueueReceipt, TrialApi, TrialStarted, TrialStatus,
    VoteOutcome,
};
pub use outbound::{
    BanGateway, BanStatus, ConclusionHandle, ConclusionScheduler, NpcStage, PlayerDirectory,
    SignBoard, TrialAnnouncer,
};
