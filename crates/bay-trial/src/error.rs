//! Error types for the trial engine
//!
//! Every variant is recoverable: it is reported to the invoking actor and the
//! coordinator state is left exactly as it was before the call.

use thiserror::Error;

/// Trial engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrialError {
    /// A trial is already running
    #[error("A Botany Bay trial is already in progress.")]
    AlreadyActive,

    /// No explicit suspect was given and the queue is empty
    #[error("No suspects are waiting for trial. Provide a suspect or use ban first.")]
    QueueEmpty,

    /// The suspect is the accused of the running trial
    #[error("That suspect is already on trial and cannot be queued again.")]
    AlreadyOnTrial,

    /// The suspect is already waiting in the queue
    #[error("That suspect is already waiting in the Botany Bay queue.")]
    AlreadyQueued,

    /// The accused tried to vote on their own punishment
    #[error("The accused cannot vote on their own punishment.")]
    SuspectCannotVote,

    /// The operation needs a running trial
    #[error("There is no active Botany Bay trial.")]
    NoActiveTrial,

    /// The voter stands outside the configured voting zone
    #[error("You must be inside the Botany Bay arena to cast a vote.")]
    OutsideEligibleZone,

    /// Free-text punishment did not resolve to a known option
    #[error("Unknown punishment option '{input}'. Choices are: execute, pillory, release.")]
    UnknownOption { input: String },

    /// The queue already holds this identity
    #[error("Suspect {suspect} is already present in the queue")]
    DuplicateSuspect { suspect: String },

    /// Zone finalisation attempted before both corners were chosen
    #[error("Zone selection is incomplete.")]
    ZoneIncomplete,

    /// An external collaborator call failed
    #[error("{collaborator} failed: {reason}")]
    CollaboratorFailure {
        collaborator: &'static str,
        reason: String,
    },

    /// The actor lacks the permission node for the command
    #[error("You do not have permission to use this command ({permission}).")]
    PermissionDenied { permission: String },

    /// The command needs an in-world player
    #[error("Only players present at Botany Bay may use this command.")]
    PlayerOnly,

    /// A named player is unknown to the host
    #[error("Unable to find the suspect '{name}'.")]
    UnknownPlayer { name: String },

    /// The command line could not be understood
    #[error("Usage: {usage}")]
    InvalidCommand { usage: String },
}

/// Result type for trial operations
pub type TrialResult<T> = Result<T, TrialError>;

/// Failure reported by an outbound collaborator (ban service, NPC stage, sign board)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The backing service is not reachable
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The service refused or failed the request
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl CollaboratorError {
    /// Attach the collaborator name, producing a reportable trial error
    pub fn into_trial_error(self, collaborator: &'static str) -> TrialError {
        TrialError::CollaboratorFailure {
            collaborator,
            reason: self.to_string(),
        }
    }
}
