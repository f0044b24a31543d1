//! Configuration for the trial engine

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Accusation used when a suspect is queued or tried without a reason
pub const DEFAULT_ACCUSATION: &str = "Botting-related offences";

/// Characters per line on a ban sign
pub const SIGN_LINE_WIDTH: usize = 15;

/// Length of a trial
pub const TRIAL_DURATION: Duration = Duration::from_secs(120);

/// Trial configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    /// How long voting stays open before the verdict
    pub trial_duration: Duration,
    /// Charge used when none (or a blank one) is given
    pub default_accusation: String,
    /// Characters per sign line
    pub sign_line_width: usize,
    /// Root command label shown in vote prompts
    pub command_label: String,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trial_duration: TRIAL_DURATION,
            default_accusation: DEFAULT_ACCUSATION.to_string(),
            sign_line_width: SIGN_LINE_WIDTH,
            command_label: "botanybay".to_string(),
        }
    }
}

impl TrialConfig {
    /// Override the trial length
    pub fn with_trial_duration(mut self, trial_duration: Duration) -> Self {
        self.trial_duration = trial_duration;
        self
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trial_duration.is_zero() {
            return Err(ConfigError::ZeroTrialDuration);
        }
        // room for at least one character plus the ellipsis
        if self.sign_line_width < 4 {
            return Err(ConfigError::SignTooNarrow {
                width: self.sign_line_width,
            });
        }
        if self.default_accusation.trim().is_empty() {
            return Err(ConfigError::BlankDefaultAccusation);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("trial duration must be greater than zero")]
    ZeroTrialDuration,

    #[error("sign line width {width} is too narrow (minimum 4)")]
    SignTooNarrow { width: usize },

    #[error("default accusation must not be blank")]
    BlankDefaultAccusation,
}
