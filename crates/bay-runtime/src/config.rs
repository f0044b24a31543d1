//! Runtime configuration
//!
//! Defaults come from [`TrialConfig::default`], then environment variables
//! override them, then command-line flags override both.

use bay_trial::TrialConfig;
use std::time::Duration;
use tracing::{info, warn};

/// Trial length in seconds
pub const ENV_TRIAL_SECS: &str = "BAY_TRIAL_SECS";
/// Charge used when none is given
pub const ENV_DEFAULT_ACCUSATION: &str = "BAY_DEFAULT_ACCUSATION";
/// Characters per ban sign line
pub const ENV_SIGN_WIDTH: &str = "BAY_SIGN_WIDTH";
/// Log filter directive
pub const ENV_LOG: &str = "BAY_LOG";

/// Load the trial configuration from the process environment.
pub fn load_config() -> TrialConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load the trial configuration using `lookup` for variables.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> TrialConfig {
    let mut config = TrialConfig::default();

    if let Some(secs) = lookup(ENV_TRIAL_SECS) {
        match secs.trim().parse::<u64>() {
            Ok(secs) => {
                config.trial_duration = Duration::from_secs(secs);
                info!(secs, "Loaded trial duration from environment");
            }
            Err(_) => warn!(value = %secs, "{ENV_TRIAL_SECS} must be a whole number of seconds"),
        }
    }

    if let Some(accusation) = lookup(ENV_DEFAULT_ACCUSATION) {
        if accusation.trim().is_empty() {
            warn!("{ENV_DEFAULT_ACCUSATION} is blank, keeping the default");
        } else {
            config.default_accusation = accusation.trim().to_string();
        }
    }

    if let Some(width) = lookup(ENV_SIGN_WIDTH) {
        match width.trim().parse::<usize>() {
            Ok(width) => config.sign_line_width = width,
            Err(_) => warn!(value = %width, "{ENV_SIGN_WIDTH} must be a positive number"),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(load_config_from(env(&[])), TrialConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = load_config_from(env(&[
            (ENV_TRIAL_SECS, "45"),
            (ENV_DEFAULT_ACCUSATION, " Macroing "),
            (ENV_SIGN_WIDTH, "20"),
        ]));
        assert_eq!(config.trial_duration, Duration::from_secs(45));
        assert_eq!(config.default_accusation, "Macroing");
        assert_eq!(config.sign_line_width, 20);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = load_config_from(env(&[
            (ENV_TRIAL_SECS, "two minutes"),
            (ENV_DEFAULT_ACCUSATION, "   "),
            (ENV_SIGN_WIDTH, "-3"),
        ]));
        assert_eq!(config, TrialConfig::default());
    }
}
