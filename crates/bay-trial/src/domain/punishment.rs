//! # Punishment Catalog
//!
//! The closed set of punishments a crowd may choose from. Display labels and
//! descriptions live in [`crate::presentation`]; this type carries data only.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TrialError;

/// A punishment the crowd can vote for.
///
/// Declaration order is the tie-break scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunishmentOption {
    Execute,
    Pillory,
    Release,
}

impl PunishmentOption {
    /// Every option, in enumeration order.
    pub const ALL: [PunishmentOption; 3] = [Self::Execute, Self::Pillory, Self::Release];

    /// Stable lowercase id, used in vote commands.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Execute => "execute",
            Self::Pillory => "pillory",
            Self::Release => "release",
        }
    }

    /// Canonical variant name.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Execute => "EXECUTE",
            Self::Pillory => "PILLORY",
            Self::Release => "RELEASE",
        }
    }

    /// Position in [`Self::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Execute => 0,
            Self::Pillory => 1,
            Self::Release => 2,
        }
    }

    /// Resolve free-text input against ids and canonical names, ignoring case
    /// and surrounding whitespace. Blank input resolves to nothing.
    pub fn resolve(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|option| {
            option.id() == normalized || option.canonical_name().to_lowercase() == normalized
        })
    }
}

impl FromStr for PunishmentOption {
    type Err = TrialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| TrialError::UnknownOption {
            input: s.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ids() {
        assert_eq!(PunishmentOption::resolve("execute"), Some(PunishmentOption::Execute));
        assert_eq!(PunishmentOption::resolve("pillory"), Some(PunishmentOption::Pillory));
        assert_eq!(PunishmentOption::resolve("release"), Some(PunishmentOption::Release));
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        assert_eq!(PunishmentOption::resolve("  PiLLoRy \t"), Some(PunishmentOption::Pillory));
        assert_eq!(PunishmentOption::resolve("RELEASE"), Some(PunishmentOption::Release));
    }

    #[test]
    fn test_resolve_blank_and_unknown() {
        assert_eq!(PunishmentOption::resolve(""), None);
        assert_eq!(PunishmentOption::resolve("   "), None);
        assert_eq!(PunishmentOption::resolve("exile"), None);
        assert_eq!(PunishmentOption::resolve("exec"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "banish".parse::<PunishmentOption>().unwrap_err();
        assert_eq!(
            err,
            TrialError::UnknownOption {
                input: "banish".to_string()
            }
        );
    }

    #[test]
    fn test_index_matches_enumeration_order() {
        for (i, option) in PunishmentOption::ALL.into_iter().enumerate() {
            assert_eq!(option.index(), i);
        }
    }
}
