//! # Presentation
//!
//! Plain-text rendering for everything the engine shows to people: option
//! labels, vote prompts, standings, countdowns, verdict lines, ban sign text
//! and collaborator notices. The domain types carry no display data.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::TrialConfig;
use crate::domain::{PunishmentOption, Tally};
use crate::events::Announcement;
use crate::ports::{CollaboratorNotice, InteractionOutcome, TrialStatus};

const ELLIPSIS: &str = "...";

/// Display label of an option.
pub fn option_label(option: PunishmentOption) -> &'static str {
    match option {
        PunishmentOption::Execute => "Execution",
        PunishmentOption::Pillory => "Pillory",
        PunishmentOption::Release => "Release",
    }
}

/// Hover description of an option.
pub fn option_description(option: PunishmentOption) -> &'static str {
    match option {
        PunishmentOption::Execute => "Execute the botter in front of the gathered crowd.",
        PunishmentOption::Pillory => "Send the botter to the pillory for public humiliation.",
        PunishmentOption::Release => "Grant mercy and release the accused player.",
    }
}

/// Verdict line with its roleplay hint.
pub fn verdict_line(outcome: PunishmentOption) -> String {
    let hint = match outcome {
        PunishmentOption::Execute => "Roleplay your dramatic finishing moves.",
        PunishmentOption::Pillory => "Escort the culprit to the stocks.",
        PunishmentOption::Release => "The crowd shows mercy today.",
    };
    format!("Verdict: {}! ({hint})", option_label(outcome))
}

/// `Execution: 2 | Pillory: 0 | Release: 1`
pub fn format_tally(tally: &Tally) -> String {
    tally
        .iter()
        .map(|(option, count)| format!("{}: {count}", option_label(option)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One clickable entry per option.
pub fn format_vote_options(command_label: &str) -> String {
    PunishmentOption::ALL
        .iter()
        .map(|option| {
            format!(
                "{} [/{command_label} vote {}]",
                option_label(*option),
                option.id()
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `MM:SS`
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The four lines of a ban sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignText {
    pub lines: [String; 4],
}

impl SignText {
    /// Text shown while no one has been accused.
    pub fn idle() -> Self {
        Self {
            lines: [
                "Botany Bay".to_string(),
                "Awaiting".to_string(),
                "Accused".to_string(),
                String::new(),
            ],
        }
    }

    /// Name, "Charge:", then the accusation over two lines.
    pub fn accusation(suspect_name: &str, accusation: &str, width: usize) -> Self {
        let mut wrapped = wrap_accusation(accusation, width).into_iter();
        let first = wrapped.next().unwrap_or_default();
        let second = wrapped.next().unwrap_or_default();
        Self {
            lines: [
                trim_for_sign(suspect_name, width),
                "Charge:".to_string(),
                first,
                second,
            ],
        }
    }
}

/// Fit a name on one sign line, ellipsising when it is longer than `width`.
pub fn trim_for_sign(value: &str, width: usize) -> String {
    let value = value.trim();
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Split an accusation into at most two lines of `width` characters. When the
/// text does not fit in two lines the second line ends in an ellipsis.
pub fn wrap_accusation(accusation: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = accusation.trim().chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = chars
        .chunks(width)
        .take(2)
        .map(|chunk| chunk.iter().collect())
        .collect();

    if chars.len() > width * 2 {
        if let Some(second) = lines.get_mut(1) {
            let kept: String = second
                .chars()
                .take(width.saturating_sub(ELLIPSIS.len()))
                .collect();
            *second = format!("{kept}{ELLIPSIS}");
        }
    }
    lines
}

/// Message for a side-effect notice.
pub fn notice_message(notice: &CollaboratorNotice, command_label: &str) -> String {
    match notice {
        CollaboratorNotice::AlreadyBanned => {
            "Suspect is already banned. Adding to the queue regardless.".to_string()
        }
        CollaboratorNotice::BanFailed(reason) => {
            format!("Ban service failed ({reason}). The suspect was queued anyway.")
        }
        CollaboratorNotice::NpcSpawnUnset => {
            format!("No Botany Bay NPC spawn has been set. Use /{command_label} set npc.")
        }
        CollaboratorNotice::NpcSpawnFailed(reason) => {
            format!("Unable to spawn the Botany Bay NPC ({reason}).")
        }
        CollaboratorNotice::BanSignUnset => {
            format!("No Botany Bay ban sign has been set. Use /{command_label} set bansign.")
        }
        CollaboratorNotice::BanSignFailed(_) => {
            "Unable to update the Botany Bay ban sign. Ensure the configured sign still exists."
                .to_string()
        }
    }
}

/// Message for an interaction outcome.
pub fn interaction_message(outcome: &InteractionOutcome, command_label: &str) -> String {
    match outcome {
        InteractionOutcome::SignBound(location) => {
            format!("Botany Bay ban sign bound at {}.", location.position)
        }
        InteractionOutcome::NotASign => {
            format!("That block is not a sign. Run /{command_label} set bansign and try again.")
        }
        InteractionOutcome::FirstCornerSet(pos) => format!("First corner set at {pos}."),
        InteractionOutcome::SecondCornerSet(pos) => format!("Second corner set at {pos}."),
        InteractionOutcome::ZoneDefined(_) => "Botany Bay voting zone updated.".to_string(),
        InteractionOutcome::SelectionAborted => format!(
            "Selections must be made in the same world. Restart with /{command_label} setzone."
        ),
    }
}

/// Lines of the `status` report.
pub fn status_lines(status: &TrialStatus) -> Vec<String> {
    vec![
        "Botany Bay Trial".to_string(),
        format!("Accused: {}", status.suspect.name),
        format!("Charge: {}", status.accusation),
        format!("Time remaining: {}", format_remaining(status.remaining)),
        format!("Votes: {}", format_tally(&status.tally)),
        format!("Queue length: {}", status.queue_len),
    ]
}

/// Broadcast lines for an announcement.
pub fn render_announcement(announcement: &Announcement, config: &TrialConfig) -> Vec<String> {
    match announcement {
        Announcement::TrialStarted {
            suspect,
            accusation,
            ..
        } => {
            let mut lines = vec![
                format!("Botany Bay trial has begun! Accused: {}", suspect.name),
                format!("Charge: {accusation}"),
                format!(
                    "Vote on the punishment by clicking a choice below or using /{} vote <option>:",
                    config.command_label
                ),
                format_vote_options(&config.command_label),
            ];
            lines.extend(PunishmentOption::ALL.iter().map(|option| {
                format!("  {}: {}", option_label(*option), option_description(*option))
            }));
            lines
        }
        Announcement::SuspectQueued { suspect, .. } => vec![format!(
            "{} has been condemned to await judgment at Botany Bay.",
            suspect.name
        )],
        Announcement::TrialDismissed { dismissed_by, .. } => {
            vec![format!("The Botany Bay trial was dismissed by {dismissed_by}.")]
        }
        Announcement::TrialVoided { .. } => vec![
            "The accused has fled Botany Bay! The trial ends without a verdict.".to_string(),
        ],
        Announcement::VerdictReached(verdict) => vec![
            format!(
                "The Botany Bay trial of {} has concluded!",
                verdict.suspect.name
            ),
            format!("Final vote tally: {}", format_tally(&verdict.tally)),
            verdict_line(verdict.outcome),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, PlayerId, TrialId, Verdict};

    #[test]
    fn test_trim_for_sign() {
        assert_eq!(trim_for_sign("Zezima", 15), "Zezima");
        assert_eq!(trim_for_sign("  exactly15chars ", 15), "exactly15chars");
        assert_eq!(trim_for_sign("AVeryLongPlayerName", 15), "AVeryLongPl...");
        assert_eq!(trim_for_sign("AVeryLongPlayerName", 15).chars().count(), 14);
    }

    #[test]
    fn test_trim_for_sign_boundary() {
        let name = "a".repeat(15);
        assert_eq!(trim_for_sign(&name, 15), name);
        let longer = "a".repeat(16);
        assert_eq!(trim_for_sign(&longer, 15), format!("{}...", "a".repeat(12)));
    }

    #[test]
    fn test_wrap_short_accusation() {
        assert_eq!(wrap_accusation("macroing", 15), vec!["macroing"]);
        assert_eq!(wrap_accusation("   ", 15), vec![""]);
    }

    #[test]
    fn test_wrap_two_lines() {
        let text = "auto-fishing at the docks";
        let lines = wrap_accusation(text, 15);
        assert_eq!(lines, vec!["auto-fishing at", " the docks"]);
    }

    #[test]
    fn test_wrap_exactly_thirty_is_not_ellipsised() {
        let text = "b".repeat(30);
        let lines = wrap_accusation(&text, 15);
        assert_eq!(lines, vec!["b".repeat(15), "b".repeat(15)]);
    }

    #[test]
    fn test_wrap_long_accusation_ellipsised() {
        let text = "c".repeat(31);
        let lines = wrap_accusation(&text, 15);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "c".repeat(15));
        assert_eq!(lines[1], format!("{}...", "c".repeat(12)));
    }

    #[test]
    fn test_sign_text_layout() {
        let sign = SignText::accusation("Zezima", "macroing", 15);
        assert_eq!(sign.lines, [
            "Zezima".to_string(),
            "Charge:".to_string(),
            "macroing".to_string(),
            String::new(),
        ]);
        assert_eq!(SignText::idle().lines[0], "Botany Bay");
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Duration::from_secs(120)), "02:00");
        assert_eq!(format_remaining(Duration::from_secs(65)), "01:05");
        assert_eq!(format_remaining(Duration::ZERO), "00:00");
    }

    #[test]
    fn test_format_tally_lists_all_options() {
        let tally = Tally::from_counts([(PunishmentOption::Pillory, 3)]);
        assert_eq!(format_tally(&tally), "Execution: 0 | Pillory: 3 | Release: 0");
    }

    #[test]
    fn test_vote_options_use_command_label() {
        let line = format_vote_options("bbay");
        assert!(line.contains("[/bbay vote execute]"));
        assert!(line.contains("[/bbay vote pillory]"));
        assert!(line.contains("[/bbay vote release]"));
    }

    #[test]
    fn test_render_verdict() {
        let verdict = Verdict {
            trial_id: TrialId::new(),
            suspect: Player::new(PlayerId::random(), "Zezima"),
            accusation: "macroing".to_string(),
            tally: Tally::from_counts([(PunishmentOption::Execute, 4)]),
            outcome: PunishmentOption::Execute,
        };
        let lines = render_announcement(
            &Announcement::VerdictReached(verdict),
            &TrialConfig::default(),
        );
        assert_eq!(lines[0], "The Botany Bay trial of Zezima has concluded!");
        assert_eq!(
            lines[2],
            "Verdict: Execution! (Roleplay your dramatic finishing moves.)"
        );
    }

    #[test]
    fn test_render_trial_start_prompt() {
        let lines = render_announcement(
            &Announcement::TrialStarted {
                trial_id: TrialId::new(),
                suspect: Player::new(PlayerId::random(), "Zezima"),
                accusation: "macroing".to_string(),
            },
            &TrialConfig::default(),
        );
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "Charge: macroing");
        assert!(lines[3].starts_with("Execution [/botanybay vote execute]"));
        assert_eq!(
            lines[5],
            "  Pillory: Send the botter to the pillory for public humiliation."
        );
    }
}
