//! Command handler for the trial engine
//!
//! Turns host events into [`TrialApi`] calls. Every command is parsed and
//! authorized before anything is touched, so a malformed or unauthorized
//! invocation never mutates coordinator state.
//!
//! | Command | Permission | In-world player required |
//! |---------|------------|--------------------------|
//! | start / accuse | botanybay.command.start | no |
//! | ban / queue | botanybay.command.ban | no |
//! | vote / cast | botanybay.command.vote | yes |
//! | status / info | botanybay.command.status | no |
//! | cancel / end | botanybay.command.cancel | no |
//! | set npc | botanybay.command.setnpc | yes |
//! | set zone, setzone | botanybay.command.setzone | yes |
//! | set bansign, set sign, setbansign | botanybay.command.setbansign | yes |

use std::sync::Arc;
use tracing::debug;

use crate::domain::Player;
use crate::error::{TrialError, TrialResult};
use crate::events::{Actor, HostEvent, Permission};
use crate::ports::inbound::TrialApi;
use crate::ports::outbound::PlayerDirectory;
use crate::presentation::{
    format_tally, interaction_message, notice_message, option_label, status_lines,
};

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start {
        suspect: Option<String>,
        reason: Option<String>,
    },
    Ban {
        suspect: String,
        reason: Option<String>,
    },
    Vote {
        option: String,
    },
    Status,
    Cancel,
    SetNpc,
    SetZone,
    SetBanSign,
}

impl Command {
    /// Permission node guarding this command.
    pub fn permission(&self) -> Permission {
        match self {
            Self::Start { .. } => Permission::Start,
            Self::Ban { .. } => Permission::Ban,
            Self::Vote { .. } => Permission::Vote,
            Self::Status => Permission::Status,
            Self::Cancel => Permission::Cancel,
            Self::SetNpc => Permission::SetNpc,
            Self::SetZone => Permission::SetZone,
            Self::SetBanSign => Permission::SetBanSign,
        }
    }

    /// Whether the command needs an actor standing in a world.
    pub fn requires_player(&self) -> bool {
        matches!(
            self,
            Self::Vote { .. } | Self::SetNpc | Self::SetZone | Self::SetBanSign
        )
    }
}

/// Parse a command line given without its root label.
pub fn parse_command(line: &str, command_label: &str) -> TrialResult<Command> {
    let mut words = line.split_whitespace();
    let root_usage = || TrialError::InvalidCommand {
        usage: format!(
            "/{command_label} <start|ban|vote|status|cancel|set|setzone|setbansign>"
        ),
    };

    let Some(subcommand) = words.next() else {
        return Err(root_usage());
    };
    let rest = |words: std::str::SplitWhitespace<'_>| {
        let joined = words.collect::<Vec<_>>().join(" ");
        (!joined.is_empty()).then_some(joined)
    };

    match subcommand.to_lowercase().as_str() {
        "start" | "accuse" => {
            let suspect = words.next().map(str::to_string);
            Ok(Command::Start {
                suspect,
                reason: rest(words),
            })
        }
        "ban" | "queue" => {
            let suspect = words.next().ok_or_else(|| TrialError::InvalidCommand {
                usage: format!("/{command_label} ban <player> [reason]"),
            })?;
            Ok(Command::Ban {
                suspect: suspect.to_string(),
                reason: rest(words),
            })
        }
        "vote" | "cast" => {
            let option = words.next().ok_or_else(|| TrialError::InvalidCommand {
                usage: format!("/{command_label} vote <execute|pillory|release>"),
            })?;
            Ok(Command::Vote {
                option: option.to_string(),
            })
        }
        "status" | "info" => Ok(Command::Status),
        "cancel" | "end" => Ok(Command::Cancel),
        "set" => match words.next().map(str::to_lowercase).as_deref() {
            Some("npc") => Ok(Command::SetNpc),
            Some("zone") => Ok(Command::SetZone),
            Some("bansign") | Some("sign") => Ok(Command::SetBanSign),
            _ => Err(TrialError::InvalidCommand {
                usage: format!("/{command_label} set <npc|zone|bansign>"),
            }),
        },
        "setzone" => Ok(Command::SetZone),
        "setbansign" => Ok(Command::SetBanSign),
        _ => Err(root_usage()),
    }
}

/// How a command ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandStatus {
    /// Done
    Success,
    /// Understood but refused by the engine; nothing changed
    Empty,
    /// Malformed, unauthorized or naming an unknown player
    Error,
}

/// Reply sent back to the invoker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandReply {
    pub status: CommandStatus,
    pub lines: Vec<String>,
}

impl CommandReply {
    pub fn success(lines: Vec<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            lines,
        }
    }

    pub fn silent() -> Self {
        Self::success(Vec::new())
    }

    fn from_error(error: &TrialError) -> Self {
        let status = match error {
            TrialError::InvalidCommand { .. }
            | TrialError::PermissionDenied { .. }
            | TrialError::UnknownPlayer { .. } => CommandStatus::Error,
            _ => CommandStatus::Empty,
        };
        Self {
            status,
            lines: vec![error.to_string()],
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}

/// Host event handler
pub struct TrialCommandHandler<T>
where
    T: TrialApi,
{
    api: Arc<T>,
    directory: Arc<dyn PlayerDirectory>,
    command_label: String,
}

impl<T> TrialCommandHandler<T>
where
    T: TrialApi,
{
    pub fn new(
        api: Arc<T>,
        directory: Arc<dyn PlayerDirectory>,
        command_label: impl Into<String>,
    ) -> Self {
        Self {
            api,
            directory,
            command_label: command_label.into(),
        }
    }

    pub fn api(&self) -> &Arc<T> {
        &self.api
    }

    /// Handle one event from the host.
    pub fn dispatch(&self, event: HostEvent) -> CommandReply {
        match event {
            HostEvent::Command { actor, line } => self.handle_command(&actor, &line),
            HostEvent::Interaction {
                actor,
                interaction,
                location,
            } => {
                let lines = self
                    .api
                    .on_interaction(actor, interaction, location)
                    .iter()
                    .map(|outcome| interaction_message(outcome, &self.command_label))
                    .collect();
                CommandReply::success(lines)
            }
            HostEvent::Disconnected { player } => {
                self.api.on_suspect_disconnected(player);
                CommandReply::silent()
            }
            HostEvent::ConclusionDue { trial } => {
                self.api.on_conclusion_timer(trial);
                CommandReply::silent()
            }
        }
    }

    /// Parse, authorize and run one command line.
    pub fn handle_command(&self, actor: &Actor, line: &str) -> CommandReply {
        let result = parse_command(line, &self.command_label)
            .and_then(|command| self.authorize(actor, &command).map(|()| command))
            .and_then(|command| self.execute(actor, command));

        match result {
            Ok(reply) => reply,
            Err(e) => {
                debug!(actor = actor.display_name(), line, error = %e, "Command refused");
                CommandReply::from_error(&e)
            }
        }
    }

    fn authorize(&self, actor: &Actor, command: &Command) -> TrialResult<()> {
        let permission = command.permission();
        if !actor.has_permission(permission) {
            return Err(TrialError::PermissionDenied {
                permission: permission.node().to_string(),
            });
        }
        if command.requires_player() && matches!(actor, Actor::Console) {
            return Err(TrialError::PlayerOnly);
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> TrialResult<Player> {
        self.directory
            .find_by_name(name)
            .ok_or_else(|| TrialError::UnknownPlayer {
                name: name.to_string(),
            })
    }

    fn execute(&self, actor: &Actor, command: Command) -> TrialResult<CommandReply> {
        match command {
            Command::Start { suspect, reason } => {
                let suspect = suspect.map(|name| self.lookup(&name)).transpose()?;
                let started = self.api.start_trial(suspect, reason.as_deref())?;
                let mut lines = vec![format!(
                    "Botany Bay trial opened against {}.",
                    started.suspect.name
                )];
                lines.extend(
                    started
                        .notices
                        .iter()
                        .map(|notice| notice_message(notice, &self.command_label)),
                );
                Ok(CommandReply::success(lines))
            }
            Command::Ban { suspect, reason } => {
                let suspect = self.lookup(&suspect)?;
                let name = suspect.name.clone();
                let receipt = self.api.queue_suspect(suspect, reason.as_deref())?;
                let mut lines = vec![format!(
                    "Queued suspect {name} for a Botany Bay trial. Position in queue: {}",
                    receipt.position
                )];
                lines.extend(
                    receipt
                        .notices
                        .iter()
                        .map(|notice| notice_message(notice, &self.command_label)),
                );
                Ok(CommandReply::success(lines))
            }
            Command::Vote { option } => {
                let Actor::Player {
                    player, location, ..
                } = actor
                else {
                    return Err(TrialError::PlayerOnly);
                };
                let outcome = self.api.cast_vote(player.id, &option, *location)?;
                let verb = if outcome.receipt.changed() {
                    "You changed your vote to"
                } else {
                    "You voted for"
                };
                Ok(CommandReply::success(vec![
                    format!("{verb} {}", option_label(outcome.receipt.option)),
                    format!("Current standings: {}", format_tally(&outcome.tally)),
                ]))
            }
            Command::Status => Ok(CommandReply::success(match self.api.status() {
                Some(status) => status_lines(&status),
                None => vec!["No Botany Bay trial is currently running.".to_string()],
            })),
            Command::Cancel => {
                self.api.cancel_trial(actor.display_name())?;
                Ok(CommandReply::silent())
            }
            Command::SetNpc => {
                let Actor::Player { location, .. } = actor else {
                    return Err(TrialError::PlayerOnly);
                };
                self.api.set_npc_location(*location);
                Ok(CommandReply::success(vec![format!(
                    "Botany Bay NPC spawn set at {}.",
                    location.position
                )]))
            }
            Command::SetZone => {
                let Actor::Player {
                    player, location, ..
                } = actor
                else {
                    return Err(TrialError::PlayerOnly);
                };
                self.api.begin_zone_selection(player.id, location.world);
                Ok(CommandReply::success(vec![
                    "Left-click a block to set the first corner, then right-click to set the opposite corner.".to_string(),
                    "When finished, the Botany Bay vote zone will be updated.".to_string(),
                ]))
            }
            Command::SetBanSign => {
                let Some(admin) = actor.player_id() else {
                    return Err(TrialError::PlayerOnly);
                };
                self.api.begin_sign_binding(admin);
                Ok(CommandReply::success(vec![
                    "Right-click the sign that should display Botany Bay accusations.".to_string(),
                    "The sign will update with the latest ban reason when suspects are queued."
                        .to_string(),
                ]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryDirectory, ManualScheduler, MockBanGateway, MockNpcStage, MockSignBoard,
        RecordingAnnouncer,
    };
    use crate::config::TrialConfig;
    use crate::domain::{BlockPos, Location, PlayerId, TrialPhase, WorldId};
    use crate::service::{TrialCoordinator, TrialPorts};
    use std::collections::BTreeSet;

    fn handler() -> (TrialCommandHandler<TrialCoordinator>, Arc<InMemoryDirectory>) {
        let ports = TrialPorts {
            announcer: Arc::new(RecordingAnnouncer::new()),
            bans: Arc::new(MockBanGateway::new()),
            npc: Arc::new(MockNpcStage::new()),
            signs: Arc::new(MockSignBoard::new()),
            scheduler: Arc::new(ManualScheduler::new()),
        };
        let coordinator = Arc::new(TrialCoordinator::new(TrialConfig::default(), ports).unwrap());
        let directory = Arc::new(InMemoryDirectory::new());
        let handler = TrialCommandHandler::new(coordinator, directory.clone(), "botanybay");
        (handler, directory)
    }

    fn in_world(name: &str, permissions: BTreeSet<Permission>) -> Actor {
        Actor::player(
            Player::new(PlayerId::random(), name),
            Location::new(WorldId::random(), BlockPos::new(0, 64, 0)),
            permissions,
        )
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_command("cast Execute", "b").unwrap(), Command::Vote {
            option: "Execute".to_string()
        });
        assert_eq!(parse_command("info", "b").unwrap(), Command::Status);
        assert_eq!(parse_command("end", "b").unwrap(), Command::Cancel);
        assert_eq!(parse_command("set sign", "b").unwrap(), Command::SetBanSign);
        assert_eq!(parse_command("setzone", "b").unwrap(), Command::SetZone);
        assert_eq!(
            parse_command("accuse Zezima auto fishing", "b").unwrap(),
            Command::Start {
                suspect: Some("Zezima".to_string()),
                reason: Some("auto fishing".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_usage_errors() {
        assert!(matches!(
            parse_command("", "botanybay"),
            Err(TrialError::InvalidCommand { .. })
        ));
        assert!(matches!(
            parse_command("ban", "botanybay"),
            Err(TrialError::InvalidCommand { .. })
        ));
        match parse_command("set lighthouse", "botanybay") {
            Err(TrialError::InvalidCommand { usage }) => {
                assert_eq!(usage, "/botanybay set <npc|zone|bansign>")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_permission_denied_does_not_mutate() {
        let (handler, directory) = handler();
        directory.insert(Player::new(PlayerId::random(), "Zezima"));
        let spectator = in_world("crowd", Permission::spectator());

        let reply = handler.handle_command(&spectator, "ban Zezima");
        assert_eq!(reply.status, CommandStatus::Error);
        assert!(reply.lines[0].contains("botanybay.command.ban"));
        assert_eq!(handler.api().queue_len(), 0);
    }

    #[test]
    fn test_console_cannot_vote_or_set() {
        let (handler, _) = handler();
        for line in ["vote execute", "set npc", "setzone", "setbansign"] {
            let reply = handler.handle_command(&Actor::Console, line);
            assert_eq!(reply.status, CommandStatus::Empty, "{line}");
            assert_eq!(reply.lines, vec![TrialError::PlayerOnly.to_string()]);
        }
    }

    #[test]
    fn test_unknown_suspect_is_an_error() {
        let (handler, _) = handler();
        let reply = handler.handle_command(&Actor::Console, "start Nobody");
        assert_eq!(reply.status, CommandStatus::Error);
        assert_eq!(handler.api().phase(), TrialPhase::Idle);
    }

    #[test]
    fn test_ban_then_start_then_vote() {
        let (handler, directory) = handler();
        directory.insert(Player::new(PlayerId::random(), "Zezima"));

        let reply = handler.handle_command(&Actor::Console, "ban zezima auto fishing");
        assert!(reply.is_success());
        assert!(reply.lines[0].ends_with("Position in queue: 1"));

        assert!(handler.handle_command(&Actor::Console, "start").is_success());

        let voter = in_world("crowd", Permission::spectator());
        let reply = handler.handle_command(&voter, "vote pillory");
        assert_eq!(reply.lines, vec![
            "You voted for Pillory".to_string(),
            "Current standings: Execution: 0 | Pillory: 1 | Release: 0".to_string(),
        ]);
        let reply = handler.handle_command(&voter, "cast EXECUTE");
        assert_eq!(reply.lines[0], "You changed your vote to Execution");
    }

    #[test]
    fn test_status_when_idle_is_success() {
        let (handler, _) = handler();
        let reply = handler.handle_command(&Actor::Console, "status");
        assert!(reply.is_success());
        assert_eq!(reply.lines, vec!["No Botany Bay trial is currently running."]);
    }

    #[test]
    fn test_cancel_without_trial_is_empty() {
        let (handler, _) = handler();
        let reply = handler.handle_command(&Actor::Console, "cancel");
        assert_eq!(reply.status, CommandStatus::Empty);
    }
}
