//! Console host
//!
//! Wires the trial engine to the console adapters and runs the single control
//! loop. Console lines and host events (timer firings) are handled one
//! at a time, in arrival order.

use anyhow::Result;
use bay_trial::{
    Actor, ConfigError, HostEvent, Location, PlayerDirectory, TrialCommandHandler, TrialConfig,
    TrialCoordinator, TrialPorts,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapters::{
    ConsoleAnnouncer, ConsoleNpcStage, Roster, ServerBanList, TokioConclusionScheduler,
    WorldBlocks,
};
use crate::console::{parse_line, ConsoleInput, HELP};
use crate::output::ConsoleOutput;

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The simulated game server.
pub struct BayHost {
    command_label: String,
    roster: Arc<Roster>,
    world: Arc<WorldBlocks>,
    npc: Arc<ConsoleNpcStage>,
    bans: Arc<ServerBanList>,
    handler: TrialCommandHandler<TrialCoordinator>,
    output: ConsoleOutput,
}

impl BayHost {
    /// Build the host. The returned receiver carries the host events that the
    /// control loop must feed back through [`BayHost::handle_event`].
    pub fn new(
        config: TrialConfig,
        json: bool,
        output: ConsoleOutput,
    ) -> Result<(Self, mpsc::UnboundedReceiver<HostEvent>), ConfigError> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let roster = Arc::new(Roster::new());
        let world = Arc::new(WorldBlocks::new(output.clone()));
        let npc = Arc::new(ConsoleNpcStage::new(output.clone()));
        let bans = Arc::new(ServerBanList::new(roster.clone(), output.clone()));

        let ports = TrialPorts {
            announcer: Arc::new(ConsoleAnnouncer::new(output.clone(), config.clone(), json)),
            bans: bans.clone(),
            npc: npc.clone(),
            signs: world.clone(),
            scheduler: Arc::new(TokioConclusionScheduler::new(events_tx)),
        };
        let command_label = config.command_label.clone();
        let coordinator = Arc::new(TrialCoordinator::new(config, ports)?);
        let directory: Arc<dyn PlayerDirectory> = roster.clone();
        let handler = TrialCommandHandler::new(coordinator, directory, command_label.clone());

        let host = Self {
            command_label,
            roster,
            world,
            npc,
            bans,
            handler,
            output,
        };
        Ok((host, events_rx))
    }

    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }

    pub fn world(&self) -> &Arc<WorldBlocks> {
        &self.world
    }

    pub fn npc(&self) -> &Arc<ConsoleNpcStage> {
        &self.npc
    }

    pub fn bans(&self) -> &Arc<ServerBanList> {
        &self.bans
    }

    pub fn coordinator(&self) -> &Arc<TrialCoordinator> {
        self.handler.api()
    }

    /// Handle one console line.
    pub fn handle_line(&self, line: &str) -> Flow {
        let input = match parse_line(line, &self.command_label) {
            Ok(input) => input,
            Err(e) => {
                self.output.line(format!("[error] {e}"));
                return Flow::Continue;
            }
        };

        match input {
            ConsoleInput::Blank => {}
            ConsoleInput::Quit => return Flow::Quit,
            ConsoleInput::Help => {
                for usage in HELP {
                    self.output.line(format!("[help] {usage}"));
                }
            }
            ConsoleInput::Players => {
                let players = self.roster.online_players();
                if players.is_empty() {
                    self.output.line("[players] nobody is online");
                }
                for entry in players {
                    self.output.line(format!(
                        "[players] {} at {}",
                        entry.player.name, entry.location.position
                    ));
                }
            }
            ConsoleInput::Join { name, admin } => self.join(&name, admin),
            ConsoleInput::Leave { name } => match self.roster.online(&name) {
                Some(entry) => {
                    self.roster.disconnect(entry.player.id);
                    self.output.line(format!("[server] {} left", entry.player.name));
                    self.handle_event(HostEvent::Disconnected {
                        player: entry.player.id,
                    });
                }
                None => self.output.line(format!("[error] {name} is not online")),
            },
            ConsoleInput::Move {
                name,
                position,
                world,
            } => match self.roster.online(&name) {
                Some(entry) => {
                    let world = world
                        .map(|w| self.roster.world(&w))
                        .unwrap_or(entry.location.world);
                    self.roster
                        .move_to(entry.player.id, Location::new(world, position));
                    debug!(player = %entry.player.name, %position, "Player moved");
                }
                None => self.output.line(format!("[error] {name} is not online")),
            },
            ConsoleInput::Click {
                name,
                interaction,
                position,
                world,
            } => match self.roster.online(&name) {
                Some(entry) => {
                    let world = world
                        .map(|w| self.roster.world(&w))
                        .unwrap_or(entry.location.world);
                    self.handle_event(HostEvent::Interaction {
                        actor: entry.player.id,
                        interaction,
                        location: Location::new(world, position),
                    });
                }
                None => self.output.line(format!("[error] {name} is not online")),
            },
            ConsoleInput::PlaceSign { position, world } => {
                let world = self
                    .roster
                    .world(world.as_deref().unwrap_or(crate::adapters::DEFAULT_WORLD));
                self.world.place_sign(Location::new(world, position));
                self.output.line(format!("[server] sign placed at {position}"));
            }
            ConsoleInput::As { name, command } => match self.roster.actor(&name) {
                Some(actor) => self.handle_event(HostEvent::Command {
                    actor,
                    line: command,
                }),
                None => self.output.line(format!("[error] {name} is not online")),
            },
            ConsoleInput::Command(line) => self.handle_event(HostEvent::Command {
                actor: Actor::Console,
                line,
            }),
        }
        Flow::Continue
    }

    fn join(&self, name: &str, admin: bool) {
        let player = self.roster.identity(name);
        if let Some(reason) = self.bans.reason(player.id) {
            self.output
                .line(format!("[server] {} is banned: {reason}", player.name));
            return;
        }
        let entry = self.roster.join(name, admin);
        let role = if admin { " as admin" } else { "" };
        self.output.line(format!(
            "[server] {} joined{role} at {}",
            entry.player.name, entry.location.position
        ));
    }

    /// Deliver one host event to the trial engine and print the reply.
    pub fn handle_event(&self, event: HostEvent) {
        let recipient = match &event {
            HostEvent::Command { actor, .. } => Some(actor.display_name().to_string()),
            HostEvent::Interaction { actor, .. } => self
                .roster
                .online_by_id(*actor)
                .map(|entry| entry.player.name),
            HostEvent::Disconnected { .. } | HostEvent::ConclusionDue { .. } => None,
        };

        let reply = self.handler.dispatch(event);
        if let Some(recipient) = recipient {
            for line in &reply.lines {
                self.output.tell(&recipient, line);
            }
        }

        // kicks land before the next line or timer is handled
        for player in self.bans.take_kicked() {
            debug!(player = %player, "Delivering kick disconnect");
            self.handler.dispatch(HostEvent::Disconnected { player });
        }
    }

    /// Run the control loop until `quit`, end of input, or the event channel closing.
    pub async fn run(
        self,
        mut lines: mpsc::Receiver<String>,
        mut events: mpsc::UnboundedReceiver<HostEvent>,
    ) -> Result<()> {
        info!("Botany Bay console ready. Type 'help' for commands.");
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                line = lines.recv() => match line {
                    Some(line) => {
                        if self.handle_line(&line) == Flow::Quit {
                            break;
                        }
                    }
                    None => break,
                },
            }
        }
        info!("Botany Bay console stopped");
        Ok(())
    }
}
