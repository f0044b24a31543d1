//! Server ban list
//!
//! Banning an online player kicks them. The host collects the kicks with
//! [`ServerBanList::take_kicked`] right after the command that issued the ban
//! and reports each one to the trial engine as an ordinary disconnect.

use bay_trial::{BanGateway, BanStatus, CollaboratorError, Player, PlayerId};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::roster::Roster;
use crate::output::ConsoleOutput;

const KICK_MESSAGE: &str = "You have been banished to Botany Bay. Await your public trial.";

pub struct ServerBanList {
    bans: RwLock<HashMap<PlayerId, String>>,
    /// Kicked players whose disconnect is not yet delivered
    kicked: Mutex<Vec<PlayerId>>,
    roster: Arc<Roster>,
    output: ConsoleOutput,
}

impl ServerBanList {
    pub fn new(roster: Arc<Roster>, output: ConsoleOutput) -> Self {
        Self {
            bans: RwLock::new(HashMap::new()),
            kicked: Mutex::new(Vec::new()),
            roster,
            output,
        }
    }

    pub fn is_banned(&self, player: PlayerId) -> bool {
        self.bans.read().contains_key(&player)
    }

    pub fn reason(&self, player: PlayerId) -> Option<String> {
        self.bans.read().get(&player).cloned()
    }

    /// Drain the players kicked since the last call, in kick order.
    pub fn take_kicked(&self) -> Vec<PlayerId> {
        std::mem::take(&mut *self.kicked.lock())
    }
}

impl BanGateway for ServerBanList {
    fn issue_ban(&self, suspect: &Player, reason: &str) -> Result<BanStatus, CollaboratorError> {
        let status = {
            let mut bans = self.bans.write();
            if bans.contains_key(&suspect.id) {
                BanStatus::AlreadyBanned
            } else {
                bans.insert(suspect.id, reason.to_string());
                BanStatus::Issued
            }
        };
        if status == BanStatus::Issued {
            info!(player = %suspect.name, reason, "Ban issued");
        }

        if self.roster.disconnect(suspect.id) {
            self.output
                .line(format!("[kick] {}: {KICK_MESSAGE}", suspect.name));
            self.kicked.lock().push(suspect.id);
        }
        Ok(status)
    }
}
