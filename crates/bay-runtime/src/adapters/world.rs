//! Blocks and entities of the simulated world.

use bay_trial::{CollaboratorError, Location, NpcStage, Player, SignBoard, SignText};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::output::ConsoleOutput;

/// Sign blocks placed from the console.
pub struct WorldBlocks {
    signs: RwLock<HashMap<Location, SignText>>,
    output: ConsoleOutput,
}

impl WorldBlocks {
    pub fn new(output: ConsoleOutput) -> Self {
        Self {
            signs: RwLock::new(HashMap::new()),
            output,
        }
    }

    /// Place a blank sign.
    pub fn place_sign(&self, at: Location) {
        self.signs.write().insert(
            at,
            SignText {
                lines: Default::default(),
            },
        );
    }

    /// Remove the block at `at`. Returns true when it was a sign.
    pub fn break_block(&self, at: Location) -> bool {
        self.signs.write().remove(&at).is_some()
    }

    pub fn text_at(&self, at: Location) -> Option<SignText> {
        self.signs.read().get(&at).cloned()
    }
}

impl SignBoard for WorldBlocks {
    fn is_sign(&self, at: Location) -> bool {
        self.signs.read().contains_key(&at)
    }

    fn write(&self, at: Location, text: &SignText) -> Result<(), CollaboratorError> {
        let mut signs = self.signs.write();
        let Some(sign) = signs.get_mut(&at) else {
            return Err(CollaboratorError::Rejected(format!(
                "no sign at {}",
                at.position
            )));
        };
        *sign = text.clone();
        self.output
            .line(format!("[sign {}] {}", at.position, text.lines.join(" | ")));
        Ok(())
    }
}

/// Stand-in entity for the most recently queued suspect.
pub struct ConsoleNpcStage {
    current: RwLock<Option<(Player, Location)>>,
    output: ConsoleOutput,
}

impl ConsoleNpcStage {
    pub fn new(output: ConsoleOutput) -> Self {
        Self {
            current: RwLock::new(None),
            output,
        }
    }

    pub fn current(&self) -> Option<(Player, Location)> {
        self.current.read().clone()
    }
}

impl NpcStage for ConsoleNpcStage {
    fn spawn(&self, suspect: &Player, at: Location) -> Result<(), CollaboratorError> {
        *self.current.write() = Some((suspect.clone(), at));
        self.output
            .line(format!("[npc] {} now stands at {}", suspect.name, at.position));
        Ok(())
    }

    fn despawn(&self) {
        if let Some((suspect, _)) = self.current.write().take() {
            debug!(suspect = %suspect.name, "NPC despawned");
            self.output.line(format!("[npc] {} removed", suspect.name));
        }
    }
}
