//! Broadcasts announcements to the console.

use bay_trial::presentation::render_announcement;
use bay_trial::{Announcement, TrialAnnouncer, TrialConfig};
use tracing::warn;

use crate::output::ConsoleOutput;

/// Prints every announcement as broadcast lines, or as one JSON object per
/// announcement in JSON mode.
pub struct ConsoleAnnouncer {
    output: ConsoleOutput,
    config: TrialConfig,
    json: bool,
}

impl ConsoleAnnouncer {
    pub fn new(output: ConsoleOutput, config: TrialConfig, json: bool) -> Self {
        Self {
            output,
            config,
            json,
        }
    }
}

impl TrialAnnouncer for ConsoleAnnouncer {
    fn announce(&self, announcement: &Announcement) {
        if self.json {
            match serde_json::to_string(announcement) {
                Ok(json) => self.output.line(json),
                Err(e) => warn!(error = %e, "Failed to encode announcement"),
            }
            return;
        }
        for line in render_announcement(announcement, &self.config) {
            self.output.line(format!("[broadcast] {line}"));
        }
    }
}
