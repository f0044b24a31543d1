//! Announcer that keeps every broadcast in memory.

use parking_lot::RwLock;

use crate::events::Announcement;
use crate::ports::outbound::TrialAnnouncer;

#[derive(Default)]
pub struct RecordingAnnouncer {
    announcements: RwLock<Vec<Announcement>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, oldest first.
    pub fn announcements(&self) -> Vec<Announcement> {
        self.announcements.read().clone()
    }

    pub fn last(&self) -> Option<Announcement> {
        self.announcements.read().last().cloned()
    }

    pub fn clear(&self) {
        self.announcements.write().clear();
    }
}

impl TrialAnnouncer for RecordingAnnouncer {
    fn announce(&self, announcement: &Announcement) {
        self.announcements.write().push(announcement.clone());
    }
}
