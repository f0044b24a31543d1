//! Event definitions for the trial engine

pub mod incoming;
pub mod outgoing;

pub use incoming::{Actor, HostEvent, Permission};
pub use outgoing::Announcement;
