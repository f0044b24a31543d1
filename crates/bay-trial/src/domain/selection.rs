//! # Zone Selection
//!
//! In-progress, per-admin definition of the voting zone. Primary clicks set
//! the first corner, secondary clicks the second; both must land in the world
//! the selection was started in.

use super::identity::{BlockPos, Location, WorldId};
use super::zone::EligibilityZone;
use crate::error::{TrialError, TrialResult};

/// Which interaction the host reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Left click / attack
    Primary,
    /// Right click / use
    Secondary,
}

/// What a click did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStep {
    FirstCornerSet(BlockPos),
    SecondCornerSet(BlockPos),
    /// The click was in another world; the selection must be discarded
    WorldMismatch,
}

/// Pending zone selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingZoneSelection {
    world: WorldId,
    first_corner: Option<BlockPos>,
    second_corner: Option<BlockPos>,
}

impl PendingZoneSelection {
    pub fn new(world: WorldId) -> Self {
        Self {
            world,
            first_corner: None,
            second_corner: None,
        }
    }

    pub fn world(&self) -> WorldId {
        self.world
    }

    pub fn first_corner(&self) -> Option<BlockPos> {
        self.first_corner
    }

    pub fn second_corner(&self) -> Option<BlockPos> {
        self.second_corner
    }

    /// Apply one click. A click in a different world leaves the corners untouched.
    pub fn apply(&mut self, interaction: Interaction, location: Location) -> SelectionStep {
        if location.world != self.world {
            return SelectionStep::WorldMismatch;
        }
        match interaction {
            Interaction::Primary => {
                self.first_corner = Some(location.position);
                SelectionStep::FirstCornerSet(location.position)
            }
            Interaction::Secondary => {
                self.second_corner = Some(location.position);
                SelectionStep::SecondCornerSet(location.position)
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first_corner.is_some() && self.second_corner.is_some()
    }

    /// Build the zone from both corners.
    pub fn finalize(&self) -> TrialResult<EligibilityZone> {
        match (self.first_corner, self.second_corner) {
            (Some(a), Some(b)) => Ok(EligibilityZone::from_corners(self.world, a, b)),
            _ => Err(TrialError::ZoneIncomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_in_either_order() {
        let world = WorldId::random();
        let mut selection = PendingZoneSelection::new(world);

        let step = selection.apply(Interaction::Secondary, Location::new(world, BlockPos::new(9, 9, 9)));
        assert_eq!(step, SelectionStep::SecondCornerSet(BlockPos::new(9, 9, 9)));
        assert!(!selection.is_complete());

        selection.apply(Interaction::Primary, Location::new(world, BlockPos::new(1, 2, 3)));
        assert!(selection.is_complete());

        let zone = selection.finalize().unwrap();
        assert_eq!(zone.min(), BlockPos::new(1, 2, 3));
        assert_eq!(zone.max(), BlockPos::new(9, 9, 9));
    }

    #[test]
    fn test_world_mismatch() {
        let world = WorldId::random();
        let mut selection = PendingZoneSelection::new(world);
        let step = selection.apply(
            Interaction::Primary,
            Location::new(WorldId::random(), BlockPos::new(0, 0, 0)),
        );
        assert_eq!(step, SelectionStep::WorldMismatch);
        assert_eq!(selection.first_corner(), None);
    }

    #[test]
    fn test_finalize_incomplete() {
        let world = WorldId::random();
        let mut selection = PendingZoneSelection::new(world);
        assert_eq!(selection.finalize(), Err(TrialError::ZoneIncomplete));
        selection.apply(Interaction::Primary, Location::new(world, BlockPos::new(0, 0, 0)));
        assert_eq!(selection.finalize(), Err(TrialError::ZoneIncomplete));
    }

    #[test]
    fn test_repeated_click_overwrites_corner() {
        let world = WorldId::random();
        let mut selection = PendingZoneSelection::new(world);
        selection.apply(Interaction::Primary, Location::new(world, BlockPos::new(0, 0, 0)));
        selection.apply(Interaction::Primary, Location::new(world, BlockPos::new(4, 4, 4)));
        assert_eq!(selection.first_corner(), Some(BlockPos::new(4, 4, 4)));
        assert!(!selection.is_complete());
    }
}
