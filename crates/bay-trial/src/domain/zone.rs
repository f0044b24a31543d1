//! # Eligibility Zone
//!
//! Inclusive axis-aligned box, bound to one world, that gates who may vote.

use serde::{Deserialize, Serialize};

use super::identity::{BlockPos, Location, WorldId};

/// Voting arena. `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityZone {
    world: WorldId,
    min: BlockPos,
    max: BlockPos,
}

impl EligibilityZone {
    /// Build a zone from two opposite corners given in any order.
    pub fn from_corners(world: WorldId, a: BlockPos, b: BlockPos) -> Self {
        Self {
            world,
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn world(&self) -> WorldId {
        self.world
    }

    pub fn min(&self) -> BlockPos {
        self.min
    }

    pub fn max(&self) -> BlockPos {
        self.max
    }

    /// Inclusive containment. Positions in another world are always outside.
    pub fn contains(&self, world: WorldId, position: BlockPos) -> bool {
        world == self.world
            && (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.y)
            && (self.min.z..=self.max.z).contains(&position.z)
    }

    pub fn contains_location(&self, location: &Location) -> bool {
        self.contains(location.world, location.position)
    }
}
