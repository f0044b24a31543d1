//! # Vote Tally and Outcome Policy
//!
//! Counts per punishment, always covering every option, and the tie-break
//! rule that turns a tally into a verdict.

use serde::{Deserialize, Serialize};

use super::punishment::PunishmentOption;

/// Vote counts for every punishment option, zero counts included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: [u32; 3],
}

impl Tally {
    /// Build a tally from explicit counts. Options not listed count zero.
    pub fn from_counts(counts: impl IntoIterator<Item = (PunishmentOption, u32)>) -> Self {
        let mut tally = Self::default();
        for (option, count) in counts {
            tally.counts[option.index()] = count;
        }
        tally
    }

    /// Count one vote for `option`.
    pub fn record(&mut self, option: PunishmentOption) {
        self.counts[option.index()] += 1;
    }

    pub fn get(&self, option: PunishmentOption) -> u32 {
        self.counts[option.index()]
    }

    /// Total votes counted.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(option, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (PunishmentOption, u32)> + '_ {
        PunishmentOption::ALL
            .into_iter()
            .map(move |option| (option, self.get(option)))
    }

    /// Resolve the verdict. See [`determine_outcome`].
    pub fn outcome(&self) -> PunishmentOption {
        determine_outcome(self)
    }
}

/// Pick the winning punishment.
///
/// Options are scanned in enumeration order. A count strictly above the
/// current best takes the lead and clears the tie flag; a count equal to the
/// best sets the tie flag. Any tie on the final best count, including the
/// all-zero tally, yields [`PunishmentOption::Release`] whether or not
/// Release was among the tied options.
pub fn determine_outcome(tally: &Tally) -> PunishmentOption {
    let mut leader = PunishmentOption::Release;
    let mut best: Option<u32> = None;
    let mut tied = false;

    for (option, count) in tally.iter() {
        match best {
            Some(current) if count == current => tied = true,
            Some(current) if count < current => {}
            _ => {
                best = Some(count);
                leader = option;
                tied = false;
            }
        }
    }

    if tied {
        PunishmentOption::Release
    } else {
        leader
    }
}
