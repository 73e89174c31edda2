//! Dice sets, held indices, and the dice roller.
//!
//! A roll is a fixed, ordered sequence of six faces. Positions matter only
//! for holds: a `HeldSet` names the positions preserved across a reroll,
//! everything else is drawn fresh from the random source.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DiceRng;

/// Number of dice in a complete roll.
pub const DICE_COUNT: usize = 6;

/// A complete six-die roll. Each face is in 1..=6 once rolled.
pub type DiceSet = [u8; DICE_COUNT];

/// Set of die positions (0..=5) preserved across a reroll.
///
/// Indices are kept sorted and unique. Out-of-range indices are absorbed
/// silently: no scoring or turn invariant depends on rejecting them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldSet {
    indices: SmallVec<[u8; DICE_COUNT]>,
}

impl HeldSet {
    /// Create an empty held set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a held set from a list of positions.
    ///
    /// Duplicates and out-of-range positions are dropped.
    #[must_use]
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut held = Self::new();
        for &i in indices {
            if !held.contains(i) {
                held.toggle(i);
            }
        }
        held
    }

    /// Check whether a position is held.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < DICE_COUNT && self.indices.contains(&(index as u8))
    }

    /// Flip membership of a position.
    ///
    /// Positions outside 0..=5 are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= DICE_COUNT {
            return;
        }
        let index = index as u8;
        if let Some(pos) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(pos);
        } else {
            self.indices.push(index);
            self.indices.sort_unstable();
        }
    }

    /// Drop all held positions.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Number of held positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over held positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(|&i| i as usize)
    }
}

/// Roll `n` independent uniform faces in 1..=6.
///
/// `n = 0` yields an empty sequence, not an error.
#[must_use]
pub fn roll_new(rng: &mut DiceRng, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.roll_face()).collect()
}

/// Roll a complete fresh six-die set.
#[must_use]
pub fn roll_set(rng: &mut DiceRng) -> DiceSet {
    let mut dice = [0u8; DICE_COUNT];
    for die in &mut dice {
        *die = rng.roll_face();
    }
    dice
}

/// Reroll every position not in `held`, preserving the rest in place.
#[must_use]
pub fn reroll(rng: &mut DiceRng, current: &DiceSet, held: &HeldSet) -> DiceSet {
    let mut next = *current;
    for (i, die) in next.iter_mut().enumerate() {
        if !held.contains(i) {
            *die = rng.roll_face();
        }
    }
    next
}
