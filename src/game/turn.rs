//! The roll/hold/reroll cycle for one player's turn.
//!
//! A turn starts with no dice and an empty held set, allows up to three
//! rolls, and ends when the game commits a category. The first roll of a
//! turn always rolls all six dice and discards any stale holds.

use serde::{Deserialize, Serialize};

use crate::core::DiceRng;
use crate::dice::{reroll, roll_set, DiceSet, HeldSet};
use crate::game::error::{GameError, GameResult};

/// Maximum rolls per turn.
pub const MAX_ROLLS: u8 = 3;

/// State of the active player's current turn.
///
/// Owned by the game for the active player only; created fresh when the
/// turn begins and discarded when a category is committed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    rolls_taken: u8,
    dice: Option<DiceSet>,
    held: HeldSet,
}

impl TurnState {
    /// Start a fresh turn: no rolls taken, no dice, nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls already used this turn (0..=3).
    #[must_use]
    pub fn rolls_taken(&self) -> u8 {
        self.rolls_taken
    }

    /// Rolls still available this turn.
    #[must_use]
    pub fn rolls_remaining(&self) -> u8 {
        MAX_ROLLS - self.rolls_taken
    }

    /// The current dice, `None` before the first roll.
    #[must_use]
    pub fn dice(&self) -> Option<&DiceSet> {
        self.dice.as_ref()
    }

    /// The positions held for the next reroll.
    #[must_use]
    pub fn held(&self) -> &HeldSet {
        &self.held
    }

    /// Roll the dice.
    ///
    /// The first roll of a turn rolls all six dice and clears any held
    /// set; later rolls preserve held positions. Rejected once all three
    /// rolls are spent: the only legal action then is category selection.
    pub fn roll(&mut self, rng: &mut DiceRng) -> GameResult<DiceSet> {
        if self.rolls_taken >= MAX_ROLLS {
            return Err(GameError::NoRollsRemaining);
        }

        let next = match self.dice {
            None => {
                self.held.clear();
                roll_set(rng)
            }
            Some(current) => reroll(rng, &current, &self.held),
        };

        self.dice = Some(next);
        self.rolls_taken += 1;
        Ok(next)
    }

    /// Flip whether a die position is held for the next reroll.
    ///
    /// Absorbed silently before the first roll (the first roll clears
    /// holds anyway) and for out-of-range positions. Toggling after the
    /// third roll is permitted but has no further effect, since no reroll
    /// will consume it.
    pub fn toggle_hold(&mut self, index: usize) {
        if self.dice.is_none() {
            return;
        }
        self.held.toggle(index);
    }
}
