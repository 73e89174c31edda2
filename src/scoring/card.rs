//! The per-player score card: one set-once slot per category.
//!
//! ## Upper-section bonus
//!
//! The bonus is a derived value, not a slot: an upper-section total of at
//! least 84 (four of each face) awards a flat 100. The five-dice game's
//! 63/50 rule does not apply to a six-die card.

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use super::category::Category;

/// Error raised when a card slot would be written twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScoreCardError {
    /// The category already holds a committed score.
    #[error("category {0:?} is already filled")]
    AlreadyFilled(Category),
}

/// Mapping from category to an optional committed score.
///
/// Exactly one slot exists per category by construction. A slot moves from
/// unset to set exactly once and is immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    slots: EnumMap<Category, Option<u32>>,
}

impl ScoreCard {
    /// Upper-section total required for the bonus.
    pub const BONUS_THRESHOLD: u32 = 84;

    /// Flat bonus awarded at or above the threshold.
    pub const BONUS_SCORE: u32 = 100;

    /// Create a card with every slot unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed score for a category, `None` while unset.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.slots[category]
    }

    /// Whether a category has been committed.
    #[must_use]
    pub fn is_set(&self, category: Category) -> bool {
        self.slots[category].is_some()
    }

    /// Commit a score into an unset slot.
    pub fn set(&mut self, category: Category, score: u32) -> Result<(), ScoreCardError> {
        if self.is_set(category) {
            return Err(ScoreCardError::AlreadyFilled(category));
        }
        self.slots[category] = Some(score);
        Ok(())
    }

    /// Whether all twenty slots are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.values().all(Option::is_some)
    }

    /// Categories still open, in card order.
    #[must_use]
    pub fn remaining_categories(&self) -> Vec<Category> {
        Category::iter().filter(|&c| !self.is_set(c)).collect()
    }

    /// Sum of the six upper-section slots (unset slots count 0).
    #[must_use]
    pub fn upper_total(&self) -> u32 {
        self.slots
            .iter()
            .filter(|(c, _)| c.is_upper_section())
            .filter_map(|(_, s)| *s)
            .sum()
    }

    /// The upper-section bonus derived from the current upper total.
    #[must_use]
    pub fn bonus(&self) -> u32 {
        if self.upper_total() >= Self::BONUS_THRESHOLD {
            Self::BONUS_SCORE
        } else {
            0
        }
    }

    /// Sum of the fourteen lower-section slots (unset slots count 0).
    #[must_use]
    pub fn lower_total(&self) -> u32 {
        self.slots
            .iter()
            .filter(|(c, _)| c.is_lower_section())
            .filter_map(|(_, s)| *s)
            .sum()
    }

    /// Grand total: upper + bonus + lower.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.upper_total() + self.bonus() + self.lower_total()
    }
}
