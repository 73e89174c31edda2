//! The closed set of twenty scoring categories.
//!
//! Modeled as an enum usable as an `EnumMap` key, so a table with exactly
//! one entry per category is a compile-time guarantee.

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// One of the twenty fixed scoring rules applied to a six-die roll.
///
/// The first six variants are the upper section; the remaining fourteen
/// are the lower section.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    OnePair,
    TwoPairs,
    ThreePairs,
    ThreeOfAKind,
    FourOfAKind,
    FiveOfAKind,
    SmallStraight,
    LargeStraight,
    FullStraight,
    FullHouse,
    Villa,
    Tower,
    Chance,
    MaxiYatzy,
}

impl Category {
    /// Total number of categories on a card.
    pub const COUNT: usize = 20;

    /// True for the six single-face categories (Ones..Sixes).
    #[must_use]
    pub fn is_upper_section(self) -> bool {
        matches!(
            self,
            Category::Ones
                | Category::Twos
                | Category::Threes
                | Category::Fours
                | Category::Fives
                | Category::Sixes
        )
    }

    /// True for the fourteen combination categories.
    #[must_use]
    pub fn is_lower_section(self) -> bool {
        !self.is_upper_section()
    }

    /// The face an upper-section category counts, `None` for lower section.
    #[must_use]
    pub fn face_value(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// The highest score this category can yield on any six-die roll.
    #[must_use]
    pub fn max_score(self) -> u32 {
        match self {
            Category::Ones => 6,
            Category::Twos => 12,
            Category::Threes => 18,
            Category::Fours => 24,
            Category::Fives => 30,
            Category::Sixes => 36,
            Category::OnePair => 12,
            Category::TwoPairs => 22,
            Category::ThreePairs => 30,
            Category::ThreeOfAKind => 18,
            Category::FourOfAKind => 24,
            Category::FiveOfAKind => 30,
            Category::SmallStraight => 15,
            Category::LargeStraight => 20,
            Category::FullStraight => 21,
            Category::FullHouse => 30,
            Category::Villa => 33,
            Category::Tower => 34,
            Category::Chance => 36,
            Category::MaxiYatzy => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_exactly_twenty_categories() {
        assert_eq!(Category::iter().count(), Category::COUNT);
    }

    #[test]
    fn test_section_split() {
        let upper = Category::iter().filter(|c| c.is_upper_section()).count();
        let lower = Category::iter().filter(|c| c.is_lower_section()).count();

        assert_eq!(upper, 6);
        assert_eq!(lower, 14);
    }

    #[test]
    fn test_face_values() {
        assert_eq!(Category::Ones.face_value(), Some(1));
        assert_eq!(Category::Sixes.face_value(), Some(6));
        assert_eq!(Category::OnePair.face_value(), None);
        assert_eq!(Category::Chance.face_value(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Category::ThreePairs).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::ThreePairs);
    }
}
