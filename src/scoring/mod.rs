//! Scoring: the closed category set, the pure scoring engine, and the
//! per-player score card.
//!
//! Everything in this module is pure rule evaluation. Which categories are
//! still open for a given player is the game state machine's concern, not
//! the engine's.

pub mod card;
pub mod category;
pub mod engine;

pub use card::{ScoreCard, ScoreCardError};
pub use category::Category;
pub use engine::{potential_scores, score_category, PotentialScores};
