//! # maxi-yatzy
//!
//! A Maxi Yatzy rules engine: six dice, twenty scoring categories, 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Scoring is pure rule evaluation over a six-die roll.
//!    The only side effect in the whole crate is drawing from an injected
//!    random source.
//!
//! 2. **Caller-Owned State**: No singletons or module-level caches. Every
//!    `Game` is an explicit instance, so one process can run any number of
//!    independent games.
//!
//! 3. **Closed Tables**: The category set is a closed enum and the score
//!    card is an enum-indexed table, so a missing or duplicate category is
//!    a compile-time concern, not a runtime one.
//!
//! ## Architecture
//!
//! - **Turn-Serialized**: At most one player's turn state is live at any
//!   instant. Transport, persistence, and authorization are collaborator
//!   concerns; the core assumes it is invoked by the rightful actor.
//!
//! - **Deterministic Replay**: Dice come from a seedable, forkable ChaCha8
//!   stream with O(1) serializable state.
//!
//! ## Modules
//!
//! - `core`: Player identity and the injected dice random source
//! - `dice`: Dice sets, held indices, roll and reroll
//! - `scoring`: Categories, the scoring engine, score cards
//! - `game`: Turn state machine and the game state machine

pub mod core;
pub mod dice;
pub mod scoring;
pub mod game;

// Re-export commonly used types
pub use crate::core::{DiceRng, DiceRngState, Player, PlayerId, PlayerMap};

pub use crate::dice::{reroll, roll_new, roll_set, DiceSet, HeldSet, DICE_COUNT};

pub use crate::scoring::{
    potential_scores, score_category, Category, PotentialScores, ScoreCard, ScoreCardError,
};

pub use crate::game::{
    Game, GameError, GameResult, GameSnapshot, GameStatus, Standings, TurnState, MAX_ROLLS,
};
