//! Core types: player identity and the injected dice random source.
//!
//! These are the building blocks the rest of the crate is written against.
//! Nothing here knows about categories or turns.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{DiceRng, DiceRngState};
