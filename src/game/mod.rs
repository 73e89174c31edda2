//! The turn state machine and the game state machine.
//!
//! `TurnState` enforces one player's roll/hold/select cycle; `Game` owns
//! the player list, rotates turns, commits scores, and computes standings.

pub mod error;
pub mod state;
pub mod turn;

pub use error::{GameError, GameResult};
pub use state::{Game, GameSnapshot, GameStatus, Standings};
pub use turn::{TurnState, MAX_ROLLS};
