//! Deterministic die-face generation: the injected random source.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice
//! - **Forkable**: Create independent streams for simulations or side games
//! - **Serializable**: O(1) state capture and restore
//!
//! The core never substitutes a fixed value when entropy is unavailable:
//! `from_entropy` surfaces the OS error at construction, and every draw
//! after that comes from the infallible ChaCha8 stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic die-face source.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Supports forking and O(1) state snapshots so a persistence
/// collaborator can store a game mid-turn without replaying the stream.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DiceRng {
    /// Create a new source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a source seeded from OS entropy.
    ///
    /// Entropy acquisition failure is fatal to construction and propagated
    /// to the caller; it is never masked by a fixed seed.
    pub fn from_entropy() -> Result<Self, rand::Error> {
        use rand::RngCore;

        let mut seed_bytes = [0u8; 8];
        rand::rngs::OsRng.try_fill_bytes(&mut seed_bytes)?;
        Ok(Self::new(u64::from_le_bytes(seed_bytes)))
    }

    /// Fork this source to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw one uniformly distributed die face in 1..=6.
    pub fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable random-source state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many faces have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
