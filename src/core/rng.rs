//! Deterministic random number generation for damage and healing rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! ## Rolls
//!
//! Every roll has the shape `round(unit() * factor) + base`, where `unit()`
//! is uniform in `[0, 1)`. With `base = 5`:
//!
//! ```
//! use monster_slayer::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! for _ in 0..100 {
//!     let points = rng.roll(5, 10);
//!     assert!((5..=15).contains(&points));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing every roll in a game.
///
/// Uses ChaCha8 for speed while keeping the stream reproducible from its
/// seed and word position.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `state()` can replay the game.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Roll `round(unit() * factor) + base`.
    ///
    /// The result lies in `[base, base + factor]` inclusive. The two end
    /// points are half as likely as the interior values because of the
    /// rounding.
    pub fn roll(&mut self, base: i64, factor: u32) -> i64 {
        // unit() is non-negative, so round() matches round-half-up here
        let scaled = (self.unit() * f64::from(factor)).round() as i64;
        base.saturating_add(scaled)
    }

    /// Get the current state for replay.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) capture regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
