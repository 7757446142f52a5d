//! Deterministic random number generation for puzzle generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same puzzle
//! - **Context streams**: Independent sequences for different purposes
//!
//! ```
//! use rust_axioms::core::PuzzleRng;
//!
//! let mut a = PuzzleRng::new(7);
//! let mut b = PuzzleRng::new(7);
//! assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG used by the puzzle generator.
///
/// Uses ChaCha8. Context seeds come from `FxHasher`, whose output does not
/// change between Rust releases, so a seed keeps reproducing the same puzzle.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Callers validate `probability` is within `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
