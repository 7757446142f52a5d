//! Core types: symbols, verdicts, difficulty and configuration, RNG, errors.
//!
//! These are shared by the group and topology games. Neither game's
//! structure lives here.

pub mod symbol;
pub mod verdict;
pub mod config;
pub mod rng;
pub mod error;

pub use symbol::{Alphabet, Symbol, DEFAULT_SYMBOLS};
pub use verdict::{PropertyCheck, Verdict};
pub use config::{Difficulty, GroupPuzzleConfig};
pub use rng::PuzzleRng;
pub use error::{PuzzleError, Result};
