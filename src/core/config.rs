//! Puzzle configuration types.
//!
//! - `Difficulty`: The three levels both games offer
//! - `GroupPuzzleConfig`: Alphabet size, fill probability and seed for the
//!   group-table generator
//!
//! Topology puzzles are hand-authored per difficulty and need no config.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{PuzzleError, Result};
use super::symbol::Alphabet;

/// Puzzle difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of symbols in a group puzzle at this level.
    #[must_use]
    pub const fn group_alphabet_size(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 5,
            Difficulty::Hard => 6,
        }
    }

    /// Probability that a cell (or symmetric pair) stays filled in a
    /// generated group puzzle.
    #[must_use]
    pub const fn fill_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(PuzzleError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group puzzle generator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupPuzzleConfig {
    /// Number of symbols, taken from the front of the default alphabet.
    pub alphabet_size: usize,

    /// Probability that a diagonal cell or off-diagonal pair stays filled.
    /// 1.0 keeps the whole solution, 0.0 clears everything.
    pub fill_probability: f64,

    /// Random seed. Same seed produces the same puzzle.
    pub seed: u64,
}

impl Default for GroupPuzzleConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl GroupPuzzleConfig {
    /// Configuration for a difficulty level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            alphabet_size: difficulty.group_alphabet_size(),
            fill_probability: difficulty.fill_probability(),
            seed: 42,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_alphabet_size(mut self, size: usize) -> Self {
        self.alphabet_size = size;
        self
    }

    #[must_use]
    pub fn with_fill_probability(mut self, probability: f64) -> Self {
        self.fill_probability = probability;
        self
    }

    /// Check the configuration and build its alphabet.
    pub fn alphabet(&self) -> Result<Alphabet> {
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(PuzzleError::InvalidProbability(self.fill_probability));
        }
        Alphabet::default_prefix(self.alphabet_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "Hard".parse::<Difficulty>(),
            Err(PuzzleError::UnknownDifficulty(s)) if s == "Hard"
        ));
    }

    #[test]
    fn test_difficulty_levels() {
        let sizes: Vec<_> = Difficulty::ALL.iter().map(|d| d.group_alphabet_size()).collect();
        assert_eq!(sizes, vec![4, 5, 6]);

        let probs: Vec<_> = Difficulty::ALL.iter().map(|d| d.fill_probability()).collect();
        assert_eq!(probs, vec![0.8, 0.5, 0.3]);
    }

    #[test]
    fn test_default_config() {
        let config = GroupPuzzleConfig::default();
        assert_eq!(config.alphabet_size, 4);
        assert_eq!(config.fill_probability, 0.8);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GroupPuzzleConfig::for_difficulty(Difficulty::Hard)
            .with_seed(7)
            .with_alphabet_size(5)
            .with_fill_probability(1.0);

        assert_eq!(config.alphabet_size, 5);
        assert_eq!(config.fill_probability, 1.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.alphabet().unwrap().len(), 5);
    }

    #[test]
    fn test_config_validation() {
        let bad_prob = GroupPuzzleConfig::default().with_fill_probability(1.5);
        assert!(matches!(bad_prob.alphabet(), Err(PuzzleError::InvalidProbability(_))));

        let nan = GroupPuzzleConfig::default().with_fill_probability(f64::NAN);
        assert!(matches!(nan.alphabet(), Err(PuzzleError::InvalidProbability(_))));

        let too_big = GroupPuzzleConfig::default().with_alphabet_size(7);
        assert!(matches!(too_big.alphabet(), Err(PuzzleError::AlphabetSize { .. })));
    }

    #[test]
    fn test_serialization() {
        let config = GroupPuzzleConfig::for_difficulty(Difficulty::Medium);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GroupPuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
