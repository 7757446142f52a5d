//! Group puzzle generation.
//!
//! A puzzle starts from the cyclic group table (addition mod n) and clears a
//! random selection of cells. Each diagonal cell and each off-diagonal pair
//! `(i, j)`/`(j, i)` survives with probability `fill_probability`, so the
//! starting table is always symmetric.

use serde::{Deserialize, Serialize};

use super::table::RelationTable;
use crate::core::{Alphabet, Difficulty, GroupPuzzleConfig, PuzzleRng, Result};

/// A generated puzzle: the table the player edits plus the table it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPuzzle {
    /// The partially-filled table presented to the player.
    pub table: RelationTable,
    /// The full table the puzzle was cut from.
    pub solution: RelationTable,
}

impl GroupPuzzle {
    /// Generate a puzzle from a configuration.
    pub fn generate(config: &GroupPuzzleConfig) -> Result<Self> {
        let alphabet = config.alphabet()?;
        let mut rng = PuzzleRng::new(config.seed).for_context("group-fill");
        let puzzle = Self::cut(alphabet, config.fill_probability, &mut rng);

        tracing::debug!(
            size = puzzle.size(),
            filled = puzzle.table.filled_count(),
            seed = config.seed,
            "generated group puzzle"
        );
        Ok(puzzle)
    }

    /// Generate a puzzle for a difficulty level with the given seed.
    pub fn for_difficulty(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::generate(&GroupPuzzleConfig::for_difficulty(difficulty).with_seed(seed))
    }

    fn cut(alphabet: Alphabet, fill_probability: f64, rng: &mut PuzzleRng) -> Self {
        let solution = RelationTable::cyclic(alphabet);
        let mut table = solution.clone();

        for cell in solution.cells().filter(|c| c.row <= c.col) {
            if !rng.gen_bool(fill_probability) {
                table.clear_pair(cell);
            }
        }

        Self { table, solution }
    }

    /// Number of symbols.
    #[must_use]
    pub fn size(&self) -> usize {
        self.table.size()
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.table.alphabet()
    }
}
