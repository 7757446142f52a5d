//! Error types.
//!
//! Errors only arise at the mutation boundary: an edit that would write an
//! unknown symbol, touch a cell that does not exist, or modify a fixed
//! bucket is rejected before anything changes. Evaluation never fails.

use thiserror::Error;

use super::symbol::Symbol;

/// The main error type for puzzle construction and edits.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Symbol not in alphabet: {0}")]
    UnknownSymbol(Symbol),

    #[error("Duplicate symbol in alphabet: {0}")]
    DuplicateSymbol(Symbol),

    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Alphabet size {requested} not supported (1..={max})")]
    AlphabetSize { requested: usize, max: usize },

    #[error("Cell ({row}, {col}) is outside a {size}x{size} table")]
    CellOutOfBounds { row: usize, col: usize, size: usize },

    #[error("Table has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("Table shape mismatch: expected {expected}x{expected}, row {row} has {found} cells")]
    ShapeMismatch {
        expected: usize,
        row: usize,
        found: usize,
    },

    #[error("Bucket not found: {0}")]
    UnknownBucket(String),

    #[error("Bucket already exists: {0}")]
    DuplicateBucket(String),

    #[error("Bucket is fixed and cannot be edited: {0}")]
    FixedBucket(String),

    #[error("Slot {slot} is outside bucket {bucket} ({slots} slots)")]
    SlotOutOfBounds {
        bucket: String,
        slot: usize,
        slots: usize,
    },

    #[error("Unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    #[error("Fill probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Result type alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
