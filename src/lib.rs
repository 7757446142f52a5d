//! # rust-axioms
//!
//! Rule-validation engine for two finite-structure puzzles: a group-table
//! builder and a topology builder.
//!
//! ## Design Principles
//!
//! 1. **Full Recomputation**: Every edit is followed by one complete
//!    evaluation pass. Structures are tiny (at most 6 symbols), so there is
//!    no incremental state to keep consistent.
//!
//! 2. **Three-Valued Verdicts**: Each axiom is `valid`, `pending` (not
//!    enough data, no contradiction yet) or `invalid`, together with the
//!    cells or buckets to highlight.
//!
//! 3. **Reject Before Mutating**: Edits with unknown symbols or
//!    out-of-range coordinates fail with `PuzzleError` and change nothing.
//!    Evaluation itself never fails.
//!
//! ## Modules
//!
//! - `core`: Symbols, alphabets, verdicts, difficulty, RNG, errors
//! - `rules`: `PropertyEvaluator` and `AxiomReport` traits
//! - `group`: Relation tables, group axiom evaluation, puzzle generation
//! - `topology`: Bucket collections, topology axiom evaluation, puzzles
//! - `session`: Edit loops that recompute reports after each edit
//!
//! ## Example
//!
//! ```
//! use rust_axioms::{Alphabet, Cell, GroupEvaluator, PropertyEvaluator, RelationTable, Verdict};
//!
//! let alphabet = Alphabet::default_prefix(4).unwrap();
//! let mut table = RelationTable::cyclic(alphabet.clone());
//! table.clear(Cell::new(1, 2)).unwrap();
//!
//! let report = GroupEvaluator::new().evaluate(&table);
//! assert_eq!(report.identity.verdict, Verdict::Valid);
//! assert_eq!(report.associativity.verdict, Verdict::Pending);
//! ```

pub mod core;
pub mod rules;
pub mod group;
pub mod topology;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, Symbol, DEFAULT_SYMBOLS,
    Verdict, PropertyCheck,
    Difficulty, GroupPuzzleConfig,
    PuzzleRng,
    PuzzleError, Result,
};

pub use crate::rules::{AxiomReport, PropertyEvaluator};

pub use crate::group::{Cell, GroupAxiom, GroupEvaluator, GroupPuzzle, GroupReport, RelationTable};

pub use crate::topology::{
    Bucket, BucketCollection, BucketId, ClosureGap, MaterializedSet, SlotRef,
    TopologyAxiom, TopologyEvaluator, TopologyPuzzle, TopologyReport,
};

pub use crate::session::{GroupSession, TopologySession};
