//! Finite group table builder.
//!
//! The player fills an n×n operation table over n symbols. After every edit
//! the whole table is checked for commutativity, closedness, identity,
//! inverses and associativity.

mod table;
mod evaluator;
mod puzzle;

pub use table::{Cell, RelationTable};
pub use evaluator::{GroupAxiom, GroupEvaluator, GroupReport};
pub use puzzle::GroupPuzzle;
