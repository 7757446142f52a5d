//! Evaluator traits for the puzzle games.
//!
//! Games implement `PropertyEvaluator` to define:
//! - The structure being checked
//! - The report produced per pass
//!
//! Sessions call into `PropertyEvaluator` but never interpret
//! game-specific axioms directly.

pub mod engine;

pub use engine::{AxiomReport, PropertyEvaluator};
