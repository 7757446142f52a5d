//! Evaluator and report traits.
//!
//! Each game implements `PropertyEvaluator` for its structure:
//! - Which axioms are checked
//! - How a structure maps to one verdict per axiom
//!
//! Evaluation is a pure function of the current structure. Callers recompute
//! the whole report after every edit; nothing is cached between passes.

use crate::core::Verdict;

/// A full evaluation result: one verdict per axiom.
///
/// ## Implementation Notes
///
/// - `axioms`: Every axiom the report covers, in display order
/// - `verdict`: Must be defined for every axiom in `axioms()`
pub trait AxiomReport {
    /// Axiom identifier for this game.
    type Axiom: Copy + Eq + 'static;

    /// All axioms this report covers, in display order.
    fn axioms() -> &'static [Self::Axiom];

    /// Verdict for one axiom.
    fn verdict(&self, axiom: Self::Axiom) -> Verdict;

    // === Convenience Methods ===

    /// Every axiom paired with its verdict, in display order.
    fn verdicts(&self) -> Vec<(Self::Axiom, Verdict)> {
        Self::axioms()
            .iter()
            .map(|&axiom| (axiom, self.verdict(axiom)))
            .collect()
    }

    /// True when every axiom is valid.
    fn is_solved(&self) -> bool {
        Self::axioms().iter().all(|&axiom| self.verdict(axiom).is_valid())
    }

    /// Axioms with a contradiction.
    fn failing(&self) -> Vec<Self::Axiom> {
        Self::axioms()
            .iter()
            .copied()
            .filter(|&axiom| self.verdict(axiom).is_invalid())
            .collect()
    }
}

/// Property evaluator trait.
///
/// Must be deterministic: the same structure always yields the same report.
pub trait PropertyEvaluator {
    /// The structure being checked (table, bucket collection).
    type Structure;

    /// The report produced by one pass.
    type Report: AxiomReport;

    /// Run one full evaluation pass.
    fn evaluate(&self, structure: &Self::Structure) -> Self::Report;
}
