//! Edit loop for the group table game.

use crate::core::{Difficulty, Result, Symbol};
use crate::group::{Cell, GroupEvaluator, GroupPuzzle, GroupReport, RelationTable};
use crate::rules::{AxiomReport, PropertyEvaluator};

/// One group puzzle in play.
///
/// Holds the table, the latest report and the sticky symbol: a symbol
/// pinned from a header that is dropped in place of whatever is dragged,
/// until a drop is made without holding it.
#[derive(Clone, Debug)]
pub struct GroupSession {
    puzzle: GroupPuzzle,
    evaluator: GroupEvaluator,
    sticky: Option<Symbol>,
    report: GroupReport,
}

impl GroupSession {
    /// Start a session on a puzzle.
    #[must_use]
    pub fn new(puzzle: GroupPuzzle) -> Self {
        let evaluator = GroupEvaluator::new();
        let report = evaluator.evaluate(&puzzle.table);
        Self {
            puzzle,
            evaluator,
            sticky: None,
            report,
        }
    }

    /// Generate a puzzle for `difficulty` and start a session on it.
    pub fn for_difficulty(difficulty: Difficulty, seed: u64) -> Result<Self> {
        GroupPuzzle::for_difficulty(difficulty, seed).map(Self::new)
    }

    #[must_use]
    pub fn puzzle(&self) -> &GroupPuzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn table(&self) -> &RelationTable {
        &self.puzzle.table
    }

    /// Report for the current table.
    #[must_use]
    pub fn report(&self) -> &GroupReport {
        &self.report
    }

    #[must_use]
    pub fn sticky(&self) -> Option<&Symbol> {
        self.sticky.as_ref()
    }

    /// Pin a symbol so subsequent drops use it.
    pub fn pin(&mut self, symbol: Symbol) -> Result<()> {
        self.puzzle.alphabet().check(&symbol)?;
        self.sticky = Some(symbol);
        Ok(())
    }

    pub fn unpin(&mut self) {
        self.sticky = None;
    }

    /// Drop a symbol on a cell (and its mirror).
    ///
    /// The sticky symbol, if any, wins over `dragged`. Unless `keep_sticky`
    /// is set the sticky symbol is released afterwards, whether or not the
    /// drop was accepted.
    pub fn drop_symbol(&mut self, cell: Cell, dragged: Symbol, keep_sticky: bool) -> Result<&GroupReport> {
        let symbol = self.sticky.clone().unwrap_or(dragged);
        let written = self.puzzle.table.set(cell, symbol);
        if !keep_sticky {
            self.sticky = None;
        }

        if let Err(err) = written {
            tracing::trace!(%cell, %err, "rejected drop");
            return Err(err);
        }
        Ok(self.recompute())
    }

    /// Clear a cell (and its mirror).
    pub fn clear(&mut self, cell: Cell) -> Result<&GroupReport> {
        if let Err(err) = self.puzzle.table.clear(cell) {
            tracing::trace!(%cell, %err, "rejected clear");
            return Err(err);
        }
        Ok(self.recompute())
    }

    /// True when every axiom holds.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.report.is_solved()
    }

    fn recompute(&mut self) -> &GroupReport {
        self.report = self.evaluator.evaluate(&self.puzzle.table);
        tracing::debug!(
            filled = self.puzzle.table.filled_count(),
            complete = self.report.complete,
            offending = self.report.offending_cells().len(),
            "group table re-evaluated"
        );
        &self.report
    }
}
