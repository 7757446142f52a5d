//! Edit loop for the topology game.

use crate::core::{Difficulty, Result, Symbol};
use crate::rules::{AxiomReport, PropertyEvaluator};
use crate::topology::{BucketCollection, BucketId, TopologyEvaluator, TopologyPuzzle, TopologyReport};

/// One topology puzzle in play.
#[derive(Clone, Debug)]
pub struct TopologySession {
    puzzle: TopologyPuzzle,
    collection: BucketCollection,
    evaluator: TopologyEvaluator,
    report: TopologyReport,
}

impl TopologySession {
    /// Start a session on a puzzle with every editable slot empty.
    pub fn new(puzzle: TopologyPuzzle) -> Result<Self> {
        let collection = puzzle.start()?;
        let evaluator = TopologyEvaluator::new();
        let report = evaluator.evaluate(&collection);
        Ok(Self {
            puzzle,
            collection,
            evaluator,
            report,
        })
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Result<Self> {
        Self::new(TopologyPuzzle::for_difficulty(difficulty)?)
    }

    #[must_use]
    pub fn puzzle(&self) -> &TopologyPuzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn collection(&self) -> &BucketCollection {
        &self.collection
    }

    #[must_use]
    pub fn report(&self) -> &TopologyReport {
        &self.report
    }

    /// Drop a symbol into a slot.
    pub fn place(&mut self, bucket: &BucketId, slot: usize, symbol: Symbol) -> Result<&TopologyReport> {
        if let Err(err) = self.collection.place(bucket, slot, symbol) {
            tracing::trace!(%bucket, slot, %err, "rejected placement");
            return Err(err);
        }
        Ok(self.recompute())
    }

    /// Empty a slot.
    pub fn clear(&mut self, bucket: &BucketId, slot: usize) -> Result<&TopologyReport> {
        if let Err(err) = self.collection.clear_slot(bucket, slot) {
            tracing::trace!(%bucket, slot, %err, "rejected clear");
            return Err(err);
        }
        Ok(self.recompute())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.report.is_solved()
    }

    fn recompute(&mut self) -> &TopologyReport {
        self.report = self.evaluator.evaluate(&self.collection);
        tracing::debug!(
            complete = self.report.complete,
            union_gaps = self.report.union_gaps.len(),
            intersection_gaps = self.report.intersection_gaps.len(),
            "topology re-evaluated"
        );
        &self.report
    }
}
