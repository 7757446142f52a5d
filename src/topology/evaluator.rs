//! Topology axiom evaluation.
//!
//! A collection of subsets is a topology when it contains ∅ and the whole
//! base set and is closed under pairwise union and intersection. Closure is
//! only checked once every editable slot is filled; until then both closure
//! verdicts are pending.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::buckets::{BucketCollection, BucketId, MaterializedSet, SlotRef};
use crate::core::{PropertyCheck, Verdict};
use crate::rules::{AxiomReport, PropertyEvaluator};

/// The axioms checked for a bucket collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyAxiom {
    Empty,
    Full,
    Union,
    Intersection,
}

impl TopologyAxiom {
    pub const ALL: [TopologyAxiom; 4] = [
        TopologyAxiom::Empty,
        TopologyAxiom::Full,
        TopologyAxiom::Union,
        TopologyAxiom::Intersection,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TopologyAxiom::Empty => "empty",
            TopologyAxiom::Full => "full",
            TopologyAxiom::Union => "union",
            TopologyAxiom::Intersection => "intersection",
        }
    }
}

impl std::fmt::Display for TopologyAxiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair of buckets whose union or intersection is not in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureGap {
    pub left: BucketId,
    pub right: BucketId,
    pub missing: MaterializedSet,
}

/// Result of one evaluation pass over a `BucketCollection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyReport {
    /// Every editable slot was filled.
    pub filled: bool,
    /// Filled, and no editable bucket repeats a symbol.
    pub complete: bool,
    pub empty: PropertyCheck<BucketId>,
    pub full: PropertyCheck<BucketId>,
    pub union: PropertyCheck<BucketId>,
    pub intersection: PropertyCheck<BucketId>,
    pub union_gaps: Vec<ClosureGap>,
    pub intersection_gaps: Vec<ClosureGap>,
    slot_errors: BTreeSet<SlotRef>,
}

impl TopologyReport {
    /// Check result for one axiom.
    #[must_use]
    pub fn get(&self, axiom: TopologyAxiom) -> &PropertyCheck<BucketId> {
        match axiom {
            TopologyAxiom::Empty => &self.empty,
            TopologyAxiom::Full => &self.full,
            TopologyAxiom::Union => &self.union,
            TopologyAxiom::Intersection => &self.intersection,
        }
    }

    /// Slots to highlight: every editable slot once either closure fails.
    #[must_use]
    pub fn offending_slots(&self) -> &BTreeSet<SlotRef> {
        &self.slot_errors
    }

    /// Union of the offending buckets of every axiom.
    #[must_use]
    pub fn offending_buckets(&self) -> BTreeSet<BucketId> {
        TopologyAxiom::ALL
            .iter()
            .flat_map(|&axiom| self.get(axiom).offending.iter().cloned())
            .collect()
    }
}

impl AxiomReport for TopologyReport {
    type Axiom = TopologyAxiom;

    fn axioms() -> &'static [TopologyAxiom] {
        &TopologyAxiom::ALL
    }

    fn verdict(&self, axiom: TopologyAxiom) -> Verdict {
        self.get(axiom).verdict
    }
}

/// Evaluates the topology axioms over a bucket collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopologyEvaluator;

impl TopologyEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PropertyEvaluator for TopologyEvaluator {
    type Structure = BucketCollection;
    type Report = TopologyReport;

    fn evaluate(&self, collection: &BucketCollection) -> TopologyReport {
        let filled = collection.is_complete();

        let empty_ok = collection
            .materialized(&BucketId::empty())
            .is_some_and(|set| set.is_empty());
        let full_ok = collection
            .materialized(&BucketId::full())
            .is_some_and(|set| set == MaterializedSet::from_symbols(collection.base().iter()));

        let sets: Vec<(BucketId, MaterializedSet)> = collection
            .buckets()
            .iter()
            .map(|b| (b.id.clone(), b.materialized()))
            .collect();

        // A repeated symbol leaves a bucket short of its declared size.
        let complete = filled
            && collection
                .editable()
                .all(|b| b.materialized().len() == b.slot_count());

        let (union_gaps, intersection_gaps) = if complete {
            (
                closure_gaps(&sets, MaterializedSet::union),
                closure_gaps(&sets, MaterializedSet::intersection),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let editable: Vec<BucketId> = collection.editable().map(|b| b.id.clone()).collect();
        let union = closure_check(complete, &union_gaps, &editable);
        let intersection = closure_check(complete, &intersection_gaps, &editable);

        let slot_errors = if union.verdict.is_invalid() || intersection.verdict.is_invalid() {
            collection
                .editable()
                .flat_map(|b| {
                    (0..b.slot_count()).map(|slot| SlotRef {
                        bucket: b.id.clone(),
                        slot,
                    })
                })
                .collect()
        } else {
            BTreeSet::new()
        };

        TopologyReport {
            filled,
            complete,
            empty: fixed_check(BucketId::empty(), empty_ok, filled),
            full: fixed_check(BucketId::full(), full_ok, filled),
            union,
            intersection,
            union_gaps,
            intersection_gaps,
            slot_errors,
        }
    }
}

fn fixed_check(id: BucketId, ok: bool, filled: bool) -> PropertyCheck<BucketId> {
    let mut check = PropertyCheck::new(Verdict::settle(ok, filled));
    if check.verdict.is_invalid() {
        check.flag(id);
    }
    check
}

fn closure_check(
    complete: bool,
    gaps: &[ClosureGap],
    editable: &[BucketId],
) -> PropertyCheck<BucketId> {
    if !complete {
        return PropertyCheck::pending();
    }
    if gaps.is_empty() {
        return PropertyCheck::valid();
    }

    let mut check = PropertyCheck::new(Verdict::Invalid);
    for id in editable {
        check.flag(id.clone());
    }
    check
}

/// Every unordered pair (including a bucket with itself) whose combination
/// is not one of the collection's sets.
fn closure_gaps(
    sets: &[(BucketId, MaterializedSet)],
    combine: fn(&MaterializedSet, &MaterializedSet) -> MaterializedSet,
) -> Vec<ClosureGap> {
    let mut gaps = Vec::new();
    for (i, (left_id, left)) in sets.iter().enumerate() {
        for (right_id, right) in &sets[i..] {
            let combined = combine(left, right);
            if !sets.iter().any(|(_, set)| *set == combined) {
                gaps.push(ClosureGap {
                    left: left_id.clone(),
                    right: right_id.clone(),
                    missing: combined,
                });
            }
        }
    }
    gaps
}
