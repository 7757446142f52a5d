//! Topology game tests.
//!
//! These tests check closure evaluation over whole collections:
//! - Fixed buckets settle once every editable slot is filled
//! - Closures report every missing union and intersection
//! - The authored puzzles can be solved through a session

use proptest::prelude::*;
use rust_axioms::{
    Alphabet, AxiomReport, BucketCollection, BucketId, Difficulty, PropertyEvaluator, Symbol,
    TopologyAxiom, TopologyEvaluator, TopologyPuzzle, TopologySession, Verdict,
};

fn base() -> Alphabet {
    Alphabet::from_labels(["A", "B", "C"]).unwrap()
}

fn symbols(labels: &[&str]) -> Vec<Symbol> {
    labels.iter().map(|&l| Symbol::new(l)).collect()
}

/// Standard collection over {A, B, C} with the given editable buckets filled.
fn collection(opens: &[(&str, &[&str])]) -> BucketCollection {
    let mut collection = BucketCollection::standard(base());
    for (id, labels) in opens {
        let id = BucketId::new(*id);
        collection.add_bucket(id.clone(), labels.len()).unwrap();
        for (slot, symbol) in symbols(labels).into_iter().enumerate() {
            collection.place(&id, slot, symbol).unwrap();
        }
    }
    collection
}

// =============================================================================
// Fixed Bucket Tests
// =============================================================================

/// Test that a short `full` bucket stays pending until the player finishes.
#[test]
fn test_full_bucket_pending_then_invalid() {
    let mut collection =
        BucketCollection::new(base(), Vec::new(), symbols(&["A", "B"])).unwrap();
    let id = BucketId::new("X");
    collection.add_bucket(id.clone(), 1).unwrap();

    let evaluator = TopologyEvaluator::new();
    let report = evaluator.evaluate(&collection);
    assert_eq!(report.full.verdict, Verdict::Pending);
    assert!(report.full.offending.is_empty());

    collection.place(&id, 0, Symbol::new("B")).unwrap();
    let report = evaluator.evaluate(&collection);
    assert_eq!(report.full.verdict, Verdict::Invalid);
    assert!(report.full.is_flagged(&BucketId::full()));
    assert_eq!(report.empty.verdict, Verdict::Valid);
}

// =============================================================================
// Closure Tests
// =============================================================================

/// Test the union closure example and its broken variant.
#[test]
fn test_union_closure() {
    let evaluator = TopologyEvaluator::new();

    let closed = collection(&[("P", &["A", "B"]), ("Q", &["B"]), ("R", &["B", "C"])]);
    let report = evaluator.evaluate(&closed);
    assert_eq!(report.union.verdict, Verdict::Valid);
    assert_eq!(report.intersection.verdict, Verdict::Valid);
    assert!(report.is_solved());

    let broken = collection(&[("P", &["A", "B"]), ("Q", &["B"]), ("R", &["C"])]);
    let report = evaluator.evaluate(&broken);
    assert_eq!(report.union.verdict, Verdict::Invalid);
    assert_eq!(report.failing(), vec![TopologyAxiom::Union]);

    // {B} ∪ {C} = {B, C} is the only missing union.
    assert_eq!(report.union_gaps.len(), 1);
    let gap = &report.union_gaps[0];
    assert_eq!((gap.left.as_str(), gap.right.as_str()), ("Q", "R"));
    assert_eq!(gap.missing.to_string(), "{B, C}");

    assert_eq!(report.offending_slots().len(), 4);
}

/// Test that every missing pair is reported, not just the first.
#[test]
fn test_closure_gaps_accumulate() {
    let report = TopologyEvaluator::new().evaluate(&collection(&[("P", &["A"]), ("Q", &["B"])]));

    assert_eq!(report.union.verdict, Verdict::Invalid);
    assert_eq!(report.intersection.verdict, Verdict::Valid);
    assert_eq!(report.union_gaps.len(), 1);
    assert_eq!(report.union_gaps[0].missing.to_string(), "{A, B}");

    let report = TopologyEvaluator::new().evaluate(&collection(&[
        ("P", &["A", "B"]),
        ("Q", &["B", "C"]),
        ("R", &["A", "C"]),
    ]));
    assert_eq!(report.intersection.verdict, Verdict::Invalid);
    assert_eq!(report.intersection_gaps.len(), 3);
}

/// Test that a repeated symbol keeps the closures pending.
#[test]
fn test_duplicate_symbol_is_not_complete() {
    let report = TopologyEvaluator::new().evaluate(&collection(&[("P", &["A", "A"])]));
    assert!(report.filled);
    assert!(!report.complete);
    assert_eq!(report.union.verdict, Verdict::Pending);
    assert_eq!(report.intersection.verdict, Verdict::Pending);
    assert_eq!(report.empty.verdict, Verdict::Valid);
}

// =============================================================================
// Session Tests
// =============================================================================

/// Test a solve of each authored puzzle through a session.
#[test]
fn test_sessions_solve_every_difficulty() {
    let solutions: [(Difficulty, &[(&str, &[usize])]); 3] = [
        (Difficulty::Easy, &[("A", &[0, 1]), ("B", &[1]), ("C", &[1, 2])]),
        (Difficulty::Medium, &[("A", &[0]), ("B", &[0, 1]), ("C", &[0, 1, 2])]),
        // Duplicated sets close the hard puzzle.
        (
            Difficulty::Hard,
            &[("A", &[0, 1]), ("B", &[1, 0]), ("C", &[0, 1, 2]), ("D", &[2, 1, 0])],
        ),
    ];

    for (difficulty, fills) in solutions {
        let mut session = TopologySession::for_difficulty(difficulty).unwrap();
        for (id, members) in fills {
            let id = BucketId::new(*id);
            for (slot, &i) in members.iter().enumerate() {
                let symbol = session.puzzle().base.get(i).unwrap().clone();
                session.place(&id, slot, symbol).unwrap();
            }
        }
        assert!(session.is_solved(), "{difficulty}: {:?}", session.report());
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn fill_strategy() -> impl Strategy<Value = Vec<Vec<Option<usize>>>> {
    prop::collection::vec(prop::collection::vec(prop::option::of(0usize..3), 1..=3), 1..=4)
}

proptest! {
    #[test]
    fn prop_closure_verdicts_follow_gaps(fills in fill_strategy()) {
        let base = base();
        let mut collection = BucketCollection::standard(base.clone());
        for (b, slots) in fills.iter().enumerate() {
            let id = BucketId::new(format!("B{b}"));
            collection.add_bucket(id.clone(), slots.len()).unwrap();
            for (slot, value) in slots.iter().enumerate() {
                if let Some(i) = value {
                    collection.place(&id, slot, base.get(*i).unwrap().clone()).unwrap();
                }
            }
        }

        let report = TopologyEvaluator::new().evaluate(&collection);
        prop_assert_eq!(report.empty.verdict, Verdict::Valid);
        prop_assert_eq!(report.full.verdict, Verdict::Valid);

        if report.complete {
            prop_assert_eq!(report.union.verdict.is_valid(), report.union_gaps.is_empty());
            prop_assert_eq!(
                report.intersection.verdict.is_valid(),
                report.intersection_gaps.is_empty()
            );
        } else {
            prop_assert_eq!(report.union.verdict, Verdict::Pending);
            prop_assert_eq!(report.intersection.verdict, Verdict::Pending);
            prop_assert!(report.offending_slots().is_empty());
        }

        let any_invalid = report.failing().iter().any(|a| {
            matches!(a, TopologyAxiom::Union | TopologyAxiom::Intersection)
        });
        prop_assert_eq!(any_invalid, !report.offending_slots().is_empty());
    }
}

// =============================================================================
// Puzzle Tests
// =============================================================================

/// Test that the puzzle definitions are stable across calls.
#[test]
fn test_puzzles_are_deterministic() {
    for difficulty in Difficulty::ALL {
        assert_eq!(
            TopologyPuzzle::for_difficulty(difficulty).unwrap(),
            TopologyPuzzle::for_difficulty(difficulty).unwrap()
        );
    }
}
