//! Group axiom evaluation.
//!
//! Five independent checks run over the whole table on every pass:
//!
//! | Axiom         | Before complete         | Once complete          |
//! |---------------|-------------------------|------------------------|
//! | commutativity | valid / invalid         | valid / invalid        |
//! | closedness    | valid / invalid         | valid / invalid        |
//! | identity      | valid / pending         | valid / invalid        |
//! | inverses      | pending                 | valid / invalid        |
//! | associativity | pending                 | valid / invalid        |
//!
//! Offending cells accumulate per axiom; a cell may be flagged by several.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::table::{Cell, RelationTable};
use crate::core::{PropertyCheck, Verdict};
use crate::rules::{AxiomReport, PropertyEvaluator};

/// The axioms checked for a group table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAxiom {
    Commutativity,
    Closedness,
    Identity,
    Inverses,
    Associativity,
}

impl GroupAxiom {
    pub const ALL: [GroupAxiom; 5] = [
        GroupAxiom::Commutativity,
        GroupAxiom::Closedness,
        GroupAxiom::Identity,
        GroupAxiom::Inverses,
        GroupAxiom::Associativity,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GroupAxiom::Commutativity => "commutativity",
            GroupAxiom::Closedness => "closedness",
            GroupAxiom::Identity => "identity",
            GroupAxiom::Inverses => "inverses",
            GroupAxiom::Associativity => "associativity",
        }
    }
}

impl std::fmt::Display for GroupAxiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one evaluation pass over a `RelationTable`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    /// Every cell was filled at evaluation time.
    pub complete: bool,
    /// Index of the symbol whose row and column both reproduce the alphabet.
    pub identity_element: Option<usize>,
    pub commutativity: PropertyCheck<Cell>,
    pub closedness: PropertyCheck<Cell>,
    pub identity: PropertyCheck<Cell>,
    pub inverses: PropertyCheck<Cell>,
    pub associativity: PropertyCheck<Cell>,
}

impl GroupReport {
    /// Check result for one axiom.
    #[must_use]
    pub fn get(&self, axiom: GroupAxiom) -> &PropertyCheck<Cell> {
        match axiom {
            GroupAxiom::Commutativity => &self.commutativity,
            GroupAxiom::Closedness => &self.closedness,
            GroupAxiom::Identity => &self.identity,
            GroupAxiom::Inverses => &self.inverses,
            GroupAxiom::Associativity => &self.associativity,
        }
    }

    /// Union of the offending cells of every axiom.
    #[must_use]
    pub fn offending_cells(&self) -> BTreeSet<Cell> {
        GroupAxiom::ALL
            .iter()
            .flat_map(|&axiom| self.get(axiom).offending.iter().copied())
            .collect()
    }
}

impl AxiomReport for GroupReport {
    type Axiom = GroupAxiom;

    fn axioms() -> &'static [GroupAxiom] {
        &GroupAxiom::ALL
    }

    fn verdict(&self, axiom: GroupAxiom) -> Verdict {
        self.get(axiom).verdict
    }
}

/// Evaluates the group axioms over a relation table.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupEvaluator;

impl GroupEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PropertyEvaluator for GroupEvaluator {
    type Structure = RelationTable;
    type Report = GroupReport;

    fn evaluate(&self, table: &RelationTable) -> GroupReport {
        let complete = table.is_complete();
        let (identity_element, identity) = check_identity(table, complete);

        GroupReport {
            complete,
            identity_element,
            commutativity: check_commutativity(table),
            closedness: check_closedness(table),
            identity,
            inverses: check_inverses(table, identity_element, complete),
            associativity: check_associativity(table, complete),
        }
    }
}

/// Filled mirror pairs must agree. Reported as soon as found.
fn check_commutativity(table: &RelationTable) -> PropertyCheck<Cell> {
    let mut check = PropertyCheck::valid();

    for cell in table.cells() {
        if let (Some(a), Some(b)) = (table.get(cell), table.get(cell.mirror())) {
            if a != b {
                check.flag(cell);
                check.flag(cell.mirror());
            }
        }
    }

    if !check.offending.is_empty() {
        check.verdict = Verdict::Invalid;
    }
    check
}

/// Every filled cell must hold a symbol of the alphabet.
fn check_closedness(table: &RelationTable) -> PropertyCheck<Cell> {
    let mut check = PropertyCheck::valid();

    for cell in table.cells() {
        if let Some(symbol) = table.get(cell) {
            if !table.alphabet().contains(symbol) {
                check.flag(cell);
            }
        }
    }

    if !check.offending.is_empty() {
        check.verdict = Verdict::Invalid;
    }
    check
}

/// Find the first `e` whose row and column both equal the alphabet in order.
///
/// A complete table without one flags row 0 and column 0.
fn check_identity(table: &RelationTable, complete: bool) -> (Option<usize>, PropertyCheck<Cell>) {
    let n = table.size();
    let symbols = table.alphabet().symbols();

    let candidate = (0..n).find(|&e| {
        (0..n).all(|j| {
            table.at(e, j) == Some(&symbols[j]) && table.at(j, e) == Some(&symbols[j])
        })
    });

    let mut check = PropertyCheck::new(Verdict::settle(candidate.is_some(), complete));
    if candidate.is_none() && complete {
        for j in 0..n {
            check.flag(Cell::new(0, j));
            check.flag(Cell::new(j, 0));
        }
    }

    (candidate, check)
}

/// Every row must contain the identity symbol somewhere.
///
/// Rows without it are flagged whole, even before the table is complete.
/// Without an identity the verdict is never valid.
fn check_inverses(
    table: &RelationTable,
    identity: Option<usize>,
    complete: bool,
) -> PropertyCheck<Cell> {
    let n = table.size();
    let identity_symbol = identity.and_then(|e| table.alphabet().get(e));

    let Some(identity_symbol) = identity_symbol else {
        return PropertyCheck::new(Verdict::settle(false, complete));
    };

    let mut check = PropertyCheck::pending();
    let mut ok = true;
    for i in 0..n {
        let has_inverse = (0..n).any(|j| table.at(i, j) == Some(identity_symbol));
        if !has_inverse {
            ok = false;
            for k in 0..n {
                check.flag(Cell::new(i, k));
            }
        }
    }

    check.with_verdict(Verdict::when_complete(ok, complete))
}

/// Compare `(a∘b)∘c` with `a∘(b∘c)` over all triples of a complete table.
///
/// Stops at the first mismatch and flags the four cells it read.
fn check_associativity(table: &RelationTable, complete: bool) -> PropertyCheck<Cell> {
    if !complete {
        return PropertyCheck::pending();
    }

    let n = table.size();
    let alphabet = table.alphabet();

    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                let (Some(ab), Some(bc)) = (table.at(a, b), table.at(b, c)) else {
                    continue;
                };
                let ab_idx = alphabet.index_of(ab);
                let bc_idx = alphabet.index_of(bc);

                // A product outside the alphabet can't be looked up and never agrees.
                let left = ab_idx.and_then(|k| table.at(k, c));
                let right = bc_idx.and_then(|k| table.at(a, k));
                if left.is_some() && left == right {
                    continue;
                }

                let mut check = PropertyCheck::new(Verdict::Invalid);
                check.flag(Cell::new(a, b));
                check.flag(Cell::new(b, c));
                if let Some(k) = ab_idx {
                    check.flag(Cell::new(k, c));
                }
                if let Some(k) = bc_idx {
                    check.flag(Cell::new(a, k));
                }
                return check;
            }
        }
    }

    PropertyCheck::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Symbol};

    fn alphabet(n: usize) -> Alphabet {
        Alphabet::default_prefix(n).unwrap()
    }

    fn table_from(n: usize, rows: &[&[usize]]) -> RelationTable {
        let a = alphabet(n);
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|&i| a.get(i).cloned()).collect())
            .collect();
        RelationTable::from_rows(a, rows).unwrap()
    }

    fn evaluate(table: &RelationTable) -> GroupReport {
        GroupEvaluator::new().evaluate(table)
    }

    #[test]
    fn test_cyclic_tables_are_groups() {
        for n in 1..=6 {
            let report = evaluate(&RelationTable::cyclic(alphabet(n)));
            assert!(report.is_solved(), "cyclic table of size {n}: {report:?}");
            assert_eq!(report.identity_element, Some(0));
            assert!(report.offending_cells().is_empty());
        }
    }

    #[test]
    fn test_empty_table() {
        let report = evaluate(&RelationTable::empty(alphabet(4)));
        assert!(!report.complete);
        assert_eq!(report.commutativity.verdict, Verdict::Valid);
        assert_eq!(report.closedness.verdict, Verdict::Valid);
        assert_eq!(report.identity.verdict, Verdict::Pending);
        assert_eq!(report.inverses.verdict, Verdict::Pending);
        assert_eq!(report.associativity.verdict, Verdict::Pending);
        assert!(report.offending_cells().is_empty());
    }

    #[test]
    fn test_commutativity_violation() {
        let a = alphabet(4);
        let mut rows = RelationTable::empty(a.clone()).to_rows();
        rows[0][1] = a.get(2).cloned();
        rows[1][0] = a.get(3).cloned();
        let table = RelationTable::from_rows(a, rows).unwrap();

        let report = evaluate(&table);
        assert_eq!(report.commutativity.verdict, Verdict::Invalid);
        assert_eq!(
            report.commutativity.offending,
            BTreeSet::from([Cell::new(0, 1), Cell::new(1, 0)])
        );
        assert_eq!(report.associativity.verdict, Verdict::Pending);
    }

    #[test]
    fn test_closedness_flags_foreign_symbols() {
        let a = alphabet(3);
        let mut rows = RelationTable::cyclic(a.clone()).to_rows();
        rows[2][2] = Some(Symbol::new("?"));
        let table = RelationTable::from_rows(a, rows).unwrap();

        let report = evaluate(&table);
        assert_eq!(report.closedness.verdict, Verdict::Invalid);
        assert_eq!(report.closedness.offending, BTreeSet::from([Cell::new(2, 2)]));
        assert_eq!(report.commutativity.verdict, Verdict::Valid);
    }

    #[test]
    fn test_identity_found_before_complete() {
        let a = alphabet(4);
        let mut table = RelationTable::cyclic(a);
        table.clear(Cell::new(2, 3)).unwrap();

        let report = evaluate(&table);
        assert_eq!(report.identity_element, Some(0));
        assert_eq!(report.identity.verdict, Verdict::Valid);
        assert_eq!(report.inverses.verdict, Verdict::Pending);
        assert_eq!(report.associativity.verdict, Verdict::Pending);
    }

    #[test]
    fn test_identity_need_not_be_first_symbol() {
        // Z2 with the identity as the second symbol.
        let table = table_from(2, &[&[1, 0], &[0, 1]]);
        let report = evaluate(&table);
        assert_eq!(report.identity_element, Some(1));
        assert!(report.is_solved());
    }

    #[test]
    fn test_missing_identity_complete() {
        // Constant table: no row reproduces the alphabet.
        let table = table_from(3, &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        let report = evaluate(&table);

        assert_eq!(report.identity.verdict, Verdict::Invalid);
        assert_eq!(report.identity.offending.len(), 5);
        assert!(report.identity.is_flagged(&Cell::new(0, 2)));
        assert!(report.identity.is_flagged(&Cell::new(2, 0)));
        assert!(!report.identity.is_flagged(&Cell::new(1, 1)));

        assert_eq!(report.inverses.verdict, Verdict::Invalid);
        assert!(report.inverses.offending.is_empty());
    }

    #[test]
    fn test_missing_inverse_flags_row() {
        // Identity is 0, but row 2 never produces it.
        let table = table_from(3, &[&[0, 1, 2], &[1, 0, 2], &[2, 2, 2]]);
        let report = evaluate(&table);

        assert_eq!(report.identity_element, Some(0));
        assert_eq!(report.inverses.verdict, Verdict::Invalid);
        assert_eq!(
            report.inverses.offending,
            BTreeSet::from([Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)])
        );
    }

    #[test]
    fn test_missing_inverse_pending_when_incomplete() {
        let mut table = table_from(3, &[&[0, 1, 2], &[1, 0, 2], &[2, 2, 2]]);
        table.clear(Cell::new(1, 1)).unwrap();

        let report = evaluate(&table);
        assert_eq!(report.inverses.verdict, Verdict::Pending);
        // Row 1 lost its only identity entry, row 2 never had one.
        assert!(report.inverses.is_flagged(&Cell::new(1, 0)));
        assert!(report.inverses.is_flagged(&Cell::new(2, 2)));
    }

    #[test]
    fn test_associativity_short_circuits() {
        // Commutative with identity 0, but not associative.
        let table = table_from(
            4,
            &[
                &[0, 1, 2, 3],
                &[1, 0, 3, 2],
                &[2, 3, 0, 1],
                &[3, 2, 1, 1],
            ],
        );
        let report = evaluate(&table);

        assert_eq!(report.commutativity.verdict, Verdict::Valid);
        assert_eq!(report.identity.verdict, Verdict::Valid);
        assert_eq!(report.associativity.verdict, Verdict::Invalid);

        // First failing triple in (a, b, c) order is (1, 2, 3):
        // (1∘2)∘3 = 3∘3 = 1, 1∘(2∘3) = 1∘1 = 0.
        assert_eq!(
            report.associativity.offending,
            BTreeSet::from([
                Cell::new(1, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 1),
            ])
        );
    }

    #[test]
    fn test_associativity_with_foreign_symbol() {
        let a = alphabet(2);
        let mut rows = RelationTable::cyclic(a.clone()).to_rows();
        rows[1][1] = Some(Symbol::new("?"));
        let table = RelationTable::from_rows(a, rows).unwrap();

        let report = evaluate(&table);
        assert_eq!(report.closedness.verdict, Verdict::Invalid);
        assert_eq!(report.associativity.verdict, Verdict::Invalid);
        assert!(report.associativity.is_flagged(&Cell::new(1, 1)));
    }

    #[test]
    fn test_associativity_with_only_foreign_symbols() {
        let a = alphabet(2);
        let foreign = Some(Symbol::new("?"));
        let rows = vec![vec![foreign.clone(); 2], vec![foreign; 2]];
        let table = RelationTable::from_rows(a, rows).unwrap();

        let report = evaluate(&table);
        assert_eq!(report.closedness.verdict, Verdict::Invalid);
        assert_eq!(report.associativity.verdict, Verdict::Invalid);
        // First triple (0, 0, 0): neither product has an index.
        assert_eq!(report.associativity.offending, BTreeSet::from([Cell::new(0, 0)]));
    }

    #[test]
    fn test_offending_cells_accumulate() {
        let table = table_from(3, &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 1]]);
        let report = evaluate(&table);
        let all = report.offending_cells();
        assert!(all.is_superset(&report.identity.offending));
        assert!(all.is_superset(&report.associativity.offending));
    }

    #[test]
    fn test_verdicts_order() {
        let report = evaluate(&RelationTable::cyclic(alphabet(4)));
        let axioms: Vec<_> = report.verdicts().into_iter().map(|(a, _)| a).collect();
        assert_eq!(axioms, GroupAxiom::ALL.to_vec());
    }

    #[test]
    fn test_report_serialization() {
        let report = evaluate(&RelationTable::empty(alphabet(4)));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["identity"]["verdict"], "pending");
        assert_eq!(json["commutativity"]["verdict"], "valid");
    }
}
