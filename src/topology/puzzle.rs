//! Hand-authored topology puzzles.
//!
//! Each difficulty has one fixed puzzle: a base set and a list of open sets
//! whose sizes become the slot counts of the editable buckets. The player
//! sees only the slot counts; any filling that satisfies the axioms wins.

use serde::{Deserialize, Serialize};

use super::buckets::{BucketCollection, BucketId};
use crate::core::{Alphabet, Difficulty, Result, Symbol};

/// A topology puzzle definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyPuzzle {
    pub difficulty: Difficulty,
    pub base: Alphabet,
    /// Editable buckets with the sets they were authored from.
    pub opens: Vec<(BucketId, Vec<Symbol>)>,
}

impl TopologyPuzzle {
    /// The puzzle for a difficulty level.
    pub fn for_difficulty(difficulty: Difficulty) -> Result<Self> {
        let (size, opens): (usize, &[(&str, &[usize])]) = match difficulty {
            Difficulty::Easy => (3, &[("A", &[0, 1]), ("B", &[1]), ("C", &[1, 2])]),
            Difficulty::Medium => (4, &[("A", &[0]), ("B", &[0, 1]), ("C", &[0, 1, 2])]),
            Difficulty::Hard => (
                5,
                &[("A", &[0, 1]), ("B", &[1, 2]), ("C", &[0, 1, 2]), ("D", &[1, 2, 3])],
            ),
        };

        let base = Alphabet::default_prefix(size)?;
        let opens = opens
            .iter()
            .map(|(id, members)| {
                let set = members.iter().filter_map(|&i| base.get(i).cloned()).collect();
                (BucketId::new(*id), set)
            })
            .collect();

        Ok(Self {
            difficulty,
            base,
            opens,
        })
    }

    /// Slot count of every editable bucket, in display order.
    pub fn slot_counts(&self) -> impl Iterator<Item = (&BucketId, usize)> {
        self.opens.iter().map(|(id, set)| (id, set.len()))
    }

    /// The starting collection: correct fixed buckets, editable buckets empty.
    pub fn start(&self) -> Result<BucketCollection> {
        let mut collection = BucketCollection::standard(self.base.clone());
        for (id, slots) in self.slot_counts() {
            collection.add_bucket(id.clone(), slots)?;
        }
        Ok(collection)
    }

    /// The starting collection with every editable bucket holding its
    /// authored set.
    pub fn reference(&self) -> Result<BucketCollection> {
        let mut collection = self.start()?;
        for (id, set) in &self.opens {
            for (slot, symbol) in set.iter().enumerate() {
                collection.place(id, slot, symbol.clone())?;
            }
        }
        Ok(collection)
    }
}
