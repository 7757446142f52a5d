//! Bucket collections: candidate topologies on a finite base set.
//!
//! Each bucket is a fixed number of slots that hold a symbol or nothing.
//! Two buckets always exist and can't be edited: `empty` (meant to be ∅)
//! and `full` (meant to be the whole base set). Every other bucket is filled
//! in by the player.
//!
//! A bucket is compared as its *materialized set*: filled slots only,
//! duplicates removed, order ignored.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Alphabet, PuzzleError, Result, Symbol};

/// Bucket identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketId(String);

impl BucketId {
    pub const EMPTY: &'static str = "empty";
    pub const FULL: &'static str = "full";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The fixed bucket that must stay empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Self::EMPTY)
    }

    /// The fixed bucket that must hold the whole base set.
    #[must_use]
    pub fn full() -> Self {
        Self::new(Self::FULL)
    }

    /// True for `empty` and `full`.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.0 == Self::EMPTY || self.0 == Self::FULL
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BucketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for BucketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of one slot inside a bucket.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub bucket: BucketId,
    pub slot: usize,
}

/// Sorted, duplicate-free set of symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct MaterializedSet(SmallVec<[Symbol; 8]>);

impl MaterializedSet {
    /// Build from any symbols; order and repeats are irrelevant.
    pub fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Self {
        let mut set: SmallVec<[Symbol; 8]> = symbols.into_iter().cloned().collect();
        set.sort();
        set.dedup();
        Self(set)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.0.binary_search(symbol).is_ok()
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_symbols(self.0.iter().chain(other.0.iter()))
    }

    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.iter().filter(|s| other.contains(s)).cloned().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.0.iter()
    }
}

impl std::fmt::Display for MaterializedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        f.write_str("}")
    }
}

impl From<Vec<Symbol>> for MaterializedSet {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::from_symbols(&symbols)
    }
}

impl From<MaterializedSet> for Vec<Symbol> {
    fn from(set: MaterializedSet) -> Self {
        set.0.into_vec()
    }
}

/// A named run of slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub id: BucketId,
    slots: Vec<Option<Symbol>>,
}

impl Bucket {
    fn new(id: BucketId, slots: Vec<Option<Symbol>>) -> Self {
        Self { id, slots }
    }

    /// Number of slots. Fixed at creation.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Symbol>] {
        &self.slots
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.id.is_fixed()
    }

    /// True when no slot is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn materialized(&self) -> MaterializedSet {
        MaterializedSet::from_symbols(self.slots.iter().flatten())
    }
}

/// All buckets of one topology puzzle over a base set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CollectionRepr", into = "CollectionRepr")]
pub struct BucketCollection {
    base: Alphabet,
    buckets: Vec<Bucket>,
    index: FxHashMap<BucketId, usize>,
}

impl BucketCollection {
    /// Create a collection holding only the two fixed buckets.
    ///
    /// `empty` and `full` give their contents (one slot per symbol); both
    /// must draw from `base`.
    pub fn new(base: Alphabet, empty: Vec<Symbol>, full: Vec<Symbol>) -> Result<Self> {
        for symbol in empty.iter().chain(full.iter()) {
            base.check(symbol)?;
        }

        let mut collection = Self {
            base,
            buckets: vec![
                Bucket::new(BucketId::empty(), empty.into_iter().map(Some).collect()),
                Bucket::new(BucketId::full(), full.into_iter().map(Some).collect()),
            ],
            index: FxHashMap::default(),
        };
        collection.reindex();
        Ok(collection)
    }

    /// Create a collection whose fixed buckets are correct: `empty` has no
    /// slots and `full` holds the base set.
    #[must_use]
    pub fn standard(base: Alphabet) -> Self {
        let full = base.symbols().to_vec();
        let mut collection = Self {
            buckets: vec![
                Bucket::new(BucketId::empty(), Vec::new()),
                Bucket::new(BucketId::full(), full.into_iter().map(Some).collect()),
            ],
            base,
            index: FxHashMap::default(),
        };
        collection.reindex();
        collection
    }

    /// Add an editable bucket with `slot_count` empty slots.
    ///
    /// Editable buckets are listed between `empty` and `full`.
    pub fn add_bucket(&mut self, id: impl Into<BucketId>, slot_count: usize) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(PuzzleError::DuplicateBucket(id.0));
        }

        let at = self.buckets.len().saturating_sub(1);
        self.buckets.insert(at, Bucket::new(id, vec![None; slot_count]));
        self.reindex();
        Ok(())
    }

    /// Put `symbol` into a slot of an editable bucket.
    pub fn place(&mut self, id: &BucketId, slot: usize, symbol: Symbol) -> Result<()> {
        self.base.check(&symbol)?;
        *self.slot_mut(id, slot)? = Some(symbol);
        Ok(())
    }

    /// Empty a slot of an editable bucket.
    pub fn clear_slot(&mut self, id: &BucketId, slot: usize) -> Result<()> {
        *self.slot_mut(id, slot)? = None;
        Ok(())
    }

    #[must_use]
    pub fn base(&self) -> &Alphabet {
        &self.base
    }

    /// Buckets in display order.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    #[must_use]
    pub fn bucket(&self, id: &BucketId) -> Option<&Bucket> {
        self.index.get(id).map(|&i| &self.buckets[i])
    }

    /// Buckets the player may edit.
    pub fn editable(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|b| !b.is_fixed())
    }

    /// Materialized set of a bucket.
    #[must_use]
    pub fn materialized(&self, id: &BucketId) -> Option<MaterializedSet> {
        self.bucket(id).map(Bucket::materialized)
    }

    /// True when every editable slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.editable().all(Bucket::is_filled)
    }

    fn slot_mut(&mut self, id: &BucketId, slot: usize) -> Result<&mut Option<Symbol>> {
        if id.is_fixed() {
            return Err(PuzzleError::FixedBucket(id.0.clone()));
        }
        let &i = self
            .index
            .get(id)
            .ok_or_else(|| PuzzleError::UnknownBucket(id.0.clone()))?;

        let bucket = &mut self.buckets[i];
        let slots = bucket.slots.len();
        bucket.slots.get_mut(slot).ok_or_else(|| PuzzleError::SlotOutOfBounds {
            bucket: id.0.clone(),
            slot,
            slots,
        })
    }

    fn reindex(&mut self) {
        self.index = self
            .buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();
    }
}

/// Serialized form: the base set plus buckets in display order.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CollectionRepr {
    base: Alphabet,
    buckets: Vec<Bucket>,
}

impl TryFrom<CollectionRepr> for BucketCollection {
    type Error = PuzzleError;

    fn try_from(repr: CollectionRepr) -> Result<Self> {
        let mut collection = Self {
            base: repr.base,
            buckets: repr.buckets,
            index: FxHashMap::default(),
        };
        collection.reindex();

        if collection.index.len() != collection.buckets.len() {
            let mut seen = FxHashSet::default();
            for bucket in &collection.buckets {
                if !seen.insert(&bucket.id) {
                    return Err(PuzzleError::DuplicateBucket(bucket.id.0.clone()));
                }
            }
        }
        for id in [BucketId::empty(), BucketId::full()] {
            if !collection.index.contains_key(&id) {
                return Err(PuzzleError::UnknownBucket(id.0));
            }
        }
        Ok(collection)
    }
}

impl From<BucketCollection> for CollectionRepr {
    fn from(collection: BucketCollection) -> Self {
        Self {
            base: collection.base,
            buckets: collection.buckets,
        }
    }
}
