//! Topology builder.
//!
//! The player fills buckets of fixed size with points of a small base set.
//! Together with the fixed `empty` and `full` buckets, the buckets must form
//! a topology: contain ∅ and the base set, and be closed under union and
//! intersection.

mod buckets;
mod evaluator;
mod puzzle;

pub use buckets::{Bucket, BucketCollection, BucketId, MaterializedSet, SlotRef};
pub use evaluator::{ClosureGap, TopologyAxiom, TopologyEvaluator, TopologyReport};
pub use puzzle::TopologyPuzzle;
