//! Headless edit loops.
//!
//! A session owns one puzzle and applies edits to it one at a time. Every
//! accepted edit is followed by a full evaluation pass; rejected edits leave
//! the structure and the last report untouched. UI interaction state (the
//! group game's sticky symbol) lives here, not in the evaluators.

mod group;
mod topology;

pub use group::GroupSession;
pub use topology::TopologySession;
