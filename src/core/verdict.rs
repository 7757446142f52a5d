//! Verdicts and per-property check results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Outcome of checking one property against the current structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The property holds.
    Valid,
    /// Not enough data yet; no contradiction found.
    Pending,
    /// A contradiction was found.
    Invalid,
}

impl Verdict {
    /// `Valid` when `ok`, otherwise `Invalid` once the structure is
    /// complete and `Pending` before that.
    #[must_use]
    pub const fn settle(ok: bool, complete: bool) -> Self {
        match (ok, complete) {
            (true, _) => Verdict::Valid,
            (false, true) => Verdict::Invalid,
            (false, false) => Verdict::Pending,
        }
    }

    /// `Pending` until the structure is complete, then `Valid` or `Invalid`.
    #[must_use]
    pub const fn when_complete(ok: bool, complete: bool) -> Self {
        match (ok, complete) {
            (_, false) => Verdict::Pending,
            (true, true) => Verdict::Valid,
            (false, true) => Verdict::Invalid,
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Verdict::Pending)
    }

    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Verdict::Invalid)
    }

    /// Lowercase name, as used for status styling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::Pending => "pending",
            Verdict::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one property plus the locations to highlight.
///
/// `T` is a table cell in the group game and a bucket id in the topology
/// game. Offending locations are kept sorted so presentation is stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCheck<T: Ord> {
    pub verdict: Verdict,
    pub offending: BTreeSet<T>,
}

impl<T: Ord> PropertyCheck<T> {
    /// A check with the given verdict and nothing flagged.
    #[must_use]
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            offending: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn valid() -> Self {
        Self::new(Verdict::Valid)
    }

    #[must_use]
    pub fn pending() -> Self {
        Self::new(Verdict::Pending)
    }

    /// Flag a location. Flagging the same location twice is a no-op.
    pub fn flag(&mut self, location: T) {
        self.offending.insert(location);
    }

    #[must_use]
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = verdict;
        self
    }

    #[must_use]
    pub fn is_flagged(&self, location: &T) -> bool {
        self.offending.contains(location)
    }
}
