//! Inclusive coordinate ranges used by the sequence comparison layers.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{SymError, SymResult};

/// A pair of one-based, inclusive coordinates with `from <= to`.
///
/// Ordering and equality consider only the start position: ranges sort by
/// where they begin, and two ranges starting at the same position compare
/// equal regardless of their ends.
#[derive(Debug, Clone, Copy)]
pub struct SeqRange {
    pub from: i64,
    pub to: i64,
}

impl SeqRange {
    /// Fails fast on non-positive coordinates or `to < from`;
    /// there is no recovery path, validate before constructing.
    pub fn new(from: i64, to: i64) -> SymResult<Self> {
        if from <= 0 || to <= 0 {
            return Err(SymError::NonPositiveRange { from, to });
        }
        if to < from {
            return Err(SymError::InvertedRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// True if the two closed intervals intersect. Ranges that merely touch
    /// at a shared endpoint overlap as well.
    pub fn overlaps(&self, other: &SeqRange) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Overlap test for ranges whose positions step in codon triplets.
    ///
    /// Two such ranges can only collide when their start positions lie on
    /// the same track (equal remainder mod 3). Both ends are rounded down
    /// to the last on-track position before the plain overlap test.
    pub fn overlaps_in_frame(&self, other: &SeqRange) -> bool {
        if !self.overlaps(other) {
            return false;
        }
        if self.from % 3 != other.from % 3 {
            return false;
        }
        let rounded = |r: &SeqRange| SeqRange {
            from: r.from,
            to: r.to - (r.to - r.from) % 3,
        };
        rounded(self).overlaps(&rounded(other))
    }
}

impl PartialEq for SeqRange {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

impl Eq for SeqRange {}

impl PartialOrd for SeqRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeqRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.from.cmp(&other.from)
    }
}

impl fmt::Display for SeqRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{} to {}", self.from, self.to)
        }
    }
}
