//! Cardinality estimates attached to every cursor.
//!
//! An [`IteratorSize`] says how many elements a cursor still has to yield:
//! exactly, at most, unknown or unbounded. Terminals use it to pre-allocate,
//! adapters use it to describe what they can still promise about their output.

use crate::error::{Error, Result};

/// Upper bound for the allocation hint derived from an [`IteratorSize::AtMost`].
///
/// An `AtMost(n)` bound is often pessimistic (a filter over a large source),
/// so only half of it is reserved, and never more than this ceiling.
pub const ALLOCATION_CEILING: usize = 4096;

/// Remaining element count of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IteratorSize {
    /// Nothing is known about the remaining count.
    #[default]
    Unknown,
    /// Exactly this many elements remain.
    Known(usize),
    /// No more than this many elements remain.
    AtMost(usize),
    /// The cursor never ends on its own.
    Infinite,
}

impl IteratorSize {
    /// Returns a safe pre-allocation hint for the remaining elements.
    ///
    /// # Panics
    ///
    /// Panics for [`IteratorSize::Infinite`]. Bound infinite cursors with
    /// `take` before collecting them.
    pub fn allocate(self) -> usize {
        match self.try_allocate() {
            Ok(capacity) => capacity,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`allocate`](Self::allocate), but reports an infinite size as
    /// [`Error::UnboundedAllocation`].
    pub fn try_allocate(self) -> Result<usize> {
        self.allocate_with_ceiling(ALLOCATION_CEILING)
    }

    /// Like [`try_allocate`](Self::try_allocate) with a caller-chosen ceiling
    /// for `AtMost` bounds.
    pub fn allocate_with_ceiling(self, ceiling: usize) -> Result<usize> {
        match self {
            IteratorSize::Unknown => Ok(0),
            IteratorSize::Known(n) => Ok(n),
            IteratorSize::AtMost(n) => Ok((n / 2).min(ceiling)),
            IteratorSize::Infinite => Err(Error::UnboundedAllocation),
        }
    }

    /// Size of a derived sequence that may drop elements.
    ///
    /// Only an exact count is degraded (to an upper bound); precision is never
    /// upgraded.
    pub fn subset(self) -> Self {
        match self {
            IteratorSize::Known(n) => IteratorSize::AtMost(n),
            other => other,
        }
    }

    /// Size of a sequence that ends as soon as either `self` or `other` ends.
    pub fn intersect(self, other: IteratorSize) -> Self {
        use IteratorSize::*;

        match (self, other) {
            (Infinite, size) | (size, Infinite) => size,
            (Known(a), Known(b)) => Known(a.min(b)),
            (Unknown, Unknown) => Unknown,
            (Unknown, Known(n) | AtMost(n)) | (Known(n) | AtMost(n), Unknown) => AtMost(n),
            (Known(a) | AtMost(a), Known(b) | AtMost(b)) => AtMost(a.min(b)),
        }
    }

    /// Size of `self` followed by `other`.
    pub fn concat(self, other: IteratorSize) -> Self {
        use IteratorSize::*;

        match (self, other) {
            (Infinite, _) | (_, Infinite) => Infinite,
            (Unknown, _) | (_, Unknown) => Unknown,
            (Known(a), Known(b)) => Known(a.saturating_add(b)),
            (Known(a) | AtMost(a), Known(b) | AtMost(b)) => AtMost(a.saturating_add(b)),
        }
    }

    /// Returns true when the cursor is known to have nothing left.
    pub fn is_empty(self) -> bool {
        matches!(self, IteratorSize::Known(0) | IteratorSize::AtMost(0))
    }

    /// Converts to the `(lower, upper)` shape of [`Iterator::size_hint`].
    pub fn size_hint(self) -> (usize, Option<usize>) {
        match self {
            IteratorSize::Unknown => (0, None),
            IteratorSize::Known(n) => (n, Some(n)),
            IteratorSize::AtMost(n) => (0, Some(n)),
            IteratorSize::Infinite => (usize::MAX, None),
        }
    }

    /// Interprets a native [`Iterator::size_hint`].
    ///
    /// `(usize::MAX, None)` is what infinite std iterators such as
    /// [`std::iter::repeat`] report.
    pub fn from_size_hint((lower, upper): (usize, Option<usize>)) -> Self {
        match upper {
            Some(upper) if upper == lower => IteratorSize::Known(upper),
            Some(upper) => IteratorSize::AtMost(upper),
            None if lower == usize::MAX => IteratorSize::Infinite,
            None => IteratorSize::Unknown,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
