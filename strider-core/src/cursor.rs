//! The cursor primitive traits, one per capability tier.
//!
//! A concrete cursor implements only the primitives of its tier; the rest of
//! the surface is synthesized. The input tier needs `advance`, `get`, and
//! `matches`; the forward tier adds nothing but clonability (multi-pass); the
//! bidirectional tier adds `retreat`; the random-access tier adds `seek`,
//! `distance_to`, and `precedes`, from which indexing and all six relational
//! comparisons are derived here as provided methods; a concrete cursor never
//! hand-writes the relational set.

use crate::error::CursorResult;
use crate::tier::Tier;

/// Input-tier cursor: single-pass traversal over a half-open range.
///
/// A cursor always knows its own bounds; `matches` is both the equality test
/// and the termination test (a range is exhausted when its front cursor
/// matches its back cursor). For checked cursors, relating two cursors that
/// were not produced from the same range is an error, never a silent `false`.
pub trait Cursor {
    /// The element this cursor yields. Sources yield references into the
    /// underlying storage; adaptors may yield computed values.
    type Item;

    /// The strongest tier this cursor type declares.
    ///
    /// Kept in sync with the capability traits the type implements; adaptors
    /// compute it with [`Tier::meet`].
    const TIER: Tier;

    /// Step one position forward.
    fn advance(&mut self) -> CursorResult<()>;

    /// Yield the element at the current position.
    ///
    /// Lazy adaptors re-run their transform on every call; nothing is cached.
    fn get(&self) -> CursorResult<Self::Item>;

    /// Whether both cursors sit at the same position of the same range.
    fn matches(&self, other: &Self) -> CursorResult<bool>;

    /// The number of positions between `self` and `other`, when it is
    /// cheaply computable. Random-access cursors override this; everything
    /// else reports unknown.
    fn remaining(&self, other: &Self) -> Option<usize> {
        let _ = other;
        None
    }
}

/// Forward-tier cursor: multi-pass traversal.
///
/// Cloning saves a position that can be revisited later; a cursor whose
/// source is consumed by reading (an input stream, say) must not implement
/// this.
pub trait ForwardCursor: Cursor + Clone {}

/// Bidirectional-tier cursor: adds stepping backwards.
pub trait BidirectionalCursor: ForwardCursor {
    /// Step one position backward.
    fn retreat(&mut self) -> CursorResult<()>;
}

/// Random-access-tier cursor: adds constant-time arithmetic.
///
/// Only `seek`, `distance_to`, and `precedes` are primitive; `peek_at` and
/// the relational helpers are synthesized from them.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Step by a signed count in constant time.
    fn seek(&mut self, n: isize) -> CursorResult<()>;

    /// Signed number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> CursorResult<isize>;

    /// Whether `self` sits strictly before `other` in the range.
    fn precedes(&self, other: &Self) -> CursorResult<bool>;

    /// The element `n` positions away, via copy, seek, and dereference.
    fn peek_at(&self, n: isize) -> CursorResult<Self::Item> {
        let mut probe = self.clone();
        probe.seek(n)?;
        probe.get()
    }

    /// Whether `self` sits at or before `other`.
    fn precedes_or_matches(&self, other: &Self) -> CursorResult<bool> {
        Ok(!other.precedes(self)?)
    }

    /// Whether `self` sits strictly after `other`.
    fn follows(&self, other: &Self) -> CursorResult<bool> {
        other.precedes(self)
    }

    /// Whether `self` sits at or after `other`.
    fn follows_or_matches(&self, other: &Self) -> CursorResult<bool> {
        Ok(!self.precedes(other)?)
    }
}

/// The half-open `[first, last)` pair a range is built from.
///
/// `first` matching `last` denotes emptiness; dereferencing at `last` is
/// always an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<C> {
    /// Cursor at the first element.
    pub first: C,
    /// Cursor one past the final element.
    pub last: C,
}

impl<C: Cursor> Bounds<C> {
    /// Pair up two cursors as range bounds.
    pub fn new(first: C, last: C) -> Self {
        Self { first, last }
    }

    /// Whether the range holds no elements.
    ///
    /// # Errors
    ///
    /// Signals a bounds mismatch if the cursors are not from the same range.
    pub fn is_empty(&self) -> CursorResult<bool> {
        self.first.matches(&self.last)
    }

    /// The element count, when the cursors can compute it in constant time.
    pub fn len(&self) -> Option<usize> {
        self.first.remaining(&self.last)
    }
}
