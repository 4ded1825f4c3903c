//! Traversal order reversal.

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
use strider_core::error::{BoundsError, BoundsErrorKind, CursorOp, CursorResult};
use strider_core::tier::Tier;

/// A cursor that walks its source backwards.
///
/// Holds the underlying cursor one past the element it denotes, the only
/// convention under which the reversed end bound (the underlying start) needs
/// no position before it. Dereferencing steps a copy back first, so the
/// element behind the wrapped position is yielded.
#[derive(Debug, Clone)]
pub struct RevCursor<C> {
    inner: C,
}

impl<C: BidirectionalCursor> RevCursor<C> {
    /// Cursor denoting the element just before `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Lift a bounds pair by swapping its ends.
    pub fn bounds(bounds: Bounds<C>) -> Bounds<Self> {
        Bounds::new(Self::new(bounds.last), Self::new(bounds.first))
    }

    /// The wrapped cursor, one past the denoted element.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: BidirectionalCursor> Cursor for RevCursor<C> {
    type Item = C::Item;
    const TIER: Tier = C::TIER;

    fn advance(&mut self) -> CursorResult<()> {
        self.inner
            .retreat()
            .map_err(|_| BoundsError::new(BoundsErrorKind::StepPastEnd, CursorOp::Advance))
    }

    fn get(&self) -> CursorResult<C::Item> {
        let mut before = self.inner.clone();
        before
            .retreat()
            .map_err(|_| BoundsError::new(BoundsErrorKind::DerefAtEnd, CursorOp::Deref))?;
        before.get()
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.inner.matches(&other.inner)
    }

    fn remaining(&self, other: &Self) -> Option<usize> {
        other.inner.remaining(&self.inner)
    }
}

impl<C: BidirectionalCursor> ForwardCursor for RevCursor<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for RevCursor<C> {
    fn retreat(&mut self) -> CursorResult<()> {
        self.inner
            .advance()
            .map_err(|_| BoundsError::new(BoundsErrorKind::StepBeforeStart, CursorOp::Retreat))
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for RevCursor<C> {
    fn seek(&mut self, n: isize) -> CursorResult<()> {
        self.inner.seek(-n)
    }

    fn distance_to(&self, other: &Self) -> CursorResult<isize> {
        other.inner.distance_to(&self.inner)
    }

    fn precedes(&self, other: &Self) -> CursorResult<bool> {
        other.inner.precedes(&self.inner)
    }
}
