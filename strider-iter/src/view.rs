//! Read-only views over mutable-yielding ranges.

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
use strider_core::error::CursorResult;
use strider_core::tier::Tier;

/// An element that can be demoted to a shared form.
///
/// The demotion is what a const view applies at every dereference: a unique
/// reference weakens to a shared one, a shared reference passes through.
/// Cursors yielding their own handle types can implement this to become
/// viewable.
pub trait AsShared {
    /// The shared form of the element.
    type Shared;

    /// Demote to the shared form.
    fn as_shared(self) -> Self::Shared;
}

impl<'a, T> AsShared for &'a T {
    type Shared = &'a T;

    fn as_shared(self) -> &'a T {
        self
    }
}

impl<'a, T> AsShared for &'a mut T {
    type Shared = &'a T;

    fn as_shared(self) -> &'a T {
        self
    }
}

/// A cursor that yields the shared form of its source's elements.
///
/// Pure delegation everywhere except the dereference, so every capability
/// of the source survives.
#[derive(Debug, Clone)]
pub struct ConstCursor<C> {
    inner: C,
}

impl<C: Cursor> ConstCursor<C> {
    /// View the position of `inner` read-only.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Lift a bounds pair.
    pub fn bounds(bounds: Bounds<C>) -> Bounds<Self>
    where
        C::Item: AsShared,
    {
        Bounds::new(Self::new(bounds.first), Self::new(bounds.last))
    }
}

impl<C> Cursor for ConstCursor<C>
where
    C: Cursor,
    C::Item: AsShared,
{
    type Item = <C::Item as AsShared>::Shared;
    const TIER: Tier = C::TIER;

    #[inline]
    fn advance(&mut self) -> CursorResult<()> {
        self.inner.advance()
    }

    #[inline]
    fn get(&self) -> CursorResult<Self::Item> {
        Ok(self.inner.get()?.as_shared())
    }

    #[inline]
    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.inner.matches(&other.inner)
    }

    #[inline]
    fn remaining(&self, other: &Self) -> Option<usize> {
        self.inner.remaining(&other.inner)
    }
}

impl<C> ForwardCursor for ConstCursor<C>
where
    C: ForwardCursor,
    C::Item: AsShared,
{
}

impl<C> BidirectionalCursor for ConstCursor<C>
where
    C: BidirectionalCursor,
    C::Item: AsShared,
{
    #[inline]
    fn retreat(&mut self) -> CursorResult<()> {
        self.inner.retreat()
    }
}

impl<C> RandomAccessCursor for ConstCursor<C>
where
    C: RandomAccessCursor,
    C::Item: AsShared,
{
    #[inline]
    fn seek(&mut self, n: isize) -> CursorResult<()> {
        self.inner.seek(n)
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> CursorResult<isize> {
        self.inner.distance_to(&other.inner)
    }

    #[inline]
    fn precedes(&self, other: &Self) -> CursorResult<bool> {
        self.inner.precedes(&other.inner)
    }
}
