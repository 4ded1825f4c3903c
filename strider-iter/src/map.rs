//! Lazy element transformation.

use core::marker::PhantomData;

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
use strider_core::dispatch::Callable;
use strider_core::error::CursorResult;
use strider_core::tier::Tier;

/// A cursor that yields `func(element)` in place of each element.
///
/// Pure position delegation: the transform plays no part in movement or
/// comparison, so every capability of the underlying cursor survives. The
/// transform is re-run on every dereference; nothing is cached.
#[derive(Debug)]
pub struct MapCursor<C, F, M> {
    inner: C,
    func: F,
    _marker: PhantomData<M>,
}

impl<C: Cursor, F, M> MapCursor<C, F, M> {
    /// Cursor applying `func` at the position of `inner`.
    pub fn new(inner: C, func: F) -> Self {
        Self {
            inner,
            func,
            _marker: PhantomData,
        }
    }

    /// Lift a bounds pair, cloning the transform into both ends.
    pub fn bounds(bounds: Bounds<C>, func: F) -> Bounds<Self>
    where
        F: Callable<M, C::Item> + Clone,
    {
        Bounds::new(Self::new(bounds.first, func.clone()), Self::new(bounds.last, func))
    }
}

impl<C: Clone, F: Clone, M> Clone for MapCursor<C, F, M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            func: self.func.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C, F, M> Cursor for MapCursor<C, F, M>
where
    C: Cursor,
    F: Callable<M, C::Item>,
{
    type Item = F::Output;
    const TIER: Tier = C::TIER;

    #[inline]
    fn advance(&mut self) -> CursorResult<()> {
        self.inner.advance()
    }

    #[inline]
    fn get(&self) -> CursorResult<F::Output> {
        Ok(self.func.call(self.inner.get()?))
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

impl<C, F, M> ForwardCursor for MapCursor<C, F, M>
where
    C: ForwardCursor,
    F: Callable<M, C::Item> + Clone,
{
}

impl<C, F, M> BidirectionalCursor for MapCursor<C, F, M>
where
    C: BidirectionalCursor,
    F: Callable<M, C::Item> + Clone,
{
    #[inline]
    fn retreat(&mut self) -> CursorResult<()> {
        self.inner.retreat()
    }
}

impl<C, F, M> RandomAccessCursor for MapCursor<C, F, M>
where
    C: RandomAccessCursor,
    F: Callable<M, C::Item> + Clone,
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
