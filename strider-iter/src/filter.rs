//! Lazy element selection.

use core::marker::PhantomData;

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor};
use strider_core::dispatch::Callable;
use strider_core::error::CursorResult;
use strider_core::tier::Tier;

/// A cursor that skips elements rejected by a predicate.
///
/// Carries its own bounds pair: movement must know where the underlying
/// range ends, since the next satisfying element may be arbitrarily far
/// away. Seeking by a count is meaningless when the positions in between are
/// invisible, so the tier caps at bidirectional regardless of the source.
///
/// Movement at a bound is lenient. Advancing a cursor already at the end, or
/// retreating one already at the start, is a no-op rather than an error; the
/// search loops themselves stop at the bounds instead of signalling.
#[derive(Debug)]
pub struct FilterCursor<C, P, M> {
    first: C,
    last: C,
    current: C,
    pred: P,
    _marker: PhantomData<M>,
}

impl<C, P, M> FilterCursor<C, P, M>
where
    C: ForwardCursor,
    P: Callable<M, C::Item, Output = bool>,
{
    /// Cursor at `current`, constrained to `[first, last)`.
    ///
    /// The position is corrected forward to the nearest satisfying element
    /// immediately, so a freshly built cursor either sits on an element the
    /// predicate accepts or at the end bound.
    pub fn new(bounds: &Bounds<C>, current: C, pred: P) -> Self {
        let mut cursor = Self {
            first: bounds.first.clone(),
            last: bounds.last.clone(),
            current,
            pred,
            _marker: PhantomData,
        };
        cursor.correct_forward();
        cursor
    }

    /// Lift a bounds pair, cloning the predicate into both ends.
    pub fn bounds(bounds: Bounds<C>, pred: P) -> Bounds<Self>
    where
        P: Clone,
    {
        let first = Self::new(&bounds, bounds.first.clone(), pred.clone());
        let last = Self::new(&bounds, bounds.last.clone(), pred);
        Bounds::new(first, last)
    }

    fn at_last(&self) -> bool {
        self.current.matches(&self.last).unwrap_or(true)
    }

    fn at_first(&self) -> bool {
        self.current.matches(&self.first).unwrap_or(true)
    }

    fn satisfied(&self) -> bool {
        self.current
            .get()
            .map(|item| self.pred.call(item))
            .unwrap_or(true)
    }

    fn correct_forward(&mut self) {
        while !self.at_last() && !self.satisfied() {
            if self.current.advance().is_err() {
                break;
            }
        }
    }
}

impl<C: Clone, P: Clone, M> Clone for FilterCursor<C, P, M> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            last: self.last.clone(),
            current: self.current.clone(),
            pred: self.pred.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C, P, M> Cursor for FilterCursor<C, P, M>
where
    C: ForwardCursor,
    P: Callable<M, C::Item, Output = bool> + Clone,
{
    type Item = C::Item;
    const TIER: Tier = C::TIER.meet(Tier::Bidirectional);

    fn advance(&mut self) -> CursorResult<()> {
        if self.at_last() {
            return Ok(());
        }
        self.current.advance()?;
        self.correct_forward();
        Ok(())
    }

    fn get(&self) -> CursorResult<C::Item> {
        self.current.get()
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.current.matches(&other.current)
    }
}

impl<C, P, M> ForwardCursor for FilterCursor<C, P, M>
where
    C: ForwardCursor,
    P: Callable<M, C::Item, Output = bool> + Clone,
{
}

impl<C, P, M> BidirectionalCursor for FilterCursor<C, P, M>
where
    C: BidirectionalCursor,
    P: Callable<M, C::Item, Output = bool> + Clone,
{
    fn retreat(&mut self) -> CursorResult<()> {
        if self.at_first() {
            return Ok(());
        }
        loop {
            self.current.retreat()?;
            if self.at_first() || self.satisfied() {
                break;
            }
        }
        Ok(())
    }
}
