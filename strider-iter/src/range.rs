//! The user-facing range wrapper and the conversions into it.

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor};
use strider_core::dispatch::Callable;
use strider_core::drive::Drive;
use strider_core::error::CursorResult;
use strider_core::policy::{CheckPolicy, Checked};
use strider_core::tier::Tier;

use crate::enumerate::EnumCursor;
use crate::filter::FilterCursor;
use crate::iter_src::IterCursor;
use crate::map::MapCursor;
use crate::rev::RevCursor;
use crate::slice::SliceCursor;
use crate::view::{AsShared, ConstCursor};
use crate::zip::ZipCursor;

/// A lazy half-open range of elements.
///
/// Nothing but a bounds pair; every combinator wraps the cursors and hands
/// back a new range without touching an element. Elements flow only when the
/// range is driven, through [`IntoIterator`] or [`collect`](Range::collect).
#[derive(Debug, Clone)]
pub struct Range<C> {
    bounds: Bounds<C>,
}

impl<C: Cursor> Range<C> {
    /// Wrap a bounds pair.
    pub fn new(bounds: Bounds<C>) -> Self {
        Self { bounds }
    }

    /// The underlying bounds pair.
    pub fn bounds(&self) -> &Bounds<C> {
        &self.bounds
    }

    /// Unwrap into the bounds pair.
    pub fn into_bounds(self) -> Bounds<C> {
        self.bounds
    }

    /// The capability tier of this range's cursors.
    #[must_use]
    pub fn tier(&self) -> Tier {
        C::TIER
    }

    /// Whether the range holds no elements.
    ///
    /// # Errors
    ///
    /// Signals a bounds mismatch on checked cursors from different ranges.
    pub fn is_empty(&self) -> CursorResult<bool> {
        self.bounds.is_empty()
    }

    /// The element count, when computable in constant time.
    pub fn len(&self) -> Option<usize> {
        self.bounds.len()
    }

    /// Transform each element with `func`.
    ///
    /// Accepts both a callable of the element and, when elements are tuples,
    /// a callable of the destructured fields.
    pub fn map<M, F>(self, func: F) -> Range<MapCursor<C, F, M>>
    where
        F: Callable<M, C::Item> + Clone,
    {
        Range::new(MapCursor::bounds(self.bounds, func))
    }

    /// Pair each element with its zero-based position.
    pub fn enumerate(self) -> Range<EnumCursor<C>> {
        Range::new(EnumCursor::bounds(self.bounds))
    }

    /// Traverse this range and `other` in lockstep, yielding pairs until
    /// either is exhausted.
    pub fn zip<D: Cursor>(self, other: Range<D>) -> Range<ZipCursor<(C, D)>> {
        Range::new(ZipCursor::bounds(
            (self.bounds.first, other.bounds.first),
            (self.bounds.last, other.bounds.last),
        ))
    }

    /// View the elements in their shared form.
    pub fn as_const(self) -> Range<ConstCursor<C>>
    where
        C::Item: AsShared,
    {
        Range::new(ConstCursor::bounds(self.bounds))
    }

    /// Drain the range into any collection.
    ///
    /// This is the eager endpoint of a pipeline; everything before it stays
    /// lazy.
    pub fn collect<B: FromIterator<C::Item>>(self) -> B {
        Drive::new(self.bounds).collect()
    }
}

impl<C: ForwardCursor> Range<C> {
    /// Keep only the elements `pred` accepts.
    pub fn filter<M, P>(self, pred: P) -> Range<FilterCursor<C, P, M>>
    where
        P: Callable<M, C::Item, Output = bool> + Clone,
    {
        Range::new(FilterCursor::bounds(self.bounds, pred))
    }
}

impl<C: BidirectionalCursor> Range<C> {
    /// Traverse back to front.
    pub fn rev(self) -> Range<RevCursor<C>> {
        Range::new(RevCursor::bounds(self.bounds))
    }
}

impl<C: Cursor> IntoIterator for Range<C> {
    type Item = C::Item;
    type IntoIter = Drive<C>;

    fn into_iter(self) -> Drive<C> {
        Drive::new(self.bounds)
    }
}

impl<C: ForwardCursor> IntoIterator for &Range<C> {
    type Item = C::Item;
    type IntoIter = Drive<C>;

    fn into_iter(self) -> Drive<C> {
        Drive::new(self.bounds.clone())
    }
}

/// Conversion of a borrowed container into a [`Range`] over its elements.
///
/// The policy parameter selects checked or unchecked source cursors; the
/// [`adapt`](crate::adapt) and [`fast::adapt`](crate::fast::adapt) entry
/// points fix it.
pub trait IntoRange<K: CheckPolicy = Checked> {
    /// The source cursor the conversion produces.
    type Cursor: Cursor;

    /// Build the range.
    fn into_range(self) -> Range<Self::Cursor>;
}

impl<'a, T, K: CheckPolicy> IntoRange<K> for &'a [T] {
    type Cursor = SliceCursor<'a, T, K>;

    fn into_range(self) -> Range<Self::Cursor> {
        Range::new(SliceCursor::bounds(self))
    }
}

impl<'a, T, const N: usize, K: CheckPolicy> IntoRange<K> for &'a [T; N] {
    type Cursor = SliceCursor<'a, T, K>;

    fn into_range(self) -> Range<Self::Cursor> {
        Range::new(SliceCursor::bounds(self))
    }
}

impl<'a, T, K: CheckPolicy> IntoRange<K> for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T, K>;

    fn into_range(self) -> Range<Self::Cursor> {
        Range::new(SliceCursor::bounds(self))
    }
}

/// The range `[first, last)` over two cursors of any origin.
pub fn between<C: Cursor>(first: C, last: C) -> Range<C> {
    Range::new(Bounds::new(first, last))
}

/// Lift any iterator into an input-tier range.
pub fn adapt_iter<I>(source: I) -> Range<IterCursor<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Range::new(IterCursor::bounds(source.into_iter()))
}
