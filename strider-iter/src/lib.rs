//! Lazy, composable range adaptors over the cursor primitives of
//! `strider-core`.
//!
//! A [`Range`] is a pair of cursors spanning a half-open interval. Combinators
//! wrap the cursors and return a new range without visiting an element;
//! elements flow only when a range is driven, through a `for` loop or
//! [`Range::collect`]. Because adaptors preserve as much of the source's
//! capability tier as their semantics allow, a mapped slice range is still
//! random-access, while a filtered one caps at bidirectional.
//!
//! # Entry points
//!
//! - [`adapt`] borrows a container as a range over its elements.
//! - [`adapt_iter`] lifts any iterator into a single-pass range.
//! - [`range()`], [`range_by`], [`range_to`] count values lazily.
//! - [`between`] spans two cursors of any origin.
//! - [`zip()`], [`zip3`], [`zip4`] traverse several ranges in lockstep.
//! - The [`fast`] module repeats the entry points with bounds checking off.
//!
//! ```
//! use strider_iter::{adapt, range};
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! let doubled_evens: Vec<i32> = adapt(&data)
//!     .filter(|x: &i32| x % 2 == 0)
//!     .map(|x: &i32| x * 2)
//!     .collect();
//! assert_eq!(doubled_evens, vec![4, 8, 12]);
//!
//! let squares: Vec<i32> = range(0, 4).map(|x: i32| x * x).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod count;
pub mod enumerate;
pub mod filter;
pub mod iter_src;
pub mod map;
pub mod range;
pub mod rev;
pub mod slice;
pub mod view;
pub mod zip;

pub use count::{range, range_by, range_to, CountCursor, Stride};
pub use enumerate::EnumCursor;
pub use filter::FilterCursor;
pub use iter_src::IterCursor;
pub use map::MapCursor;
pub use range::{adapt_iter, between, IntoRange, Range};
pub use rev::RevCursor;
pub use slice::SliceCursor;
pub use view::{AsShared, ConstCursor};
pub use zip::{CursorTuple, ZipCursor};

use strider_core::cursor::{BidirectionalCursor, Cursor, ForwardCursor};
use strider_core::dispatch::Callable;

/// Borrow a container as a lazy range over its elements.
///
/// Source cursors are checked: stepping or dereferencing out of bounds and
/// relating cursors of different ranges signal errors instead of proceeding.
pub fn adapt<S: IntoRange>(source: S) -> Range<S::Cursor> {
    source.into_range()
}

/// Free-function form of [`Range::map`].
pub fn map<C, M, F>(r: Range<C>, func: F) -> Range<MapCursor<C, F, M>>
where
    C: Cursor,
    F: Callable<M, C::Item> + Clone,
{
    r.map(func)
}

/// Free-function form of [`Range::filter`].
pub fn filter<C, M, P>(r: Range<C>, pred: P) -> Range<FilterCursor<C, P, M>>
where
    C: ForwardCursor,
    P: Callable<M, C::Item, Output = bool> + Clone,
{
    r.filter(pred)
}

/// Free-function form of [`Range::enumerate`].
pub fn enumerate<C: Cursor>(r: Range<C>) -> Range<EnumCursor<C>> {
    r.enumerate()
}

/// Free-function form of [`Range::rev`].
pub fn reverse<C: BidirectionalCursor>(r: Range<C>) -> Range<RevCursor<C>> {
    r.rev()
}

/// Traverse two ranges in lockstep, yielding pairs until either is
/// exhausted.
pub fn zip<A: Cursor, B: Cursor>(a: Range<A>, b: Range<B>) -> Range<ZipCursor<(A, B)>> {
    a.zip(b)
}

/// Traverse three ranges in lockstep.
pub fn zip3<A: Cursor, B: Cursor, C: Cursor>(
    a: Range<A>,
    b: Range<B>,
    c: Range<C>,
) -> Range<ZipCursor<(A, B, C)>> {
    let (a, b, c) = (a.into_bounds(), b.into_bounds(), c.into_bounds());
    Range::new(ZipCursor::bounds(
        (a.first, b.first, c.first),
        (a.last, b.last, c.last),
    ))
}

/// Traverse four ranges in lockstep.
pub fn zip4<A: Cursor, B: Cursor, C: Cursor, D: Cursor>(
    a: Range<A>,
    b: Range<B>,
    c: Range<C>,
    d: Range<D>,
) -> Range<ZipCursor<(A, B, C, D)>> {
    let (a, b, c, d) = (a.into_bounds(), b.into_bounds(), c.into_bounds(), d.into_bounds());
    Range::new(ZipCursor::bounds(
        (a.first, b.first, c.first, d.first),
        (a.last, b.last, c.last, d.last),
    ))
}

/// Unchecked twins of the entry points.
///
/// Bounds violations on these ranges are not detected: out-of-range movement
/// and cross-range comparison proceed with garbage positions. Memory safety
/// is unaffected (a stray dereference still goes through a checked slice
/// index), but results are unspecified. Profile before reaching for these.
pub mod fast {
    use strider_core::policy::Unchecked;

    use crate::count::{CountCursor, Stride};
    use crate::range::{IntoRange, Range};

    /// [`adapt`](crate::adapt) without bounds checking.
    pub fn adapt<S: IntoRange<Unchecked>>(source: S) -> Range<S::Cursor> {
        source.into_range()
    }

    /// [`range_by`](crate::range_by) without bounds checking.
    pub fn range_by<T: Stride>(begin: T, step: T, end: T) -> Range<CountCursor<T, Unchecked>> {
        Range::new(CountCursor::bounds(begin, step, end))
    }

    /// [`range`](crate::range) without bounds checking.
    pub fn range<T: Stride>(begin: T, end: T) -> Range<CountCursor<T, Unchecked>> {
        range_by(begin, T::one(), end)
    }

    /// [`range_to`](crate::range_to) without bounds checking.
    pub fn range_to<T: Stride>(end: T) -> Range<CountCursor<T, Unchecked>> {
        range_by(T::zero(), T::one(), end)
    }
}
