//! The drive skeleton: a full iterator surface synthesized from cursor
//! primitives.
//!
//! [`Drive`] holds a front and a back cursor and implements the standard
//! iterator traits appropriate to the cursor's tier: [`Iterator`] for any
//! cursor, [`DoubleEndedIterator`] once the cursor can retreat, and
//! [`ExactSizeIterator`] once it can compute distances. A concrete cursor
//! implements only its primitives and inherits all of this.

use crate::cursor::{BidirectionalCursor, Bounds, Cursor, RandomAccessCursor};
use crate::error::CursorResult;

/// Drives a cursor pair through a half-open range.
///
/// The front cursor sits on the next element to yield; the back cursor sits
/// one past the last element not yet yielded from the back. The range is
/// exhausted when the two match. The two cursors must come from one bounds
/// pair: iteration panics if they report mismatched bounds, rather than
/// returning a silently wrong (empty) sequence.
#[derive(Debug, Clone)]
pub struct Drive<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Drive<C> {
    /// Start driving over `bounds`.
    pub fn new(bounds: Bounds<C>) -> Self {
        Self {
            front: bounds.first,
            back: bounds.last,
        }
    }

    /// The front cursor, for callers that want primitive-level access.
    pub fn front(&self) -> &C {
        &self.front
    }

    /// The back cursor.
    pub fn back(&self) -> &C {
        &self.back
    }

    fn exhausted(&self) -> bool {
        match self.front.matches(&self.back) {
            Ok(done) => done,
            Err(err) => panic!("cursor pair disagrees on its bounds: {err}"),
        }
    }
}

impl<C: RandomAccessCursor> Drive<C> {
    /// Skip `n` elements from the front in constant time.
    ///
    /// # Errors
    ///
    /// Signals the underlying seek error when `n` overshoots the back bound
    /// on a checked cursor.
    pub fn fast_forward(&mut self, n: usize) -> CursorResult<()> {
        let n = isize::try_from(n).unwrap_or(isize::MAX);
        self.front.seek(n)
    }
}

impl<C: Cursor> Iterator for Drive<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.exhausted() {
            return None;
        }
        let item = self.front.get().ok()?;
        self.front.advance().ok()?;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.front.remaining(&self.back) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Drive<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.exhausted() {
            return None;
        }
        self.back.retreat().ok()?;
        self.back.get().ok()
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for Drive<C> {}

impl<C: Cursor> core::iter::FusedIterator for Drive<C> {}
