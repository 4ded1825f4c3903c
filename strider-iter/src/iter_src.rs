//! Input-tier source cursor over any standard iterator.
//!
//! Lifts an arbitrary `Iterator` into the cursor world so single-pass sources
//! (readers, generators) can feed a pipeline. Position equality is only
//! meaningful against the end bound, as for any input-tier source; the
//! declared tier stays `Input` even when the wrapped iterator happens to be
//! clonable and the cursor is multi-pass in practice.

use strider_core::cursor::{Bounds, Cursor, ForwardCursor};
use strider_core::error::{BoundsError, BoundsErrorKind, CursorOp, CursorResult};
use strider_core::tier::Tier;

/// A position within a consumed iterator.
///
/// The element ahead is buffered so `get` can yield it without advancing;
/// elements must be `Clone` because `get` may be called repeatedly for the
/// same position.
pub struct IterCursor<I: Iterator> {
    iter: Option<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> core::fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IterCursor")
            .field("exhausted", &self.exhausted())
            .finish()
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
        }
    }
}

impl<I: Iterator> IterCursor<I> {
    /// Cursor at the first element of `iter`.
    pub fn begin(mut iter: I) -> Self {
        let current = iter.next();
        Self {
            iter: Some(iter),
            current,
        }
    }

    /// The end bound every exhausted cursor matches.
    #[must_use]
    pub fn end() -> Self {
        Self {
            iter: None,
            current: None,
        }
    }

    /// The (first, last) cursor pair over `iter`.
    pub fn bounds(iter: I) -> Bounds<Self>
    where
        I::Item: Clone,
    {
        Bounds::new(Self::begin(iter), Self::end())
    }

    fn exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    const TIER: Tier = Tier::Input;

    fn advance(&mut self) -> CursorResult<()> {
        if self.exhausted() {
            return Err(BoundsError::new(BoundsErrorKind::StepPastEnd, CursorOp::Advance));
        }
        self.current = self.iter.as_mut().and_then(Iterator::next);
        Ok(())
    }

    fn get(&self) -> CursorResult<I::Item> {
        self.current
            .clone()
            .ok_or_else(|| BoundsError::new(BoundsErrorKind::DerefAtEnd, CursorOp::Deref))
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        // Input-tier positions are not comparable mid-stream; equality holds
        // exactly when both cursors are exhausted.
        Ok(self.exhausted() && other.exhausted())
    }
}

impl<I> ForwardCursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
}
