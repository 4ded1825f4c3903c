//! Random-access source cursor over slices.
//!
//! The canonical way containers enter the library: `adapt(&vec)` and friends
//! land here. The cursor carries its bounds (the slice itself) plus an index,
//! so two cursors can detect that they were produced from different ranges.

use core::marker::PhantomData;

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
use strider_core::error::{BoundsError, BoundsErrorKind, CursorOp, CursorResult};
use strider_core::policy::{CheckPolicy, Checked};
use strider_core::tier::Tier;

/// A position within a borrowed slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T, K = Checked> {
    slice: &'a [T],
    at: usize,
    _policy: PhantomData<K>,
}

impl<'a, T, K: CheckPolicy> SliceCursor<'a, T, K> {
    /// Cursor at position `at` of `slice`.
    #[must_use]
    pub fn new(slice: &'a [T], at: usize) -> Self {
        Self {
            slice,
            at,
            _policy: PhantomData,
        }
    }

    /// The (first, last) cursor pair spanning the whole slice.
    #[must_use]
    pub fn bounds(slice: &'a [T]) -> Bounds<Self> {
        Bounds::new(Self::new(slice, 0), Self::new(slice, slice.len()))
    }

    fn same_bounds(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
            && self.slice.len() == other.slice.len()
    }

    fn guard_bounds(&self, other: &Self, op: CursorOp) -> CursorResult<()> {
        if K::ENABLED && !self.same_bounds(other) {
            return Err(BoundsError::new(BoundsErrorKind::BoundsMismatch, op));
        }
        Ok(())
    }
}

impl<T, K> Clone for SliceCursor<'_, T, K> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            at: self.at,
            _policy: PhantomData,
        }
    }
}

impl<T, K> Copy for SliceCursor<'_, T, K> {}

impl<'a, T, K: CheckPolicy> Cursor for SliceCursor<'a, T, K> {
    type Item = &'a T;
    const TIER: Tier = Tier::RandomAccess;

    fn advance(&mut self) -> CursorResult<()> {
        if K::ENABLED && self.at == self.slice.len() {
            return Err(BoundsError::new(BoundsErrorKind::StepPastEnd, CursorOp::Advance));
        }
        self.at += 1;
        Ok(())
    }

    fn get(&self) -> CursorResult<&'a T> {
        if K::ENABLED {
            self.slice
                .get(self.at)
                .ok_or_else(|| BoundsError::new(BoundsErrorKind::DerefAtEnd, CursorOp::Deref))
        } else {
            Ok(&self.slice[self.at])
        }
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.guard_bounds(other, CursorOp::Compare)?;
        Ok(self.at == other.at)
    }

    fn remaining(&self, other: &Self) -> Option<usize> {
        other.at.checked_sub(self.at)
    }
}

impl<T, K: CheckPolicy> ForwardCursor for SliceCursor<'_, T, K> {}

impl<T, K: CheckPolicy> BidirectionalCursor for SliceCursor<'_, T, K> {
    fn retreat(&mut self) -> CursorResult<()> {
        if K::ENABLED && self.at == 0 {
            return Err(BoundsError::new(BoundsErrorKind::StepBeforeStart, CursorOp::Retreat));
        }
        self.at = self.at.wrapping_sub(1);
        Ok(())
    }
}

impl<T, K: CheckPolicy> RandomAccessCursor for SliceCursor<'_, T, K> {
    fn seek(&mut self, n: isize) -> CursorResult<()> {
        let target = (self.at as isize).wrapping_add(n);
        if K::ENABLED && (target < 0 || target as usize > self.slice.len()) {
            return Err(BoundsError::new(BoundsErrorKind::OutOfRange, CursorOp::Seek));
        }
        self.at = target as usize;
        Ok(())
    }

    fn distance_to(&self, other: &Self) -> CursorResult<isize> {
        self.guard_bounds(other, CursorOp::Distance)?;
        Ok(other.at as isize - self.at as isize)
    }

    fn precedes(&self, other: &Self) -> CursorResult<bool> {
        self.guard_bounds(other, CursorOp::Compare)?;
        Ok(self.at < other.at)
    }
}
