//! Index-and-element pairing.

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
use strider_core::error::CursorResult;
use strider_core::tier::Tier;

/// A cursor that pairs each element with its zero-based position.
///
/// The index is carried alongside the underlying cursor and moved in
/// lockstep, so no counting pass is needed. Backward movement has to know
/// the index of the end bound up front, which only a distance-computing
/// source can supply; the backward capabilities are therefore gated on the
/// random-access tier.
#[derive(Debug, Clone)]
pub struct EnumCursor<C> {
    inner: C,
    index: usize,
}

impl<C: Cursor> EnumCursor<C> {
    /// Cursor at `inner`, reporting position `index`.
    pub fn new(inner: C, index: usize) -> Self {
        Self { inner, index }
    }

    /// Lift a bounds pair.
    ///
    /// The end cursor's index is the range length when the source can
    /// compute it, and zero otherwise; forward-only driving never looks at
    /// the end index.
    pub fn bounds(bounds: Bounds<C>) -> Bounds<Self> {
        let len = bounds.first.remaining(&bounds.last).unwrap_or(0);
        Bounds::new(Self::new(bounds.first, 0), Self::new(bounds.last, len))
    }
}

impl<C: Cursor> Cursor for EnumCursor<C> {
    type Item = (usize, C::Item);
    // Backward movement exists only over random-access sources, which can
    // supply the end index; anything weaker caps at forward.
    const TIER: Tier = if C::TIER.supports(Tier::RandomAccess) {
        C::TIER
    } else {
        C::TIER.meet(Tier::Forward)
    };

    fn advance(&mut self) -> CursorResult<()> {
        self.inner.advance()?;
        self.index += 1;
        Ok(())
    }

    fn get(&self) -> CursorResult<(usize, C::Item)> {
        Ok((self.index, self.inner.get()?))
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.inner.matches(&other.inner)
    }

    fn remaining(&self, other: &Self) -> Option<usize> {
        self.inner.remaining(&other.inner)
    }
}

impl<C: ForwardCursor> ForwardCursor for EnumCursor<C> {}

impl<C: RandomAccessCursor> BidirectionalCursor for EnumCursor<C> {
    fn retreat(&mut self) -> CursorResult<()> {
        self.inner.retreat()?;
        self.index = self.index.saturating_sub(1);
        Ok(())
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for EnumCursor<C> {
    fn seek(&mut self, n: isize) -> CursorResult<()> {
        self.inner.seek(n)?;
        self.index = self.index.wrapping_add_signed(n);
        Ok(())
    }

    fn distance_to(&self, other: &Self) -> CursorResult<isize> {
        self.inner.distance_to(&other.inner)
    }

    fn precedes(&self, other: &Self) -> CursorResult<bool> {
        self.inner.precedes(&other.inner)
    }
}
