//! Parallel traversal over several ranges at once.

use strider_core::cursor::{Bounds, Cursor, ForwardCursor};
use strider_core::error::CursorResult;
use strider_core::tier::Tier;

/// A tuple of cursors movable in lockstep.
///
/// Implemented for tuples of two through four cursors. Equality is the OR
/// over the component comparisons: a zipped range ends as soon as any one
/// source does, which is what lets sources of unequal length zip at all.
pub trait CursorTuple {
    /// The tuple of elements the components yield.
    type Items;

    /// The weakest tier among the components.
    const TIER: Tier;

    /// Step every component forward.
    fn advance_all(&mut self) -> CursorResult<()>;

    /// Yield every component's element.
    fn get_all(&self) -> CursorResult<Self::Items>;

    /// Whether any component matches its counterpart.
    fn any_matches(&self, other: &Self) -> CursorResult<bool>;

    /// The smallest component distance, when every component can compute one.
    fn remaining_all(&self, other: &Self) -> Option<usize>;
}

macro_rules! impl_cursor_tuple {
    ($(($($c:ident . $i:tt),+))+) => {$(
        impl<$($c: Cursor),+> CursorTuple for ($($c,)+) {
            type Items = ($($c::Item,)+);

            const TIER: Tier = {
                let tier = Tier::RandomAccess;
                $(let tier = tier.meet($c::TIER);)+
                tier
            };

            fn advance_all(&mut self) -> CursorResult<()> {
                $(self.$i.advance()?;)+
                Ok(())
            }

            fn get_all(&self) -> CursorResult<Self::Items> {
                Ok(($(self.$i.get()?,)+))
            }

            fn any_matches(&self, other: &Self) -> CursorResult<bool> {
                Ok($(self.$i.matches(&other.$i)?)||+)
            }

            fn remaining_all(&self, other: &Self) -> Option<usize> {
                let remaining = [$(self.$i.remaining(&other.$i)?),+];
                remaining.into_iter().min()
            }
        }
    )+};
}

impl_cursor_tuple! {
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
}

/// A cursor over the element tuples of several sources.
///
/// Tier caps at forward: stepping backwards from the shared end bound is
/// ill-defined when the sources have different lengths, since the components
/// sit at unrelated distances from their own ends.
#[derive(Debug, Clone)]
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T: CursorTuple> ZipCursor<T> {
    /// Cursor over the component positions in `cursors`.
    pub fn new(cursors: T) -> Self {
        Self { cursors }
    }

    /// Lift per-component bounds into zipped bounds.
    pub fn bounds(firsts: T, lasts: T) -> Bounds<Self> {
        Bounds::new(Self::new(firsts), Self::new(lasts))
    }
}

impl<T: CursorTuple> Cursor for ZipCursor<T> {
    type Item = T::Items;
    const TIER: Tier = T::TIER.meet(Tier::Forward);

    fn advance(&mut self) -> CursorResult<()> {
        self.cursors.advance_all()
    }

    fn get(&self) -> CursorResult<T::Items> {
        self.cursors.get_all()
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.cursors.any_matches(&other.cursors)
    }

    fn remaining(&self, other: &Self) -> Option<usize> {
        self.cursors.remaining_all(&other.cursors)
    }
}

impl<T: CursorTuple + Clone> ForwardCursor for ZipCursor<T> {}
