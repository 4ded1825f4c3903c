//! Counting cursor: generates a value sequence without wrapping any storage.
//!
//! Works for integral and floating-point element types through the [`Stride`]
//! trait. Floating-point positions drift under repeated `current + step`, so
//! their equality is an epsilon comparison, and the end bound is aligned at
//! construction to a value reachable by exact stepping, since termination is
//! equality-based and must land.

use core::marker::PhantomData;

use strider_core::cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
use strider_core::error::{BoundsError, BoundsErrorKind, CursorOp, CursorResult};
use strider_core::policy::{CheckPolicy, Checked};
use strider_core::tier::Tier;

use crate::range::Range;

/// Arithmetic a countable element type must support.
///
/// Implemented for the signed integers and for `f32`/`f64`. Integral
/// equality is exact; floating-point equality uses a fixed-epsilon tolerance
/// (`T::EPSILON`), a deliberate approximation that is only dependable for
/// values of modest magnitude.
pub trait Stride: Copy + PartialOrd {
    /// The additive identity.
    fn zero() -> Self;

    /// The unit step.
    fn one() -> Self;

    /// One step forward.
    #[must_use]
    fn forward(self, step: Self) -> Self;

    /// One step backward.
    #[must_use]
    fn backward(self, step: Self) -> Self;

    /// `n` steps away.
    #[must_use]
    fn jump(self, step: Self, n: isize) -> Self;

    /// The number of steps needed to reach or pass `other` from `self`
    /// (the ceiling of the quotient). Exact whenever `other` is reachable
    /// by whole steps.
    fn steps_between(self, other: Self, step: Self) -> isize;

    /// Position equality: exact for integers, epsilon for floats.
    fn same(self, other: Self) -> bool;

    /// Whether this value, used as a step, counts upward.
    fn is_ascending(self) -> bool {
        self > Self::zero()
    }

    /// Whether this value, used as a step, is zero (and would never
    /// terminate a count).
    fn is_null(self) -> bool {
        self.same(Self::zero())
    }

    /// Whether `self` is strictly before `other` in stepping direction.
    fn comes_before(self, other: Self, step: Self) -> bool {
        if step.is_ascending() {
            self < other
        } else {
            other < self
        }
    }
}

macro_rules! stride_int {
    ($($t:ty)+) => {$(
        impl Stride for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn forward(self, step: Self) -> Self {
                self + step
            }

            fn backward(self, step: Self) -> Self {
                self - step
            }

            fn jump(self, step: Self, n: isize) -> Self {
                self + step * (n as $t)
            }

            fn steps_between(self, other: Self, step: Self) -> isize {
                let diff = other - self;
                // div_euclid rounds the quotient down for a positive step
                // and up for a negative one; correct the first case so both
                // directions take the ceiling.
                let partial = step > 0 && diff.rem_euclid(step) != 0;
                (diff.div_euclid(step) + <$t>::from(partial)) as isize
            }

            fn same(self, other: Self) -> bool {
                self == other
            }
        }
    )+};
}

stride_int! { i8 i16 i32 i64 i128 isize }

macro_rules! stride_float {
    ($($t:ty)+) => {$(
        impl Stride for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn forward(self, step: Self) -> Self {
                self + step
            }

            fn backward(self, step: Self) -> Self {
                self - step
            }

            fn jump(self, step: Self, n: isize) -> Self {
                self + step * (n as $t)
            }

            fn steps_between(self, other: Self, step: Self) -> isize {
                ((other - self) / step).ceil() as isize
            }

            fn same(self, other: Self) -> bool {
                // Exact equality first: for |x| >= 2 adding EPSILON rounds
                // back to x, so the open window alone would miss x == x.
                self == other
                    || ((other - <$t>::EPSILON < self) && (self < other + <$t>::EPSILON))
            }
        }
    )+};
}

stride_float! { f32 f64 }

/// A position in a generated arithmetic sequence.
///
/// Carries the step and the (aligned) end bound, so a lone cursor can detect
/// the end of its sequence and reject comparison against cursors of a
/// different sequence. There is no lower bound: counting ranges are
/// unbounded below, and `retreat` never signals.
#[derive(Debug, Clone, Copy)]
pub struct CountCursor<T, K = Checked> {
    current: T,
    step: T,
    end: T,
    _policy: PhantomData<K>,
}

impl<T: Stride, K: CheckPolicy> CountCursor<T, K> {
    /// Cursor at `current`, stepping by `step` toward `end`.
    pub fn new(current: T, step: T, end: T) -> Self {
        Self {
            current,
            step,
            end,
            _policy: PhantomData,
        }
    }

    /// The (first, last) cursor pair counting from `begin` toward `end`.
    ///
    /// The end bound is aligned to the first stepping point at or past
    /// `end`, `begin + step * ceil((end - begin) / step)`, so every element
    /// of `[begin, end)` is kept and equality-based termination lands
    /// exactly despite non-unit steps and floating-point drift.
    pub fn bounds(begin: T, step: T, end: T) -> Bounds<Self> {
        debug_assert!(!step.is_null(), "counting step must be non-zero");
        let steps = begin.steps_between(end, step).max(0);
        let aligned = begin.jump(step, steps);
        Bounds::new(Self::new(begin, step, aligned), Self::new(aligned, step, aligned))
    }

    fn at_end(&self) -> bool {
        self.current.same(self.end) || !self.current.comes_before(self.end, self.step)
    }

    fn guard_bounds(&self, other: &Self, op: CursorOp) -> CursorResult<()> {
        if K::ENABLED && !(self.step.same(other.step) && self.end.same(other.end)) {
            return Err(BoundsError::new(BoundsErrorKind::BoundsMismatch, op));
        }
        Ok(())
    }
}

impl<T: Stride, K: CheckPolicy> Cursor for CountCursor<T, K> {
    type Item = T;
    const TIER: Tier = Tier::RandomAccess;

    fn advance(&mut self) -> CursorResult<()> {
        if K::ENABLED && self.at_end() {
            return Err(BoundsError::new(BoundsErrorKind::StepPastEnd, CursorOp::Advance));
        }
        self.current = self.current.forward(self.step);
        Ok(())
    }

    fn get(&self) -> CursorResult<T> {
        if K::ENABLED && self.at_end() {
            return Err(BoundsError::new(BoundsErrorKind::DerefAtEnd, CursorOp::Deref));
        }
        Ok(self.current)
    }

    fn matches(&self, other: &Self) -> CursorResult<bool> {
        self.guard_bounds(other, CursorOp::Compare)?;
        Ok(self.current.same(other.current))
    }

    fn remaining(&self, other: &Self) -> Option<usize> {
        usize::try_from(self.current.steps_between(other.current, self.step).max(0)).ok()
    }
}

impl<T: Stride, K: CheckPolicy> ForwardCursor for CountCursor<T, K> {}

impl<T: Stride, K: CheckPolicy> BidirectionalCursor for CountCursor<T, K> {
    fn retreat(&mut self) -> CursorResult<()> {
        self.current = self.current.backward(self.step);
        Ok(())
    }
}

impl<T: Stride, K: CheckPolicy> RandomAccessCursor for CountCursor<T, K> {
    fn seek(&mut self, n: isize) -> CursorResult<()> {
        if K::ENABLED && n > self.current.steps_between(self.end, self.step) {
            return Err(BoundsError::new(BoundsErrorKind::OutOfRange, CursorOp::Seek));
        }
        self.current = self.current.jump(self.step, n);
        Ok(())
    }

    fn distance_to(&self, other: &Self) -> CursorResult<isize> {
        self.guard_bounds(other, CursorOp::Distance)?;
        Ok(self.current.steps_between(other.current, self.step))
    }

    fn precedes(&self, other: &Self) -> CursorResult<bool> {
        self.guard_bounds(other, CursorOp::Compare)?;
        Ok(self.current.comes_before(other.current, self.step))
    }
}

/// The counting range `[begin, end)` with stride `step`.
pub fn range_by<T: Stride>(begin: T, step: T, end: T) -> Range<CountCursor<T>> {
    Range::new(CountCursor::bounds(begin, step, end))
}

/// The counting range `[begin, end)` with unit stride.
pub fn range<T: Stride>(begin: T, end: T) -> Range<CountCursor<T>> {
    range_by(begin, T::one(), end)
}

/// The counting range `[0, end)` with unit stride.
pub fn range_to<T: Stride>(end: T) -> Range<CountCursor<T>> {
    range_by(T::zero(), T::one(), end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unit_stride_counts() {
        let values: Vec<i32> = range(3, 8).collect();
        assert_eq!(values, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn stride_two_is_end_exclusive() {
        let values: Vec<i32> = range_by(0, 2, 8).collect();
        assert_eq!(values, vec![0, 2, 4, 6]);
    }

    #[test]
    fn non_dividing_stride_keeps_every_element_below_end() {
        let values: Vec<i32> = range_by(0, 3, 8).collect();
        assert_eq!(values, vec![0, 3, 6]);
    }

    #[test]
    fn non_dividing_stride_matches_step_by() {
        let ours: Vec<i64> = range_by(0, 3, 82).collect();
        let std: Vec<i64> = (0..82).step_by(3).collect();
        assert_eq!(ours, std);
        assert_eq!(ours.last(), Some(&81));

        let long: Vec<i64> = range_by(0, 2, 125).collect();
        assert_eq!(long.len(), 63);
        assert_eq!(long.last(), Some(&124));
    }

    #[test]
    fn non_dividing_negative_stride_stops_before_end() {
        let values: Vec<i32> = range_by(0, -2, -5).collect();
        assert_eq!(values, vec![0, -2, -4]);
    }

    #[test]
    fn negative_stride_counts_down() {
        let values: Vec<i32> = range_by(0, -1, -8).collect();
        assert_eq!(values, vec![0, -1, -2, -3, -4, -5, -6, -7]);
    }

    #[test]
    fn float_stride_terminates_despite_drift() {
        let values: Vec<f64> = range_by(0.0, 0.5, 2.0).collect();
        assert_eq!(values.len(), 4);
        for (value, expected) in values.iter().zip([0.0, 0.5, 1.0, 1.5]) {
            assert!((value - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn float_positions_match_themselves_beyond_epsilon_magnitudes() {
        // Above magnitude 2, x + EPSILON rounds back to x, so equality must
        // not depend on the open tolerance window alone.
        assert!(2.0f64.same(2.0));
        assert!(1024.0f64.same(1024.0));

        let bounds = CountCursor::<f64>::bounds(0.0, 0.5, 2.0);
        assert!(bounds.last.matches(&bounds.last.clone()).unwrap());
        assert!(!bounds.first.matches(&bounds.last).unwrap());

        let values: Vec<f64> = range_by(1000.0, 0.5, 1002.0).collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], 1000.0);
    }

    #[test]
    fn empty_when_end_is_behind() {
        let values: Vec<i32> = range_by(5, 2, 3).collect();
        assert!(values.is_empty());
    }

    #[test]
    fn advance_at_end_signals() {
        let bounds = CountCursor::<i32>::bounds(0, 1, 2);
        let mut cursor = bounds.last;
        assert_eq!(
            cursor.advance().unwrap_err().kind(),
            BoundsErrorKind::StepPastEnd
        );
    }

    #[test]
    fn mismatched_sequences_do_not_compare() {
        let a = CountCursor::<i32>::bounds(0, 1, 4).first;
        let b = CountCursor::<i32>::bounds(0, 2, 4).first;
        assert_eq!(
            a.matches(&b).unwrap_err().kind(),
            BoundsErrorKind::BoundsMismatch
        );
    }

    #[test]
    fn seek_past_end_signals() {
        let bounds = CountCursor::<i32>::bounds(0, 1, 4);
        let mut cursor = bounds.first;
        cursor.seek(4).unwrap();
        assert_eq!(cursor.seek(1).unwrap_err().kind(), BoundsErrorKind::OutOfRange);
    }

    proptest! {
        #[test]
        fn length_matches_the_closed_form(begin in -500i64..500, step in 1i64..20, span in 0i64..500) {
            let end = begin + span;
            let values: Vec<i64> = range_by(begin, step, end).collect();
            prop_assert_eq!(values.len() as i64, (end - begin + step - 1) / step);
        }

        #[test]
        fn every_element_is_reachable_by_stepping(begin in -100i64..100, step in 1i64..10, span in 0i64..200) {
            let values: Vec<i64> = range_by(begin, step, begin + span).collect();
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(*value, begin + step * i as i64);
            }
        }
    }
}
