//! Invoke/apply dispatch for user-supplied callables.
//!
//! The mapping and filtering adaptors accept a callable under one of four
//! calling conventions, tried by overload resolution at the combinator call
//! site and fixed there; it is never retried at runtime:
//!
//! 1. [`Direct`] ("invoke"): the callable takes the element itself.
//! 2. [`Spread`] ("apply"): the element is tuple-like and is destructured
//!    into separate arguments, so a two-argument function maps over a range
//!    of pairs without any glue.
//! 3. [`SharedDirect`] / [`SharedSpread`]: the same two conventions reached
//!    through a [`Shared`] reference wrapper, for callables with mutable
//!    state that sibling cursors must observe jointly.
//!
//! The marker is an ordinary type parameter on [`Callable`], inferred from
//! whichever single impl is satisfiable for the callable/element pair. A
//! callable that fits none of the conventions is a compile-time error at the
//! combinator call site.

use core::cell::RefCell;
use std::rc::Rc;

/// A value with a statically known arity that can be destructured into its
/// fields, making it eligible for [`Spread`] dispatch.
pub trait TupleLike {
    /// The number of fields.
    const ARITY: usize;
}

/// Marker: call the callable with the element as its one argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

/// Marker: destructure the tuple-like element into separate arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spread;

/// Marker: [`Direct`] through a [`Shared`] wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedDirect;

/// Marker: [`Spread`] through a [`Shared`] wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedSpread;

/// A callable invocable with elements of type `Arg` under the convention
/// named by `Marker`.
///
/// The receiver is shared: adaptors hold their callable by value and call it
/// through `&self`, so plain callables must be `Fn`. Stateful callables opt
/// in to interior mutability with [`Shared`].
pub trait Callable<Marker, Arg> {
    /// What the call produces.
    type Output;

    /// Perform the call.
    fn call(&self, arg: Arg) -> Self::Output;
}

impl<F, A, O> Callable<Direct, A> for F
where
    F: Fn(A) -> O,
{
    type Output = O;

    #[inline]
    fn call(&self, arg: A) -> O {
        self(arg)
    }
}

/// Reference-semantics wrapper for a stateful callable.
///
/// Combinators copy their callable into every cursor they build, so a plain
/// callable's state diverges per copy. Wrapping in `Shared` makes every copy
/// act on the one underlying callable, which is the explicit opt-in the library
/// requires for shared mutable predicate or transform state.
#[derive(Debug, Default)]
pub struct Shared<F> {
    cell: Rc<RefCell<F>>,
}

impl<F> Shared<F> {
    /// Wrap `callable` for shared use.
    pub fn new(callable: F) -> Self {
        Self {
            cell: Rc::new(RefCell::new(callable)),
        }
    }

    /// Inspect the wrapped callable.
    ///
    /// # Panics
    ///
    /// Panics if called from inside the callable itself.
    pub fn with<R>(&self, f: impl FnOnce(&F) -> R) -> R {
        f(&self.cell.borrow())
    }

    /// Recover the callable, if this is the last handle to it.
    pub fn into_inner(self) -> Option<F> {
        Rc::try_unwrap(self.cell).ok().map(RefCell::into_inner)
    }
}

impl<F> Clone for Shared<F> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<F, A, O> Callable<SharedDirect, A> for Shared<F>
where
    F: FnMut(A) -> O,
{
    type Output = O;

    #[inline]
    fn call(&self, arg: A) -> O {
        (&mut *self.cell.borrow_mut())(arg)
    }
}

impl TupleLike for () {
    const ARITY: usize = 0;
}

macro_rules! count_fields {
    () => (0usize);
    ($head:ident $($tail:ident)*) => (1usize + count_fields!($($tail)*));
}

macro_rules! impl_spread {
    ($(($($field:ident),+))+) => {$(
        impl<$($field),+> TupleLike for ($($field,)+) {
            const ARITY: usize = count_fields!($($field)+);
        }

        impl<Func, Out, $($field),+> Callable<Spread, ($($field,)+)> for Func
        where
            ($($field,)+): TupleLike,
            Func: Fn($($field),+) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(non_snake_case)]
            fn call(&self, ($($field,)+): ($($field,)+)) -> Out {
                self($($field),+)
            }
        }

        impl<Func, Out, $($field),+> Callable<SharedSpread, ($($field,)+)> for Shared<Func>
        where
            ($($field,)+): TupleLike,
            Func: FnMut($($field),+) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(non_snake_case)]
            fn call(&self, ($($field,)+): ($($field,)+)) -> Out {
                (&mut *self.cell.borrow_mut())($($field),+)
            }
        }
    )+};
}

impl_spread! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
}
