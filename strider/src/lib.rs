//! # Strider - Lazy Range Pipelines over Capability-Tiered Cursors
//!
//! Strider is a lazy range adaptor library for Rust. Containers, generated
//! number sequences, and plain iterators are borrowed as *ranges*; ranges are
//! composed with `map`, `filter`, `enumerate`, `zip`, and `rev` without
//! visiting a single element; and elements flow only when a pipeline is
//! driven by a `for` loop or drained with `collect`.
//!
//! ## Features
//!
//! - **Lazy composition**: Combinators wrap cursor pairs; nothing runs early
//! - **Capability tiers**: Input, forward, bidirectional, and random-access
//!   cursors, with each adaptor preserving as much capability as it can
//! - **Dual dispatch**: Callables may take the element or, for tuple
//!   elements, the destructured fields
//! - **Checked by default**: Out-of-bounds movement and cross-range
//!   comparison signal errors; an `Unchecked` twin of every entry point
//!   skips the validation
//! - **Value counting**: Integral and floating-point ranges with arbitrary
//!   strides and exact termination
//!
//! ```
//! use strider::prelude::*;
//!
//! let data = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let result: Vec<i32> = adapt(&data)
//!     .filter(|x: &i32| x % 2 == 0)
//!     .map(|x: &i32| x * 10)
//!     .collect();
//! assert_eq!(result, vec![20, 40, 60, 80]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use strider_core::cursor::{
    BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor,
};
pub use strider_core::dispatch::{Callable, Direct, Shared, Spread, TupleLike};
pub use strider_core::drive::Drive;
pub use strider_core::error::{BoundsError, BoundsErrorKind, CursorOp, CursorResult};
pub use strider_core::policy::{CheckPolicy, Checked, Unchecked};
pub use strider_core::tier::Tier;

pub use strider_iter::{
    adapt, adapt_iter, between, enumerate, fast, filter, map, range, range_by, range_to, reverse,
    zip, zip3, zip4, AsShared, ConstCursor, CountCursor, CursorTuple, EnumCursor, FilterCursor,
    IntoRange, IterCursor, MapCursor, Range, RevCursor, SliceCursor, Stride, ZipCursor,
};

/// The traits and entry points most pipelines need, importable in one line.
pub mod prelude {
    pub use strider_core::cursor::{
        BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor,
    };
    pub use strider_core::dispatch::Shared;
    pub use strider_core::tier::Tier;
    pub use strider_iter::{
        adapt, adapt_iter, between, range, range_by, range_to, zip, zip3, zip4, IntoRange, Range,
    };
}
