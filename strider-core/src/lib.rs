//! # Strider Core
//!
//! Core abstractions for the Strider lazy range library: the capability-tier
//! lattice, the cursor primitive traits, the drive skeleton that synthesizes a
//! full iterator surface from those primitives, and the invoke/apply call
//! dispatch used by the mapping and filtering adaptors.
//!
//! ## Design Principles
//!
//! - **Zero-cost abstractions**: Tier selection and bounds-check policy are
//!   resolved at compile time; nothing is branched on at runtime.
//! - **Minimal primitives**: A concrete cursor implements only `advance`,
//!   `get`, `matches`, and whatever its tier adds; everything else is
//!   synthesized.
//! - **Value semantics**: Cursors and their callables are plain values; shared
//!   mutable state is an explicit opt-in via [`dispatch::Shared`].

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod dispatch;
pub mod drive;
pub mod error;
pub mod policy;
pub mod tier;

pub use cursor::{BidirectionalCursor, Bounds, Cursor, ForwardCursor, RandomAccessCursor};
pub use dispatch::{Callable, Direct, Shared, SharedDirect, SharedSpread, Spread, TupleLike};
pub use drive::Drive;
pub use error::{BoundsError, BoundsErrorKind, CursorOp, CursorResult};
pub use policy::{CheckPolicy, Checked, Unchecked};
pub use tier::Tier;
