//! Error types for bounds-checked cursor operations.
//!
//! Every violation a checked cursor can signal is a contract violation on the
//! caller's side: stepping outside `[first, last]`, dereferencing at the end
//! bound, or relating two cursors that were not produced from the same range.
//! These are surfaced to the caller as-is; there is no recovery path.

use core::fmt;

/// The class of bounds violation a checked cursor detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsErrorKind {
    /// Advanced a cursor already sitting at the end bound.
    StepPastEnd,
    /// Retreated a cursor already sitting at the first bound.
    StepBeforeStart,
    /// An arithmetic seek would land outside `[first, last]`.
    OutOfRange,
    /// Dereferenced a cursor sitting at the end bound.
    DerefAtEnd,
    /// Related two cursors that do not share the same bounds.
    BoundsMismatch,
}

impl fmt::Display for BoundsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepPastEnd => write!(f, "stepped past the end bound"),
            Self::StepBeforeStart => write!(f, "stepped before the first bound"),
            Self::OutOfRange => write!(f, "seek target outside the range"),
            Self::DerefAtEnd => write!(f, "dereferenced the end bound"),
            Self::BoundsMismatch => write!(f, "cursors have mismatched bounds"),
        }
    }
}

/// The cursor primitive that detected the violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOp {
    /// Single forward step.
    Advance,
    /// Single backward step.
    Retreat,
    /// Arithmetic step by a signed count.
    Seek,
    /// Dereference of the current position.
    Deref,
    /// Signed distance between two cursors.
    Distance,
    /// Position equality or ordering between two cursors.
    Compare,
}

impl fmt::Display for CursorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advance => write!(f, "advance"),
            Self::Retreat => write!(f, "retreat"),
            Self::Seek => write!(f, "seek"),
            Self::Deref => write!(f, "deref"),
            Self::Distance => write!(f, "distance"),
            Self::Compare => write!(f, "compare"),
        }
    }
}

/// A bounds violation, tagged with the operation that detected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    kind: BoundsErrorKind,
    op: CursorOp,
}

impl BoundsError {
    /// Create an error for `op` having detected `kind`.
    #[must_use]
    pub const fn new(kind: BoundsErrorKind, op: CursorOp) -> Self {
        Self { kind, op }
    }

    /// The class of violation.
    #[must_use]
    pub const fn kind(self) -> BoundsErrorKind {
        self.kind
    }

    /// The operation that detected it.
    #[must_use]
    pub const fn op(self) -> CursorOp {
        self.op
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.op, self.kind)
    }
}

impl std::error::Error for BoundsError {}

/// A result type for checked cursor operations.
pub type CursorResult<T> = Result<T, BoundsError>;
