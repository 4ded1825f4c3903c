//! Compile-time selection between checked and unchecked cursors.
//!
//! Source cursors take a [`CheckPolicy`] type parameter. With [`Checked`]
//! every primitive validates its bounds and signals a
//! [`BoundsError`](crate::error::BoundsError) on violation; with [`Unchecked`]
//! the validation is guarded by a `false` constant and compiles away entirely,
//! leaving violations as ordinary logic errors (wrong results or index
//! panics). Adaptor cursors delegate bounds decisions to their source, so the
//! policy chosen at range construction propagates through a whole pipeline.

mod private {
    pub trait Sealed {}
    impl Sealed for super::Checked {}
    impl Sealed for super::Unchecked {}
}

/// Whether source cursors validate their bounds.
///
/// Sealed: the only policies are [`Checked`] and [`Unchecked`], so generic
/// code may rely on `ENABLED` being a compile-time constant.
pub trait CheckPolicy: private::Sealed + Copy + Default + 'static {
    /// True when bounds validation is compiled in.
    const ENABLED: bool;
}

/// Validate every primitive; violations surface as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checked;

impl CheckPolicy for Checked {
    const ENABLED: bool = true;
}

/// Skip all validation; violations are logic errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchecked;

impl CheckPolicy for Unchecked {
    const ENABLED: bool = false;
}
