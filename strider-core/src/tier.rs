//! The capability-tier lattice for cursors.
//!
//! Every cursor type declares the strongest tier it supports; adaptors compute
//! theirs as the meet (minimum) of their own requirement and the tier of the
//! cursor they wrap. Which operations actually exist on a type is decided by
//! trait bounds, not by this value; the declared tier is the queryable mirror
//! of those bounds.

use core::fmt;

/// A cursor's capability class, totally ordered by what it can do.
///
/// `RandomAccess` ⊇ `Bidirectional` ⊇ `Forward` ⊇ `Input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Single-pass traversal: advance and dereference only.
    Input = 0,
    /// Multi-pass traversal: positions may be saved and revisited.
    Forward = 1,
    /// Adds stepping backwards.
    Bidirectional = 2,
    /// Adds constant-time arithmetic stepping, distance, and ordering.
    RandomAccess = 3,
}

impl Tier {
    /// The meet (minimum) of two tiers on the capability lattice.
    ///
    /// An adaptor over a source of tier `s` with an intrinsic cap of `c` is
    /// exactly `s.meet(c)`: a filter over a random-access source is
    /// `RandomAccess.meet(Bidirectional) == Bidirectional`.
    #[must_use]
    pub const fn meet(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Whether this tier offers at least the capabilities of `required`.
    #[must_use]
    pub const fn supports(self, required: Self) -> bool {
        (self as u8) >= (required as u8)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Forward => write!(f, "forward"),
            Self::Bidirectional => write!(f, "bidirectional"),
            Self::RandomAccess => write!(f, "random access"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meet_is_minimum() {
        assert_eq!(Tier::RandomAccess.meet(Tier::Bidirectional), Tier::Bidirectional);
        assert_eq!(Tier::Input.meet(Tier::RandomAccess), Tier::Input);
        assert_eq!(Tier::Forward.meet(Tier::Forward), Tier::Forward);
    }

    #[test]
    fn meet_is_commutative_and_idempotent() {
        let tiers = [Tier::Input, Tier::Forward, Tier::Bidirectional, Tier::RandomAccess];
        for &a in &tiers {
            assert_eq!(a.meet(a), a);
            for &b in &tiers {
                assert_eq!(a.meet(b), b.meet(a));
            }
        }
    }

    #[test]
    fn support_follows_the_order() {
        assert!(Tier::RandomAccess.supports(Tier::Input));
        assert!(Tier::Bidirectional.supports(Tier::Forward));
        assert!(!Tier::Forward.supports(Tier::Bidirectional));
        assert!(!Tier::Input.supports(Tier::Forward));
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", Tier::RandomAccess), "random access");
        assert_eq!(format!("{}", Tier::Input), "input");
    }
}
