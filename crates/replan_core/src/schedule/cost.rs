//! Total ordering of schedule costs.

use std::fmt;

/// The compute cost a solution is ranked by.
///
/// Infeasibility is an explicit marker that compares greater than every
/// finite cost, so minimum-selection discards infeasible candidates
/// without any sentinel arithmetic.
///
/// # Examples
///
/// ```
/// use replan_core::schedule::Cost;
///
/// assert!(Cost::Finite(3) < Cost::Finite(7));
/// assert!(Cost::Finite(u64::MAX) < Cost::Unbounded);
/// assert_eq!(Cost::Unbounded, Cost::Unbounded);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    /// Cost of a feasible schedule.
    Finite(u64),
    /// Larger than every finite cost; the rank of an infeasible result.
    Unbounded,
}

impl Cost {
    /// Returns the finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<u64> {
        match self {
            Cost::Finite(value) => Some(value),
            Cost::Unbounded => None,
        }
    }

    /// Returns whether the cost is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(value) => write!(f, "{}", value),
            Cost::Unbounded => write!(f, "unbounded"),
        }
    }
}
