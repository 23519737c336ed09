//! Feasible/infeasible solver results.

use std::fmt;

use super::cost::Cost;
use super::schedule::Schedule;

/// The outcome of solving a chain under a memory budget.
///
/// Infeasibility is a first-class, expected result, not an error: it
/// participates in cost comparisons through [`Cost::Unbounded`] so that
/// minimum-selection only ever picks it when nothing feasible exists.
/// Callers must check feasibility before presenting a solution as a
/// usable schedule.
///
/// # Examples
///
/// ```
/// use replan_core::schedule::{Cost, Solution};
///
/// let nothing = Solution::Infeasible;
/// assert!(!nothing.is_feasible());
/// assert_eq!(nothing.cost(), Cost::Unbounded);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// A schedule that fits the budget.
    Feasible(Schedule),
    /// No schedule fits the budget.
    Infeasible,
}

impl Solution {
    /// Returns the cost the solution is ranked by.
    #[inline]
    pub fn cost(&self) -> Cost {
        match self {
            Solution::Feasible(schedule) => Cost::Finite(schedule.cost()),
            Solution::Infeasible => Cost::Unbounded,
        }
    }

    /// Returns whether the solution carries a schedule.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Solution::Feasible(_))
    }

    /// Returns the schedule, if the solution is feasible.
    #[inline]
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            Solution::Feasible(schedule) => Some(schedule),
            Solution::Infeasible => None,
        }
    }

    /// Consumes the solution, returning the schedule if feasible.
    #[inline]
    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            Solution::Feasible(schedule) => Some(schedule),
            Solution::Infeasible => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Feasible(schedule) => write!(f, "{}", schedule),
            Solution::Infeasible => write!(f, "(infeasible schedule)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Chain, StepSpec};

    fn trivial_schedule() -> Schedule {
        let chain = Chain::new(vec![StepSpec::new(10, 10, 3)]).unwrap();
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_backward(step);
        schedule
    }

    #[test]
    fn test_feasible_cost_is_schedule_cost() {
        let solution = Solution::Feasible(trivial_schedule());
        assert_eq!(solution.cost(), Cost::Finite(6));
    }

    #[test]
    fn test_infeasible_ranks_after_any_feasible() {
        let feasible = Solution::Feasible(trivial_schedule());
        assert!(feasible.cost() < Solution::Infeasible.cost());
    }

    #[test]
    fn test_schedule_accessors() {
        let solution = Solution::Feasible(trivial_schedule());
        assert!(solution.schedule().is_some());
        assert!(Solution::Infeasible.schedule().is_none());
        assert!(solution.into_schedule().is_some());
    }

    #[test]
    fn test_infeasible_display() {
        assert_eq!(format!("{}", Solution::Infeasible), "(infeasible schedule)");
    }
}
