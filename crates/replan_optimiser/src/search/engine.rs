//! The recursive search driver.

use replan_core::chain::Chain;
use replan_core::schedule::{MemoryBudget, Schedule, Solution};

use super::memo::MemoTable;
use crate::strategies::{checkpoint_everything, constant_memory, merge_with_checkpoint};

/// Recursive divide-and-conquer solver with memoisation.
///
/// For each sub-problem the solver first tries the whole-chain answers:
/// if every intermediate fits the budget the cost-minimal
/// [`checkpoint_everything`] schedule wins outright, and if even the
/// external input does not fit the sub-problem is infeasible. Otherwise
/// it ranks [`constant_memory`] against a merged candidate for every
/// interior split position, recursing on both halves — the left under
/// the same budget (its backward work is deferred past the split), the
/// right under the budget less the boundary checkpoint and the input
/// checkpoint that stay live across it.
///
/// Candidates whose peak memory the budget does not admit are demoted to
/// infeasible, and ties break towards the earliest candidate in
/// enumeration order: constant-memory first, then increasing split
/// position. Results are deterministic for identical inputs.
///
/// # Examples
///
/// ```
/// use replan_core::chain::{Chain, StepSpec};
/// use replan_core::schedule::MemoryBudget;
/// use replan_optimiser::search::Solver;
///
/// let chain = Chain::new(vec![StepSpec::new(10, 10, 1); 3]).unwrap();
/// let mut solver = Solver::new();
///
/// let solution = solver.solve(&chain, MemoryBudget::new(31));
/// assert!(solution.is_feasible());
/// assert!(!solver.solve(&chain, MemoryBudget::new(5)).is_feasible());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    memo: MemoTable,
}

impl Solver {
    /// Creates a solver with an empty memo table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memo table for inspection.
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Computes the cheapest admissible schedule for `chain` under
    /// `budget`.
    ///
    /// Returns [`Solution::Infeasible`] when no schedule's peak memory
    /// stays strictly below the budget.
    ///
    /// # Panics
    ///
    /// Panics if a strategy ever produces a feasible schedule whose peak
    /// memory breaches the budget; that is a solver bug, not an input
    /// condition.
    pub fn solve(&mut self, chain: &Chain, budget: MemoryBudget) -> Solution {
        if let Some(cached) = self.memo.lookup(chain, budget) {
            return cached;
        }
        let solution = self.search(chain, budget);
        if let Solution::Feasible(schedule) = &solution {
            assert!(
                budget.admits(schedule.peak_memory()),
                "Schedule peak memory {} breaches budget {}",
                schedule.peak_memory(),
                budget
            );
        }
        self.memo.store(chain, budget, &solution);
        solution
    }

    fn search(&mut self, chain: &Chain, budget: MemoryBudget) -> Solution {
        if budget.admits(chain.total_memory_cost()) {
            return Solution::Feasible(checkpoint_everything(chain));
        }
        if budget.units() < chain.input_size() {
            return Solution::Infeasible;
        }
        let mut best = admit(constant_memory(chain), budget);
        for position in 1..chain.length() {
            let candidate = self.split_candidate(chain, budget, position);
            if candidate.cost() < best.cost() {
                best = candidate;
            }
        }
        best
    }

    /// Evaluates the candidate that checkpoints at `position`.
    fn split_candidate(
        &mut self,
        chain: &Chain,
        budget: MemoryBudget,
        position: usize,
    ) -> Solution {
        let (left, right) = chain.split(position);
        let left_solution = self.solve(&left, budget);
        // The boundary checkpoint and the input checkpoint stay live for
        // the whole right sub-schedule.
        let reserved = chain.memory_cost(&[position]) + chain.input_size();
        let right_solution = match budget.reserve(reserved) {
            Some(reduced) => self.solve(&right, reduced),
            None => Solution::Infeasible,
        };
        let left_schedule = match left_solution.schedule() {
            Some(schedule) => schedule,
            None => return Solution::Infeasible,
        };
        match merge_with_checkpoint(left_schedule, &right_solution) {
            Solution::Feasible(merged) => admit(merged, budget),
            Solution::Infeasible => Solution::Infeasible,
        }
    }
}

/// Demotes a schedule the budget does not admit.
fn admit(schedule: Schedule, budget: MemoryBudget) -> Solution {
    if budget.admits(schedule.peak_memory()) {
        Solution::Feasible(schedule)
    } else {
        Solution::Infeasible
    }
}

/// Solves `chain` under `budget` with a fresh [`Solver`].
pub fn solve(chain: &Chain, budget: MemoryBudget) -> Solution {
    Solver::new().solve(chain, budget)
}

/// Solves `chain` under `budget`, fanning the top-level split candidates
/// across threads.
///
/// The candidates of a single level are mutually independent, so each
/// split position is evaluated on its own rayon task with a private
/// solver. The selection matches [`solve`] exactly, including the
/// tie-break towards earlier candidates.
#[cfg(feature = "parallel")]
pub fn solve_parallel(chain: &Chain, budget: MemoryBudget) -> Solution {
    use rayon::prelude::*;

    if budget.admits(chain.total_memory_cost()) {
        return Solution::Feasible(checkpoint_everything(chain));
    }
    if budget.units() < chain.input_size() {
        return Solution::Infeasible;
    }
    let baseline = admit(constant_memory(chain), budget);
    let candidates: Vec<Solution> = (1..chain.length())
        .into_par_iter()
        .map(|position| Solver::new().split_candidate(chain, budget, position))
        .collect();
    candidates.into_iter().fold(baseline, |best, candidate| {
        if candidate.cost() < best.cost() {
            candidate
        } else {
            best
        }
    })
}
