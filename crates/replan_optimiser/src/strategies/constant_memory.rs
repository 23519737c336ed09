//! The minimal-memory fallback strategy.

use replan_core::chain::Chain;
use replan_core::schedule::Schedule;

/// Builds the maximal-recompute schedule: only the input is checkpointed.
///
/// For each backward step, the input checkpoint is reloaded and the
/// forward pass is re-run up to the boundary not yet processed, after
/// which the one newly reachable backward step executes. Total forward
/// work is triangular (O(n²) in chain length), but peak memory is the
/// input checkpoint alone, making this schedule a valid candidate
/// whenever the input itself fits the budget. It also serves as the
/// terminal case for the smallest sub-chains during the search.
///
/// # Examples
///
/// ```
/// use replan_core::chain::{Chain, StepSpec};
/// use replan_optimiser::strategies::constant_memory;
///
/// let chain = Chain::new(vec![StepSpec::new(10, 10, 1); 3]).unwrap();
/// let schedule = constant_memory(&chain);
///
/// // Forward passes 3 + 2 + 1, backward passes 3.
/// assert_eq!(schedule.cost(), 9);
/// assert_eq!(schedule.peak_memory(), 10);
/// ```
pub fn constant_memory(chain: &Chain) -> Schedule {
    let mut schedule = Schedule::new();
    let input = chain.input_checkpoint();
    schedule.push_save(input);
    for processed in 0..chain.length() {
        schedule.push_load(input);
        let boundary = chain.length() - processed;
        for step in &chain.steps()[..boundary] {
            schedule.push_forward(step);
        }
        schedule.push_backward(&chain.steps()[boundary - 1]);
    }
    schedule
}
