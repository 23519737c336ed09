//! The no-recompute strategy.

use replan_core::chain::Chain;
use replan_core::schedule::Schedule;

/// Builds the cost-minimal schedule: checkpoint every intermediate.
///
/// Saves the external input, runs every step forward saving a checkpoint
/// after each, then runs every step backward in reverse order, loading
/// and releasing its own checkpoint immediately before executing. Cost
/// equals [`Chain::total_compute_cost`]; peak memory equals
/// [`Chain::total_memory_cost`], so this is only admissible when the
/// whole chain fits in the budget.
///
/// # Examples
///
/// ```
/// use replan_core::chain::{Chain, StepSpec};
/// use replan_optimiser::strategies::checkpoint_everything;
///
/// let chain = Chain::new(vec![StepSpec::new(10, 10, 1); 3]).unwrap();
/// let schedule = checkpoint_everything(&chain);
///
/// assert_eq!(schedule.cost(), 6);
/// assert_eq!(schedule.peak_memory(), 40);
/// ```
pub fn checkpoint_everything(chain: &Chain) -> Schedule {
    let mut schedule = Schedule::new();
    schedule.push_save(chain.input_checkpoint());
    for step in chain.steps() {
        schedule.push_forward(step);
        schedule.push_save(step.checkpoint());
    }
    for step in chain.steps().iter().rev() {
        schedule.push_load(step.checkpoint());
        schedule.push_backward(step);
        schedule.push_delete(step.checkpoint());
    }
    schedule
}
