//! Splicing sub-schedules across a split boundary.

use replan_core::schedule::{ActionKind, Schedule, Solution};

/// Splices a left sub-chain schedule with a right sub-chain solution.
///
/// The left schedule is split at its first backward pass. Its forward
/// phase is replayed first; if that phase ends in a forward pass, the
/// finishing step's output is saved as the boundary checkpoint (when it
/// ends in a load instead, the boundary value is already checkpointed).
/// The right solution's actions are then replayed in full — its leading
/// input save refers to the same boundary value and is dropped by the
/// schedule's coalescing rules — followed by a reload of the boundary
/// checkpoint and the left schedule's deferred backward phase.
///
/// The boundary checkpoint stays live for the entire right sub-schedule,
/// which the merged schedule's peak-memory accounting reflects.
///
/// Returns [`Solution::Infeasible`] immediately when the right solution
/// is infeasible.
///
/// # Panics
///
/// Panics if the left schedule has no backward pass, or if either input
/// replays into an illegal sequence; both indicate a bug in the search
/// composing the schedules.
pub fn merge_with_checkpoint(left: &Schedule, right: &Solution) -> Solution {
    let right = match right.schedule() {
        Some(schedule) => schedule,
        None => return Solution::Infeasible,
    };

    let (forward_part, backward_part) = left.split_forward_backward();
    let mut merged = Schedule::new();
    for action in forward_part {
        merged.push(*action);
    }
    if let Some(last) = forward_part.last() {
        if last.kind() == ActionKind::Forward {
            merged.push_save(last.checkpoint());
        }
    }
    for action in right.actions() {
        merged.push(*action);
    }
    merged.push_load(backward_part[0].checkpoint());
    for action in backward_part {
        merged.push(*action);
    }
    Solution::Feasible(merged)
}
