//! The append-only, validated schedule.

use std::collections::HashMap;
use std::fmt;

use super::action::{Action, ActionKind, Checkpoint};
use crate::chain::Step;

/// Per-index checkpoint bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CheckpointState {
    saves: u32,
    deletes: u32,
}

impl CheckpointState {
    /// A checkpoint is usable when it was saved exactly once and the save
    /// has not been released.
    #[inline]
    fn is_live(&self) -> bool {
        self.saves == 1 && self.deletes == 0
    }
}

/// An ordered sequence of actions realising one forward+backward run.
///
/// Append is the only mutator, and each attempted append is checked
/// against the full history; an illegal append is a bug in the strategy
/// composing the schedule, and panics. Two appends are dropped silently
/// rather than rejected: an action that repeats the immediately preceding
/// action (same kind and step), and a checkpoint save immediately after a
/// load of the same checkpoint (the value is already in memory). Both
/// situations arise routinely when sub-schedules are spliced together.
///
/// Cost and peak checkpoint memory are maintained incrementally: every
/// forward or backward pass charges its step's compute cost, a save adds
/// its checkpoint's size to the live total (refreshing the peak), and a
/// delete releases it.
///
/// # Examples
///
/// ```
/// use replan_core::chain::{Chain, StepSpec};
/// use replan_core::schedule::Schedule;
///
/// let chain = Chain::new(vec![StepSpec::new(10, 10, 2)]).unwrap();
/// let step = &chain.steps()[0];
///
/// let mut schedule = Schedule::new();
/// schedule.push_forward(step);
/// schedule.push_save(step.checkpoint());
/// schedule.push_load(step.checkpoint());
/// schedule.push_backward(step);
///
/// assert_eq!(schedule.cost(), 4);
/// assert_eq!(schedule.peak_memory(), 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    actions: Vec<Action>,
    cost: u64,
    live_memory: u64,
    peak_memory: u64,
    checkpoints: HashMap<i64, CheckpointState>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a forward pass of `step`.
    ///
    /// # Panics
    ///
    /// Panics unless the history is empty or the previous action concerns
    /// the step one position earlier (a forward, a load, or a boundary
    /// save all qualify).
    pub fn push_forward(&mut self, step: &Step) {
        self.push(Action::forward(step));
    }

    /// Appends a backward pass of `step`.
    ///
    /// # Panics
    ///
    /// Panics unless the previous action is the step's own forward pass,
    /// or the step's checkpoint is live.
    pub fn push_backward(&mut self, step: &Step) {
        self.push(Action::backward(step));
    }

    /// Appends a save of `checkpoint`.
    ///
    /// # Panics
    ///
    /// Panics unless the history is empty or the previous action is a
    /// forward pass. The previous action's index is deliberately not
    /// compared to the checkpoint's.
    pub fn push_save(&mut self, checkpoint: Checkpoint) {
        self.push(Action::save(checkpoint));
    }

    /// Appends a load of `checkpoint`.
    ///
    /// # Panics
    ///
    /// Panics unless the checkpoint is live.
    pub fn push_load(&mut self, checkpoint: Checkpoint) {
        self.push(Action::load(checkpoint));
    }

    /// Appends a delete of `checkpoint`.
    ///
    /// # Panics
    ///
    /// Panics unless the checkpoint is live.
    pub fn push_delete(&mut self, checkpoint: Checkpoint) {
        self.push(Action::delete(checkpoint));
    }

    /// Appends an action, validating it against the full history.
    ///
    /// This is the single entry point for all appends; the typed `push_*`
    /// methods and schedule merging both funnel through it.
    ///
    /// # Panics
    ///
    /// Panics if the action violates the legality rules listed on the
    /// typed `push_*` methods.
    pub fn push(&mut self, action: Action) {
        if let Some(last) = self.actions.last() {
            if last.repeats(&action) {
                return;
            }
        }
        match action.kind() {
            ActionKind::Forward => {
                if let Some(last) = self.actions.last() {
                    assert!(
                        last.index() == action.index() - 1,
                        "Forward of step {} cannot follow an action on step {}",
                        action.index(),
                        last.index()
                    );
                }
            }
            ActionKind::Backward => {
                let after_own_forward = self.actions.last().is_some_and(|last| {
                    last.kind() == ActionKind::Forward && last.index() == action.index()
                });
                assert!(
                    after_own_forward || self.checkpoint_state(action.index()).is_live(),
                    "Backward of step {} needs its forward pass or a live checkpoint",
                    action.index()
                );
            }
            ActionKind::SaveCheckpoint => {
                if let Some(last) = self.actions.last() {
                    if last.kind() == ActionKind::LoadCheckpoint && last.index() == action.index()
                    {
                        // Value is already in memory; nothing to save.
                        return;
                    }
                    assert!(
                        last.kind() == ActionKind::Forward,
                        "Save of checkpoint {} must follow a forward pass, not {}",
                        action.index(),
                        last
                    );
                }
            }
            ActionKind::LoadCheckpoint => {
                assert!(
                    self.checkpoint_state(action.index()).is_live(),
                    "Load of checkpoint {} without a live save",
                    action.index()
                );
            }
            ActionKind::DeleteCheckpoint => {
                assert!(
                    self.checkpoint_state(action.index()).is_live(),
                    "Delete of checkpoint {} without a live save",
                    action.index()
                );
            }
        }

        self.cost += action.cost();
        match action.kind() {
            ActionKind::SaveCheckpoint => {
                self.live_memory += action.memory();
                self.checkpoints.entry(action.index()).or_default().saves += 1;
                if self.live_memory > self.peak_memory {
                    self.peak_memory = self.live_memory;
                }
            }
            ActionKind::DeleteCheckpoint => {
                self.live_memory -= action.memory();
                self.checkpoints.entry(action.index()).or_default().deletes += 1;
            }
            _ => {}
        }
        self.actions.push(action);
    }

    fn checkpoint_state(&self, index: i64) -> CheckpointState {
        self.checkpoints.get(&index).copied().unwrap_or_default()
    }

    /// Returns the actions in append order.
    #[inline]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the number of actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether the schedule holds no actions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the total compute cost of the schedule.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns the maximum checkpoint memory held at any point.
    #[inline]
    pub fn peak_memory(&self) -> u64 {
        self.peak_memory
    }

    /// Splits the action log at the first backward pass.
    ///
    /// The first slice covers the pure forward phase, the second begins
    /// with the first backward action.
    ///
    /// # Panics
    ///
    /// Panics if the schedule contains no backward action; only full
    /// forward+backward schedules can be split.
    pub fn split_forward_backward(&self) -> (&[Action], &[Action]) {
        let position = self
            .actions
            .iter()
            .position(|action| action.kind() == ActionKind::Backward)
            .expect("Schedule has no backward action to split at");
        self.actions.split_at(position)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.actions.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", rendered.join("-->"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Chain, StepSpec};

    fn chain(length: usize) -> Chain {
        Chain::new(vec![StepSpec::new(10, 10, 1); length]).unwrap()
    }

    // ========================================================================
    // Forward Legality Tests
    // ========================================================================

    #[test]
    fn test_forward_opens_a_schedule() {
        let chain = chain(2);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_forward_follows_previous_position() {
        let chain = chain(2);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_forward(&chain.steps()[1]);
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_forward_follows_load_of_previous_position() {
        let chain = chain(2);
        let mut schedule = Schedule::new();
        schedule.push_save(chain.input_checkpoint());
        schedule.push_load(chain.input_checkpoint());
        schedule.push_forward(&chain.steps()[0]);
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    #[should_panic(expected = "cannot follow")]
    fn test_forward_rejects_position_gap() {
        let chain = chain(3);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_forward(&chain.steps()[2]);
    }

    // ========================================================================
    // Backward Legality Tests
    // ========================================================================

    #[test]
    fn test_backward_follows_own_forward() {
        let chain = chain(1);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_backward(&chain.steps()[0]);
        assert_eq!(schedule.cost(), 2);
    }

    #[test]
    fn test_backward_from_live_checkpoint() {
        let chain = chain(2);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_save(step.checkpoint());
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_backward(&chain.steps()[1]);
        schedule.push_backward(step);
        assert_eq!(schedule.len(), 5);
    }

    #[test]
    #[should_panic(expected = "needs its forward pass or a live checkpoint")]
    fn test_backward_cannot_open_a_schedule() {
        let chain = chain(1);
        let mut schedule = Schedule::new();
        schedule.push_backward(&chain.steps()[0]);
    }

    #[test]
    #[should_panic(expected = "needs its forward pass or a live checkpoint")]
    fn test_backward_rejects_deleted_checkpoint() {
        let chain = chain(2);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_save(step.checkpoint());
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_backward(&chain.steps()[1]);
        schedule.push_delete(step.checkpoint());
        schedule.push_backward(step);
    }

    // ========================================================================
    // Save Legality Tests
    // ========================================================================

    #[test]
    fn test_save_opens_a_schedule() {
        let chain = chain(1);
        let mut schedule = Schedule::new();
        schedule.push_save(chain.input_checkpoint());
        assert_eq!(schedule.peak_memory(), 10);
    }

    #[test]
    fn test_save_after_unrelated_forward_is_accepted() {
        // The rule checks only the previous action's kind, not its
        // index; see DESIGN.md.
        let chain = chain(3);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_save(chain.steps()[0].checkpoint());
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_save_after_own_load_is_dropped() {
        let chain = chain(1);
        let input = chain.input_checkpoint();
        let mut schedule = Schedule::new();
        schedule.push_save(input);
        schedule.push_load(input);
        schedule.push_save(input);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.peak_memory(), 10);
    }

    #[test]
    #[should_panic(expected = "must follow a forward pass")]
    fn test_save_rejects_non_forward_predecessor() {
        let chain = chain(1);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_backward(step);
        schedule.push_save(step.checkpoint());
    }

    // ========================================================================
    // Load and Delete Legality Tests
    // ========================================================================

    #[test]
    #[should_panic(expected = "Load of checkpoint 0 without a live save")]
    fn test_load_rejects_missing_save() {
        let chain = chain(1);
        let mut schedule = Schedule::new();
        schedule.push_load(chain.steps()[0].checkpoint());
    }

    #[test]
    #[should_panic(expected = "without a live save")]
    fn test_load_rejects_deleted_checkpoint() {
        let chain = chain(1);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_save(step.checkpoint());
        schedule.push_delete(step.checkpoint());
        schedule.push_load(step.checkpoint());
    }

    #[test]
    #[should_panic(expected = "Delete of checkpoint 0 without a live save")]
    fn test_double_delete_is_rejected() {
        // A release needs the save to still be live; see DESIGN.md.
        let chain = chain(2);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_save(step.checkpoint());
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_delete(step.checkpoint());
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_delete(step.checkpoint());
    }

    // ========================================================================
    // Coalescing Tests
    // ========================================================================

    #[test]
    fn test_repeated_action_is_coalesced() {
        let chain = chain(1);
        let input = chain.input_checkpoint();
        let mut schedule = Schedule::new();
        schedule.push_save(input);
        schedule.push_save(input);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.peak_memory(), 10);
    }

    // ========================================================================
    // Accounting Tests
    // ========================================================================

    #[test]
    fn test_cost_sums_forward_and_backward_only() {
        let chain = chain(2);
        let mut schedule = Schedule::new();
        schedule.push_save(chain.input_checkpoint());
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_save(chain.steps()[0].checkpoint());
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_backward(&chain.steps()[1]);
        assert_eq!(schedule.cost(), 3);
    }

    #[test]
    fn test_peak_memory_tracks_overlapping_checkpoints() {
        let chain = chain(2);
        let mut schedule = Schedule::new();
        schedule.push_save(chain.input_checkpoint());
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_save(chain.steps()[0].checkpoint());
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_backward(&chain.steps()[1]);
        schedule.push_backward(&chain.steps()[0]);
        schedule.push_delete(chain.steps()[0].checkpoint());
        assert_eq!(schedule.peak_memory(), 20);
    }

    #[test]
    fn test_peak_memory_survives_deletes() {
        let chain = chain(1);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_save(step.checkpoint());
        schedule.push_delete(step.checkpoint());
        assert_eq!(schedule.peak_memory(), 10);
    }

    // ========================================================================
    // Split and Display Tests
    // ========================================================================

    #[test]
    fn test_split_forward_backward() {
        let chain = chain(2);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        schedule.push_forward(&chain.steps()[1]);
        schedule.push_backward(&chain.steps()[1]);
        let (forward, backward) = schedule.split_forward_backward();
        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].kind(), ActionKind::Backward);
    }

    #[test]
    #[should_panic(expected = "no backward action")]
    fn test_split_forward_backward_requires_backward() {
        let chain = chain(1);
        let mut schedule = Schedule::new();
        schedule.push_forward(&chain.steps()[0]);
        schedule.split_forward_backward();
    }

    #[test]
    fn test_display_joins_actions_with_arrows() {
        let chain = chain(1);
        let step = &chain.steps()[0];
        let mut schedule = Schedule::new();
        schedule.push_forward(step);
        schedule.push_backward(step);
        assert_eq!(format!("{}", schedule), "Forward (0)-->Backward (0)");
    }
}
