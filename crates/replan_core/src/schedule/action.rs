//! Typed schedule events.

use std::fmt;

use crate::chain::Step;

/// A saved copy of a step's output, held in memory until deleted.
///
/// The index identifies the producing step; the external input is the
/// checkpoint of a pseudo-node one position before the first step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    index: i64,
    size: u64,
}

impl Checkpoint {
    /// Creates a checkpoint for the output of the step at `index`.
    #[inline]
    pub fn new(index: i64, size: u64) -> Self {
        Self { index, size }
    }

    /// Returns the index of the producing step.
    #[inline]
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Returns the memory units the checkpoint occupies while live.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// The kind of a schedule event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Execute a step's forward pass.
    Forward,
    /// Execute a step's backward pass.
    Backward,
    /// Save a step's output as a checkpoint.
    SaveCheckpoint,
    /// Reload a previously saved checkpoint.
    LoadCheckpoint,
    /// Release a previously saved checkpoint.
    DeleteCheckpoint,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Forward => "Forward",
            ActionKind::Backward => "Backward",
            ActionKind::SaveCheckpoint => "Save Checkpoint",
            ActionKind::LoadCheckpoint => "Load Checkpoint",
            ActionKind::DeleteCheckpoint => "Delete Checkpoint",
        };
        write!(f, "{}", name)
    }
}

/// One event in a schedule: a kind plus the step it concerns.
///
/// The action carries the scalars accounting needs: the step's compute
/// cost (charged by forward and backward passes) and its output size
/// (occupied while the step's checkpoint is live, and used to re-anchor
/// the split-boundary checkpoint when schedules are merged).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    kind: ActionKind,
    index: i64,
    compute_cost: u64,
    output_size: u64,
}

impl Action {
    /// Creates a forward pass of `step`.
    #[inline]
    pub fn forward(step: &Step) -> Self {
        Self {
            kind: ActionKind::Forward,
            index: step.index(),
            compute_cost: step.compute_cost(),
            output_size: step.output_size(),
        }
    }

    /// Creates a backward pass of `step`.
    #[inline]
    pub fn backward(step: &Step) -> Self {
        Self {
            kind: ActionKind::Backward,
            index: step.index(),
            compute_cost: step.compute_cost(),
            output_size: step.output_size(),
        }
    }

    /// Creates a save of `checkpoint`.
    #[inline]
    pub fn save(checkpoint: Checkpoint) -> Self {
        Self::checkpoint_op(ActionKind::SaveCheckpoint, checkpoint)
    }

    /// Creates a load of `checkpoint`.
    #[inline]
    pub fn load(checkpoint: Checkpoint) -> Self {
        Self::checkpoint_op(ActionKind::LoadCheckpoint, checkpoint)
    }

    /// Creates a delete of `checkpoint`.
    #[inline]
    pub fn delete(checkpoint: Checkpoint) -> Self {
        Self::checkpoint_op(ActionKind::DeleteCheckpoint, checkpoint)
    }

    fn checkpoint_op(kind: ActionKind, checkpoint: Checkpoint) -> Self {
        Self {
            kind,
            index: checkpoint.index(),
            compute_cost: 0,
            output_size: checkpoint.size(),
        }
    }

    /// Returns the event kind.
    #[inline]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns the index of the step the event concerns.
    #[inline]
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Returns the compute cost charged by this event.
    ///
    /// Forward and backward passes cost the step's compute cost;
    /// checkpoint operations are free.
    #[inline]
    pub fn cost(&self) -> u64 {
        match self.kind {
            ActionKind::Forward | ActionKind::Backward => self.compute_cost,
            _ => 0,
        }
    }

    /// Returns the memory units this event's checkpoint occupies.
    #[inline]
    pub fn memory(&self) -> u64 {
        self.output_size
    }

    /// Returns the checkpoint this event refers to.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.index, self.output_size)
    }

    /// Whether `other` repeats this event (same kind, same step).
    ///
    /// Repeated events are coalesced by the schedule rather than appended.
    #[inline]
    pub fn repeats(&self, other: &Action) -> bool {
        self.kind == other.kind && self.index == other.index
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Chain, StepSpec};

    fn sample_step() -> Step {
        let chain = Chain::new(vec![StepSpec::new(4, 8, 3)]).unwrap();
        chain.steps()[0]
    }

    #[test]
    fn test_forward_and_backward_charge_compute_cost() {
        let step = sample_step();
        assert_eq!(Action::forward(&step).cost(), 3);
        assert_eq!(Action::backward(&step).cost(), 3);
    }

    #[test]
    fn test_checkpoint_operations_are_free() {
        let step = sample_step();
        assert_eq!(Action::save(step.checkpoint()).cost(), 0);
        assert_eq!(Action::load(step.checkpoint()).cost(), 0);
        assert_eq!(Action::delete(step.checkpoint()).cost(), 0);
    }

    #[test]
    fn test_memory_is_output_size() {
        let step = sample_step();
        assert_eq!(Action::save(step.checkpoint()).memory(), 8);
        assert_eq!(Action::forward(&step).memory(), 8);
    }

    #[test]
    fn test_repeats_compares_kind_and_index_only() {
        let step = sample_step();
        let save = Action::save(step.checkpoint());
        let load = Action::load(step.checkpoint());
        assert!(save.repeats(&Action::save(step.checkpoint())));
        assert!(!save.repeats(&load));
    }

    #[test]
    fn test_display() {
        let step = sample_step();
        assert_eq!(format!("{}", Action::forward(&step)), "Forward (0)");
        assert_eq!(
            format!("{}", Action::save(step.checkpoint())),
            "Save Checkpoint (0)"
        );
    }
}
