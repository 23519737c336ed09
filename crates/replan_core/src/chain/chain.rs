//! Chain construction, derived costs, and splitting.

use std::fmt;

use super::error::ChainError;
use super::step::{Step, StepSpec};
use crate::schedule::Checkpoint;

/// An ordered, immutable sequence of computation steps.
///
/// The chain models one forward pass and its corresponding backward pass:
/// every step runs once in each direction. Besides the steps themselves,
/// the chain knows about the externally supplied input, represented as a
/// pseudo-node sitting one position before the first step whose "output"
/// is the input value itself.
///
/// # Examples
///
/// ```
/// use replan_core::chain::{Chain, StepSpec};
///
/// let chain = Chain::new(vec![
///     StepSpec::new(10, 10, 1),
///     StepSpec::new(10, 10, 1),
///     StepSpec::new(10, 10, 1),
/// ])
/// .unwrap();
///
/// assert_eq!(chain.length(), 3);
/// assert_eq!(chain.total_compute_cost(), 6);
/// assert_eq!(chain.total_memory_cost(), 40);
///
/// let (left, right) = chain.split(1);
/// assert_eq!(left.length(), 1);
/// assert_eq!(right.length(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    /// Steps in execution order, indices contiguous.
    steps: Vec<Step>,
}

impl Chain {
    /// Builds a chain from raw step descriptors, assigning indices `0..n`.
    ///
    /// # Arguments
    ///
    /// * `specs` - Step descriptors in execution order
    ///
    /// # Errors
    ///
    /// * [`ChainError::Empty`] if `specs` is empty
    /// * [`ChainError::SizeMismatch`] if any step's output size differs
    ///   from the next step's input size
    pub fn new(specs: Vec<StepSpec>) -> Result<Self, ChainError> {
        if specs.is_empty() {
            return Err(ChainError::Empty);
        }
        for (position, pair) in specs.windows(2).enumerate() {
            if pair[0].output_size != pair[1].input_size {
                return Err(ChainError::SizeMismatch {
                    position,
                    output_size: pair[0].output_size,
                    input_size: pair[1].input_size,
                });
            }
        }
        let steps = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Step::new(index as i64, spec))
            .collect();
        Ok(Self { steps })
    }

    /// Builds a sub-chain from steps that already satisfy the invariants.
    fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty());
        debug_assert!(steps
            .windows(2)
            .all(|pair| pair[0].output_size() == pair[1].input_size()));
        Self { steps }
    }

    /// Returns the number of steps.
    #[inline]
    pub fn length(&self) -> usize {
        self.steps.len()
    }

    /// Returns the steps in execution order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the size of the externally supplied input.
    #[inline]
    pub fn input_size(&self) -> u64 {
        self.steps[0].input_size()
    }

    /// Returns the checkpoint holding the external input.
    ///
    /// The input is modelled as the output of a pseudo-node one position
    /// before the first step.
    #[inline]
    pub fn input_checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.steps[0].index() - 1, self.input_size())
    }

    /// Returns the memory needed to hold every intermediate at once.
    ///
    /// This is the footprint of the no-recompute schedule: the input plus
    /// all step outputs held simultaneously.
    pub fn total_memory_cost(&self) -> u64 {
        self.input_size()
            + self
                .steps
                .iter()
                .map(Step::output_size)
                .sum::<u64>()
    }

    /// Returns the memory needed to checkpoint the given step positions.
    ///
    /// # Arguments
    ///
    /// * `positions` - Positions into this chain's step slice
    pub fn memory_cost(&self, positions: &[usize]) -> u64 {
        positions
            .iter()
            .map(|&position| self.steps[position].output_size())
            .sum()
    }

    /// Returns the compute cost of the cost-minimal schedule.
    ///
    /// Every step runs forward once and backward once.
    pub fn total_compute_cost(&self) -> u64 {
        2 * self
            .steps
            .iter()
            .map(Step::compute_cost)
            .sum::<u64>()
    }

    /// Splits the chain into two independent sub-chains.
    ///
    /// The left chain holds positions `0..position`, the right chain the
    /// rest; steps keep their global indices.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0 or not smaller than the chain length.
    /// The search only enumerates interior positions; anything else is a
    /// caller bug.
    pub fn split(&self, position: usize) -> (Chain, Chain) {
        assert!(
            position > 0 && position < self.length(),
            "Split position {} out of range for chain of length {}",
            position,
            self.length()
        );
        let left = Self::from_steps(self.steps[..position].to_vec());
        let right = Self::from_steps(self.steps[position..].to_vec());
        (left, right)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .steps
            .iter()
            .map(|step| {
                format!(
                    "--{}-->({})--{}-->",
                    step.input_size(),
                    step.compute_cost(),
                    step.output_size()
                )
            })
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}
