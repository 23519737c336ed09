//! Step descriptors and the Step type.

use crate::schedule::Checkpoint;

/// Raw description of one computation step, as read from storage.
///
/// A `StepSpec` carries the memory footprint and compute cost of a step
/// but no position: indices are assigned by [`Chain::new`] in file order.
///
/// [`Chain::new`]: crate::chain::Chain::new
///
/// # Examples
///
/// ```
/// use replan_core::chain::StepSpec;
///
/// let spec = StepSpec::new(10, 20, 3);
/// assert_eq!(spec.input_size, 10);
/// assert_eq!(spec.output_size, 20);
/// assert_eq!(spec.compute_cost, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSpec {
    /// Memory units consumed by the step's input.
    pub input_size: u64,
    /// Memory units produced as the step's output.
    pub output_size: u64,
    /// Compute cost of running the step once, forward or backward.
    pub compute_cost: u64,
}

impl StepSpec {
    /// Creates a step descriptor.
    #[inline]
    pub fn new(input_size: u64, output_size: u64, compute_cost: u64) -> Self {
        Self {
            input_size,
            output_size,
            compute_cost,
        }
    }
}

/// One positioned stage of a chain.
///
/// Immutable after construction. The index is global: steps keep their
/// position in the originally constructed chain even inside sub-chains
/// produced by [`Chain::split`].
///
/// [`Chain::split`]: crate::chain::Chain::split
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    index: i64,
    input_size: u64,
    output_size: u64,
    compute_cost: u64,
}

impl Step {
    /// Creates a step at the given global index.
    pub(crate) fn new(index: i64, spec: StepSpec) -> Self {
        Self {
            index,
            input_size: spec.input_size,
            output_size: spec.output_size,
            compute_cost: spec.compute_cost,
        }
    }

    /// Returns the step's global index.
    #[inline]
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Returns the memory units consumed by the step's input.
    #[inline]
    pub fn input_size(&self) -> u64 {
        self.input_size
    }

    /// Returns the memory units produced as the step's output.
    #[inline]
    pub fn output_size(&self) -> u64 {
        self.output_size
    }

    /// Returns the compute cost of one forward or backward execution.
    #[inline]
    pub fn compute_cost(&self) -> u64 {
        self.compute_cost
    }

    /// Returns the checkpoint that would hold this step's output.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.index, self.output_size)
    }
}
