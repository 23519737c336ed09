//! The linear chain of computation steps.
//!
//! A [`Chain`] is an immutable, ordered description of the steps a
//! forward/backward pipeline executes, plus the derived metadata of the
//! externally supplied input. Chains are built once from raw
//! [`StepSpec`] descriptors and decomposed by [`Chain::split`] during the
//! schedule search.

mod chain;
mod error;
mod step;

pub use chain::Chain;
pub use error::ChainError;
pub use step::{Step, StepSpec};
