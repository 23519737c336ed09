//! Whole-chain schedule builders and sub-schedule splicing.
//!
//! Each strategy constructs a complete, legal schedule for a chain; the
//! search ranks their results by cost. `checkpoint_everything` trades
//! memory for zero recomputation, `constant_memory` trades recomputation
//! for minimal memory, and `merge_with_checkpoint` splices two
//! sub-schedules across a split boundary.

mod constant_memory;
mod full_checkpoint;
mod merge;

pub use constant_memory::constant_memory;
pub use full_checkpoint::checkpoint_everything;
pub use merge::merge_with_checkpoint;
