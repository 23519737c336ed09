//! # replan_optimiser
//!
//! Strategy builders and the divide-and-conquer search that turn a chain
//! and a memory budget into a checkpoint schedule.
//!
//! ## Architecture Position
//!
//! Layer 2 of the workspace. Depends on `replan_core` (L1) for the chain
//! model and the schedule state machine; consumed by `service_cli`.
//!
//! ## Modules
//!
//! - `strategies`: whole-chain schedule builders (`checkpoint_everything`,
//!   `constant_memory`) and sub-schedule splicing (`merge_with_checkpoint`)
//! - `search`: the memoised recursive [`Solver`](search::Solver) and the
//!   [`solve`](search::solve) entry point
//!
//! ## Example
//!
//! ```rust
//! use replan_core::chain::{Chain, StepSpec};
//! use replan_core::schedule::MemoryBudget;
//! use replan_optimiser::search::solve;
//!
//! let chain = Chain::new(vec![StepSpec::new(10, 10, 1); 3]).unwrap();
//! let solution = solve(&chain, MemoryBudget::new(1000));
//!
//! let schedule = solution.schedule().expect("plenty of memory");
//! assert_eq!(schedule.cost(), chain.total_compute_cost());
//! ```

pub mod search;
pub mod strategies;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::search::{solve, Solver};
    pub use crate::strategies::{checkpoint_everything, constant_memory, merge_with_checkpoint};

    #[cfg(feature = "parallel")]
    pub use crate::search::solve_parallel;
}
