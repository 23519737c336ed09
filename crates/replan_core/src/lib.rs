//! # replan_core: Chain Model and Schedule State Machine
//!
//! ## Layer 1 (Foundation) Role
//!
//! replan_core is the bottom layer of the workspace, providing:
//! - The immutable chain description: `Step`, `StepSpec`, `Chain` (`chain`)
//! - The validated, append-only execution log: `Action`, `Schedule`
//!   (`schedule`)
//! - Result and comparison types: `Cost`, `Solution` (`schedule`)
//! - The memory budget a schedule must respect: `MemoryBudget` (`schedule`)
//! - Error types: `ChainError` (`chain`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other replan_* crates, with minimal
//! external dependencies:
//! - thiserror: Structured error types for chain validation
//! - serde: Serialisation of step descriptors and actions (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use replan_core::chain::{Chain, StepSpec};
//! use replan_core::schedule::Schedule;
//!
//! let chain = Chain::new(vec![
//!     StepSpec::new(10, 20, 3),
//!     StepSpec::new(20, 10, 2),
//! ])
//! .unwrap();
//!
//! assert_eq!(chain.length(), 2);
//! assert_eq!(chain.total_compute_cost(), 10);
//! assert_eq!(chain.total_memory_cost(), 40);
//!
//! let mut schedule = Schedule::new();
//! schedule.push_save(chain.input_checkpoint());
//! for step in chain.steps() {
//!     schedule.push_forward(step);
//! }
//! assert_eq!(schedule.cost(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `StepSpec`, `Action`, and friends

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod chain;
pub mod schedule;
