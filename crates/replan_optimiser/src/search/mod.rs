//! The divide-and-conquer schedule search.
//!
//! [`Solver`] recursively decomposes a chain at every interior split
//! position, solves both halves under adjusted budgets, and splices the
//! results, keeping the cheapest admissible candidate. Solved
//! sub-problems are memoised on their step range and budget.

mod engine;
mod memo;

pub use engine::{solve, Solver};
pub use memo::MemoTable;

#[cfg(feature = "parallel")]
pub use engine::solve_parallel;
