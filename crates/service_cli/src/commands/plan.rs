//! Plan command implementation
//!
//! Computes a checkpoint schedule for a chain under a memory budget.

use tracing::{debug, info};

use replan_core::schedule::{MemoryBudget, Schedule, Solution};
use replan_optimiser::search::Solver;

use crate::{CliError, Result};

/// Run the plan command
pub fn run(data: &str, budget_units: u64, format: &str) -> Result<()> {
    let chain = super::load_chain(data)?;
    let budget = MemoryBudget::new(budget_units);

    info!("Loaded chain of {} steps from {}", chain.length(), data);
    info!("Minimum computational cost: {}", chain.total_compute_cost());
    info!(
        "Memory required for minimum cost: {}",
        chain.total_memory_cost()
    );
    info!("Given memory budget: {}", budget);

    let mut solver = Solver::new();
    let solution = solver.solve(&chain, budget);
    debug!(
        "Search cached {} sub-problems ({} hits, {} misses)",
        solver.memo().len(),
        solver.memo().hits(),
        solver.memo().misses()
    );

    let schedule = match solution {
        Solution::Feasible(schedule) => schedule,
        Solution::Infeasible => {
            return Err(CliError::BudgetExceeded {
                budget: budget_units,
            })
        }
    };

    match format {
        "text" => render_text(&schedule),
        "json" => render_json(&schedule)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: text, json",
                other
            )));
        }
    }

    info!("Planning complete");
    Ok(())
}

fn render_text(schedule: &Schedule) {
    println!("Suggested schedule:");
    println!("{}", schedule);
    println!("Schedule cost: {}", schedule.cost());
    println!("Peak memory: {}", schedule.peak_memory());
}

fn render_json(schedule: &Schedule) -> Result<()> {
    let rendered = serde_json::json!({
        "cost": schedule.cost(),
        "peak_memory": schedule.peak_memory(),
        "actions": schedule.actions(),
    });
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
