//! Inspect command implementation
//!
//! Prints a chain's structure and cost figures without solving.

use tracing::info;

use crate::Result;

/// Run the inspect command
pub fn run(data: &str) -> Result<()> {
    let chain = super::load_chain(data)?;

    info!("Loaded chain of {} steps from {}", chain.length(), data);

    println!("Chain: {}", chain);
    println!("Steps: {}", chain.length());
    println!("Input size: {}", chain.input_size());
    println!("Minimum computational cost: {}", chain.total_compute_cost());
    println!(
        "Memory required for minimum cost: {}",
        chain.total_memory_cost()
    );
    Ok(())
}
