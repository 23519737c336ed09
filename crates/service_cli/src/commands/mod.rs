//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod inspect;
pub mod plan;

use std::path::Path;

use replan_core::chain::{Chain, StepSpec};

use crate::{CliError, Result};

/// Loads and validates a chain description from a JSON file.
///
/// The file holds an array of step descriptors
/// `{"input_size", "output_size", "compute_cost"}` in execution order.
pub(crate) fn load_chain(path: &str) -> Result<Chain> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    let specs: Vec<StepSpec> = serde_json::from_str(&contents)?;
    Ok(Chain::new(specs)?)
}
