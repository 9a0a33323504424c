//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod schedule;

use std::path::Path;

use rent_core::Contract;
use tracing::debug;

use crate::{CliError, Result};

/// Load a contract from a `.json` or `.toml` file.
pub fn load_contract(path: &str) -> Result<Contract> {
    let file = Path::new(path);
    if !file.exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let content = std::fs::read_to_string(file)?;
    let parse_error = |message: String| CliError::Parse {
        path: path.to_string(),
        message,
    };

    let extension = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    let contract: Contract = match extension.as_deref() {
        Some("json") => {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
        }
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unsupported contract format: {}. Supported: json, toml",
                other.unwrap_or("<none>")
            )));
        }
    };

    debug!(path, "contract loaded");
    Ok(contract)
}
