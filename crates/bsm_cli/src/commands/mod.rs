//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use std::path::Path;

use tracing::info;

use crate::Result;

pub mod check;
pub mod curve;
pub mod price;

/// Write rendered output to `path`, or to stdout when none is given
pub fn emit(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)?;
            info!("Wrote output to {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}
