//! Manifest command implementation
//!
//! Implements `gargoyle-deps manifest`, a starting point for `--manifest`.

use anyhow::{Context, Result};

use crate::core::manifest::Manifest;

/// Execute the manifest command
pub fn execute() -> Result<()> {
    let text = Manifest::builtin()
        .to_toml()
        .context("Failed to serialize built-in package list")?;
    print!("{text}");
    Ok(())
}
