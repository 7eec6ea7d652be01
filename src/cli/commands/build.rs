//! Build command implementation
//!
//! Implements `gargoyle-deps build` (also the default with no command).

use anyhow::{Context, Result};

use super::BuildArgs;
use crate::cli::output::{is_json, print_detail, print_success, print_warning};
use crate::core::builder::BuildOrchestrator;
use crate::infra::process::SystemRunner;

/// Execute the build command
pub fn execute(args: &BuildArgs) -> Result<()> {
    let env = args.env.environment()?;
    let manifest = args.env.manifest()?;
    let source_dir = args.source.source_dir()?;

    tracing::info!(
        "Installing into {} from archives in {}",
        env.prefix().display(),
        source_dir.display()
    );

    if let Some(from) = &args.from {
        print_warning(&format!(
            "Starting at '{from}'; earlier packages must already be installed"
        ));
    }

    let mut orchestrator = BuildOrchestrator::new(&env, &source_dir, SystemRunner::new());
    let summary = orchestrator
        .run(&manifest.packages, args.from.as_deref())
        .context("Build aborted")?;

    if is_json() {
        let json = serde_json::json!({
            "status": "success",
            "prefix": env.prefix(),
            "built": summary.built,
            "links_created": summary.links_created,
            "links_present": summary.links_present,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print_success("Build complete!");
    print_detail(&format!("Packages built: {}", summary.built.len()));
    print_detail(&format!("Prefix: {}", env.prefix().display()));
    if summary.links_created + summary.links_present > 0 {
        print_detail(&format!(
            "Alias links: {} created, {} already present",
            summary.links_created, summary.links_present
        ));
    }

    Ok(())
}
