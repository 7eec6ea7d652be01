//! Check command implementation
//!
//! Implements `gargoyle-deps check` to validate a run without building.

use anyhow::{bail, Result};

use super::{EnvArgs, SourceArgs};
use crate::cli::output::{is_json, is_quiet, print_detail, print_info, status};
use crate::core::check;

/// Execute the check command
pub fn execute(env_args: &EnvArgs, source: &SourceArgs) -> Result<()> {
    let env = env_args.environment()?;
    let manifest = env_args.manifest()?;
    let source_dir = source.source_dir()?;

    let report = check::check(&manifest.packages, &env, &source_dir);

    if is_json() {
        let json = serde_json::json!({
            "status": if report.is_ok() { "success" } else { "error" },
            "version": env!("CARGO_PKG_VERSION"),
            "git_sha": option_env!("VERGEN_GIT_SHA"),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else if !is_quiet() {
        print_info(&format!(
            "gargoyle-deps {} ({})",
            env!("CARGO_PKG_VERSION"),
            option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
        ));
        println!("Checking {} packages...\n", report.archives.len());

        match &report.order_error {
            None => println!("{} Package order satisfies all dependencies", status::SUCCESS),
            Some(error) => println!("{} {error}", status::ERROR),
        }

        let missing = report.missing_archives();
        if missing.is_empty() {
            println!("{} All source archives found", status::SUCCESS);
        } else {
            println!("{} Missing source archives:", status::ERROR);
            for archive in missing {
                print_detail(&format!("- {} ({})", archive.package, archive.pattern));
            }
        }

        for tool in &report.tools {
            match &tool.path {
                Some(path) => println!("{} {} ({})", status::SUCCESS, tool.name, path.display()),
                None => println!("{} {} not found on {}", status::ERROR, tool.name, env.search_path()),
            }
        }
    }

    if !report.is_ok() {
        bail!("Check failed");
    }
    Ok(())
}
