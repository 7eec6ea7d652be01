//! Plan command implementation
//!
//! Implements `gargoyle-deps plan`: prints every step of every package.

use anyhow::{Context, Result};

use super::EnvArgs;
use crate::cli::output::{is_json, is_quiet};
use crate::core::protocol::{self, Step};
use crate::core::resolver;

/// Execute the plan command
pub fn execute(args: &EnvArgs) -> Result<()> {
    let env = args.environment()?;
    let manifest = args.manifest()?;

    resolver::validate_order(&manifest.packages).context("Invalid package order")?;

    if is_json() {
        let packages: Vec<_> = manifest
            .packages
            .iter()
            .map(|pkg| {
                serde_json::json!({
                    "name": pkg.name,
                    "version": pkg.version,
                    "protocol": pkg.protocol,
                    "depends": pkg.depends,
                    "steps": protocol::plan(pkg, &env),
                })
            })
            .collect();
        let json = serde_json::json!({
            "prefix": env.prefix(),
            "jobs": env.jobs(),
            "environment": env.to_env_map(),
            "packages": packages,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if is_quiet() {
        return Ok(());
    }

    for (key, value) in env.to_env_map() {
        println!("{key}={value}");
    }

    for (index, pkg) in manifest.packages.iter().enumerate() {
        println!();
        println!("{}. {pkg} ({})", index + 1, pkg.protocol);
        for step in protocol::plan(pkg, &env) {
            match &step {
                Step::Run(inv) if !inv.workdir.as_os_str().is_empty() => {
                    println!("   [{}] {step}", inv.workdir.display());
                }
                Step::Link { .. } => println!("   [{}] {step}", env.bin_dir().display()),
                _ => println!("   {step}"),
            }
        }
    }

    Ok(())
}
