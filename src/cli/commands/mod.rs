//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod manifest;
pub mod plan;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_PREFIX, ENV_PREFIX, ENV_SOURCE_DIR};
use crate::core::build_env::BuildEnvironment;
use crate::core::manifest::Manifest;

/// Options shared by every command that needs a build environment
#[derive(Args, Debug, Clone)]
pub struct EnvArgs {
    /// Install prefix shared by every package
    #[arg(long, env = ENV_PREFIX, default_value = DEFAULT_PREFIX)]
    pub prefix: PathBuf,

    /// Number of parallel make jobs [default: logical CPU count]
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// TOML package list to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

impl EnvArgs {
    /// Build the environment from the flags
    pub fn environment(&self) -> Result<BuildEnvironment> {
        let jobs = self.jobs.unwrap_or_else(num_cpus::get);
        BuildEnvironment::new(&self.prefix, jobs).context("Invalid build environment")
    }

    /// Load the package list
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::load_or_builtin(self.manifest.as_deref()).context("Failed to load package list")
    }
}

/// Where source archives are looked up
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing the source archives [default: current directory]
    #[arg(long, env = ENV_SOURCE_DIR, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the source directory
    pub fn source_dir(&self) -> Result<PathBuf> {
        match &self.source_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }
}

/// Arguments of the build command
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Resume at this package, assuming earlier ones are installed
    #[arg(long, value_name = "PACKAGE")]
    pub from: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every package into the install prefix
    Build(BuildArgs),

    /// Print the steps each package would run, without running them
    Plan {
        #[command(flatten)]
        env: EnvArgs,
    },

    /// Validate package order, source archives and host tools
    Check {
        #[command(flatten)]
        env: EnvArgs,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the built-in package list as a manifest file
    Manifest,
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Build(args) => build::execute(&args),
            Self::Plan { env } => plan::execute(&env),
            Self::Check { env, source } => check::execute(&env, &source),
            Self::Manifest => manifest::execute(),
        }
    }
}
