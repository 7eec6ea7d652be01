//! Build orchestration logic
//!
//! Builds packages one at a time, in list order:
//! locate archive, stage, extract, run protocol steps, clean up.
//! The first failure stops the whole run; packages already installed stay
//! installed.

use std::path::{Path, PathBuf};

use crate::core::build_env::BuildEnvironment;
use crate::core::package::PackageSpec;
use crate::core::protocol::{self, Step};
use crate::core::resolver;
use crate::error::{BuildError, DepsError};
use crate::infra::archive::locate_archive;
use crate::infra::links::{link_alias, LinkOutcome};
use crate::infra::process::CommandRunner;
use crate::infra::staging::StagingDirectory;

/// What a successful run did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Packages built, in order
    pub built: Vec<String>,
    /// Alias links created
    pub links_created: usize,
    /// Alias links that already existed
    pub links_present: usize,
}

/// Build orchestrator state
pub struct BuildOrchestrator<'a, R: CommandRunner> {
    /// Environment shared by every subprocess
    env: &'a BuildEnvironment,
    /// Directory searched for source archives
    source_dir: PathBuf,
    /// Executes subprocesses
    runner: R,
}

impl<'a, R: CommandRunner> BuildOrchestrator<'a, R> {
    /// Create a new build orchestrator
    pub fn new(env: &'a BuildEnvironment, source_dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            env,
            source_dir: source_dir.into(),
            runner,
        }
    }

    /// Get the runner back (tests inspect what was run)
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Validate the order of `packages`, then build them from `start` onwards.
    ///
    /// `start` names the first package to build; earlier packages are
    /// assumed installed by a previous run.
    pub fn run(
        &mut self,
        packages: &[PackageSpec],
        start: Option<&str>,
    ) -> Result<BuildSummary, DepsError> {
        resolver::validate_order(packages)?;

        let first = match start {
            Some(name) => packages
                .iter()
                .position(|p| p.name == name)
                .ok_or_else(|| BuildError::UnknownPackage {
                    name: name.to_string(),
                })?,
            None => 0,
        };

        let mut summary = BuildSummary::default();
        let pending = &packages[first..];
        tracing::info!("Building {} packages with {} jobs", pending.len(), self.env.jobs());

        for (index, pkg) in pending.iter().enumerate() {
            tracing::info!("[{}/{}] Building {pkg}", index + 1, pending.len());
            self.build_package(pkg, &mut summary)?;
            summary.built.push(pkg.name.clone());
        }

        Ok(summary)
    }

    /// Build a single package
    pub fn build_package(
        &mut self,
        pkg: &PackageSpec,
        summary: &mut BuildSummary,
    ) -> Result<(), DepsError> {
        let archive = locate_archive(&self.source_dir, &pkg.name, &pkg.version)?;

        let staging = StagingDirectory::create()?;
        let source_root = staging.extract(&archive, &mut self.runner, self.env)?;

        for step in protocol::plan(pkg, self.env) {
            self.execute(&step, &source_root, summary)?;
        }

        staging.close()?;
        tracing::info!("Built {pkg}");
        Ok(())
    }

    fn execute(
        &mut self,
        step: &Step,
        source_root: &Path,
        summary: &mut BuildSummary,
    ) -> Result<(), DepsError> {
        match step {
            Step::Run(invocation) => {
                let cwd = source_root.join(&invocation.workdir);
                self.runner.run(invocation, &cwd, self.env)?;
            }
            Step::CreateDir { path } => {
                let dir = source_root.join(path);
                std::fs::create_dir(&dir).map_err(|e| BuildError::CreateDir {
                    path: dir.clone(),
                    error: e.to_string(),
                })?;
            }
            Step::Link { alias, target } => {
                match link_alias(&self.env.bin_dir(), alias, target)? {
                    LinkOutcome::Created => summary.links_created += 1,
                    LinkOutcome::AlreadyPresent => summary.links_present += 1,
                }
            }
        }
        Ok(())
    }
}
