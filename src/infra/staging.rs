//! Staging directories
//!
//! Each package is unpacked into its own temporary directory, which is
//! removed when the [`StagingDirectory`] goes out of scope.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::defaults::{STAGING_PREFIX, TAR};
use crate::core::build_env::BuildEnvironment;
use crate::core::protocol::Invocation;
use crate::error::{DepsError, StagingError};
use crate::infra::process::CommandRunner;

/// Temporary extraction workspace for one package.
///
/// Dropping it removes the directory and everything in it, so an error
/// anywhere in the build still cleans up. [`StagingDirectory::close`] does
/// the same but reports removal failures.
#[derive(Debug)]
pub struct StagingDirectory {
    dir: TempDir,
}

impl StagingDirectory {
    /// Create a uniquely named directory under the system temp dir
    pub fn create() -> Result<Self, StagingError> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir()
            .map_err(|e| StagingError::Create {
                error: e.to_string(),
            })?;
        tracing::debug!("Created staging directory {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Path of the staging directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Unpack `archive` here and return the top-level source directory
    pub fn extract(
        &self,
        archive: &Path,
        runner: &mut dyn CommandRunner,
        env: &BuildEnvironment,
    ) -> Result<PathBuf, DepsError> {
        let invocation = Invocation::new(
            TAR,
            vec![
                "xvf".to_string(),
                archive.display().to_string(),
                "-C".to_string(),
                self.path().display().to_string(),
            ],
        );
        runner.run(&invocation, self.path(), env)?;

        Ok(self.source_root(archive)?)
    }

    /// First directory (lexically) directly under the staging directory
    fn source_root(&self, archive: &Path) -> Result<PathBuf, StagingError> {
        let entries = std::fs::read_dir(self.path()).map_err(|e| StagingError::Io {
            path: self.path().to_path_buf(),
            error: e.to_string(),
        })?;

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();
        dirs.sort();

        dirs.into_iter()
            .next()
            .ok_or_else(|| StagingError::NoSourceTree {
                archive: archive.to_path_buf(),
            })
    }

    /// Remove the directory, reporting failures
    pub fn close(self) -> Result<(), StagingError> {
        let path = self.path().to_path_buf();
        self.dir.close().map_err(|e| StagingError::Remove {
            path: path.clone(),
            error: e.to_string(),
        })?;
        tracing::debug!("Removed staging directory {}", path.display());
        Ok(())
    }
}
