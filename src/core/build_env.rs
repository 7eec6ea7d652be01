//! Build environment setup
//!
//! Provides the immutable environment every subprocess inherits.
//! Sets up PATH, PKG_CONFIG_PATH, CPPFLAGS, LDFLAGS and LIBRARY_PATH so that
//! each package finds the tools and libraries installed by earlier packages.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::defaults::SYSTEM_PATH;
use crate::error::BuildEnvError;

/// Build environment shared by every package.
///
/// Constructed once before the first build and passed by reference into
/// every subprocess invocation. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildEnvironment {
    /// Install prefix shared by every package
    prefix: PathBuf,
    /// Number of parallel jobs handed to `make`
    jobs: usize,
}

impl BuildEnvironment {
    /// Create an environment rooted at `prefix`
    pub fn new(prefix: impl Into<PathBuf>, jobs: usize) -> Result<Self, BuildEnvError> {
        let env = Self {
            prefix: prefix.into(),
            jobs,
        };
        env.validate()?;
        Ok(env)
    }

    /// Install prefix
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Number of parallel jobs
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Directory holding installed binaries (where alias links are placed)
    pub fn bin_dir(&self) -> PathBuf {
        self.prefix.join("bin")
    }

    /// Directory holding installed libraries
    pub fn lib_dir(&self) -> PathBuf {
        self.prefix.join("lib")
    }

    /// Directory holding installed headers
    pub fn include_dir(&self) -> PathBuf {
        self.prefix.join("include")
    }

    /// Restricted search path: the prefix first, then system directories
    pub fn search_path(&self) -> String {
        format!("{}:{SYSTEM_PATH}", self.bin_dir().display())
    }

    /// Expand `{jobs}` and `{prefix}` placeholders in a package option
    pub fn expand(&self, option: &str) -> String {
        option
            .replace("{jobs}", &self.jobs.to_string())
            .replace("{prefix}", &self.prefix.display().to_string())
    }

    /// Convert to environment variable map for process execution
    pub fn to_env_map(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();

        env.insert("PATH".to_string(), self.search_path());
        env.insert(
            "PKG_CONFIG_PATH".to_string(),
            self.lib_dir().join("pkgconfig").display().to_string(),
        );
        env.insert(
            "CPPFLAGS".to_string(),
            format!("-I{}", self.include_dir().display()),
        );
        env.insert(
            "LDFLAGS".to_string(),
            format!("-L{}", self.lib_dir().display()),
        );
        env.insert(
            "LIBRARY_PATH".to_string(),
            self.lib_dir().display().to_string(),
        );

        env
    }

    /// Check that the prefix is absolute and the job count is usable
    pub fn validate(&self) -> Result<(), BuildEnvError> {
        if !self.prefix.is_absolute() {
            return Err(BuildEnvError::RelativePrefix(self.prefix.clone()));
        }
        if self.jobs == 0 {
            return Err(BuildEnvError::InvalidValue {
                variable: "jobs".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
