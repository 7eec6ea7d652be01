//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use gargoyle_deps::core::build_env::BuildEnvironment;
use gargoyle_deps::core::protocol::Invocation;
use gargoyle_deps::error::BuildError;
use gargoyle_deps::infra::process::CommandRunner;

/// Test project context
///
/// A source directory holding (empty) archives and a separate install
/// prefix, both temporary.
pub struct TestProject {
    /// Directory searched for archives
    pub sources: TempDir,
    /// Install prefix
    pub prefix: TempDir,
}

impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        Self {
            sources: TempDir::new().expect("Failed to create temp directory"),
            prefix: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Source directory path
    pub fn source_dir(&self) -> PathBuf {
        self.sources.path().to_path_buf()
    }

    /// Prefix path
    pub fn prefix_dir(&self) -> PathBuf {
        self.prefix.path().to_path_buf()
    }

    /// Build environment rooted at the test prefix
    pub fn env(&self, jobs: usize) -> BuildEnvironment {
        BuildEnvironment::new(self.prefix.path(), jobs).expect("Invalid test environment")
    }

    /// Place an empty archive in the source directory
    pub fn add_archive(&self, file_name: &str) {
        std::fs::write(self.sources.path().join(file_name), b"")
            .expect("Failed to write archive");
    }

    /// Write a file in the source directory
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.sources.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A recorded invocation
#[derive(Debug, Clone)]
pub struct Call {
    /// Echoed command line
    pub command: String,
    /// Directory it ran in
    pub cwd: PathBuf,
}

/// Command runner that never starts a process.
///
/// `tar` creates a source tree named after the archive, `make install`
/// creates the prefix's `bin` directory, and a chosen command can be made
/// to fail.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    /// Every invocation, in order
    pub calls: Vec<Call>,
    /// Staging directories handed to `tar`
    pub staging_dirs: Vec<PathBuf>,
    /// Fail the nth (1-based) invocation whose command line equals this
    fail_on: Option<(String, usize)>,
    /// Paths created inside every extracted source tree
    pre_existing: Vec<String>,
}

impl ScriptedRunner {
    /// Runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `nth` invocation of `command`
    pub fn failing_on(command: &str, nth: usize) -> Self {
        Self {
            fail_on: Some((command.to_string(), nth)),
            ..Self::default()
        }
    }

    /// Create `path` inside every extracted source tree
    pub fn with_pre_existing(mut self, path: &str) -> Self {
        self.pre_existing.push(path.to_string());
        self
    }

    /// Command lines only
    pub fn commands(&self) -> Vec<String> {
        self.calls.iter().map(|c| c.command.clone()).collect()
    }

    /// Number of invocations equal to `command`
    pub fn count(&self, command: &str) -> usize {
        self.calls.iter().filter(|c| c.command == command).count()
    }

    fn extract(&mut self, invocation: &Invocation) {
        let archive = Path::new(&invocation.args[1]);
        let dest = PathBuf::from(&invocation.args[3]);
        let file_name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .expect("archive file name");
        let stem = &file_name[..file_name.find(".tar.").expect("tar archive")];

        let root = dest.join(stem);
        std::fs::create_dir_all(&root).expect("Failed to create source tree");
        for path in &self.pre_existing {
            std::fs::create_dir_all(root.join(path)).expect("Failed to create path");
        }
        self.staging_dirs.push(dest);
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(
        &mut self,
        invocation: &Invocation,
        cwd: &Path,
        env: &BuildEnvironment,
    ) -> Result<(), BuildError> {
        let command = invocation.to_string();
        self.calls.push(Call {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
        });

        if let Some((fail_command, nth)) = &self.fail_on {
            if &command == fail_command && self.count(fail_command) == *nth {
                return Err(BuildError::CommandFailed {
                    command,
                    status: "exit status: 2".to_string(),
                });
            }
        }

        if invocation.program == "tar" {
            self.extract(invocation);
        } else if command == "make install" {
            std::fs::create_dir_all(env.bin_dir()).expect("Failed to create bin dir");
        }

        Ok(())
    }
}

/// Sample manifest in dependency order
pub const SAMPLE_MANIFEST: &str = r#"
[[package]]
name = "zlib"
version = "1.2.13"
protocol = "autoconf"
options = ["--static"]

[[package]]
name = "libpng"
version = "1.6.39"
protocol = "cmake"
depends = ["zlib"]
"#;

/// Same packages, dependency listed last
pub const REORDERED_MANIFEST: &str = r#"
[[package]]
name = "libpng"
version = "1.6.39"
protocol = "cmake"
depends = ["zlib"]

[[package]]
name = "zlib"
version = "1.2.13"
protocol = "autoconf"
"#;
