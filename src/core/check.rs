//! Check command logic
//!
//! Validates the package order, looks for every source archive and checks
//! that the required host tools resolve on the build search path, without
//! running anything.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::defaults::REQUIRED_HOST_TOOLS;
use crate::core::build_env::BuildEnvironment;
use crate::core::package::PackageSpec;
use crate::core::resolver;
use crate::infra::archive::{archive_pattern, locate_archive};

/// Archive lookup result for one package
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveCheck {
    /// Package name
    pub package: String,
    /// Pattern searched for
    pub pattern: String,
    /// Archive found, if any
    pub archive: Option<PathBuf>,
}

/// Host tool lookup result
#[derive(Debug, Clone, Serialize)]
pub struct ToolCheck {
    /// Tool name
    pub name: String,
    /// Resolved path, if found
    pub path: Option<PathBuf>,
}

/// Result of the check operation
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Order validation error, if any
    pub order_error: Option<String>,
    /// One entry per package
    pub archives: Vec<ArchiveCheck>,
    /// One entry per required host tool
    pub tools: Vec<ToolCheck>,
}

impl CheckReport {
    /// Packages with no archive
    pub fn missing_archives(&self) -> Vec<&ArchiveCheck> {
        self.archives.iter().filter(|a| a.archive.is_none()).collect()
    }

    /// Tools that did not resolve
    pub fn missing_tools(&self) -> Vec<&ToolCheck> {
        self.tools.iter().filter(|t| t.path.is_none()).collect()
    }

    /// Whether a build could start
    pub fn is_ok(&self) -> bool {
        self.order_error.is_none()
            && self.missing_archives().is_empty()
            && self.missing_tools().is_empty()
    }
}

/// Resolve `tool` on the restricted build search path
pub fn find_host_tool(tool: &str, env: &BuildEnvironment, cwd: &Path) -> Option<PathBuf> {
    which::which_in(tool, Some(env.search_path()), cwd).ok()
}

/// Perform the check
pub fn check(packages: &[PackageSpec], env: &BuildEnvironment, source_dir: &Path) -> CheckReport {
    let mut report = CheckReport {
        order_error: resolver::validate_order(packages)
            .err()
            .map(|e| e.to_string()),
        ..CheckReport::default()
    };

    for pkg in packages {
        let archive = match locate_archive(source_dir, &pkg.name, &pkg.version) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("{e}");
                None
            }
        };
        report.archives.push(ArchiveCheck {
            package: pkg.name.clone(),
            pattern: archive_pattern(&pkg.name, &pkg.version),
            archive,
        });
    }

    for tool in REQUIRED_HOST_TOOLS {
        report.tools.push(ToolCheck {
            name: (*tool).to_string(),
            path: find_host_tool(tool, env, source_dir),
        });
    }

    report
}
