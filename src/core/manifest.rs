//! Package manifest parsing
//!
//! A manifest replaces the built-in package list. It is a TOML file with
//! one `[[package]]` table per package, in build order.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::catalog;
use crate::core::package::PackageSpec;
use crate::error::ManifestError;

/// An ordered package list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Packages, in build order
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageSpec>,
}

impl Manifest {
    /// The built-in package list
    pub fn builtin() -> Self {
        Self {
            packages: catalog::default_packages(),
        }
    }

    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Load from `path` if given, otherwise use the built-in list
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ManifestError> {
        match path {
            Some(path) => {
                tracing::info!("Using package list from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.packages.is_empty() {
            return Err(ManifestError::Empty);
        }
        for pkg in &self.packages {
            if pkg.name.trim().is_empty() {
                return Err(ManifestError::MissingField {
                    package: format!("{pkg}"),
                    field: "name".to_string(),
                });
            }
            if pkg.version.trim().is_empty() {
                return Err(ManifestError::MissingField {
                    package: pkg.name.clone(),
                    field: "version".to_string(),
                });
            }
        }
        Ok(())
    }
}
