//! Package definition handling
//!
//! A package is a name, a version, the build protocol used to build it and
//! the extra options handed to that protocol's configure step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Build protocol family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// `./configure && make && make install`
    Autoconf,
    /// `cmake .. && make && make install` in a `build/` subdirectory
    #[serde(rename = "cmake")]
    CMake,
    /// CMake, then compiler driver aliases (`cc`, `gcc`, `c++`, `g++`)
    CompilerToolchain,
    /// `./autogen.sh`, Autoconf, then a `pkg-config` alias
    PackageConfigTool,
}

impl Protocol {
    /// Steps run before the base protocol
    pub fn bootstrap_commands(self) -> &'static [&'static str] {
        match self {
            Self::PackageConfigTool => &["./autogen.sh"],
            Self::Autoconf | Self::CMake | Self::CompilerToolchain => &[],
        }
    }

    /// `(alias, target)` links created in the prefix's `bin` directory after install
    pub fn links(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::CompilerToolchain => &[
                ("cc", "clang"),
                ("gcc", "clang"),
                ("c++", "clang++"),
                ("g++", "clang++"),
            ],
            Self::PackageConfigTool => &[("pkg-config", "pkgconf")],
            Self::Autoconf | Self::CMake => &[],
        }
    }

    /// Whether the base protocol is CMake (otherwise Autoconf)
    pub fn uses_cmake(self) -> bool {
        matches!(self, Self::CMake | Self::CompilerToolchain)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autoconf => write!(f, "autoconf"),
            Self::CMake => write!(f, "cmake"),
            Self::CompilerToolchain => write!(f, "compiler-toolchain"),
            Self::PackageConfigTool => write!(f, "package-config-tool"),
        }
    }
}

/// A single package to build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageSpec {
    /// Package name (archive name prefix)
    pub name: String,

    /// Package version (follows the name in the archive file name)
    pub version: String,

    /// Build protocol
    pub protocol: Protocol,

    /// Extra configure options, in order
    #[serde(default)]
    pub options: Vec<String>,

    /// Packages that must be installed before this one
    #[serde(default)]
    pub depends: Vec<String>,
}

impl PackageSpec {
    /// Create a package with no options or dependencies
    pub fn new(name: &str, version: &str, protocol: Protocol) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            protocol,
            options: Vec::new(),
            depends: Vec::new(),
        }
    }

    /// Set the configure options
    #[must_use]
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the build-time dependencies
    #[must_use]
    pub fn with_depends(mut self, depends: &[&str]) -> Self {
        self.depends = depends.iter().map(ToString::to_string).collect();
        self
    }

    /// Archive file name prefix, `<name>-<version>`
    pub fn archive_stem(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
