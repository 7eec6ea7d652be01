//! Error types for gargoyle-deps
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Source archive lookup errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// No archive matched `<name>-<version>*.tar.*`
    #[error("No source archive matching '{pattern}' in '{dir}'")]
    NotFound { pattern: String, dir: PathBuf },

    /// Source directory could not be listed
    #[error("Failed to read source directory '{dir}': {error}")]
    Io { dir: PathBuf, error: String },
}

/// Staging directory errors
#[derive(Error, Debug)]
pub enum StagingError {
    /// Failed to create the temporary directory
    #[error("Failed to create staging directory: {error}")]
    Create { error: String },

    /// Failed to remove the temporary directory
    #[error("Failed to remove staging directory '{path}': {error}")]
    Remove { path: PathBuf, error: String },

    /// Extraction produced no top-level directory
    #[error("Archive '{archive}' did not unpack into a source directory")]
    NoSourceTree { archive: PathBuf },

    /// Failed to list the extracted contents
    #[error("Failed to read staging directory '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Build step errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// A subprocess exited with a non-zero status
    #[error("Command failed ({status}): {command}")]
    CommandFailed { command: String, status: String },

    /// A subprocess could not be started
    #[error("Failed to run '{command}': {error}")]
    SpawnFailed { command: String, error: String },

    /// The build subdirectory could not be created (e.g. left over from a previous run)
    #[error("Failed to create build directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Unknown package passed to --from
    #[error("Package '{name}' is not in the build list")]
    UnknownPackage { name: String },
}

/// Post-install symlink errors
#[derive(Error, Debug)]
pub enum LinkError {
    /// Symlink creation failed for a reason other than "already exists"
    #[error("Failed to link '{alias}' -> '{target}' in '{dir}': {error}")]
    Create {
        alias: String,
        target: String,
        dir: PathBuf,
        error: String,
    },
}

/// Dependency ordering errors
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Circular dependency detected
    #[error("Circular dependency detected: {}", cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },

    /// Package listed more than once
    #[error("Package '{package}' is listed more than once")]
    Duplicate { package: String },

    /// Missing dependency
    #[error("Missing dependency: '{dependency}' required by '{package}'")]
    MissingDependency { package: String, dependency: String },

    /// Dependency is built after its dependent
    #[error("'{package}' is built before its dependency '{dependency}'")]
    OutOfOrder { package: String, dependency: String },
}

/// Manifest loading errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read the manifest file
    #[error("Failed to read manifest '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse the manifest file
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// Manifest contained no packages
    #[error("Manifest lists no packages")]
    Empty,

    /// A package entry is missing a required value
    #[error("Package '{package}' is missing required field '{field}'")]
    MissingField { package: String, field: String },
}

/// Build environment errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildEnvError {
    /// Install prefix is not an absolute path
    #[error("Install prefix must be an absolute path, got '{0}'")]
    RelativePrefix(PathBuf),

    /// Variable has invalid value
    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue { variable: String, reason: String },
}

/// Top-level gargoyle-deps error type
#[derive(Error, Debug)]
pub enum DepsError {
    /// Archive error
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Staging error
    #[error("Staging error: {0}")]
    Staging(#[from] StagingError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Link error
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// Resolver error
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Environment error
    #[error("Environment error: {0}")]
    Environment(#[from] BuildEnvError),
}
