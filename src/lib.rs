//! gargoyle-deps - builds Gargoyle's third-party dependencies
//!
//! Each package's source archive is unpacked into a temporary directory and
//! built with its protocol (autoconf or CMake) into one shared install
//! prefix, strictly in order, stopping at the first failure.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Packages, protocols, ordering and orchestration
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
