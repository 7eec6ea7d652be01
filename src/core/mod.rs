//! Core business logic module
//!
//! Package data, protocol planning and the build orchestrator. Side effects
//! go through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`package`] - Package and protocol definitions
//! - [`catalog`] - Built-in package list
//! - [`manifest`] - Alternative package lists from TOML
//! - [`resolver`] - Dependency order validation
//! - [`build_env`] - Build environment setup
//! - [`protocol`] - Protocol step planning
//! - [`builder`] - Build orchestration
//! - [`check`] - Pre-build validation

pub mod build_env;
pub mod builder;
pub mod catalog;
pub mod check;
pub mod manifest;
pub mod package;
pub mod protocol;
pub mod resolver;
