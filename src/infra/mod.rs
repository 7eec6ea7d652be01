//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem and external processes.
//! This module is the only place where side effects occur.

pub mod archive;
pub mod links;
pub mod process;
pub mod staging;
