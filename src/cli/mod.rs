// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for classifying pose dumps.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging and the `classify` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Classification command.
pub mod classify;

/// Console logging macros.
pub mod logging;
