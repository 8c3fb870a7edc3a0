//! CLI module for the dashboard.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive

pub mod commands;

pub use commands::{Cli, Commands};
