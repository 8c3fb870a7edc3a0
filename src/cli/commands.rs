//! Command definitions for the dashboard CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::clock::ClockZone;
use crate::config::DashboardConfig;
use crate::types::LayoutMode;

// ============================================================================
// CLI Structure
// ============================================================================

/// tdash - a personal terminal dashboard with a Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "tdash",
    version,
    about = "Personal terminal dashboard with a clock and a Pomodoro timer",
    long_about = "A multi-screen terminal dashboard.\n\
                  Click the timer (or press space) to start and pause it, right-click \
                  (or press c) to configure the work and break durations.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the compact layout (small displays such as a Raspberry Pi screen)
    #[arg(long)]
    pub small_screen: bool,

    /// Work duration in minutes
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..=600)
    )]
    pub work: Option<u32>,

    /// Break duration in minutes
    #[arg(
        short = 'b',
        long = "break",
        value_parser = clap::value_parser!(u32).range(1..=600)
    )]
    pub break_time: Option<u32>,

    /// Disable notification sounds
    #[arg(long)]
    pub no_sound: bool,

    /// Clock time zone (`local` or an IANA name); repeat to cycle through several
    #[arg(short = 'z', long = "zone", value_name = "ZONE")]
    pub zones: Vec<ClockZone>,

    /// Path to a JSON config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut DashboardConfig) {
        if self.small_screen {
            config.layout = LayoutMode::Compact;
        }
        if let Some(work) = self.work {
            config.timer.work_minutes = work;
        }
        if let Some(break_time) = self.break_time {
            config.timer.break_minutes = break_time;
        }
        if self.no_sound {
            config.sound.enabled = false;
        }
        if !self.zones.is_empty() {
            config.clock_zones = self.zones.clone();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
