//! tdash - a personal terminal dashboard
//!
//! Shows a clock and a Pomodoro timer:
//! - click the timer (or press space) to start, pause and resume it
//! - right-click it (or press c) to configure work and break durations
//! - a notification sound plays whenever a phase ends

use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use tdash::app::{terminal, App};
use tdash::cli::{Cli, Commands};
use tdash::clock::{SystemClock, ZoneCycle};
use tdash::config::{default_log_path, DashboardConfig};
use tdash::sound::phase_notifier;
use tdash::timer::TimerEngine;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let log_guard = init_tracing(cli.verbose, cli.log_file.as_deref());

    let result = execute(cli).await;
    // Flush buffered log lines before a possible exit.
    drop(log_guard);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initializes file logging.
///
/// The dashboard owns the terminal, so logs never go to stdout or stderr.
/// Lines are written by a background worker; the returned guard flushes it
/// when dropped. When no log file can be opened, logging stays disabled.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    use tracing_subscriber::{fmt, EnvFilter};

    let path = log_file.map(Path::to_path_buf).or_else(default_log_path)?;
    let appender = open_log_appender(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    if verbose {
        tracing::info!(path = %path.display(), "Verbose mode enabled");
    }
    Some(guard)
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_appender(path: &Path) -> Option<RollingFileAppender> {
    let file_name = path.file_name()?.to_string_lossy().into_owned();
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .ok()
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;

    let notifier = phase_notifier(config.sound.enabled, config.notification_sounds());
    let engine = TimerEngine::new(config.timer_config(), notifier);
    let mut app = App::new(
        engine,
        config.layout,
        ZoneCycle::new(config.clock_zones.clone()),
        Box::new(SystemClock),
    );

    let mut tui = terminal::init()?;
    let result = app.run(&mut tui).await;
    terminal::restore()?;
    tui.show_cursor()?;

    result
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
