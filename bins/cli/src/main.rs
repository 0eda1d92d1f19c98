//! `fieldguard` binary entrypoint.
//!
//! Loads the effective config, installs the tracing subscriber, and replays
//! the demonstration cases. Diagnostic lines and case results go to stdout;
//! logs and errors go to stderr.

mod cases;
mod error;
mod telemetry;

use clap::Parser;
use error::{CliError, ExitCode};
use fieldguard_config::load_config_std_env;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fieldguard",
    version,
    about = "Replay checked and self-validating record cases",
    long_about = None
)]
struct Cli {
    /// Optional config file path (JSON/TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop at the first constraint violation and exit with code 2.
    #[arg(long)]
    strict: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::from(ExitCode::Ok.as_u8()),
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = load_config_std_env(cli.config.as_deref()).map_err(CliError::Config)?;
    telemetry::init_tracing(config.logging)?;

    tracing::debug!(
        event = "cli.start",
        strict = cli.strict,
        config_path = ?cli.config,
        "starting case replay"
    );

    let validator = config.diagnostics.build_validator();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = cases::run_cases(&validator, cli.strict, &mut out)?;
    out.flush()?;

    tracing::debug!(event = "cli.done", ?summary, "case replay finished");
    Ok(())
}
