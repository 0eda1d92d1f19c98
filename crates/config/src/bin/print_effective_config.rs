//! Print the effective config (defaults + optional file + env overrides).

use clap::Parser;
use fieldguard_config::{load_config_std_env, to_pretty_json, to_pretty_toml};
use std::io;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fieldguard-effective-config",
    version,
    about = "Print the effective fieldguard config",
    long_about = None
)]
struct Args {
    /// Optional config file path (JSON/TOML).
    path: Option<PathBuf>,
    /// Print TOML instead of JSON.
    #[arg(long)]
    toml: bool,
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::ExitCode::from(1)
        },
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_std_env(args.path.as_deref())?;
    let output = if args.toml {
        to_pretty_toml(config.as_ref())?
    } else {
        to_pretty_json(config.as_ref())?
    };

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
