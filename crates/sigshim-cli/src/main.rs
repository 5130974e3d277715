//! # sigshim CLI entry point
//!
//! Parses command-line arguments, builds the immutable [`BuildInfo`] once,
//! and dispatches to the subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sigshim_cli::info::{run_platform, run_version, VersionArgs};
use sigshim_cli::signing::{run_sign, run_verify, SignArgs, VerifyArgs};
use sigshim_core::BuildInfo;

/// sigshim: SHA-256 hex signing and digest verification.
///
/// Produces and checks the same signatures as the sigshim C library.
#[derive(Parser, Debug)]
#[command(name = "sigshim", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print build metadata.
    Version(VersionArgs),

    /// Print the host platform as "<os>/<arch>".
    Platform,

    /// Print the hex SHA-256 signature of the payload.
    Sign(SignArgs),

    /// Check a signature against the payload.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let info = BuildInfo::from_build_env();
    tracing::debug!(version = %info.version, commit = %info.git_commit, "sigshim CLI starting");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Version(args) => run_version(&args, &info, &mut stdout),
        Commands::Platform => run_platform(&info, &mut stdout),
        Commands::Sign(args) => run_sign(&args, stdin, &mut stdout),
        Commands::Verify(args) => run_verify(&args, stdin, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
