//! # Version and Platform Subcommands
//!
//! Report the [`BuildInfo`] the binary was started with. The value is built
//! once in `main` and passed in; nothing here reads global state.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use sigshim_core::BuildInfo;

/// Arguments for `sigshim version`.
#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Emit the build metadata as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Print build metadata.
pub fn run_version(args: &VersionArgs, info: &BuildInfo, out: &mut impl Write) -> Result<u8> {
    if args.json {
        let rendered =
            serde_json::to_string_pretty(info).context("failed to serialize build info")?;
        writeln!(out, "{rendered}")?;
    } else {
        writeln!(out, "{info}")?;
    }
    Ok(0)
}

/// Print the `"<os>/<arch>"` identifier.
pub fn run_platform(info: &BuildInfo, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", info.platform)?;
    Ok(0)
}
