//! # Sign and Verify Subcommands
//!
//! The payload comes from a positional argument, `--file`, or stdin, in that
//! order of precedence. Files and stdin are hashed byte for byte, so a
//! payload containing nul bytes gets a signature the C-ABI `Sign` cannot
//! reproduce (it stops at the first nul).

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use sigshim_core::{sign, verify, SignInput};

/// Arguments for `sigshim sign`.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Data to sign. Read from stdin when neither this nor `--file` is given.
    #[arg(value_name = "DATA", conflicts_with = "file")]
    pub data: Option<String>,
    /// Sign the contents of this file.
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

/// Arguments for `sigshim verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Expected signature: exactly 64 lowercase hex characters. Surrounding
    /// whitespace is part of the comparison and causes a mismatch.
    #[arg(long, short)]
    pub signature: String,
    /// Data to check. Read from stdin when neither this nor `--file` is given.
    #[arg(value_name = "DATA", conflicts_with = "file")]
    pub data: Option<String>,
    /// Check the contents of this file.
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

/// Print the signature of the payload.
pub fn run_sign(args: &SignArgs, stdin: impl Read, out: &mut impl Write) -> Result<u8> {
    let payload = read_payload(args.data.as_deref(), args.file.as_deref(), stdin)?;
    tracing::debug!(len = payload.len(), "signing payload");
    let signature = sign(SignInput::Present(&payload))?
        .map(|hex| hex.to_string())
        .unwrap_or_default();
    writeln!(out, "{signature}")?;
    Ok(0)
}

/// Check a signature against the payload. Exit code 0 on match, 1 otherwise.
pub fn run_verify(args: &VerifyArgs, stdin: impl Read, out: &mut impl Write) -> Result<u8> {
    let payload = read_payload(args.data.as_deref(), args.file.as_deref(), stdin)?;
    tracing::debug!(len = payload.len(), "verifying payload");
    if verify(SignInput::Present(&payload), args.signature.as_str().into())? {
        writeln!(out, "OK: signature is valid")?;
        Ok(0)
    } else {
        writeln!(out, "FAIL: signature does not match")?;
        Ok(1)
    }
}

fn read_payload(
    data: Option<&str>,
    file: Option<&Path>,
    mut stdin: impl Read,
) -> Result<Vec<u8>> {
    if let Some(data) = data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = file {
        return std::fs::read(path)
            .with_context(|| format!("failed to read payload file: {}", path.display()));
    }
    let mut buf = Vec::new();
    stdin
        .read_to_end(&mut buf)
        .context("failed to read payload from stdin")?;
    Ok(buf)
}
