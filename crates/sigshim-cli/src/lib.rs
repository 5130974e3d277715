//! # sigshim-cli — Command-Line Front End
//!
//! Drives the same `sigshim-core` routines the C-ABI library exports, for
//! use from scripts and for checking signatures produced by foreign callers.
//!
//! ## Subcommands
//!
//! - `version`: build metadata, human-readable or JSON
//! - `platform`: `"<os>/<arch>"`
//! - `sign`: hex SHA-256 signature of an argument, file, or stdin
//! - `verify`: check a signature against the same inputs
//!
//! Argument parsing lives in `main.rs`; handlers here return an exit code.

pub mod info;
pub mod signing;
