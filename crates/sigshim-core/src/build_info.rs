//! # Build Metadata
//!
//! The shim reports a fixed version literal and the host platform. Richer
//! build metadata (commit, build date, compiler version) is captured at
//! compile time and materialized once into an immutable [`BuildInfo`] that
//! callers pass by reference. There is no process-wide mutable version state.

use serde::{Deserialize, Serialize};

/// Version literal reported by `GetVersion`.
pub const SHIM_VERSION: &str = "1.0.0";

/// Value used when a build-time field was not provided.
const UNKNOWN: &str = "unknown";

/// Host identifier in the form `"<os>/<arch>"`, e.g. `linux/x86_64`.
pub fn platform() -> String {
    format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Immutable build metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Semantic version of the shim.
    pub version: String,
    /// Commit the binary was built from.
    pub git_commit: String,
    /// Date the binary was built.
    pub build_date: String,
    /// `rustc --version` of the compiler that built the binary.
    pub rust_version: String,
    /// `"<os>/<arch>"` of the running host.
    pub platform: String,
}

impl BuildInfo {
    /// Capture the metadata baked in at compile time.
    ///
    /// `SIGSHIM_GIT_COMMIT` and `SIGSHIM_BUILD_DATE` are read from the build
    /// environment; each defaults to `"unknown"`. The compiler version is
    /// recorded by the build script.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("SIGSHIM_GIT_COMMIT"),
            option_env!("SIGSHIM_BUILD_DATE"),
            option_env!("SIGSHIM_RUSTC_VERSION"),
        )
    }

    fn new(
        git_commit: Option<&str>,
        build_date: Option<&str>,
        rust_version: Option<&str>,
    ) -> Self {
        let or_unknown = |v: Option<&str>| {
            v.filter(|s| !s.trim().is_empty())
                .unwrap_or(UNKNOWN)
                .to_string()
        };
        Self {
            version: SHIM_VERSION.to_string(),
            git_commit: or_unknown(git_commit),
            build_date: or_unknown(build_date),
            rust_version: or_unknown(rust_version),
            platform: platform(),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Version:    {}", self.version)?;
        writeln!(f, "Git Commit: {}", self.git_commit)?;
        writeln!(f, "Build Date: {}", self.build_date)?;
        writeln!(f, "Rust:       {}", self.rust_version)?;
        write!(f, "Platform:   {}", self.platform)
    }
}
