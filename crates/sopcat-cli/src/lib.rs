#![deny(missing_docs)]

//! # sopcat-cli — CLI Tool for the SOPCAT Stack
//!
//! Provides the `sopcat` command-line interface: load a catalog bundle
//! from disk, then run the query layer against it.
//!
//! ## Subcommands
//!
//! - `sopcat list` — Filtered, paginated procedure listing (optionally
//!   grouped by category).
//! - `sopcat show` — Single procedure by id or sop_number.
//! - `sopcat categories` — Active categories.
//! - `sopcat stats` — The compliance statistics snapshot.
//!
//! The bundle path comes from `--bundle` or the `SOPCAT_BUNDLE`
//! environment variable.

pub mod commands;

use std::path::PathBuf;

use anyhow::Context;

/// Environment variable consulted when `--bundle` is not given.
pub const BUNDLE_ENV_VAR: &str = "SOPCAT_BUNDLE";

/// Resolve the catalog bundle path from the CLI argument or environment.
pub fn resolve_bundle_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    std::env::var_os(BUNDLE_ENV_VAR)
        .map(PathBuf::from)
        .context("no catalog bundle: pass --bundle <path> or set SOPCAT_BUNDLE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins() {
        let path = resolve_bundle_path(Some(PathBuf::from("/tmp/bundle.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/bundle.json"));
    }

    #[test]
    fn env_var_is_the_fallback() {
        std::env::set_var(BUNDLE_ENV_VAR, "/tmp/from-env.json");
        let path = resolve_bundle_path(None).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-env.json"));
        std::env::remove_var(BUNDLE_ENV_VAR);
    }
}
