// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform default location of the host configuration file.
//!
//! Resolution order: the `MCP_QUICKSTART_CONFIG` override is handled by the
//! CLI layer; this module only computes the platform default.

use quickstart_diagnostics::CONFIG_FILE_NAME;
use std::path::PathBuf;

/// Default `claude_desktop_config.json` location for the current platform.
///
/// macOS: `~/Library/Application Support/Claude/`;
/// Windows: `%APPDATA%\Claude\`;
/// elsewhere: `~/.config/claude/`.
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn config_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("Claude")
    } else if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(home_dir)
            .join("Claude")
    } else {
        home_dir().join(".config").join("claude")
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
