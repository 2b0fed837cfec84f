// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the quickstart verifier.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// MCP Quickstart verifier
#[derive(Parser, Debug)]
#[command(
    name = "mcp-quickstart",
    version,
    about = "Diagnose built-in capabilities and MCP server configuration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probe built-in capabilities and validate configured MCP servers
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the host configuration file (defaults to the platform location)
    #[arg(long, env = "MCP_QUICKSTART_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Per-probe timeout in milliseconds
    #[arg(
        long,
        env = "MCP_QUICKSTART_PROBE_TIMEOUT_MS",
        default_value_t = 5000,
        value_name = "MS"
    )]
    pub probe_timeout_ms: u64,

    /// Disable colored output even on a terminal
    #[arg(long)]
    pub no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Full analysis result as JSON
    Json,
}

/// Exit codes of the verifier.
pub mod exit_codes {
    /// No failures detected
    pub const SUCCESS: i32 = 0;
    /// One or more failures detected, or the report could not be written
    pub const ISSUES: i32 = 1;
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
