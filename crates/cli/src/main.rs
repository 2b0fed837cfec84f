// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! MCP Quickstart verifier binary entry point.

use clap::Parser;

use mcp_quickstart::cli::{Cli, Command};
use mcp_quickstart::verify::run_verify;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Verify(args) => run_verify(args).await,
    };

    std::process::exit(exit_code);
}
