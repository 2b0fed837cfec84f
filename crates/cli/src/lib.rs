// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! MCP Quickstart verifier
//!
//! The `verify` command checks a host installation from two directions:
//! built-in capabilities (filesystem, documentation lookup, repository
//! access) are exercised with direct tool tests, while externally configured
//! MCP servers are validated structurally from `claude_desktop_config.json`.
//! The diagnostic engine itself lives in the `quickstart-diagnostics` crate;
//! this crate owns argument parsing, platform config-path resolution, the
//! concrete host probes, and rendering.

pub mod cli;
pub mod output_diagnostic;
pub mod paths;
pub mod probes;
pub mod render;
pub mod verify;
