// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host probe implementations for the three built-in capabilities.
//!
//! Each probe exercises the capability directly: a temp-file round trip for
//! filesystem access, and runtime availability checks for documentation
//! lookup (the node-based docs tooling) and repository access (git). Probes
//! own their timeout; the engine treats a timeout as capability unavailable.

use quickstart_diagnostics::{BuiltInProbes, ProbeError};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Environment override for hosts where the probe commands are not
/// provisioned (CI sandboxes): `available` or `unavailable` short-circuits
/// every probe.
pub const ASSUME_BUILT_INS_ENV: &str = "MCP_QUICKSTART_ASSUME_BUILT_INS";

const PROBE_PAYLOAD: &[u8] = b"mcp-quickstart filesystem probe";

/// Probes backed by the real host environment.
pub struct HostProbes {
    probe_timeout: Duration,
}

impl HostProbes {
    pub fn new(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }

    fn assumed_outcome() -> Option<bool> {
        Self::parse_assumed(&std::env::var(ASSUME_BUILT_INS_ENV).ok()?)
    }

    fn parse_assumed(value: &str) -> Option<bool> {
        match value {
            "available" => Some(true),
            "unavailable" => Some(false),
            _ => None,
        }
    }

    async fn with_timeout<F>(&self, check: F) -> Result<bool, ProbeError>
    where
        F: std::future::Future<Output = Result<bool, ProbeError>>,
    {
        if let Some(assumed) = Self::assumed_outcome() {
            return Ok(assumed);
        }
        match timeout(self.probe_timeout, check).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ProbeError::Timeout),
        }
    }
}

impl BuiltInProbes for HostProbes {
    async fn test_filesystem(&self) -> Result<bool, ProbeError> {
        self.with_timeout(file_round_trip()).await
    }

    async fn test_documentation_lookup(&self) -> Result<bool, ProbeError> {
        self.with_timeout(command_succeeds("node", &["--version"])).await
    }

    async fn test_repository_access(&self) -> Result<bool, ProbeError> {
        self.with_timeout(command_succeeds("git", &["--version"])).await
    }
}

/// Write, read back, and delete a scratch file.
async fn file_round_trip() -> Result<bool, ProbeError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("probe.txt");
    tokio::fs::write(&path, PROBE_PAYLOAD).await?;
    let read_back = tokio::fs::read(&path).await?;
    tokio::fs::remove_file(&path).await?;
    Ok(read_back == PROBE_PAYLOAD)
}

/// Run a command and report whether it exited successfully.
///
/// A missing binary is a failed capability check, not a probe error.
async fn command_succeeds(program: &str, args: &[&str]) -> Result<bool, ProbeError> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) => Ok(status.success()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ProbeError::Io(e)),
    }
}

#[cfg(test)]
#[path = "probes_tests.rs"]
mod tests;
