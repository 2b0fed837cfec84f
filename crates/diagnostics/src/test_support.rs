// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the engine's test modules.

use crate::classify::BuiltIn;
use crate::probe::{BuiltInProbes, ProbeError, ProbeMethod, ProbeResult, VALIDATED_VIA};
use std::collections::BTreeMap;

/// Probe stub with one fixed outcome per built-in.
pub struct StaticProbes {
    pub filesystem: Result<bool, ProbeError>,
    pub documentation: Result<bool, ProbeError>,
    pub repository: Result<bool, ProbeError>,
}

impl StaticProbes {
    pub fn all_available() -> Self {
        Self {
            filesystem: Ok(true),
            documentation: Ok(true),
            repository: Ok(true),
        }
    }

    pub fn all_unavailable() -> Self {
        Self {
            filesystem: Ok(false),
            documentation: Ok(false),
            repository: Ok(false),
        }
    }
}

fn clone_outcome(outcome: &Result<bool, ProbeError>) -> Result<bool, ProbeError> {
    match outcome {
        Ok(value) => Ok(*value),
        Err(ProbeError::Timeout) => Err(ProbeError::Timeout),
        Err(other) => Err(ProbeError::Host(other.to_string())),
    }
}

impl BuiltInProbes for StaticProbes {
    async fn test_filesystem(&self) -> Result<bool, ProbeError> {
        clone_outcome(&self.filesystem)
    }

    async fn test_documentation_lookup(&self) -> Result<bool, ProbeError> {
        clone_outcome(&self.documentation)
    }

    async fn test_repository_access(&self) -> Result<bool, ProbeError> {
        clone_outcome(&self.repository)
    }
}

/// Probe result map with fixed successes, bypassing the async fan-out.
pub fn probe_map(fs: bool, docs: bool, repo: bool) -> BTreeMap<BuiltIn, ProbeResult> {
    let result = |tool: BuiltIn, success: bool| ProbeResult {
        tool,
        method: ProbeMethod::for_tool(tool),
        success,
        validated_via: VALIDATED_VIA,
        checked_mcp_config: false,
    };
    BTreeMap::from([
        (BuiltIn::Filesystem, result(BuiltIn::Filesystem, fs)),
        (BuiltIn::Context7, result(BuiltIn::Context7, docs)),
        (BuiltIn::Github, result(BuiltIn::Github, repo)),
    ])
}
