// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-shot diagnostic pipeline.
//!
//! Composes loading, classification, validation, probing, aggregation,
//! failure detection, and report generation. Always returns a fully
//! populated [`AnalysisResult`]: a missing or malformed config degrades the
//! MCP half of the analysis, never the built-in half.

use crate::capability::{self, CapabilitySummary};
use crate::classify::{classify, Classification};
use crate::config::{self, ConfigStatus, RawConfig, ServerEntry};
use crate::failure::{detect_failures, Failure};
use crate::probe::{probe_all, BuiltInProbes, ProbeResult};
use crate::report::{generate_report, TroubleshootingReport};
use crate::validate::{validate_entry, ValidationIssue};
use serde::Serialize;
use std::path::Path;

/// One validated external server as it will be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalServer {
    pub name: String,
    pub command: Option<String>,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<ValidationIssue>,
}

/// Complete diagnostic output, consumed by the CLI `verify` command.
///
/// Every field is always populated so a caller can render guidance
/// unconditionally.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub config: ConfigStatus,
    pub classification: Classification,
    /// Probe result per built-in, in canonical order.
    pub built_in_features: Vec<ProbeResult>,
    /// Validated external entries, in name order.
    pub mcp_servers: Vec<ExternalServer>,
    pub capability_summary: CapabilitySummary,
    pub failures: Vec<Failure>,
    pub troubleshooting: TroubleshootingReport,
}

impl AnalysisResult {
    pub fn is_healthy(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run one complete diagnostic pass.
///
/// Never fails: config problems become a [`ConfigStatus::Malformed`] plus a
/// failure record, and probe errors become `success: false` results.
pub async fn run_diagnostics<P: BuiltInProbes>(config_path: &Path, probes: &P) -> AnalysisResult {
    let (status, raw) = match config::load(config_path) {
        Ok(raw) if !config_path.exists() => (ConfigStatus::Missing, raw),
        Ok(raw) => (ConfigStatus::Loaded, raw),
        Err(e) => (ConfigStatus::Malformed(e.to_string()), RawConfig::new()),
    };

    let probe_results = probe_all(probes).await;

    // A malformed file yields no classification and no per-server issues:
    // guessing server names out of unparseable JSON helps nobody.
    let (classification, issues, mcp_servers) = if status.is_malformed() {
        (Classification::default(), Vec::new(), Vec::new())
    } else {
        let classification = classify(&raw);
        let mut issues = Vec::new();
        let mut servers = Vec::new();
        for name in &classification.validated_servers {
            let Some(value) = raw.get(name) else { continue };
            let issue = validate_entry(name, value);
            let entry = ServerEntry::new(value);
            servers.push(ExternalServer {
                name: name.clone(),
                command: entry.command().map(str::to_string),
                args: entry.args(),
                issue: issue.clone(),
            });
            if let Some(issue) = issue {
                issues.push(issue);
            }
        }
        (classification, issues, servers)
    };

    let capability_summary = capability::aggregate(&classification, &issues, &probe_results);
    let failures = detect_failures(&status, &classification, &issues, &probe_results);
    let troubleshooting = generate_report(&failures, &probe_results, &classification);

    AnalysisResult {
        config: status,
        classification,
        built_in_features: probe_results.into_values().collect(),
        mcp_servers,
        capability_summary,
        failures,
        troubleshooting,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
