// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closed failure taxonomy over aggregated diagnostic state.
//!
//! Failures carry a fixed severity and enough context for the report
//! generator to pick the right guidance surface: built-in failures point at
//! host Settings, MCP failures at the configuration file.

use crate::classify::{BuiltIn, Classification};
use crate::config::{ConfigStatus, CONFIG_FILE_NAME};
use crate::probe::ProbeResult;
use crate::validate::ValidationIssue;
use serde::Serialize;
use std::collections::BTreeMap;

/// The closed failure taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    FilesystemNotAvailable,
    Context7NotAvailable,
    GithubNotAvailable,
    ConfigMalformed,
    McpServerNotRunning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Which kind of capability a failure concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ToolType {
    #[serde(rename = "built-in")]
    BuiltIn,
    #[serde(rename = "mcp")]
    Mcp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureContext {
    pub tool_type: ToolType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
}

/// One user-facing diagnostic failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    #[serde(rename = "type")]
    pub kind: FailureKind,
    pub severity: Severity,
    pub context: FailureContext,
    pub title: String,
    pub description: String,
    pub resolution: Vec<String>,
}

/// Map aggregated state into the ordered failure list.
///
/// Order is fixed so two runs over the same input emit identical reports:
/// built-in failures first (filesystem, context7, github), then a malformed
/// config, then MCP failures by server name ascending.
pub fn detect_failures(
    config: &ConfigStatus,
    _classification: &Classification,
    issues: &[ValidationIssue],
    probe_results: &BTreeMap<BuiltIn, ProbeResult>,
) -> Vec<Failure> {
    let mut failures = Vec::new();

    for tool in BuiltIn::ALL {
        let available = probe_results.get(&tool).is_some_and(|p| p.success);
        if !available {
            failures.push(built_in_failure(tool));
        }
    }

    if let ConfigStatus::Malformed(detail) = config {
        failures.push(config_malformed_failure(detail));
    }

    let mut sorted_issues: Vec<&ValidationIssue> = issues.iter().collect();
    sorted_issues.sort_by_key(|issue| issue.server.as_str());
    for issue in sorted_issues {
        failures.push(mcp_server_failure(issue));
    }

    failures
}

fn built_in_failure(tool: BuiltIn) -> Failure {
    let (kind, severity) = match tool {
        BuiltIn::Filesystem => (FailureKind::FilesystemNotAvailable, Severity::Critical),
        BuiltIn::Context7 => (FailureKind::Context7NotAvailable, Severity::High),
        BuiltIn::Github => (FailureKind::GithubNotAvailable, Severity::High),
    };

    let resolution = match tool {
        BuiltIn::Filesystem => vec![
            "Open Settings → Extensions and enable the Filesystem extension".to_string(),
            "Grant access to the folders the assistant should read and write".to_string(),
            "Restart the application and run verify again".to_string(),
        ],
        BuiltIn::Context7 => vec![
            "Open Settings → Extensions and enable the Context7 extension".to_string(),
            "Confirm the application can reach the documentation index".to_string(),
            "Restart the application and run verify again".to_string(),
        ],
        BuiltIn::Github => vec![
            "Open Settings → Connectors and connect your GitHub account".to_string(),
            "Re-authorize the connector if the token has expired".to_string(),
            "Restart the application and run verify again".to_string(),
        ],
    };

    Failure {
        kind,
        severity,
        context: FailureContext {
            tool_type: ToolType::BuiltIn,
            server_name: None,
        },
        title: format!("{} is not available", tool.label()),
        description: format!(
            "The direct {} test failed. This capability is built into the \
             application and is configured under {}, not in the MCP \
             configuration file.",
            match tool {
                BuiltIn::Filesystem => "file operation",
                BuiltIn::Context7 => "documentation lookup",
                BuiltIn::Github => "repository access",
            },
            tool.settings_surface(),
        ),
        resolution,
    }
}

fn config_malformed_failure(detail: &str) -> Failure {
    Failure {
        kind: FailureKind::ConfigMalformed,
        severity: Severity::Critical,
        context: FailureContext {
            tool_type: ToolType::Mcp,
            server_name: None,
        },
        title: format!("{} could not be parsed", CONFIG_FILE_NAME),
        description: format!(
            "MCP server validation was skipped because the configuration \
             file is not valid: {detail}. Built-in capabilities were still \
             probed directly."
        ),
        resolution: vec![
            format!("Check {CONFIG_FILE_NAME} for JSON syntax errors"),
            "Confirm the file is a single object with an optional mcpServers mapping"
                .to_string(),
            "Restore the most recent config backup if one exists".to_string(),
        ],
    }
}

fn mcp_server_failure(issue: &ValidationIssue) -> Failure {
    Failure {
        kind: FailureKind::McpServerNotRunning,
        severity: Severity::High,
        context: FailureContext {
            tool_type: ToolType::Mcp,
            server_name: Some(issue.server.clone()),
        },
        title: format!("MCP server '{}' cannot start", issue.server),
        description: format!(
            "The entry for '{}' in {} is incomplete: {}.",
            issue.server, CONFIG_FILE_NAME, issue.detail
        ),
        resolution: vec![
            format!(
                "Fix the '{}' entry in {}: it needs a command string and an \
                 args array of strings",
                issue.server, CONFIG_FILE_NAME
            ),
            "Run the configured command manually to confirm the server process starts"
                .to_string(),
            "Check the host log files for startup errors from this server".to_string(),
        ],
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
