// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Troubleshooting report generation from structured failures.
//!
//! Rendering prose lives here and nowhere else; detection stays a pure
//! function over strings and structures so both sides can be tested without
//! matching on each other's wording.

use crate::classify::{BuiltIn, Classification};
use crate::config::CONFIG_FILE_NAME;
use crate::failure::Failure;
use crate::probe::ProbeResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Standing explanation of the built-in vs. MCP split, emitted on every
/// report whether the setup is healthy or not.
pub const ARCHITECTURE_EXPLANATION: &str = "Filesystem access, documentation lookup \
(context7), and GitHub access are built into the application. They are switched on \
under Settings → Extensions and Settings → Connectors and are verified by direct \
tool tests, never by reading the MCP configuration file. An MCP server, by \
contrast, is a separate process declared under mcpServers in \
claude_desktop_config.json and launched alongside the application. Declaring a \
built-in capability as an MCP server does nothing except hide the real switch.";

/// One ordered, human-actionable troubleshooting step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingStep {
    pub title: String,
    pub actions: Vec<String>,
}

/// The full guidance block of an analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingReport {
    /// One step per failure, in failure order.
    pub steps: Vec<TroubleshootingStep>,
    /// Overall state line; states the healthy case explicitly.
    pub message: String,
    pub architecture_explanation: String,
    /// Per built-in pointer at the correct Settings surface, always present.
    pub setup_guidance: BTreeMap<String, String>,
    /// Per skipped server: how to move a misdeclared built-in out of the
    /// config file. Emitted even when no failure exists for that server.
    pub migration_guidance: BTreeMap<String, String>,
}

/// Build the report for a set of detected failures.
pub fn generate_report(
    failures: &[Failure],
    probe_results: &BTreeMap<BuiltIn, ProbeResult>,
    classification: &Classification,
) -> TroubleshootingReport {
    let steps = failures
        .iter()
        .map(|failure| TroubleshootingStep {
            title: failure.title.clone(),
            actions: failure.resolution.clone(),
        })
        .collect();

    let setup_guidance = BuiltIn::ALL
        .iter()
        .map(|tool| {
            (
                tool.as_str().to_string(),
                format!("{} is enabled under {}", tool.label(), tool.settings_surface()),
            )
        })
        .collect();

    let migration_guidance = classification
        .skipped_built_ins()
        .into_iter()
        .map(|(name, tool)| {
            (
                name.to_string(),
                format!(
                    "'{}' is a built-in capability, not an MCP server. Remove it \
                     from mcpServers in {} and enable {} under {} instead.",
                    name,
                    CONFIG_FILE_NAME,
                    tool.label(),
                    tool.settings_surface(),
                ),
            )
        })
        .collect();

    TroubleshootingReport {
        steps,
        message: message_for(failures, probe_results),
        architecture_explanation: ARCHITECTURE_EXPLANATION.to_string(),
        setup_guidance,
        migration_guidance,
    }
}

fn message_for(failures: &[Failure], probe_results: &BTreeMap<BuiltIn, ProbeResult>) -> String {
    let working = probe_results.values().filter(|p| p.success).count();
    if failures.is_empty() {
        format!(
            "Setup verified: all {working} built-in features (Extensions and \
             Connectors) are working and every configured MCP server entry is \
             structurally valid."
        )
    } else {
        format!(
            "{} issue(s) found. Built-in features are fixed under Settings \
             (Extensions or Connectors); MCP servers are fixed in {}.",
            failures.len(),
            CONFIG_FILE_NAME,
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
