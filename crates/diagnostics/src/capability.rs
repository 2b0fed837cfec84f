// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capability scoreboard aggregation.
//!
//! Merges probe and validation outcomes into the fixed enabled/total
//! scoreboard shown to the user in place of a percentage.

use crate::classify::{BuiltIn, Classification};
use crate::probe::ProbeResult;
use crate::validate::ValidationIssue;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Whether a capability slot is served natively or by an external server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    BuiltIn,
    Mcp,
}

/// Fixed capability catalog: the three built-ins plus the representative
/// MCP servers the quickstart provisions.
///
/// Versioned with the crate; any change to membership or order is a
/// breaking change for stored expectations.
pub const CAPABILITY_CATALOG: [(&str, SlotKind); 10] = [
    ("filesystem", SlotKind::BuiltIn),
    ("context7", SlotKind::BuiltIn),
    ("github", SlotKind::BuiltIn),
    ("memory", SlotKind::Mcp),
    ("brave-search", SlotKind::Mcp),
    ("sqlite", SlotKind::Mcp),
    ("puppeteer", SlotKind::Mcp),
    ("postgres", SlotKind::Mcp),
    ("slack", SlotKind::Mcp),
    ("fetch", SlotKind::Mcp),
];

/// Size of the fixed capability universe.
pub const TOTAL_CAPABILITIES: usize = CAPABILITY_CATALOG.len();

/// One slot of the capability catalog with its current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySlot {
    pub id: &'static str,
    pub kind: SlotKind,
    pub enabled: bool,
}

/// The enabled/total scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySummary {
    pub enabled_capabilities: usize,
    pub total_capabilities: usize,
    /// All catalog slots in fixed order, independent of config key order.
    pub mcp_capabilities: Vec<CapabilitySlot>,
}

/// Merge probe and validation outcomes into the scoreboard.
///
/// Enabled = successful probes + validated external servers without an
/// issue, clamped to the catalog size so the invariant
/// `enabled <= total` holds even for configs larger than the catalog.
pub fn aggregate(
    classification: &Classification,
    issues: &[ValidationIssue],
    probe_results: &BTreeMap<BuiltIn, ProbeResult>,
) -> CapabilitySummary {
    let servers_with_issues: BTreeSet<&str> =
        issues.iter().map(|issue| issue.server.as_str()).collect();
    let clean_servers: Vec<&str> = classification
        .validated_servers
        .iter()
        .filter(|name| !servers_with_issues.contains(name.as_str()))
        .map(String::as_str)
        .collect();
    // Catalog slots match case-insensitively, but the count stays over the
    // distinct configured names: "Memory" and "memory" are two entries.
    let normalized_clean: BTreeSet<String> = clean_servers
        .iter()
        .map(|name| name.trim().to_ascii_lowercase())
        .collect();

    let successful_probes = probe_results.values().filter(|p| p.success).count();
    let enabled_capabilities =
        (successful_probes + clean_servers.len()).min(TOTAL_CAPABILITIES);

    let mcp_capabilities = CAPABILITY_CATALOG
        .iter()
        .map(|&(id, kind)| CapabilitySlot {
            id,
            kind,
            enabled: match kind {
                SlotKind::BuiltIn => BuiltIn::ALL
                    .iter()
                    .find(|tool| tool.as_str() == id)
                    .and_then(|tool| probe_results.get(tool))
                    .is_some_and(|p| p.success),
                SlotKind::Mcp => normalized_clean.contains(id),
            },
        })
        .collect();

    CapabilitySummary {
        enabled_capabilities,
        total_capabilities: TOTAL_CAPABILITIES,
        mcp_capabilities,
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
