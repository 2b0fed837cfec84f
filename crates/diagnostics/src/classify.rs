// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in vs. external server classification.
//!
//! Built-in capabilities are configured through host Settings, never through
//! the MCP configuration file. When a config declares one anyway (a common
//! legacy misconfiguration), the entry is skipped from MCP validation so the
//! user gets migration guidance instead of a generic bad-server error.

use crate::config::RawConfig;
use serde::Serialize;
use std::collections::BTreeSet;

/// Canonical identifiers of capabilities built into the host application.
///
/// Variant order is the canonical report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltIn {
    Filesystem,
    Context7,
    Github,
}

impl BuiltIn {
    pub const ALL: [BuiltIn; 3] = [BuiltIn::Filesystem, BuiltIn::Context7, BuiltIn::Github];

    pub fn as_str(self) -> &'static str {
        match self {
            BuiltIn::Filesystem => "filesystem",
            BuiltIn::Context7 => "context7",
            BuiltIn::Github => "github",
        }
    }

    /// Human label used in report prose.
    pub fn label(self) -> &'static str {
        match self {
            BuiltIn::Filesystem => "Filesystem access",
            BuiltIn::Context7 => "Documentation lookup (context7)",
            BuiltIn::Github => "GitHub access",
        }
    }

    /// The Settings surface where this built-in is switched on.
    pub fn settings_surface(self) -> &'static str {
        match self {
            BuiltIn::Filesystem | BuiltIn::Context7 => "Settings → Extensions",
            BuiltIn::Github => "Settings → Connectors",
        }
    }
}

impl std::fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed alias table mapping recognized spellings to canonical built-ins.
///
/// Versioned with the crate: adding a spelling changes classification for
/// every configuration that uses it.
pub const BUILT_IN_ALIASES: &[(&str, BuiltIn)] = &[
    ("filesystem", BuiltIn::Filesystem),
    ("file", BuiltIn::Filesystem),
    ("fs", BuiltIn::Filesystem),
    ("files", BuiltIn::Filesystem),
    ("file-system", BuiltIn::Filesystem),
    ("context7", BuiltIn::Context7),
    ("context-7", BuiltIn::Context7),
    ("ctx7", BuiltIn::Context7),
    ("docs", BuiltIn::Context7),
    ("documentation", BuiltIn::Context7),
    ("github", BuiltIn::Github),
    ("gh", BuiltIn::Github),
    ("github.com", BuiltIn::Github),
];

/// Look up the canonical built-in for a configured server name.
///
/// Matching is case- and surrounding-whitespace-insensitive.
pub fn built_in_for(name: &str) -> Option<BuiltIn> {
    let normalized = name.trim().to_ascii_lowercase();
    BUILT_IN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, built_in)| *built_in)
}

/// Partition of the configured server names.
///
/// `validated_servers` and `skipped_servers` are disjoint and together cover
/// every key of the input configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// External servers subject to structural validation.
    pub validated_servers: BTreeSet<String>,
    /// Built-ins declared in the config; skipped from MCP validation.
    pub skipped_servers: BTreeSet<String>,
}

impl Classification {
    /// Skipped names paired with their canonical built-in, for migration
    /// guidance.
    pub fn skipped_built_ins(&self) -> Vec<(&str, BuiltIn)> {
        self.skipped_servers
            .iter()
            .filter_map(|name| built_in_for(name).map(|b| (name.as_str(), b)))
            .collect()
    }
}

/// Classify every configured server name.
///
/// Depends only on the key string and the static alias table, never on the
/// entry value: a malformed built-in entry is still skipped.
pub fn classify(config: &RawConfig) -> Classification {
    let mut result = Classification::default();
    for name in config.keys() {
        if built_in_for(name).is_some() {
            result.skipped_servers.insert(name.clone());
        } else {
            result.validated_servers.insert(name.clone());
        }
    }
    result
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
