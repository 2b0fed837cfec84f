// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host configuration file loading.
//!
//! Reads the `claude_desktop_config.json` shape: a single object with an
//! optional `mcpServers` mapping. Server entries are kept loosely typed so
//! that one structurally broken entry surfaces later as a per-server
//! validation issue instead of failing the whole file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Well-known name of the host configuration file. Guidance text refers to
/// the file by this name; the full path is resolved by the host.
pub const CONFIG_FILE_NAME: &str = "claude_desktop_config.json";

/// Declared servers by name, exactly as found in the file.
///
/// A sorted map so every downstream iteration is independent of the key
/// order in the configuration file.
pub type RawConfig = BTreeMap<String, serde_json::Value>;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    #[serde(default)]
    mcp_servers: RawConfig,
}

/// Errors that can occur when loading the host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {0}: {1}")]
    Io(String, String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Outcome of config loading, carried in the analysis result so a caller
/// can render guidance even when the file was unusable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "detail")]
pub enum ConfigStatus {
    /// File existed and parsed as a single object.
    Loaded,
    /// No file at the resolved path. Not an error: built-in probing must
    /// proceed regardless.
    Missing,
    /// File existed but could not be read or parsed.
    Malformed(String),
}

impl ConfigStatus {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConfigStatus::Malformed(_))
    }
}

/// Load the configuration file. A missing file yields an empty mapping.
pub fn load(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.exists() {
        return Ok(RawConfig::new());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
    parse(&content)
}

/// Parse configuration content.
///
/// Tries JSON5 first (the host tolerates comments and trailing commas),
/// falling back to strict JSON.
pub fn parse(content: &str) -> Result<RawConfig, ConfigError> {
    let doc: ConfigDocument = json5::from_str(content)
        .or_else(|_| serde_json::from_str(content))
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(doc.mcp_servers)
}

/// Read-only accessors over a raw server entry value.
#[derive(Clone, Copy, Debug)]
pub struct ServerEntry<'a> {
    value: &'a serde_json::Value,
}

impl<'a> ServerEntry<'a> {
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    /// The configured command, when it is a string.
    pub fn command(&self) -> Option<&'a str> {
        self.value.get("command")?.as_str()
    }

    /// The raw `command` member, whatever its type.
    pub fn raw_command(&self) -> Option<&'a serde_json::Value> {
        self.value.get("command")
    }

    /// The raw `args` member, whatever its type.
    pub fn raw_args(&self) -> Option<&'a serde_json::Value> {
        self.value.get("args")
    }

    /// The raw `env` member, whatever its type.
    pub fn raw_env(&self) -> Option<&'a serde_json::Value> {
        self.value.get("env")
    }

    /// Argument strings, in declared order. Non-string elements are dropped;
    /// the validator reports them separately.
    pub fn args(&self) -> Vec<String> {
        match self.raw_args().and_then(|v| v.as_array()) {
            Some(items) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
