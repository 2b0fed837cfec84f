// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use quickstart_diagnostics::{run_diagnostics, AnalysisResult, BuiltInProbes, ProbeError};

struct FixedProbes {
    filesystem: bool,
    documentation: bool,
    repository: bool,
}

impl FixedProbes {
    fn all_up() -> Self {
        Self {
            filesystem: true,
            documentation: true,
            repository: true,
        }
    }
}

impl BuiltInProbes for FixedProbes {
    async fn test_filesystem(&self) -> Result<bool, ProbeError> {
        Ok(self.filesystem)
    }

    async fn test_documentation_lookup(&self) -> Result<bool, ProbeError> {
        Ok(self.documentation)
    }

    async fn test_repository_access(&self) -> Result<bool, ProbeError> {
        Ok(self.repository)
    }
}

async fn analyze(config: Option<&str>, probes: FixedProbes) -> AnalysisResult {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("claude_desktop_config.json");
    if let Some(content) = config {
        std::fs::write(&path, content).unwrap();
    }
    run_diagnostics(&path, &probes).await
}

fn rendered(analysis: &AnalysisResult, color: bool) -> String {
    let mut buf = Vec::new();
    render_text(&mut buf, analysis, color).unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_healthy_setup_renders_ok_lines() {
    let config = r#"{"mcpServers": {"memory": {"command": "npx",
        "args": ["-y", "@modelcontextprotocol/server-memory"]}}}"#;
    let analysis = analyze(Some(config), FixedProbes::all_up()).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("[OK] filesystem"));
    assert!(out.contains("[OK] context7"));
    assert!(out.contains("[OK] github"));
    assert!(out.contains("[OK] memory (npx -y @modelcontextprotocol/server-memory)"));
    assert!(out.contains("Capabilities: 4/10 enabled"));
    assert!(out.contains("Setup verified"));
    assert!(!out.contains("Troubleshooting:"));
}

#[tokio::test]
async fn test_failed_probe_renders_fail_tag() {
    let probes = FixedProbes {
        filesystem: true,
        documentation: false,
        repository: true,
    };
    let analysis = analyze(Some("{}"), probes).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("[FAIL] context7"));
    assert!(out.contains("Troubleshooting:"));
    assert!(out.contains("  1. "));
}

#[tokio::test]
async fn test_missing_config_notes_absent_file() {
    let analysis = analyze(None, FixedProbes::all_up()).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("no configuration file found"));
}

#[tokio::test]
async fn test_malformed_config_renders_parse_detail() {
    let analysis = analyze(Some("{not json"), FixedProbes::all_up()).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("configuration unreadable"));
    assert!(out.contains("Troubleshooting:"));
}

#[tokio::test]
async fn test_empty_server_table_renders_placeholder() {
    let analysis = analyze(Some(r#"{"mcpServers": {}}"#), FixedProbes::all_up()).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("no servers configured"));
}

#[tokio::test]
async fn test_skipped_built_in_renders_warning_and_migration() {
    let config = r#"{"mcpServers": {"filesystem": {"command": "npx"}}}"#;
    let analysis = analyze(Some(config), FixedProbes::all_up()).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("[WARN] filesystem: built-in declared as MCP server"));
    assert!(out.contains("Migration guidance:"));
    assert!(out.contains("Settings → Extensions"));
}

#[tokio::test]
async fn test_invalid_server_renders_fail_with_detail() {
    let config = r#"{"mcpServers": {"memory": {"args": []}}}"#;
    let analysis = analyze(Some(config), FixedProbes::all_up()).await;
    let out = rendered(&analysis, false);

    assert!(out.contains("[FAIL] memory:"));
    assert!(out.contains("Troubleshooting:"));
}

#[tokio::test]
async fn test_architecture_section_always_present() {
    let healthy = analyze(Some("{}"), FixedProbes::all_up()).await;
    let missing = analyze(None, FixedProbes::all_up()).await;

    for analysis in [&healthy, &missing] {
        let out = rendered(analysis, false);
        assert!(out.contains("How capabilities are wired:"));
        assert!(out.contains("Settings → Extensions"));
    }
}

#[tokio::test]
async fn test_color_flag_controls_escape_codes() {
    let analysis = analyze(Some("{}"), FixedProbes::all_up()).await;

    assert!(!rendered(&analysis, false).contains("\x1b["));
    assert!(rendered(&analysis, true).contains("\x1b[32m[OK]\x1b[0m"));
}
