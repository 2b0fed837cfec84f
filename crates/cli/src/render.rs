// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of an analysis result.
//!
//! One section per engine stage: built-in features, MCP servers, the
//! capability scoreboard, troubleshooting steps, migration guidance, and
//! the standing architecture explanation.

use quickstart_diagnostics::{AnalysisResult, ConfigStatus, Severity, CONFIG_FILE_NAME};
use std::io::{self, Write};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Status tag at the start of a line, colored when enabled.
fn tag(label: &str, color_code: &str, color: bool) -> String {
    if color {
        format!("{color_code}[{label}]{RESET}")
    } else {
        format!("[{label}]")
    }
}

fn ok_tag(color: bool) -> String {
    tag("OK", GREEN, color)
}

fn fail_tag(color: bool) -> String {
    tag("FAIL", RED, color)
}

fn warn_tag(color: bool) -> String {
    tag("WARN", YELLOW, color)
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::High => "high",
        Severity::Medium => "medium",
        Severity::Low => "low",
    }
}

/// Render the full human-readable report.
pub fn render_text<W: Write>(
    writer: &mut W,
    analysis: &AnalysisResult,
    color: bool,
) -> io::Result<()> {
    writeln!(writer, "MCP Quickstart setup verification")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer)?;

    writeln!(writer, "Built-in features (direct tool tests):")?;
    for probe in &analysis.built_in_features {
        let status = if probe.success {
            ok_tag(color)
        } else {
            fail_tag(color)
        };
        writeln!(writer, "  {status} {}", probe.tool)?;
    }
    writeln!(writer)?;

    render_servers(writer, analysis, color)?;

    let summary = &analysis.capability_summary;
    writeln!(
        writer,
        "Capabilities: {}/{} enabled",
        summary.enabled_capabilities, summary.total_capabilities
    )?;
    writeln!(writer)?;

    if !analysis.failures.is_empty() {
        writeln!(writer, "Troubleshooting:")?;
        for (index, failure) in analysis.failures.iter().enumerate() {
            writeln!(
                writer,
                "  {}. {} ({})",
                index + 1,
                failure.title,
                severity_label(failure.severity)
            )?;
            for action in &failure.resolution {
                writeln!(writer, "     - {action}")?;
            }
        }
        writeln!(writer)?;
    }

    let migration = &analysis.troubleshooting.migration_guidance;
    if !migration.is_empty() {
        writeln!(writer, "Migration guidance:")?;
        for (server, guidance) in migration {
            writeln!(writer, "  {} '{server}': {guidance}", warn_tag(color))?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "How capabilities are wired:")?;
    writeln!(
        writer,
        "  {}",
        analysis.troubleshooting.architecture_explanation
    )?;
    writeln!(writer)?;

    writeln!(writer, "{}", analysis.troubleshooting.message)?;
    Ok(())
}

fn render_servers<W: Write>(
    writer: &mut W,
    analysis: &AnalysisResult,
    color: bool,
) -> io::Result<()> {
    writeln!(writer, "MCP servers ({CONFIG_FILE_NAME}):")?;
    match &analysis.config {
        ConfigStatus::Missing => {
            writeln!(writer, "  no configuration file found")?;
        }
        ConfigStatus::Malformed(detail) => {
            writeln!(writer, "  {} configuration unreadable: {detail}", fail_tag(color))?;
        }
        ConfigStatus::Loaded if analysis.mcp_servers.is_empty()
            && analysis.classification.skipped_servers.is_empty() =>
        {
            writeln!(writer, "  no servers configured")?;
        }
        ConfigStatus::Loaded => {
            for server in &analysis.mcp_servers {
                match &server.issue {
                    None => {
                        let command = server.command.as_deref().unwrap_or("");
                        let line = std::iter::once(command)
                            .chain(server.args.iter().map(String::as_str))
                            .collect::<Vec<_>>()
                            .join(" ");
                        writeln!(writer, "  {} {} ({})", ok_tag(color), server.name, line)?;
                    }
                    Some(issue) => {
                        writeln!(
                            writer,
                            "  {} {}: {}",
                            fail_tag(color),
                            server.name,
                            issue.detail
                        )?;
                    }
                }
            }
            for skipped in &analysis.classification.skipped_servers {
                writeln!(
                    writer,
                    "  {} {skipped}: built-in declared as MCP server (see migration guidance)",
                    warn_tag(color)
                )?;
            }
        }
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
