// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Setup diagnostics and capability validation engine for MCP Quickstart.
//!
//! The host application exposes two kinds of capabilities: features built
//! into the application itself (filesystem access, documentation lookup,
//! repository access) and pluggable MCP servers declared in a JSON
//! configuration file. This crate classifies configured entries as built-in
//! vs. external, probes built-ins directly instead of trusting the config,
//! validates external entries structurally, aggregates an enabled/total
//! capability scoreboard, detects a closed taxonomy of failures, and emits
//! ordered troubleshooting guidance, including migration guidance for
//! built-ins wrongly declared as external servers.
//!
//! The engine performs no terminal I/O and owns no process lifecycle: probes
//! are injected by the host, and the result is a plain data structure.

pub mod capability;
pub mod classify;
pub mod config;
pub mod engine;
pub mod failure;
pub mod probe;
pub mod report;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use capability::{
    aggregate, CapabilitySlot, CapabilitySummary, SlotKind, CAPABILITY_CATALOG,
    TOTAL_CAPABILITIES,
};
pub use classify::{built_in_for, classify, BuiltIn, Classification, BUILT_IN_ALIASES};
pub use config::{ConfigError, ConfigStatus, RawConfig, ServerEntry, CONFIG_FILE_NAME};
pub use engine::{run_diagnostics, AnalysisResult, ExternalServer};
pub use failure::{
    detect_failures, Failure, FailureContext, FailureKind, Severity, ToolType,
};
pub use probe::{
    probe_all, BuiltInProbes, ProbeError, ProbeMethod, ProbeResult, VALIDATED_VIA,
};
pub use report::{
    generate_report, TroubleshootingReport, TroubleshootingStep, ARCHITECTURE_EXPLANATION,
};
pub use validate::{validate_entry, IssueKind, ValidationIssue};
