// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validation of external MCP server entries.

use crate::config::ServerEntry;
use serde::Serialize;
use serde_json::Value;

/// What is wrong with a server entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    MissingCommand,
    InvalidArgs,
    Other,
}

/// One structural problem with one external server entry.
///
/// At most one issue is recorded per server; the first violated rule wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub server: String,
    pub kind: IssueKind,
    pub detail: String,
}

fn issue(server: &str, kind: IssueKind, detail: String) -> Option<ValidationIssue> {
    Some(ValidationIssue {
        server: server.to_string(),
        kind,
        detail,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validate one external server entry.
///
/// Rules, in order: the entry must be an object; `command` must be a
/// non-empty string; `args`, when present, must be an array of strings;
/// `env`, when present, must be an object with string values.
pub fn validate_entry(name: &str, value: &Value) -> Option<ValidationIssue> {
    let entry = ServerEntry::new(value);

    if !entry.is_object() {
        return issue(
            name,
            IssueKind::Other,
            format!("server entry must be an object, found {}", json_type_name(value)),
        );
    }

    match entry.raw_command() {
        None => {
            return issue(
                name,
                IssueKind::MissingCommand,
                "no command configured".to_string(),
            )
        }
        Some(Value::String(command)) if command.trim().is_empty() => {
            return issue(name, IssueKind::MissingCommand, "command is empty".to_string())
        }
        Some(Value::String(_)) => {}
        Some(other) => {
            return issue(
                name,
                IssueKind::MissingCommand,
                format!("command must be a string, found {}", json_type_name(other)),
            )
        }
    }

    if let Some(args) = entry.raw_args() {
        match args.as_array() {
            None => {
                return issue(
                    name,
                    IssueKind::InvalidArgs,
                    format!("args must be an array, found {}", json_type_name(args)),
                )
            }
            Some(items) => {
                if let Some(position) = items.iter().position(|item| !item.is_string()) {
                    return issue(
                        name,
                        IssueKind::InvalidArgs,
                        format!(
                            "args[{}] must be a string, found {}",
                            position,
                            json_type_name(&items[position])
                        ),
                    );
                }
            }
        }
    }

    if let Some(env) = entry.raw_env() {
        match env.as_object() {
            None => {
                return issue(
                    name,
                    IssueKind::Other,
                    format!("env must be an object, found {}", json_type_name(env)),
                )
            }
            Some(map) => {
                if let Some((key, bad)) = map.iter().find(|(_, v)| !v.is_string()) {
                    return issue(
                        name,
                        IssueKind::Other,
                        format!("env.{} must be a string, found {}", key, json_type_name(bad)),
                    );
                }
            }
        }
    }

    None
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
