// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `verify` command: run one diagnostic pass and render it.

use crate::cli::{exit_codes, OutputFormat, VerifyArgs};
use crate::output_diagnostic::print_error;
use crate::paths::default_config_path;
use crate::probes::HostProbes;
use crate::render::render_text;
use quickstart_diagnostics::run_diagnostics;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

/// Run `verify` and return the process exit code.
pub async fn run_verify(args: VerifyArgs) -> i32 {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let probes = HostProbes::new(Duration::from_millis(args.probe_timeout_ms));

    let analysis = run_diagnostics(&config_path, &probes).await;

    let mut stdout = io::stdout().lock();
    let rendered = match args.output_format {
        OutputFormat::Json => match serde_json::to_string_pretty(&analysis) {
            Ok(json) => writeln!(stdout, "{json}"),
            Err(e) => {
                print_error(e);
                return exit_codes::ISSUES;
            }
        },
        OutputFormat::Text => {
            let color = !args.no_color && io::stdout().is_terminal();
            render_text(&mut stdout, &analysis, color)
        }
    };

    if let Err(e) = rendered {
        print_error(e);
        return exit_codes::ISSUES;
    }

    if analysis.is_healthy() {
        exit_codes::SUCCESS
    } else {
        exit_codes::ISSUES
    }
}
