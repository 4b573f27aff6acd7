// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Smoke check command

use std::io::{self, IsTerminal};

use crossterm::style::Stylize;
use serde::Serialize;

use super::probe::render_text;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::{HardwareSpecs, OverriddenProbe};
use crate::smoke::{CheckOutcome, SmokeReport, SmokeSuite, HOST_CHECK_NAME};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckJson<'a> {
    name: &'a str,
    passed: bool,
    message: &'a str,
    specs: Option<&'a HardwareSpecs>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportJson<'a> {
    all_passed: bool,
    checks: Vec<CheckJson<'a>>,
}

fn report_json(report: &SmokeReport) -> ReportJson<'_> {
    ReportJson {
        all_passed: report.all_passed(),
        checks: report
            .outcomes
            .iter()
            .map(|o| CheckJson {
                name: &o.name,
                passed: o.passed,
                message: &o.message,
                specs: o.specs.as_ref(),
            })
            .collect(),
    }
}

/// `[PASS] name: message` / `[FAIL] name: message`
pub fn outcome_line(outcome: &CheckOutcome) -> String {
    format!(
        "[{}] {}: {}",
        if outcome.passed { "PASS" } else { "FAIL" },
        outcome.name,
        outcome.message
    )
}

/// Text report: the host's detected specs ahead of its verdict, one line per
/// check, then totals. ANSI colour only when `colour` is set.
pub fn render_report(report: &SmokeReport, colour: bool) -> String {
    let mut out = String::from("Running Hardware Probe Test...\n");

    for outcome in &report.outcomes {
        if outcome.name == HOST_CHECK_NAME {
            if let Some(ref specs) = outcome.specs {
                out.push_str(&render_text(specs));
            }
        }

        let line = outcome_line(outcome);
        let line = match (colour, outcome.passed) {
            (false, _) => line,
            (true, true) => line.green().to_string(),
            (true, false) => line.red().to_string(),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} passed, {} failed\n",
        report.passed().count(),
        report.failed().count()
    ));
    out
}

/// Execute the check command. Fails when any check fails.
pub fn execute(args: &CheckArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let mut suite = SmokeSuite::builtin();
    if !args.skip_host {
        suite = suite.with_host(OverriddenProbe::new(
            settings.host_probe(),
            args.overrides.to_overrides(),
        ));
    }

    let report = suite.run();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
        }
        OutputFormat::Text => {
            print!("{}", render_report(&report, io::stdout().is_terminal()));
        }
    }

    report.into_result().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{HardwareTier, StaticProbe};
    use crate::smoke::Scenario;

    #[test]
    fn test_outcome_line_pass() {
        let outcome = CheckOutcome {
            name: "standard-cpu".to_string(),
            passed: true,
            message: "Standard CPU detected, Tier 3 assigned.".to_string(),
            specs: None,
        };
        assert_eq!(
            outcome_line(&outcome),
            "[PASS] standard-cpu: Standard CPU detected, Tier 3 assigned."
        );
    }

    #[test]
    fn test_outcome_line_fail() {
        let outcome = CheckOutcome {
            name: "host".to_string(),
            passed: false,
            message: "probe failed".to_string(),
            specs: None,
        };
        assert!(outcome_line(&outcome).starts_with("[FAIL] host"));
    }

    #[test]
    fn test_render_report_shows_host_specs_before_verdict() {
        let report = SmokeSuite::builtin()
            .with_host(StaticProbe::new(4, true, Some("RTX 4090".to_string())))
            .run();
        let text = render_report(&report, false);

        let cores = text
            .find("Detected Hardware Cores: 4")
            .expect("host cores shown");
        assert!(text.contains("Detected CUDA: Yes"));
        assert!(text.contains("GPU Name: RTX 4090"));
        assert!(text.contains("Assigned Tier: Tier 1: RTX GPU (Maxine/TensorRT)"));
        let verdict = text
            .find("[PASS] host: GPU detected, Tier 1 assigned.")
            .expect("host verdict shown");
        assert!(cores < verdict);
        assert!(text.contains("5 passed, 0 failed"));
    }

    #[test]
    fn test_render_report_scenarios_only_has_no_specs_block() {
        let text = render_report(&SmokeSuite::builtin().run(), false);
        assert!(!text.contains("Detected Hardware Cores"));
        assert_eq!(text.matches("[PASS]").count(), 4);
    }

    #[test]
    fn test_render_report_plain_has_no_escape_codes() {
        let report = SmokeSuite::builtin()
            .with_host(StaticProbe::new(8, false, None))
            .run();
        assert!(!render_report(&report, false).contains('\u{1b}'));
        assert!(render_report(&report, true).contains('\u{1b}'));
    }

    #[test]
    fn test_report_json_shape() {
        let report = SmokeSuite::new()
            .with_scenarios(vec![
                Scenario::new("ok", 8, false, None, HardwareTier::Tier3NormalCpu),
                Scenario::new("bad", 8, false, None, HardwareTier::Tier2HighCpu),
            ])
            .run();
        let json = serde_json::to_string(&report_json(&report)).unwrap();
        assert!(json.contains("\"allPassed\":false"));
        assert!(json.contains("\"name\":\"ok\""));
        assert!(json.contains("\"passed\":false"));
        assert!(json.contains("\"cpuCores\":8"));
    }

    #[test]
    fn test_execute_builtin_only_succeeds() {
        let args = CheckArgs {
            skip_host: true,
            ..Default::default()
        };
        assert!(execute(&args, OutputFormat::Json, &Settings::default()).is_ok());
    }
}
