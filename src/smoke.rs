// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tier classification smoke checks
//!
//! Each check returns a [`CheckOutcome`] instead of aborting, so a run reports
//! every failing scenario at once. [`verify_specs`] re-derives the expected
//! tier from the raw inputs without going through [`crate::hardware::classify`],
//! which keeps it an independent check of the classifier.

use crate::error::{LumenError, Result};
use crate::hardware::{CapabilityProbe, HardwareSpecs, HardwareTier, StaticProbe};

/// Name of the check run against the machine's own probe.
pub const HOST_CHECK_NAME: &str = "host";

/// A fixed input and the tier it must classify as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub cpu_cores: usize,
    pub has_cuda: bool,
    pub gpu_name: Option<String>,
    pub expected: HardwareTier,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        cpu_cores: usize,
        has_cuda: bool,
        gpu_name: Option<&str>,
        expected: HardwareTier,
    ) -> Self {
        Self {
            name: name.into(),
            cpu_cores,
            has_cuda,
            gpu_name: gpu_name.map(str::to_string),
            expected,
        }
    }
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub message: String,
    /// Snapshot the check inspected; absent when probing failed
    pub specs: Option<HardwareSpecs>,
}

impl CheckOutcome {
    fn pass(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.into(),
            specs: None,
        }
    }

    fn fail(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.into(),
            specs: None,
        }
    }

    fn with_specs(mut self, specs: &HardwareSpecs) -> Self {
        self.specs = Some(specs.clone());
        self
    }
}

/// The scenarios every build must satisfy.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "gpu-low-cores",
            4,
            true,
            Some("RTX 4090"),
            HardwareTier::Tier1Rtx,
        ),
        Scenario::new("high-core-cpu", 16, false, None, HardwareTier::Tier2HighCpu),
        Scenario::new(
            "standard-cpu",
            8,
            false,
            None,
            HardwareTier::Tier3NormalCpu,
        ),
        Scenario::new(
            "threshold-12-cores",
            12,
            false,
            None,
            HardwareTier::Tier3NormalCpu,
        ),
    ]
}

/// Check that a snapshot's tier matches the branch its inputs take.
pub fn verify_specs(name: &str, specs: &HardwareSpecs) -> CheckOutcome {
    let (expected, pass_message) = if specs.has_cuda() {
        (HardwareTier::Tier1Rtx, "GPU detected, Tier 1 assigned.")
    } else if specs.cpu_cores() > 12 {
        (
            HardwareTier::Tier2HighCpu,
            "High Core CPU detected, Tier 2 assigned.",
        )
    } else {
        (
            HardwareTier::Tier3NormalCpu,
            "Standard CPU detected, Tier 3 assigned.",
        )
    };

    let outcome = if specs.tier() == expected {
        CheckOutcome::pass(name, pass_message)
    } else {
        CheckOutcome::fail(
            name,
            format!(
                "cuda={} cores={} expected {} but got {}",
                specs.has_cuda(),
                specs.cpu_cores(),
                expected.code(),
                specs.tier().code()
            ),
        )
    };
    outcome.with_specs(specs)
}

/// Probe a scenario through a [`StaticProbe`] and check its tier.
pub fn run_scenario(scenario: &Scenario) -> CheckOutcome {
    let probe = StaticProbe::new(
        scenario.cpu_cores,
        scenario.has_cuda,
        scenario.gpu_name.clone(),
    );
    check_probe(&scenario.name, &probe, Some(scenario.expected))
}

fn check_probe(
    name: &str,
    probe: &dyn CapabilityProbe,
    expected: Option<HardwareTier>,
) -> CheckOutcome {
    let specs = match probe.capabilities() {
        Ok(specs) => specs,
        Err(e) => return CheckOutcome::fail(name, format!("probe failed: {}", e)),
    };

    if let Some(expected) = expected {
        if specs.tier() != expected {
            return CheckOutcome::fail(
                name,
                format!(
                    "cuda={} cores={} expected {} but got {}",
                    specs.has_cuda(),
                    specs.cpu_cores(),
                    expected.code(),
                    specs.tier().code()
                ),
            )
            .with_specs(&specs);
        }
    }

    verify_specs(name, &specs)
}

/// A set of scenario checks plus an optional host check
#[derive(Default)]
pub struct SmokeSuite {
    scenarios: Vec<Scenario>,
    host: Option<Box<dyn CapabilityProbe>>,
}

impl SmokeSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suite preloaded with [`builtin_scenarios`].
    pub fn builtin() -> Self {
        Self::new().with_scenarios(builtin_scenarios())
    }

    pub fn with_scenarios(mut self, scenarios: impl IntoIterator<Item = Scenario>) -> Self {
        self.scenarios.extend(scenarios);
        self
    }

    /// Also verify whatever this probe reports for the running machine.
    pub fn with_host(mut self, probe: impl CapabilityProbe + 'static) -> Self {
        self.host = Some(Box::new(probe));
        self
    }

    /// Run every check; never stops at the first failure.
    pub fn run(&self) -> SmokeReport {
        let mut outcomes: Vec<CheckOutcome> = self.scenarios.iter().map(run_scenario).collect();

        if let Some(ref probe) = self.host {
            outcomes.push(check_probe(HOST_CHECK_NAME, &**probe, None));
        }

        let report = SmokeReport { outcomes };
        tracing::info!(
            passed = report.passed().count(),
            failed = report.failed().count(),
            "smoke suite finished"
        );
        report
    }
}

/// Aggregated outcomes of a smoke run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SmokeReport {
    pub fn passed(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Turn a report with failures into a single error naming each of them.
    pub fn into_result(self) -> Result<Self> {
        if self.all_passed() {
            return Ok(self);
        }

        let failures = self
            .failed()
            .map(|o| format!("{}: {}", o.name, o.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(LumenError::ClassificationMismatch(failures))
    }
}
