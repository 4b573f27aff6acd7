// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware probe command and the `hardware-info` signaling payload

use serde::Serialize;

use crate::cli::args::{OutputFormat, ProbeArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::{CapabilityProbe, HardwareSpecs, OverriddenProbe, TARGET_CAPTURE_FPS};

/// Signaling event that carries a [`HardwareInfo`] payload.
pub const HARDWARE_INFO_EVENT: &str = "hardware-info";

/// Payload a peer sends to the signaling server after probing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareInfo {
    pub event: &'static str,
    pub room_id: String,
    pub specs: SpecsView,
    pub processing_profile: String,
    pub capture_fps: u32,
    pub detected_at: String,
}

/// Display-oriented view of a [`HardwareSpecs`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecsView {
    pub tier: String,
    pub tier_code: String,
    pub cpu_cores: usize,
    pub has_cuda: bool,
    pub gpu_name: Option<String>,
}

impl HardwareInfo {
    pub fn new(room_id: impl Into<String>, specs: &HardwareSpecs, detected_at: String) -> Self {
        let tier = specs.tier();
        Self {
            event: HARDWARE_INFO_EVENT,
            room_id: room_id.into(),
            specs: SpecsView {
                tier: tier.label().to_string(),
                tier_code: tier.code().to_string(),
                cpu_cores: specs.cpu_cores(),
                has_cuda: specs.has_cuda(),
                gpu_name: specs.gpu_name().map(str::to_string),
            },
            processing_profile: tier.processing_profile().name().to_string(),
            capture_fps: TARGET_CAPTURE_FPS,
            detected_at,
        }
    }
}

/// Text report for a probed machine.
pub fn render_text(specs: &HardwareSpecs) -> String {
    let mut out = String::new();
    out.push_str(&format!("Detected Hardware Cores: {}\n", specs.cpu_cores()));
    out.push_str(&format!(
        "Detected CUDA: {}\n",
        if specs.has_cuda() { "Yes" } else { "No" }
    ));
    if let Some(name) = specs.gpu_name() {
        out.push_str(&format!("GPU Name: {}\n", name));
    }
    out.push_str(&format!("Assigned Tier: {}\n", specs.tier()));
    out.push_str(&format!(
        "Processing Profile: {}\n",
        specs.tier().processing_profile()
    ));
    out
}

/// Execute the probe command
pub fn execute(args: &ProbeArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let probe = OverriddenProbe::new(settings.host_probe(), args.overrides.to_overrides());
    let specs = probe.capabilities()?;
    tracing::info!(tier = specs.tier().code(), "hardware probed");

    match format {
        OutputFormat::Json => {
            let room_id = args
                .room
                .clone()
                .unwrap_or_else(|| settings.signaling.room_id.clone());
            let info = HardwareInfo::new(room_id, &specs, chrono::Utc::now().to_rfc3339());
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Text => {
            println!("Probing Hardware...");
            print!("{}", render_text(&specs));
        }
    }

    Ok(())
}
