// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tier listing command

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::hardware::{
    HardwareTier, ProcessingProfile, HIGH_CPU_CORE_THRESHOLD, TARGET_CAPTURE_FPS,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierEntry {
    code: &'static str,
    label: &'static str,
    rule: String,
    uses_accelerator: bool,
    processing_profile: ProcessingProfile,
    capture_fps: u32,
}

fn rule(tier: HardwareTier) -> String {
    match tier {
        HardwareTier::Tier1Rtx => "CUDA accelerator present".to_string(),
        HardwareTier::Tier2HighCpu => {
            format!("no accelerator, more than {} cores", HIGH_CPU_CORE_THRESHOLD)
        }
        HardwareTier::Tier3NormalCpu => {
            format!("no accelerator, {} cores or fewer", HIGH_CPU_CORE_THRESHOLD)
        }
    }
}

fn entries() -> Vec<TierEntry> {
    HardwareTier::ALL
        .into_iter()
        .map(|tier| TierEntry {
            code: tier.code(),
            label: tier.label(),
            rule: rule(tier),
            uses_accelerator: tier.uses_accelerator(),
            processing_profile: tier.processing_profile(),
            capture_fps: TARGET_CAPTURE_FPS,
        })
        .collect()
}

/// Execute the tiers command
pub fn execute(format: OutputFormat) -> Result<()> {
    let entries = entries();

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.label);
        println!("  Code: {}", entry.code);
        println!("  Rule: {}", entry.rule);
        println!(
            "  Accelerator: {}",
            if entry.uses_accelerator { "yes" } else { "no" }
        );
        println!(
            "  Processing: {} at {} fps",
            entry.processing_profile, entry.capture_fps
        );
    }

    Ok(())
}
