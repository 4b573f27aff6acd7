// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware tier classification and rendering

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::ProcessingProfile;
use crate::error::{LumenError, Result};

/// Core count above which a CPU-only machine counts as high performance.
/// The comparison is strict: exactly 12 cores is still a standard CPU.
pub const HIGH_CPU_CORE_THRESHOLD: usize = 12;

/// Hardware tier classification based on system capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardwareTier {
    /// CUDA-capable accelerator present
    #[serde(rename = "TIER_1_RTX")]
    Tier1Rtx,
    /// No accelerator, more than 12 cores
    #[serde(rename = "TIER_2_HIGH_CPU")]
    Tier2HighCpu,
    /// No accelerator, 12 cores or fewer
    #[serde(rename = "TIER_3_NORMAL_CPU")]
    Tier3NormalCpu,
}

/// Classify a machine from its accelerator flag and core count.
///
/// Accelerator presence dominates: a CUDA machine is Tier 1 whatever its
/// core count. The GPU name plays no part in the decision.
pub fn classify(has_cuda: bool, cpu_cores: usize) -> HardwareTier {
    if has_cuda {
        HardwareTier::Tier1Rtx
    } else if cpu_cores > HIGH_CPU_CORE_THRESHOLD {
        HardwareTier::Tier2HighCpu
    } else {
        HardwareTier::Tier3NormalCpu
    }
}

impl HardwareTier {
    /// Every tier, best first
    pub const ALL: [HardwareTier; 3] = [
        HardwareTier::Tier1Rtx,
        HardwareTier::Tier2HighCpu,
        HardwareTier::Tier3NormalCpu,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            HardwareTier::Tier1Rtx => "TIER_1_RTX",
            HardwareTier::Tier2HighCpu => "TIER_2_HIGH_CPU",
            HardwareTier::Tier3NormalCpu => "TIER_3_NORMAL_CPU",
        }
    }

    /// Human-readable label for logs and display
    pub fn label(&self) -> &'static str {
        match self {
            HardwareTier::Tier1Rtx => "Tier 1: RTX GPU (Maxine/TensorRT)",
            HardwareTier::Tier2HighCpu => "Tier 2: High-Performance CPU (ONNX AVX2)",
            HardwareTier::Tier3NormalCpu => "Tier 3: Standard CPU (Basic Filters)",
        }
    }

    /// Whether this tier relies on a GPU accelerator
    pub fn uses_accelerator(&self) -> bool {
        matches!(self, HardwareTier::Tier1Rtx)
    }

    /// Frame filter a media pipeline should run on this tier
    pub fn processing_profile(&self) -> ProcessingProfile {
        match self {
            HardwareTier::Tier1Rtx => ProcessingProfile::DetailEnhance {
                sigma_s: 10.0,
                sigma_r: 0.15,
            },
            HardwareTier::Tier2HighCpu => ProcessingProfile::Bilateral {
                diameter: 9,
                sigma_color: 75.0,
                sigma_space: 75.0,
            },
            HardwareTier::Tier3NormalCpu => ProcessingProfile::GaussianBlur { kernel: 5 },
        }
    }
}

impl std::fmt::Display for HardwareTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HardwareTier {
    type Err = LumenError;

    /// Accepts either the code (`TIER_2_HIGH_CPU`) or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        HardwareTier::ALL
            .into_iter()
            .find(|tier| {
                tier.code().eq_ignore_ascii_case(needle) || tier.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| LumenError::InvalidInput(format!("unknown hardware tier '{}'", s)))
    }
}
