// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame-processing profiles selected by hardware tier

use serde::Serialize;

/// Frame rate the capture device is configured for, on every tier.
pub const TARGET_CAPTURE_FPS: u32 = 15;

/// Filter applied to each captured frame before it is sent to a peer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "filter", rename_all = "kebab-case")]
pub enum ProcessingProfile {
    /// Cheap denoise
    #[serde(rename_all = "camelCase")]
    GaussianBlur { kernel: u32 },
    /// Edge-preserving smoothing, noticeably slower
    #[serde(rename_all = "camelCase")]
    Bilateral {
        diameter: u32,
        sigma_color: f32,
        sigma_space: f32,
    },
    /// Detail enhancement, stands in for accelerator super-resolution
    #[serde(rename_all = "camelCase")]
    DetailEnhance { sigma_s: f32, sigma_r: f32 },
}

impl ProcessingProfile {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingProfile::GaussianBlur { .. } => "gaussian-blur",
            ProcessingProfile::Bilateral { .. } => "bilateral",
            ProcessingProfile::DetailEnhance { .. } => "detail-enhance",
        }
    }

    /// Ordinal cost; only the ordering between profiles is meaningful
    pub fn relative_cost(&self) -> u8 {
        match self {
            ProcessingProfile::GaussianBlur { .. } => 1,
            ProcessingProfile::Bilateral { .. } => 2,
            ProcessingProfile::DetailEnhance { .. } => 3,
        }
    }
}

impl std::fmt::Display for ProcessingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingProfile::GaussianBlur { kernel } => {
                write!(f, "{} ({}x{})", self.name(), kernel, kernel)
            }
            ProcessingProfile::Bilateral {
                diameter,
                sigma_color,
                sigma_space,
            } => write!(
                f,
                "{} (d={}, sigmaColor={}, sigmaSpace={})",
                self.name(),
                diameter,
                sigma_color,
                sigma_space
            ),
            ProcessingProfile::DetailEnhance { sigma_s, sigma_r } => {
                write!(f, "{} (sigmaS={}, sigmaR={})", self.name(), sigma_s, sigma_r)
            }
        }
    }
}
