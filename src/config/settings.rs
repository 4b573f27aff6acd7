// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Lumen
//!
//! Handles loading settings from ~/.lumen/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod validation;

/// Main settings structure, stored in ~/.lumen/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Declared hardware facts for the host probe
    #[serde(default)]
    pub hardware: HardwareSettings,

    /// Signaling session settings
    #[serde(default)]
    pub signaling: SignalingSettings,
}

/// Hardware facts that are configured rather than detected
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSettings {
    /// Pin the logical core count instead of asking the OS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores_override: Option<usize>,

    /// Whether a CUDA-capable accelerator is installed
    #[serde(default)]
    pub has_cuda: bool,

    /// Accelerator name, only meaningful with `has_cuda`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_name: Option<String>,
}

/// Signaling session settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignalingSettings {
    /// Room the hardware-info event is addressed to
    #[serde(default = "default_room_id")]
    pub room_id: String,
}

impl Default for SignalingSettings {
    fn default() -> Self {
        Self {
            room_id: default_room_id(),
        }
    }
}

fn default_room_id() -> String {
    "test-room".to_string()
}
