// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{LumenError, Result};
use crate::hardware::HostProbe;

use super::Settings;

impl Settings {
    /// Reject settings no probe or session could use.
    pub fn validate(&self) -> Result<()> {
        if self.hardware.cpu_cores_override == Some(0) {
            return Err(LumenError::Config(
                "hardware.cpuCoresOverride must be at least 1".to_string(),
            ));
        }

        if self.signaling.room_id.trim().is_empty() {
            return Err(LumenError::Config(
                "signaling.roomId must not be empty".to_string(),
            ));
        }

        if self.hardware.gpu_name.is_some() && !self.hardware.has_cuda {
            tracing::warn!("hardware.gpuName is set but hasCuda is false; the name is ignored");
        }

        Ok(())
    }

    /// Build the host probe described by these settings.
    pub fn host_probe(&self) -> HostProbe {
        HostProbe::from_settings(&self.hardware)
    }
}
