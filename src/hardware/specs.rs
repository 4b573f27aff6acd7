// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Immutable hardware capability snapshot

use serde::{Deserialize, Serialize};

use super::tier::{classify, HardwareTier};
use crate::error::LumenError;

/// Capabilities of one machine, classified once at construction.
///
/// Fields are read-only after construction so the tier can never drift from
/// the inputs it was computed from. Changing an input means building a new
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SpecsRecord")]
pub struct HardwareSpecs {
    cpu_cores: usize,
    has_cuda: bool,
    gpu_name: Option<String>,
    tier: HardwareTier,
}

impl HardwareSpecs {
    /// Build a snapshot and assign its tier.
    ///
    /// A GPU name is only kept when an accelerator is present; blank names
    /// are treated as absent.
    pub fn new(cpu_cores: usize, has_cuda: bool, gpu_name: Option<String>) -> Self {
        let gpu_name = gpu_name
            .filter(|_| has_cuda)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Self {
            cpu_cores,
            has_cuda,
            gpu_name,
            tier: classify(has_cuda, cpu_cores),
        }
    }

    pub fn cpu_cores(&self) -> usize {
        self.cpu_cores
    }

    pub fn has_cuda(&self) -> bool {
        self.has_cuda
    }

    pub fn gpu_name(&self) -> Option<&str> {
        self.gpu_name.as_deref()
    }

    pub fn tier(&self) -> HardwareTier {
        self.tier
    }
}

/// Wire shape accepted when deserializing a snapshot.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpecsRecord {
    cpu_cores: usize,
    has_cuda: bool,
    #[serde(default)]
    gpu_name: Option<String>,
    #[serde(default)]
    tier: Option<HardwareTier>,
}

impl TryFrom<SpecsRecord> for HardwareSpecs {
    type Error = LumenError;

    fn try_from(record: SpecsRecord) -> Result<Self, Self::Error> {
        let specs = HardwareSpecs::new(record.cpu_cores, record.has_cuda, record.gpu_name);
        match record.tier {
            Some(claimed) if claimed != specs.tier => {
                Err(LumenError::ClassificationMismatch(format!(
                    "record claims {} but cuda={} cores={} classifies as {}",
                    claimed.code(),
                    specs.has_cuda,
                    specs.cpu_cores,
                    specs.tier.code()
                )))
            }
            _ => Ok(specs),
        }
    }
}
