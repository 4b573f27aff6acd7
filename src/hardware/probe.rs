// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability probes that produce [`HardwareSpecs`] snapshots

use sysinfo::System;

use super::specs::HardwareSpecs;
use crate::config::HardwareSettings;
use crate::error::{LumenError, Result};

/// Name reported for a declared accelerator that has no configured name.
pub const DEFAULT_GPU_NAME: &str = "CUDA Capable GPU";

/// Source of a machine's capability snapshot.
///
/// Implementations return specs with the tier already assigned.
pub trait CapabilityProbe {
    fn capabilities(&self) -> Result<HardwareSpecs>;
}

impl<P: CapabilityProbe + ?Sized> CapabilityProbe for Box<P> {
    fn capabilities(&self) -> Result<HardwareSpecs> {
        (**self).capabilities()
    }
}

/// Probe that reports fixed inputs. Used for fakes and explicit overrides.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    cpu_cores: usize,
    has_cuda: bool,
    gpu_name: Option<String>,
}

impl StaticProbe {
    pub fn new(cpu_cores: usize, has_cuda: bool, gpu_name: Option<String>) -> Self {
        Self {
            cpu_cores,
            has_cuda,
            gpu_name,
        }
    }
}

impl CapabilityProbe for StaticProbe {
    fn capabilities(&self) -> Result<HardwareSpecs> {
        Ok(HardwareSpecs::new(
            self.cpu_cores,
            self.has_cuda,
            self.gpu_name.clone(),
        ))
    }
}

/// Probe for the running machine.
///
/// The logical CPU count comes from the OS unless the settings pin it.
/// Accelerator presence is declared in settings; it is never enumerated.
#[derive(Debug, Clone)]
pub struct HostProbe {
    cpu_cores_override: Option<usize>,
    has_cuda: bool,
    gpu_name: Option<String>,
}

impl HostProbe {
    pub fn from_settings(settings: &HardwareSettings) -> Self {
        Self {
            cpu_cores_override: settings.cpu_cores_override,
            has_cuda: settings.has_cuda,
            gpu_name: settings.gpu_name.clone(),
        }
    }

    fn logical_cpu_count() -> usize {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.cpus().len()
    }
}

impl CapabilityProbe for HostProbe {
    fn capabilities(&self) -> Result<HardwareSpecs> {
        let cpu_cores = match self.cpu_cores_override {
            Some(cores) => {
                tracing::debug!(cores, "using configured cpu core count");
                cores
            }
            None => Self::logical_cpu_count(),
        };

        if cpu_cores == 0 {
            return Err(LumenError::Probe(
                "host reported zero logical CPUs".to_string(),
            ));
        }

        let gpu_name = if self.has_cuda {
            Some(
                self.gpu_name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_GPU_NAME.to_string()),
            )
        } else {
            None
        };

        let specs = HardwareSpecs::new(cpu_cores, self.has_cuda, gpu_name);
        tracing::debug!(
            cpu_cores = specs.cpu_cores(),
            has_cuda = specs.has_cuda(),
            tier = specs.tier().code(),
            "host capabilities probed"
        );
        Ok(specs)
    }
}

/// Replacement inputs applied on top of a probe result (CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOverrides {
    pub cpu_cores: Option<usize>,
    pub has_cuda: Option<bool>,
    pub gpu_name: Option<String>,
}

impl ProbeOverrides {
    pub fn is_empty(&self) -> bool {
        self.cpu_cores.is_none() && self.has_cuda.is_none() && self.gpu_name.is_none()
    }

    /// Build a new snapshot from `specs` with the overridden inputs; the tier
    /// is recomputed.
    pub fn apply(&self, specs: &HardwareSpecs) -> HardwareSpecs {
        if self.is_empty() {
            return specs.clone();
        }

        let has_cuda = self.has_cuda.unwrap_or(specs.has_cuda());
        let gpu_name = self
            .gpu_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| specs.gpu_name().map(str::to_string))
            .or_else(|| has_cuda.then(|| DEFAULT_GPU_NAME.to_string()));

        HardwareSpecs::new(
            self.cpu_cores.unwrap_or(specs.cpu_cores()),
            has_cuda,
            gpu_name,
        )
    }
}

/// Probe wrapper that applies [`ProbeOverrides`] to an inner probe.
pub struct OverriddenProbe<P> {
    inner: P,
    overrides: ProbeOverrides,
}

impl<P: CapabilityProbe> OverriddenProbe<P> {
    pub fn new(inner: P, overrides: ProbeOverrides) -> Self {
        Self { inner, overrides }
    }
}

impl<P: CapabilityProbe> CapabilityProbe for OverriddenProbe<P> {
    fn capabilities(&self) -> Result<HardwareSpecs> {
        let specs = self.inner.capabilities()?;
        Ok(self.overrides.apply(&specs))
    }
}
