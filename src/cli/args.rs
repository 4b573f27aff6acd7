// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Lumen.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::hardware::ProbeOverrides;

/// Lumen - hardware tier probe for LumenRTC peers
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(version, about = "Hardware tier probe for LumenRTC peers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe this machine and print its hardware tier
    #[command(alias = "hw")]
    Probe(ProbeArgs),

    /// Run the tier classification smoke checks
    Check(CheckArgs),

    /// List every hardware tier and its processing profile
    Tiers,
}

/// Flags that replace probed values
#[derive(clap::Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    /// Report this many logical CPU cores
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub cores: Option<u32>,

    /// Report a CUDA-capable accelerator
    #[arg(long, conflicts_with = "no_cuda")]
    pub cuda: bool,

    /// Report no accelerator
    #[arg(long)]
    pub no_cuda: bool,

    /// Accelerator name to report
    #[arg(long, value_name = "NAME")]
    pub gpu_name: Option<String>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> ProbeOverrides {
        let has_cuda = if self.cuda {
            Some(true)
        } else if self.no_cuda {
            Some(false)
        } else {
            None
        };

        ProbeOverrides {
            cpu_cores: self.cores.map(|c| c as usize),
            has_cuda,
            gpu_name: self.gpu_name.clone(),
        }
    }
}

/// Arguments for the probe subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Signaling room to address the hardware-info payload to
    #[arg(long, value_name = "ID")]
    pub room: Option<String>,
}

/// Arguments for the check subcommand
#[derive(clap::Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Only run the builtin scenarios, not the host check
    #[arg(long, conflicts_with_all = ["cores", "cuda", "no_cuda", "gpu_name"])]
    pub skip_host: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
