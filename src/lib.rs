// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Lumen - hardware capability probing and tier classification.
//!
//! This crate exposes the shared runtime used by the `lumen` CLI
//! (`src/main.rs`) and by peers that need to pick a workload strategy:
//! - `hardware`: specs snapshot, tier classifier, probes, processing profiles
//! - `smoke`: independent scenario checks with aggregated reporting
//! - `config`: settings file loading and validation
//! - `cli`, `commands`: argument parsing and subcommand bodies

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hardware;
pub mod smoke;

pub use error::{LumenError, Result};
