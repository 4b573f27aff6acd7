// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware capability snapshots and tier classification
//!
//! A probe reports CPU cores and accelerator presence; the classifier turns
//! that into a [`HardwareTier`], which in turn selects the frame-processing
//! profile a peer runs.

pub mod probe;
pub mod profile;
pub mod specs;
pub mod tier;

pub use probe::*;
pub use profile::*;
pub use specs::*;
pub use tier::*;
