// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::lumen_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Get the lumen home directory (~/.lumen or $LUMEN_HOME).
    pub fn lumen_home() -> PathBuf {
        if let Ok(home) = std::env::var("LUMEN_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lumen")
    }
}
