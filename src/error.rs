// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Lumen
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Main error type for Lumen operations
#[derive(Error, Debug)]
pub enum LumenError {
    /// A computed tier disagrees with the tier expected for its inputs
    #[error("Classification mismatch: {0}")]
    ClassificationMismatch(String),

    /// A capability probe could not produce a hardware snapshot
    #[error("Probe error: {0}")]
    Probe(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Lumen operations
pub type Result<T> = std::result::Result<T, LumenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_mismatch_display() {
        let err = LumenError::ClassificationMismatch("expected TIER_1_RTX".to_string());
        assert!(err.to_string().contains("Classification mismatch"));
        assert!(err.to_string().contains("TIER_1_RTX"));
    }

    #[test]
    fn test_probe_error_display() {
        let err = LumenError::Probe("no cpus reported".to_string());
        assert_eq!(err.to_string(), "Probe error: no cpus reported");
    }

    #[test]
    fn test_config_error_display() {
        let err = LumenError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = LumenError::InvalidInput("TIER_9".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LumenError = io_err.into();
        assert!(matches!(err, LumenError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LumenError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(LumenError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}
