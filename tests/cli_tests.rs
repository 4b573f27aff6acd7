// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use lumen::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_probe_command() {
    let args = vec!["lumen", "probe"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Probe(_)));
}

#[test]
fn test_parse_probe_with_cores() {
    let args = vec!["lumen", "probe", "--cores", "16"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Probe(probe_args) = cli.command {
        assert_eq!(probe_args.overrides.cores, Some(16));
    } else {
        panic!("Expected Probe command");
    }
}

#[test]
fn test_parse_check_command() {
    let args = vec!["lumen", "check"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Check(check_args) = cli.command {
        assert!(!check_args.skip_host);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn test_parse_check_with_overrides() {
    let args = vec!["lumen", "check", "--cuda", "--gpu-name", "RTX 3060"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Check(check_args) = cli.command {
        let overrides = check_args.overrides.to_overrides();
        assert_eq!(overrides.has_cuda, Some(true));
        assert_eq!(overrides.gpu_name.as_deref(), Some("RTX 3060"));
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn test_parse_tiers_json() {
    let args = vec!["lumen", "--format", "json", "tiers"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Tiers));
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_invalid_format_rejected() {
    let args = vec!["lumen", "--format", "yaml", "tiers"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_unknown_command_rejected() {
    let args = vec!["lumen", "benchmark"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_check_skip_host_conflicts_with_cores() {
    let args = vec!["lumen", "check", "--skip-host", "--cores", "16"];
    assert!(Cli::try_parse_from(args).is_err());
}
