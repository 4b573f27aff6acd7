// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::collections::HashSet;

use lumen::hardware::{
    classify, CapabilityProbe, HardwareSpecs, HardwareTier, StaticProbe, HIGH_CPU_CORE_THRESHOLD,
};
use proptest::prelude::*;

#[test]
fn test_scenario_gpu_with_four_cores() {
    let specs = StaticProbe::new(4, true, Some("RTX 4090".to_string()))
        .capabilities()
        .expect("static probe never fails");
    assert_eq!(specs.tier(), HardwareTier::Tier1Rtx);
}

#[test]
fn test_scenario_sixteen_cores() {
    assert_eq!(classify(false, 16), HardwareTier::Tier2HighCpu);
}

#[test]
fn test_scenario_eight_cores() {
    assert_eq!(classify(false, 8), HardwareTier::Tier3NormalCpu);
}

#[test]
fn test_scenario_twelve_cores_is_not_high() {
    assert_eq!(classify(false, 12), HardwareTier::Tier3NormalCpu);
    assert_eq!(classify(false, 13), HardwareTier::Tier2HighCpu);
}

#[test]
fn test_render_every_tier_distinctly() {
    let labels: HashSet<String> = HardwareTier::ALL.iter().map(|t| t.to_string()).collect();
    assert_eq!(labels.len(), 3);
    assert!(labels.iter().all(|l| !l.is_empty()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_accelerator_dominates(cores in any::<usize>()) {
        prop_assert_eq!(classify(true, cores), HardwareTier::Tier1Rtx);
    }

    #[test]
    fn prop_high_cpu_iff_above_threshold(cores in 0usize..10_000) {
        let tier = classify(false, cores);
        prop_assert_eq!(
            tier == HardwareTier::Tier2HighCpu,
            cores > HIGH_CPU_CORE_THRESHOLD
        );
        prop_assert_ne!(tier, HardwareTier::Tier1Rtx);
    }

    #[test]
    fn prop_gpu_name_never_affects_tier(
        cores in 0usize..256,
        has_cuda in any::<bool>(),
        name in proptest::option::of("[ -~]{0,24}"),
    ) {
        let named = HardwareSpecs::new(cores, has_cuda, name);
        prop_assert_eq!(named.tier(), classify(has_cuda, cores));
    }

    #[test]
    fn prop_specs_json_roundtrip_keeps_tier(cores in 0usize..256, has_cuda in any::<bool>()) {
        let specs = HardwareSpecs::new(cores, has_cuda, None);
        let json = serde_json::to_string(&specs).unwrap();
        let parsed: HardwareSpecs = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, specs);
    }

    #[test]
    fn prop_label_parses_back(index in 0usize..3) {
        let tier = HardwareTier::ALL[index];
        prop_assert_eq!(tier.label().parse::<HardwareTier>().unwrap(), tier);
        prop_assert_eq!(tier.code().parse::<HardwareTier>().unwrap(), tier);
    }
}
