// ABOUTME: Tests for BMI computation and the bucketed intensity score
// ABOUTME: Covers boundary behavior in both boundary modes and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_planner::errors::ErrorCode;
use fitai_planner::intelligence::config::intelligence::{BmiBoundaryMode, IntensityConfig};
use fitai_planner::intelligence::intensity::{
    assess_intensity, calculate_bmi, calculate_intensity, BmiCategory,
};

mod common;

/// Weight (kg) giving the requested BMI at 100 cm
fn weight_for_bmi(bmi: f64) -> f64 {
    bmi
}

#[test]
fn test_reference_scenario_normal_weight() {
    common::init_test_logging();
    let config = IntensityConfig::default();
    let assessment = assess_intensity(50.0, 160.0, &config).unwrap();

    assert!((assessment.bmi - 19.53).abs() < 0.01);
    assert_eq!(assessment.category, BmiCategory::Normal);
    assert_eq!(assessment.score, 70);
}

#[test]
fn test_each_bucket_score() {
    let config = IntensityConfig::default();
    let cases = [(17.0, 50), (18.5, 70), (24.99, 70), (25.0, 60), (29.99, 60), (30.0, 40), (45.0, 40)];
    for (bmi, expected) in cases {
        let score = calculate_intensity(weight_for_bmi(bmi), 100.0, &config).unwrap();
        assert_eq!(score, expected, "BMI {bmi}");
    }
}

#[test]
fn test_legacy_boundaries_use_literal_thresholds() {
    let config = IntensityConfig {
        boundary_mode: BmiBoundaryMode::Legacy,
        ..IntensityConfig::default()
    };
    assert_eq!(calculate_intensity(24.95, 100.0, &config).unwrap(), 60);
    assert_eq!(calculate_intensity(29.95, 100.0, &config).unwrap(), 40);
    assert_eq!(calculate_intensity(24.85, 100.0, &config).unwrap(), 70);
}

#[test]
fn test_score_never_increases_past_normal() {
    let config = IntensityConfig::default();
    let mut previous = u32::MAX;
    let mut bmi = 18.5;
    while bmi < 60.0 {
        let score = calculate_intensity(weight_for_bmi(bmi), 100.0, &config).unwrap();
        assert!([40, 50, 60, 70].contains(&score));
        assert!(score <= previous, "score rose at BMI {bmi}");
        previous = score;
        bmi += 0.25;
    }
}

#[test]
fn test_invalid_measurements_rejected() {
    let config = IntensityConfig::default();
    for (weight, height) in [
        (0.0, 170.0),
        (-5.0, 170.0),
        (70.0, 0.0),
        (70.0, 301.0),
        (501.0, 170.0),
        (f64::NAN, 170.0),
        (70.0, f64::INFINITY),
    ] {
        let err = calculate_intensity(weight, height, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{weight}/{height}");
    }
}

#[test]
fn test_upper_limits_are_inclusive() {
    assert!(calculate_bmi(500.0, 300.0).is_ok());
}
