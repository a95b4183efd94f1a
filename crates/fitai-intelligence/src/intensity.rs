// ABOUTME: BMI computation and BMI-bucketed intensity score for routine volume
// ABOUTME: Four buckets (underweight, normal, overweight, obese) map to fixed scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::IntensityConfig;
use fitai_core::errors::AppResult;
use fitai_core::models::profile::validate_body_measurements;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// BMI bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below the underweight threshold
    Underweight,
    /// Normal weight
    Normal,
    /// Overweight
    Overweight,
    /// Obese
    Obese,
}

impl BmiCategory {
    /// Bucket for a BMI value under the configured boundaries
    #[must_use]
    pub fn classify(bmi: f64, config: &IntensityConfig) -> Self {
        let (normal_upper, overweight_upper) = config.boundary_mode.upper_bounds();
        if bmi < config.underweight_below_bmi {
            Self::Underweight
        } else if bmi < normal_upper {
            Self::Normal
        } else if bmi < overweight_upper {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Intensity score for this bucket
    #[must_use]
    pub const fn score(&self, config: &IntensityConfig) -> u32 {
        match self {
            Self::Underweight => config.scores.underweight,
            Self::Normal => config.scores.normal,
            Self::Overweight => config.scores.overweight,
            Self::Obese => config.scores.obese,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// BMI, its bucket, and the resulting score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityAssessment {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Bucket the BMI falls in
    pub category: BmiCategory,
    /// Intensity score
    pub score: u32,
}

/// Body mass index: `weight_kg / (height_cm / 100)²`
///
/// # Errors
///
/// Returns `ValueOutOfRange` for non-positive, non-finite, or implausibly large inputs
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    validate_body_measurements(weight_kg, height_cm)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Compute BMI and classify it
///
/// # Errors
///
/// Returns `ValueOutOfRange` for invalid weight or height
pub fn assess_intensity(
    weight_kg: f64,
    height_cm: f64,
    config: &IntensityConfig,
) -> AppResult<IntensityAssessment> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;
    let category = BmiCategory::classify(bmi, config);
    let score = category.score(config);

    debug!(bmi, category = category.as_str(), score, "Assessed intensity");

    Ok(IntensityAssessment {
        bmi,
        category,
        score,
    })
}

/// Intensity score for a weight and height
///
/// # Errors
///
/// Returns `ValueOutOfRange` for invalid weight or height
pub fn calculate_intensity(
    weight_kg: f64,
    height_cm: f64,
    config: &IntensityConfig,
) -> AppResult<u32> {
    assess_intensity(weight_kg, height_cm, config).map(|assessment| assessment.score)
}
