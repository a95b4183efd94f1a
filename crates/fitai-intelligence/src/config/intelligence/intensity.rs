// ABOUTME: BMI bucket boundaries and intensity scores for routine volume
// ABOUTME: Supports clinical (25/30) and legacy literal (24.9/29.9) upper boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which upper boundaries the normal and overweight buckets use
///
/// The planner historically compared against the literals 24.9 and 29.9, which
/// puts a BMI of 24.95 in the overweight bucket. `Clinical` uses the WHO cut-offs
/// 25.0 and 30.0 instead. The lower bound 18.5 is identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmiBoundaryMode {
    /// `< 25.0` normal, `< 30.0` overweight
    #[default]
    Clinical,
    /// `< 24.9` normal, `< 29.9` overweight
    Legacy,
}

impl BmiBoundaryMode {
    /// Exclusive upper bounds of the normal and overweight buckets
    #[must_use]
    pub const fn upper_bounds(&self) -> (f64, f64) {
        match self {
            Self::Clinical => (25.0, 30.0),
            Self::Legacy => (24.9, 29.9),
        }
    }
}

impl FromStr for BmiBoundaryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clinical" => Ok(Self::Clinical),
            "legacy" | "literal" => Ok(Self::Legacy),
            other => Err(ConfigError::Parse(format!(
                "unknown BMI boundary mode '{other}' (expected clinical or legacy)"
            ))),
        }
    }
}

/// Intensity score for each BMI bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntensityScores {
    /// BMI below the underweight threshold
    pub underweight: u32,
    /// Normal weight
    pub normal: u32,
    /// Overweight
    pub overweight: u32,
    /// Obese
    pub obese: u32,
}

/// BMI-driven intensity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Upper boundary convention for the middle buckets
    pub boundary_mode: BmiBoundaryMode,
    /// BMI below this value is underweight (18.5)
    pub underweight_below_bmi: f64,
    /// Score per bucket
    pub scores: IntensityScores,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            boundary_mode: BmiBoundaryMode::default(),
            underweight_below_bmi: 18.5,
            scores: IntensityScores {
                underweight: 50,
                normal: 70,
                overweight: 60,
                obese: 40,
            },
        }
    }
}

impl IntensityConfig {
    /// Validate that bucket boundaries ascend
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when the underweight threshold is not
    /// positive or not below the normal-weight upper bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (normal_upper, _) = self.boundary_mode.upper_bounds();
        if self.underweight_below_bmi <= 0.0 || self.underweight_below_bmi >= normal_upper {
            return Err(ConfigError::InvalidRange(
                "underweight BMI threshold must be positive and below the normal upper bound",
            ));
        }
        Ok(())
    }
}
