// ABOUTME: Nutrition configuration for the daily calorie target
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and goal adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Model Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Calorie model configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for maintenance calories
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based surplus and deficit
    pub goal_adjustment: GoalAdjustmentConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Constant for every other sex value (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity multipliers applied to BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Moderately active: 1.55
    pub moderate: f64,
    /// Active: 1.9
    pub active: f64,
    /// Unrecognized activity level: 1.0 (no adjustment)
    pub unspecified: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            moderate: 1.55,
            active: 1.9,
            unspecified: 1.0,
        }
    }
}

/// Daily calorie adjustment per goal (kcal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Added for weight gain
    pub surplus_kcal: f64,
    /// Subtracted for weight loss
    pub deficit_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            surplus_kcal: 500.0,
            deficit_kcal: 500.0,
        }
    }
}

impl NutritionConfig {
    /// Validate coefficients and multipliers
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when coefficients are non-positive, multipliers fall
    /// outside 1.0-2.5 or are not ascending, or adjustments are negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.unspecified < 1.0 || factors.sedentary < 1.0 || factors.active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.moderate || factors.moderate >= factors.active {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if self.goal_adjustment.surplus_kcal < 0.0 || self.goal_adjustment.deficit_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal adjustments must be non-negative",
            ));
        }
        Ok(())
    }
}
