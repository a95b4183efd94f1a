// ABOUTME: Daily calorie target from the Mifflin-St Jeor BMR, activity factor, and goal
// ABOUTME: Maintenance = BMR x activity multiplier; target adds or subtracts the goal adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Model
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig,
};
use fitai_core::errors::AppResult;
use fitai_core::models::{ActivityLevel, BiometricProfile, Goal, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every stage of the calorie computation for one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// BMR x activity multiplier (kcal/day)
    pub maintenance: f64,
    /// Maintenance adjusted for the goal (kcal/day)
    pub daily_target: f64,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female and any other value: -161
///
/// No clamping is applied; callers validate the profile first.
#[must_use]
pub fn calculate_bmr(profile: &BiometricProfile, config: &BmrConfig) -> f64 {
    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female | Sex::Other => config.msj_female_constant,
    };

    config.msj_weight_coef * profile.weight_kg
        + config.msj_height_coef * profile.height_cm
        + config.msj_age_coef * f64::from(profile.age)
        + sex_constant
}

/// Activity multiplier for a level; unrecognized levels leave BMR unchanged
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::Unspecified => config.unspecified,
    }
}

/// Signed daily adjustment for a goal (kcal)
#[must_use]
pub fn goal_adjustment(goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        Goal::WeightGain => config.surplus_kcal,
        Goal::WeightLoss => -config.deficit_kcal,
        Goal::Maintenance => 0.0,
    }
}

/// Maintenance calories: BMR x activity multiplier
#[must_use]
pub fn maintenance_calories(profile: &BiometricProfile, config: &NutritionConfig) -> f64 {
    calculate_bmr(profile, &config.bmr)
        * activity_multiplier(profile.activity_level, &config.activity_factors)
}

/// Compute BMR, maintenance, and the goal-adjusted target
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the profile fails validation
pub fn calculate_calorie_targets(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> AppResult<CalorieTargets> {
    profile.validate()?;

    let bmr = calculate_bmr(profile, &config.bmr);
    let maintenance = bmr * activity_multiplier(profile.activity_level, &config.activity_factors);
    let daily_target = maintenance + goal_adjustment(profile.goal, &config.goal_adjustment);

    debug!(
        bmr,
        maintenance,
        daily_target,
        activity_level = profile.activity_level.as_str(),
        goal = profile.goal.as_str(),
        "Calculated calorie targets"
    );

    Ok(CalorieTargets {
        bmr,
        maintenance,
        daily_target,
    })
}

/// Goal-adjusted daily calorie target
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the profile fails validation
pub fn daily_target(profile: &BiometricProfile, config: &NutritionConfig) -> AppResult<f64> {
    calculate_calorie_targets(profile, config).map(|targets| targets.daily_target)
}
