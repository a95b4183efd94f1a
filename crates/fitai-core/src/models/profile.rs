// ABOUTME: Biometric profile submitted with each planning request
// ABOUTME: Sex, activity level, goal, and diet preference enums with lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_label;
use crate::constants::limits::{MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Any other value; uses the non-male constant
    Other,
}

impl Sex {
    /// Parse sex from a request string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "male" | "m" | "man" => Self::Male,
            "female" | "f" | "woman" => Self::Female,
            _ => Self::Other,
        }
    }

    /// Stable lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<Sex> for String {
    fn from(value: Sex) -> Self {
        value.as_str().to_owned()
    }
}

/// Self-reported activity level for the maintenance calorie multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise a few days per week
    Moderate,
    /// Hard exercise most days
    Active,
    /// Unrecognized input; no activity adjustment is applied
    Unspecified,
}

impl ActivityLevel {
    /// Parse activity level from a request string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "sedentary" => Self::Sedentary,
            "moderate" | "moderately-active" => Self::Moderate,
            "active" | "very-active" => Self::Active,
            _ => Self::Unspecified,
        }
    }

    /// Stable lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Unspecified => "unspecified",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.as_str().to_owned()
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    WeightGain,
    /// Caloric balance
    Maintenance,
}

impl Goal {
    /// Parse goal from a request string; anything unrecognized is maintenance
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "loss" | "weight-loss" | "lose" | "lose-weight" => Self::WeightLoss,
            "gain" | "weight-gain" | "muscle-gain" | "gain-weight" => Self::WeightGain,
            _ => Self::Maintenance,
        }
    }

    /// Stable lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "loss",
            Self::WeightGain => "gain",
            Self::Maintenance => "maintenance",
        }
    }

    /// Meal catalog `goal_type` used for filtering; maintenance does not filter
    #[must_use]
    pub const fn catalog_goal_type(&self) -> Option<GoalType> {
        match self {
            Self::WeightLoss => Some(GoalType::WeightLoss),
            Self::WeightGain => Some(GoalType::WeightGain),
            Self::Maintenance => None,
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        value.as_str().to_owned()
    }
}

/// Values of the meal catalog `goal_type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Meals suited to a caloric surplus
    WeightGain,
    /// Meals suited to a caloric deficit
    WeightLoss,
    /// Meals suited to maintenance
    Maintenance,
}

impl GoalType {
    /// Column value as written in the catalog
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightGain => "weight_gain",
            Self::WeightLoss => "weight_loss",
            Self::Maintenance => "maintenance",
        }
    }

    /// Whether a raw catalog cell names this goal type
    #[must_use]
    pub fn matches(&self, cell: &str) -> bool {
        normalize_label(cell) == normalize_label(self.as_str())
    }
}

/// Dietary preference, compared case-insensitively against the catalog column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietPreference {
    /// No meat or fish
    Vegetarian,
    /// No restriction on animal products
    NonVegetarian,
    /// No animal products
    Vegan,
    /// Any other catalog label, kept verbatim
    Other(String),
}

impl DietPreference {
    /// Parse a preference from a request string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "vegetarian" | "veg" => Self::Vegetarian,
            "non-vegetarian" | "nonvegetarian" | "non-veg" => Self::NonVegetarian,
            "vegan" => Self::Vegan,
            _ => Self::Other(s.trim().to_owned()),
        }
    }

    /// Label as written in the catalog
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Vegan => "Vegan",
            Self::Other(label) => label,
        }
    }

    /// Whether a raw catalog cell names this preference
    #[must_use]
    pub fn matches(&self, cell: &str) -> bool {
        normalize_label(cell) == normalize_label(self.label())
    }

    /// Whether the static fallback should use the plant-based template
    #[must_use]
    pub const fn is_plant_based(&self) -> bool {
        matches!(self, Self::Vegetarian | Self::Vegan)
    }
}

impl From<String> for DietPreference {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<DietPreference> for String {
    fn from(value: DietPreference) -> Self {
        value.label().to_owned()
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Biometric inputs for one planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
    /// Dietary preference
    pub diet_preference: DietPreference,
}

impl BiometricProfile {
    /// Reject values the engine must never see
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when age, height or weight fall outside
    /// 1..=120 years, (0, 300] cm or (0, 500] kg, or are not finite
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&self.age) {
            return Err(AppError::value_out_of_range(format!(
                "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"
            )));
        }
        validate_body_measurements(self.weight_kg, self.height_cm)
    }

    /// Body mass index in kg/m²
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

/// Validate weight and height against the accepted ranges
///
/// # Errors
///
/// Returns `ValueOutOfRange` when weight is outside (0, 500] kg or height
/// outside (0, 300] cm, including NaN and infinities
pub fn validate_body_measurements(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::value_out_of_range(format!(
            "Weight must be between 0 and {MAX_WEIGHT_KG} kg"
        ))
        .with_details(serde_json::json!({ "field": "weight_kg", "value": weight_kg })));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
        return Err(AppError::value_out_of_range(format!(
            "Height must be between 0 and {MAX_HEIGHT_CM} cm"
        ))
        .with_details(serde_json::json!({ "field": "height_cm", "value": height_cm })));
    }
    Ok(())
}
