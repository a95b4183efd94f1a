// ABOUTME: Core data models shared by the engine, catalogs, and request layer
// ABOUTME: Re-exports profile, condition, exercise, and meal model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Detected health condition set
pub mod condition;
/// Exercise catalog rows and routine plans
pub mod exercise;
/// Meal catalog rows, meal slots, and diet plans
pub mod meal;
/// Biometric profile and its enumerations
pub mod profile;

mod lenient;

pub use condition::ConditionSet;
pub use exercise::{ExerciseCatalogRow, ExerciseCategory, Prescription, RoutineEntry, RoutinePlan};
pub use meal::{DayPlan, DietPlan, MealCatalogRow, MealSlot, MealSource, PlannedMeal};
pub use profile::{ActivityLevel, BiometricProfile, DietPreference, Goal, GoalType, Sex};

/// Normalize a free-form label for comparison (`"Non_Vegetarian "` -> `"non-vegetarian"`)
#[must_use]
pub fn normalize_label(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}
