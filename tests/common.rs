// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, profile builders, and small catalog fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitai_planner`

use fitai_planner::models::{
    ActivityLevel, BiometricProfile, DietPreference, ExerciseCatalogRow, ExerciseCategory, Goal,
    MealCatalogRow, Sex,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// 30-year-old sedentary male, 170 cm / 70 kg, maintenance, vegetarian
pub fn reference_profile() -> BiometricProfile {
    BiometricProfile {
        age: 30,
        height_cm: 170.0,
        weight_kg: 70.0,
        sex: Sex::Male,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Maintenance,
        diet_preference: DietPreference::Vegetarian,
    }
}

/// Reference profile with a different goal and diet
pub fn profile_with(goal: Goal, diet: DietPreference) -> BiometricProfile {
    BiometricProfile {
        goal,
        diet_preference: diet,
        ..reference_profile()
    }
}

/// Exercise row with an optional rep range
pub fn exercise(
    name: &str,
    category: ExerciseCategory,
    reps: Option<(u32, u32)>,
) -> ExerciseCatalogRow {
    ExerciseCatalogRow {
        name: name.to_owned(),
        category,
        reps_min: reps.map(|(min, _)| min),
        reps_max: reps.map(|(_, max)| max),
    }
}

/// `count` rows per category, named `"<category> <n>"`, every row with reps 8-12
pub fn exercise_catalog(count: usize) -> Vec<ExerciseCatalogRow> {
    ExerciseCategory::ORDERED
        .iter()
        .flat_map(|category| {
            (1..=count).map(move |n| {
                exercise(&format!("{} {n}", category.as_str()), *category, Some((8, 12)))
            })
        })
        .collect()
}

/// Meal row without diet or goal columns
pub fn meal(food: &str, slot: &str, calories: Value) -> MealCatalogRow {
    MealCatalogRow {
        food_item: food.to_owned(),
        meal_type: slot.to_owned(),
        calories,
        diet_preference: None,
        goal_type: None,
    }
}

/// Meal row with diet and goal columns
pub fn tagged_meal(food: &str, slot: &str, calories: f64, diet: &str, goal: &str) -> MealCatalogRow {
    MealCatalogRow {
        diet_preference: Some(diet.to_owned()),
        goal_type: Some(goal.to_owned()),
        ..meal(food, slot, json!(calories))
    }
}

/// One untagged meal per slot, calories chosen per slot
pub fn full_day_meals() -> Vec<MealCatalogRow> {
    vec![
        meal("Poha", "Breakfast", json!(350)),
        meal("Idli sambar", "Breakfast", json!(480)),
        meal("Fruit bowl", "Mid-Morning", json!(150)),
        meal("Dal rice", "Lunch", json!(550)),
        meal("Rajma chawal", "Lunch", json!(620)),
        meal("Roasted makhana", "Afternoon Snack", json!(120)),
        meal("Palak paneer with roti", "Dinner", json!(480)),
        meal("Turmeric milk", "Before Bed", json!(110)),
    ]
}

/// Write a JSON value to `dir/file_name`
pub fn write_json(dir: &Path, file_name: &str, value: &Value) {
    fs::write(dir.join(file_name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}
