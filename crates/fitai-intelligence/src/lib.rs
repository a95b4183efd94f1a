// ABOUTME: Recommendation engine for personalized exercise routines and meal plans
// ABOUTME: Condition extraction, BMI intensity, routine building, calorie model, diet planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitAI Intelligence
//!
//! The recommendation engine. Every component is a synchronous, pure computation
//! over its inputs; randomness is always passed in by the caller.
//!
//! Data flow:
//! - medical text → [`condition_extractor`] → condition set → [`diet_planner`]
//! - weight/height → [`intensity`] → [`routine_builder`]
//! - profile → [`calorie_model`] → [`diet_planner`]

/// Catalog interfaces consumed by the builders
pub mod catalog;
/// Calorie model (BMR, maintenance, goal-adjusted target)
pub mod calorie_model;
/// Keyword-based health condition extraction
pub mod condition_extractor;
/// Engine configuration
pub mod config;
/// Diet planner with condition-aware meal selection
pub mod diet_planner;
/// BMI-bucketed intensity score
pub mod intensity;
/// Category-quota routine builder
pub mod routine_builder;

pub use catalog::{ExerciseCatalog, MealCatalog};
pub use calorie_model::{calculate_calorie_targets, daily_target, CalorieTargets};
pub use condition_extractor::{detect_health_conditions, HealthConditionExtractor};
pub use config::IntelligenceConfig;
pub use diet_planner::DietPlanner;
pub use intensity::{assess_intensity, calculate_intensity, BmiCategory, IntensityAssessment};
pub use routine_builder::RoutineBuilder;
