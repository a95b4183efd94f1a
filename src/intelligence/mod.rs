// ABOUTME: Intelligence module re-exports from the fitai-intelligence crate
// ABOUTME: Exposes the recommendation engine under `fitai_planner::intelligence`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The recommendation engine: condition extraction, BMI intensity, routine
//! building, calorie model, and diet planning.

// Re-export all public items from fitai-intelligence
pub use fitai_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::diet_planner::DietPlanner)
pub use fitai_intelligence::{
    calorie_model, catalog, condition_extractor, config, diet_planner, intensity, routine_builder,
};
