// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed rule tables for condition detection, dietary restrictions, and meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! The rule tables here are deliberately flat, ordered association lists so that
//! every detection and exclusion decision can be audited by reading one file.

/// Health condition keyword and dietary restriction tables
pub mod health;
/// Meal slot labels, calorie shares, and static fallback templates
pub mod meals;

/// Service names for structured logging
pub mod service_names {
    /// Planner library / CLI service name
    pub const FITAI_PLANNER: &str = "fitai-planner";
}

/// Biometric input limits enforced before any computation
pub mod limits {
    /// Minimum accepted age in years
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum accepted age in years
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Maximum accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Maximum accepted weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
}
