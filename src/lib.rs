// ABOUTME: Main library entry point for the FitAI planner
// ABOUTME: Wires catalogs, configuration, logging, and the recommendation service together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitAI Planner
//!
//! Personalized exercise routines and 7-day meal plans from a user's biometrics
//! and optional free-text medical history.
//!
//! ## Architecture
//!
//! - **fitai-core**: error types, domain models, rule tables
//! - **fitai-intelligence**: the recommendation engine and its configuration
//! - **Catalogs**: exercise and meal reference data, loaded once per process
//! - **Services**: request validation and orchestration of the engine
//! - **Documents**: text extraction interface for uploaded medical records
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitai_planner::catalog::CatalogStore;
//! use fitai_planner::config::environment::EngineConfig;
//! use fitai_planner::errors::AppResult;
//! use fitai_planner::models::{ActivityLevel, BiometricProfile, DietPreference, Goal, Sex};
//! use fitai_planner::services::{RecommendationRequest, RecommendationService};
//!
//! fn main() -> AppResult<()> {
//!     let catalogs = CatalogStore::load(&EngineConfig::from_env());
//!     let service = RecommendationService::new(&catalogs);
//!
//!     let profile = BiometricProfile {
//!         age: 30,
//!         height_cm: 170.0,
//!         weight_kg: 70.0,
//!         sex: Sex::Male,
//!         activity_level: ActivityLevel::Sedentary,
//!         goal: Goal::Maintenance,
//!         diet_preference: DietPreference::Vegetarian,
//!     };
//!     let request = RecommendationRequest::new(profile)
//!         .with_medical_history("history of hypertension");
//!     let response = service.recommend_with_thread_rng(&request)?;
//!     println!("{}", response.daily_calories);
//!     Ok(())
//! }
//! ```

/// Exercise and meal reference catalogs
pub mod catalog;

/// Runtime configuration
pub mod config;

/// Shared constants and rule tables
pub mod constants;

/// Uploaded document text extraction
pub mod documents;

/// Unified error handling
pub mod errors;

/// Recommendation engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Request orchestration
pub mod services;
