// ABOUTME: Engine configuration for intensity, routine, calorie, and diet algorithms
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the recommendation engine. Defaults reproduce the
//! engine's fixed rule constants; a handful of values can be overridden from the
//! environment.
//!
//! # Module Structure
//!
//! - `intensity` - BMI buckets and intensity scores
//! - `routine` - Category shares for the routine builder
//! - `nutrition` - BMR coefficients, activity factors, goal adjustments
//! - `diet` - Meal slot calorie shares and plan length

pub mod diet;
pub mod error;
pub mod intensity;
pub mod nutrition;
pub mod routine;

pub use diet::{DietConfig, MealSlotSharesConfig};
pub use error::ConfigError;
pub use intensity::{BmiBoundaryMode, IntensityConfig, IntensityScores};
pub use nutrition::{ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig};
pub use routine::RoutineConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Environment variable selecting `clinical` or `legacy` BMI boundaries
pub const ENV_BMI_BOUNDARIES: &str = "FITAI_BMI_BOUNDARIES";
/// Environment variable overriding both goal surplus and deficit (kcal)
pub const ENV_GOAL_ADJUSTMENT_KCAL: &str = "FITAI_GOAL_ADJUSTMENT_KCAL";
/// Environment variable overriding the number of planned days
pub const ENV_PLAN_DAYS: &str = "FITAI_PLAN_DAYS";

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// BMI-driven intensity buckets
    pub intensity: IntensityConfig,
    /// Routine builder shares
    pub routine: RoutineConfig,
    /// Calorie model
    pub nutrition: NutritionConfig,
    /// Diet planner
    pub diet: DietConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.intensity.validate()?;
        self.routine.validate()?;
        self.nutrition.validate()?;
        self.diet.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_BMI_BOUNDARIES, &mut self.intensity.boundary_mode)?;
        Self::apply_env_var(ENV_PLAN_DAYS, &mut self.diet.plan_days)?;

        // One value drives both directions
        Self::apply_env_var(
            ENV_GOAL_ADJUSTMENT_KCAL,
            &mut self.nutrition.goal_adjustment.surplus_kcal,
        )?;
        Self::apply_env_var(
            ENV_GOAL_ADJUSTMENT_KCAL,
            &mut self.nutrition.goal_adjustment.deficit_kcal,
        )?;

        Ok(self)
    }
}
