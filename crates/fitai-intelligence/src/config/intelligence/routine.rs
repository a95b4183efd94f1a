// ABOUTME: Routine builder configuration: per-category share of the intensity score
// ABOUTME: Warmup, main exercise, and cooldown shares plus the empty-catalog message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitai_core::models::ExerciseCategory;
use serde::{Deserialize, Serialize};

/// Share of the intensity score given to each category, in whole percent
///
/// `floor(intensity × share)` is computed in integer arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineConfig {
    /// Warmup share (20%)
    pub warmup_percent: u32,
    /// Main exercise share (60%)
    pub exercise_percent: u32,
    /// Cooldown share (20%)
    pub cooldown_percent: u32,
    /// Single entry returned when the catalog has no rows
    pub empty_catalog_message: String,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            warmup_percent: 20,
            exercise_percent: 60,
            cooldown_percent: 20,
            empty_catalog_message:
                "No exercises available: the exercise catalog is empty or could not be loaded"
                    .to_owned(),
        }
    }
}

impl RoutineConfig {
    /// Share for a category
    #[must_use]
    pub const fn percent_for(&self, category: ExerciseCategory) -> u32 {
        match category {
            ExerciseCategory::Warmup => self.warmup_percent,
            ExerciseCategory::Exercise => self.exercise_percent,
            ExerciseCategory::Cooldown => self.cooldown_percent,
        }
    }

    /// Maximum number of exercises for a category at the given intensity
    #[must_use]
    pub const fn max_count(&self, intensity: u32, category: ExerciseCategory) -> u32 {
        intensity.saturating_mul(self.percent_for(category)) / 100
    }

    /// Validate shares
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when the shares exceed 100%
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self
            .warmup_percent
            .saturating_add(self.exercise_percent)
            .saturating_add(self.cooldown_percent);
        if total > 100 {
            return Err(ConfigError::InvalidWeights(
                "routine category shares must not exceed 100%",
            ));
        }
        Ok(())
    }
}
