// ABOUTME: Recommendation orchestration: validation, condition extraction, routine and diet plan
// ABOUTME: Composes the independent engine components over the process-wide catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::CatalogStore;
use crate::config::IntelligenceConfig;
use crate::errors::AppResult;
use crate::intelligence::calorie_model::{calculate_calorie_targets, CalorieTargets};
use crate::intelligence::condition_extractor::HealthConditionExtractor;
use crate::intelligence::diet_planner::DietPlanner;
use crate::intelligence::intensity::{assess_intensity, BmiCategory, IntensityAssessment};
use crate::intelligence::routine_builder::RoutineBuilder;
use crate::logging::AppLogger;
use crate::models::{BiometricProfile, ConditionSet, DietPlan, RoutinePlan};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Profile plus optional free-text medical history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Biometric inputs
    #[serde(flatten)]
    pub profile: BiometricProfile,
    /// Text already extracted from an uploaded document, if any
    #[serde(default)]
    pub medical_history: Option<String>,
}

impl RecommendationRequest {
    /// Request without medical history
    #[must_use]
    pub const fn new(profile: BiometricProfile) -> Self {
        Self {
            profile,
            medical_history: None,
        }
    }

    /// Attach medical history text
    #[must_use]
    pub fn with_medical_history(mut self, text: impl Into<String>) -> Self {
        self.medical_history = Some(text.into());
        self
    }
}

/// Routine, diet plan, and the intermediate values that produced them
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// Unique id for log correlation
    pub request_id: Uuid,
    /// Generation time
    pub generated_at: DateTime<Utc>,
    /// Body mass index
    pub bmi: f64,
    /// BMI bucket
    pub bmi_category: BmiCategory,
    /// Intensity score (40-70)
    pub intensity: u32,
    /// Goal-adjusted daily calories
    pub daily_calories: f64,
    /// BMR and maintenance behind the daily target
    pub calories: CalorieTargets,
    /// Detected health conditions
    pub conditions: ConditionSet,
    /// Exercise routine
    pub routine: RoutinePlan,
    /// Multi-day meal plan
    pub diet_plan: DietPlan,
}

/// Produces recommendations from the catalogs and engine configuration
pub struct RecommendationService<'a> {
    catalogs: &'a CatalogStore,
    config: &'a IntelligenceConfig,
    extractor: HealthConditionExtractor,
}

impl<'a> RecommendationService<'a> {
    /// Service using the process-wide engine configuration
    #[must_use]
    pub fn new(catalogs: &'a CatalogStore) -> Self {
        Self::with_config(catalogs, IntelligenceConfig::global())
    }

    /// Service with explicit configuration
    #[must_use]
    pub fn with_config(catalogs: &'a CatalogStore, config: &'a IntelligenceConfig) -> Self {
        Self {
            catalogs,
            config,
            extractor: HealthConditionExtractor::default(),
        }
    }

    /// Conditions mentioned in optional medical text
    #[must_use]
    pub fn conditions(&self, medical_history: Option<&str>) -> ConditionSet {
        medical_history.map_or_else(ConditionSet::new, |text| self.extractor.extract(text))
    }

    /// BMI, bucket, and intensity score
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for invalid weight or height
    pub fn intensity(&self, weight_kg: f64, height_cm: f64) -> AppResult<IntensityAssessment> {
        assess_intensity(weight_kg, height_cm, &self.config.intensity)
    }

    /// Calorie targets for a profile
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the profile fails validation
    pub fn calories(&self, profile: &BiometricProfile) -> AppResult<CalorieTargets> {
        calculate_calorie_targets(profile, &self.config.nutrition)
    }

    /// Validate the request and build the routine and diet plan
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the profile is rejected; catalog problems
    /// never fail a request
    #[instrument(skip_all, fields(goal = request.profile.goal.as_str()))]
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        request: &RecommendationRequest,
        rng: &mut R,
    ) -> AppResult<RecommendationResponse> {
        let started = Instant::now();
        let profile = &request.profile;

        if let Err(e) = profile.validate() {
            AppLogger::log_rejected_request(
                &e.message,
                e.details
                    .as_ref()
                    .and_then(|details| details.get("field"))
                    .and_then(serde_json::Value::as_str),
            );
            return Err(e);
        }

        let conditions = self.conditions(request.medical_history.as_deref());
        let assessment = self.intensity(profile.weight_kg, profile.height_cm)?;
        let routine =
            RoutineBuilder::new(&self.config.routine).build(self.catalogs, assessment.score, rng);
        let calories = self.calories(profile)?;
        let diet_plan = DietPlanner::new(self.catalogs, &self.config.diet).plan(
            profile,
            calories.daily_target,
            &conditions,
            rng,
        );

        let request_id = Uuid::new_v4();
        debug!(
            request.id = %request_id,
            routine.entries = routine.len(),
            diet.days = diet_plan.days.len(),
            "Assembled recommendation"
        );
        AppLogger::log_plan_generated(
            &request_id.to_string(),
            assessment.score,
            calories.daily_target,
            conditions.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(RecommendationResponse {
            request_id,
            generated_at: Utc::now(),
            bmi: assessment.bmi,
            bmi_category: assessment.category,
            intensity: assessment.score,
            daily_calories: calories.daily_target,
            calories,
            conditions,
            routine,
            diet_plan,
        })
    }

    /// [`Self::recommend`] with the thread-local random source
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the profile is rejected
    pub fn recommend_with_thread_rng(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationResponse> {
        self.recommend(request, &mut rand::thread_rng())
    }
}
