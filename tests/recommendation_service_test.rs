// ABOUTME: End-to-end tests for the recommendation service
// ABOUTME: Covers validation, composition of routine and diet plan, and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_planner::catalog::CatalogStore;
use fitai_planner::config::IntelligenceConfig;
use fitai_planner::errors::ErrorCode;
use fitai_planner::intelligence::intensity::BmiCategory;
use fitai_planner::models::{
    ActivityLevel, BiometricProfile, DietPreference, ExerciseCategory, Goal, MealSlot,
    RoutineEntry, Sex,
};
use fitai_planner::services::{RecommendationRequest, RecommendationService};
use serde_json::json;

mod common;

use common::{exercise_catalog, full_day_meals, reference_profile, seeded_rng};

fn store() -> CatalogStore {
    CatalogStore::from_rows(exercise_catalog(20), full_day_meals())
}

#[test]
fn test_full_recommendation() {
    common::init_test_logging();
    let catalogs = store();
    let config = IntelligenceConfig::default();
    let service = RecommendationService::with_config(&catalogs, &config);

    let request = RecommendationRequest::new(reference_profile())
        .with_medical_history("Type 2 diabetic. Family history of heart disease.");
    let response = service.recommend(&request, &mut seeded_rng(1)).unwrap();

    assert_eq!(response.bmi_category, BmiCategory::Normal);
    assert_eq!(response.intensity, 70);
    assert!((response.daily_calories - 1941.0).abs() < 1e-6);
    assert_eq!(response.conditions.joined(), "Diabetes, Heart Disease");
    assert_eq!(response.routine.in_category(ExerciseCategory::Warmup).count(), 14);
    assert_eq!(response.routine.in_category(ExerciseCategory::Exercise).count(), 20);
    assert_eq!(response.diet_plan.days.len(), 7);

    let breakfast = response.diet_plan.days[0].meal(MealSlot::Breakfast).unwrap();
    assert!(breakfast
        .description
        .ends_with("(Suitable for: Diabetes, Heart Disease)"));
}

#[test]
fn test_invalid_profile_rejected_before_planning() {
    let catalogs = store();
    let config = IntelligenceConfig::default();
    let service = RecommendationService::with_config(&catalogs, &config);

    let request = RecommendationRequest::new(BiometricProfile {
        height_cm: 0.0,
        ..reference_profile()
    });
    let err = service.recommend(&request, &mut seeded_rng(2)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.http_status(), 400);
}

#[test]
fn test_missing_catalogs_use_documented_fallbacks() {
    let catalogs = CatalogStore::default();
    let config = IntelligenceConfig::default();
    let service = RecommendationService::with_config(&catalogs, &config);

    let response = service
        .recommend(&RecommendationRequest::new(reference_profile()), &mut seeded_rng(3))
        .unwrap();

    assert_eq!(response.routine.len(), 1);
    assert!(matches!(
        response.routine.entries[0],
        RoutineEntry::Diagnostic { .. }
    ));
    let breakfast = response.diet_plan.days[0].meal(MealSlot::Breakfast).unwrap();
    assert_eq!(breakfast.description, "Oatmeal with fruits and nuts - 485 calories");
}

#[test]
fn test_request_deserializes_leniently() {
    let request: RecommendationRequest = serde_json::from_value(json!({
        "age": 45,
        "height_cm": 160.0,
        "weight_kg": 82.0,
        "sex": "Female",
        "activity_level": "very lazy",
        "goal": "weight_loss",
        "diet_preference": "Keto",
        "medical_history": "asthma"
    }))
    .unwrap();

    assert_eq!(request.profile.sex, Sex::Female);
    assert_eq!(request.profile.activity_level, ActivityLevel::Unspecified);
    assert_eq!(request.profile.goal, Goal::WeightLoss);
    assert_eq!(
        request.profile.diet_preference,
        DietPreference::Other("Keto".to_owned())
    );
    assert_eq!(request.medical_history.as_deref(), Some("asthma"));
}

#[test]
fn test_response_serializes_plan_structure() {
    let catalogs = store();
    let config = IntelligenceConfig::default();
    let service = RecommendationService::with_config(&catalogs, &config);
    let response = service
        .recommend(&RecommendationRequest::new(reference_profile()), &mut seeded_rng(4))
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["request_id"].is_string());
    assert_eq!(json["intensity"], 70);
    assert_eq!(json["bmi_category"], "normal");
    assert_eq!(json["conditions"], json!([]));
    assert_eq!(json["routine"]["entries"][0]["kind"], "exercise");
    assert!(json["diet_plan"]["Day 7"]["Before Bed"]["description"].is_string());
}

#[test]
fn test_component_accessors_match_full_response() {
    let catalogs = store();
    let config = IntelligenceConfig::default();
    let service = RecommendationService::with_config(&catalogs, &config);
    let profile = reference_profile();

    let assessment = service.intensity(profile.weight_kg, profile.height_cm).unwrap();
    let calories = service.calories(&profile).unwrap();
    let response = service
        .recommend(&RecommendationRequest::new(profile), &mut seeded_rng(5))
        .unwrap();

    assert_eq!(assessment.score, response.intensity);
    assert!((calories.daily_target - response.daily_calories).abs() < f64::EPSILON);
    assert!(service.conditions(None).is_empty());
}
