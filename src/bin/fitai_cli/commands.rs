// ABOUTME: Command implementations for fitai-cli
// ABOUTME: Each command prints pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitai_planner::catalog::CatalogStore;
use fitai_planner::config::environment::EngineConfig;
use fitai_planner::documents::{read_document_text, PlainTextExtractor};
use fitai_planner::intelligence::condition_extractor::detect_health_conditions;
use fitai_planner::intelligence::{assess_intensity, calculate_calorie_targets, IntelligenceConfig};
use fitai_planner::models::BiometricProfile;
use fitai_planner::services::{RecommendationRequest, RecommendationService};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::Path;
use tracing::info;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Medical text from the flag or the document, if either was given
pub fn resolve_medical_history(
    text: Option<String>,
    file: Option<&Path>,
) -> Result<Option<String>> {
    match (text, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => Ok(Some(read_document_text(path, &PlainTextExtractor)?)),
        (None, None) => Ok(None),
    }
}

/// Full recommendation
pub fn plan(
    config: &EngineConfig,
    intelligence: &IntelligenceConfig,
    profile: BiometricProfile,
    medical_history: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let catalogs = CatalogStore::init_global(config);
    let service = RecommendationService::with_config(catalogs, intelligence);
    let request = RecommendationRequest {
        profile,
        medical_history,
    };

    let response = match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            service.recommend(&request, &mut ChaCha8Rng::seed_from_u64(seed))?
        }
        None => service.recommend_with_thread_rng(&request)?,
    };
    print_json(&response)
}

/// Detected conditions
pub fn conditions(text: &str) -> Result<()> {
    print_json(&detect_health_conditions(Some(text)))
}

/// BMI and intensity
pub fn intensity(config: &IntelligenceConfig, weight_kg: f64, height_cm: f64) -> Result<()> {
    let assessment = assess_intensity(weight_kg, height_cm, &config.intensity)?;
    print_json(&assessment)
}

/// Calorie targets
pub fn calories(config: &IntelligenceConfig, profile: &BiometricProfile) -> Result<()> {
    let targets = calculate_calorie_targets(profile, &config.nutrition)?;
    print_json(&targets)
}
