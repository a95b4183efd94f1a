// ABOUTME: Tests for the diet planner state machine and its fallbacks
// ABOUTME: Covers filtering, calorie targeting, condition exclusion and revert, synthesis, static plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_planner::constants::health::labels;
use fitai_planner::intelligence::config::intelligence::DietConfig;
use fitai_planner::intelligence::diet_planner::{
    exclude_restricted_meals, plan_diet, static_fallback_plan, DietPlanner,
};
use fitai_planner::models::{
    ConditionSet, DietPlan, DietPreference, Goal, MealCatalogRow, MealSlot, MealSource,
};
use serde_json::json;

mod common;

use common::{full_day_meals, meal, profile_with, reference_profile, seeded_rng, tagged_meal};

/// Daily target whose breakfast share rounds to 495
const DAILY_CALORIES: f64 = 1978.2;

fn plan(catalog: &[MealCatalogRow], conditions: &ConditionSet) -> DietPlan {
    plan_diet(
        catalog,
        &reference_profile(),
        DAILY_CALORIES,
        conditions,
        &DietConfig::default(),
        &mut seeded_rng(11),
    )
}

fn description(plan: &DietPlan, day: &str, slot: MealSlot) -> String {
    plan.day(day).unwrap().meal(slot).unwrap().description.clone()
}

fn conditions(labels: &[&str]) -> ConditionSet {
    labels.iter().copied().map(str::to_owned).collect()
}

#[test]
fn test_seven_days_of_six_slots() {
    common::init_test_logging();
    let plan = plan(&full_day_meals(), &ConditionSet::new());

    assert_eq!(plan.days.len(), 7);
    for (index, day) in plan.days.iter().enumerate() {
        assert_eq!(day.label(), format!("Day {}", index + 1));
        let slots: Vec<MealSlot> = day.meals.iter().map(|meal| meal.slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
    }
}

#[test]
fn test_closest_calories_selected_per_slot() {
    let plan = plan(&full_day_meals(), &ConditionSet::new());

    // Breakfast target 495: 480 beats 350
    assert_eq!(
        description(&plan, "Day 1", MealSlot::Breakfast),
        "Idli sambar - 480 calories"
    );
    // Lunch target 593: 620 (27 away) beats 550 (43 away)
    assert_eq!(
        description(&plan, "Day 3", MealSlot::Lunch),
        "Rajma chawal - 620 calories"
    );
    let lunch = plan.day("Day 3").unwrap().meal(MealSlot::Lunch).unwrap();
    assert_eq!(lunch.calories, Some(620.0));
    assert_eq!(lunch.source, MealSource::Catalog);
}

#[test]
fn test_conditions_annotate_catalog_meals() {
    let plan = plan(
        &full_day_meals(),
        &conditions(&[labels::ASTHMA, labels::MIGRAINE]),
    );
    assert_eq!(
        description(&plan, "Day 1", MealSlot::MidMorning),
        "Fruit bowl - 150 calories (Suitable for: Asthma, Migraine)"
    );
}

#[test]
fn test_missing_slot_is_synthesized() {
    let catalog: Vec<MealCatalogRow> = full_day_meals()
        .into_iter()
        .filter(|row| row.meal_type != "Before Bed")
        .collect();
    let plan = plan(&catalog, &ConditionSet::new());

    let meal = plan.day("Day 7").unwrap().meal(MealSlot::BeforeBed).unwrap();
    assert_eq!(meal.description, "Custom meal - Target: 99 calories");
    assert_eq!(meal.calories, Some(99.0));
    assert_eq!(meal.source, MealSource::Synthesized);
}

#[test]
fn test_synthesized_meal_keeps_condition_suffix() {
    let catalog = vec![meal("Poha", "Breakfast", json!(350))];
    let plan = plan(&catalog, &conditions(&[labels::DIABETES]));
    assert_eq!(
        description(&plan, "Day 1", MealSlot::Dinner),
        "Custom meal - Target: 396 calories (Suitable for: Diabetes)"
    );
}

#[test]
fn test_restricted_meal_excluded_even_when_closest() {
    let catalog = vec![
        meal("Sweet pancakes with syrup", "Breakfast", json!(495)),
        meal("Oats upma", "Breakfast", json!(300)),
    ];
    let plan = plan(&catalog, &conditions(&[labels::DIABETES]));

    for day in &plan.days {
        let breakfast = day.meal(MealSlot::Breakfast).unwrap();
        assert_eq!(
            breakfast.description,
            "Oats upma - 300 calories (Suitable for: Diabetes)"
        );
    }
}

#[test]
fn test_all_candidates_restricted_reverts_to_unfiltered_set() {
    let catalog = vec![
        meal("Chocolate cake", "Breakfast", json!(480)),
        meal("Fried dough with butter", "Breakfast", json!(520)),
    ];
    let plan = plan(
        &catalog,
        &conditions(&[labels::DIABETES, labels::HEART_DISEASE]),
    );

    let breakfast = plan.day("Day 1").unwrap().meal(MealSlot::Breakfast).unwrap();
    assert_eq!(breakfast.source, MealSource::Catalog);
    assert_eq!(
        breakfast.description,
        "Chocolate cake - 480 calories (Suitable for: Diabetes, Heart Disease)"
    );
}

#[test]
fn test_exclusion_is_case_insensitive_and_unions_conditions() {
    let rows = [
        meal("SALTY crackers", "Lunch", json!(200)),
        meal("Deep FRIED samosa", "Lunch", json!(300)),
        meal("Steamed dhokla", "Lunch", json!(250)),
    ];
    let candidates: Vec<&MealCatalogRow> = rows.iter().collect();
    let kept = exclude_restricted_meals(
        candidates,
        &conditions(&[labels::HIGH_BLOOD_PRESSURE, labels::HEART_DISEASE]),
    );
    let names: Vec<&str> = kept.iter().map(|row| row.food_item.as_str()).collect();
    assert_eq!(names, vec!["Steamed dhokla"]);
}

#[test]
fn test_conditions_without_restrictions_change_nothing() {
    let rows = [meal("Chocolate cake", "Dinner", json!(400))];
    let candidates: Vec<&MealCatalogRow> = rows.iter().collect();
    let kept = exclude_restricted_meals(candidates, &conditions(&[labels::ASTHMA]));
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_diet_preference_filter_is_case_insensitive() {
    let catalog = vec![
        tagged_meal("Chicken sandwich", "Breakfast", 495.0, "Non-Vegetarian", "maintenance"),
        tagged_meal("Paneer paratha", "Breakfast", 520.0, "vegetarian", "maintenance"),
    ];
    let vegetarian = plan(&catalog, &ConditionSet::new());
    assert_eq!(
        description(&vegetarian, "Day 1", MealSlot::Breakfast),
        "Paneer paratha - 520 calories"
    );

    let meat_eater = plan_diet(
        &catalog,
        &profile_with(Goal::Maintenance, DietPreference::NonVegetarian),
        DAILY_CALORIES,
        &ConditionSet::new(),
        &DietConfig::default(),
        &mut seeded_rng(12),
    );
    assert_eq!(
        description(&meat_eater, "Day 1", MealSlot::Breakfast),
        "Chicken sandwich - 495 calories"
    );
}

#[test]
fn test_untagged_rows_dropped_when_diet_column_present() {
    let catalog = vec![
        meal("Mystery platter", "Breakfast", json!(495)),
        tagged_meal("Upma", "Breakfast", 300.0, "Vegetarian", "maintenance"),
    ];
    let plan = plan(&catalog, &ConditionSet::new());
    assert_eq!(
        description(&plan, "Day 1", MealSlot::Breakfast),
        "Upma - 300 calories"
    );
}

#[test]
fn test_goal_filter_applies_only_for_gain_or_loss() {
    let catalog = vec![
        tagged_meal("Light salad", "Breakfast", 300.0, "Vegetarian", "weight_loss"),
        tagged_meal("Banana shake", "Breakfast", 700.0, "Vegetarian", "weight_gain"),
        tagged_meal("Poha", "Breakfast", 480.0, "Vegetarian", "maintenance"),
    ];
    let planner_config = DietConfig::default();
    let planner = DietPlanner::new(catalog.as_slice(), &planner_config);
    let none = ConditionSet::new();

    let loss = planner.slot_candidates(
        &profile_with(Goal::WeightLoss, DietPreference::Vegetarian),
        MealSlot::Breakfast,
        &none,
    );
    assert_eq!(loss.len(), 1);
    assert_eq!(loss[0].food_item, "Light salad");

    let gain = planner.slot_candidates(
        &profile_with(Goal::WeightGain, DietPreference::Vegetarian),
        MealSlot::Breakfast,
        &none,
    );
    assert_eq!(gain[0].food_item, "Banana shake");

    let maintenance = planner.slot_candidates(&reference_profile(), MealSlot::Breakfast, &none);
    assert_eq!(maintenance.len(), 3);
}

#[test]
fn test_catalog_without_optional_columns_is_unfiltered() {
    let catalog = full_day_meals();
    let planner_config = DietConfig::default();
    let planner = DietPlanner::new(catalog.as_slice(), &planner_config);
    let candidates = planner.slot_candidates(
        &profile_with(Goal::WeightLoss, DietPreference::Vegan),
        MealSlot::Breakfast,
        &ConditionSet::new(),
    );
    assert_eq!(candidates.len(), 2);
}

#[test]
fn test_non_numeric_calories_fall_back_to_random_pick() {
    let catalog = vec![
        meal("Thali", "Lunch", json!("lots")),
        meal("Buffet plate", "Lunch", json!(null)),
    ];
    for seed in 0..20 {
        let plan = plan_diet(
            &catalog,
            &reference_profile(),
            DAILY_CALORIES,
            &ConditionSet::new(),
            &DietConfig::default(),
            &mut seeded_rng(seed),
        );
        let lunch = plan.day("Day 1").unwrap().meal(MealSlot::Lunch).unwrap();
        assert!(
            lunch.description == "Thali - lots calories"
                || lunch.description == "Buffet plate - unknown calories",
            "unexpected {}",
            lunch.description
        );
        assert_eq!(lunch.calories, None);
    }
}

#[test]
fn test_numeric_strings_count_as_calories() {
    let catalog = vec![
        meal("Dosa", "Breakfast", json!("480")),
        meal("Vada", "Breakfast", json!(" 350 ")),
    ];
    let plan = plan(&catalog, &ConditionSet::new());
    let breakfast = plan.day("Day 2").unwrap().meal(MealSlot::Breakfast).unwrap();
    assert_eq!(breakfast.description, "Dosa - 480 calories");
    assert_eq!(breakfast.calories, Some(480.0));
}

#[test]
fn test_empty_catalog_uses_static_vegetarian_plan() {
    let plan = plan(&[], &ConditionSet::new());

    assert_eq!(plan.days.len(), 7);
    let breakfast = plan.day("Day 4").unwrap().meal(MealSlot::Breakfast).unwrap();
    assert_eq!(breakfast.description, "Oatmeal with fruits and nuts - 495 calories");
    assert_eq!(breakfast.source, MealSource::StaticFallback);
    assert_eq!(breakfast.calories, Some(495.0));
}

#[test]
fn test_static_plan_follows_preference_and_notes_conditions() {
    let plan = static_fallback_plan(
        &profile_with(Goal::WeightLoss, DietPreference::NonVegetarian),
        DAILY_CALORIES,
        &conditions(&[labels::HIGH_CHOLESTEROL]),
        &DietConfig::default(),
    );
    assert_eq!(
        description(&plan, "Day 1", MealSlot::Breakfast),
        "Scrambled eggs with whole grain toast - 495 calories (Plan adjusted for: High Cholesterol)"
    );
    assert!((plan.days[0].total_calories() - 1979.0).abs() < 1e-9);
}

#[test]
fn test_plan_serializes_as_day_and_slot_maps() {
    let plan = plan(&full_day_meals(), &ConditionSet::new());
    let json = serde_json::to_value(&plan).unwrap();

    let day_one = &json["Day 1"];
    assert_eq!(day_one["Breakfast"]["description"], "Idli sambar - 480 calories");
    assert_eq!(day_one["Breakfast"]["calories"], 480.0);
    assert!(day_one.get("Afternoon Snack").is_some());
    assert!(json.get("Day 7").is_some());
    assert!(json.get("Day 8").is_none());
}

#[test]
fn test_plan_length_follows_config() {
    let config = DietConfig {
        plan_days: 3,
        ..DietConfig::default()
    };
    let plan = plan_diet(
        &full_day_meals(),
        &reference_profile(),
        DAILY_CALORIES,
        &ConditionSet::new(),
        &config,
        &mut seeded_rng(13),
    );
    assert_eq!(plan.days.len(), 3);
}
