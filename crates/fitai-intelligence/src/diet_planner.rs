// ABOUTME: Multi-day meal planner with per-slot calorie targeting and condition exclusions
// ABOUTME: Falls back to synthesized meals per slot, or a static template without a catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet Planner
//!
//! For every slot of every day the planner narrows the catalog by diet
//! preference, goal type, and meal type, drops rows restricted by the detected
//! conditions, then picks the row whose calories are closest to the slot target.
//!
//! Two fallbacks exist:
//! - a slot with no candidates gets a synthesized `"Custom meal"` entry
//! - an empty catalog switches the whole plan to a static six-meal template
//!
//! A restriction that would remove every candidate of a slot is ignored for
//! that slot. A slot is never left empty because of a restriction.

use crate::catalog::MealCatalog;
use crate::config::intelligence::DietConfig;
use fitai_core::constants::health::restrictions_for;
use fitai_core::constants::meals::{NON_VEGETARIAN_FALLBACK_MEALS, VEGETARIAN_FALLBACK_MEALS};
use fitai_core::models::{
    BiometricProfile, ConditionSet, DayPlan, DietPlan, MealCatalogRow, MealSlot, MealSource,
    PlannedMeal,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

/// Plans meals from a catalog
pub struct DietPlanner<'a, C: MealCatalog + ?Sized> {
    catalog: &'a C,
    config: &'a DietConfig,
}

impl<'a, C: MealCatalog + ?Sized> DietPlanner<'a, C> {
    /// Create a planner over a catalog
    #[must_use]
    pub const fn new(catalog: &'a C, config: &'a DietConfig) -> Self {
        Self { catalog, config }
    }

    /// Plan `plan_days` days of six meals
    pub fn plan<R: Rng + ?Sized>(
        &self,
        profile: &BiometricProfile,
        daily_calories: f64,
        conditions: &ConditionSet,
        rng: &mut R,
    ) -> DietPlan {
        if self.catalog.is_meal_catalog_empty() {
            warn!("Meal catalog is empty, using static fallback plan");
            return static_fallback_plan(profile, daily_calories, conditions, self.config);
        }

        let candidates_by_slot: Vec<(MealSlot, Vec<&MealCatalogRow>)> = MealSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.slot_candidates(profile, slot, conditions)))
            .collect();

        let days = (1..=self.config.plan_days)
            .map(|day| DayPlan {
                day,
                meals: candidates_by_slot
                    .iter()
                    .map(|(slot, candidates)| {
                        let target = self.config.slot_shares.target_calories(daily_calories, *slot);
                        plan_slot(*slot, candidates, target, conditions, rng)
                    })
                    .collect(),
            })
            .collect();

        info!(
            days = self.config.plan_days,
            daily_calories,
            conditions = %conditions.joined(),
            "Generated diet plan from catalog"
        );
        DietPlan { days }
    }

    /// Rows eligible for a slot after filtering and condition exclusion
    pub fn slot_candidates(
        &self,
        profile: &BiometricProfile,
        slot: MealSlot,
        conditions: &ConditionSet,
    ) -> Vec<&'a MealCatalogRow> {
        let catalog: &'a C = self.catalog;
        let filter_diet = catalog.has_diet_preference_column();
        let goal_type = profile
            .goal
            .catalog_goal_type()
            .filter(|_| catalog.has_goal_type_column());

        let candidates: Vec<&'a MealCatalogRow> = catalog
            .meal_rows()
            .iter()
            .filter(|row| {
                !filter_diet
                    || row
                        .diet_preference
                        .as_deref()
                        .is_some_and(|cell| profile.diet_preference.matches(cell))
            })
            .filter(|row| {
                goal_type.map_or(true, |goal| {
                    row.goal_type.as_deref().is_some_and(|cell| goal.matches(cell))
                })
            })
            .filter(|row| row.is_slot(slot))
            .collect();

        exclude_restricted_meals(candidates, conditions)
    }
}

/// Remove rows whose food item contains a term restricted by any condition
///
/// Returns the input unchanged when exclusion would leave nothing.
#[must_use]
pub fn exclude_restricted_meals<'r>(
    candidates: Vec<&'r MealCatalogRow>,
    conditions: &ConditionSet,
) -> Vec<&'r MealCatalogRow> {
    let restricted: Vec<&str> = conditions
        .iter()
        .filter_map(restrictions_for)
        .flatten()
        .copied()
        .collect();
    if restricted.is_empty() || candidates.is_empty() {
        return candidates;
    }

    let allowed: Vec<&MealCatalogRow> = candidates
        .iter()
        .copied()
        .filter(|row| {
            let food = row.food_item.to_lowercase();
            !restricted.iter().any(|term| food.contains(term))
        })
        .collect();

    if allowed.is_empty() {
        debug!(
            candidates = candidates.len(),
            "Every candidate restricted, keeping unfiltered candidates"
        );
        candidates
    } else {
        allowed
    }
}

/// Row whose calories are closest to `target`; first row wins ties
///
/// Rows without coercible calories are skipped. When no row has usable calories,
/// one candidate is drawn at random.
pub fn select_closest_meal<'r, R: Rng + ?Sized>(
    candidates: &[&'r MealCatalogRow],
    target: i64,
    rng: &mut R,
) -> Option<&'r MealCatalogRow> {
    let target = target as f64;
    let mut best: Option<(&MealCatalogRow, f64)> = None;

    for row in candidates {
        let Some(kcal) = row.calories_kcal() else {
            debug!(food_item = %row.food_item, calories = %row.calories, "Skipping non-numeric calories");
            continue;
        };
        let distance = (kcal - target).abs();
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((row, distance));
        }
    }

    best.map(|(row, _)| row)
        .or_else(|| candidates.choose(rng).copied())
}

fn plan_slot<R: Rng + ?Sized>(
    slot: MealSlot,
    candidates: &[&MealCatalogRow],
    target: i64,
    conditions: &ConditionSet,
    rng: &mut R,
) -> PlannedMeal {
    let suffix = if conditions.is_empty() {
        String::new()
    } else {
        format!(" (Suitable for: {})", conditions.joined())
    };

    match select_closest_meal(candidates, target, rng) {
        Some(row) => PlannedMeal {
            slot,
            description: format!(
                "{} - {} calories{suffix}",
                row.food_item,
                row.calories_display()
            ),
            calories: row.calories_kcal(),
            source: MealSource::Catalog,
        },
        None => {
            debug!(slot = slot.label(), target, "No candidates, synthesizing meal");
            PlannedMeal {
                slot,
                description: format!("Custom meal - Target: {target} calories{suffix}"),
                calories: Some(target as f64),
                source: MealSource::Synthesized,
            }
        }
    }
}

/// Static plan used when no meal catalog is available
#[must_use]
pub fn static_fallback_plan(
    profile: &BiometricProfile,
    daily_calories: f64,
    conditions: &ConditionSet,
    config: &DietConfig,
) -> DietPlan {
    let template = if profile.diet_preference.is_plant_based() {
        &VEGETARIAN_FALLBACK_MEALS
    } else {
        &NON_VEGETARIAN_FALLBACK_MEALS
    };
    let note = if conditions.is_empty() {
        String::new()
    } else {
        format!(" (Plan adjusted for: {})", conditions.joined())
    };

    let day_meals: Vec<PlannedMeal> = template
        .iter()
        .map(|(slot, food)| {
            let target = config.slot_shares.target_calories(daily_calories, *slot);
            PlannedMeal {
                slot: *slot,
                description: format!("{food} - {target} calories{note}"),
                calories: Some(target as f64),
                source: MealSource::StaticFallback,
            }
        })
        .collect();

    DietPlan {
        days: (1..=config.plan_days)
            .map(|day| DayPlan {
                day,
                meals: day_meals.clone(),
            })
            .collect(),
    }
}

/// Plan meals with the given config
pub fn plan_diet<C, R>(
    catalog: &C,
    profile: &BiometricProfile,
    daily_calories: f64,
    conditions: &ConditionSet,
    config: &DietConfig,
    rng: &mut R,
) -> DietPlan
where
    C: MealCatalog + ?Sized,
    R: Rng + ?Sized,
{
    DietPlanner::new(catalog, config).plan(profile, daily_calories, conditions, rng)
}
