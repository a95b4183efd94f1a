// ABOUTME: Category-quota routine builder over the exercise catalog
// ABOUTME: Warmup, main, and cooldown quotas scale with the BMI intensity score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::ExerciseCatalog;
use crate::config::intelligence::RoutineConfig;
use fitai_core::models::{
    ExerciseCatalogRow, ExerciseCategory, Prescription, RoutineEntry, RoutinePlan,
};
use rand::Rng;
use tracing::{debug, warn};

/// Builds ordered warmup → exercise → cooldown routines
pub struct RoutineBuilder<'a> {
    config: &'a RoutineConfig,
}

impl<'a> RoutineBuilder<'a> {
    /// Create a builder with the given shares
    #[must_use]
    pub const fn new(config: &'a RoutineConfig) -> Self {
        Self { config }
    }

    /// Build a routine for an intensity score
    ///
    /// Each category takes rows in catalog order until its quota
    /// `floor(intensity × share)` is reached. An empty catalog yields a single
    /// diagnostic entry instead of an empty plan.
    pub fn build<C, R>(&self, catalog: &C, intensity: u32, rng: &mut R) -> RoutinePlan
    where
        C: ExerciseCatalog + ?Sized,
        R: Rng + ?Sized,
    {
        if catalog.is_exercise_catalog_empty() {
            warn!("Exercise catalog is empty, returning diagnostic routine");
            return RoutinePlan {
                entries: vec![RoutineEntry::Diagnostic {
                    message: self.config.empty_catalog_message.clone(),
                }],
            };
        }

        let mut entries = Vec::new();
        for category in ExerciseCategory::ORDERED {
            let max_count = self.config.max_count(intensity, category);
            let mut included = 0_u32;
            for row in catalog.rows_in_category(category) {
                if included >= max_count {
                    break;
                }
                entries.push(prescribe(row, rng));
                included += 1;
            }
            debug!(
                category = category.as_str(),
                max_count, included, "Selected exercises for category"
            );
        }

        RoutinePlan { entries }
    }
}

fn prescribe<R: Rng + ?Sized>(row: &ExerciseCatalogRow, rng: &mut R) -> RoutineEntry {
    let prescription = row
        .rep_range()
        .map_or(Prescription::DurationBased, |(min, max)| {
            Prescription::Reps(rng.gen_range(min..=max))
        });
    RoutineEntry::Exercise {
        name: row.name.clone(),
        category: row.category,
        prescription,
    }
}

/// Build a routine with the given config
pub fn build_routine<C, R>(
    catalog: &C,
    intensity: u32,
    config: &RoutineConfig,
    rng: &mut R,
) -> RoutinePlan
where
    C: ExerciseCatalog + ?Sized,
    R: Rng + ?Sized,
{
    RoutineBuilder::new(config).build(catalog, intensity, rng)
}
