// ABOUTME: Read-only catalog interfaces the routine builder and diet planner consume
// ABOUTME: Rows are iterated in the catalog's native order; missing columns mean no filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitai_core::models::{ExerciseCatalogRow, ExerciseCategory, MealCatalogRow};

/// Source of exercise rows
pub trait ExerciseCatalog {
    /// All rows in catalog order
    fn exercise_rows(&self) -> &[ExerciseCatalogRow];

    /// Whether the catalog has no rows at all
    fn is_exercise_catalog_empty(&self) -> bool {
        self.exercise_rows().is_empty()
    }

    /// Rows of one category, in catalog order
    fn rows_in_category(&self, category: ExerciseCategory) -> Vec<&ExerciseCatalogRow> {
        self.exercise_rows()
            .iter()
            .filter(|row| row.category == category)
            .collect()
    }
}

/// Source of meal rows
pub trait MealCatalog {
    /// All rows in catalog order
    fn meal_rows(&self) -> &[MealCatalogRow];

    /// Whether the catalog has no rows at all
    fn is_meal_catalog_empty(&self) -> bool {
        self.meal_rows().is_empty()
    }

    /// Whether any row carries a `diet_preference` value
    fn has_diet_preference_column(&self) -> bool {
        self.meal_rows()
            .iter()
            .any(|row| row.diet_preference.is_some())
    }

    /// Whether any row carries a `goal_type` value
    fn has_goal_type_column(&self) -> bool {
        self.meal_rows().iter().any(|row| row.goal_type.is_some())
    }
}

impl ExerciseCatalog for [ExerciseCatalogRow] {
    fn exercise_rows(&self) -> &[ExerciseCatalogRow] {
        self
    }
}

impl ExerciseCatalog for Vec<ExerciseCatalogRow> {
    fn exercise_rows(&self) -> &[ExerciseCatalogRow] {
        self
    }
}

impl MealCatalog for [MealCatalogRow] {
    fn meal_rows(&self) -> &[MealCatalogRow] {
        self
    }
}

impl MealCatalog for Vec<MealCatalogRow> {
    fn meal_rows(&self) -> &[MealCatalogRow] {
        self
    }
}
