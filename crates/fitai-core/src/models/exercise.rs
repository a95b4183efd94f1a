// ABOUTME: Exercise catalog rows and the ordered routine plan built from them
// ABOUTME: Categories run warmup, main exercise, then cooldown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient::optional_count;
use super::normalize_label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Routine section an exercise belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExerciseCategory {
    /// Warm-up movements
    Warmup,
    /// Main workout block
    Exercise,
    /// Cool-down and stretching
    Cooldown,
}

impl ExerciseCategory {
    /// Routine order
    pub const ORDERED: [Self; 3] = [Self::Warmup, Self::Exercise, Self::Cooldown];

    /// Parse a catalog category cell
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "warmup" | "warm-up" => Some(Self::Warmup),
            "exercise" | "main" | "workout" => Some(Self::Exercise),
            "cooldown" | "cool-down" => Some(Self::Cooldown),
            _ => None,
        }
    }

    /// Catalog label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Exercise => "exercise",
            Self::Cooldown => "cooldown",
        }
    }
}

impl TryFrom<String> for ExerciseCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown exercise category: {value}"))
    }
}

impl From<ExerciseCategory> for String {
    fn from(value: ExerciseCategory) -> Self {
        value.as_str().to_owned()
    }
}

/// One row of the exercise catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCatalogRow {
    /// Exercise name
    #[serde(alias = "exercise_name", alias = "Exercise", alias = "Name")]
    pub name: String,
    /// Routine section
    #[serde(alias = "Category")]
    pub category: ExerciseCategory,
    /// Lower rep bound (inclusive)
    #[serde(default, alias = "min_reps", deserialize_with = "optional_count")]
    pub reps_min: Option<u32>,
    /// Upper rep bound (inclusive)
    #[serde(default, alias = "max_reps", deserialize_with = "optional_count")]
    pub reps_max: Option<u32>,
}

impl ExerciseCatalogRow {
    /// Inclusive rep range when both bounds are present and ordered
    #[must_use]
    pub fn rep_range(&self) -> Option<(u32, u32)> {
        match (self.reps_min, self.reps_max) {
            (Some(min), Some(max)) if min <= max => Some((min, max)),
            _ => None,
        }
    }
}

/// How an included exercise is prescribed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "reps", rename_all = "snake_case")]
pub enum Prescription {
    /// Fixed repetition count drawn from the catalog range
    Reps(u32),
    /// No rep range in the catalog; performed for time
    DurationBased,
}

/// One line of a routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutineEntry {
    /// A catalog exercise
    Exercise {
        /// Exercise name
        name: String,
        /// Routine section
        category: ExerciseCategory,
        /// Reps or duration
        prescription: Prescription,
    },
    /// Placeholder emitted when the catalog has no rows at all
    Diagnostic {
        /// Explanation shown to the user
        message: String,
    },
}

impl fmt::Display for RoutineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exercise {
                name,
                prescription: Prescription::Reps(reps),
                ..
            } => write!(f, "{name} - {reps} reps"),
            Self::Exercise {
                name,
                prescription: Prescription::DurationBased,
                ..
            } => write!(f, "{name} - Duration-based"),
            Self::Diagnostic { message } => f.write_str(message),
        }
    }
}

/// Ordered warmup → exercise → cooldown routine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutinePlan {
    /// Entries in routine order
    pub entries: Vec<RoutineEntry>,
}

impl RoutinePlan {
    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the routine has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries belonging to one category
    pub fn in_category(&self, category: ExerciseCategory) -> impl Iterator<Item = &RoutineEntry> {
        self.entries.iter().filter(move |entry| {
            matches!(entry, RoutineEntry::Exercise { category: c, .. } if *c == category)
        })
    }

    /// Rendered lines, e.g. `"Squats - 12 reps"`
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
