// ABOUTME: Meal catalog rows, the six daily meal slots, and the multi-day diet plan
// ABOUTME: DietPlan serializes as "Day N" -> slot label -> {description, calories}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient::{coerce_f64, optional_label};
use super::normalize_label;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// One of the six daily meal slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Mid-morning snack
    MidMorning,
    /// Midday meal
    Lunch,
    /// Afternoon snack
    AfternoonSnack,
    /// Evening meal
    Dinner,
    /// Light snack before sleep
    BeforeBed,
}

impl MealSlot {
    /// Slots in the order they are eaten
    pub const ALL: [Self; 6] = [
        Self::Breakfast,
        Self::MidMorning,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
        Self::BeforeBed,
    ];

    /// Label as used in catalogs and plan output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MidMorning => "Mid-Morning",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
            Self::BeforeBed => "Before Bed",
        }
    }

    /// Parse a catalog `meal_type` cell (case, spaces, and underscores ignored)
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|slot| normalize_label(slot.label()) == wanted)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for MealSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown meal type: {value}"))
    }
}

impl From<MealSlot> for String {
    fn from(value: MealSlot) -> Self {
        value.label().to_owned()
    }
}

/// One row of the meal catalog
///
/// `calories` is kept as the raw cell so rows with non-numeric values stay in the
/// candidate set; they are only skipped by calorie-distance selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCatalogRow {
    /// Food description
    #[serde(alias = "Food Item", alias = "food", alias = "name")]
    pub food_item: String,
    /// Meal slot label (e.g. `"Afternoon Snack"`)
    #[serde(alias = "Meal Type")]
    pub meal_type: String,
    /// Raw calorie cell: number, numeric string, or anything else
    #[serde(default, alias = "Calories")]
    pub calories: Value,
    /// Diet preference label (e.g. `"Vegetarian"`)
    #[serde(
        default,
        alias = "Diet Preference",
        alias = "diet_type",
        deserialize_with = "optional_label"
    )]
    pub diet_preference: Option<String>,
    /// Goal type label (`weight_gain`, `weight_loss`, `maintenance`)
    #[serde(default, alias = "Goal Type", deserialize_with = "optional_label")]
    pub goal_type: Option<String>,
}

impl MealCatalogRow {
    /// Calories as a number, or `None` when the cell cannot be coerced
    #[must_use]
    pub fn calories_kcal(&self) -> Option<f64> {
        coerce_f64(&self.calories)
    }

    /// Calories as displayed in meal descriptions
    #[must_use]
    pub fn calories_display(&self) -> String {
        match (self.calories_kcal(), &self.calories) {
            (Some(kcal), _) => format_kcal(kcal),
            (None, Value::String(text)) if !text.trim().is_empty() => text.trim().to_owned(),
            (None, _) => "unknown".to_owned(),
        }
    }

    /// Whether this row belongs to the given slot
    #[must_use]
    pub fn is_slot(&self, slot: MealSlot) -> bool {
        MealSlot::from_label(&self.meal_type) == Some(slot)
    }
}

/// Render a calorie figure without a trailing `.0` for whole numbers
#[must_use]
pub fn format_kcal(kcal: f64) -> String {
    if kcal.fract() == 0.0 {
        format!("{kcal:.0}")
    } else {
        format!("{kcal}")
    }
}

/// Where a planned meal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSource {
    /// Selected from the meal catalog
    Catalog,
    /// No catalog candidate existed for the slot
    Synthesized,
    /// Meal catalog unavailable; static template used
    StaticFallback,
}

/// A meal assigned to one slot of one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Slot the meal fills
    #[serde(skip)]
    pub slot: MealSlot,
    /// Rendered description, e.g. `"Poha - 350 calories"`
    pub description: String,
    /// Calories when known
    pub calories: Option<f64>,
    /// Selection path
    #[serde(skip)]
    pub source: MealSource,
}

/// All meals for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u8,
    /// Meals in slot order
    pub meals: Vec<PlannedMeal>,
}

impl DayPlan {
    /// Label used as the plan key, e.g. `"Day 3"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }

    /// Meal for a slot
    #[must_use]
    pub fn meal(&self, slot: MealSlot) -> Option<&PlannedMeal> {
        self.meals.iter().find(|meal| meal.slot == slot)
    }

    /// Sum of known meal calories
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().filter_map(|meal| meal.calories).sum()
    }
}

impl Serialize for DayPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.meals.len()))?;
        for meal in &self.meals {
            map.serialize_entry(meal.slot.label(), meal)?;
        }
        map.end()
    }
}

/// Multi-day meal plan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietPlan {
    /// Days in order
    pub days: Vec<DayPlan>,
}

impl DietPlan {
    /// Day by label (e.g. `"Day 1"`)
    #[must_use]
    pub fn day(&self, label: &str) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.label() == label)
    }

    /// Every planned meal across all days
    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.days.iter().flat_map(|day| day.meals.iter())
    }
}

impl Serialize for DietPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.label(), day)?;
        }
        map.end()
    }
}
