// ABOUTME: Meal planning constants: per-slot calorie shares and static fallback templates
// ABOUTME: Used when the meal catalog is unavailable or a slot has no candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::MealSlot;

/// Fraction of the daily calorie target assigned to each slot (sums to 1.0)
pub const DEFAULT_SLOT_SHARES: [(MealSlot, f64); 6] = [
    (MealSlot::Breakfast, 0.25),
    (MealSlot::MidMorning, 0.10),
    (MealSlot::Lunch, 0.30),
    (MealSlot::AfternoonSnack, 0.10),
    (MealSlot::Dinner, 0.20),
    (MealSlot::BeforeBed, 0.05),
];

/// Number of days in a generated plan
pub const DEFAULT_PLAN_DAYS: u8 = 7;

/// Static vegetarian day used when no meal catalog is available
pub const VEGETARIAN_FALLBACK_MEALS: [(MealSlot, &str); 6] = [
    (MealSlot::Breakfast, "Oatmeal with fruits and nuts"),
    (MealSlot::MidMorning, "Greek yogurt with berries"),
    (MealSlot::Lunch, "Quinoa salad with chickpeas and vegetables"),
    (MealSlot::AfternoonSnack, "Hummus with carrot sticks"),
    (MealSlot::Dinner, "Lentil curry with brown rice"),
    (MealSlot::BeforeBed, "Warm turmeric milk"),
];

/// Static non-vegetarian day used when no meal catalog is available
pub const NON_VEGETARIAN_FALLBACK_MEALS: [(MealSlot, &str); 6] = [
    (MealSlot::Breakfast, "Scrambled eggs with whole grain toast"),
    (MealSlot::MidMorning, "Protein smoothie with banana"),
    (MealSlot::Lunch, "Grilled chicken with brown rice and vegetables"),
    (MealSlot::AfternoonSnack, "Boiled eggs with almonds"),
    (MealSlot::Dinner, "Baked salmon with sweet potato"),
    (MealSlot::BeforeBed, "Cottage cheese with walnuts"),
];
