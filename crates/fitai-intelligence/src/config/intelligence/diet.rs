// ABOUTME: Diet planner configuration: per-slot calorie shares and plan length
// ABOUTME: Shares default to 25/10/30/10/20/5 percent of the daily target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitai_core::constants::meals::{DEFAULT_PLAN_DAYS, DEFAULT_SLOT_SHARES};
use fitai_core::models::MealSlot;
use serde::{Deserialize, Serialize};

/// Fraction of the daily calorie target for each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlotSharesConfig {
    /// Breakfast (0.25)
    pub breakfast: f64,
    /// Mid-morning snack (0.10)
    pub mid_morning: f64,
    /// Lunch (0.30)
    pub lunch: f64,
    /// Afternoon snack (0.10)
    pub afternoon_snack: f64,
    /// Dinner (0.20)
    pub dinner: f64,
    /// Before bed (0.05)
    pub before_bed: f64,
}

impl Default for MealSlotSharesConfig {
    fn default() -> Self {
        let share = |wanted: MealSlot| {
            DEFAULT_SLOT_SHARES
                .iter()
                .find(|(slot, _)| *slot == wanted)
                .map_or(0.0, |(_, share)| *share)
        };
        Self {
            breakfast: share(MealSlot::Breakfast),
            mid_morning: share(MealSlot::MidMorning),
            lunch: share(MealSlot::Lunch),
            afternoon_snack: share(MealSlot::AfternoonSnack),
            dinner: share(MealSlot::Dinner),
            before_bed: share(MealSlot::BeforeBed),
        }
    }
}

impl MealSlotSharesConfig {
    /// Share for a slot
    #[must_use]
    pub const fn share_for(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::MidMorning => self.mid_morning,
            MealSlot::Lunch => self.lunch,
            MealSlot::AfternoonSnack => self.afternoon_snack,
            MealSlot::Dinner => self.dinner,
            MealSlot::BeforeBed => self.before_bed,
        }
    }

    /// Rounded per-slot calorie target
    #[must_use]
    pub fn target_calories(&self, daily_calories: f64, slot: MealSlot) -> i64 {
        (daily_calories * self.share_for(slot)).round() as i64
    }
}

/// Diet planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietConfig {
    /// Calorie share per slot
    pub slot_shares: MealSlotSharesConfig,
    /// Number of days in a plan
    pub plan_days: u8,
}

impl Default for DietConfig {
    fn default() -> Self {
        Self {
            slot_shares: MealSlotSharesConfig::default(),
            plan_days: DEFAULT_PLAN_DAYS,
        }
    }
}

impl DietConfig {
    /// Validate shares and plan length
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a share is outside 0.0-1.0, the shares do not
    /// sum to 1.0, or the plan has no days
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = MealSlot::ALL.map(|slot| self.slot_shares.share_for(slot));
        if shares.iter().any(|share| !(0.0..=1.0).contains(share)) {
            return Err(ConfigError::ValueOutOfRange(
                "meal slot shares must be between 0.0 and 1.0",
            ));
        }
        let total: f64 = shares.iter().sum();
        if (total - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "meal slot shares must sum to 1.0",
            ));
        }
        if self.plan_days == 0 {
            return Err(ConfigError::ValueOutOfRange("plan must cover at least one day"));
        }
        Ok(())
    }
}
