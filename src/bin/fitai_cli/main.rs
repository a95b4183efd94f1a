// ABOUTME: FitAI CLI - generate routines, meal plans, and engine diagnostics from the terminal
// ABOUTME: Wraps the recommendation service and individual engine components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full recommendation as JSON
//! fitai-cli plan --age 30 --height 170 --weight 70 --sex male \
//!     --activity sedentary --goal maintenance --diet vegetarian \
//!     --medical-file history.txt
//!
//! # Reproducible output
//! fitai-cli plan --age 30 --height 170 --weight 70 --seed 42
//!
//! # Individual components
//! fitai-cli conditions "diabetic, on hypertension medication"
//! fitai-cli intensity --weight 50 --height 160
//! fitai-cli calories --age 30 --height 170 --weight 70 --sex male
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fitai_planner::config::environment::EngineConfig;
use fitai_planner::config::IntelligenceConfig;
use fitai_planner::errors::AppError;
use fitai_planner::logging::LoggingConfig;
use fitai_planner::models::{ActivityLevel, BiometricProfile, DietPreference, Goal, Sex};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitai-cli",
    about = "FitAI exercise and meal planner",
    long_about = "Generate personalized exercise routines and 7-day meal plans from biometrics and medical history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate the full routine and diet plan
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Medical history text
        #[arg(long, conflicts_with = "medical_file")]
        medical_text: Option<String>,

        /// Medical history document (.txt)
        #[arg(long)]
        medical_file: Option<PathBuf>,

        /// Directory containing exercises.json and meals.json
        #[arg(long)]
        catalog_dir: Option<PathBuf>,

        /// Seed for reproducible rep counts and meal picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Detect health conditions in free text
    Conditions {
        /// Text to scan
        text: String,
    },

    /// Compute BMI and intensity score
    Intensity {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },

    /// Compute BMR, maintenance, and daily calorie target
    Calories {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

/// Biometric flags shared by `plan` and `calories`
#[derive(Args)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// male, female, or other
    #[arg(long, default_value = "male")]
    sex: String,

    /// sedentary, moderate, or active
    #[arg(long, default_value = "sedentary")]
    activity: String,

    /// weight_loss, weight_gain, or maintenance
    #[arg(long, default_value = "maintenance")]
    goal: String,

    /// vegetarian, non-vegetarian, vegan, ...
    #[arg(long, default_value = "vegetarian")]
    diet: String,
}

impl ProfileArgs {
    fn to_profile(&self) -> BiometricProfile {
        BiometricProfile {
            age: self.age,
            height_cm: self.height,
            weight_kg: self.weight,
            sex: Sex::from_str_lossy(&self.sex),
            activity_level: ActivityLevel::from_str_lossy(&self.activity),
            goal: Goal::from_str_lossy(&self.goal),
            diet_preference: DietPreference::from_str_lossy(&self.diet),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut engine_config = EngineConfig::from_env();
    let logging: LoggingConfig = if cli.verbose {
        engine_config.logging.clone().verbose()
    } else {
        engine_config.logging.clone()
    };
    logging.init()?;

    // Invalid engine overrides are fatal at the command line
    let intelligence = IntelligenceConfig::load().map_err(AppError::from)?;

    match cli.command {
        Command::Plan {
            profile,
            medical_text,
            medical_file,
            catalog_dir,
            seed,
        } => {
            if let Some(dir) = catalog_dir {
                engine_config = engine_config.with_catalog_dir(dir);
            }
            let medical_history =
                commands::resolve_medical_history(medical_text, medical_file.as_deref())?;
            commands::plan(
                &engine_config,
                &intelligence,
                profile.to_profile(),
                medical_history,
                seed,
            )?;
        }
        Command::Conditions { text } => commands::conditions(&text)?,
        Command::Intensity { weight, height } => {
            commands::intensity(&intelligence, weight, height)?;
        }
        Command::Calories { profile } => commands::calories(&intelligence, &profile.to_profile())?,
    }

    Ok(())
}
