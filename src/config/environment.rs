// ABOUTME: Environment configuration for catalog locations and deployment mode
// ABOUTME: Reads FITAI_* variables with defaults so the planner runs with no setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding the catalog files
pub const ENV_CATALOG_DIR: &str = "FITAI_CATALOG_DIR";
/// Exercise catalog file name inside the catalog directory
pub const ENV_EXERCISE_CATALOG: &str = "FITAI_EXERCISE_CATALOG";
/// Meal catalog file name inside the catalog directory
pub const ENV_MEAL_CATALOG: &str = "FITAI_MEAL_CATALOG";

/// Default catalog directory
pub const DEFAULT_CATALOG_DIR: &str = "data";
/// Default exercise catalog file
pub const DEFAULT_EXERCISE_CATALOG: &str = "exercises.json";
/// Default meal catalog file
pub const DEFAULT_MEAL_CATALOG: &str = "meals.json";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the two reference catalogs are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPaths {
    /// Directory containing both files
    pub directory: PathBuf,
    /// Exercise catalog file name
    pub exercise_file: String,
    /// Meal catalog file name
    pub meal_file: String,
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CATALOG_DIR),
            exercise_file: DEFAULT_EXERCISE_CATALOG.to_owned(),
            meal_file: DEFAULT_MEAL_CATALOG.to_owned(),
        }
    }
}

impl CatalogPaths {
    /// Catalogs in a specific directory with default file names
    #[must_use]
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Full path of the exercise catalog
    #[must_use]
    pub fn exercise_path(&self) -> PathBuf {
        self.directory.join(&self.exercise_file)
    }

    /// Full path of the meal catalog
    #[must_use]
    pub fn meal_path(&self) -> PathBuf {
        self.directory.join(&self.meal_file)
    }
}

/// Runtime configuration for the planner
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Catalog file locations
    pub catalogs: CatalogPaths,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            catalogs: CatalogPaths {
                directory: PathBuf::from(env_var_or(ENV_CATALOG_DIR, DEFAULT_CATALOG_DIR)),
                exercise_file: env_var_or(ENV_EXERCISE_CATALOG, DEFAULT_EXERCISE_CATALOG),
                meal_file: env_var_or(ENV_MEAL_CATALOG, DEFAULT_MEAL_CATALOG),
            },
            logging: LoggingConfig::from_env(),
        };

        debug!(
            environment = %config.environment,
            catalog.dir = %config.catalogs.directory.display(),
            "Loaded engine configuration"
        );
        config
    }

    /// Override the catalog directory
    #[must_use]
    pub fn with_catalog_dir(mut self, directory: impl AsRef<Path>) -> Self {
        self.catalogs.directory = directory.as_ref().to_path_buf();
        self
    }
}

/// Environment variable or default; empty values count as unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_catalog_paths_join_directory() {
        let paths = CatalogPaths::in_directory("/srv/fitai");
        assert_eq!(paths.exercise_path(), PathBuf::from("/srv/fitai/exercises.json"));
        assert_eq!(paths.meal_path(), PathBuf::from("/srv/fitai/meals.json"));
    }
}
