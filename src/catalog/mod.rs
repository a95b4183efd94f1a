// ABOUTME: Exercise and meal reference catalogs loaded once from JSON files
// ABOUTME: A missing or unreadable catalog degrades to empty instead of failing requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference data catalogs
//!
//! Each catalog is a JSON array of records. Rows that do not deserialize (for
//! example an unknown exercise category) are skipped individually. A whole
//! catalog that cannot be read becomes empty, which switches the engine to its
//! documented fallbacks:
//! - empty exercise catalog: a single diagnostic routine entry
//! - empty meal catalog: the static fallback meal plan

use crate::config::environment::EngineConfig;
use crate::intelligence::catalog::{ExerciseCatalog, MealCatalog};
use crate::logging::AppLogger;
use crate::models::{ExerciseCatalogRow, MealCatalogRow};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Process-wide catalogs, frozen after the first load
static CATALOG_STORE: OnceLock<CatalogStore> = OnceLock::new();

/// Why a catalog could not be used
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File does not exist
    #[error("catalog file not found: {}", path.display())]
    Missing {
        /// Attempted path
        path: PathBuf,
    },
    /// File exists but could not be read
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// Attempted path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// Content is not a JSON array of records
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        /// Attempted path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
    /// No usable rows
    #[error("catalog {} has no usable rows", path.display())]
    Empty {
        /// Attempted path
        path: PathBuf,
    },
}

/// Read and parse a catalog file into rows
///
/// # Errors
///
/// Returns `CatalogError` when the file is missing, unreadable, not a JSON
/// array, or has no row that deserializes
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_rows(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
    .and_then(|rows| {
        if rows.is_empty() {
            Err(CatalogError::Empty {
                path: path.to_path_buf(),
            })
        } else {
            Ok(rows)
        }
    })
}

/// Parse a JSON array, keeping only the records that deserialize as `T`
///
/// # Errors
///
/// Returns `serde_json::Error` when the content is not a JSON array
pub fn parse_rows<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(content)?;
    let total = records.len();

    let rows: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(row) => Some(row),
            Err(e) => {
                debug!(row = index, error = %e, "Skipping catalog row");
                None
            }
        })
        .collect();

    if rows.len() < total {
        debug!(kept = rows.len(), total, "Dropped unusable catalog rows");
    }
    Ok(rows)
}

/// Load a catalog, degrading to an empty one on any failure
fn load_or_empty<T: DeserializeOwned>(name: &str, path: &Path) -> Vec<T> {
    match load_rows(path) {
        Ok(rows) => {
            AppLogger::log_catalog_load(name, &path.display().to_string(), rows.len(), true);
            rows
        }
        Err(e) => {
            warn!(catalog.name = name, error = %e, "Catalog unavailable");
            AppLogger::log_catalog_load(name, &path.display().to_string(), 0, false);
            Vec::new()
        }
    }
}

/// Both reference catalogs
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    exercises: Vec<ExerciseCatalogRow>,
    meals: Vec<MealCatalogRow>,
}

impl CatalogStore {
    /// Store over in-memory rows
    #[must_use]
    pub const fn from_rows(exercises: Vec<ExerciseCatalogRow>, meals: Vec<MealCatalogRow>) -> Self {
        Self { exercises, meals }
    }

    /// Load both catalogs; each one that fails independently becomes empty
    #[must_use]
    pub fn load(config: &EngineConfig) -> Self {
        Self {
            exercises: load_or_empty("exercises", &config.catalogs.exercise_path()),
            meals: load_or_empty("meals", &config.catalogs.meal_path()),
        }
    }

    /// Process-wide catalogs, loaded on first access
    pub fn global() -> &'static Self {
        CATALOG_STORE.get_or_init(|| Self::load(&EngineConfig::from_env()))
    }

    /// Install catalogs loaded from `config` as the process-wide store
    ///
    /// Returns the store actually installed; a store loaded earlier wins.
    pub fn init_global(config: &EngineConfig) -> &'static Self {
        CATALOG_STORE.get_or_init(|| Self::load(config))
    }

    /// Exercise rows in file order
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseCatalogRow] {
        &self.exercises
    }

    /// Meal rows in file order
    #[must_use]
    pub fn meals(&self) -> &[MealCatalogRow] {
        &self.meals
    }
}

impl ExerciseCatalog for CatalogStore {
    fn exercise_rows(&self) -> &[ExerciseCatalogRow] {
        &self.exercises
    }
}

impl MealCatalog for CatalogStore {
    fn meal_rows(&self) -> &[MealCatalogRow] {
        &self.meals
    }
}
