// ABOUTME: Configuration module: environment-driven runtime settings
// ABOUTME: Engine tuning lives in fitai-intelligence and is re-exported here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based runtime configuration (catalog locations, deployment mode)
pub mod environment;

pub use environment::{CatalogPaths, EngineConfig, Environment};
pub use fitai_intelligence::config::intelligence::{ConfigError, IntelligenceConfig};
