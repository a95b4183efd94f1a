// ABOUTME: Configuration module for fitai-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (intensity buckets, routine shares, nutrition, diet slots)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
