// ABOUTME: Domain model re-exports from fitai-core
// ABOUTME: Profiles, catalog rows, routine and diet plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitai_core::models::*;
