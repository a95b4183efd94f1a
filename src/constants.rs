// ABOUTME: Constants module re-exports from fitai-core
// ABOUTME: Condition keywords, dietary restrictions, meal shares, and request limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitai_core::constants::*;
