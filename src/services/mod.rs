// ABOUTME: Domain service layer composing the recommendation engine for callers
// ABOUTME: Protocol-agnostic so a CLI or any request layer can reuse it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Request validation and routine/diet plan orchestration
pub mod recommendation;

pub use recommendation::{RecommendationRequest, RecommendationResponse, RecommendationService};
