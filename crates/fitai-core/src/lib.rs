// ABOUTME: Core types and constants for the FitAI recommendation engine
// ABOUTME: Foundation crate with error handling, domain models, and fixed rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitAI Core
//!
//! Foundation crate providing shared types and constants for the FitAI exercise and
//! meal planning engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Condition keywords, dietary restrictions, meal slot shares
//! - **models**: Biometric profile, catalog rows, routine and diet plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Fixed rule tables and engine constants organized by domain
pub mod constants;

/// Core data models (profile, catalog rows, plans)
pub mod models;
