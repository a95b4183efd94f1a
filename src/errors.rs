// ABOUTME: Error module re-exports from fitai-core
// ABOUTME: Keeps `crate::errors` paths stable for the service and CLI layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! All error types live in `fitai-core`; this module re-exports them.

pub use fitai_core::errors::*;
