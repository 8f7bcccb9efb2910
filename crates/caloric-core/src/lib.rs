// ABOUTME: Core types and constants for the caloric needs calculator
// ABOUTME: Foundation crate with error handling, profile enumerations, and lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Caloric Core
//!
//! Foundation crate providing shared types and constants for the caloric
//! needs calculator. The pipeline crate builds on these; front-ends only
//! need this crate to parse user input and to interpret errors.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients, thresholds, and lookup tables
//! - **models**: Closed enumerations for sex, activity level, and weight goal

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients, BMI thresholds, and fixed lookup tables
pub mod constants;

/// Profile enumerations (`Sex`, `ActivityLevel`, `WeightGoal`)
pub mod models;
