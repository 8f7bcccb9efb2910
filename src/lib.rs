// ABOUTME: Main library entry point for the caloric needs calculator
// ABOUTME: Exposes the caloric pipeline, its configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Caloric Calculator
//!
//! Computes personalized daily caloric needs from weight, height, age, sex,
//! activity level, weight goal, and target weekly rate of change.
//!
//! ## Pipeline
//!
//! BMI → ideal weight → adjusted weight → recommended weight → BMR (Mifflin-St Jeor)
//! → TDEE (activity factor) → goal-adjusted daily calories with a safety floor.
//!
//! Each stage is a pure function of upstream outputs; the same profile always
//! yields the same result.
//!
//! ## Example Usage
//!
//! ```rust
//! use caloric_calculator::calculator::{CaloricCalculator, RawProfile};
//! use caloric_calculator::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let calculator = CaloricCalculator::from_raw(RawProfile {
//!         weight_kg: 70.0,
//!         height_cm: 175.0,
//!         age: 30,
//!         sex: "M".to_owned(),
//!         activity_level: "MODERATELY_ACTIVE".to_owned(),
//!         weight_goal: "lose".to_owned(),
//!         weekly_rate_kg: 0.5,
//!     })?;
//!
//!     println!("Daily target: {} kcal", calculator.daily_caloric_needs());
//!     Ok(())
//! }
//! ```

/// Caloric pipeline: profile validation, stages, and results
pub mod calculator;

/// Calculator configuration with environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

pub use caloric_core::{constants, errors, models};
