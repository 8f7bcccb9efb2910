// ABOUTME: Shared test utilities for the caloric calculator integration tests
// ABOUTME: Quiet test logging and profile fixtures evaluated against default configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    missing_docs
)]

use std::sync::Once;

use caloric_calculator::calculator::{CaloricCalculator, RawProfile};
use caloric_calculator::config::CalculatorConfig;
use caloric_calculator::errors::AppResult;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may have installed a subscriber already
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Raw front-end input with string enumerations
pub fn raw_profile(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: &str,
    activity_level: &str,
    weight_goal: &str,
    weekly_rate_kg: f64,
) -> RawProfile {
    RawProfile {
        weight_kg,
        height_cm,
        age,
        sex: sex.to_owned(),
        activity_level: activity_level.to_owned(),
        weight_goal: weight_goal.to_owned(),
        weekly_rate_kg,
    }
}

/// Validate and evaluate a raw profile against the built-in defaults
pub fn try_calculate(raw: RawProfile) -> AppResult<CaloricCalculator> {
    init_test_logging();
    CaloricCalculator::from_raw_with_config(raw, &CalculatorConfig::default())
}

/// Evaluate a profile that is expected to be valid
pub fn calculate(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: &str,
    activity_level: &str,
    weight_goal: &str,
    weekly_rate_kg: f64,
) -> CaloricCalculator {
    try_calculate(raw_profile(
        weight_kg,
        height_cm,
        age,
        sex,
        activity_level,
        weight_goal,
        weekly_rate_kg,
    ))
    .expect("profile should be valid")
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}
