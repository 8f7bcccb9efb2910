// ABOUTME: Validated, immutable input record for the caloric pipeline
// ABOUTME: Profile construction, numeric bounds checks, and string coercion from raw front-end input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use caloric_core::errors::{AppError, AppResult, ErrorCode};
use caloric_core::models::{ActivityLevel, Sex, WeightGoal};
use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, ProfileLimitsConfig};

/// Typed parameters for building a [`Profile`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Direction of the desired weight change
    pub weight_goal: WeightGoal,
    /// Target change in kg/week (ignored for MAINTAIN)
    pub weekly_rate_kg: f64,
}

/// Untyped front-end input; enumerations arrive as strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// `M`, `F`, `MALE` or `FEMALE` (case-insensitive)
    pub sex: String,
    /// Activity code or abbreviation (e.g. `MODERATELY_ACTIVE`, `MA`)
    pub activity_level: String,
    /// `MAINTAIN`, `LOSE` or `GAIN` (case-insensitive)
    pub weight_goal: String,
    /// Target change in kg/week
    #[serde(default)]
    pub weekly_rate_kg: f64,
}

impl RawProfile {
    /// Coerce string fields into their enumerations
    ///
    /// # Errors
    ///
    /// Returns `InvalidSex`, `InvalidActivityLevel` or `InvalidWeightGoal`
    pub fn into_params(self) -> AppResult<ProfileParams> {
        Ok(ProfileParams {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age: self.age,
            sex: self.sex.parse()?,
            activity_level: self.activity_level.parse()?,
            weight_goal: self.weight_goal.parse()?,
            weekly_rate_kg: self.weekly_rate_kg,
        })
    }
}

/// Validated caloric profile. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    activity_level: ActivityLevel,
    weight_goal: WeightGoal,
    weekly_rate_kg: f64,
}

impl Profile {
    /// Build a profile, validating against the global configuration limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite numbers and `ValueOutOfRange`
    /// when a field is outside the configured bounds
    pub fn new(params: ProfileParams) -> AppResult<Self> {
        Self::with_limits(params, &CalculatorConfig::global().profile_limits)
    }

    /// Build a profile, validating against explicit limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite numbers and `ValueOutOfRange`
    /// when a field is outside `limits`
    pub fn with_limits(params: ProfileParams, limits: &ProfileLimitsConfig) -> AppResult<Self> {
        validate_positive("weight_kg", params.weight_kg, limits.max_weight_kg)?;
        validate_positive("height_cm", params.height_cm, limits.max_height_cm)?;
        if params.age == 0 || params.age > limits.max_age {
            return Err(AppError::out_of_range(
                "age",
                f64::from(params.age),
                1.0,
                f64::from(limits.max_age),
            ));
        }
        validate_weekly_rate(params.weekly_rate_kg)?;

        Ok(Self {
            weight_kg: params.weight_kg,
            height_cm: params.height_cm,
            age: params.age,
            sex: params.sex,
            activity_level: params.activity_level,
            weight_goal: params.weight_goal,
            weekly_rate_kg: params.weekly_rate_kg,
        })
    }

    /// Body weight (kg)
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height (cm)
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Age (years)
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Biological sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Weight goal
    #[must_use]
    pub const fn weight_goal(&self) -> WeightGoal {
        self.weight_goal
    }

    /// Target change (kg/week)
    #[must_use]
    pub const fn weekly_rate_kg(&self) -> f64 {
        self.weekly_rate_kg
    }
}

impl TryFrom<ProfileParams> for Profile {
    type Error = AppError;

    fn try_from(params: ProfileParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl TryFrom<RawProfile> for Profile {
    type Error = AppError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        Self::new(raw.into_params()?)
    }
}

fn validate_finite(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("{field} must be a finite number"))
            .with_details(serde_json::json!({ "field": field })))
    }
}

fn validate_positive(field: &str, value: f64, max: f64) -> AppResult<()> {
    validate_finite(field, value)?;
    if value <= 0.0 || value > max {
        return Err(AppError::out_of_range(field, value, 0.0, max));
    }
    Ok(())
}

fn validate_weekly_rate(value: f64) -> AppResult<()> {
    validate_finite("weekly_rate_kg", value)?;
    if value < 0.0 {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("weekly_rate_kg must be non-negative, got {value}"),
        )
        .with_details(serde_json::json!({ "field": "weekly_rate_kg", "value": value })));
    }
    Ok(())
}
