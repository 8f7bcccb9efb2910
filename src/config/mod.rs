// ABOUTME: Calculator configuration orchestrating per-stage sections with validation and loading
// ABOUTME: Defaults from caloric-core constants, CALORIC_* environment overrides, global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration Module
//!
//! Provides type-safe configuration for every stage of the caloric pipeline.
//!
//! # Module Structure
//!
//! - `calculator` - Per-stage configuration sections and their defaults
//! - `error` - Configuration validation errors
//!
//! Configuration is loaded once from defaults plus `CALORIC_*` environment
//! variable overrides and then validated. It is never mutated afterwards.

/// Per-stage configuration sections
pub mod calculator;
/// Configuration error types
pub mod error;

pub use calculator::{
    ActivityFactorsConfig, AdjustedWeightConfig, BmiThresholdsConfig, BmrConfig,
    GoalAdjustmentConfig, IdealWeightConfig, ProfileLimitsConfig, RateAdjustment,
    SafetyFloorConfig,
};
pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use caloric_core::constants::env_vars;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use calculator::ensure_finite;

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Main calculator configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// BMI band cut points for the recommended-weight selector
    pub bmi: BmiThresholdsConfig,
    /// Ideal body weight formula
    pub ideal_weight: IdealWeightConfig,
    /// Adjusted body weight formula
    pub adjusted_weight: AdjustedWeightConfig,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Weekly rate to daily adjustment tables
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Sex-specific minimum daily intake
    pub safety_floor: SafetyFloorConfig,
    /// Plausibility limits for profile construction
    pub profile_limits: ProfileLimitsConfig,
}

impl CalculatorConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            floor_female = config.safety_floor.female_kcal,
            floor_male = config.safety_floor.male_kcal,
            "Calculator configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a `ConfigError`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmi.validate()?;
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()?;

        let ideal = &self.ideal_weight;
        ensure_finite(
            &[
                ideal.male_base_kg,
                ideal.female_base_kg,
                ideal.kg_per_inch,
                ideal.baseline_height_in,
            ],
            "Ideal weight parameters must be finite numbers",
        )?;
        let bmr = &self.bmr;
        ensure_finite(
            &[
                bmr.msj_weight_coef,
                bmr.msj_height_coef,
                bmr.msj_age_coef,
                bmr.msj_male_constant,
                bmr.msj_female_constant,
            ],
            "BMR coefficients must be finite numbers",
        )?;
        ensure_finite(
            &[self.safety_floor.female_kcal, self.safety_floor.male_kcal],
            "Safety floors must be finite numbers",
        )?;
        ensure_finite(
            &[
                self.profile_limits.max_weight_kg,
                self.profile_limits.max_height_cm,
            ],
            "Profile limits must be finite numbers",
        )?;

        if self.ideal_weight.kg_per_inch <= 0.0 || self.ideal_weight.baseline_height_in <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Ideal weight slope and baseline height must be positive",
            ));
        }

        if !(0.0..=1.0).contains(&self.adjusted_weight.excess_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "Adjusted weight excess factor must be between 0.0 and 1.0",
            ));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        if self.safety_floor.female_kcal <= 0.0 || self.safety_floor.male_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Safety floors must be positive",
            ));
        }

        let limits = &self.profile_limits;
        if limits.max_weight_kg <= 0.0 || limits.max_height_cm <= 0.0 || limits.max_age == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Profile limits must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMI bands
        Self::apply_env_var(env_vars::BMI_UNDERWEIGHT_MAX, &mut self.bmi.underweight_max)?;
        Self::apply_env_var(env_vars::BMI_OVERWEIGHT_MIN, &mut self.bmi.overweight_min)?;
        Self::apply_env_var(env_vars::BMI_OBESE_MIN, &mut self.bmi.obese_min)?;

        Self::apply_env_var(
            env_vars::ADJUSTED_EXCESS_FACTOR,
            &mut self.adjusted_weight.excess_factor,
        )?;

        // Activity factors
        let factors = &mut self.activity_factors;
        Self::apply_env_var(env_vars::ACTIVITY_SEDENTARY, &mut factors.sedentary)?;
        Self::apply_env_var(env_vars::ACTIVITY_LIGHTLY_ACTIVE, &mut factors.lightly_active)?;
        Self::apply_env_var(
            env_vars::ACTIVITY_MODERATELY_ACTIVE,
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var(env_vars::ACTIVITY_VERY_ACTIVE, &mut factors.very_active)?;
        Self::apply_env_var(env_vars::ACTIVITY_SUPER_ACTIVE, &mut factors.super_active)?;

        // Safety floors
        Self::apply_env_var(
            env_vars::FLOOR_FEMALE_KCAL,
            &mut self.safety_floor.female_kcal,
        )?;
        Self::apply_env_var(env_vars::FLOOR_MALE_KCAL, &mut self.safety_floor.male_kcal)?;

        // Profile limits
        let limits = &mut self.profile_limits;
        Self::apply_env_var(env_vars::MAX_WEIGHT_KG, &mut limits.max_weight_kg)?;
        Self::apply_env_var(env_vars::MAX_HEIGHT_CM, &mut limits.max_height_cm)?;
        Self::apply_env_var(env_vars::MAX_AGE, &mut limits.max_age)?;

        Ok(self)
    }
}
