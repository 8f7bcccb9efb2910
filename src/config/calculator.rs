// ABOUTME: Calculator configuration sections for every stage of the caloric pipeline
// ABOUTME: BMI bands, ideal/adjusted weight, BMR coefficients, activity factors, rate tables, floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Caloric Pipeline Configuration
//!
//! Each section carries the coefficients of one pipeline stage. Defaults are
//! built from `caloric_core::constants` and reproduce the published formulas.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Ideal body weight: Devine (1974), Drug Intelligence & Clinical Pharmacy 8:650-655
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use caloric_core::constants::{
    activity_factors, adjusted_weight, bmi, ideal_weight, mifflin_st_jeor, profile_limits,
    rate_tables, safety_floor,
};
use caloric_core::models::{ActivityLevel, Sex, WeightGoal};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// BMI cut points selecting the weight that feeds the BMR stage
///
/// Bands are half-open: `[0, underweight_max)`, `[underweight_max, overweight_min)`,
/// `[overweight_min, obese_min)`, `[obese_min, ∞)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholdsConfig {
    /// First BMI of the normal band: 18.5
    pub underweight_max: f64,
    /// First BMI of the overweight band: 25.0
    pub overweight_min: f64,
    /// First BMI of the obese band: 30.0
    pub obese_min: f64,
}

/// Ideal body weight formula: `base + kg_per_inch × (height_in − baseline_height_in)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightConfig {
    /// Male base weight (kg): 50
    pub male_base_kg: f64,
    /// Female base weight (kg): 45.5
    pub female_base_kg: f64,
    /// Kilograms per inch over baseline: 2.3
    pub kg_per_inch: f64,
    /// Baseline height (inches): 60
    pub baseline_height_in: f64,
}

impl IdealWeightConfig {
    /// Base weight for the given sex
    #[must_use]
    pub const fn base_kg(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_base_kg,
            Sex::Female => self.female_base_kg,
        }
    }
}

/// Adjusted body weight: `ideal + excess_factor × (actual − ideal)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustedWeightConfig {
    /// Share of the excess over ideal weight that is kept: 0.25
    pub excess_factor: f64,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant term
    #[must_use]
    pub const fn sex_constant(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Super active (physical job or 2x/day training): 1.9
    pub super_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::SuperActive => self.super_active,
        }
    }
}

/// One row of a weekly-rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateAdjustment {
    /// Weekly change (kg/week)
    pub weekly_rate_kg: f64,
    /// Daily energy adjustment (kcal/day)
    pub daily_kcal: f64,
}

impl RateAdjustment {
    fn table(rows: &[(f64, f64)]) -> Vec<Self> {
        rows.iter()
            .map(|&(weekly_rate_kg, daily_kcal)| Self {
                weekly_rate_kg,
                daily_kcal,
            })
            .collect()
    }
}

/// Weekly rate to daily adjustment lookup tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit table used by the LOSE goal
    pub loss: Vec<RateAdjustment>,
    /// Surplus table used by the GAIN goal
    pub gain: Vec<RateAdjustment>,
}

impl GoalAdjustmentConfig {
    /// Table consulted for the goal, `None` for MAINTAIN
    #[must_use]
    pub fn table_for(&self, goal: WeightGoal) -> Option<&[RateAdjustment]> {
        match goal {
            WeightGoal::Maintain => None,
            WeightGoal::Lose => Some(self.loss.as_slice()),
            WeightGoal::Gain => Some(self.gain.as_slice()),
        }
    }

    /// Exact lookup of a weekly rate in the goal's table
    ///
    /// Returns `None` when the goal has no table or the rate is not listed.
    #[must_use]
    pub fn lookup(&self, goal: WeightGoal, weekly_rate_kg: f64) -> Option<f64> {
        self.table_for(goal)?
            .iter()
            .find(|row| {
                (row.weekly_rate_kg - weekly_rate_kg).abs() < rate_tables::RATE_MATCH_EPSILON
            })
            .map(|row| row.daily_kcal)
    }
}

/// Minimum daily intake enforced after goal adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyFloorConfig {
    /// Female minimum (kcal/day): 1300
    pub female_kcal: f64,
    /// Male minimum (kcal/day): 1500
    pub male_kcal: f64,
}

impl SafetyFloorConfig {
    /// Floor for the given sex
    #[must_use]
    pub const fn floor_for(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_kcal,
            Sex::Female => self.female_kcal,
        }
    }
}

/// Plausibility limits checked when a profile is constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLimitsConfig {
    /// Heaviest accepted body weight (kg)
    pub max_weight_kg: f64,
    /// Tallest accepted height (cm)
    pub max_height_cm: f64,
    /// Oldest accepted age (years)
    pub max_age: u32,
}

impl Default for BmiThresholdsConfig {
    fn default() -> Self {
        Self {
            underweight_max: bmi::UNDERWEIGHT_MAX,
            overweight_min: bmi::OVERWEIGHT_MIN,
            obese_min: bmi::OBESE_MIN,
        }
    }
}

impl Default for IdealWeightConfig {
    fn default() -> Self {
        Self {
            male_base_kg: ideal_weight::MALE_BASE_KG,
            female_base_kg: ideal_weight::FEMALE_BASE_KG,
            kg_per_inch: ideal_weight::KG_PER_INCH,
            baseline_height_in: ideal_weight::BASELINE_HEIGHT_IN,
        }
    }
}

impl Default for AdjustedWeightConfig {
    fn default() -> Self {
        Self {
            excess_factor: adjusted_weight::EXCESS_FACTOR,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            lightly_active: activity_factors::LIGHTLY_ACTIVE,
            moderately_active: activity_factors::MODERATELY_ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
            super_active: activity_factors::SUPER_ACTIVE,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            loss: RateAdjustment::table(&rate_tables::LOSS),
            gain: RateAdjustment::table(&rate_tables::GAIN),
        }
    }
}

impl Default for SafetyFloorConfig {
    fn default() -> Self {
        Self {
            female_kcal: safety_floor::FEMALE_KCAL,
            male_kcal: safety_floor::MALE_KCAL,
        }
    }
}

impl Default for ProfileLimitsConfig {
    fn default() -> Self {
        Self {
            max_weight_kg: profile_limits::MAX_WEIGHT_KG,
            max_height_cm: profile_limits::MAX_HEIGHT_CM,
            max_age: profile_limits::MAX_AGE,
        }
    }
}

impl BmiThresholdsConfig {
    /// Validate that band cut points are positive and ascending
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-finite or non-positive
    /// cut point and `ConfigError::InvalidRange` if they are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            &[self.underweight_max, self.overweight_min, self.obese_min],
            "BMI thresholds must be finite numbers",
        )?;
        if self.underweight_max <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMI underweight_max must be positive",
            ));
        }
        if self.underweight_max >= self.overweight_min || self.overweight_min >= self.obese_min {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be ascending: underweight_max < overweight_min < obese_min",
            ));
        }
        Ok(())
    }
}

impl ActivityFactorsConfig {
    /// Validate that factors are within 1.0-2.5 and ascending
    ///
    /// # Errors
    ///
    /// Returns an error if any factor is out of range or the order is broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            &[
                self.sedentary,
                self.lightly_active,
                self.moderately_active,
                self.very_active,
                self.super_active,
            ],
            "Activity factors must be finite numbers",
        )?;
        if self.sedentary < 1.0 || self.super_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if self.sedentary >= self.lightly_active
            || self.lightly_active >= self.moderately_active
            || self.moderately_active >= self.very_active
            || self.very_active >= self.super_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl GoalAdjustmentConfig {
    /// Validate both rate tables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTable` for an empty table, a non-finite or
    /// non-positive rate, a negative adjustment, or a duplicated rate
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_table(
            &self.loss,
            "Loss rate table must be non-empty with unique positive rates and non-negative adjustments",
        )?;
        Self::validate_table(
            &self.gain,
            "Gain rate table must be non-empty with unique positive rates and non-negative adjustments",
        )
    }

    fn validate_table(table: &[RateAdjustment], message: &'static str) -> Result<(), ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::InvalidTable(message));
        }
        for (index, row) in table.iter().enumerate() {
            if !row.weekly_rate_kg.is_finite()
                || !row.daily_kcal.is_finite()
                || row.weekly_rate_kg <= 0.0
                || row.daily_kcal < 0.0
            {
                return Err(ConfigError::InvalidTable(message));
            }
            let duplicated = table[..index].iter().any(|earlier| {
                (earlier.weekly_rate_kg - row.weekly_rate_kg).abs()
                    < rate_tables::RATE_MATCH_EPSILON
            });
            if duplicated {
                return Err(ConfigError::InvalidTable(message));
            }
        }
        Ok(())
    }
}

/// Reject NaN and infinite values, which slip through ordered comparisons
///
/// # Errors
///
/// Returns `ConfigError::ValueOutOfRange` with `message` if any value is not finite
pub(crate) fn ensure_finite(values: &[f64], message: &'static str) -> Result<(), ConfigError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}
