// ABOUTME: Caloric pipeline orchestration from a validated profile to a memoized result
// ABOUTME: Runs BMI, weight selection, BMR, TDEE, and goal stages in their fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Caloric Calculator Module
//!
//! The pipeline is a fixed sequence of pure stages over one immutable
//! [`Profile`]:
//!
//! 1. BMI
//! 2. Ideal weight
//! 3. Adjusted weight
//! 4. Recommended-weight selection (by BMI band)
//! 5. BMR (Mifflin-St Jeor on the recommended weight)
//! 6. Activity factor
//! 7. TDEE
//! 8. Goal adjustment and safety floor
//!
//! [`CaloricCalculator`] evaluates the pipeline eagerly on construction and
//! keeps the result. Invalid input never reaches the pipeline: it is rejected
//! while the profile is built.

/// Validated input record
pub mod profile;
/// Pipeline output types
pub mod result;
/// Pure stage functions
pub mod stages;

pub use profile::{Profile, ProfileParams, RawProfile};
pub use result::{
    BmiCategory, CaloricResult, CalculationWarning, DailyCaloricNeeds, GoalAdjustment,
    RecommendedWeight, WeightBasis,
};

use caloric_core::errors::AppResult;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;

/// Run every stage of the pipeline for a profile
#[must_use]
pub fn evaluate(profile: &Profile, config: &CalculatorConfig) -> CaloricResult {
    let bmi = stages::calculate_bmi(profile.weight_kg(), profile.height_cm());
    let ideal_weight_kg =
        stages::calculate_ideal_weight(profile.height_cm(), profile.sex(), &config.ideal_weight);
    let adjusted_weight_kg = stages::calculate_adjusted_weight(
        profile.weight_kg(),
        ideal_weight_kg,
        &config.adjusted_weight,
    );
    let recommended = stages::select_recommended_weight(
        bmi,
        profile.weight_kg(),
        ideal_weight_kg,
        adjusted_weight_kg,
        &config.bmi,
    );

    let bmr = stages::calculate_mifflin_st_jeor(
        recommended.weight_kg,
        profile.height_cm(),
        profile.age(),
        profile.sex(),
        &config.bmr,
    );
    let activity_factor =
        stages::activity_factor(profile.activity_level(), &config.activity_factors);
    let tdee = stages::calculate_tdee(bmr, activity_factor);

    let daily = stages::calculate_daily_caloric_needs(
        tdee,
        profile.weight_goal(),
        profile.weekly_rate_kg(),
        profile.sex(),
        &config.goal_adjustment,
        &config.safety_floor,
    );

    let warnings = collect_warnings(tdee, &daily);
    for warning in &warnings {
        warn!(sex = %profile.sex(), goal = %profile.weight_goal(), "{warning}");
    }

    debug!(
        bmi,
        category = recommended.category.label(),
        basis = recommended.basis.label(),
        recommended_weight_kg = recommended.weight_kg,
        bmr,
        activity_factor,
        tdee,
        daily_caloric_needs = daily.kcal,
        "Caloric pipeline evaluated"
    );

    CaloricResult {
        bmi,
        bmi_category: recommended.category,
        ideal_weight_kg,
        adjusted_weight_kg,
        recommended_weight_kg: recommended.weight_kg,
        weight_basis: recommended.basis,
        bmr,
        activity_factor,
        tdee,
        goal_adjustment: daily.adjustment,
        daily_caloric_needs: daily.kcal,
        warnings,
    }
}

fn collect_warnings(tdee: i32, daily: &DailyCaloricNeeds) -> Vec<CalculationWarning> {
    let mut warnings = Vec::new();
    if let GoalAdjustment::UnrecognizedRate {
        goal,
        weekly_rate_kg,
    } = daily.adjustment
    {
        warnings.push(CalculationWarning::UnrecognizedWeeklyRate {
            goal,
            weekly_rate_kg,
        });
    }
    if let Some(floor_kcal) = daily.floor_applied_kcal {
        let requested = f64::from(tdee) + daily.adjustment.signed_kcal();
        warnings.push(CalculationWarning::SafetyFloorApplied {
            requested_kcal: stages::round_kcal(requested),
            floor_kcal,
        });
    }
    warnings
}

/// A profile together with its eagerly computed pipeline result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaloricCalculator {
    profile: Profile,
    result: CaloricResult,
}

impl CaloricCalculator {
    /// Evaluate a profile with the global configuration
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self::with_config(profile, CalculatorConfig::global())
    }

    /// Evaluate a profile with an explicit configuration
    #[must_use]
    pub fn with_config(profile: Profile, config: &CalculatorConfig) -> Self {
        let result = evaluate(&profile, config);
        Self { profile, result }
    }

    /// Validate typed parameters and evaluate them with the global configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any field fails validation
    pub fn from_params(params: ProfileParams) -> AppResult<Self> {
        Ok(Self::new(Profile::new(params)?))
    }

    /// Coerce, validate, and evaluate raw front-end input with the global configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidSex`, `InvalidActivityLevel`, `InvalidWeightGoal`,
    /// `InvalidInput` or `ValueOutOfRange`; no partial result is produced
    pub fn from_raw(raw: RawProfile) -> AppResult<Self> {
        Self::from_raw_with_config(raw, CalculatorConfig::global())
    }

    /// Coerce, validate, and evaluate raw input with an explicit configuration
    ///
    /// # Errors
    ///
    /// Same as [`CaloricCalculator::from_raw`], with bounds taken from `config`
    pub fn from_raw_with_config(raw: RawProfile, config: &CalculatorConfig) -> AppResult<Self> {
        let profile = Profile::with_limits(raw.into_params()?, &config.profile_limits)?;
        Ok(Self::with_config(profile, config))
    }

    /// Input profile
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Full pipeline result
    #[must_use]
    pub const fn result(&self) -> &CaloricResult {
        &self.result
    }

    /// Consume the calculator, keeping only the result
    #[must_use]
    pub fn into_result(self) -> CaloricResult {
        self.result
    }

    /// Body Mass Index
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.result.bmi
    }

    /// Ideal body weight (kg)
    #[must_use]
    pub const fn ideal_weight_kg(&self) -> f64 {
        self.result.ideal_weight_kg
    }

    /// Adjusted body weight (kg)
    #[must_use]
    pub const fn adjusted_weight_kg(&self) -> f64 {
        self.result.adjusted_weight_kg
    }

    /// Weight used for BMR (kg)
    #[must_use]
    pub const fn recommended_weight_kg(&self) -> f64 {
        self.result.recommended_weight_kg
    }

    /// Basal Metabolic Rate (kcal/day)
    #[must_use]
    pub const fn bmr(&self) -> i32 {
        self.result.bmr
    }

    /// Activity multiplier
    #[must_use]
    pub const fn activity_factor(&self) -> f64 {
        self.result.activity_factor
    }

    /// Total Daily Energy Expenditure (kcal/day)
    #[must_use]
    pub const fn tdee(&self) -> i32 {
        self.result.tdee
    }

    /// Goal-adjusted daily target (kcal/day)
    #[must_use]
    pub const fn daily_caloric_needs(&self) -> i32 {
        self.result.daily_caloric_needs
    }

    /// Soft conditions raised during evaluation
    #[must_use]
    pub fn warnings(&self) -> &[CalculationWarning] {
        &self.result.warnings
    }
}
