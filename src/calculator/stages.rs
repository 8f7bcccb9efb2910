// ABOUTME: Pure stage functions of the caloric pipeline
// ABOUTME: BMI, ideal/adjusted weight, weight selection, Mifflin-St Jeor BMR, TDEE, goal adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Caloric Pipeline Stages
//!
//! Every function here is pure: its output depends only on its arguments.
//! Inputs are assumed to come from a validated [`Profile`](super::Profile).
//!
//! All rounding is round-half-to-even, both for the 2-decimal weight and BMI
//! values and for the integer kcal values.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Devine, B.J. (1974). Gentamicin therapy. *Drug Intelligence & Clinical Pharmacy*, 8, 650-655.

use caloric_core::constants::units;
use caloric_core::models::{ActivityLevel, Sex, WeightGoal};

use super::result::{
    BmiCategory, DailyCaloricNeeds, GoalAdjustment, RecommendedWeight, WeightBasis,
};
use crate::config::{
    ActivityFactorsConfig, AdjustedWeightConfig, BmiThresholdsConfig, BmrConfig,
    GoalAdjustmentConfig, IdealWeightConfig, SafetyFloorConfig,
};

/// Round to 2 decimal places, ties to even
#[must_use]
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Round to the nearest whole kcal, ties to even
#[must_use]
pub fn round_kcal(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / units::CM_PER_M;
    round_2dp(weight_kg / height_m.powi(2))
}

/// Calculate ideal body weight
///
/// Formula: IBW = base + 2.3 x (`height_in` - 60), base 50 kg (male) or 45.5 kg (female)
///
/// Linear in height: very short statures can yield implausible or negative values.
#[must_use]
pub fn calculate_ideal_weight(height_cm: f64, sex: Sex, config: &IdealWeightConfig) -> f64 {
    let height_in = height_cm / units::CM_PER_INCH;
    let ideal = config
        .kg_per_inch
        .mul_add(height_in - config.baseline_height_in, config.base_kg(sex));
    round_2dp(ideal)
}

/// Calculate adjusted body weight
///
/// Formula: ABW = IBW + 0.25 x (actual - IBW)
#[must_use]
pub fn calculate_adjusted_weight(
    actual_weight_kg: f64,
    ideal_weight_kg: f64,
    config: &AdjustedWeightConfig,
) -> f64 {
    round_2dp(
        config
            .excess_factor
            .mul_add(actual_weight_kg - ideal_weight_kg, ideal_weight_kg),
    )
}

/// Classify a BMI into its band; first match wins
#[must_use]
pub fn classify_bmi(bmi: f64, thresholds: &BmiThresholdsConfig) -> BmiCategory {
    if bmi < thresholds.underweight_max {
        BmiCategory::Underweight
    } else if bmi < thresholds.overweight_min {
        BmiCategory::Normal
    } else if bmi < thresholds.obese_min {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Choose which weight feeds the BMR stage
///
/// | BMI        | Weight   |
/// |------------|----------|
/// | < 25       | actual   |
/// | 25 to < 30 | ideal    |
/// | ≥ 30       | adjusted |
#[must_use]
pub fn select_recommended_weight(
    bmi: f64,
    actual_weight_kg: f64,
    ideal_weight_kg: f64,
    adjusted_weight_kg: f64,
    thresholds: &BmiThresholdsConfig,
) -> RecommendedWeight {
    let category = classify_bmi(bmi, thresholds);
    let basis = category.weight_basis();
    let weight_kg = match basis {
        WeightBasis::Actual => actual_weight_kg,
        WeightBasis::Ideal => ideal_weight_kg,
        WeightBasis::Adjusted => adjusted_weight_kg,
    };
    RecommendedWeight {
        category,
        basis,
        weight_kg,
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> i32 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    round_kcal(weight_component + height_component + age_component + config.sex_constant(sex))
}

/// Look up the activity multiplier for a level
#[must_use]
pub fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: i32, activity_factor: f64) -> i32 {
    round_kcal(f64::from(bmr) * activity_factor)
}

/// Resolve the goal adjustment for a weekly rate
///
/// A LOSE/GAIN rate missing from its table yields
/// [`GoalAdjustment::UnrecognizedRate`] with no energy change.
#[must_use]
pub fn resolve_goal_adjustment(
    goal: WeightGoal,
    weekly_rate_kg: f64,
    config: &GoalAdjustmentConfig,
) -> GoalAdjustment {
    match (goal, config.lookup(goal, weekly_rate_kg)) {
        (WeightGoal::Maintain, _) => GoalAdjustment::Maintenance,
        (WeightGoal::Lose, Some(daily_kcal)) => GoalAdjustment::Deficit {
            weekly_rate_kg,
            daily_kcal,
        },
        (WeightGoal::Gain, Some(daily_kcal)) => GoalAdjustment::Surplus {
            weekly_rate_kg,
            daily_kcal,
        },
        (WeightGoal::Lose | WeightGoal::Gain, None) => GoalAdjustment::UnrecognizedRate {
            goal,
            weekly_rate_kg,
        },
    }
}

/// Calculate goal-adjusted daily caloric needs with the sex-specific safety floor
///
/// - MAINTAIN: TDEE
/// - LOSE: TDEE - deficit(rate)
/// - GAIN: TDEE + surplus(rate)
///
/// The result is then raised to at least 1300 kcal (female) or 1500 kcal (male).
#[must_use]
pub fn calculate_daily_caloric_needs(
    tdee: i32,
    goal: WeightGoal,
    weekly_rate_kg: f64,
    sex: Sex,
    goals: &GoalAdjustmentConfig,
    floors: &SafetyFloorConfig,
) -> DailyCaloricNeeds {
    let adjustment = resolve_goal_adjustment(goal, weekly_rate_kg, goals);
    let requested = f64::from(tdee) + adjustment.signed_kcal();
    let floor = floors.floor_for(sex);

    let (kcal, floor_applied_kcal) = if requested < floor {
        let floor_kcal = round_kcal(floor);
        (floor_kcal, Some(floor_kcal))
    } else {
        (round_kcal(requested), None)
    };

    DailyCaloricNeeds {
        kcal,
        adjustment,
        floor_applied_kcal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_2dp_ties_to_even() {
        assert!((round_2dp(22.857_142) - 22.86).abs() < f64::EPSILON);
        assert!((round_2dp(0.125) - 0.12).abs() < f64::EPSILON);
        assert!((round_2dp(0.375) - 0.38).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_kcal_ties_to_even() {
        assert_eq!(round_kcal(1126.5), 1126);
        assert_eq!(round_kcal(1127.5), 1128);
        assert_eq!(round_kcal(1648.75), 1649);
    }

    #[test]
    fn test_bmi() {
        assert!((calculate_bmi(70.0, 175.0) - 22.86).abs() < f64::EPSILON);
        assert!((calculate_bmi(100.0, 200.0) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ideal_weight_by_sex() {
        let config = IdealWeightConfig::default();
        let male = calculate_ideal_weight(175.0, Sex::Male, &config);
        let female = calculate_ideal_weight(175.0, Sex::Female, &config);
        assert!((male - 70.46).abs() < 1e-9);
        assert!((female - 65.96).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_weight_short_stature_is_not_guarded() {
        let ideal = calculate_ideal_weight(60.0, Sex::Female, &IdealWeightConfig::default());
        assert!(ideal < 0.0);
    }

    #[test]
    fn test_adjusted_weight() {
        let adjusted = calculate_adjusted_weight(110.0, 70.0, &AdjustedWeightConfig::default());
        assert!((adjusted - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_selector_boundaries() {
        let thresholds = BmiThresholdsConfig::default();
        let pick = |bmi| select_recommended_weight(bmi, 1.0, 2.0, 3.0, &thresholds);

        assert_eq!(pick(18.49).category, BmiCategory::Underweight);
        assert_eq!(pick(18.5).category, BmiCategory::Normal);
        assert!((pick(24.9).weight_kg - 1.0).abs() < f64::EPSILON);
        assert!((pick(24.95).weight_kg - 1.0).abs() < f64::EPSILON);
        assert!((pick(25.0).weight_kg - 2.0).abs() < f64::EPSILON);
        assert!((pick(29.9).weight_kg - 2.0).abs() < f64::EPSILON);
        assert!((pick(29.95).weight_kg - 2.0).abs() < f64::EPSILON);
        assert!((pick(30.0).weight_kg - 3.0).abs() < f64::EPSILON);
        assert_eq!(pick(30.0).basis, WeightBasis::Adjusted);
    }

    #[test]
    fn test_mifflin_st_jeor() {
        let config = BmrConfig::default();
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        assert_eq!(
            calculate_mifflin_st_jeor(70.0, 175.0, 30, Sex::Male, &config),
            1649
        );
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
        assert_eq!(
            calculate_mifflin_st_jeor(60.0, 165.0, 25, Sex::Female, &config),
            1345
        );
    }

    #[test]
    fn test_tdee() {
        assert_eq!(calculate_tdee(1649, 1.55), 2556);
        assert_eq!(calculate_tdee(1500, 1.2), 1800);
    }

    #[test]
    fn test_activity_factor_table() {
        let config = ActivityFactorsConfig::default();
        let factors: Vec<f64> = ActivityLevel::ALL
            .into_iter()
            .map(|level| activity_factor(level, &config))
            .collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_goal_adjustment_lookup() {
        let config = GoalAdjustmentConfig::default();
        assert_eq!(
            resolve_goal_adjustment(WeightGoal::Lose, 2.5, &config),
            GoalAdjustment::Deficit {
                weekly_rate_kg: 2.5,
                daily_kcal: 2500.0
            }
        );
        // Gain table stops at 1.0 kg/week
        assert_eq!(
            resolve_goal_adjustment(WeightGoal::Gain, 1.5, &config),
            GoalAdjustment::UnrecognizedRate {
                goal: WeightGoal::Gain,
                weekly_rate_kg: 1.5
            }
        );
        assert_eq!(
            resolve_goal_adjustment(WeightGoal::Maintain, 0.5, &config),
            GoalAdjustment::Maintenance
        );
    }

    #[test]
    fn test_daily_needs_floor() {
        let goals = GoalAdjustmentConfig::default();
        let floors = SafetyFloorConfig::default();

        let female =
            calculate_daily_caloric_needs(1351, WeightGoal::Lose, 1.0, Sex::Female, &goals, &floors);
        assert_eq!(female.kcal, 1300);
        assert_eq!(female.floor_applied_kcal, Some(1300));

        let male =
            calculate_daily_caloric_needs(1800, WeightGoal::Lose, 0.5, Sex::Male, &goals, &floors);
        assert_eq!(male.kcal, 1500);

        let untouched =
            calculate_daily_caloric_needs(2556, WeightGoal::Gain, 0.5, Sex::Male, &goals, &floors);
        assert_eq!(untouched.kcal, 3056);
        assert_eq!(untouched.floor_applied_kcal, None);
    }
}
