// ABOUTME: End-to-end tests of the caloric pipeline from raw profile to daily target
// ABOUTME: Reference scenarios, BMI band boundaries, goal tables, safety floor, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Pipeline tests
//!
//! Covers:
//! - Reference profiles with hand-checked BMI, BMR, TDEE and daily targets
//! - Recommended-weight selection at each BMI band edge
//! - Loss and gain tables, unrecognized rates, and the safety floor
//! - Determinism and serialized output shape

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use caloric_calculator::calculator::{
    evaluate, BmiCategory, CaloricCalculator, CalculationWarning, GoalAdjustment, Profile,
    WeightBasis,
};
use caloric_calculator::config::CalculatorConfig;
use caloric_calculator::constants::rate_tables;
use caloric_calculator::models::{ActivityLevel, WeightGoal};
use common::{assert_close, calculate, raw_profile};

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_maintain_moderately_active_male() {
    let calc = calculate(70.0, 175.0, 30, "M", "MODERATELY_ACTIVE", "MAINTAIN", 0.0);

    assert_close(calc.bmi(), 22.86, 1e-9);
    assert_eq!(calc.result().bmi_category, BmiCategory::Normal);
    assert_close(calc.ideal_weight_kg(), 70.46, 1e-9);
    assert_close(calc.recommended_weight_kg(), 70.0, 1e-9);
    assert_eq!(calc.result().weight_basis, WeightBasis::Actual);
    assert_eq!(calc.bmr(), 1649);
    assert_close(calc.activity_factor(), 1.55, 1e-12);
    assert_eq!(calc.tdee(), 2556);
    assert_eq!(calc.daily_caloric_needs(), 2556);
    assert_eq!(calc.result().goal_adjustment, GoalAdjustment::Maintenance);
    assert!(calc.warnings().is_empty());
}

#[test]
fn test_lose_half_kilo_per_week() {
    let calc = calculate(70.0, 175.0, 30, "M", "MA", "LOSE", 0.5);

    assert_eq!(calc.tdee(), 2556);
    assert_eq!(calc.daily_caloric_needs(), 2056);
    assert_eq!(
        calc.result().goal_adjustment,
        GoalAdjustment::Deficit {
            weekly_rate_kg: 0.5,
            daily_kcal: 500.0,
        }
    );
}

#[test]
fn test_small_sedentary_female_hits_floor() {
    let calc = calculate(45.0, 150.0, 20, "F", "SEDENTARY", "LOSE", 1.0);

    assert_close(calc.bmi(), 20.0, 1e-9);
    assert_eq!(calc.result().weight_basis, WeightBasis::Actual);
    // 1126.5 rounds to even
    assert_eq!(calc.bmr(), 1126);
    assert_eq!(calc.tdee(), 1351);
    assert_eq!(calc.daily_caloric_needs(), 1300);
    assert!(calc.warnings().contains(&CalculationWarning::SafetyFloorApplied {
        requested_kcal: 351,
        floor_kcal: 1300,
    }));
}

#[test]
fn test_overweight_male_uses_ideal_weight() {
    let calc = calculate(85.0, 175.0, 35, "M", "S", "LOSE", 0.75);

    assert_close(calc.bmi(), 27.76, 1e-9);
    assert_eq!(calc.result().bmi_category, BmiCategory::Overweight);
    assert_eq!(calc.result().weight_basis, WeightBasis::Ideal);
    assert_close(calc.recommended_weight_kg(), calc.ideal_weight_kg(), 1e-12);
    assert_eq!(calc.bmr(), 1628);
    assert_eq!(calc.tdee(), 1954);
    // 1954 - 750 = 1204, raised to the male floor
    assert_eq!(calc.daily_caloric_needs(), 1500);
}

#[test]
fn test_obese_male_uses_adjusted_weight() {
    let calc = calculate(100.0, 175.0, 40, "M", "MA", "LOSE", 1.0);

    assert_eq!(calc.result().bmi_category, BmiCategory::Obese);
    assert_eq!(calc.result().weight_basis, WeightBasis::Adjusted);
    // 70.46 + 0.25 x 29.54 = 77.845, which rounds to even
    assert_close(calc.adjusted_weight_kg(), 77.84, 1e-9);
    assert_close(calc.recommended_weight_kg(), calc.adjusted_weight_kg(), 1e-12);
    assert_eq!(calc.bmr(), 1677);
    assert_eq!(calc.tdee(), 2599);
    assert_eq!(calc.daily_caloric_needs(), 1599);
}

#[test]
fn test_lean_male_gaining() {
    let calc = calculate(60.0, 180.0, 25, "M", "VA", "GAIN", 0.5);

    assert_close(calc.bmi(), 18.52, 1e-9);
    assert_eq!(calc.result().bmi_category, BmiCategory::Normal);
    assert_eq!(calc.bmr(), 1605);
    assert_eq!(calc.tdee(), 2769);
    assert_eq!(calc.daily_caloric_needs(), 3269);
}

#[test]
fn test_lightly_active_female_losing() {
    let calc = calculate(68.0, 165.0, 28, "F", "LA", "LOSE", 0.5);

    assert_close(calc.bmi(), 24.98, 1e-9);
    assert_eq!(calc.result().weight_basis, WeightBasis::Actual);
    assert_eq!(calc.bmr(), 1410);
    assert_eq!(calc.tdee(), 1939);
    assert_eq!(calc.daily_caloric_needs(), 1439);
}

// ============================================================================
// BMI Band Boundaries
// ============================================================================

#[test]
fn test_recommended_weight_at_band_edges() {
    // Height 200 cm makes BMI = weight / 4
    let cases = [
        (99.6, 24.9, WeightBasis::Actual),
        (100.0, 25.0, WeightBasis::Ideal),
        (119.6, 29.9, WeightBasis::Ideal),
        (120.0, 30.0, WeightBasis::Adjusted),
    ];

    for (weight_kg, expected_bmi, expected_basis) in cases {
        let calc = calculate(weight_kg, 200.0, 40, "M", "MA", "MAINTAIN", 0.0);
        assert_close(calc.bmi(), expected_bmi, 1e-9);
        assert_eq!(
            calc.result().weight_basis,
            expected_basis,
            "weight {weight_kg} kg"
        );
    }
}

#[test]
fn test_underweight_uses_actual_weight() {
    let calc = calculate(50.0, 180.0, 22, "F", "LA", "MAINTAIN", 0.0);
    assert_eq!(calc.result().bmi_category, BmiCategory::Underweight);
    assert_close(calc.recommended_weight_kg(), 50.0, 1e-12);
}

// ============================================================================
// Goal Tables and Safety Floor
// ============================================================================

#[test]
fn test_loss_is_monotonic_until_floor() {
    let mut previous: Option<i32> = None;
    for &(rate, _) in &rate_tables::LOSS {
        let daily = calculate(95.0, 190.0, 30, "M", "SA", "LOSE", rate).daily_caloric_needs();
        if let Some(prev) = previous {
            assert!(daily <= prev, "rate {rate}: {daily} > {prev}");
            if prev > 1500 {
                assert!(daily < prev, "rate {rate} did not reduce intake");
            }
        }
        previous = Some(daily);
    }
}

#[test]
fn test_floor_holds_for_every_loss_rate_and_activity() {
    for level in ActivityLevel::ALL {
        for &(rate, _) in &rate_tables::LOSS {
            let female = calculate(45.0, 150.0, 60, "F", level.as_str(), "LOSE", rate);
            assert!(female.daily_caloric_needs() >= 1300);

            let male = calculate(55.0, 160.0, 60, "M", level.as_str(), "LOSE", rate);
            assert!(male.daily_caloric_needs() >= 1500);
        }
    }
}

#[test]
fn test_floor_applies_to_maintain() {
    let calc = calculate(40.0, 145.0, 90, "F", "S", "MAINTAIN", 0.0);
    assert!(calc.tdee() < 1300);
    assert_eq!(calc.daily_caloric_needs(), 1300);
    assert_eq!(calc.result().goal_adjustment, GoalAdjustment::Maintenance);
}

#[test]
fn test_every_gain_rate_adds_its_surplus() {
    for &(rate, kcal) in &rate_tables::GAIN {
        let calc = calculate(70.0, 175.0, 30, "M", "MA", "gain", rate);
        assert_eq!(calc.daily_caloric_needs(), 2556 + kcal as i32);
    }
}

#[test]
fn test_maintain_ignores_rate() {
    let calc = calculate(70.0, 175.0, 30, "M", "MA", "maintain", 1.0);
    assert_eq!(calc.daily_caloric_needs(), calc.tdee());
    assert!(calc.warnings().is_empty());
}

#[test]
fn test_unrecognized_rate_is_a_warning() {
    let calc = calculate(70.0, 175.0, 30, "M", "MA", "LOSE", 0.3);

    assert_eq!(calc.daily_caloric_needs(), 2556);
    assert_eq!(
        calc.result().goal_adjustment,
        GoalAdjustment::UnrecognizedRate {
            goal: WeightGoal::Lose,
            weekly_rate_kg: 0.3,
        }
    );
    assert_eq!(
        calc.warnings(),
        &[CalculationWarning::UnrecognizedWeeklyRate {
            goal: WeightGoal::Lose,
            weekly_rate_kg: 0.3,
        }]
    );
}

#[test]
fn test_gain_rate_beyond_table_is_unrecognized() {
    let calc = calculate(70.0, 175.0, 30, "M", "MA", "GAIN", 1.5);
    assert_eq!(calc.daily_caloric_needs(), calc.tdee());
    assert!(calc.result().has_warnings());
}

#[test]
fn test_zero_rate_with_lose_goal_is_unrecognized() {
    let calc = calculate(70.0, 175.0, 30, "M", "MA", "LOSE", 0.0);
    assert!(matches!(
        calc.result().goal_adjustment,
        GoalAdjustment::UnrecognizedRate { .. }
    ));
    assert_eq!(calc.daily_caloric_needs(), 2556);
}

// ============================================================================
// Determinism and Output
// ============================================================================

#[test]
fn test_evaluation_is_deterministic() {
    let config = CalculatorConfig::default();
    let raw = raw_profile(82.5, 178.0, 41, "FEMALE", "VERY_ACTIVE", "LOSE", 0.75);
    let profile = Profile::with_limits(raw.into_params().unwrap(), &config.profile_limits).unwrap();

    let first = evaluate(&profile, &config);
    let second = evaluate(&profile, &config);
    assert_eq!(first, second);

    let calculator = CaloricCalculator::with_config(profile, &config);
    assert_eq!(calculator.result(), &first);
    assert_eq!(calculator.into_result(), second);
}

#[test]
fn test_result_serializes_with_tagged_adjustment() {
    let calc = calculate(70.0, 175.0, 30, "M", "MA", "LOSE", 0.5);
    let json = serde_json::to_value(&calc).unwrap();

    assert_eq!(json["profile"]["sex"], "MALE");
    assert_eq!(json["result"]["daily_caloric_needs"], 2056);
    assert_eq!(json["result"]["bmi_category"], "normal");
    assert_eq!(json["result"]["weight_basis"], "actual");
    assert_eq!(json["result"]["goal_adjustment"]["kind"], "deficit");
    assert_eq!(json["result"]["goal_adjustment"]["daily_kcal"], 500.0);
    assert!(json["result"]["warnings"].as_array().unwrap().is_empty());
}
