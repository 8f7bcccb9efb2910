// ABOUTME: Output types of the caloric pipeline
// ABOUTME: CaloricResult plus BMI category, weight basis, goal adjustment, and soft warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use caloric_core::models::WeightGoal;
use serde::{Deserialize, Serialize};

/// BMI band a profile falls into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 ≤ BMI < 25
    Normal,
    /// 25 ≤ BMI < 30
    Overweight,
    /// BMI ≥ 30
    Obese,
}

impl BmiCategory {
    /// Which weight feeds the BMR stage for this band
    #[must_use]
    pub const fn weight_basis(&self) -> WeightBasis {
        match self {
            Self::Underweight | Self::Normal => WeightBasis::Actual,
            Self::Overweight => WeightBasis::Ideal,
            Self::Obese => WeightBasis::Adjusted,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Weight estimate selected as input to the BMR stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightBasis {
    /// Measured body weight
    Actual,
    /// Ideal body weight
    Ideal,
    /// Adjusted body weight
    Adjusted,
}

impl WeightBasis {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Ideal => "ideal",
            Self::Adjusted => "adjusted",
        }
    }
}

/// Outcome of the recommended-weight selector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedWeight {
    /// BMI band of the profile
    pub category: BmiCategory,
    /// Which estimate was chosen
    pub basis: WeightBasis,
    /// The chosen weight (kg)
    pub weight_kg: f64,
}

/// What the goal stage did to TDEE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalAdjustment {
    /// MAINTAIN: TDEE is used as is
    Maintenance,
    /// LOSE with a supported rate
    Deficit {
        /// Requested weekly loss (kg/week)
        weekly_rate_kg: f64,
        /// Daily deficit subtracted from TDEE (kcal)
        daily_kcal: f64,
    },
    /// GAIN with a supported rate
    Surplus {
        /// Requested weekly gain (kg/week)
        weekly_rate_kg: f64,
        /// Daily surplus added to TDEE (kcal)
        daily_kcal: f64,
    },
    /// LOSE/GAIN with a rate missing from the table: no adjustment applied
    UnrecognizedRate {
        /// Goal that was requested
        goal: WeightGoal,
        /// Rate that could not be looked up (kg/week)
        weekly_rate_kg: f64,
    },
}

impl GoalAdjustment {
    /// Signed daily change applied to TDEE (kcal)
    #[must_use]
    pub fn signed_kcal(&self) -> f64 {
        match self {
            Self::Maintenance | Self::UnrecognizedRate { .. } => 0.0,
            Self::Deficit { daily_kcal, .. } => -daily_kcal,
            Self::Surplus { daily_kcal, .. } => *daily_kcal,
        }
    }
}

/// Soft condition raised during evaluation (never aborts the pipeline)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationWarning {
    /// Weekly rate not present in the goal's table; adjustment defaulted to 0
    UnrecognizedWeeklyRate {
        /// Goal that was requested
        goal: WeightGoal,
        /// Rate that could not be looked up (kg/week)
        weekly_rate_kg: f64,
    },
    /// Goal-adjusted intake was below the sex-specific floor and was raised
    SafetyFloorApplied {
        /// Intake before the floor (kcal/day)
        requested_kcal: i32,
        /// Floor that replaced it (kcal/day)
        floor_kcal: i32,
    },
}

impl fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedWeeklyRate {
                goal,
                weekly_rate_kg,
            } => write!(
                f,
                "unrecognized weekly rate {weekly_rate_kg} kg/week for goal {goal}, no adjustment applied"
            ),
            Self::SafetyFloorApplied {
                requested_kcal,
                floor_kcal,
            } => write!(
                f,
                "requested intake of {requested_kcal} kcal/day is below the safety floor, raised to {floor_kcal} kcal/day"
            ),
        }
    }
}

/// Goal stage output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCaloricNeeds {
    /// Final daily intake target (kcal/day)
    pub kcal: i32,
    /// Adjustment applied to TDEE
    pub adjustment: GoalAdjustment,
    /// Floor that replaced a lower value, if any
    pub floor_applied_kcal: Option<i32>,
}

/// Complete output of the caloric pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloricResult {
    /// Body Mass Index (kg/m², 2 decimals)
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Ideal body weight (kg, 2 decimals)
    pub ideal_weight_kg: f64,
    /// Adjusted body weight (kg, 2 decimals)
    pub adjusted_weight_kg: f64,
    /// Weight used for BMR (kg)
    pub recommended_weight_kg: f64,
    /// Which estimate the recommended weight is
    pub weight_basis: WeightBasis,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i32,
    /// Activity multiplier
    pub activity_factor: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i32,
    /// Adjustment applied for the weight goal
    pub goal_adjustment: GoalAdjustment,
    /// Goal-adjusted, floor-protected daily target (kcal/day)
    pub daily_caloric_needs: i32,
    /// Soft conditions observed during evaluation
    pub warnings: Vec<CalculationWarning>,
}

impl CaloricResult {
    /// Whether any soft condition was raised
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
