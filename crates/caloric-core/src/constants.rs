// ABOUTME: Fixed formula coefficients, BMI thresholds, and lookup tables
// ABOUTME: Compile-time constants from which the calculator configuration defaults are built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by pipeline stage.

/// Unit conversions used by the pipeline
pub mod units {
    /// Centimeters per meter (BMI stage)
    pub const CM_PER_M: f64 = 100.0;
    /// Centimeters per inch (ideal-weight stage)
    pub const CM_PER_INCH: f64 = 2.54;
}

/// BMI band cut points (kg/m²)
pub mod bmi {
    /// Lower bound of the normal band
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// Lower bound of the overweight band
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the obese band
    pub const OBESE_MIN: f64 = 30.0;
}

/// Ideal body weight (Devine-style linear formula on inches over 5 ft)
pub mod ideal_weight {
    /// Base weight for males (kg)
    pub const MALE_BASE_KG: f64 = 50.0;
    /// Base weight for females (kg)
    pub const FEMALE_BASE_KG: f64 = 45.5;
    /// Kilograms added per inch above the baseline height
    pub const KG_PER_INCH: f64 = 2.3;
    /// Baseline height (inches)
    pub const BASELINE_HEIGHT_IN: f64 = 60.0;
}

/// Adjusted body weight
pub mod adjusted_weight {
    /// Share of the excess over ideal weight that is kept
    pub const EXCESS_FACTOR: f64 = 0.25;
}

/// Mifflin-St Jeor coefficients
pub mod mifflin_st_jeor {
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity factor multipliers for TDEE
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const SUPER_ACTIVE: f64 = 1.9;
}

/// Weekly rate (kg/week) to daily kcal adjustment tables
pub mod rate_tables {
    /// Daily deficit per supported weekly loss rate
    pub const LOSS: [(f64, f64); 7] = [
        (0.25, 250.0),
        (0.5, 500.0),
        (0.75, 750.0),
        (1.0, 1000.0),
        (1.5, 1500.0),
        (2.0, 2000.0),
        (2.5, 2500.0),
    ];

    /// Daily surplus per supported weekly gain rate
    pub const GAIN: [(f64, f64); 4] = [(0.25, 250.0), (0.5, 500.0), (0.75, 750.0), (1.0, 1000.0)];

    /// Tolerance when matching a requested rate against a table entry
    pub const RATE_MATCH_EPSILON: f64 = 1e-9;
}

/// Minimum daily intake after goal adjustment (kcal/day)
pub mod safety_floor {
    /// Female floor
    pub const FEMALE_KCAL: f64 = 1300.0;
    /// Male floor
    pub const MALE_KCAL: f64 = 1500.0;
}

/// Plausibility limits applied when a profile is constructed
pub mod profile_limits {
    /// Heaviest accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Tallest accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Oldest accepted age (years)
    pub const MAX_AGE: u32 = 150;
}

/// Environment variables read by the calculator configuration
pub mod env_vars {
    /// BMI lower bound of the normal band
    pub const BMI_UNDERWEIGHT_MAX: &str = "CALORIC_BMI_UNDERWEIGHT_MAX";
    /// BMI lower bound of the overweight band
    pub const BMI_OVERWEIGHT_MIN: &str = "CALORIC_BMI_OVERWEIGHT_MIN";
    /// BMI lower bound of the obese band
    pub const BMI_OBESE_MIN: &str = "CALORIC_BMI_OBESE_MIN";
    /// Adjusted-weight excess factor
    pub const ADJUSTED_EXCESS_FACTOR: &str = "CALORIC_ADJUSTED_EXCESS_FACTOR";
    /// Sedentary activity factor
    pub const ACTIVITY_SEDENTARY: &str = "CALORIC_ACTIVITY_SEDENTARY";
    /// Lightly active activity factor
    pub const ACTIVITY_LIGHTLY_ACTIVE: &str = "CALORIC_ACTIVITY_LIGHTLY_ACTIVE";
    /// Moderately active activity factor
    pub const ACTIVITY_MODERATELY_ACTIVE: &str = "CALORIC_ACTIVITY_MODERATELY_ACTIVE";
    /// Very active activity factor
    pub const ACTIVITY_VERY_ACTIVE: &str = "CALORIC_ACTIVITY_VERY_ACTIVE";
    /// Super active activity factor
    pub const ACTIVITY_SUPER_ACTIVE: &str = "CALORIC_ACTIVITY_SUPER_ACTIVE";
    /// Female safety floor
    pub const FLOOR_FEMALE_KCAL: &str = "CALORIC_FLOOR_FEMALE_KCAL";
    /// Male safety floor
    pub const FLOOR_MALE_KCAL: &str = "CALORIC_FLOOR_MALE_KCAL";
    /// Maximum accepted body weight
    pub const MAX_WEIGHT_KG: &str = "CALORIC_MAX_WEIGHT_KG";
    /// Maximum accepted height
    pub const MAX_HEIGHT_CM: &str = "CALORIC_MAX_HEIGHT_CM";
    /// Maximum accepted age
    pub const MAX_AGE: &str = "CALORIC_MAX_AGE";
}
