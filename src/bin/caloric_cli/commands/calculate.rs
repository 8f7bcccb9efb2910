// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: The calculate command for caloric-cli
// ABOUTME: Builds a raw profile from flags and prints the pipeline result

use caloric_calculator::calculator::{CaloricCalculator, RawProfile};
use caloric_calculator::errors::AppResult;
use tracing::info;

use crate::helpers::display::{display_calculation, print_json, OutputFormat};

/// Flags of the calculate command, still untyped
pub struct CalculateArgs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: String,
    pub activity_level: String,
    pub weight_goal: String,
    pub weekly_rate_kg: f64,
}

impl From<CalculateArgs> for RawProfile {
    fn from(args: CalculateArgs) -> Self {
        Self {
            weight_kg: args.weight_kg,
            height_cm: args.height_cm,
            age: args.age,
            sex: args.sex,
            activity_level: args.activity_level,
            weight_goal: args.weight_goal,
            weekly_rate_kg: args.weekly_rate_kg,
        }
    }
}

/// Validate the profile, evaluate it and print the result
pub fn run(args: CalculateArgs, format: OutputFormat) -> AppResult<()> {
    let calculator = CaloricCalculator::from_raw(args.into())?;
    info!(
        daily_caloric_needs = calculator.daily_caloric_needs(),
        warnings = calculator.warnings().len(),
        "Calculation complete"
    );

    match format {
        OutputFormat::Json => print_json(&calculator),
        OutputFormat::Text => {
            display_calculation(&calculator);
            Ok(())
        }
    }
}
