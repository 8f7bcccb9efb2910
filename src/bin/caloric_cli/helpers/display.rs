// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for caloric-cli
// ABOUTME: Renders calculation results, lookup tables, and errors as text or JSON

use caloric_calculator::calculator::{CaloricCalculator, GoalAdjustment};
use caloric_calculator::errors::{AppError, AppResult, ErrorResponse};
use caloric_calculator::models::ActivityLevel;
use clap::ValueEnum;
use serde::Serialize;

use crate::commands::tables::TablesView;

/// How command output is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a full calculation report
pub fn display_calculation(calculator: &CaloricCalculator) {
    let profile = calculator.profile();
    let result = calculator.result();

    println!("\nCaloric Needs Report");
    println!("{}", "=".repeat(50));
    println!("Profile:");
    println!("   Weight: {} kg", profile.weight_kg());
    println!("   Height: {} cm", profile.height_cm());
    println!("   Age: {} years", profile.age());
    println!("   Sex: {}", profile.sex());
    println!("   Activity: {}", profile.activity_level());
    println!("   Goal: {}", profile.weight_goal());
    if profile.weight_goal().uses_weekly_rate() {
        println!("   Weekly rate: {} kg/week", profile.weekly_rate_kg());
    }

    println!("\nBody composition:");
    println!(
        "   BMI: {:.2} ({})",
        result.bmi,
        result.bmi_category.label()
    );
    println!("   Ideal weight: {:.2} kg", result.ideal_weight_kg);
    println!("   Adjusted weight: {:.2} kg", result.adjusted_weight_kg);
    println!(
        "   Weight used for BMR: {:.2} kg ({})",
        result.recommended_weight_kg,
        result.weight_basis.label()
    );

    println!("\nEnergy:");
    println!("   BMR: {} kcal/day", result.bmr);
    println!("   Activity factor: {}", result.activity_factor);
    println!("   TDEE: {} kcal/day", result.tdee);
    println!("   Goal adjustment: {}", describe_adjustment(&result.goal_adjustment));
    println!("{}", "=".repeat(50));
    println!("Daily caloric needs: {} kcal/day", result.daily_caloric_needs);

    if result.has_warnings() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("   - {warning}");
        }
    }
}

fn describe_adjustment(adjustment: &GoalAdjustment) -> String {
    match adjustment {
        GoalAdjustment::Maintenance => "none (maintain)".to_owned(),
        GoalAdjustment::Deficit {
            weekly_rate_kg,
            daily_kcal,
        } => format!("-{daily_kcal} kcal/day ({weekly_rate_kg} kg/week loss)"),
        GoalAdjustment::Surplus {
            weekly_rate_kg,
            daily_kcal,
        } => format!("+{daily_kcal} kcal/day ({weekly_rate_kg} kg/week gain)"),
        GoalAdjustment::UnrecognizedRate { weekly_rate_kg, .. } => {
            format!("none (unrecognized rate {weekly_rate_kg} kg/week)")
        }
    }
}

/// Display the activity factor and weekly rate tables
pub fn display_tables(view: &TablesView<'_>) {
    println!("\nActivity factors");
    println!("{}", "=".repeat(50));
    for level in ActivityLevel::ALL {
        println!(
            "   {:<18} {:<3} x{}",
            level.as_str(),
            level.short_code(),
            view.activity_factors.factor_for(level)
        );
    }

    println!("\nWeight loss (kg/week -> kcal/day deficit)");
    println!("{}", "=".repeat(50));
    for row in view.loss {
        println!("   {:<6} -{}", row.weekly_rate_kg, row.daily_kcal);
    }

    println!("\nWeight gain (kg/week -> kcal/day surplus)");
    println!("{}", "=".repeat(50));
    for row in view.gain {
        println!("   {:<6} +{}", row.weekly_rate_kg, row.daily_kcal);
    }
}

/// Report an error; JSON mode prints an error body on stdout
pub fn display_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let body = ErrorResponse::from(error.clone());
            match serde_json::to_string_pretty(&body) {
                Ok(json) => println!("{json}"),
                Err(_) => eprintln!("Error: {error}"),
            }
        }
        OutputFormat::Text => eprintln!("Error: {error}"),
    }
}
