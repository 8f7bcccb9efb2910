// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: The tables command for caloric-cli
// ABOUTME: Prints the activity factors and weekly rate tables from the active configuration

use caloric_calculator::config::{ActivityFactorsConfig, CalculatorConfig, RateAdjustment};
use caloric_calculator::errors::AppResult;
use serde::Serialize;

use crate::helpers::display::{display_tables, print_json, OutputFormat};

/// Lookup tables as printed by the CLI
#[derive(Serialize)]
pub struct TablesView<'a> {
    pub activity_factors: &'a ActivityFactorsConfig,
    pub loss: &'a [RateAdjustment],
    pub gain: &'a [RateAdjustment],
}

/// Print the tables in effect
pub fn run(format: OutputFormat) -> AppResult<()> {
    let config = CalculatorConfig::global();
    let view = TablesView {
        activity_factors: &config.activity_factors,
        loss: &config.goal_adjustment.loss,
        gain: &config.goal_adjustment.gain,
    };

    match format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Text => {
            display_tables(&view);
            Ok(())
        }
    }
}
