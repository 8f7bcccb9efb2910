// ABOUTME: Closed enumerations describing a caloric profile
// ABOUTME: Sex, ActivityLevel, and WeightGoal with string parsing at the input boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Normalize a user-supplied code: trim, uppercase, and map `-`/space to `_`
fn normalize_code(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Biological sex used by the ideal-weight, BMR, and safety-floor stages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    /// Male
    #[serde(alias = "M")]
    Male,
    /// Female
    #[serde(alias = "F")]
    Female,
}

impl Sex {
    /// Canonical code (`MALE` / `FEMALE`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }

    /// Single-letter code (`M` / `F`)
    #[must_use]
    pub const fn short_code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "M" | "MALE" => Ok(Self::Male),
            "F" | "FEMALE" => Ok(Self::Female),
            _ => Err(AppError::invalid_sex(s)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifestyle activity level scaling BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(alias = "S")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "LA")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "MA")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "VA")]
    VeryActive,
    /// Very hard exercise, physical job, or training twice a day
    #[serde(alias = "SA")]
    SuperActive,
}

impl ActivityLevel {
    /// Every level, from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::SuperActive,
    ];

    /// Canonical code (e.g. `MODERATELY_ACTIVE`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "SEDENTARY",
            Self::LightlyActive => "LIGHTLY_ACTIVE",
            Self::ModeratelyActive => "MODERATELY_ACTIVE",
            Self::VeryActive => "VERY_ACTIVE",
            Self::SuperActive => "SUPER_ACTIVE",
        }
    }

    /// Abbreviated code (e.g. `MA`)
    #[must_use]
    pub const fn short_code(&self) -> &'static str {
        match self {
            Self::Sedentary => "S",
            Self::LightlyActive => "LA",
            Self::ModeratelyActive => "MA",
            Self::VeryActive => "VA",
            Self::SuperActive => "SA",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_code(s);
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == code || level.short_code() == code)
            .ok_or_else(|| AppError::invalid_activity_level(s))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the desired weight change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightGoal {
    /// Keep current weight
    Maintain,
    /// Lose weight at the requested weekly rate
    Lose,
    /// Gain weight at the requested weekly rate
    Gain,
}

impl WeightGoal {
    /// Canonical code (`MAINTAIN` / `LOSE` / `GAIN`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintain => "MAINTAIN",
            Self::Lose => "LOSE",
            Self::Gain => "GAIN",
        }
    }

    /// Whether the goal consults the weekly rate tables
    #[must_use]
    pub const fn uses_weekly_rate(&self) -> bool {
        matches!(self, Self::Lose | Self::Gain)
    }
}

impl FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "MAINTAIN" => Ok(Self::Maintain),
            "LOSE" => Ok(Self::Lose),
            "GAIN" => Ok(Self::Gain),
            _ => Err(AppError::invalid_weight_goal(s)),
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
