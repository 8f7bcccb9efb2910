// ABOUTME: Core data models shared by the calculator and its front-ends
// ABOUTME: Re-exports the closed profile enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sex, activity level, and weight goal enumerations
pub mod profile;

pub use profile::{ActivityLevel, Sex, WeightGoal};
