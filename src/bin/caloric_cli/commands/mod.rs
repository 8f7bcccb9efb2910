// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for caloric-cli
// ABOUTME: Provides access to the calculate and tables commands

pub mod calculate;
pub mod tables;
