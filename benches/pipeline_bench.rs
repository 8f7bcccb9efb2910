// ABOUTME: Criterion benchmarks for the caloric pipeline
// ABOUTME: Measures individual stages, full evaluation, and raw input coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the caloric pipeline.
//!
//! Measures the BMR and goal stages on their own, full evaluation of a
//! validated profile, and the end-to-end path from raw string input.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use caloric_calculator::calculator::{evaluate, stages, CaloricCalculator, Profile, RawProfile};
use caloric_calculator::config::CalculatorConfig;
use caloric_calculator::models::{ActivityLevel, Sex, WeightGoal};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Number of profiles evaluated per batch iteration
const BATCH_SIZE: usize = 1_000;

fn raw_profile(index: usize) -> RawProfile {
    let levels = ActivityLevel::ALL;
    RawProfile {
        weight_kg: 45.0 + (index % 90) as f64,
        height_cm: 150.0 + (index % 50) as f64,
        age: 18 + (index % 60) as u32,
        sex: if index % 2 == 0 { "M" } else { "F" }.to_owned(),
        activity_level: levels[index % levels.len()].short_code().to_owned(),
        weight_goal: "LOSE".to_owned(),
        weekly_rate_kg: 0.5,
    }
}

fn bench_stages(c: &mut Criterion) {
    let config = CalculatorConfig::default();
    let mut group = c.benchmark_group("stages");

    group.bench_function("mifflin_st_jeor", |b| {
        b.iter(|| {
            stages::calculate_mifflin_st_jeor(
                black_box(70.0),
                black_box(175.0),
                black_box(30),
                Sex::Male,
                &config.bmr,
            )
        });
    });

    group.bench_function("daily_caloric_needs", |b| {
        b.iter(|| {
            stages::calculate_daily_caloric_needs(
                black_box(2556),
                WeightGoal::Lose,
                black_box(0.75),
                Sex::Female,
                &config.goal_adjustment,
                &config.safety_floor,
            )
        });
    });

    group.finish();
}

fn bench_full_evaluation(c: &mut Criterion) {
    let config = CalculatorConfig::default();
    let mut group = c.benchmark_group("evaluation");

    for goal in ["MAINTAIN", "LOSE", "GAIN"] {
        let raw = RawProfile {
            weight_goal: goal.to_owned(),
            ..raw_profile(7)
        };
        let Ok(params) = raw.into_params() else {
            continue;
        };
        let Ok(profile) = Profile::with_limits(params, &config.profile_limits) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("evaluate", goal), &profile, |b, profile| {
            b.iter(|| evaluate(black_box(profile), &config));
        });
    }

    group.finish();
}

fn bench_raw_batch(c: &mut Criterion) {
    let config = CalculatorConfig::default();
    let profiles: Vec<RawProfile> = (0..BATCH_SIZE).map(raw_profile).collect();

    let mut group = c.benchmark_group("raw_batch");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));
    group.bench_function("from_raw", |b| {
        b.iter(|| {
            profiles
                .iter()
                .cloned()
                .filter_map(|raw| CaloricCalculator::from_raw_with_config(raw, &config).ok())
                .map(|calc| calc.daily_caloric_needs())
                .sum::<i32>()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_stages, bench_full_evaluation, bench_raw_batch);
criterion_main!(benches);
