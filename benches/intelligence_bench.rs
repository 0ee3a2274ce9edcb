// ABOUTME: Criterion benchmarks for the load aggregator and session planner
// ABOUTME: Measures summary computation and planning over growing record and history sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the training engine.
//!
//! Measures load summaries over long record histories, trend classification,
//! session planning over large strength histories, and the full service
//! overview over the in-memory store.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;
use trainwise::intelligence::{
    IntelligenceConfig, LoadAggregator, LoadTrendConfig, SessionPlanner, SessionPlannerConfig,
};
use trainwise::models::{
    ExerciseLibrary, LoadTrend, SessionHistoryEntry, TrainingRecord, WeekType,
};
use trainwise::providers::InMemoryTrainingStore;
use trainwise::services::TrainingService;

const DATASET_SIZES: [usize; 3] = [10, 365, 3_650];

const ROTATION: [&str; 6] = [
    "Back Squat",
    "Romanian Deadlift",
    "Bench Press",
    "Overhead Press",
    "Barbell Row",
    "Pull-up",
];

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default()
}

fn day(offset: usize) -> NaiveDate {
    as_of()
        .checked_sub_days(Days::new(offset as u64))
        .unwrap_or_default()
}

/// One record per day going back `count` days
#[allow(clippy::cast_precision_loss)]
fn generate_records(count: usize) -> Vec<TrainingRecord> {
    (0..count)
        .map(|index| {
            let distance = 3.0 + (index % 7) as f64;
            let duration = 1200 + ((index * 137) % 2400) as u64;
            let load = 40.0 + ((index * 31) % 90) as f64;
            TrainingRecord::new(day(index), distance, duration, load)
        })
        .collect()
}

/// One history entry per day rotating through the default exercises
#[allow(clippy::cast_precision_loss)]
fn generate_history(count: usize) -> Vec<SessionHistoryEntry> {
    (0..count)
        .map(|index| {
            let exercise = ROTATION[index % ROTATION.len()];
            let load = 40.0 + (index % 20) as f64 * 2.5;
            let entry = SessionHistoryEntry::new(day(index), exercise).sets(3, 10, load);
            if index % 3 == 0 {
                entry.week_type(if index % 2 == 0 {
                    WeekType::Kid
                } else {
                    WeekType::NonKid
                })
            } else {
                entry
            }
        })
        .collect()
}

fn bench_load_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_summary");
    let aggregator = LoadAggregator::with_config(LoadTrendConfig::default());

    for count in DATASET_SIZES {
        let records = generate_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_load_summary", count),
            &records,
            |b, records| {
                b.iter(|| aggregator.compute_load_summary(black_box(records), black_box(as_of())));
            },
        );
    }

    group.finish();
}

fn bench_trend_classification(c: &mut Criterion) {
    let aggregator = LoadAggregator::with_config(LoadTrendConfig::default());

    c.bench_function("classify_trend", |b| {
        b.iter(|| {
            (
                aggregator.classify_trend(black_box(120.0), black_box(100.0)),
                aggregator.classify_trend(black_box(115.0), black_box(100.0)),
                aggregator.classify_trend(black_box(80.0), black_box(0.0)),
            )
        });
    });
}

fn bench_session_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_planning");
    let config = SessionPlannerConfig::default();
    let library = ExerciseLibrary::with_defaults();
    let planner = SessionPlanner::new(&config, &library);

    for count in DATASET_SIZES {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("suggest_session", count),
            &history,
            |b, history| {
                b.iter(|| {
                    planner.suggest_session(
                        black_box(history),
                        black_box(None),
                        black_box(Some(LoadTrend::Stable)),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_training_overview(c: &mut Criterion) {
    let Ok(runtime) = Runtime::new() else {
        return;
    };
    let store = InMemoryTrainingStore::with_default_library();
    runtime.block_on(async {
        store.extend_records(generate_records(365)).await;
        for entry in generate_history(90) {
            store.add_history_entry(entry).await;
        }
    });
    let service = TrainingService::new(store, IntelligenceConfig::default());

    c.bench_function("training_overview", |b| {
        b.iter(|| runtime.block_on(service.training_overview(black_box(as_of()), None)));
    });
}

criterion_group!(
    benches,
    bench_load_summary,
    bench_trend_classification,
    bench_session_planning,
    bench_training_overview,
);
criterion_main!(benches);
