// ABOUTME: Criterion benchmarks for the analytics engine
// ABOUTME: Measures player snapshots, admin dashboards and coach feedback queues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Criterion benchmarks for the analytics engine.
//!
//! Each query is measured against a small and a medium academy so the cost of
//! the full-scan aggregations is visible as the snapshot grows.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use academy_analytics::{AnalyticsEngine, AnalyticsFilter, PeriodGranularity};
use common::fixtures::{coach_id, generate_academy, season_end, AcademySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [AcademySize; 2] = [AcademySize::Small, AcademySize::Medium];

fn bench_player_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("player_snapshot");

    for size in SIZES {
        let dataset = generate_academy(size);
        let engine = AnalyticsEngine::new(&dataset).at(season_end());
        group.throughput(Throughput::Elements(dataset.attendance.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("player_analytics", size.players()),
            &engine,
            |b, engine| b.iter(|| engine.player_analytics(black_box("player-1"), None)),
        );
        group.bench_with_input(
            BenchmarkId::new("longest_streak", size.players()),
            &engine,
            |b, engine| b.iter(|| engine.longest_streak(black_box("player-1"))),
        );
    }

    group.finish();
}

fn bench_admin_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("admin_dashboard");
    group.sample_size(20);

    for size in SIZES {
        let dataset = generate_academy(size);
        let engine = AnalyticsEngine::new(&dataset).at(season_end());
        let unfiltered = AnalyticsFilter::new();
        let by_centre = AnalyticsFilter::new().with_centre("centre-1");

        group.bench_with_input(
            BenchmarkId::new("dashboard_weekly", size.players()),
            &engine,
            |b, engine| b.iter(|| engine.admin_dashboard(black_box(&unfiltered), PeriodGranularity::Week)),
        );
        group.bench_with_input(
            BenchmarkId::new("kpi_summary_by_centre", size.players()),
            &engine,
            |b, engine| b.iter(|| engine.admin_summary(black_box(&by_centre))),
        );
    }

    group.finish();
}

fn bench_feedback_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_queue");

    for size in SIZES {
        let dataset = generate_academy(size);
        let engine = AnalyticsEngine::new(&dataset).at(season_end());
        let coach = coach_id(0);

        group.bench_with_input(
            BenchmarkId::new("coach_queue", size.players()),
            &engine,
            |b, engine| b.iter(|| engine.feedback_queue(black_box(&coach))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_player_snapshot,
    bench_admin_dashboard,
    bench_feedback_queue
);
criterion_main!(benches);
