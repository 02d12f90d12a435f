// ABOUTME: Integration tests for admin cohort views
// ABOUTME: KPI summary, centre attendance, attendance series, pipeline, load and participation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use academy_analytics::cohort::AdminAnalytics;
use academy_analytics::models::{Dataset, EnergyLevel, SelectionReason};
use academy_analytics::{AnalyticsEngine, AnalyticsFilter, DateRange, PeriodGranularity};
use chrono::{Duration, NaiveDate};
use common::{
    as_of, at, init_test_logging, DatasetBuilder, CENTRE_NORTH, CENTRE_SOUTH, COACH_A, COACH_B,
    SQUAD_U14, SQUAD_U16,
};

/// Four active players across two centres plus one who has left
fn academy_cohort() -> Dataset {
    DatasetBuilder::with_organisation()
        .player("p-1", "Amara Okafor")
        .player("p-2", "Ben Carter")
        .at_level(Some("lvl-perf"))
        .player_in("p-3", "Chloe Mensah", CENTRE_SOUTH, SQUAD_U16)
        .player("p-4", "Dan Hughes")
        .exited(at(2025, 1, 31))
        .player_in("p-5", "Erin Walsh", CENTRE_SOUTH, SQUAD_U16)
        .at_level(None)
        .session_full("s-1", at(2025, 2, 3), CENTRE_NORTH, SQUAD_U14, COACH_A)
        .session_full("s-2", at(2025, 2, 5), CENTRE_NORTH, SQUAD_U14, COACH_A)
        .session_full("s-3", at(2025, 2, 4), CENTRE_SOUTH, SQUAD_U16, COACH_B)
        .session_full("s-4", at(2025, 2, 11), CENTRE_SOUTH, SQUAD_U16, COACH_B)
        .session_full("s-5", at(2025, 3, 3), CENTRE_NORTH, SQUAD_U14, COACH_A)
        .present("s-1", "p-1")
        .present("s-1", "p-2")
        .absent("s-1", "p-4")
        .present("s-2", "p-1")
        .absent("s-2", "p-2")
        .present("s-3", "p-3")
        .present("s-3", "p-5")
        .absent("s-4", "p-3")
        .present("s-5", "p-1")
        .fixture("m-1", at(2025, 2, 8), SQUAD_U14)
        .fixture("m-2", at(2025, 2, 9), SQUAD_U16)
        .selected("m-1", "p-1")
        .not_selected("m-1", "p-2", SelectionReason::Rotation)
        .selected("m-2", "p-3")
        .wellness_for_session("p-1", at(2025, 2, 3), 4, EnergyLevel::High, Some("s-1"))
        .wellness_for_session("p-2", at(2025, 2, 3), 2, EnergyLevel::Medium, Some("s-1"))
        .wellness_for_session("p-3", at(2025, 2, 4), 5, EnergyLevel::Low, Some("s-3"))
        .wellness_for_session("p-1", at(2025, 3, 3), 2, EnergyLevel::High, Some("s-5"))
        .build()
}

fn february() -> DateRange {
    DateRange::from_dates(
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
    )
}

#[test]
fn test_kpi_summary_unfiltered() {
    init_test_logging();
    let dataset = academy_cohort();
    let summary = AnalyticsEngine::new(&dataset).admin_summary(&AnalyticsFilter::new());

    assert_eq!(summary.active_players, 4);
    assert_eq!(summary.sessions, 5);
    assert_eq!(summary.matches, 2);
    // per-player rates 60, 20, 20, 20
    assert_eq!(summary.average_attendance_rate, 30);
    // (4 + 2 + 5 + 2) / 4 = 3.25
    assert_eq!(summary.average_exertion, 3);
    assert_eq!(summary.forecast.current, 4);
}

#[test]
fn test_kpi_summary_by_centre() {
    let dataset = academy_cohort();
    let filter = AnalyticsFilter::new().with_centre(CENTRE_NORTH);
    let summary = AnalyticsEngine::new(&dataset).admin_summary(&filter);

    assert_eq!(summary.active_players, 2);
    assert_eq!(summary.sessions, 3);
    assert_eq!(summary.average_attendance_rate, 40);
    // North players only: (4 + 2 + 2) / 3
    assert_eq!(summary.average_exertion, 3);
}

#[test]
fn test_kpi_summary_by_range_counts_zero_rate_players() {
    let dataset = academy_cohort();
    let filter = AnalyticsFilter::new().with_date_range(february());
    let summary = AdminAnalytics::kpi_summary(
        &dataset,
        &filter,
        AnalyticsEngine::new(&dataset).config(),
    );

    assert_eq!(summary.sessions, 4);
    // 50, 25, 25, 25
    assert_eq!(summary.average_attendance_rate, 31);
}

#[test]
fn test_empty_dataset_yields_zero_kpis() {
    let dataset = Dataset::default();
    let summary = AnalyticsEngine::new(&dataset).admin_summary(&AnalyticsFilter::new());
    assert_eq!(summary.active_players, 0);
    assert_eq!(summary.average_attendance_rate, 0);
    assert_eq!(summary.average_exertion, 0);
    assert_eq!(summary.forecast.in_6_months, 0);
}

#[test]
fn test_attendance_by_centre_normalization() {
    let dataset = academy_cohort();
    let centres = AnalyticsEngine::new(&dataset).attendance_by_centre(&AnalyticsFilter::new());
    assert_eq!(centres.len(), 2);

    let north = &centres[0];
    assert_eq!(north.centre_name, "North Academy");
    assert_eq!(north.sessions, 3);
    assert_eq!(north.players, 3);
    assert_eq!(north.scheduled, 9);
    assert_eq!(north.attended, 4);
    assert_eq!(north.rate, 44);

    let south = &centres[1];
    assert_eq!((south.sessions, south.players, south.scheduled), (2, 2, 4));
    assert_eq!(south.attended, 2);
    assert_eq!(south.rate, 50);
}

#[test]
fn test_centre_without_sessions_reports_zero() {
    let dataset = academy_cohort();
    let filter = AnalyticsFilter::new().with_date_range(DateRange::from_dates(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    ));
    let centres = AdminAnalytics::attendance_by_centre(&dataset, &filter);
    let south = centres.iter().find(|c| c.centre_id == CENTRE_SOUTH).unwrap();
    assert_eq!(south.scheduled, 0);
    assert_eq!(south.rate, 0);
}

#[test]
fn test_attendance_over_time_weekly_counts_records() {
    let dataset = academy_cohort();
    let series = AnalyticsEngine::new(&dataset)
        .attendance_over_time(&AnalyticsFilter::new(), PeriodGranularity::Week);

    let periods: Vec<&str> = series.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(periods, vec!["2025-02-02", "2025-02-09", "2025-03-02"]);
    assert_eq!((series[0].scheduled, series[0].attended, series[0].rate), (7, 5, 71));
    assert_eq!((series[1].scheduled, series[1].attended, series[1].rate), (1, 0, 0));
    assert_eq!(series[2].rate, 100);
}

#[test]
fn test_attendance_over_time_monthly() {
    let dataset = academy_cohort();
    let series =
        AdminAnalytics::attendance_over_time(&dataset, &AnalyticsFilter::new(), PeriodGranularity::Month);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].period, "2025-02");
    assert_eq!((series[0].scheduled, series[0].attended), (8, 5));
    assert_eq!(series[0].rate, 63);
}

#[test]
fn test_pipeline_counts_active_players_per_level() {
    let dataset = academy_cohort();
    let pipeline = AnalyticsEngine::new(&dataset).pipeline_distribution(&AnalyticsFilter::new());

    let counts: Vec<(&str, usize)> = pipeline
        .iter()
        .map(|bucket| (bucket.level.as_str(), bucket.count))
        .collect();
    assert_eq!(
        counts,
        vec![("Development", 2), ("Performance", 1), ("Elite", 0)]
    );
}

#[test]
fn test_sessions_and_load_blends_with_previous_week() {
    let dataset = academy_cohort();
    let series = AnalyticsEngine::new(&dataset).sessions_and_load(&AnalyticsFilter::new());

    assert_eq!(series.len(), 3);
    assert_eq!(series[0].sessions, 3);
    // session means 3 and 5
    assert!((series[0].avg_load - 4.0).abs() < f64::EPSILON);
    // no linked entries, previous value carried
    assert_eq!(series[1].sessions, 1);
    assert!((series[1].avg_load - 4.0).abs() < f64::EPSILON);
    // (4 + 2) / 2
    assert!((series[2].avg_load - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_match_participation_buckets() {
    let dataset = academy_cohort();
    let buckets = AnalyticsEngine::new(&dataset).match_participation(&AnalyticsFilter::new());

    let counts: Vec<(&str, usize)> = buckets
        .iter()
        .map(|bucket| (bucket.bucket.as_str(), bucket.players))
        .collect();
    assert_eq!(counts, vec![("0", 2), ("1-5", 2), ("6-10", 0), ("10+", 0)]);
}

#[test]
fn test_participation_ignores_date_range() {
    let mut builder = DatasetBuilder::with_organisation()
        .player("p-ten", "Gabi Silva")
        .player("p-eleven", "Hana Ito");
    for index in 0..11 {
        let match_id = format!("m-{index}");
        builder = builder.fixture(&match_id, at(2024, 1, 6) + Duration::weeks(index), SQUAD_U14);
        if index < 10 {
            builder = builder.selected(&match_id, "p-ten");
        }
        builder = builder.selected(&match_id, "p-eleven");
    }
    let dataset = builder.build();

    let filter = AnalyticsFilter::new().with_date_range(february());
    let buckets = AdminAnalytics::match_participation(&dataset, &filter);
    assert_eq!(buckets[2].bucket, "6-10");
    assert_eq!(buckets[2].players, 1);
    assert_eq!(buckets[3].bucket, "10+");
    assert_eq!(buckets[3].players, 1);
}

#[test]
fn test_dashboard_bundles_every_view() {
    let dataset = academy_cohort();
    let dashboard = AnalyticsEngine::new(&dataset)
        .at(as_of())
        .admin_dashboard(&AnalyticsFilter::new(), PeriodGranularity::Month);

    assert_eq!(dashboard.summary.active_players, 4);
    assert_eq!(dashboard.attendance_by_centre.len(), 2);
    assert_eq!(dashboard.attendance_over_time.len(), 2);
    assert_eq!(dashboard.pipeline.len(), 3);
    assert_eq!(dashboard.sessions_and_load.len(), 3);
    assert_eq!(dashboard.match_participation.len(), 4);

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["summary"]["forecast"]["in3Months"], 4);
    assert_eq!(json["attendanceByCentre"][0]["centreId"], CENTRE_NORTH);
}
