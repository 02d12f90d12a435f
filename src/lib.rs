// ABOUTME: Main library entry point for the academy analytics engine
// ABOUTME: Re-exports the core models and engine plus config, logging and snapshot loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

#![deny(unsafe_code)]

//! # Academy Analytics
//!
//! Analytics aggregation for a sports academy. Given a snapshot of raw
//! operational records (sessions, attendance, matches, selections, wellness
//! self-reports, coach feedback) the engine derives attendance rates,
//! engagement streaks, match exposure, training load, cohort KPIs, pipeline
//! distributions, a coach feedback queue and simple forecasts.
//!
//! ## Architecture
//!
//! - **`academy-core`**: entity models, the [`Dataset`](models::Dataset)
//!   snapshot and the unified error type
//! - **`academy-intelligence`**: the pure, synchronous engine
//! - **this crate**: environment configuration, logging, snapshot loading and
//!   the `academy-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use academy_analytics::snapshot::load_snapshot;
//! use academy_analytics::{AnalyticsEngine, AnalyticsFilter};
//! use std::path::Path;
//!
//! # fn main() -> academy_analytics::errors::AppResult<()> {
//! let dataset = load_snapshot(Path::new("snapshot.json"))?;
//! let engine = AnalyticsEngine::new(&dataset);
//! let summary = engine.admin_summary(&AnalyticsFilter::new());
//! println!("{} active players", summary.active_players);
//! # Ok(())
//! # }
//! ```

/// Environment-driven engine configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// JSON dataset snapshot loading
pub mod snapshot;

pub use academy_core::{constants, errors, models};
pub use academy_intelligence::{
    attendance, cohort, engine, exposure, feedback_queue, filter, forecast, grouping,
    player_analytics, rates, streak, time_window, training_load, wellness,
};

pub use academy_intelligence::{
    AdminDashboard, AdminKpiSummary, AnalyticsConfig, AnalyticsEngine, AnalyticsFilter,
    AttendanceSummary, CoachDashboard, ConfigError, DateRange, FeedbackQueueEntry, Forecast,
    MatchExposure, PeriodGranularity, PlayerAnalytics, StreakSummary, TrainingLoadSummary,
    WellnessSummary,
};
