// ABOUTME: Academy analytics engine - attendance, exposure, wellness, load and pathway metrics
// ABOUTME: Pure synchronous query layer over read-only dataset snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

#![deny(unsafe_code)]

//! # Academy Intelligence
//!
//! Derives analytics from raw academy records: attendance rates, engagement
//! streaks, match exposure, wellness and training-load summaries, cohort KPIs,
//! feedback queues and simple forecasts.
//!
//! Every query is a pure function of `(Dataset, filter, as_of)`. There is no
//! caching, no shared mutable state and no I/O. Empty inputs yield neutral
//! results with descriptive labels; the only error raised is
//! `ResourceNotFound` when a required root entity (a player) is missing.
//!
//! ## Data flow
//!
//! records → [`time_window`] / [`grouping`] → [`attendance`], [`streak`],
//! [`exposure`], [`wellness`], [`training_load`] → [`player_analytics`] →
//! [`cohort`] and [`feedback_queue`] → serializable output structures.

/// Engine configuration (thresholds, windows, multipliers)
pub mod config;

/// Scoping filters shared by cohort views
pub mod filter;

/// Inclusive date-range membership
pub mod time_window;

/// Group-by-key and group-by-period primitives
pub mod grouping;

/// Safe percentage and rounding helpers
pub mod rates;

/// Attendance rate calculator
pub mod attendance;

/// Longest consecutive attendance run
pub mod streak;

/// Match exposure calculator
pub mod exposure;

/// Wellness summarizer
pub mod wellness;

/// Per-player training load from wellness exertion
pub mod training_load;

/// Player-level analytics snapshot
pub mod player_analytics;

/// Admin and coach cohort aggregators
pub mod cohort;

/// Rule engine producing the coach feedback queue
pub mod feedback_queue;

/// Placeholder cohort-size projection
pub mod forecast;

/// Engine facade binding a dataset, configuration and clock
pub mod engine;

pub use attendance::{AttendanceCalculator, AttendanceLabel, AttendanceSummary};
pub use cohort::{
    AdminAnalytics, AdminDashboard, AdminKpiSummary, AttendanceByCentre, AttendancePoint,
    CoachAnalytics, CoachDashboard, ParticipationBucket, PipelineBucket, SessionLoadPoint,
};
pub use config::{AnalyticsConfig, ConfigError};
pub use engine::AnalyticsEngine;
pub use exposure::{ExposureCalculator, MatchExposure};
pub use feedback_queue::{FeedbackQueue, FeedbackQueueEntry, QueueRule, RuleContext};
pub use filter::AnalyticsFilter;
pub use forecast::{Forecast, ForecastProjector};
pub use grouping::{group_by, group_by_period, week_start, PeriodGranularity};
pub use player_analytics::{
    PathwayProgress, PlayerAnalytics, PlayerAnalyzer, PromotionCriterion, PromotionReadiness,
    ReadinessLabel, RecentMatch,
};
pub use streak::{StreakDetector, StreakSummary};
pub use time_window::{in_range, in_range_raw, DateRange};
pub use training_load::{LoadPoint, LoadStatus, TrainingLoadCalculator, TrainingLoadSummary};
pub use wellness::{DominantEnergy, WellnessSummarizer, WellnessSummary};
