// ABOUTME: Analytics engine facade binding a dataset snapshot, configuration and clock
// ABOUTME: Single entry point for player, admin, coach, queue and forecast queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Analytics Engine
//!
//! [`AnalyticsEngine`] borrows a read-only [`Dataset`] and carries the
//! configuration plus an `as_of` instant. Every now-relative window (recent
//! sessions, feedback staleness, high-load signals, acute/chronic load) trails
//! `as_of`, so results are deterministic for a fixed engine value.
//!
//! ```rust,no_run
//! use academy_core::models::Dataset;
//! use academy_intelligence::{AnalyticsEngine, AnalyticsFilter};
//!
//! let dataset = Dataset::default();
//! let engine = AnalyticsEngine::new(&dataset);
//! let summary = engine.admin_summary(&AnalyticsFilter::new());
//! assert_eq!(summary.active_players, 0);
//! ```

use academy_core::errors::AppResult;
use academy_core::models::Dataset;
use chrono::{DateTime, Utc};

use crate::attendance::{AttendanceCalculator, AttendanceSummary};
use crate::cohort::{
    AdminAnalytics, AdminDashboard, AdminKpiSummary, AttendanceByCentre, AttendancePoint,
    CoachAnalytics, CoachDashboard, ParticipationBucket, PipelineBucket, SessionLoadPoint,
};
use crate::config::AnalyticsConfig;
use crate::exposure::{ExposureCalculator, MatchExposure};
use crate::feedback_queue::{FeedbackQueue, FeedbackQueueEntry};
use crate::filter::AnalyticsFilter;
use crate::forecast::{Forecast, ForecastProjector};
use crate::grouping::PeriodGranularity;
use crate::player_analytics::{PlayerAnalytics, PlayerAnalyzer};
use crate::streak::{StreakDetector, StreakSummary};
use crate::time_window::DateRange;
use crate::training_load::{TrainingLoadCalculator, TrainingLoadSummary};
use crate::wellness::{WellnessSummarizer, WellnessSummary};

/// Query facade over one dataset snapshot
#[derive(Debug, Clone)]
pub struct AnalyticsEngine<'a> {
    dataset: &'a Dataset,
    config: AnalyticsConfig,
    as_of: DateTime<Utc>,
}

impl<'a> AnalyticsEngine<'a> {
    /// Engine with default configuration, clocked at the current time
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            config: AnalyticsConfig::default(),
            as_of: Utc::now(),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    /// Pin the reference instant
    #[must_use]
    pub fn at(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = as_of;
        self
    }

    /// The dataset being queried
    #[must_use]
    pub const fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Reference instant
    #[must_use]
    pub const fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Attendance rate and label of a player
    #[must_use]
    pub fn attendance_rate(&self, player_id: &str, range: Option<&DateRange>) -> AttendanceSummary {
        AttendanceCalculator::attendance_rate(self.dataset, player_id, range, &self.config.attendance)
    }

    /// Longest and current attendance streak of a player
    #[must_use]
    pub fn streak(&self, player_id: &str) -> StreakSummary {
        StreakDetector::summarize(self.dataset, player_id)
    }

    /// Longest attendance streak of a player
    #[must_use]
    pub fn longest_streak(&self, player_id: &str) -> u32 {
        StreakDetector::longest_streak(self.dataset, player_id)
    }

    /// Match exposure of a player
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown player
    pub fn player_match_exposure(
        &self,
        player_id: &str,
        range: Option<&DateRange>,
    ) -> AppResult<MatchExposure> {
        ExposureCalculator::match_exposure(self.dataset, player_id, range)
    }

    /// Wellness summary of a player
    #[must_use]
    pub fn wellness_summary(&self, player_id: &str, range: Option<&DateRange>) -> WellnessSummary {
        WellnessSummarizer::summarize(self.dataset, player_id, range)
    }

    /// Training load of a player
    #[must_use]
    pub fn training_load(
        &self,
        player_id: &str,
        range: Option<&DateRange>,
    ) -> TrainingLoadSummary {
        TrainingLoadCalculator::from_config(&self.config.load).summarize(
            self.dataset,
            player_id,
            range,
            self.as_of,
        )
    }

    /// Full analytics snapshot of a player
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown player
    pub fn player_analytics(
        &self,
        player_id: &str,
        range: Option<&DateRange>,
    ) -> AppResult<PlayerAnalytics> {
        PlayerAnalyzer::analyze(self.dataset, player_id, range, &self.config, self.as_of)
    }

    /// Admin headline KPIs
    #[must_use]
    pub fn admin_summary(&self, filter: &AnalyticsFilter) -> AdminKpiSummary {
        AdminAnalytics::kpi_summary(self.dataset, filter, &self.config)
    }

    /// Per-centre attendance
    #[must_use]
    pub fn attendance_by_centre(&self, filter: &AnalyticsFilter) -> Vec<AttendanceByCentre> {
        AdminAnalytics::attendance_by_centre(self.dataset, filter)
    }

    /// Attendance series by week or month
    #[must_use]
    pub fn attendance_over_time(
        &self,
        filter: &AnalyticsFilter,
        granularity: PeriodGranularity,
    ) -> Vec<AttendancePoint> {
        AdminAnalytics::attendance_over_time(self.dataset, filter, granularity)
    }

    /// Active players per pathway level
    #[must_use]
    pub fn pipeline_distribution(&self, filter: &AnalyticsFilter) -> Vec<PipelineBucket> {
        AdminAnalytics::pipeline_distribution(self.dataset, filter)
    }

    /// Weekly sessions and blended load
    #[must_use]
    pub fn sessions_and_load(&self, filter: &AnalyticsFilter) -> Vec<SessionLoadPoint> {
        AdminAnalytics::sessions_and_load(self.dataset, filter)
    }

    /// Match participation distribution
    #[must_use]
    pub fn match_participation(&self, filter: &AnalyticsFilter) -> Vec<ParticipationBucket> {
        AdminAnalytics::match_participation(self.dataset, filter)
    }

    /// Every admin view
    #[must_use]
    pub fn admin_dashboard(
        &self,
        filter: &AnalyticsFilter,
        granularity: PeriodGranularity,
    ) -> AdminDashboard {
        AdminAnalytics::dashboard(self.dataset, filter, granularity, &self.config)
    }

    /// Coach dashboard including the feedback queue
    #[must_use]
    pub fn coach_dashboard(&self, coach_id: &str, filter: &AnalyticsFilter) -> CoachDashboard {
        CoachAnalytics::dashboard(self.dataset, coach_id, filter, &self.config, self.as_of)
    }

    /// Feedback queue of a coach's roster
    #[must_use]
    pub fn feedback_queue(&self, coach_id: &str) -> Vec<FeedbackQueueEntry> {
        let roster = CoachAnalytics::roster(self.dataset, coach_id);
        FeedbackQueue::build(self.dataset, &roster, &self.config, self.as_of)
    }

    /// Project a cohort size
    #[must_use]
    pub fn forecast(&self, current: u32) -> Forecast {
        ForecastProjector::project(current, &self.config.forecast)
    }
}
