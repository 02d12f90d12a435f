// ABOUTME: Coach cohort view - roster linkage, delivery counts and the feedback queue
// ABOUTME: Roster is every player with attendance at one of the coach's sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::collections::HashSet;

use academy_core::models::{Dataset, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mean_attendance_rate;
use crate::config::AnalyticsConfig;
use crate::feedback_queue::{FeedbackQueue, FeedbackQueueEntry};
use crate::filter::AnalyticsFilter;
use crate::time_window::in_range;

/// Summary of one coach's cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachDashboard {
    /// Coach id
    pub coach_id: String,
    /// Players linked to the coach, any status
    pub roster_size: usize,
    /// Coach sessions in range and scope
    pub sessions_delivered: usize,
    /// Unweighted mean of active roster players' attendance rates
    pub average_attendance_rate: u32,
    /// Published feedback written by the coach in range
    pub published_feedback: usize,
    /// Players needing attention, most urgent first
    pub queue: Vec<FeedbackQueueEntry>,
}

/// Coach aggregator
pub struct CoachAnalytics;

impl CoachAnalytics {
    /// Players with any attendance record at a session run by `coach_id`
    ///
    /// Full history, snapshot order, any status.
    #[must_use]
    pub fn roster<'a>(dataset: &'a Dataset, coach_id: &str) -> Vec<&'a Player> {
        let coach_sessions: HashSet<&str> = dataset
            .sessions
            .iter()
            .filter(|session| session.coach_id == coach_id)
            .map(|session| session.id.as_str())
            .collect();
        let linked: HashSet<&str> = dataset
            .attendance
            .iter()
            .filter(|record| coach_sessions.contains(record.session_id.as_str()))
            .map(|record| record.player_id.as_str())
            .collect();

        dataset
            .players
            .iter()
            .filter(|player| linked.contains(player.id.as_str()))
            .collect()
    }

    /// Dashboard for `coach_id`
    ///
    /// The filter's coach field is ignored in favour of `coach_id`.
    #[must_use]
    pub fn dashboard(
        dataset: &Dataset,
        coach_id: &str,
        filter: &AnalyticsFilter,
        config: &AnalyticsConfig,
        as_of: DateTime<Utc>,
    ) -> CoachDashboard {
        let roster = Self::roster(dataset, coach_id);
        if roster.is_empty() {
            debug!(coach_id, "coach has no linked players");
        }

        let scope = filter.clone().with_coach(coach_id);
        let sessions_delivered = dataset
            .sessions
            .iter()
            .filter(|session| scope.matches_session(session))
            .count();

        let average_attendance_rate = mean_attendance_rate(
            dataset,
            roster.iter().copied().filter(|player| player.is_active()),
            filter.range(),
            &config.attendance,
        );

        let published_feedback = dataset
            .feedback
            .iter()
            .filter(|feedback| feedback.coach_id == coach_id && feedback.is_published())
            .filter(|feedback| in_range(feedback.created_at, filter.range()))
            .count();

        CoachDashboard {
            coach_id: coach_id.to_owned(),
            roster_size: roster.len(),
            sessions_delivered,
            average_attendance_rate,
            published_feedback,
            queue: FeedbackQueue::build(dataset, &roster, config, as_of),
        }
    }
}
