// ABOUTME: Cohort aggregators fanning player metrics out across centres, squads and rosters
// ABOUTME: Admin KPIs, time series and distributions plus the coach dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Cohort Aggregators
//!
//! Several admin views reproduce approximate reporting formulas on purpose:
//!
//! - attendance by centre multiplies sessions by distinct attendees instead of
//!   summing per-player denominators,
//! - the weekly load series blends each week with the previous non-zero value
//!   as a two-point mean rather than a cumulative mean, and
//! - the average attendance rate is an unweighted mean of per-player rates.
//!
//! Changing any of these changes reported numbers.

mod admin;
mod coach;

pub use admin::{
    AdminAnalytics, AdminDashboard, AdminKpiSummary, AttendanceByCentre, AttendancePoint,
    ParticipationBucket, PipelineBucket, SessionLoadPoint,
};
pub use coach::{CoachAnalytics, CoachDashboard};

use academy_core::models::{Dataset, Player};

use crate::attendance::AttendanceCalculator;
use crate::config::AttendanceConfig;
use crate::time_window::DateRange;

/// Unweighted mean of each player's rate, rounded; 0 for an empty cohort
///
/// Players with nothing scheduled contribute 0.
fn mean_attendance_rate<'a>(
    dataset: &Dataset,
    players: impl IntoIterator<Item = &'a Player>,
    range: Option<&DateRange>,
    config: &AttendanceConfig,
) -> u32 {
    let mut total = 0_u64;
    let mut count = 0_u64;
    for player in players {
        total += u64::from(
            AttendanceCalculator::attendance_rate(dataset, &player.id, range, config).rate,
        );
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64).round() as u32
}
