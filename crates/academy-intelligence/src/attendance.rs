// ABOUTME: Attendance rate calculator with label banding and a no-data short circuit
// ABOUTME: Denominator is every session in range, independent of the player
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Attendance Rate Calculator
//!
//! The denominator is the total number of sessions in range, not the sessions
//! where attendance was recorded for the player. A player is therefore
//! penalized for every scheduled session they did not attend, and a session
//! with no attendance rows at all still counts for everyone.

use std::collections::HashSet;
use std::fmt;

use academy_core::models::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AttendanceConfig;
use crate::rates::percentage;
use crate::time_window::{in_range, DateRange};

/// Coarse band of an attendance rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceLabel {
    /// At or above the strong threshold
    #[serde(rename = "Strong")]
    Strong,
    /// At or above the moderate threshold
    #[serde(rename = "Moderate")]
    Moderate,
    /// Below the moderate threshold
    #[serde(rename = "Needs Work")]
    NeedsWork,
    /// No sessions in range
    #[serde(rename = "No Data")]
    NoData,
}

impl AttendanceLabel {
    /// Display text of the label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::NeedsWork => "Needs Work",
            Self::NoData => "No Data",
        }
    }
}

impl fmt::Display for AttendanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance rate of one player over a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Rate in percent, 0-100
    pub rate: u32,
    /// Band of the rate
    pub label: AttendanceLabel,
    /// Sessions in range the player was present for
    pub attended: usize,
    /// Sessions in range
    pub scheduled: usize,
}

impl AttendanceSummary {
    /// Result for a range with no sessions
    #[must_use]
    pub const fn no_data() -> Self {
        Self {
            rate: 0,
            label: AttendanceLabel::NoData,
            attended: 0,
            scheduled: 0,
        }
    }
}

/// Attendance rate calculator
pub struct AttendanceCalculator;

impl AttendanceCalculator {
    /// Attendance rate of `player_id` over the sessions in `range`
    ///
    /// Returns [`AttendanceSummary::no_data`] when no session falls in range.
    #[must_use]
    pub fn attendance_rate(
        dataset: &Dataset,
        player_id: &str,
        range: Option<&DateRange>,
        config: &AttendanceConfig,
    ) -> AttendanceSummary {
        let sessions_in_range: HashSet<&str> = dataset
            .sessions
            .iter()
            .filter(|session| in_range(session.date, range))
            .map(|session| session.id.as_str())
            .collect();

        if sessions_in_range.is_empty() {
            debug!(player_id, "no sessions in range, attendance has no data");
            return AttendanceSummary::no_data();
        }

        let attended = dataset
            .attendance_for(player_id)
            .filter(|record| record.is_present())
            .filter(|record| sessions_in_range.contains(record.session_id.as_str()))
            .count();
        let scheduled = sessions_in_range.len();
        let rate = percentage(attended, scheduled);

        AttendanceSummary {
            rate,
            label: Self::band(rate, config),
            attended,
            scheduled,
        }
    }

    /// Band a rate computed over a non-empty denominator
    #[must_use]
    pub const fn band(rate: u32, config: &AttendanceConfig) -> AttendanceLabel {
        if rate >= config.strong_threshold {
            AttendanceLabel::Strong
        } else if rate >= config.moderate_threshold {
            AttendanceLabel::Moderate
        } else {
            AttendanceLabel::NeedsWork
        }
    }

    /// Number of sessions in `range` the player was present for
    #[must_use]
    pub fn sessions_attended(dataset: &Dataset, player_id: &str, range: &DateRange) -> usize {
        dataset
            .attendance_for(player_id)
            .filter(|record| record.is_present())
            .filter(|record| {
                dataset
                    .session(&record.session_id)
                    .is_some_and(|session| range.contains(session.date))
            })
            .count()
    }
}
