// ABOUTME: Streak detector for consecutive attended sessions over full history
// ABOUTME: Missing attendance records break a streak exactly like an absence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::collections::HashMap;

use academy_core::models::{AttendanceStatus, Dataset, Session};
use serde::{Deserialize, Serialize};

/// Consecutive-attendance runs of one player, counted in sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Longest run of consecutive sessions attended
    pub longest_streak: u32,
    /// Run still open at the most recent session
    pub current_streak: u32,
}

/// Streak detector
pub struct StreakDetector;

impl StreakDetector {
    /// Walk every session chronologically and track runs of `PRESENT`
    ///
    /// `ABSENT` and sessions without a record for the player both reset the
    /// running counter. Sessions sharing a timestamp keep snapshot order.
    #[must_use]
    pub fn summarize(dataset: &Dataset, player_id: &str) -> StreakSummary {
        let statuses: HashMap<&str, AttendanceStatus> = dataset
            .attendance_for(player_id)
            .map(|record| (record.session_id.as_str(), record.status))
            .collect();

        let mut sessions: Vec<&Session> = dataset.sessions.iter().collect();
        sessions.sort_by_key(|session| session.date);

        let mut current = 0_u32;
        let mut longest = 0_u32;
        for session in sessions {
            if statuses.get(session.id.as_str()) == Some(&AttendanceStatus::Present) {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }

        StreakSummary {
            longest_streak: longest,
            current_streak: current,
        }
    }

    /// Longest run of consecutive sessions attended
    #[must_use]
    pub fn longest_streak(dataset: &Dataset, player_id: &str) -> u32 {
        Self::summarize(dataset, player_id).longest_streak
    }
}
