// ABOUTME: Training session and attendance record models
// ABOUTME: Sessions define the attendance denominator, records the numerator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of scheduled session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    /// Regular training session
    Training,
    /// Any other scheduled unit (assessment, recovery, trial day)
    #[serde(other)]
    Other,
}

/// One schedulable unit against which attendance is measured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier
    pub id: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Centre hosting the session
    pub centre_id: String,
    /// Squad the session was scheduled for
    pub squad_id: String,
    /// Coach running the session
    pub coach_id: String,
    /// Session kind
    #[serde(rename = "type")]
    pub session_type: SessionType,
}

/// Whether a player turned up to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Player attended
    Present,
    /// Player was marked absent
    Absent,
}

/// Attendance of one player at one session
///
/// At most one record exists per `(session_id, player_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique identifier
    pub id: String,
    /// Session attended
    pub session_id: String,
    /// Player the record is for
    pub player_id: String,
    /// Attendance outcome
    pub status: AttendanceStatus,
    /// When the record was taken
    pub recorded_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Whether the player was present
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}
