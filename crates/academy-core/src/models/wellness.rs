// ABOUTME: Self-reported wellness entries with exertion and energy
// ABOUTME: Feeds wellness summaries, training load and high-load alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported energy state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyLevel {
    /// Feeling drained
    Low,
    /// Normal
    Medium,
    /// Feeling fresh
    High,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// One wellness self-report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessEntry {
    /// Unique identifier
    pub id: String,
    /// Player reporting
    pub player_id: String,
    /// When the report was made
    pub date: DateTime<Utc>,
    /// Session the report relates to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Perceived exertion, 1 (easy) to 5 (maximal)
    pub exertion: u8,
    /// Perceived energy
    pub energy: EnergyLevel,
    /// Free-text note
    #[serde(default)]
    pub note: String,
}
