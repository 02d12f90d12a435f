// ABOUTME: Periodic coach feedback written for a player
// ABOUTME: Only published feedback counts towards feedback staleness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a feedback document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    /// Work in progress, not visible to the player
    Draft,
    /// Shared with the player
    Published,
}

/// Calendar month a feedback document covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackPeriod {
    /// Month, 1-12
    pub month: u32,
    /// Year
    pub year: i32,
}

/// Coach feedback for one player and period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Unique identifier
    pub id: String,
    /// Player the feedback is about
    pub player_id: String,
    /// Author
    pub coach_id: String,
    /// Period covered
    pub period: FeedbackPeriod,
    /// Strengths, in display order
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Areas to improve, in display order
    #[serde(default)]
    pub improvements: Vec<String>,
    /// Single focus goal for the next period
    #[serde(default)]
    pub focus_goal: String,
    /// Publication state
    pub status: FeedbackStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last edit time
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Whether the feedback has been published
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == FeedbackStatus::Published
    }
}
