// ABOUTME: Match fixtures and per-player selection outcomes
// ABOUTME: Selections drive match exposure and participation distributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A competitive fixture played by a squad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Unique identifier
    pub id: String,
    /// Kick-off date
    pub date: DateTime<Utc>,
    /// Competition name
    pub competition: String,
    /// Squad that played
    pub squad_id: String,
    /// Centre the squad belongs to
    pub centre_id: String,
}

/// Whether a player was picked for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    /// Player was in the matchday squad
    Selected,
    /// Player was left out
    NotSelected,
}

/// Why a player was not selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionReason {
    /// Squad rotation
    Rotation,
    /// Tactical decision
    Tactical,
    /// Disciplinary decision
    Discipline,
    /// Anything else
    Other,
}

/// Selection outcome of one player for one match
///
/// At most one selection exists per `(match_id, player_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSelection {
    /// Unique identifier
    pub id: String,
    /// Match the decision was made for
    pub match_id: String,
    /// Player the decision concerns
    pub player_id: String,
    /// Selection outcome
    pub status: SelectionStatus,
    /// Reason category, normally present when not selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SelectionReason>,
}

impl MatchSelection {
    /// Whether the player was selected
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.status == SelectionStatus::Selected
    }
}
