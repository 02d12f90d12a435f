// ABOUTME: Player model with centre, squad and pathway references
// ABOUTME: Tracks membership status and join/exit dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership status of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    /// Currently training with the academy
    Active,
    /// Left the academy
    Inactive,
}

/// An academy player
///
/// `exited_at` is always `None` while `status` is [`PlayerStatus::Active`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Home centre
    pub centre_id: String,
    /// Current squad
    pub squad_id: String,
    /// When the player joined the academy
    pub joined_at: DateTime<Utc>,
    /// When the player left the academy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exited_at: Option<DateTime<Utc>>,
    /// Membership status
    pub status: PlayerStatus,
    /// Current pathway level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathway_level_id: Option<String>,
}

impl Player {
    /// Whether the player is currently active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }
}
