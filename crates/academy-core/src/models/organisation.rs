// ABOUTME: Academy structure models - centres, squads and pathway levels
// ABOUTME: PathwayLevel carries ordinal order and promotion criteria for the next tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use serde::{Deserialize, Serialize};

/// A physical training centre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Centre {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Abbreviated name for compact views
    pub short_name: String,
    /// City the centre is located in
    pub city: String,
}

/// A training squad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Coarse competitive tier key
    pub level_key: String,
}

/// Requirements a player must meet before moving up to a level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionCriteria {
    /// Minimum attendance rate (percent)
    pub min_attendance_pct: u32,
    /// Minimum months since the player joined the academy
    pub min_tenure_months: u32,
    /// Minimum number of matches the player has been selected for
    pub min_matches: u32,
    /// Whether a coach recommendation is required on top of the numbers
    pub requires_coach_recommendation: bool,
}

/// Ordinal competitive tier in the player pathway
///
/// `order` is strictly increasing across levels; the next level of a player is
/// the level whose `order` is exactly one greater than their current level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayLevel {
    /// Unique identifier
    pub id: String,
    /// Display name, used as the key of pipeline distributions
    pub name: String,
    /// Ordinal position in the pathway
    pub order: u32,
    /// Criteria to be promoted into this level
    #[serde(default)]
    pub criteria: PromotionCriteria,
}
