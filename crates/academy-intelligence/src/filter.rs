// ABOUTME: Query filter scoping analytics by date range, centre, squad, coach and player
// ABOUTME: Provides per-entity match predicates used by the cohort aggregators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use academy_core::models::{Match, Player, Session};
use serde::{Deserialize, Serialize};

use crate::time_window::{in_range, DateRange};

/// Filter object accepted by every cohort query
///
/// Unset fields do not constrain the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsFilter {
    /// Inclusive date range
    pub date_range: Option<DateRange>,
    /// Restrict to one centre
    pub centre_id: Option<String>,
    /// Restrict to one squad
    pub squad_id: Option<String>,
    /// Restrict sessions to one coach
    pub coach_id: Option<String>,
    /// Restrict to one player
    pub player_id: Option<String>,
}

impl AnalyticsFilter {
    /// Filter with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a date range
    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Restrict to a centre
    #[must_use]
    pub fn with_centre(mut self, centre_id: impl Into<String>) -> Self {
        self.centre_id = Some(centre_id.into());
        self
    }

    /// Restrict to a squad
    #[must_use]
    pub fn with_squad(mut self, squad_id: impl Into<String>) -> Self {
        self.squad_id = Some(squad_id.into());
        self
    }

    /// Restrict sessions to a coach
    #[must_use]
    pub fn with_coach(mut self, coach_id: impl Into<String>) -> Self {
        self.coach_id = Some(coach_id.into());
        self
    }

    /// Restrict to a single player
    #[must_use]
    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    /// The date range, if any
    #[must_use]
    pub const fn range(&self) -> Option<&DateRange> {
        self.date_range.as_ref()
    }

    /// Whether a session falls within range, centre, squad and coach
    #[must_use]
    pub fn matches_session(&self, session: &Session) -> bool {
        in_range(session.date, self.range())
            && field_matches(self.centre_id.as_deref(), &session.centre_id)
            && field_matches(self.squad_id.as_deref(), &session.squad_id)
            && field_matches(self.coach_id.as_deref(), &session.coach_id)
    }

    /// Whether a match falls within range, centre and squad
    #[must_use]
    pub fn matches_match(&self, fixture: &Match) -> bool {
        in_range(fixture.date, self.range())
            && field_matches(self.centre_id.as_deref(), &fixture.centre_id)
            && field_matches(self.squad_id.as_deref(), &fixture.squad_id)
    }

    /// Whether a player belongs to the centre, squad and player scope
    #[must_use]
    pub fn matches_player(&self, player: &Player) -> bool {
        field_matches(self.centre_id.as_deref(), &player.centre_id)
            && field_matches(self.squad_id.as_deref(), &player.squad_id)
            && field_matches(self.player_id.as_deref(), &player.id)
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.map_or(true, |id| id == actual)
}
