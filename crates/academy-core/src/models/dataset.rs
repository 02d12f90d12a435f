// ABOUTME: Read-only dataset snapshot handed to the analytics engine per query
// ABOUTME: Provides entity lookups and boundary validation of the entity invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::{
    AttendanceRecord, Centre, Feedback, Match, MatchSelection, PathwayLevel, Player, Session,
    Squad, WellnessEntry,
};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Every entity collection the engine reads, as one immutable snapshot
///
/// The snapshot is assumed to be already scoped to what the caller is allowed
/// to see. All collections default to empty when absent from serialized input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    /// Players
    pub players: Vec<Player>,
    /// Centres
    pub centres: Vec<Centre>,
    /// Squads
    pub squads: Vec<Squad>,
    /// Pathway levels
    pub pathway_levels: Vec<PathwayLevel>,
    /// Scheduled sessions
    pub sessions: Vec<Session>,
    /// Attendance records
    pub attendance: Vec<AttendanceRecord>,
    /// Matches
    pub matches: Vec<Match>,
    /// Match selections
    pub selections: Vec<MatchSelection>,
    /// Wellness self-reports
    pub wellness: Vec<WellnessEntry>,
    /// Coach feedback
    pub feedback: Vec<Feedback>,
}

impl Dataset {
    /// Look up a player by id
    #[must_use]
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Look up a player that an operation cannot proceed without
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when no player has this id
    pub fn require_player(&self, player_id: &str) -> AppResult<&Player> {
        self.player(player_id).ok_or_else(|| {
            debug!(player_id, "player lookup failed");
            AppError::not_found("Player", player_id)
        })
    }

    /// Look up a centre by id
    #[must_use]
    pub fn centre(&self, centre_id: &str) -> Option<&Centre> {
        self.centres.iter().find(|c| c.id == centre_id)
    }

    /// Look up a squad by id
    #[must_use]
    pub fn squad(&self, squad_id: &str) -> Option<&Squad> {
        self.squads.iter().find(|s| s.id == squad_id)
    }

    /// Look up a session by id
    #[must_use]
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Look up a pathway level by id
    #[must_use]
    pub fn pathway_level(&self, level_id: &str) -> Option<&PathwayLevel> {
        self.pathway_levels.iter().find(|l| l.id == level_id)
    }

    /// The level whose `order` is exactly one greater than `level`
    #[must_use]
    pub fn next_pathway_level(&self, level: &PathwayLevel) -> Option<&PathwayLevel> {
        self.pathway_levels
            .iter()
            .find(|l| Some(l.order) == level.order.checked_add(1))
    }

    /// Attendance records belonging to one player, in snapshot order
    pub fn attendance_for<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.attendance
            .iter()
            .filter(move |record| record.player_id == player_id)
    }

    /// Selections belonging to one player, in snapshot order
    pub fn selections_for<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = &'a MatchSelection> + 'a {
        self.selections
            .iter()
            .filter(move |selection| selection.player_id == player_id)
    }

    /// Wellness entries belonging to one player, in snapshot order
    pub fn wellness_for<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = &'a WellnessEntry> + 'a {
        self.wellness
            .iter()
            .filter(move |entry| entry.player_id == player_id)
    }

    /// Validate the entity invariants at the data-access boundary
    ///
    /// Checks that a player is inactive exactly when it carries an exit date,
    /// attendance and selections are unique per pair, exertion lies in 1-5,
    /// feedback months are valid, pathway orders are distinct and every
    /// centre, squad, level, session, match and player reference resolves.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error describing the first violation found
    pub fn validate(&self) -> AppResult<()> {
        let ids = EntityIds::of(self);
        self.validate_players(&ids)?;
        self.validate_pathway_levels()?;
        self.validate_sessions(&ids)?;
        self.validate_attendance(&ids)?;
        self.validate_matches(&ids)?;
        self.validate_selections(&ids)?;
        self.validate_wellness(&ids)?;
        self.validate_feedback(&ids)
    }

    fn validate_players(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        for player in &self.players {
            if player.is_active() == player.exited_at.is_some() {
                let problem = if player.is_active() {
                    "is active but has an exit date"
                } else {
                    "is inactive but has no exit date"
                };
                return Err(AppError::invalid_input(format!(
                    "Player '{}' {problem}",
                    player.id
                ))
                .with_resource_id(player.id.clone()));
            }
            require_known(&ids.centres, "Player", &player.id, "centre", &player.centre_id)?;
            require_known(&ids.squads, "Player", &player.id, "squad", &player.squad_id)?;
            if let Some(level_id) = &player.pathway_level_id {
                require_known(&ids.levels, "Player", &player.id, "pathway level", level_id)?;
            }
        }
        Ok(())
    }

    fn validate_pathway_levels(&self) -> AppResult<()> {
        let mut orders: Vec<u32> = self.pathway_levels.iter().map(|l| l.order).collect();
        orders.sort_unstable();
        if let Some(pair) = orders.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(AppError::invalid_input(format!(
                "Pathway order {} is used by more than one level",
                pair[0]
            )));
        }
        Ok(())
    }

    fn validate_sessions(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        for session in &self.sessions {
            require_known(&ids.centres, "Session", &session.id, "centre", &session.centre_id)?;
            require_known(&ids.squads, "Session", &session.id, "squad", &session.squad_id)?;
        }
        Ok(())
    }

    fn validate_attendance(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.attendance.len());
        for record in &self.attendance {
            require_known(
                &ids.sessions,
                "Attendance record",
                &record.id,
                "session",
                &record.session_id,
            )?;
            require_known(
                &ids.players,
                "Attendance record",
                &record.id,
                "player",
                &record.player_id,
            )?;
            if !seen.insert((record.session_id.as_str(), record.player_id.as_str())) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate attendance for player '{}' at session '{}'",
                    record.player_id, record.session_id
                ))
                .with_resource_id(record.id.clone()));
            }
        }
        Ok(())
    }

    fn validate_matches(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        for fixture in &self.matches {
            require_known(&ids.centres, "Match", &fixture.id, "centre", &fixture.centre_id)?;
            require_known(&ids.squads, "Match", &fixture.id, "squad", &fixture.squad_id)?;
        }
        Ok(())
    }

    fn validate_selections(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.selections.len());
        for selection in &self.selections {
            require_known(&ids.matches, "Selection", &selection.id, "match", &selection.match_id)?;
            require_known(
                &ids.players,
                "Selection",
                &selection.id,
                "player",
                &selection.player_id,
            )?;
            if !seen.insert((selection.match_id.as_str(), selection.player_id.as_str())) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate selection for player '{}' in match '{}'",
                    selection.player_id, selection.match_id
                ))
                .with_resource_id(selection.id.clone()));
            }
        }
        Ok(())
    }

    fn validate_wellness(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        let exertion_range = limits::EXERTION_MIN..=limits::EXERTION_MAX;
        for entry in &self.wellness {
            if !exertion_range.contains(&entry.exertion) {
                return Err(AppError::invalid_input(format!(
                    "Wellness entry '{}' has exertion {} outside {}-{}",
                    entry.id,
                    entry.exertion,
                    limits::EXERTION_MIN,
                    limits::EXERTION_MAX
                ))
                .with_resource_id(entry.id.clone()));
            }
            require_known(&ids.players, "Wellness entry", &entry.id, "player", &entry.player_id)?;
            if let Some(session_id) = &entry.session_id {
                require_known(&ids.sessions, "Wellness entry", &entry.id, "session", session_id)?;
            }
        }
        Ok(())
    }

    fn validate_feedback(&self, ids: &EntityIds<'_>) -> AppResult<()> {
        let month_range = limits::MONTH_MIN..=limits::MONTH_MAX;
        for feedback in &self.feedback {
            if !month_range.contains(&feedback.period.month) {
                return Err(AppError::invalid_input(format!(
                    "Feedback '{}' has invalid period month {}",
                    feedback.id, feedback.period.month
                ))
                .with_resource_id(feedback.id.clone()));
            }
            require_known(&ids.players, "Feedback", &feedback.id, "player", &feedback.player_id)?;
        }
        Ok(())
    }
}

/// Ids of every referenceable entity in a snapshot
struct EntityIds<'a> {
    players: HashSet<&'a str>,
    centres: HashSet<&'a str>,
    squads: HashSet<&'a str>,
    levels: HashSet<&'a str>,
    sessions: HashSet<&'a str>,
    matches: HashSet<&'a str>,
}

impl<'a> EntityIds<'a> {
    fn of(dataset: &'a Dataset) -> Self {
        Self {
            players: dataset.players.iter().map(|p| p.id.as_str()).collect(),
            centres: dataset.centres.iter().map(|c| c.id.as_str()).collect(),
            squads: dataset.squads.iter().map(|s| s.id.as_str()).collect(),
            levels: dataset.pathway_levels.iter().map(|l| l.id.as_str()).collect(),
            sessions: dataset.sessions.iter().map(|s| s.id.as_str()).collect(),
            matches: dataset.matches.iter().map(|m| m.id.as_str()).collect(),
        }
    }

}

/// Fail when `target` is not among `known`
fn require_known(
    known: &HashSet<&str>,
    entity: &str,
    id: &str,
    field: &str,
    target: &str,
) -> AppResult<()> {
    if known.contains(target) {
        return Ok(());
    }
    debug!(entity, id, field, target, "unresolved reference");
    Err(AppError::invalid_input(format!(
        "{entity} '{id}' references unknown {field} '{target}'"
    ))
    .with_resource_id(id)
    .with_details(json!({ "field": field, "reference": target })))
}
