// ABOUTME: Player-level aggregator composing attendance, exposure, wellness and load
// ABOUTME: Adds readiness banding, recent match outcomes and pathway promotion progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Player Analytics
//!
//! One player's analytics snapshot. Attendance, exposure, wellness and the
//! weekly load series honour the caller's date range. The "recent sessions"
//! count and the acute/chronic load always trail the engine's `as_of` instant,
//! whatever range was requested.

use std::fmt;

use academy_core::errors::AppResult;
use academy_core::models::{
    Dataset, Match, PathwayLevel, Player, SelectionReason, SelectionStatus,
};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attendance::{AttendanceCalculator, AttendanceSummary};
use crate::config::{AnalyticsConfig, ReadinessConfig};
use crate::exposure::{ExposureCalculator, MatchExposure};
use crate::streak::{StreakDetector, StreakSummary};
use crate::time_window::DateRange;
use crate::training_load::{TrainingLoadCalculator, TrainingLoadSummary};
use crate::wellness::{WellnessSummarizer, WellnessSummary};

/// Coarse standing combining attendance and match exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessLabel {
    /// Strong attendance and regular selection
    #[serde(rename = "On Track")]
    OnTrack,
    /// Attendance close to the mark
    #[serde(rename = "Nearly There")]
    NearlyThere,
    /// Attendance needs attention
    #[serde(rename = "Needs Focus")]
    NeedsFocus,
}

impl fmt::Display for ReadinessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OnTrack => "On Track",
            Self::NearlyThere => "Nearly There",
            Self::NeedsFocus => "Needs Focus",
        })
    }
}

/// One recent squad match and the player's selection outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    /// Match id
    pub match_id: String,
    /// Kick-off
    pub date: DateTime<Utc>,
    /// Competition name
    pub competition: String,
    /// Selection outcome, `None` when no decision was recorded
    pub selection: Option<SelectionStatus>,
    /// Reason category, only when the player was not selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SelectionReason>,
}

/// Reference to a pathway level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    /// Level id
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordinal position
    pub order: u32,
}

impl From<&PathwayLevel> for LevelSummary {
    fn from(level: &PathwayLevel) -> Self {
        Self {
            id: level.id.clone(),
            name: level.name.clone(),
            order: level.order,
        }
    }
}

/// Promotion criterion that is not yet met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionCriterion {
    /// Attendance below the level minimum
    Attendance,
    /// Not enough months in the academy
    Tenure,
    /// Not selected for enough matches
    Matches,
}

/// Progress against the next level's promotion criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionReadiness {
    /// Every numeric criterion is met
    pub eligible: bool,
    /// Criteria still outstanding
    pub unmet: Vec<PromotionCriterion>,
    /// Whole months since joining
    pub tenure_months: u32,
    /// Matches selected for over the full history
    pub selected_matches: usize,
    /// A coach recommendation is still needed on top of the numbers
    pub requires_coach_recommendation: bool,
}

/// Where the player sits in the pathway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayProgress {
    /// Current level
    pub current_level: Option<LevelSummary>,
    /// Level with `order` exactly one greater
    pub next_level: Option<LevelSummary>,
    /// Attendance percentage the next level requires
    pub required_attendance: Option<u32>,
    /// Promotion criteria check, when a next level exists
    pub promotion: Option<PromotionReadiness>,
}

/// One player's analytics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnalytics {
    /// Player id
    pub player_id: String,
    /// Display name
    pub player_name: String,
    /// Home centre
    pub centre_id: String,
    /// Squad
    pub squad_id: String,
    /// Attendance over the requested range
    pub attendance: AttendanceSummary,
    /// Attendance streaks over the full history
    pub streak: StreakSummary,
    /// Sessions attended in the trailing window before `as_of`
    pub recent_sessions_attended: usize,
    /// Match exposure over the requested range
    pub exposure: MatchExposure,
    /// Wellness over the requested range
    pub wellness: WellnessSummary,
    /// Training load
    pub training_load: TrainingLoadSummary,
    /// Readiness band
    pub readiness: ReadinessLabel,
    /// Most recent squad matches, newest first
    pub recent_matches: Vec<RecentMatch>,
    /// Pathway position and promotion progress
    pub pathway: PathwayProgress,
}

/// Player-level aggregator
pub struct PlayerAnalyzer;

impl PlayerAnalyzer {
    /// Build the analytics snapshot of `player_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the player does not exist
    pub fn analyze(
        dataset: &Dataset,
        player_id: &str,
        range: Option<&DateRange>,
        config: &AnalyticsConfig,
        as_of: DateTime<Utc>,
    ) -> AppResult<PlayerAnalytics> {
        let player = dataset.require_player(player_id)?;

        let attendance =
            AttendanceCalculator::attendance_rate(dataset, &player.id, range, &config.attendance);
        let exposure = ExposureCalculator::for_player(dataset, player, range);
        let trailing = DateRange::trailing_days(as_of, config.player.trailing_attendance_days);

        Ok(PlayerAnalytics {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            centre_id: player.centre_id.clone(),
            squad_id: player.squad_id.clone(),
            attendance,
            streak: StreakDetector::summarize(dataset, &player.id),
            recent_sessions_attended: AttendanceCalculator::sessions_attended(
                dataset, &player.id, &trailing,
            ),
            exposure,
            wellness: WellnessSummarizer::summarize(dataset, &player.id, range),
            training_load: TrainingLoadCalculator::from_config(&config.load)
                .summarize(dataset, &player.id, range, as_of),
            readiness: Self::readiness(attendance.rate, exposure.exposure_rate, &config.readiness),
            recent_matches: Self::recent_matches(
                dataset,
                player,
                config.player.recent_match_count,
                as_of,
            ),
            pathway: Self::pathway_progress(dataset, player, attendance.rate, as_of),
        })
    }

    /// Band attendance and exposure into a readiness label
    #[must_use]
    pub const fn readiness(
        attendance_rate: u32,
        exposure_rate: u32,
        config: &ReadinessConfig,
    ) -> ReadinessLabel {
        if attendance_rate >= config.on_track_attendance
            && exposure_rate >= config.on_track_exposure
        {
            ReadinessLabel::OnTrack
        } else if attendance_rate >= config.nearly_there_attendance {
            ReadinessLabel::NearlyThere
        } else {
            ReadinessLabel::NeedsFocus
        }
    }

    /// The `limit` most recent matches of the player's squad played by
    /// `as_of`, newest first
    #[must_use]
    pub fn recent_matches(
        dataset: &Dataset,
        player: &Player,
        limit: usize,
        as_of: DateTime<Utc>,
    ) -> Vec<RecentMatch> {
        let mut fixtures: Vec<&Match> = dataset
            .matches
            .iter()
            .filter(|fixture| fixture.squad_id == player.squad_id && fixture.date <= as_of)
            .collect();
        fixtures.sort_by(|a, b| b.date.cmp(&a.date));

        fixtures
            .into_iter()
            .take(limit)
            .map(|fixture| {
                let selection = dataset
                    .selections_for(&player.id)
                    .find(|selection| selection.match_id == fixture.id);
                let status = selection.map(|s| s.status);
                RecentMatch {
                    match_id: fixture.id.clone(),
                    date: fixture.date,
                    competition: fixture.competition.clone(),
                    selection: status,
                    reason: selection
                        .filter(|s| !s.is_selected())
                        .and_then(|s| s.reason),
                }
            })
            .collect()
    }

    /// Current level, next level and promotion criteria check
    #[must_use]
    pub fn pathway_progress(
        dataset: &Dataset,
        player: &Player,
        attendance_rate: u32,
        as_of: DateTime<Utc>,
    ) -> PathwayProgress {
        let Some(current) = player
            .pathway_level_id
            .as_deref()
            .and_then(|level_id| dataset.pathway_level(level_id))
        else {
            debug!(player_id = %player.id, "player has no resolvable pathway level");
            return PathwayProgress::default();
        };

        let next = dataset.next_pathway_level(current);
        PathwayProgress {
            current_level: Some(current.into()),
            next_level: next.map(LevelSummary::from),
            required_attendance: next.map(|level| level.criteria.min_attendance_pct),
            promotion: next.map(|level| {
                Self::promotion_readiness(dataset, player, level, attendance_rate, as_of)
            }),
        }
    }

    fn promotion_readiness(
        dataset: &Dataset,
        player: &Player,
        next: &PathwayLevel,
        attendance_rate: u32,
        as_of: DateTime<Utc>,
    ) -> PromotionReadiness {
        let criteria = &next.criteria;
        let tenure_end = player.exited_at.map_or(as_of, |exited| exited.min(as_of));
        let tenure_months = months_between(player.joined_at, tenure_end);
        let selected_matches = dataset
            .selections_for(&player.id)
            .filter(|selection| selection.is_selected())
            .count();

        let mut unmet = Vec::new();
        if attendance_rate < criteria.min_attendance_pct {
            unmet.push(PromotionCriterion::Attendance);
        }
        if tenure_months < criteria.min_tenure_months {
            unmet.push(PromotionCriterion::Tenure);
        }
        if selected_matches < criteria.min_matches as usize {
            unmet.push(PromotionCriterion::Matches);
        }

        PromotionReadiness {
            eligible: unmet.is_empty(),
            unmet,
            tenure_months,
            selected_matches,
            requires_coach_recommendation: criteria.requires_coach_recommendation,
        }
    }
}

/// Whole calendar months from `start` to `end`, 0 when `end` is not after `start`
fn months_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    if end <= start {
        return 0;
    }
    let (start, end) = (start.date_naive(), end.date_naive());
    let mut months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    if end.day() < start.day() {
        months -= 1;
    }
    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}
