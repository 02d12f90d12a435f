// ABOUTME: Admin cohort views - KPI summary, attendance series, pipeline and participation
// ABOUTME: All views scope by the shared filter and return plain serializable structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::collections::{HashMap, HashSet};

use academy_core::models::{Dataset, PathwayLevel, Player, Session};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mean_attendance_rate;
use crate::config::AnalyticsConfig;
use crate::filter::AnalyticsFilter;
use crate::forecast::{Forecast, ForecastProjector};
use crate::grouping::{group_by_period, PeriodGranularity};
use crate::rates::{mean, percentage, round_to_tenth};
use crate::time_window::in_range;

/// Headline KPIs for the admin view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminKpiSummary {
    /// Active players in scope
    pub active_players: usize,
    /// Sessions in range and scope
    pub sessions: usize,
    /// Matches in range and scope
    pub matches: usize,
    /// Unweighted mean of active players' attendance rates
    pub average_attendance_rate: u32,
    /// Mean exertion of wellness entries in range, rounded to an integer
    pub average_exertion: u32,
    /// Projection of the active player count
    pub forecast: Forecast,
}

/// Attendance at one centre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceByCentre {
    /// Centre id
    pub centre_id: String,
    /// Centre display name
    pub centre_name: String,
    /// Sessions at the centre in range
    pub sessions: usize,
    /// Distinct players with an attendance record at those sessions
    pub players: usize,
    /// `sessions * players`
    pub scheduled: usize,
    /// Present records at those sessions
    pub attended: usize,
    /// `round(100 * attended / scheduled)`, 0 when nothing is scheduled
    pub rate: u32,
}

/// Attendance within one week or month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePoint {
    /// Bucket key
    pub period: String,
    /// Attendance records tied to the bucket's sessions
    pub scheduled: usize,
    /// Present records among them
    pub attended: usize,
    /// `round(100 * attended / scheduled)`, 0 when nothing is scheduled
    pub rate: u32,
}

/// Active players at one pathway level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineBucket {
    /// Level display name
    pub level: String,
    /// Active players at the level
    pub count: usize,
}

/// Sessions and blended load within one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLoadPoint {
    /// Week start (ISO date of the Sunday)
    pub period: String,
    /// Sessions that week
    pub sessions: usize,
    /// Blended average exertion, one decimal
    pub avg_load: f64,
}

/// Players grouped by how many matches they were selected for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationBucket {
    /// One of `0`, `1-5`, `6-10`, `10+`
    pub bucket: String,
    /// Players in the bucket
    pub players: usize,
}

/// Every admin view for one filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    /// Headline KPIs
    pub summary: AdminKpiSummary,
    /// Per-centre attendance
    pub attendance_by_centre: Vec<AttendanceByCentre>,
    /// Attendance series
    pub attendance_over_time: Vec<AttendancePoint>,
    /// Active players per pathway level
    pub pipeline: Vec<PipelineBucket>,
    /// Weekly sessions and load
    pub sessions_and_load: Vec<SessionLoadPoint>,
    /// Match participation distribution
    pub match_participation: Vec<ParticipationBucket>,
}

const PARTICIPATION_BUCKETS: [&str; 4] = ["0", "1-5", "6-10", "10+"];

/// Admin aggregator
pub struct AdminAnalytics;

impl AdminAnalytics {
    /// Headline KPIs
    #[must_use]
    pub fn kpi_summary(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
        config: &AnalyticsConfig,
    ) -> AdminKpiSummary {
        let active = Self::active_players(dataset, filter);
        let sessions = Self::sessions(dataset, filter).len();
        let matches = dataset
            .matches
            .iter()
            .filter(|fixture| filter.matches_match(fixture))
            .count();

        let average_attendance_rate = mean_attendance_rate(
            dataset,
            active.iter().copied(),
            filter.range(),
            &config.attendance,
        );

        let scoped = filter.centre_id.is_some() || filter.squad_id.is_some();
        let exertions: Vec<f64> = dataset
            .wellness
            .iter()
            .filter(|entry| in_range(entry.date, filter.range()))
            .filter(|entry| {
                !scoped
                    || dataset
                        .player(&entry.player_id)
                        .is_some_and(|player| filter.matches_player(player))
            })
            .map(|entry| f64::from(entry.exertion))
            .collect();
        let average_exertion = mean(&exertions).map_or(0, |value| value.round() as u32);

        let active_count = u32::try_from(active.len()).unwrap_or(u32::MAX);
        AdminKpiSummary {
            active_players: active.len(),
            sessions,
            matches,
            average_attendance_rate,
            average_exertion,
            forecast: ForecastProjector::project(active_count, &config.forecast),
        }
    }

    /// Attendance per centre, in snapshot order
    ///
    /// The denominator is sessions times distinct attendees, an approximation
    /// rather than a per-player sum.
    #[must_use]
    pub fn attendance_by_centre(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
    ) -> Vec<AttendanceByCentre> {
        let sessions = Self::sessions(dataset, filter);

        dataset
            .centres
            .iter()
            .filter(|centre| {
                filter
                    .centre_id
                    .as_deref()
                    .map_or(true, |wanted| wanted == centre.id)
            })
            .map(|centre| {
                let centre_sessions: HashSet<&str> = sessions
                    .iter()
                    .filter(|session| session.centre_id == centre.id)
                    .map(|session| session.id.as_str())
                    .collect();

                let mut attendees = HashSet::new();
                let mut attended = 0;
                for record in dataset
                    .attendance
                    .iter()
                    .filter(|record| centre_sessions.contains(record.session_id.as_str()))
                {
                    attendees.insert(record.player_id.as_str());
                    if record.is_present() {
                        attended += 1;
                    }
                }

                let scheduled = centre_sessions.len() * attendees.len();
                AttendanceByCentre {
                    centre_id: centre.id.clone(),
                    centre_name: centre.name.clone(),
                    sessions: centre_sessions.len(),
                    players: attendees.len(),
                    scheduled,
                    attended,
                    rate: percentage(attended, scheduled),
                }
            })
            .collect()
    }

    /// Attendance records per week or month of their session
    #[must_use]
    pub fn attendance_over_time(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
        granularity: PeriodGranularity,
    ) -> Vec<AttendancePoint> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for record in &dataset.attendance {
            let entry = counts.entry(record.session_id.as_str()).or_default();
            entry.0 += 1;
            if record.is_present() {
                entry.1 += 1;
            }
        }

        let sessions = Self::sessions(dataset, filter);
        group_by_period(sessions.iter().copied(), |session| session.date, granularity)
            .into_iter()
            .map(|(period, bucket)| {
                let (scheduled, attended) = bucket
                    .iter()
                    .filter_map(|session| counts.get(session.id.as_str()))
                    .fold((0, 0), |(s, a), (rows, present)| (s + rows, a + present));
                AttendancePoint {
                    period,
                    scheduled,
                    attended,
                    rate: percentage(attended, scheduled),
                }
            })
            .collect()
    }

    /// Active players per pathway level, levels in `order`
    ///
    /// Players without a resolvable level are not counted.
    #[must_use]
    pub fn pipeline_distribution(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
    ) -> Vec<PipelineBucket> {
        let mut levels: Vec<&PathwayLevel> = dataset.pathway_levels.iter().collect();
        levels.sort_by_key(|level| level.order);

        let active = Self::active_players(dataset, filter);
        levels
            .into_iter()
            .map(|level| PipelineBucket {
                level: level.name.clone(),
                count: active
                    .iter()
                    .filter(|player| player.pathway_level_id.as_deref() == Some(level.id.as_str()))
                    .count(),
            })
            .collect()
    }

    /// Weekly session counts with a blended average exertion
    ///
    /// Each session contributes the mean exertion of wellness entries linked to
    /// it; a week's value is the mean over its sessions with entries. That value
    /// is then averaged with the previous non-zero week as `(prev + new) / 2`.
    /// Weeks without any linked entry carry the previous value forward.
    #[must_use]
    pub fn sessions_and_load(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
    ) -> Vec<SessionLoadPoint> {
        let mut exertion_by_session: HashMap<&str, Vec<f64>> = HashMap::new();
        for entry in &dataset.wellness {
            if let Some(session_id) = entry.session_id.as_deref() {
                exertion_by_session
                    .entry(session_id)
                    .or_default()
                    .push(f64::from(entry.exertion));
            }
        }

        let sessions = Self::sessions(dataset, filter);
        let mut previous = 0.0;
        group_by_period(
            sessions.iter().copied(),
            |session| session.date,
            PeriodGranularity::Week,
        )
        .into_iter()
        .map(|(period, bucket)| {
            let session_means: Vec<f64> = bucket
                .iter()
                .filter_map(|session| {
                    exertion_by_session
                        .get(session.id.as_str())
                        .and_then(|values| mean(values))
                })
                .collect();
            let current = mean(&session_means).unwrap_or(0.0);
            let load = blend(previous, current);
            if load > 0.0 {
                previous = load;
            }
            SessionLoadPoint {
                period,
                sessions: bucket.len(),
                avg_load: round_to_tenth(load),
            }
        })
        .collect()
    }

    /// Active players bucketed by selected matches over the full history
    ///
    /// Ten selections fall in `6-10`; `10+` starts at eleven.
    #[must_use]
    pub fn match_participation(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
    ) -> Vec<ParticipationBucket> {
        let mut selected: HashMap<&str, usize> = HashMap::new();
        for selection in dataset.selections.iter().filter(|s| s.is_selected()) {
            *selected.entry(selection.player_id.as_str()).or_default() += 1;
        }

        let mut counts = [0_usize; 4];
        for player in Self::active_players(dataset, filter) {
            let matches = selected.get(player.id.as_str()).copied().unwrap_or(0);
            counts[participation_bucket(matches)] += 1;
        }

        PARTICIPATION_BUCKETS
            .iter()
            .zip(counts)
            .map(|(bucket, players)| ParticipationBucket {
                bucket: (*bucket).to_owned(),
                players,
            })
            .collect()
    }

    /// All admin views at once
    #[must_use]
    pub fn dashboard(
        dataset: &Dataset,
        filter: &AnalyticsFilter,
        granularity: PeriodGranularity,
        config: &AnalyticsConfig,
    ) -> AdminDashboard {
        debug!(
            sessions = dataset.sessions.len(),
            players = dataset.players.len(),
            %granularity,
            "building admin dashboard"
        );
        AdminDashboard {
            summary: Self::kpi_summary(dataset, filter, config),
            attendance_by_centre: Self::attendance_by_centre(dataset, filter),
            attendance_over_time: Self::attendance_over_time(dataset, filter, granularity),
            pipeline: Self::pipeline_distribution(dataset, filter),
            sessions_and_load: Self::sessions_and_load(dataset, filter),
            match_participation: Self::match_participation(dataset, filter),
        }
    }

    fn active_players<'a>(dataset: &'a Dataset, filter: &AnalyticsFilter) -> Vec<&'a Player> {
        dataset
            .players
            .iter()
            .filter(|player| player.is_active() && filter.matches_player(player))
            .collect()
    }

    fn sessions<'a>(dataset: &'a Dataset, filter: &AnalyticsFilter) -> Vec<&'a Session> {
        dataset
            .sessions
            .iter()
            .filter(|session| filter.matches_session(session))
            .collect()
    }
}

/// Two-point blend with the previous non-zero week
fn blend(previous: f64, current: f64) -> f64 {
    if current <= 0.0 {
        previous
    } else if previous <= 0.0 {
        current
    } else {
        (previous + current) / 2.0
    }
}

const fn participation_bucket(selected: usize) -> usize {
    match selected {
        0 => 0,
        1..=5 => 1,
        6..=10 => 2,
        _ => 3,
    }
}
