// ABOUTME: Benchmark fixtures generating deterministic academy snapshots
// ABOUTME: Centres, squads, players and a season of sessions, matches and wellness reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Benchmark fixtures.
//!
//! Every value derives from the record index so repeated runs measure the same
//! snapshot.

use academy_analytics::models::{
    AttendanceRecord, AttendanceStatus, Centre, Dataset, EnergyLevel, Feedback, FeedbackPeriod,
    FeedbackStatus, Match, MatchSelection, PathwayLevel, Player, PlayerStatus, PromotionCriteria,
    SelectionReason, SelectionStatus, Session, SessionType, Squad, WellnessEntry,
};
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

const CENTRES: usize = 3;
const SQUADS: usize = 4;
const COACHES: usize = 6;

/// Predefined academy sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum AcademySize {
    /// 60 players, one term of sessions
    Small,
    /// 400 players, a full season
    Medium,
}

impl AcademySize {
    #[must_use]
    pub const fn players(self) -> usize {
        match self {
            Self::Small => 60,
            Self::Medium => 400,
        }
    }

    #[must_use]
    pub const fn weeks(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Medium => 40,
        }
    }
}

/// Reference instant the generated season ends on
#[must_use]
pub fn season_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 28, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Id of the `index`th coach
#[must_use]
pub fn coach_id(index: usize) -> String {
    format!("coach-{}", index % COACHES)
}

/// Generate a snapshot of the given size
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_academy(size: AcademySize) -> Dataset {
    let mut dataset = Dataset {
        centres: (0..CENTRES)
            .map(|index| Centre {
                id: format!("centre-{index}"),
                name: format!("Centre {index}"),
                short_name: format!("C{index}"),
                city: "Manchester".to_owned(),
            })
            .collect(),
        squads: (0..SQUADS)
            .map(|index| Squad {
                id: format!("squad-{index}"),
                name: format!("Under {}", 12 + 2 * index),
                level_key: format!("u{}", 12 + 2 * index),
            })
            .collect(),
        pathway_levels: (0..3_u32)
            .map(|order| PathwayLevel {
                id: format!("level-{order}"),
                name: format!("Phase {order}"),
                order,
                criteria: PromotionCriteria {
                    min_attendance_pct: 70 + order * 10,
                    min_tenure_months: 6 * order,
                    min_matches: 4 * order,
                    requires_coach_recommendation: order > 0,
                },
            })
            .collect(),
        ..Dataset::default()
    };

    let start = season_end() - Duration::weeks(size.weeks() as i64);
    dataset.players = (0..size.players())
        .map(|index| {
            let exited = index % 17 == 0;
            Player {
                id: format!("player-{index}"),
                name: format!("Player {index:04}"),
                centre_id: format!("centre-{}", index % CENTRES),
                squad_id: format!("squad-{}", index % SQUADS),
                joined_at: start - Duration::days((index * 11 % 700) as i64),
                exited_at: exited.then(|| season_end() - Duration::days(30)),
                status: if exited {
                    PlayerStatus::Inactive
                } else {
                    PlayerStatus::Active
                },
                pathway_level_id: Some(format!("level-{}", index % 3)),
            }
        })
        .collect();

    for week in 0..size.weeks() {
        let monday = start + Duration::weeks(week as i64);
        add_training_week(&mut dataset, week, monday);
        add_match_day(&mut dataset, week, monday + Duration::days(5));
    }
    add_feedback(&mut dataset);
    dataset
}

/// Two sessions per squad per week with attendance for every squad player
#[allow(clippy::cast_possible_wrap)]
fn add_training_week(dataset: &mut Dataset, week: usize, monday: DateTime<Utc>) {
    for squad in 0..SQUADS {
        for slot in 0..2 {
            let session_id = format!("session-{week}-{squad}-{slot}");
            let date = monday + Duration::days((slot * 2 + squad % 2) as i64);
            dataset.sessions.push(Session {
                id: session_id.clone(),
                date,
                centre_id: format!("centre-{}", squad % CENTRES),
                squad_id: format!("squad-{squad}"),
                coach_id: coach_id(squad + slot),
                session_type: SessionType::Training,
            });

            let squad_players: Vec<String> = dataset
                .players
                .iter()
                .filter(|player| player.squad_id == format!("squad-{squad}"))
                .map(|player| player.id.clone())
                .collect();
            for (position, player_id) in squad_players.into_iter().enumerate() {
                let seed = week * 31 + position * 7 + slot;
                dataset.attendance.push(AttendanceRecord {
                    id: format!("att-{session_id}-{player_id}"),
                    session_id: session_id.clone(),
                    player_id: player_id.clone(),
                    status: if seed % 5 == 0 {
                        AttendanceStatus::Absent
                    } else {
                        AttendanceStatus::Present
                    },
                    recorded_at: date,
                });
                if seed % 3 == 0 {
                    dataset.wellness.push(WellnessEntry {
                        id: format!("well-{session_id}-{player_id}"),
                        player_id,
                        date,
                        session_id: Some(session_id.clone()),
                        exertion: (1 + seed % 5) as u8,
                        energy: match seed % 3 {
                            0 => EnergyLevel::Low,
                            1 => EnergyLevel::Medium,
                            _ => EnergyLevel::High,
                        },
                        note: String::new(),
                    });
                }
            }
        }
    }
}

/// One fixture per squad with sixteen selections
fn add_match_day(dataset: &mut Dataset, week: usize, date: DateTime<Utc>) {
    for squad in 0..SQUADS {
        let match_id = format!("match-{week}-{squad}");
        dataset.matches.push(Match {
            id: match_id.clone(),
            date,
            competition: "County League".to_owned(),
            squad_id: format!("squad-{squad}"),
            centre_id: format!("centre-{}", squad % CENTRES),
        });

        let squad_id = format!("squad-{squad}");
        let selections: Vec<MatchSelection> = dataset
            .players
            .iter()
            .filter(|player| player.squad_id == squad_id && player.is_active())
            .enumerate()
            .map(|(position, player)| {
                let selected = (position + week) % 6 < 4;
                MatchSelection {
                    id: format!("sel-{match_id}-{}", player.id),
                    match_id: match_id.clone(),
                    player_id: player.id.clone(),
                    status: if selected {
                        SelectionStatus::Selected
                    } else {
                        SelectionStatus::NotSelected
                    },
                    reason: (!selected).then_some(SelectionReason::Rotation),
                }
            })
            .collect();
        dataset.selections.extend(selections);
    }
}

/// Monthly published feedback for every other player
#[allow(clippy::cast_possible_wrap)]
fn add_feedback(dataset: &mut Dataset) {
    let feedback: Vec<Feedback> = dataset
        .players
        .iter()
        .enumerate()
        .filter(|(index, _)| index % 2 == 0)
        .map(|(index, player)| {
            let created_at = season_end() - Duration::days((index % 90) as i64);
            Feedback {
                id: format!("feedback-{index}"),
                player_id: player.id.clone(),
                coach_id: coach_id(index),
                period: FeedbackPeriod {
                    month: created_at.month(),
                    year: created_at.year(),
                },
                strengths: vec!["Work rate".to_owned()],
                improvements: vec!["Weak foot".to_owned()],
                focus_goal: "Receive on the back foot".to_owned(),
                status: if index % 8 == 0 {
                    FeedbackStatus::Draft
                } else {
                    FeedbackStatus::Published
                },
                created_at,
                updated_at: created_at,
            }
        })
        .collect();
    dataset.feedback = feedback;
}
