// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup and a fluent builder for dataset snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::too_many_lines
)]
//! Shared test utilities for `academy_analytics`
//!
//! Dates are fixed so that every scenario is reproducible; `as_of()` is the
//! reference instant used by tests that depend on trailing windows.

use std::sync::Once;

use academy_analytics::models::{
    AttendanceRecord, AttendanceStatus, Centre, Dataset, EnergyLevel, Feedback, FeedbackPeriod,
    FeedbackStatus, Match, MatchSelection, PathwayLevel, Player, PlayerStatus, PromotionCriteria,
    SelectionReason, SelectionStatus, Session, SessionType, Squad, WellnessEntry,
};
use chrono::{DateTime, Datelike, TimeZone, Utc};

static INIT_LOGGER: Once = Once::new();

pub const CENTRE_NORTH: &str = "c-north";
pub const CENTRE_SOUTH: &str = "c-south";
pub const SQUAD_U14: &str = "sq-u14";
pub const SQUAD_U16: &str = "sq-u16";
pub const COACH_A: &str = "coach-a";
pub const COACH_B: &str = "coach-b";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 10:00 UTC on the given day
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

/// Reference instant for now-relative windows: Saturday 2025-03-15
pub fn as_of() -> DateTime<Utc> {
    at(2025, 3, 15)
}

/// Fluent builder over [`Dataset`]
#[derive(Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two centres, two squads and a three-level pathway
    pub fn with_organisation() -> Self {
        Self::new()
            .centre(CENTRE_NORTH, "North Academy")
            .centre(CENTRE_SOUTH, "South Academy")
            .squad(SQUAD_U14, "Under 14")
            .squad(SQUAD_U16, "Under 16")
            .level("lvl-dev", "Development", 1, PromotionCriteria::default())
            .level(
                "lvl-perf",
                "Performance",
                2,
                PromotionCriteria {
                    min_attendance_pct: 80,
                    min_tenure_months: 6,
                    min_matches: 2,
                    requires_coach_recommendation: true,
                },
            )
            .level(
                "lvl-elite",
                "Elite",
                3,
                PromotionCriteria {
                    min_attendance_pct: 90,
                    min_tenure_months: 18,
                    min_matches: 10,
                    requires_coach_recommendation: true,
                },
            )
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }

    pub fn centre(mut self, id: &str, name: &str) -> Self {
        self.dataset.centres.push(Centre {
            id: id.to_owned(),
            name: name.to_owned(),
            short_name: name.chars().take(3).collect(),
            city: "Leeds".to_owned(),
        });
        self
    }

    pub fn squad(mut self, id: &str, name: &str) -> Self {
        self.dataset.squads.push(Squad {
            id: id.to_owned(),
            name: name.to_owned(),
            level_key: id.to_owned(),
        });
        self
    }

    pub fn level(mut self, id: &str, name: &str, order: u32, criteria: PromotionCriteria) -> Self {
        self.dataset.pathway_levels.push(PathwayLevel {
            id: id.to_owned(),
            name: name.to_owned(),
            order,
            criteria,
        });
        self
    }

    /// Active player at North, U14, joined 2024-01-10, development level
    pub fn player(self, id: &str, name: &str) -> Self {
        self.player_in(id, name, CENTRE_NORTH, SQUAD_U14)
    }

    pub fn player_in(mut self, id: &str, name: &str, centre_id: &str, squad_id: &str) -> Self {
        self.dataset.players.push(Player {
            id: id.to_owned(),
            name: name.to_owned(),
            centre_id: centre_id.to_owned(),
            squad_id: squad_id.to_owned(),
            joined_at: at(2024, 1, 10),
            exited_at: None,
            status: PlayerStatus::Active,
            pathway_level_id: Some("lvl-dev".to_owned()),
        });
        self
    }

    /// Mark the most recently added player inactive as of `exited_at`
    pub fn exited(mut self, exited_at: DateTime<Utc>) -> Self {
        let player = self.dataset.players.last_mut().unwrap();
        player.status = PlayerStatus::Inactive;
        player.exited_at = Some(exited_at);
        self
    }

    /// Move the most recently added player to another pathway level
    pub fn at_level(mut self, level_id: Option<&str>) -> Self {
        let player = self.dataset.players.last_mut().unwrap();
        player.pathway_level_id = level_id.map(str::to_owned);
        self
    }

    /// Change the join date of the most recently added player
    pub fn joined(mut self, joined_at: DateTime<Utc>) -> Self {
        self.dataset.players.last_mut().unwrap().joined_at = joined_at;
        self
    }

    /// Training session at North, U14, run by coach A
    pub fn session(self, id: &str, date: DateTime<Utc>) -> Self {
        self.session_full(id, date, CENTRE_NORTH, SQUAD_U14, COACH_A)
    }

    pub fn session_full(
        mut self,
        id: &str,
        date: DateTime<Utc>,
        centre_id: &str,
        squad_id: &str,
        coach_id: &str,
    ) -> Self {
        self.dataset.sessions.push(Session {
            id: id.to_owned(),
            date,
            centre_id: centre_id.to_owned(),
            squad_id: squad_id.to_owned(),
            coach_id: coach_id.to_owned(),
            session_type: SessionType::Training,
        });
        self
    }

    pub fn present(self, session_id: &str, player_id: &str) -> Self {
        self.attendance(session_id, player_id, AttendanceStatus::Present)
    }

    pub fn absent(self, session_id: &str, player_id: &str) -> Self {
        self.attendance(session_id, player_id, AttendanceStatus::Absent)
    }

    fn attendance(mut self, session_id: &str, player_id: &str, status: AttendanceStatus) -> Self {
        let recorded_at = self
            .dataset
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .map_or_else(as_of, |s| s.date);
        self.dataset.attendance.push(AttendanceRecord {
            id: format!("att-{session_id}-{player_id}"),
            session_id: session_id.to_owned(),
            player_id: player_id.to_owned(),
            status,
            recorded_at,
        });
        self
    }

    /// League match for a squad, played at North
    pub fn fixture(mut self, id: &str, date: DateTime<Utc>, squad_id: &str) -> Self {
        self.dataset.matches.push(Match {
            id: id.to_owned(),
            date,
            competition: "Regional League".to_owned(),
            squad_id: squad_id.to_owned(),
            centre_id: CENTRE_NORTH.to_owned(),
        });
        self
    }

    pub fn selected(self, match_id: &str, player_id: &str) -> Self {
        self.selection(match_id, player_id, SelectionStatus::Selected, None)
    }

    pub fn not_selected(self, match_id: &str, player_id: &str, reason: SelectionReason) -> Self {
        self.selection(match_id, player_id, SelectionStatus::NotSelected, Some(reason))
    }

    fn selection(
        mut self,
        match_id: &str,
        player_id: &str,
        status: SelectionStatus,
        reason: Option<SelectionReason>,
    ) -> Self {
        self.dataset.selections.push(MatchSelection {
            id: format!("sel-{match_id}-{player_id}"),
            match_id: match_id.to_owned(),
            player_id: player_id.to_owned(),
            status,
            reason,
        });
        self
    }

    pub fn wellness(
        self,
        player_id: &str,
        date: DateTime<Utc>,
        exertion: u8,
        energy: EnergyLevel,
    ) -> Self {
        self.wellness_for_session(player_id, date, exertion, energy, None)
    }

    pub fn wellness_for_session(
        mut self,
        player_id: &str,
        date: DateTime<Utc>,
        exertion: u8,
        energy: EnergyLevel,
        session_id: Option<&str>,
    ) -> Self {
        let id = format!("well-{}", self.dataset.wellness.len() + 1);
        self.dataset.wellness.push(WellnessEntry {
            id,
            player_id: player_id.to_owned(),
            date,
            session_id: session_id.map(str::to_owned),
            exertion,
            energy,
            note: String::new(),
        });
        self
    }

    pub fn feedback(
        mut self,
        player_id: &str,
        coach_id: &str,
        created_at: DateTime<Utc>,
        status: FeedbackStatus,
    ) -> Self {
        let id = format!("fb-{}", self.dataset.feedback.len() + 1);
        self.dataset.feedback.push(Feedback {
            id,
            player_id: player_id.to_owned(),
            coach_id: coach_id.to_owned(),
            period: FeedbackPeriod {
                month: created_at.month(),
                year: created_at.year(),
            },
            strengths: vec!["First touch".to_owned()],
            improvements: vec!["Scanning before receiving".to_owned()],
            focus_goal: "Play forward on the half turn".to_owned(),
            status,
            created_at,
            updated_at: created_at,
        });
        self
    }
}

/// Sessions S1 (Mon), S2 (Wed), S3 (Fri) in the week of 2025-03-03; player
/// `p-1` attends S1 and S2 only
pub fn three_session_week() -> Dataset {
    DatasetBuilder::with_organisation()
        .player("p-1", "Amara Okafor")
        .session("s-1", at(2025, 3, 3))
        .session("s-2", at(2025, 3, 5))
        .session("s-3", at(2025, 3, 7))
        .present("s-1", "p-1")
        .present("s-2", "p-1")
        .absent("s-3", "p-1")
        .build()
}
