// ABOUTME: Core data models for academy players, sessions, matches, wellness and feedback
// ABOUTME: Re-exports entity types and the Dataset snapshot consumed by the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! # Data Models
//!
//! Immutable entity snapshots supplied to the engine by an external data-access
//! layer. The engine never mutates these records; it only derives transient
//! result objects from them.
//!
//! ## Core Models
//!
//! - `Player`, `Centre`, `Squad`, `PathwayLevel`: academy structure
//! - `Session`, `AttendanceRecord`: scheduled training and who turned up
//! - `Match`, `MatchSelection`: fixtures and squad selection outcomes
//! - `WellnessEntry`: self-reported exertion and energy
//! - `Feedback`: periodic coach feedback
//! - `Dataset`: one read-only snapshot of all of the above

mod dataset;
mod feedback;
mod fixtures;
mod organisation;
mod player;
mod training;
mod wellness;

pub use dataset::Dataset;
pub use feedback::{Feedback, FeedbackPeriod, FeedbackStatus};
pub use fixtures::{Match, MatchSelection, SelectionReason, SelectionStatus};
pub use organisation::{Centre, PathwayLevel, PromotionCriteria, Squad};
pub use player::{Player, PlayerStatus};
pub use training::{AttendanceRecord, AttendanceStatus, Session, SessionType};
pub use wellness::{EnergyLevel, WellnessEntry};
