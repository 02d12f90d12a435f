// ABOUTME: Wellness summarizer - mean exertion and dominant energy state over self-reports
// ABOUTME: Energy ties resolve to the level encountered first; empty input reports N/A
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::fmt;

use academy_core::models::{Dataset, EnergyLevel, WellnessEntry};
use serde::{Deserialize, Serialize};

use crate::rates::round_to_tenth;
use crate::time_window::{in_range, DateRange};

/// Most frequently reported energy level, or `N/A` when nothing was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DominantEnergy {
    /// Mostly low energy
    #[serde(rename = "LOW")]
    Low,
    /// Mostly medium energy
    #[serde(rename = "MEDIUM")]
    Medium,
    /// Mostly high energy
    #[serde(rename = "HIGH")]
    High,
    /// No entries
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl From<EnergyLevel> for DominantEnergy {
    fn from(level: EnergyLevel) -> Self {
        match level {
            EnergyLevel::Low => Self::Low,
            EnergyLevel::Medium => Self::Medium,
            EnergyLevel::High => Self::High,
        }
    }
}

impl fmt::Display for DominantEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::NotAvailable => "N/A",
        })
    }
}

/// Wellness over a set of self-reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    /// Mean exertion rounded to one decimal, 0 when empty
    pub avg_exertion: f64,
    /// Most frequent energy level
    pub avg_energy: DominantEnergy,
    /// Number of entries summarized
    pub entries: usize,
}

impl WellnessSummary {
    /// Result for an empty set of entries
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            avg_exertion: 0.0,
            avg_energy: DominantEnergy::NotAvailable,
            entries: 0,
        }
    }
}

/// Wellness summarizer
pub struct WellnessSummarizer;

impl WellnessSummarizer {
    /// Summarize one player's entries within `range`
    #[must_use]
    pub fn summarize(
        dataset: &Dataset,
        player_id: &str,
        range: Option<&DateRange>,
    ) -> WellnessSummary {
        Self::summarize_entries(
            dataset
                .wellness_for(player_id)
                .filter(|entry| in_range(entry.date, range)),
        )
    }

    /// Summarize an arbitrary set of entries, in iteration order
    pub fn summarize_entries<'a>(
        entries: impl IntoIterator<Item = &'a WellnessEntry>,
    ) -> WellnessSummary {
        let mut count = 0_usize;
        let mut exertion_total = 0_u32;
        // first-seen order, so ties keep the earliest level
        let mut energy_counts: Vec<(EnergyLevel, usize)> = Vec::with_capacity(3);

        for entry in entries {
            count += 1;
            exertion_total += u32::from(entry.exertion);
            match energy_counts.iter_mut().find(|(level, _)| *level == entry.energy) {
                Some((_, seen)) => *seen += 1,
                None => energy_counts.push((entry.energy, 1)),
            }
        }

        if count == 0 {
            return WellnessSummary::empty();
        }

        let mut dominant: Option<(EnergyLevel, usize)> = None;
        for &(level, seen) in &energy_counts {
            if dominant.map_or(true, |(_, best)| seen > best) {
                dominant = Some((level, seen));
            }
        }

        WellnessSummary {
            avg_exertion: round_to_tenth(f64::from(exertion_total) / count as f64),
            avg_energy: dominant.map_or(DominantEnergy::NotAvailable, |(level, _)| level.into()),
            entries: count,
        }
    }
}
