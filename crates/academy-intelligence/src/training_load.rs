// ABOUTME: Player training load derived from self-reported exertion
// ABOUTME: Weekly load series plus an acute:chronic ratio with status banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Training load from wellness exertion.
//!
//! Players do not wear power meters, so the self-reported exertion score of each
//! wellness entry stands in for session stress. Two views are derived:
//!
//! - a weekly series (Sunday-based) of total and mean exertion, and
//! - an acute:chronic ratio comparing mean daily exertion over a short window
//!   (default 7 days) against a long window (default 28 days).

use academy_core::models::{Dataset, WellnessEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TrainingLoadConfig;
use crate::grouping::{group_by_period, PeriodGranularity};
use crate::rates::{round_to_hundredth, round_to_tenth};
use crate::time_window::{in_range, DateRange};

/// Load within one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPoint {
    /// Week start (ISO date of the Sunday)
    pub period: String,
    /// Entries reported that week
    pub entries: usize,
    /// Sum of exertion scores
    pub total_exertion: u32,
    /// Mean exertion, one decimal
    pub avg_exertion: f64,
}

/// Band of the acute:chronic ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Nothing reported in the chronic window
    NoData,
    /// Acute load well below the chronic baseline
    Undertrained,
    /// Acute load in line with the chronic baseline
    Optimal,
    /// Acute load rising faster than the baseline
    Caution,
    /// Acute load spike
    HighRisk,
}

/// Training load of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLoadSummary {
    /// Weekly load within the query range, oldest first
    pub weekly: Vec<LoadPoint>,
    /// Mean daily exertion over the acute window
    pub acute_load: f64,
    /// Mean daily exertion over the chronic window
    pub chronic_load: f64,
    /// `acute_load / chronic_load`, 0 without chronic load
    pub acute_chronic_ratio: f64,
    /// Band of the ratio
    pub status: LoadStatus,
}

/// Calculator for wellness-based training load
pub struct TrainingLoadCalculator {
    acute_days: i64,
    chronic_days: i64,
    optimal_min_ratio: f64,
    optimal_max_ratio: f64,
    caution_max_ratio: f64,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::from_config(&TrainingLoadConfig::default())
    }
}

impl TrainingLoadCalculator {
    /// Create a calculator from configuration
    #[must_use]
    pub fn from_config(config: &TrainingLoadConfig) -> Self {
        Self {
            acute_days: config.acute_days,
            chronic_days: config.chronic_days,
            optimal_min_ratio: config.optimal_min_ratio,
            optimal_max_ratio: config.optimal_max_ratio,
            caution_max_ratio: config.caution_max_ratio,
        }
    }

    /// Training load of `player_id`
    ///
    /// The weekly series honours `range`; the acute and chronic windows always
    /// trail `as_of`.
    #[must_use]
    pub fn summarize(
        &self,
        dataset: &Dataset,
        player_id: &str,
        range: Option<&DateRange>,
        as_of: DateTime<Utc>,
    ) -> TrainingLoadSummary {
        let entries: Vec<&WellnessEntry> = dataset.wellness_for(player_id).collect();

        let weekly = Self::weekly_series(
            entries
                .iter()
                .copied()
                .filter(|entry| in_range(entry.date, range)),
        );

        let acute_load = Self::mean_daily_exertion(&entries, as_of, self.acute_days);
        let chronic_load = Self::mean_daily_exertion(&entries, as_of, self.chronic_days);
        let acute_chronic_ratio = if chronic_load > 0.0 {
            round_to_hundredth(acute_load / chronic_load)
        } else {
            0.0
        };

        TrainingLoadSummary {
            weekly,
            acute_load: round_to_hundredth(acute_load),
            chronic_load: round_to_hundredth(chronic_load),
            acute_chronic_ratio,
            status: self.interpret_ratio(chronic_load, acute_chronic_ratio),
        }
    }

    /// Band an acute:chronic ratio
    #[must_use]
    pub fn interpret_ratio(&self, chronic_load: f64, ratio: f64) -> LoadStatus {
        if chronic_load <= 0.0 {
            LoadStatus::NoData
        } else if ratio < self.optimal_min_ratio {
            LoadStatus::Undertrained
        } else if ratio <= self.optimal_max_ratio {
            LoadStatus::Optimal
        } else if ratio <= self.caution_max_ratio {
            LoadStatus::Caution
        } else {
            LoadStatus::HighRisk
        }
    }

    /// Total and mean exertion per Sunday-based week, oldest first
    pub fn weekly_series<'a>(
        entries: impl IntoIterator<Item = &'a WellnessEntry>,
    ) -> Vec<LoadPoint> {
        group_by_period(entries, |entry| entry.date, PeriodGranularity::Week)
            .into_iter()
            .map(|(period, bucket)| {
                let total_exertion: u32 =
                    bucket.iter().map(|entry| u32::from(entry.exertion)).sum();
                LoadPoint {
                    period,
                    entries: bucket.len(),
                    total_exertion,
                    avg_exertion: round_to_tenth(f64::from(total_exertion) / bucket.len() as f64),
                }
            })
            .collect()
    }

    fn mean_daily_exertion(entries: &[&WellnessEntry], as_of: DateTime<Utc>, days: i64) -> f64 {
        if days <= 0 {
            return 0.0;
        }
        let window = DateRange::trailing_days(as_of, days);
        let total: u32 = entries
            .iter()
            .filter(|entry| window.contains(entry.date))
            .map(|entry| u32::from(entry.exertion))
            .sum();
        f64::from(total) / days as f64
    }
}
