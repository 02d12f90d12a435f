// ABOUTME: Deterministic cohort-size projection over three and six month horizons
// ABOUTME: Applies fixed placeholder growth multipliers, not a fitted trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use serde::{Deserialize, Serialize};

use crate::config::ForecastConfig;

/// Projected cohort sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Size today
    pub current: u32,
    /// Projected size in three months
    #[serde(rename = "in3Months")]
    pub in_3_months: u32,
    /// Projected size in six months
    #[serde(rename = "in6Months")]
    pub in_6_months: u32,
}

/// Placeholder projector
///
/// Multiplies the current size by fixed factors (1.05 and 1.10 by default) and
/// rounds. This is a deliberate stand-in until enough history exists for a
/// fitted trend.
pub struct ForecastProjector;

impl ForecastProjector {
    /// Project `current` over both horizons
    #[must_use]
    pub fn project(current: u32, config: &ForecastConfig) -> Forecast {
        Forecast {
            current,
            in_3_months: scale(current, config.three_month_multiplier),
            in_6_months: scale(current, config.six_month_multiplier),
        }
    }
}

fn scale(current: u32, multiplier: f64) -> u32 {
    (f64::from(current) * multiplier).round().max(0.0) as u32
}
