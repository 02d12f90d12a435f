// ABOUTME: Environment overlay for analytics engine configuration
// ABOUTME: Parses ACADEMY_* variables onto the defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Environment-based configuration loading
//!
//! | Variable | Field |
//! |---|---|
//! | `ACADEMY_ATTENDANCE_STRONG_THRESHOLD` | `attendance.strong_threshold` |
//! | `ACADEMY_ATTENDANCE_MODERATE_THRESHOLD` | `attendance.moderate_threshold` |
//! | `ACADEMY_READINESS_ON_TRACK_ATTENDANCE` | `readiness.on_track_attendance` |
//! | `ACADEMY_READINESS_ON_TRACK_EXPOSURE` | `readiness.on_track_exposure` |
//! | `ACADEMY_READINESS_NEARLY_THERE_ATTENDANCE` | `readiness.nearly_there_attendance` |
//! | `ACADEMY_PLAYER_TRAILING_DAYS` | `player.trailing_attendance_days` |
//! | `ACADEMY_PLAYER_RECENT_MATCHES` | `player.recent_match_count` |
//! | `ACADEMY_QUEUE_FEEDBACK_STALE_DAYS` | `queue.feedback_stale_days` |
//! | `ACADEMY_QUEUE_LOW_ATTENDANCE` | `queue.low_attendance_threshold` |
//! | `ACADEMY_QUEUE_HIGH_LOAD_DAYS` | `queue.high_load_window_days` |
//! | `ACADEMY_QUEUE_HIGH_LOAD_EXERTION` | `queue.high_load_min_exertion` |
//! | `ACADEMY_QUEUE_HIGH_LOAD_ENTRIES` | `queue.high_load_min_entries` |
//! | `ACADEMY_LOAD_ACUTE_DAYS` | `load.acute_days` |
//! | `ACADEMY_LOAD_CHRONIC_DAYS` | `load.chronic_days` |
//! | `ACADEMY_FORECAST_3M_MULTIPLIER` | `forecast.three_month_multiplier` |
//! | `ACADEMY_FORECAST_6M_MULTIPLIER` | `forecast.six_month_multiplier` |

use std::env;
use std::str::FromStr;

use academy_core::errors::{AppError, AppResult};
use academy_intelligence::AnalyticsConfig;
use tracing::{debug, warn};

/// Load the engine configuration: defaults, then `ACADEMY_*` overrides
///
/// # Errors
///
/// Returns a `ConfigInvalid` error when a variable does not parse or the
/// resulting configuration fails validation
pub fn load_analytics_config() -> AppResult<AnalyticsConfig> {
    let config = apply_env_overrides(AnalyticsConfig::default())?;
    config.validate().map_err(|error| {
        warn!(%error, "analytics configuration rejected");
        AppError::config(error.to_string()).with_source(error)
    })?;
    Ok(config)
}

fn apply_env_overrides(mut config: AnalyticsConfig) -> AppResult<AnalyticsConfig> {
    let attendance = &mut config.attendance;
    apply_env_var(
        "ACADEMY_ATTENDANCE_STRONG_THRESHOLD",
        &mut attendance.strong_threshold,
    )?;
    apply_env_var(
        "ACADEMY_ATTENDANCE_MODERATE_THRESHOLD",
        &mut attendance.moderate_threshold,
    )?;

    let readiness = &mut config.readiness;
    apply_env_var(
        "ACADEMY_READINESS_ON_TRACK_ATTENDANCE",
        &mut readiness.on_track_attendance,
    )?;
    apply_env_var(
        "ACADEMY_READINESS_ON_TRACK_EXPOSURE",
        &mut readiness.on_track_exposure,
    )?;
    apply_env_var(
        "ACADEMY_READINESS_NEARLY_THERE_ATTENDANCE",
        &mut readiness.nearly_there_attendance,
    )?;

    apply_env_var(
        "ACADEMY_PLAYER_TRAILING_DAYS",
        &mut config.player.trailing_attendance_days,
    )?;
    apply_env_var(
        "ACADEMY_PLAYER_RECENT_MATCHES",
        &mut config.player.recent_match_count,
    )?;

    let queue = &mut config.queue;
    apply_env_var(
        "ACADEMY_QUEUE_FEEDBACK_STALE_DAYS",
        &mut queue.feedback_stale_days,
    )?;
    apply_env_var(
        "ACADEMY_QUEUE_LOW_ATTENDANCE",
        &mut queue.low_attendance_threshold,
    )?;
    apply_env_var("ACADEMY_QUEUE_HIGH_LOAD_DAYS", &mut queue.high_load_window_days)?;
    apply_env_var(
        "ACADEMY_QUEUE_HIGH_LOAD_EXERTION",
        &mut queue.high_load_min_exertion,
    )?;
    apply_env_var(
        "ACADEMY_QUEUE_HIGH_LOAD_ENTRIES",
        &mut queue.high_load_min_entries,
    )?;

    apply_env_var("ACADEMY_LOAD_ACUTE_DAYS", &mut config.load.acute_days)?;
    apply_env_var("ACADEMY_LOAD_CHRONIC_DAYS", &mut config.load.chronic_days)?;

    apply_env_var(
        "ACADEMY_FORECAST_3M_MULTIPLIER",
        &mut config.forecast.three_month_multiplier,
    )?;
    apply_env_var(
        "ACADEMY_FORECAST_6M_MULTIPLIER",
        &mut config.forecast.six_month_multiplier,
    )?;

    Ok(config)
}

/// Parse and apply one variable when it is set
fn apply_env_var<T: FromStr>(name: &str, target: &mut T) -> AppResult<()> {
    if let Ok(raw) = env::var(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {name}: '{raw}'")))?;
        debug!(variable = name, value = %raw, "configuration override applied");
    }
    Ok(())
}
