// ABOUTME: Analytics engine configuration - banding thresholds, windows and multipliers
// ABOUTME: Type-safe defaults with validation; loaded and overridden by the outer layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Analytics Configuration Module
//!
//! Groups every tunable number the engine uses into domain-specific sections.
//! Defaults reproduce the academy's reporting rules; the engine never reads the
//! environment itself, callers build or load an [`AnalyticsConfig`] and pass it in.

mod error;

pub use error::ConfigError;

use academy_core::constants::limits::WINDOW_DAYS_MAX;
use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Attendance label banding
    pub attendance: AttendanceConfig,
    /// Readiness label thresholds
    pub readiness: ReadinessConfig,
    /// Player snapshot windows and sizes
    pub player: PlayerViewConfig,
    /// Feedback queue rule parameters
    pub queue: FeedbackQueueConfig,
    /// Training load windows and ratio bands
    pub load: TrainingLoadConfig,
    /// Forecast multipliers
    pub forecast: ForecastConfig,
}

/// Attendance rate label banding (percent)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Rates at or above this are "Strong"
    pub strong_threshold: u32,
    /// Rates at or above this (and below strong) are "Moderate"
    pub moderate_threshold: u32,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 85,
            moderate_threshold: 70,
        }
    }
}

/// Readiness label thresholds (percent)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Minimum attendance for "On Track"
    pub on_track_attendance: u32,
    /// Minimum match exposure for "On Track"
    pub on_track_exposure: u32,
    /// Minimum attendance for "Nearly There"
    pub nearly_there_attendance: u32,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            on_track_attendance: 85,
            on_track_exposure: 50,
            nearly_there_attendance: 70,
        }
    }
}

/// Player snapshot windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerViewConfig {
    /// Trailing window for "sessions attended recently" (days)
    pub trailing_attendance_days: i64,
    /// Number of recent squad matches listed
    pub recent_match_count: usize,
}

impl Default for PlayerViewConfig {
    fn default() -> Self {
        Self {
            trailing_attendance_days: 30,
            recent_match_count: 5,
        }
    }
}

/// Feedback queue rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackQueueConfig {
    /// Published feedback older than this is stale (days)
    pub feedback_stale_days: i64,
    /// Full-history attendance below this raises an alert (percent)
    pub low_attendance_threshold: u32,
    /// Trailing window scanned for high-load signals (days)
    pub high_load_window_days: i64,
    /// Minimum exertion of a high-load signal
    pub high_load_min_exertion: u8,
    /// Number of high-load signals that raises an alert
    pub high_load_min_entries: usize,
}

impl Default for FeedbackQueueConfig {
    fn default() -> Self {
        Self {
            feedback_stale_days: 60,
            low_attendance_threshold: 70,
            high_load_window_days: 14,
            high_load_min_exertion: 4,
            high_load_min_entries: 3,
        }
    }
}

/// Training load windows and acute:chronic ratio bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadConfig {
    /// Acute window (days)
    pub acute_days: i64,
    /// Chronic window (days)
    pub chronic_days: i64,
    /// Ratios below this are undertrained
    pub optimal_min_ratio: f64,
    /// Ratios up to this are optimal
    pub optimal_max_ratio: f64,
    /// Ratios up to this are caution, above is high risk
    pub caution_max_ratio: f64,
}

impl Default for TrainingLoadConfig {
    fn default() -> Self {
        Self {
            acute_days: 7,
            chronic_days: 28,
            optimal_min_ratio: 0.8,
            optimal_max_ratio: 1.3,
            caution_max_ratio: 1.5,
        }
    }
}

/// Placeholder growth multipliers for cohort forecasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Multiplier applied for the three-month horizon
    pub three_month_multiplier: f64,
    /// Multiplier applied for the six-month horizon
    pub six_month_multiplier: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            three_month_multiplier: 1.05,
            six_month_multiplier: 1.10,
        }
    }
}

impl AnalyticsConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_attendance()?;
        self.validate_readiness()?;
        self.validate_windows()?;
        self.validate_load()?;
        self.validate_forecast()
    }

    fn validate_attendance(&self) -> Result<(), ConfigError> {
        let attendance = &self.attendance;
        if attendance.strong_threshold > 100 || attendance.moderate_threshold > 100 {
            return Err(ConfigError::InvalidPercentage(
                "attendance thresholds must be between 0 and 100",
            ));
        }
        if attendance.moderate_threshold > attendance.strong_threshold {
            return Err(ConfigError::InvalidOrdering(
                "moderate attendance threshold must not exceed strong threshold",
            ));
        }
        if self.queue.low_attendance_threshold > 100 {
            return Err(ConfigError::InvalidPercentage(
                "low attendance threshold must be between 0 and 100",
            ));
        }
        Ok(())
    }

    fn validate_readiness(&self) -> Result<(), ConfigError> {
        let readiness = &self.readiness;
        if readiness.on_track_attendance > 100
            || readiness.on_track_exposure > 100
            || readiness.nearly_there_attendance > 100
        {
            return Err(ConfigError::InvalidPercentage(
                "readiness thresholds must be between 0 and 100",
            ));
        }
        if readiness.nearly_there_attendance > readiness.on_track_attendance {
            return Err(ConfigError::InvalidOrdering(
                "nearly-there attendance must not exceed on-track attendance",
            ));
        }
        Ok(())
    }

    fn validate_windows(&self) -> Result<(), ConfigError> {
        check_window(
            self.player.trailing_attendance_days,
            "trailing attendance window",
        )?;
        check_window(self.queue.feedback_stale_days, "feedback staleness window")?;
        check_window(self.queue.high_load_window_days, "high load window")?;
        if self.queue.high_load_min_entries == 0 {
            return Err(ConfigError::NotPositive("high load minimum entries"));
        }
        if !(1..=5).contains(&self.queue.high_load_min_exertion) {
            return Err(ConfigError::ValueOutOfRange(
                "high load minimum exertion must be between 1 and 5",
            ));
        }
        Ok(())
    }

    fn validate_load(&self) -> Result<(), ConfigError> {
        let load = &self.load;
        check_window(load.acute_days, "training load windows")?;
        check_window(load.chronic_days, "training load windows")?;
        if load.acute_days > load.chronic_days {
            return Err(ConfigError::InvalidOrdering(
                "acute window must not exceed chronic window",
            ));
        }
        if !(load.optimal_min_ratio <= load.optimal_max_ratio
            && load.optimal_max_ratio <= load.caution_max_ratio)
        {
            return Err(ConfigError::InvalidOrdering(
                "load ratio bands must be ascending",
            ));
        }
        Ok(())
    }

    fn validate_forecast(&self) -> Result<(), ConfigError> {
        let forecast = &self.forecast;
        if !(forecast.three_month_multiplier > 0.0 && forecast.six_month_multiplier > 0.0) {
            return Err(ConfigError::NotPositive("forecast multipliers"));
        }
        Ok(())
    }
}

/// Windows must be positive and no longer than [`WINDOW_DAYS_MAX`]
fn check_window(days: i64, name: &'static str) -> Result<(), ConfigError> {
    if days <= 0 {
        return Err(ConfigError::NotPositive(name));
    }
    if days > WINDOW_DAYS_MAX {
        return Err(ConfigError::ValueOutOfRange(name));
    }
    Ok(())
}
