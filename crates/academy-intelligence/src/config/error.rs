// ABOUTME: Configuration error types for analytics engine validation
// ABOUTME: Defines error variants for invalid thresholds, windows and multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Configuration error types for analytics engine validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Percentage threshold not between 0-100
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(&'static str),

    /// Thresholds that must be ordered are not
    #[error("Invalid threshold ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Time window or count must be positive
    #[error("Value must be positive: {0}")]
    NotPositive(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
