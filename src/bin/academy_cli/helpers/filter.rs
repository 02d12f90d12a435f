// ABOUTME: Filter construction for academy-cli
// ABOUTME: Maps the shared scope flags onto an AnalyticsFilter and parses the reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use academy_analytics::errors::{AppError, AppResult};
use academy_analytics::time_window::parse_timestamp;
use academy_analytics::{AnalyticsFilter, DateRange};
use chrono::{DateTime, NaiveDate, Utc};

use crate::ScopeArgs;

/// Build the engine filter from the scope flags
///
/// A single bound leaves the other side open.
pub fn build_filter(scope: &ScopeArgs) -> AnalyticsFilter {
    let mut filter = AnalyticsFilter::new();
    if scope.from.is_some() || scope.to.is_some() {
        filter = filter.with_date_range(DateRange::from_dates(
            scope.from.unwrap_or(NaiveDate::MIN),
            scope.to.unwrap_or(NaiveDate::MAX),
        ));
    }
    if let Some(centre) = &scope.centre {
        filter = filter.with_centre(centre.as_str());
    }
    if let Some(squad) = &scope.squad {
        filter = filter.with_squad(squad.as_str());
    }
    if let Some(coach) = &scope.coach {
        filter = filter.with_coach(coach.as_str());
    }
    filter
}

/// Parse `--as-of`: an RFC 3339 instant or a bare date at midnight UTC
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the value is neither
pub fn parse_as_of(raw: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(raw).ok_or_else(|| {
        AppError::invalid_format(format!(
            "Invalid --as-of '{raw}': expected RFC 3339 or YYYY-MM-DD"
        ))
    })
}
