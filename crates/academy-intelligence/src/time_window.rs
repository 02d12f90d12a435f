// ABOUTME: Time-window filter deciding whether a timestamp falls inside a date range
// ABOUTME: Inclusive on both bounds; absent range matches everything, malformed input never matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive `[from, to]` range of instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant included
    pub from: DateTime<Utc>,
    /// Last instant included
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Create a range from two instants
    #[must_use]
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Range covering whole calendar days, from midnight of `from` to the last
    /// second of `to`
    #[must_use]
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Self {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Self {
            from: from.and_time(NaiveTime::MIN).and_utc(),
            to: to.and_time(end_of_day).and_utc(),
        }
    }

    /// The `days` leading up to and including `as_of`
    ///
    /// Saturates at the earliest representable instant.
    #[must_use]
    pub fn trailing_days(as_of: DateTime<Utc>, days: i64) -> Self {
        let from = TimeDelta::try_days(days.max(0))
            .and_then(|span| as_of.checked_sub_signed(span))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { from, to: as_of }
    }

    /// Whether `timestamp` lies within the range, bounds included
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.from <= timestamp && timestamp <= self.to
    }
}

/// Whether `timestamp` passes an optional range filter
///
/// An absent range is an open query and matches every timestamp.
#[must_use]
pub fn in_range(timestamp: DateTime<Utc>, range: Option<&DateRange>) -> bool {
    range.map_or(true, |r| r.contains(timestamp))
}

/// Like [`in_range`] for a raw RFC 3339 or `YYYY-MM-DD` string
///
/// Unparsable input is a filter miss and returns `false`, even for open queries.
#[must_use]
pub fn in_range_raw(raw: &str, range: Option<&DateRange>) -> bool {
    parse_timestamp(raw).is_some_and(|timestamp| in_range(timestamp, range))
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date.and_time(NaiveTime::MIN).and_utc()),
        Err(e) => {
            debug!(raw, error = %e, "treating malformed timestamp as out of range");
            None
        }
    }
}
