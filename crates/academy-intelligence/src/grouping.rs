// ABOUTME: Generic group-by-key and group-by-period primitives for every metric
// ABOUTME: Weeks start on Sunday and are keyed by ISO date; months are keyed YYYY-MM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Bucket size for time series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodGranularity {
    /// Sunday-based calendar weeks
    #[default]
    Week,
    /// Calendar months
    Month,
}

impl fmt::Display for PeriodGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => f.write_str("week"),
            Self::Month => f.write_str("month"),
        }
    }
}

impl FromStr for PeriodGranularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            other => Err(format!("unknown granularity '{other}', expected week or month")),
        }
    }
}

/// Group records by a key
///
/// Buckets are ordered by key; records keep their input order inside each bucket.
pub fn group_by<'a, T, K, F>(
    records: impl IntoIterator<Item = &'a T>,
    key_fn: F,
) -> BTreeMap<K, Vec<&'a T>>
where
    T: 'a,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for record in records {
        groups.entry(key_fn(record)).or_default().push(record);
    }
    groups
}

/// Group records by the week or month their date falls in
///
/// Keys sort chronologically because both formats are zero-padded.
pub fn group_by_period<'a, T, F>(
    records: impl IntoIterator<Item = &'a T>,
    date_fn: F,
    granularity: PeriodGranularity,
) -> BTreeMap<String, Vec<&'a T>>
where
    T: 'a,
    F: Fn(&T) -> DateTime<Utc>,
{
    group_by(records, |record| {
        period_key(date_fn(record).date_naive(), granularity)
    })
}

/// Bucket key of a date: the Sunday starting its week, or `YYYY-MM`
#[must_use]
pub fn period_key(date: NaiveDate, granularity: PeriodGranularity) -> String {
    match granularity {
        PeriodGranularity::Week => week_start(date).format("%Y-%m-%d").to_string(),
        PeriodGranularity::Month => format!("{:04}-{:02}", date.year(), date.month()),
    }
}

/// The Sunday on or before `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}
