// ABOUTME: Rule engine producing the prioritized coach feedback queue
// ABOUTME: Ordered predicate+message rules: feedback staleness, low attendance, high load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Feedback Queue
//!
//! Every player linked to a coach is run through a fixed, ordered list of
//! independent rules. Each rule either yields a reason string or nothing. A
//! player enters the queue when at least one rule fires, and the first
//! matching reason in declaration order becomes the primary reason.

use std::cmp::Reverse;

use academy_core::models::{Dataset, EnergyLevel, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attendance::AttendanceCalculator;
use crate::config::AnalyticsConfig;
use crate::time_window::DateRange;

/// Everything a rule may look at for one player
pub struct RuleContext<'a> {
    /// Snapshot being queried
    pub dataset: &'a Dataset,
    /// Player under evaluation
    pub player: &'a Player,
    /// Engine configuration
    pub config: &'a AnalyticsConfig,
    /// Reference instant for trailing windows
    pub as_of: DateTime<Utc>,
}

/// One predicate+message rule
#[derive(Clone, Copy)]
pub struct QueueRule {
    /// Stable rule name
    pub name: &'static str,
    /// Returns the reason text when the rule fires
    pub evaluate: fn(&RuleContext<'_>) -> Option<String>,
}

/// Rules in priority order: staleness, attendance, load
pub const DEFAULT_RULES: [QueueRule; 3] = [
    QueueRule {
        name: "feedback_staleness",
        evaluate: stale_feedback,
    },
    QueueRule {
        name: "low_attendance",
        evaluate: low_attendance,
    },
    QueueRule {
        name: "high_load",
        evaluate: high_load,
    },
];

/// A player needing coach attention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQueueEntry {
    /// Player id
    pub player_id: String,
    /// Display name
    pub player_name: String,
    /// Every reason that fired, in rule order
    pub reasons: Vec<String>,
    /// First reason in rule order
    pub primary_reason: String,
    /// Index of the rule that produced the primary reason, 0 is most urgent
    pub priority: usize,
}

/// Feedback queue builder
pub struct FeedbackQueue;

impl FeedbackQueue {
    /// Reasons fired for one player, in rule order
    #[must_use]
    pub fn evaluate(context: &RuleContext<'_>, rules: &[QueueRule]) -> Vec<String> {
        rules
            .iter()
            .filter_map(|rule| (rule.evaluate)(context))
            .collect()
    }

    /// Evaluate one player and wrap the result as a queue entry
    ///
    /// Returns `None` when no rule fires.
    #[must_use]
    pub fn entry_for(context: &RuleContext<'_>, rules: &[QueueRule]) -> Option<FeedbackQueueEntry> {
        let mut reasons = Vec::new();
        let mut priority = None;
        for (index, rule) in rules.iter().enumerate() {
            if let Some(reason) = (rule.evaluate)(context) {
                debug!(player_id = %context.player.id, rule = rule.name, "queue rule fired");
                priority.get_or_insert(index);
                reasons.push(reason);
            }
        }

        let priority = priority?;
        let primary_reason = reasons.first()?.clone();
        Some(FeedbackQueueEntry {
            player_id: context.player.id.clone(),
            player_name: context.player.name.clone(),
            primary_reason,
            reasons,
            priority,
        })
    }

    /// Queue for every player in `roster`
    ///
    /// Ordered by primary-reason priority, then by number of reasons
    /// (descending), then by player name.
    #[must_use]
    pub fn build(
        dataset: &Dataset,
        roster: &[&Player],
        config: &AnalyticsConfig,
        as_of: DateTime<Utc>,
    ) -> Vec<FeedbackQueueEntry> {
        let mut queue: Vec<FeedbackQueueEntry> = roster
            .iter()
            .filter_map(|player| {
                let context = RuleContext {
                    dataset,
                    player,
                    config,
                    as_of,
                };
                Self::entry_for(&context, &DEFAULT_RULES)
            })
            .collect();

        queue.sort_by(|a, b| {
            (a.priority, Reverse(a.reasons.len()), &a.player_name).cmp(&(
                b.priority,
                Reverse(b.reasons.len()),
                &b.player_name,
            ))
        });
        queue
    }
}

fn stale_feedback(context: &RuleContext<'_>) -> Option<String> {
    let days = context.config.queue.feedback_stale_days;
    let window = DateRange::trailing_days(context.as_of, days);
    let has_recent = context.dataset.feedback.iter().any(|feedback| {
        feedback.player_id == context.player.id
            && feedback.is_published()
            && window.contains(feedback.created_at)
    });
    (!has_recent).then(|| format!("No feedback in last {days} days"))
}

fn low_attendance(context: &RuleContext<'_>) -> Option<String> {
    let threshold = context.config.queue.low_attendance_threshold;
    let summary = AttendanceCalculator::attendance_rate(
        context.dataset,
        &context.player.id,
        None,
        &context.config.attendance,
    );
    (summary.rate < threshold)
        .then(|| format!("Attendance {}% (below {threshold}%)", summary.rate))
}

fn high_load(context: &RuleContext<'_>) -> Option<String> {
    let queue = &context.config.queue;
    let window = DateRange::trailing_days(context.as_of, queue.high_load_window_days);
    let signals = context
        .dataset
        .wellness_for(&context.player.id)
        .filter(|entry| window.contains(entry.date))
        .filter(|entry| {
            entry.exertion >= queue.high_load_min_exertion && entry.energy == EnergyLevel::Low
        })
        .count();
    (signals >= queue.high_load_min_entries).then(|| "High load signals detected".to_owned())
}
