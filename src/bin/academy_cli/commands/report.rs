// ABOUTME: Report commands for academy-cli
// ABOUTME: Runs one engine query per subcommand and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use academy_analytics::grouping::PeriodGranularity;
use academy_analytics::{AnalyticsEngine, AnalyticsFilter};
use anyhow::Result;
use tracing::info;

use crate::helpers::display::print_json;

/// Player analytics snapshot
pub fn player(engine: &AnalyticsEngine<'_>, player_id: &str, filter: &AnalyticsFilter) -> Result<()> {
    info!(player_id, "building player report");
    let analytics = engine.player_analytics(player_id, filter.range())?;
    print_json(&analytics)
}

/// Admin dashboard
pub fn admin(
    engine: &AnalyticsEngine<'_>,
    filter: &AnalyticsFilter,
    granularity: PeriodGranularity,
) -> Result<()> {
    info!(%granularity, "building admin report");
    print_json(&engine.admin_dashboard(filter, granularity))
}

/// Coach dashboard
pub fn coach(engine: &AnalyticsEngine<'_>, coach_id: &str, filter: &AnalyticsFilter) -> Result<()> {
    info!(coach_id, "building coach report");
    print_json(&engine.coach_dashboard(coach_id, filter))
}

/// Forecast of `current`, or of the active players in scope
pub fn forecast(
    engine: &AnalyticsEngine<'_>,
    filter: &AnalyticsFilter,
    current: Option<u32>,
) -> Result<()> {
    let forecast = match current {
        Some(current) => engine.forecast(current),
        None => engine.admin_summary(filter).forecast,
    };
    print_json(&forecast)
}
