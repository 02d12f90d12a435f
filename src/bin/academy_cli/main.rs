// ABOUTME: Academy CLI - renders analytics for a dataset snapshot as JSON
// ABOUTME: Player, admin, coach and forecast reports scoped by date, centre and squad
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors
//!
//! Usage:
//! ```bash
//! # Player snapshot over a date range
//! academy-cli --data snapshot.json player p-001 --from 2025-01-01 --to 2025-03-31
//!
//! # Admin dashboard for one centre, grouped by month
//! academy-cli --data snapshot.json admin --centre c-north --granularity month
//!
//! # Coach dashboard with the feedback queue, pinned to a reference time
//! academy-cli --data snapshot.json coach coach-7 --as-of 2025-04-01T00:00:00Z
//!
//! # Forecast of the active player count
//! academy-cli --data snapshot.json forecast
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use academy_analytics::config::load_analytics_config;
use academy_analytics::grouping::PeriodGranularity;
use academy_analytics::logging::LoggingConfig;
use academy_analytics::snapshot::load_snapshot;
use academy_analytics::AnalyticsEngine;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use helpers::filter::{build_filter, parse_as_of};

#[derive(Parser)]
#[command(
    name = "academy-cli",
    about = "Academy analytics CLI",
    long_about = "Compute attendance, exposure, wellness, cohort and queue analytics from a JSON dataset snapshot."
)]
struct Cli {
    /// Path to the dataset snapshot (JSON)
    #[arg(long)]
    data: PathBuf,

    #[command(flatten)]
    scope: ScopeArgs,

    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Filter flags shared by every report
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// First day included (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub from: Option<NaiveDate>,

    /// Last day included (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub to: Option<NaiveDate>,

    /// Restrict to one centre
    #[arg(long, global = true)]
    pub centre: Option<String>,

    /// Restrict to one squad
    #[arg(long, global = true)]
    pub squad: Option<String>,

    /// Restrict sessions to one coach
    #[arg(long, global = true)]
    pub coach: Option<String>,

    /// Bucket size of time series (week or month)
    #[arg(long, global = true, default_value_t = PeriodGranularity::Week)]
    pub granularity: PeriodGranularity,

    /// Reference instant for trailing windows (RFC 3339 or YYYY-MM-DD), defaults to now
    #[arg(long, global = true, value_parser = parse_as_of)]
    pub as_of: Option<DateTime<Utc>>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analytics snapshot of one player
    Player {
        /// Player id
        player_id: String,
    },

    /// Admin dashboard: KPIs, attendance series, pipeline and participation
    Admin,

    /// Coach dashboard including the feedback queue
    Coach {
        /// Coach id
        coach_id: String,
    },

    /// Projection of a cohort size
    Forecast {
        /// Size to project, defaults to the active players in scope
        #[arg(long)]
        current: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = load_analytics_config()?;
    let dataset = load_snapshot(&cli.data)?;

    let mut engine = AnalyticsEngine::new(&dataset).with_config(config);
    if let Some(as_of) = cli.scope.as_of {
        engine = engine.at(as_of);
    }
    debug!(as_of = %engine.as_of(), "engine ready");

    let filter = build_filter(&cli.scope);
    match cli.command {
        Command::Player { player_id } => commands::report::player(&engine, &player_id, &filter)?,
        Command::Admin => commands::report::admin(&engine, &filter, cli.scope.granularity)?,
        Command::Coach { coach_id } => commands::report::coach(&engine, &coach_id, &filter)?,
        Command::Forecast { current } => commands::report::forecast(&engine, &filter, current)?,
    }

    Ok(())
}
