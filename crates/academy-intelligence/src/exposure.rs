// ABOUTME: Match exposure calculator - share of squad matches a player was selected for
// ABOUTME: Zero available matches short-circuits to an all-zero result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::collections::HashSet;

use academy_core::errors::AppResult;
use academy_core::models::{Dataset, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rates::percentage;
use crate::time_window::{in_range, DateRange};

/// Match exposure of one player over a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchExposure {
    /// Selected share of available matches in percent, 0-100
    pub exposure_rate: u32,
    /// Squad matches in range
    pub available: usize,
    /// Of those, matches the player was selected for
    pub selected: usize,
}

/// Match exposure calculator
pub struct ExposureCalculator;

impl ExposureCalculator {
    /// Exposure of the player with id `player_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the player does not exist, since the
    /// denominator depends on the player's squad
    pub fn match_exposure(
        dataset: &Dataset,
        player_id: &str,
        range: Option<&DateRange>,
    ) -> AppResult<MatchExposure> {
        let player = dataset.require_player(player_id)?;
        Ok(Self::for_player(dataset, player, range))
    }

    /// Exposure of an already resolved player
    #[must_use]
    pub fn for_player(
        dataset: &Dataset,
        player: &Player,
        range: Option<&DateRange>,
    ) -> MatchExposure {
        let available: HashSet<&str> = dataset
            .matches
            .iter()
            .filter(|fixture| fixture.squad_id == player.squad_id)
            .filter(|fixture| in_range(fixture.date, range))
            .map(|fixture| fixture.id.as_str())
            .collect();

        if available.is_empty() {
            debug!(player_id = %player.id, squad_id = %player.squad_id, "no squad matches in range");
            return MatchExposure::default();
        }

        let selected = dataset
            .selections_for(&player.id)
            .filter(|selection| selection.is_selected())
            .filter(|selection| available.contains(selection.match_id.as_str()))
            .count();

        MatchExposure {
            exposure_rate: percentage(selected, available.len()),
            available: available.len(),
            selected,
        }
    }
}
