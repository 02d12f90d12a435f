// ABOUTME: JSON snapshot loader turning an exported dataset file into a validated Dataset
// ABOUTME: The only file surface of the analytics tools; the engine itself does no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use std::fs;
use std::path::Path;

use academy_core::errors::{AppError, AppResult};
use academy_core::models::Dataset;
use tracing::info;

/// Parse a dataset from JSON text and validate it
///
/// # Errors
///
/// Returns `SerializationError` for malformed JSON and `InvalidInput` when
/// the records break an entity invariant
pub fn parse_snapshot(json: &str) -> AppResult<Dataset> {
    let dataset: Dataset = serde_json::from_str(json)?;
    dataset.validate()?;
    Ok(dataset)
}

/// Read, parse and validate a dataset snapshot file
///
/// # Errors
///
/// Returns `InternalError` when the file cannot be read, otherwise the errors
/// of [`parse_snapshot`]
pub fn load_snapshot(path: &Path) -> AppResult<Dataset> {
    let json = fs::read_to_string(path).map_err(|error| {
        AppError::internal(format!("Failed to read snapshot {}", path.display()))
            .with_source(error)
    })?;
    let dataset = parse_snapshot(&json)?;
    info!(
        path = %path.display(),
        players = dataset.players.len(),
        sessions = dataset.sessions.len(),
        matches = dataset.matches.len(),
        "snapshot loaded"
    );
    Ok(dataset)
}
