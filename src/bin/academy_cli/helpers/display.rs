// ABOUTME: Output formatting helpers for academy-cli
// ABOUTME: Prints engine results as pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

use anyhow::Result;
use serde::Serialize;

/// Print any serializable result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
