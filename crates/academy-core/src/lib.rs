// ABOUTME: Core types and constants for the academy analytics platform
// ABOUTME: Foundation crate with entity models, dataset snapshots, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

#![deny(unsafe_code)]

//! # Academy Core
//!
//! Foundation crate providing shared types for the academy analytics engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Domain limits and service names
//! - **models**: Read-only entity snapshots (players, sessions, matches, wellness, feedback)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models and the `Dataset` snapshot
pub mod models;
