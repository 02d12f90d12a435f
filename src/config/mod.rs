// ABOUTME: Configuration module for the academy analytics tools
// ABOUTME: Loads engine thresholds from defaults overlaid with environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

//! Configuration
//!
//! The engine crate owns [`AnalyticsConfig`](academy_intelligence::AnalyticsConfig)
//! and never reads the environment. This module is the outer layer that does.

/// Environment variable overlay for the engine configuration
pub mod environment;

pub use environment::load_analytics_config;
