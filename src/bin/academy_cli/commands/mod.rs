// ABOUTME: Re-exports command modules for academy-cli
// ABOUTME: Provides access to the analytics report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

pub mod report;
