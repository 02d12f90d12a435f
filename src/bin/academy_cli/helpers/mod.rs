// ABOUTME: Re-exports helper modules for academy-cli
// ABOUTME: Provides filter construction and output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

pub mod display;
pub mod filter;
