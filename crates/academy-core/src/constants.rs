// ABOUTME: Application-wide constants for the academy analytics platform
// ABOUTME: Service names and domain limits shared by engine and outer layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

/// Service names used in structured logging
pub mod service_names {
    /// Default service name reported by the logging layer
    pub const ACADEMY_ANALYTICS: &str = "academy-analytics";
}

/// Domain limits enforced when validating snapshots
pub mod limits {
    /// Lowest self-reported exertion score
    pub const EXERTION_MIN: u8 = 1;
    /// Highest self-reported exertion score
    pub const EXERTION_MAX: u8 = 5;
    /// Lowest valid feedback period month
    pub const MONTH_MIN: u32 = 1;
    /// Highest valid feedback period month
    pub const MONTH_MAX: u32 = 12;
    /// Longest trailing window a configuration may ask for (days)
    pub const WINDOW_DAYS_MAX: i64 = 36_500;
}
