// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, HTTP headers, API defaults, and envelope field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

/// Environment variable names read by the client
pub mod env {
    /// Credential; takes precedence over the persisted config file
    pub const API_KEY: &str = "HEVY_API_KEY";
    /// Base URL override for the upstream API
    pub const API_URL: &str = "HEVY_API_URL";
    /// Log output format (`pretty`, `compact`, `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Upstream API defaults
pub mod api {
    /// Human name used as the prefix of API error messages
    pub const NAME: &str = "Hevy API";
    /// Default base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.hevyapp.com/v1";
    /// Header carrying the credential on every request
    pub const KEY_HEADER: &str = "api-key";
    /// Value of the `accept` header
    pub const ACCEPT_JSON: &str = "application/json";
}

/// Query parameter names and paging defaults
pub mod paging {
    /// Page number parameter
    pub const PAGE_PARAM: &str = "page";
    /// Page size parameter
    pub const PAGE_SIZE_PARAM: &str = "pageSize";
    /// Free-text filter parameter
    pub const QUERY_PARAM: &str = "query";
    /// First page
    pub const DEFAULT_PAGE: u32 = 1;
    /// Records per page unless overridden
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    /// Page size used by `exercises search`
    pub const SEARCH_PAGE_SIZE: u32 = 100;
    /// Page size used for the recent-workouts half of `stats`
    pub const STATS_RECENT_PAGE_SIZE: u32 = 5;
}

/// Resource paths relative to the base URL
pub mod paths {
    /// Workouts collection
    pub const WORKOUTS: &str = "/workouts";
    /// Workout total
    pub const WORKOUTS_COUNT: &str = "/workouts/count";
    /// Exercise templates collection
    pub const EXERCISE_TEMPLATES: &str = "/exercise_templates";
    /// Routines collection
    pub const ROUTINES: &str = "/routines";
}

/// Envelope field names probed by the normalizer, in priority order
pub const ENVELOPE_KEYS: &[&str] = &[
    "data",
    "items",
    "results",
    "workouts",
    "exercises",
    "exercise_templates",
    "routines",
];

/// Config file location relative to the home directory
pub mod config_file {
    /// Directory under `$HOME`
    pub const DIR_NAME: &str = ".hevy";
    /// File name inside that directory
    pub const FILE_NAME: &str = "config.json";
}

/// Placeholder rendered for missing values in human mode
pub const PLACEHOLDER: &str = "-";
