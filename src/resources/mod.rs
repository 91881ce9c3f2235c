// ABOUTME: Read operations for workouts, exercises, routines, and the stats summary
// ABOUTME: Each operation issues its GET through ApiClient and returns a payload ready for either output mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

/// Exercise template listing and search
pub mod exercises;
/// Routine listing and lookup
pub mod routines;
/// Two-request summary view
pub mod stats;
/// Workout listing, lookup, and count
pub mod workouts;

use hevy_core::constants::paths;
use hevy_core::PageRequest;
use serde_json::{Map, Value};

/// Listable resources and where they live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `/workouts`
    Workouts,
    /// `/exercise_templates`
    Exercises,
    /// `/routines`
    Routines,
}

impl Resource {
    /// Collection path relative to the base URL
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Workouts => paths::WORKOUTS,
            Self::Exercises => paths::EXERCISE_TEMPLATES,
            Self::Routines => paths::ROUTINES,
        }
    }

    /// Key holding the records in `--json` output
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Workouts => "workouts",
            Self::Exercises => "exercises",
            Self::Routines => "routines",
        }
    }
}

/// One page of normalized records plus the request that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage {
    /// Which collection was listed
    pub resource: Resource,
    /// Page number and size sent upstream
    pub request: PageRequest,
    /// Free-text filter, when one was sent
    pub query: Option<String>,
    /// Records in upstream order
    pub records: Vec<Value>,
}

impl RecordPage {
    /// `{"page", "pageSize", ["query"], "<resource>": [...]}`
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("page".into(), Value::from(self.request.page));
        payload.insert("pageSize".into(), Value::from(self.request.page_size));
        if let Some(query) = &self.query {
            payload.insert("query".into(), Value::from(query.as_str()));
        }
        payload.insert(
            self.resource.key().into(),
            Value::Array(self.records.clone()),
        );
        Value::Object(payload)
    }
}
