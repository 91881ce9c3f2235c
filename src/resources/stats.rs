// ABOUTME: Summary view built from two concurrent reads: workout count and recent workouts
// ABOUTME: Both requests must succeed; the first failure fails the whole view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use hevy_core::constants::paging;
use hevy_core::{HevyResult, PageRequest};
use serde_json::{json, Value};

use super::workouts::{self, WorkoutCount};
use crate::client::ApiClient;

/// Account summary
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Total workouts
    pub workout_count: WorkoutCount,
    /// Most recent workouts, newest first as returned upstream
    pub recent_workouts: Vec<Value>,
}

impl Stats {
    /// `{"workoutCount": N, "recentWorkouts": [...]}`
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "workoutCount": self.workout_count.as_value(),
            "recentWorkouts": self.recent_workouts,
        })
    }
}

/// Fetch the count and the first page of workouts concurrently
///
/// # Errors
///
/// Returns the first error from either request; no partial result
pub async fn fetch(client: &ApiClient) -> HevyResult<Stats> {
    let recent = PageRequest {
        page: paging::DEFAULT_PAGE,
        page_size: paging::STATS_RECENT_PAGE_SIZE,
    };

    let (workout_count, page) =
        tokio::try_join!(workouts::count(client), workouts::list(client, recent))?;

    Ok(Stats {
        workout_count,
        recent_workouts: page.records,
    })
}
