// ABOUTME: Workout read operations: paginated list, single workout, and total count
// ABOUTME: The count falls back to the raw body when no count field is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use hevy_core::constants::paths;
use hevy_core::records::first_field;
use hevy_core::{extract_records, HevyResult, PageRequest, Query};
use serde_json::{json, Value};
use tracing::warn;

use super::{RecordPage, Resource};
use crate::client::{path_segment, ApiClient};

/// Fields probed, in order, for the workout total
const COUNT_KEYS: &[&str] = &["workout_count", "count"];

/// Total number of workouts
///
/// `Raw` keeps the body as-is when it carries no recognizable count field;
/// the real API's guaranteed shape for this endpoint is unverified.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutCount {
    /// Count read from the response
    Known(u64),
    /// Response without a count field
    Raw(Value),
}

impl WorkoutCount {
    /// Interpret a count response body
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        match first_field(&body, COUNT_KEYS).and_then(Value::as_u64) {
            Some(count) => Self::Known(count),
            None => {
                warn!("count response has no count field, keeping raw body");
                Self::Raw(body)
            }
        }
    }

    /// `{"count": N}` or the raw body
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Known(count) => json!({ "count": count }),
            Self::Raw(body) => body.clone(),
        }
    }

    /// The count as a JSON value: a number, or the raw body
    #[must_use]
    pub fn as_value(&self) -> Value {
        match self {
            Self::Known(count) => Value::from(*count),
            Self::Raw(body) => body.clone(),
        }
    }
}

/// One page of workouts
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn list(client: &ApiClient, request: PageRequest) -> HevyResult<RecordPage> {
    let body = client
        .get_value(Resource::Workouts.path(), &request.to_query())
        .await?;

    Ok(RecordPage {
        resource: Resource::Workouts,
        request,
        query: None,
        records: extract_records(body),
    })
}

/// A single workout, exactly as returned
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn show(client: &ApiClient, id: &str) -> HevyResult<Value> {
    let path = format!("{}/{}", paths::WORKOUTS, path_segment(id));
    client.get_value(&path, &Query::new()).await
}

/// Total number of workouts
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn count(client: &ApiClient) -> HevyResult<WorkoutCount> {
    let body = client.get_value(paths::WORKOUTS_COUNT, &Query::new()).await?;
    Ok(WorkoutCount::from_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_reads_known_fields() {
        assert_eq!(
            WorkoutCount::from_body(json!({"workout_count": 42})),
            WorkoutCount::Known(42)
        );
        assert_eq!(
            WorkoutCount::from_body(json!({"count": 7})),
            WorkoutCount::Known(7)
        );
    }

    #[test]
    fn test_count_falls_back_to_raw_body() {
        let body = json!({"total": "many"});
        let count = WorkoutCount::from_body(body.clone());
        assert_eq!(count, WorkoutCount::Raw(body.clone()));
        assert_eq!(count.to_json(), body);
    }

    #[test]
    fn test_count_json() {
        assert_eq!(WorkoutCount::Known(3).to_json(), json!({"count": 3}));
        assert_eq!(WorkoutCount::Known(3).as_value(), json!(3));
    }
}
