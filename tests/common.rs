// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds API clients pointed at wiremock servers and canned workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

#![allow(dead_code)]

use hevy_cli::client::ApiClient;
use hevy_cli::utils::http_client::create_custom_client;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Key sent by every test client
pub const TEST_API_KEY: &str = "test-key-0123456789";

/// Client for `server` with its own connection pool
///
/// Each `#[tokio::test]` runs its own runtime, so tests never share the
/// process-wide pooled client.
pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), TEST_API_KEY).with_http_client(create_custom_client(|b| b))
}

/// The workout record used across the suite
pub fn leg_day() -> Value {
    json!({
        "id": "w1",
        "title": "Leg Day",
        "start_time": "2024-01-01T00:00:00Z",
        "duration": 45
    })
}

/// Three exercise templates with mixed-case titles
pub fn exercise_templates() -> Value {
    json!({
        "page": 1,
        "page_count": 1,
        "exercise_templates": [
            {"id": "e1", "title": "Bench Press (Barbell)", "type": "weight_reps", "primary_muscle_group": "chest"},
            {"id": "e2", "title": "Squat (Barbell)", "type": "weight_reps", "primary_muscle_group": "quadriceps"},
            {"id": "e3", "title": "Incline BENCH Press (Dumbbell)", "type": "weight_reps", "primary_muscle_group": "chest"}
        ]
    })
}
