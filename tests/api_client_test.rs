// ABOUTME: Integration tests for the authenticated API client
// ABOUTME: Covers headers, query handling, body classification, and error mapping against wiremock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{test_client, TEST_API_KEY};
use hevy_cli::client::ApiClient;
use hevy_cli::utils::http_client::create_custom_client;
use hevy_core::{HevyError, Query};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_sends_auth_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts"))
        .and(header("api-key", TEST_API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workouts": []})))
        .expect(1)
        .mount(&server)
        .await;

    let body = test_client(&server)
        .get_value("/workouts", &Query::new())
        .await
        .unwrap();
    assert_eq!(body, json!({"workouts": []}));
}

#[tokio::test]
async fn test_absent_params_are_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercise_templates"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = Query::new()
        .param("page", Some(0))
        .param("pageSize", None::<u32>)
        .param("query", None::<&str>)
        .param("archived", Some(false));
    test_client(&server)
        .get_value("/exercise_templates", &query)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let url = &requests[0].url;
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["page", "archived"]);
    assert_eq!(url.query(), Some("page=0&archived=false"));
}

#[tokio::test]
async fn test_empty_query_leaves_url_without_question_mark() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workout_count": 3})))
        .mount(&server)
        .await;

    test_client(&server)
        .get_value("/workouts/count", &Query::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_base_url_with_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/routines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routines": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/v1/", server.uri()), TEST_API_KEY)
        .with_http_client(create_custom_client(|b| b));
    client.get_value("routines", &Query::new()).await.unwrap();
}

#[tokio::test]
async fn test_non_json_success_body_is_kept_as_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/count"))
        .respond_with(ResponseTemplate::new(200).set_body_string("17"))
        .mount(&server)
        .await;

    let body = test_client(&server)
        .get_value("/workouts/count", &Query::new())
        .await
        .unwrap();
    assert_eq!(body, Value::String("17".into()));
}

#[tokio::test]
async fn test_typed_get_deserializes_body() {
    #[derive(serde::Deserialize)]
    struct Count {
        workout_count: u64,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workout_count": 9})))
        .mount(&server)
        .await;

    let count: Count = test_client(&server)
        .get("/workouts/count", &Query::new())
        .await
        .unwrap();
    assert_eq!(count.workout_count, 9);
}

#[tokio::test]
async fn test_error_uses_json_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_value("/workouts", &Query::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Hevy API error 401: Invalid API key");
}

#[tokio::test]
async fn test_error_without_message_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "nope"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/routines"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let err = client
        .get_value("/workouts/missing", &Query::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Hevy API error 404: Not Found");

    let err = client
        .get_value("/routines", &Query::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Hevy API error 500: Internal Server Error");
}

#[tokio::test]
async fn test_unknown_status_without_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts"))
        .respond_with(ResponseTemplate::new(599))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_value("/workouts", &Query::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Hevy API error 599: Unknown status");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:1", TEST_API_KEY)
        .with_http_client(create_custom_client(|b| b));

    let err = client
        .get_value("/workouts", &Query::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HevyError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[test]
fn test_invalid_base_url_is_reported() {
    let client = ApiClient::new("not a url", TEST_API_KEY);
    let err = client.url("/workouts", &Query::new()).unwrap_err();
    assert!(matches!(err, HevyError::InvalidUrl(_)));
}
