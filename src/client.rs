// ABOUTME: Authenticated GET client for the Hevy API with uniform success/error classification
// ABOUTME: Non-success statuses become HevyError::Api; network failures stay HevyError::Transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! # API Client
//!
//! A single `get` abstraction used by every command. The client:
//!
//! - joins the base URL and resource path, appending only present query params
//! - sends the `api-key` and `accept: application/json` headers
//! - parses the body as JSON when the response announces JSON, otherwise
//!   keeps it as an opaque string
//! - maps non-success statuses to `"Hevy API error <status>: <detail>"`
//!
//! No retries and no explicit timeout.

use hevy_core::constants::api;
use hevy_core::{HevyError, HevyResult, Query};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::environment;
use crate::utils::http_client::shared_client;

/// Authenticated client for the Hevy API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Client for `base_url` authenticating with `api_key`
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: shared_client().clone(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Client for the base URL from `HEVY_API_URL` (or the default)
    #[must_use]
    pub fn from_env(api_key: impl Into<String>) -> Self {
        Self::new(environment::api_base_url(), api_key)
    }

    /// Replace the underlying HTTP client
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Configured base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `path` with the present `query` parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if base URL and path do not form a valid URL
    pub fn url(&self, path: &str, query: &Query) -> HevyResult<Url> {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET `path` and deserialize the body into `T`
    ///
    /// # Errors
    ///
    /// Returns `Transport` for network failures, `Api` for non-success
    /// statuses, and `Serialization` if the body does not fit `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> HevyResult<T> {
        let body = self.get_value(path, query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// GET `path` and return the body as a dynamic JSON value
    ///
    /// # Errors
    ///
    /// Returns `Transport` for network failures and `Api` for non-success statuses
    pub async fn get_value(&self, path: &str, query: &Query) -> HevyResult<Value> {
        let url = self.url(path, query)?;
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .header(api::KEY_HEADER, &self.api_key)
            .header(ACCEPT, api::ACCEPT_JSON)
            .send()
            .await?;

        classify(response).await
    }
}

/// Percent-encode a user-supplied id for use as a path segment
#[must_use]
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

async fn classify(response: Response) -> HevyResult<Value> {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.to_ascii_lowercase().contains("json"));
    let text = response.text().await?;
    debug!(status = status.as_u16(), is_json, bytes = text.len(), "response received");

    let parsed = if !is_json {
        None
    } else if text.trim().is_empty() {
        Some(Value::Null)
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(value),
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => None,
        }
    };

    if status.is_success() {
        return Ok(parsed.unwrap_or(Value::String(text)));
    }

    let detail = parsed
        .as_ref()
        .and_then(error_message)
        .unwrap_or_else(|| reason_phrase(status));
    Err(HevyError::api(api::NAME, status.as_u16(), detail))
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::String(message) => Some(message.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_owned()
}
