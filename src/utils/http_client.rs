// ABOUTME: Shared HTTP client utilities with connection pooling
// ABOUTME: Provides a singleton client so every API call reuses one connection pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// User agent sent on every request
#[must_use]
pub fn user_agent() -> String {
    format!("hevy-cli/{}", env!("CARGO_PKG_VERSION"))
}

/// Get or create the shared HTTP client
///
/// No request timeout is configured; calls inherit the transport defaults.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| create_custom_client(|builder| builder))
}

/// Create a new HTTP client with custom configuration
///
/// Falls back to a default client if the builder fails.
pub fn create_custom_client<F>(config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    let builder = ClientBuilder::new().user_agent(user_agent());
    config_fn(builder).build().unwrap_or_else(|_| Client::new())
}
