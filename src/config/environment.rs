// ABOUTME: Environment configuration accessors for the credential and API base URL
// ABOUTME: Empty variables are treated as unset so `HEVY_API_KEY=` does not shadow the config file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use std::env;

use hevy_core::constants::{api, env as env_names};

/// Read an environment variable, treating empty values as unset
#[must_use]
pub fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Credential from `HEVY_API_KEY`
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    non_empty_var(env_names::API_KEY)
}

/// API base URL from `HEVY_API_URL` or the default
#[must_use]
pub fn api_base_url() -> String {
    non_empty_var(env_names::API_URL).unwrap_or_else(|| api::DEFAULT_BASE_URL.to_owned())
}
