// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Command handlers for hevy, one module per verb group
// ABOUTME: CommandContext carries the output mode and opens the config store on demand

pub mod auth;
pub mod exercises;
pub mod routines;
pub mod stats;
pub mod workouts;

use hevy_cli::client::ApiClient;
use hevy_cli::config::{environment, ConfigStore};
use hevy_cli::credentials::{self, ResolvedCredential};
use hevy_cli::output::OutputMode;
use hevy_core::HevyResult;
use tracing::debug;

/// Per-invocation state shared by all handlers
///
/// The config store is opened on demand so commands keyed by `HEVY_API_KEY`
/// never depend on the home directory.
pub struct CommandContext {
    pub mode: OutputMode,
    open_store: fn() -> HevyResult<ConfigStore>,
}

impl CommandContext {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            open_store: ConfigStore::default_location,
        }
    }

    /// Config store at its default location
    pub fn store(&self) -> HevyResult<ConfigStore> {
        (self.open_store)()
    }

    /// Active credential; the store is read only without an env key
    pub fn credential(&self) -> HevyResult<ResolvedCredential> {
        let resolved =
            credentials::resolve_lazily(environment::api_key_from_env(), self.open_store)?;
        debug!(origin = %resolved.origin, "resolved API key");
        Ok(resolved)
    }

    /// Authenticated client; fails when no credential is configured
    pub fn client(&self) -> HevyResult<ApiClient> {
        Ok(ApiClient::from_env(self.credential()?.require()?))
    }
}
