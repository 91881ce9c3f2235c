// ABOUTME: Configuration module for the persisted config file and environment overrides
// ABOUTME: Groups the on-disk config store with the environment variable accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! Configuration for the Hevy client
//!
//! - **Environment**: `HEVY_API_KEY` and `HEVY_API_URL` accessors
//! - **Store**: the single JSON file under the home directory holding the persisted key

/// Environment variable accessors
pub mod environment;
/// Persisted config file
pub mod store;

pub use store::{Config, ConfigStore};
