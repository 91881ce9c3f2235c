// ABOUTME: Library entry point for the Hevy command-line client
// ABOUTME: Wires credential resolution, the HTTP client, resource operations, and output rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

#![deny(unsafe_code)]

//! # Hevy CLI
//!
//! A read-only command-line client for the Hevy workout tracking API.
//!
//! ## Features
//!
//! - **Credential management**: API key from `HEVY_API_KEY` or `~/.hevy/config.json`
//! - **Workouts**: list, show, and count
//! - **Exercise templates**: list with paging, search by title
//! - **Routines**: list and show
//! - **Stats**: workout count plus the most recent workouts, fetched concurrently
//! - **Two output modes**: tables for people, `--json` for scripts
//!
//! ## Layout
//!
//! - [`config`]: persisted configuration file and environment accessors
//! - [`credentials`]: which credential wins and where it came from
//! - [`client`]: authenticated GET requests and error classification
//! - [`resources`]: one module per API resource
//! - [`output`]: tables, dates, spinner, and JSON rendering
//! - [`logging`]: tracing subscriber setup

/// Authenticated HTTP client for the Hevy API
pub mod client;

/// Configuration file and environment variables
pub mod config;

/// Credential resolution and masking
pub mod credentials;

/// Tracing subscriber configuration
pub mod logging;

/// Human and JSON rendering
pub mod output;

/// Resource operations
pub mod resources;

/// Shared utilities
pub mod utils;

pub use client::ApiClient;
pub use hevy_core::{HevyError, HevyResult};
