// ABOUTME: Utility modules shared across the client
// ABOUTME: Contains the HTTP client construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

/// HTTP client configuration and helpers
pub mod http_client;
