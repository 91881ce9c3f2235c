// ABOUTME: Error taxonomy for the Hevy client: credentials, transport, API, and config failures
// ABOUTME: Every command funnels its failures through HevyError so the CLI boundary has one type to render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! # Error Types
//!
//! `HevyError` covers the four failure families a command can hit:
//!
//! - missing credential (local, the user must act)
//! - transport failure (network unreachable, surfaced verbatim)
//! - API failure (non-success status with best-effort detail)
//! - local config file failure (anything other than "file not found")
//!
//! HTTP-specific variants are only compiled with the `http-errors` feature so
//! that consumers which never touch the network do not pull in `reqwest`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::env;

/// Result alias used across the workspace
pub type HevyResult<T> = Result<T, HevyError>;

/// Every error the client can report to the user
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HevyError {
    /// No credential in the environment or the config file
    #[error(
        "No API key configured. Run `hevy auth set <key>` or set the {} environment variable.",
        env::API_KEY
    )]
    MissingApiKey,

    /// Upstream API answered with a non-success status
    #[error("{api} error {status}: {detail}")]
    Api {
        /// Human name of the API, e.g. "Hevy API"
        api: String,
        /// HTTP status code
        status: u16,
        /// Message extracted from the body, or the status reason phrase
        detail: String,
    },

    /// Network-level failure (DNS, connection refused, TLS, timeout)
    #[cfg(feature = "http-errors")]
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Base URL or path did not form a valid URL
    #[cfg(feature = "http-errors")]
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Config file exists but could not be read or written
    #[error("Failed to access config file {}: {source}", .path.display())]
    ConfigIo {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config file exists but does not hold valid JSON
    #[error("Config file {} is not valid JSON: {source}", .path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The user's home directory could not be determined
    #[error("Could not determine the home directory for the config file")]
    HomeDirUnavailable,

    /// Response body or output payload could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HevyError {
    /// Build an API error for the given status and detail
    #[must_use]
    pub fn api(api: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            api: api.into(),
            status,
            detail: detail.into(),
        }
    }

    /// Build a config I/O error for the given path
    #[must_use]
    pub fn config_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Status code for API errors, `None` for everything else
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
