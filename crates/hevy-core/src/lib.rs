// ABOUTME: Core types and constants for the Hevy command-line client
// ABOUTME: Foundation crate with error handling, query parameters, envelope normalization, and record views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

#![deny(unsafe_code)]

//! # Hevy Core
//!
//! Foundation crate providing shared types and constants for the Hevy
//! command-line client. Nothing in here performs I/O, which keeps the
//! crate cheap to test and stable across changes to the binary.
//!
//! ## Modules
//!
//! - **errors**: `HevyError` taxonomy and the `HevyResult` alias
//! - **constants**: Environment variable names, headers, defaults, envelope keys
//! - **query**: Query parameters and page requests for paginated reads
//! - **envelope**: Response normalizer that extracts record lists from any envelope
//! - **records**: Typed views over loosely-typed workout, exercise, and routine records

/// Unified error type for every failure the client can report
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Query parameters and page requests
pub mod query;

/// Extraction of record lists from heterogeneous response envelopes
pub mod envelope;

/// Fallback-ordered typed views over dynamic records
pub mod records;

pub use envelope::extract_records;
pub use errors::{HevyError, HevyResult};
pub use query::{PageRequest, Query};
