// ABOUTME: Routine read operations: paginated list and single routine
// ABOUTME: List responses are normalized through the shared envelope extractor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use hevy_core::constants::paths;
use hevy_core::{extract_records, HevyResult, PageRequest, Query};
use serde_json::Value;

use super::{RecordPage, Resource};
use crate::client::{path_segment, ApiClient};

/// One page of routines
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn list(client: &ApiClient, request: PageRequest) -> HevyResult<RecordPage> {
    let body = client
        .get_value(Resource::Routines.path(), &request.to_query())
        .await?;

    Ok(RecordPage {
        resource: Resource::Routines,
        request,
        query: None,
        records: extract_records(body),
    })
}

/// A single routine, exactly as returned
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn show(client: &ApiClient, id: &str) -> HevyResult<Value> {
    let path = format!("{}/{}", paths::ROUTINES, path_segment(id));
    client.get_value(&path, &Query::new()).await
}
