// ABOUTME: Exercise template read operations: paginated list with optional filter, and search
// ABOUTME: Search sends the query upstream and also filters titles locally, case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use hevy_core::constants::paging;
use hevy_core::records::ExerciseView;
use hevy_core::{extract_records, HevyResult, PageRequest};
use serde_json::{Map, Value};
use tracing::debug;

use super::{RecordPage, Resource};
use crate::client::ApiClient;

/// Exercise templates matching a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// The search text
    pub query: String,
    /// Matching records in upstream order
    pub records: Vec<Value>,
}

impl SearchResults {
    /// `{"query": ..., "exercises": [...]}`
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("query".into(), Value::from(self.query.as_str()));
        payload.insert(
            Resource::Exercises.key().into(),
            Value::Array(self.records.clone()),
        );
        Value::Object(payload)
    }
}

/// One page of exercise templates, optionally filtered by free text
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn list(
    client: &ApiClient,
    request: PageRequest,
    query: Option<String>,
) -> HevyResult<RecordPage> {
    let params = request
        .to_query()
        .param(paging::QUERY_PARAM, query.as_deref());
    let body = client.get_value(Resource::Exercises.path(), &params).await?;

    Ok(RecordPage {
        resource: Resource::Exercises,
        request,
        query,
        records: extract_records(body),
    })
}

/// Exercise templates whose title contains `query`
///
/// # Errors
///
/// Propagates transport and API errors from the client
pub async fn search(client: &ApiClient, query: &str) -> HevyResult<SearchResults> {
    let request = PageRequest {
        page: paging::DEFAULT_PAGE,
        page_size: paging::SEARCH_PAGE_SIZE,
    };
    let page = list(client, request, Some(query.to_owned())).await?;
    let fetched = page.records.len();

    let records = filter_by_title(page.records, query);
    debug!(fetched, matched = records.len(), query, "exercise search");

    Ok(SearchResults {
        query: query.to_owned(),
        records,
    })
}

/// Keep records whose title contains `query`, ignoring case
#[must_use]
pub fn filter_by_title(records: Vec<Value>, query: &str) -> Vec<Value> {
    records
        .into_iter()
        .filter(|record| ExerciseView::from_record(record).title_contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_by_title_is_case_insensitive() {
        let records = vec![
            json!({"id": "1", "title": "Bench Press (Barbell)"}),
            json!({"id": "2", "title": "Squat"}),
            json!({"id": "3", "name": "Incline bench press"}),
            json!({"id": "4"}),
        ];
        let matched = filter_by_title(records, "BENCH");
        let ids: Vec<&str> = matched.iter().filter_map(|r| r["id"].as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_search_results_json() {
        let results = SearchResults {
            query: "row".into(),
            records: vec![json!({"id": "r"})],
        };
        assert_eq!(
            results.to_json(),
            json!({"query": "row", "exercises": [{"id": "r"}]})
        );
    }
}
