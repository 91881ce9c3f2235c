// ABOUTME: Response normalizer that extracts a record list from any known envelope shape
// ABOUTME: Bare lists pass through, objects are probed by field name, anything else yields no records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! The upstream API does not wrap list responses consistently: some
//! endpoints return a bare array, others nest it under `data`, `items`, or a
//! resource-specific name such as `workouts`. `extract_records` hides that
//! variance from the rest of the client. A missing list means zero records,
//! never an error.

use serde_json::Value;
use tracing::debug;

use crate::constants::ENVELOPE_KEYS;

/// Extract the record list from a parsed response body
///
/// Probes [`ENVELOPE_KEYS`] in order; the first key holding a list wins.
#[must_use]
pub fn extract_records(body: Value) -> Vec<Value> {
    extract_records_with(body, ENVELOPE_KEYS)
}

/// Same as [`extract_records`] with a caller-provided probe order
#[must_use]
pub fn extract_records_with(body: Value, keys: &[&str]) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        Value::Object(mut map) => {
            for key in keys {
                if matches!(map.get(*key), Some(Value::Array(_))) {
                    if let Some(Value::Array(records)) = map.remove(*key) {
                        return records;
                    }
                }
            }
            debug!(
                fields = ?map.keys().collect::<Vec<_>>(),
                "no record list found in response envelope"
            );
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![json!({"id": "a"}), json!({"id": "b"}), json!({"id": "c"})]
    }

    #[test]
    fn test_bare_list_is_returned_unchanged() {
        assert_eq!(extract_records(Value::Array(sample())), sample());
    }

    #[test]
    fn test_items_data_and_bare_list_agree() {
        let from_items = extract_records(json!({ "items": sample() }));
        let from_data = extract_records(json!({ "data": sample() }));
        let from_list = extract_records(json!(sample()));
        assert_eq!(from_items, sample());
        assert_eq!(from_data, sample());
        assert_eq!(from_list, sample());
    }

    #[test]
    fn test_resource_specific_keys() {
        let body = json!({"page": 1, "page_count": 3, "workouts": sample()});
        assert_eq!(extract_records(body), sample());

        let body = json!({"exercise_templates": [{"id": "t1"}]});
        assert_eq!(extract_records(body), vec![json!({"id": "t1"})]);
    }

    #[test]
    fn test_first_matching_key_wins() {
        let body = json!({"routines": [{"id": "r"}], "data": [{"id": "d"}]});
        assert_eq!(extract_records(body), vec![json!({"id": "d"})]);
    }

    #[test]
    fn test_non_list_field_is_skipped() {
        let body = json!({"data": {"id": "x"}, "items": [{"id": "i"}]});
        assert_eq!(extract_records(body), vec![json!({"id": "i"})]);
    }

    #[test]
    fn test_unknown_shapes_yield_nothing() {
        assert!(extract_records(json!({"something": [1, 2]})).is_empty());
        assert!(extract_records(json!({})).is_empty());
        assert!(extract_records(json!("text body")).is_empty());
        assert!(extract_records(Value::Null).is_empty());
        assert!(extract_records(json!(42)).is_empty());
    }

    #[test]
    fn test_custom_probe_order() {
        let body = json!({"data": [{"id": "d"}], "entries": [{"id": "e"}]});
        let records = extract_records_with(body, &["entries", "data"]);
        assert_eq!(records, vec![json!({"id": "e"})]);
    }
}
