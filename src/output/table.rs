// ABOUTME: comfy-table builders for workouts, exercises, routines, and single-record detail views
// ABOUTME: Missing or unparseable fields render as the placeholder so every row has every column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use hevy_core::constants::PLACEHOLDER;
use hevy_core::records::{ExerciseView, RoutineView, WorkoutView};
use serde_json::Value;

use super::dates::{format_timestamp, format_workout_duration};
use crate::resources::Resource;

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
    );
    table
}

fn or_placeholder<S: AsRef<str>>(value: Option<S>) -> String {
    match value {
        Some(text) if !text.as_ref().is_empty() => text.as_ref().to_owned(),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Text for one JSON value in a detail view
///
/// Scalars print bare; arrays and objects print as compact JSON.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_owned(),
        Value::String(s) if s.is_empty() => PLACEHOLDER.to_owned(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// `ID | Title | Start | Duration`
#[must_use]
pub fn workouts_table(records: &[Value]) -> Table {
    let mut table = new_table(&["ID", "Title", "Start", "Duration"]);
    for record in records {
        let view = WorkoutView::from_record(record);
        table.add_row(vec![
            or_placeholder(view.id.as_deref()),
            or_placeholder(view.title),
            format_timestamp(view.start),
            format_workout_duration(&view),
        ]);
    }
    table
}

/// `ID | Title | Type | Primary Muscle`
#[must_use]
pub fn exercises_table(records: &[Value]) -> Table {
    let mut table = new_table(&["ID", "Title", "Type", "Primary Muscle"]);
    for record in records {
        let view = ExerciseView::from_record(record);
        table.add_row(vec![
            or_placeholder(view.id.as_deref()),
            or_placeholder(view.title),
            or_placeholder(view.kind),
            or_placeholder(view.primary_muscle),
        ]);
    }
    table
}

/// `ID | Title | Exercises | Updated`
#[must_use]
pub fn routines_table(records: &[Value]) -> Table {
    let mut table = new_table(&["ID", "Title", "Exercises", "Updated"]);
    for record in records {
        let view = RoutineView::from_record(record);
        table.add_row(vec![
            or_placeholder(view.id.as_deref()),
            or_placeholder(view.title),
            or_placeholder(view.exercise_count.map(|count| count.to_string())),
            format_timestamp(view.updated),
        ]);
    }
    table
}

/// Table for a page of `resource` records
#[must_use]
pub fn records_table(resource: Resource, records: &[Value]) -> Table {
    match resource {
        Resource::Workouts => workouts_table(records),
        Resource::Exercises => exercises_table(records),
        Resource::Routines => routines_table(records),
    }
}

/// `Field | Value` rows for every top-level field of one record
#[must_use]
pub fn detail_table(record: &Value) -> Table {
    let mut table = new_table(&["Field", "Value"]);
    match record {
        Value::Object(fields) => {
            for (field, value) in fields {
                table.add_row(vec![field.clone(), value_text(value)]);
            }
        }
        other => {
            table.add_row(vec!["value".to_owned(), value_text(other)]);
        }
    }
    table
}
