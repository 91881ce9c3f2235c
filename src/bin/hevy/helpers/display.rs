// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Output helpers for hevy
// ABOUTME: Renders pages, single records, and plain payloads in either output mode

use hevy_cli::output::{print_json, table, OutputMode};
use hevy_cli::resources::workouts::WorkoutCount;
use hevy_cli::resources::{RecordPage, Resource};
use hevy_core::HevyResult;
use serde_json::Value;

/// Print a list of records as a table, or the empty-list line
pub fn print_records(resource: Resource, records: &[Value]) {
    if records.is_empty() {
        println!("No {} found.", resource.key());
    } else {
        println!("{}", table::records_table(resource, records));
    }
}

/// Print one page of records
pub fn display_page(mode: OutputMode, page: &RecordPage) -> HevyResult<()> {
    match mode {
        OutputMode::Json => print_json(&page.to_json()),
        OutputMode::Human => {
            print_records(page.resource, &page.records);
            if !page.records.is_empty() {
                println!(
                    "Page {} ({} per page)",
                    page.request.page, page.request.page_size
                );
            }
            Ok(())
        }
    }
}

/// Print one record as a field/value table, or the raw body as JSON
pub fn display_record(mode: OutputMode, record: &Value) -> HevyResult<()> {
    match mode {
        OutputMode::Json => print_json(record),
        OutputMode::Human => {
            println!("{}", table::detail_table(record));
            Ok(())
        }
    }
}

/// `Total workouts: N`, or the raw count body
pub fn print_count(count: &WorkoutCount) {
    match count {
        WorkoutCount::Known(n) => println!("Total workouts: {n}"),
        WorkoutCount::Raw(body) => println!("Total workouts: {body}"),
    }
}
