// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Workout commands for hevy: list, show, and count
// ABOUTME: Network calls run behind the spinner in human mode

use hevy_cli::output::{print_json, progress, OutputMode};
use hevy_cli::resources::workouts;
use hevy_core::{HevyResult, PageRequest};

use super::CommandContext;
use crate::helpers::display::{display_page, display_record, print_count};

pub async fn list(context: &CommandContext, request: PageRequest) -> HevyResult<()> {
    let client = context.client()?;
    let page = progress::track(
        context.mode,
        "Fetching workouts",
        "Fetched workouts",
        workouts::list(&client, request),
    )
    .await?;
    display_page(context.mode, &page)
}

pub async fn show(context: &CommandContext, id: &str) -> HevyResult<()> {
    let client = context.client()?;
    let record = progress::track(
        context.mode,
        "Fetching workout",
        "Fetched workout",
        workouts::show(&client, id),
    )
    .await?;
    display_record(context.mode, &record)
}

pub async fn count(context: &CommandContext) -> HevyResult<()> {
    let client = context.client()?;
    let count = progress::track(
        context.mode,
        "Counting workouts",
        "Counted workouts",
        workouts::count(&client),
    )
    .await?;

    match context.mode {
        OutputMode::Json => print_json(&count.to_json()),
        OutputMode::Human => {
            print_count(&count);
            Ok(())
        }
    }
}
