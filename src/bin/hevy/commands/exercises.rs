// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Exercise template commands for hevy: list and search
// ABOUTME: Search fetches one large page and filters titles locally

use hevy_cli::output::{print_json, progress, OutputMode};
use hevy_cli::resources::{exercises, Resource};
use hevy_core::{HevyResult, PageRequest};

use super::CommandContext;
use crate::helpers::display::{display_page, print_records};

pub async fn list(
    context: &CommandContext,
    request: PageRequest,
    query: Option<String>,
) -> HevyResult<()> {
    let client = context.client()?;
    let page = progress::track(
        context.mode,
        "Fetching exercises",
        "Fetched exercises",
        exercises::list(&client, request, query),
    )
    .await?;
    display_page(context.mode, &page)
}

pub async fn search(context: &CommandContext, query: &str) -> HevyResult<()> {
    let client = context.client()?;
    let results = progress::track(
        context.mode,
        "Searching exercises",
        "Searched exercises",
        exercises::search(&client, query),
    )
    .await?;

    match context.mode {
        OutputMode::Json => print_json(&results.to_json()),
        OutputMode::Human => {
            print_records(Resource::Exercises, &results.records);
            Ok(())
        }
    }
}
