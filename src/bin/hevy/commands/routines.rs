// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Routine commands for hevy: list and show
// ABOUTME: Rendering is shared with the other resources through the display helpers

use hevy_cli::output::progress;
use hevy_cli::resources::routines;
use hevy_core::{HevyResult, PageRequest};

use super::CommandContext;
use crate::helpers::display::{display_page, display_record};

pub async fn list(context: &CommandContext, request: PageRequest) -> HevyResult<()> {
    let client = context.client()?;
    let page = progress::track(
        context.mode,
        "Fetching routines",
        "Fetched routines",
        routines::list(&client, request),
    )
    .await?;
    display_page(context.mode, &page)
}

pub async fn show(context: &CommandContext, id: &str) -> HevyResult<()> {
    let client = context.client()?;
    let record = progress::track(
        context.mode,
        "Fetching routine",
        "Fetched routine",
        routines::show(&client, id),
    )
    .await?;
    display_record(context.mode, &record)
}
