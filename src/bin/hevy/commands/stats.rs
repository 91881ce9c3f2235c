// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Summary command for hevy: workout count plus the most recent workouts
// ABOUTME: Both requests must succeed; there is no partial output

use hevy_cli::output::{print_json, progress, OutputMode};
use hevy_cli::resources::{stats, Resource};
use hevy_core::HevyResult;

use super::CommandContext;
use crate::helpers::display::{print_count, print_records};

pub async fn show(context: &CommandContext) -> HevyResult<()> {
    let client = context.client()?;
    let summary = progress::track(
        context.mode,
        "Fetching stats",
        "Fetched stats",
        stats::fetch(&client),
    )
    .await?;

    match context.mode {
        OutputMode::Json => print_json(&summary.to_json()),
        OutputMode::Human => {
            print_count(&summary.workout_count);
            println!();
            println!("Recent workouts:");
            print_records(Resource::Workouts, &summary.recent_workouts);
            Ok(())
        }
    }
}
