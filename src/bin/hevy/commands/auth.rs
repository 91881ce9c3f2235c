// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Credential commands for hevy: set, show, and clear the stored API key
// ABOUTME: `show` reports the masked key and whether it came from the environment or the config file

use hevy_cli::credentials::mask_key;
use hevy_cli::output::{self, print_json, OutputMode};
use hevy_core::HevyResult;
use serde_json::json;
use tracing::info;

use super::CommandContext;

/// Persist `key`, keeping any other fields in the config file
pub fn set(context: &CommandContext, key: &str) -> HevyResult<()> {
    let store = context.store()?;
    store.set_key(key)?;
    info!(path = %store.path().display(), "API key saved");

    match context.mode {
        OutputMode::Json => print_json(&json!({
            "saved": true,
            "configPath": store.path().display().to_string(),
        })),
        OutputMode::Human => {
            output::success(
                context.mode,
                &format!("API key saved to {}", store.path().display()),
            );
            Ok(())
        }
    }
}

/// Report the active key, masked, with its origin
pub fn show(context: &CommandContext) -> HevyResult<()> {
    let resolved = context.credential()?;
    let origin = resolved.origin;
    let key = resolved.require()?;
    let masked = mask_key(&key);

    match context.mode {
        OutputMode::Json => print_json(&json!({
            "apiKey": masked,
            "source": origin,
        })),
        OutputMode::Human => {
            println!("API key: {masked}");
            println!("Source:  {origin}");
            Ok(())
        }
    }
}

/// Empty the config file
pub fn clear(context: &CommandContext) -> HevyResult<()> {
    let store = context.store()?;
    store.clear()?;
    info!(path = %store.path().display(), "API key cleared");

    match context.mode {
        OutputMode::Json => print_json(&json!({
            "cleared": true,
            "configPath": store.path().display().to_string(),
        })),
        OutputMode::Human => {
            output::success(context.mode, "Stored API key removed");
            Ok(())
        }
    }
}
