// ABOUTME: Transient spinner drawn on stderr while a request is in flight
// ABOUTME: Only active in human mode; JSON mode never touches the terminal beyond stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use std::future::Future;
use std::time::Duration;

use console::style;
use hevy_core::HevyResult;
use indicatif::{ProgressBar, ProgressStyle};

use super::OutputMode;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner handle; inert in JSON mode
#[derive(Debug)]
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start a spinner showing `message`
    #[must_use]
    pub fn start(mode: OutputMode, message: &str) -> Self {
        if mode.is_json() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_message(message.to_owned());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar: Some(bar) }
    }

    /// Replace the spinner with a green check and `message`
    pub fn succeed(self, message: &str) {
        self.finish(format!("{} {message}", style("✔").green()));
    }

    /// Replace the spinner with a red cross and `message`
    pub fn fail(self, message: &str) {
        self.finish(format!("{} {message}", style("✖").red()));
    }

    fn finish(self, line: String) {
        if let Some(bar) = self.bar {
            let final_style = ProgressStyle::default_spinner()
                .template("{msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            bar.set_style(final_style);
            bar.finish_with_message(line);
        }
    }
}

/// Await `future` behind a spinner
///
/// The spinner reads `pending` while running, then `done` on success or
/// `"<pending> failed"` on error.
///
/// # Errors
///
/// Returns whatever error `future` produced
pub async fn track<T, F>(mode: OutputMode, pending: &str, done: &str, future: F) -> HevyResult<T>
where
    F: Future<Output = HevyResult<T>>,
{
    let spinner = Spinner::start(mode, pending);
    match future.await {
        Ok(value) => {
            spinner.succeed(done);
            Ok(value)
        }
        Err(err) => {
            spinner.fail(&format!("{pending} failed"));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hevy_core::HevyError;

    #[tokio::test]
    async fn test_track_passes_through_value_and_error() {
        let ok = track(OutputMode::Json, "Fetching", "Fetched", async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: HevyResult<()> =
            track(OutputMode::Json, "Fetching", "Fetched", async { Err(HevyError::MissingApiKey) })
                .await;
        assert!(matches!(err, Err(HevyError::MissingApiKey)));
    }

    #[test]
    fn test_json_mode_spinner_is_inert() {
        let spinner = Spinner::start(OutputMode::Json, "Loading");
        assert!(spinner.bar.is_none());
        spinner.succeed("done");
    }
}
