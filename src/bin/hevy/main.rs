// ABOUTME: hevy - command-line client for the Hevy workout tracking API
// ABOUTME: Parses arguments, installs logging, dispatches commands, and renders failures at one boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
//!
//! Usage:
//! ```bash
//! # Store an API key in ~/.hevy/config.json
//! hevy auth set <key>
//!
//! # Show which key is in use and where it came from
//! hevy auth show
//!
//! # Recent workouts as a table, or as JSON for scripts
//! hevy workouts list --page 2 --page-size 20
//! hevy --json workouts list
//!
//! # Search exercise templates by title
//! hevy exercises search bench
//!
//! # Workout count plus the five most recent workouts
//! hevy stats
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use hevy_cli::logging::LoggingConfig;
use hevy_cli::output::{self, OutputMode};
use hevy_core::{HevyResult, PageRequest};

use commands::CommandContext;

#[derive(Parser)]
#[command(
    name = "hevy",
    version,
    about = "Hevy workout tracking CLI",
    long_about = "Read workouts, exercise templates, and routines from the Hevy API as tables or JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Manage the stored API key
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Workout history
    Workouts {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Exercise templates
    Exercises {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Saved routines
    Routines {
        #[command(subcommand)]
        action: RoutineCommand,
    },

    /// Workout count and most recent workouts
    Stats,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AuthCommand {
    /// Save an API key to the config file
    Set {
        /// Hevy API key
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        key: String,
    },

    /// Show the active API key (masked) and its source
    Show,

    /// Remove the stored API key
    Clear,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// List workouts, newest first
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show one workout
    Show {
        /// Workout ID
        id: String,
    },

    /// Total number of workouts
    Count,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// List exercise templates
    List {
        #[command(flatten)]
        paging: PageArgs,

        /// Free-text filter passed to the API
        #[arg(long)]
        query: Option<String>,
    },

    /// Find exercise templates whose title contains the text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RoutineCommand {
    /// List routines
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show one routine
    Show {
        /// Routine ID
        id: String,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Page number (default: 1)
    #[arg(long)]
    page: Option<u32>,

    /// Records per page (default: 10)
    #[arg(long)]
    page_size: Option<u32>,
}

impl PageArgs {
    fn request(&self) -> PageRequest {
        PageRequest::from_options(self.page, self.page_size)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_json_flag(cli.json);

    if let Err(e) = LoggingConfig::for_verbosity(cli.verbose).init() {
        eprintln!("{e}");
    }

    match run(cli.command, mode).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_error(mode, &err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, mode: OutputMode) -> HevyResult<()> {
    let context = CommandContext::new(mode);

    match command {
        Command::Auth { action } => match action {
            AuthCommand::Set { key } => commands::auth::set(&context, &key),
            AuthCommand::Show => commands::auth::show(&context),
            AuthCommand::Clear => commands::auth::clear(&context),
        },
        Command::Workouts { action } => match action {
            WorkoutCommand::List { paging } => {
                commands::workouts::list(&context, paging.request()).await
            }
            WorkoutCommand::Show { id } => commands::workouts::show(&context, &id).await,
            WorkoutCommand::Count => commands::workouts::count(&context).await,
        },
        Command::Exercises { action } => match action {
            ExerciseCommand::List { paging, query } => {
                commands::exercises::list(&context, paging.request(), query).await
            }
            ExerciseCommand::Search { query } => {
                commands::exercises::search(&context, &query).await
            }
        },
        Command::Routines { action } => match action {
            RoutineCommand::List { paging } => {
                commands::routines::list(&context, paging.request()).await
            }
            RoutineCommand::Show { id } => commands::routines::show(&context, &id).await,
        },
        Command::Stats => commands::stats::show(&context).await,
    }
}
