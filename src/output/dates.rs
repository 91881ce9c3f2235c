// ABOUTME: Timestamp and duration formatting for human-mode tables
// ABOUTME: Timestamps render in the local time zone; anything unparseable renders as the placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use hevy_core::constants::PLACEHOLDER;
use hevy_core::records::WorkoutView;

/// Display format for timestamps
const DISPLAY_FORMAT: &str = "%b %d, %Y %H:%M";

/// Naive layouts accepted besides RFC 3339; interpreted as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse an API timestamp
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Format a timestamp in the local time zone, or the placeholder
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format a timestamp in `tz`, or the placeholder
#[must_use]
pub fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    raw.and_then(parse_timestamp).map_or_else(
        || PLACEHOLDER.to_owned(),
        |parsed| parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
    )
}

/// Minutes between two timestamps, when both parse and end is not before start
#[must_use]
pub fn minutes_between(start: &str, end: &str) -> Option<f64> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    let seconds = (end - start).num_seconds();
    (seconds >= 0).then(|| seconds as f64 / 60.0)
}

/// Workout duration: explicit minutes first, then end minus start
#[must_use]
pub fn format_workout_duration(view: &WorkoutView<'_>) -> String {
    let minutes = view.duration_minutes.or_else(|| match (view.start, view.end) {
        (Some(start), Some(end)) => minutes_between(start, end),
        _ => None,
    });
    format_minutes(minutes)
}

/// `"N min"`, or the placeholder for missing or negative values
#[must_use]
pub fn format_minutes(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) if m.is_finite() && m >= 0.0 => format!("{} min", m.round() as u64),
        _ => PLACEHOLDER.to_owned(),
    }
}
