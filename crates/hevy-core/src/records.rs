// ABOUTME: Typed views over loosely-typed workout, exercise, and routine records
// ABOUTME: Each field is read through a fallback-ordered list of names; the first non-null value wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! Records stay `serde_json::Value` at the boundary so JSON mode can echo
//! them untouched. Human mode needs a handful of columns per resource; the
//! views below pick those out with explicit lookups instead of a fixed
//! schema, because field names differ between endpoints.

use serde_json::Value;

/// First non-null value among `keys`
#[must_use]
pub fn first_field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

/// First string value among `keys`
#[must_use]
pub fn first_str<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(Value::as_str)
}

/// First string or number among `keys`, rendered as text
#[must_use]
pub fn first_text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// First numeric value among `keys`; numeric strings are accepted
#[must_use]
pub fn first_number(record: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

const ID_KEYS: &[&str] = &["id", "uuid"];
const TITLE_KEYS: &[&str] = &["title", "name"];

/// Columns shown for a workout
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutView<'a> {
    /// Workout identifier
    pub id: Option<String>,
    /// Workout title
    pub title: Option<&'a str>,
    /// Raw start timestamp
    pub start: Option<&'a str>,
    /// Raw end timestamp
    pub end: Option<&'a str>,
    /// Duration in minutes when the record carries one
    pub duration_minutes: Option<f64>,
}

impl<'a> WorkoutView<'a> {
    const START_KEYS: &'static [&'static str] = &["start_time", "started_at", "date", "created_at"];
    const END_KEYS: &'static [&'static str] = &["end_time", "ended_at"];
    const MINUTES_KEYS: &'static [&'static str] = &["duration_minutes", "duration"];
    const SECONDS_KEYS: &'static [&'static str] = &["duration_seconds"];

    /// Build the view from a workout record
    #[must_use]
    pub fn from_record(record: &'a Value) -> Self {
        let duration_minutes = first_number(record, Self::MINUTES_KEYS)
            .or_else(|| first_number(record, Self::SECONDS_KEYS).map(|secs| secs / 60.0));

        Self {
            id: first_text(record, &["id", "workout_id"]),
            title: first_str(record, TITLE_KEYS),
            start: first_str(record, Self::START_KEYS),
            end: first_str(record, Self::END_KEYS),
            duration_minutes,
        }
    }
}

/// Columns shown for an exercise template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseView<'a> {
    /// Template identifier
    pub id: Option<String>,
    /// Exercise title
    pub title: Option<&'a str>,
    /// Exercise type (e.g. `weight_reps`)
    pub kind: Option<&'a str>,
    /// Primary muscle group
    pub primary_muscle: Option<&'a str>,
}

impl<'a> ExerciseView<'a> {
    /// Build the view from an exercise record
    #[must_use]
    pub fn from_record(record: &'a Value) -> Self {
        Self {
            id: first_text(record, &["id", "exercise_template_id"]),
            title: first_str(record, TITLE_KEYS),
            kind: first_str(record, &["type", "exercise_type", "category"]),
            primary_muscle: first_str(
                record,
                &["primary_muscle_group", "muscle_group", "primary_muscle"],
            ),
        }
    }

    /// Case-insensitive substring match on the title
    #[must_use]
    pub fn title_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title
            .is_some_and(|title| title.to_lowercase().contains(&needle))
    }
}

/// Columns shown for a routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineView<'a> {
    /// Routine identifier
    pub id: Option<String>,
    /// Routine title
    pub title: Option<&'a str>,
    /// Number of exercises in the routine
    pub exercise_count: Option<usize>,
    /// Raw last-updated timestamp
    pub updated: Option<&'a str>,
}

impl<'a> RoutineView<'a> {
    /// Build the view from a routine record
    #[must_use]
    pub fn from_record(record: &'a Value) -> Self {
        let exercise_count = match first_field(record, &["exercises"]) {
            Some(Value::Array(exercises)) => Some(exercises.len()),
            _ => first_number(record, &["exercise_count"]).map(|n| n.max(0.0) as usize),
        };

        Self {
            id: first_text(record, ID_KEYS),
            title: first_str(record, TITLE_KEYS),
            exercise_count,
            updated: first_str(record, &["updated_at", "created_at"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_field_skips_null() {
        let record = json!({"title": null, "name": "Push"});
        assert_eq!(first_field(&record, TITLE_KEYS), Some(&json!("Push")));
        assert_eq!(first_str(&record, TITLE_KEYS), Some("Push"));
        assert_eq!(first_field(&record, &["missing"]), None);
    }

    #[test]
    fn test_first_text_renders_numbers() {
        let record = json!({"id": 42});
        assert_eq!(first_text(&record, ID_KEYS), Some("42".to_owned()));
    }

    #[test]
    fn test_workout_view_fields() {
        let record = json!({
            "id": "w1",
            "title": "Leg Day",
            "start_time": "2024-01-01T00:00:00Z",
            "duration": 45
        });
        let view = WorkoutView::from_record(&record);
        assert_eq!(view.id.as_deref(), Some("w1"));
        assert_eq!(view.title, Some("Leg Day"));
        assert_eq!(view.start, Some("2024-01-01T00:00:00Z"));
        assert_eq!(view.end, None);
        assert_eq!(view.duration_minutes, Some(45.0));
    }

    #[test]
    fn test_workout_view_seconds_fallback() {
        let record = json!({"name": "Run", "duration_seconds": 1800});
        let view = WorkoutView::from_record(&record);
        assert_eq!(view.title, Some("Run"));
        assert_eq!(view.duration_minutes, Some(30.0));
    }

    #[test]
    fn test_exercise_view_and_match() {
        let record = json!({
            "id": "t1",
            "title": "Bench Press (Barbell)",
            "type": "weight_reps",
            "primary_muscle_group": "chest"
        });
        let view = ExerciseView::from_record(&record);
        assert_eq!(view.kind, Some("weight_reps"));
        assert_eq!(view.primary_muscle, Some("chest"));
        assert!(view.title_contains("bench"));
        assert!(view.title_contains("BARBELL"));
        assert!(!view.title_contains("squat"));
    }

    #[test]
    fn test_routine_view_counts_exercises() {
        let record = json!({
            "id": "r1",
            "title": "Upper",
            "exercises": [{"title": "a"}, {"title": "b"}],
            "updated_at": "2024-03-01T10:00:00Z"
        });
        let view = RoutineView::from_record(&record);
        assert_eq!(view.exercise_count, Some(2));
        assert_eq!(view.updated, Some("2024-03-01T10:00:00Z"));

        let sparse = json!({"id": "r2"});
        let view = RoutineView::from_record(&sparse);
        assert_eq!(view.title, None);
        assert_eq!(view.exercise_count, None);
    }
}
