// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use eventdash_core::{UpcomingEvent, build_agenda, load_holidays};
use tempfile::TempDir;

const CATALOG: &str = r#"[
    { "name": "New Year's Day", "month": 1, "day": 1, "emoji": "🎉" },
    { "name": "MLK Day", "note": "Third Monday in January" },
    { "name": "Memorial Day", "note": "Last Monday in May" },
    { "name": "Independence Day", "month": 7, "day": 4, "emoji": "🎆" },
    { "name": "Labor Day", "note": "First Monday in September" },
    { "name": "Thanksgiving", "note": "Fourth Thursday in November", "emoji": "🦃" },
    { "name": "Christmas", "month": 12, "day": 25, "emoji": "🎄" }
]"#;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn loads_and_resolves_a_full_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("holidays.json");
    std::fs::write(&path, CATALOG).unwrap();

    let holidays = load_holidays(&path).await.unwrap();
    assert_eq!(holidays.len(), 7);

    let today = date(2025, 8, 29);
    let user_events = vec![UpcomingEvent {
        name: "Anniversary".into(),
        date: date(2025, 10, 12),
        emoji: Some("💍".into()),
    }];
    let agenda = build_agenda(&holidays, user_events, today);

    assert!(agenda.failures.is_empty());
    let resolved: Vec<_> = agenda
        .events
        .iter()
        .map(|e| (e.name.as_str(), e.date))
        .collect();
    assert_eq!(
        resolved,
        [
            ("Labor Day", date(2025, 9, 1)),
            ("Anniversary", date(2025, 10, 12)),
            ("Thanksgiving", date(2025, 11, 27)),
            ("Christmas", date(2025, 12, 25)),
            ("New Year's Day", date(2026, 1, 1)),
            ("MLK Day", date(2026, 1, 19)),
            ("Memorial Day", date(2026, 5, 25)),
            ("Independence Day", date(2026, 7, 4)),
        ]
    );
}

#[tokio::test]
async fn missing_catalog_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_holidays(&dir.path().join("nope.json"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read holiday catalog"));
}

#[tokio::test]
async fn malformed_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("holidays.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_holidays(&path).await.unwrap_err();
    assert!(err.to_string().contains("Failed to decode holiday catalog"));
}
