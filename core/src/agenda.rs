// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::error::ResolveError;
use crate::holiday::HolidayDefinition;
use crate::resolve::next_occurrence;

/// A dated entry on the dashboard, either a resolved holiday or a
/// user-created event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEvent {
    /// Display label.
    pub name: String,

    /// The resolved calendar date, on or after the reference date.
    pub date: NaiveDate,

    /// Decorative emoji, if any.
    pub emoji: Option<String>,
}

impl UpcomingEvent {
    /// Whole days from `today` until the event.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.date.signed_duration_since(today).num_days()
    }
}

/// The merged upcoming-event list plus the holiday records that failed
/// to resolve. One malformed catalog entry never blocks the rest.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    /// Holidays and user events, sorted by date then name.
    pub events: Vec<UpcomingEvent>,

    /// Resolution failures, in catalog order.
    pub failures: Vec<ResolveError>,
}

/// Resolves every holiday independently against `today`, merges in the
/// user-created events, and sorts the result by date then name.
pub fn build_agenda(
    holidays: &[HolidayDefinition],
    user_events: Vec<UpcomingEvent>,
    today: NaiveDate,
) -> Agenda {
    let mut agenda = Agenda {
        events: user_events,
        failures: Vec::new(),
    };

    for holiday in holidays {
        match next_occurrence(holiday, today) {
            Ok(date) => agenda.events.push(UpcomingEvent {
                name: holiday.name.clone(),
                date,
                emoji: holiday.emoji.clone(),
            }),
            Err(err) => {
                tracing::warn!(holiday = %holiday.name, %err, "skipping unresolvable holiday");
                agenda.failures.push(err);
            }
        }
    }

    agenda
        .events
        .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    agenda
}
