// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Month, NaiveDate, Weekday};

use crate::error::{ResolveError, UnparsableReason};

/// Which occurrence of the weekday within the month the rule names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Weekday tokens in scan priority order.
const WEEKDAY_TOKENS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Month tokens in scan priority order.
const MONTH_TOKENS: [(&str, Month); 12] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
    ("july", Month::July),
    ("august", Month::August),
    ("september", Month::September),
    ("october", Month::October),
    ("november", Month::November),
    ("december", Month::December),
];

/// Ordinal tokens in scan priority order. "last" is checked first so a
/// note like "last Friday" never falls through to a lower ordinal.
const ORDINAL_TOKENS: [(&str, Ordinal); 5] = [
    ("last", Ordinal::Last),
    ("first", Ordinal::First),
    ("second", Ordinal::Second),
    ("third", Ordinal::Third),
    ("fourth", Ordinal::Fourth),
];

/// A positional holiday rule, parsed from a free-text note like
/// "Fourth Thursday in November".
///
/// Built fresh per resolution call and discarded right after; it is
/// never persisted or compared across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedRule {
    pub ordinal: Ordinal,
    pub weekday: Weekday,
    pub month: Month,
}

impl ParsedRule {
    /// Parses a rule note by scanning for known tokens as lowercase
    /// substrings, each token table in its fixed priority order.
    ///
    /// The month and the ordinal are mandatory. A missing weekday falls
    /// back to Monday: the original catalog data relied on this leniency,
    /// so it is kept, but logged to surface typos in the note.
    pub fn parse(note: &str) -> Result<Self, ResolveError> {
        let normalized = note.trim().to_lowercase();

        let weekday = match scan(&normalized, &WEEKDAY_TOKENS) {
            Some(weekday) => weekday,
            None => {
                tracing::warn!(note, "no weekday name in rule, defaulting to Monday");
                Weekday::Mon
            }
        };

        let Some(month) = scan(&normalized, &MONTH_TOKENS) else {
            return Err(ResolveError::UnparsableRule {
                note: note.to_string(),
                reason: UnparsableReason::NoMonth,
            });
        };

        let Some(ordinal) = scan(&normalized, &ORDINAL_TOKENS) else {
            return Err(ResolveError::UnparsableRule {
                note: note.to_string(),
                reason: UnparsableReason::NoOrdinal,
            });
        };

        Ok(ParsedRule {
            ordinal,
            weekday,
            month,
        })
    }

    /// The concrete date of this rule in the given year.
    pub fn resolve_in(&self, year: i32) -> NaiveDate {
        let month = self.month.number_from_month();
        let nth = |n| NaiveDate::from_weekday_of_month_opt(year, month, self.weekday, n);
        match self.ordinal {
            Ordinal::First => nth(1),
            Ordinal::Second => nth(2),
            Ordinal::Third => nth(3),
            Ordinal::Fourth => nth(4),
            // A fifth occurrence may not exist; a fourth always does.
            Ordinal::Last => nth(5).or_else(|| nth(4)),
        }
        .expect("every month has at least four of each weekday")
    }
}

/// Returns the value of the first token contained in `normalized`.
fn scan<T: Copy>(normalized: &str, tokens: &[(&str, T)]) -> Option<T> {
    tokens
        .iter()
        .find(|(token, _)| normalized.contains(token))
        .map(|(_, value)| *value)
}
