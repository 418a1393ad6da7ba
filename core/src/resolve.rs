// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::error::ResolveError;
use crate::holiday::HolidayDefinition;
use crate::rule::ParsedRule;

/// Computes the next real-world occurrence of a holiday on or after
/// `today`.
///
/// `today` itself still counts as upcoming: only a strictly-past
/// occurrence rolls forward to a later year. The reference date is an
/// explicit parameter rather than the system clock, so the function is
/// deterministic; callers thread "now" in at the boundary.
pub fn next_occurrence(
    holiday: &HolidayDefinition,
    today: NaiveDate,
) -> Result<NaiveDate, ResolveError> {
    let mut year = today.year();
    let mut candidate = occurrence_in(holiday, year)?;

    // The reference date is caller-supplied and may be arbitrary, so keep
    // stepping years instead of assuming a single rollover suffices. For
    // `today` near the present this loops at most once.
    while candidate < today {
        year += 1;
        candidate = occurrence_in(holiday, year)?;
    }

    Ok(candidate)
}

/// The holiday's occurrence within a single year, with the fixed date
/// taking precedence over the rule note when both are present.
fn occurrence_in(holiday: &HolidayDefinition, year: i32) -> Result<NaiveDate, ResolveError> {
    if let Some((month, day)) = holiday.fixed_date() {
        safe_date(year, month, day).ok_or_else(|| ResolveError::InvalidDefinition {
            name: holiday.name.clone(),
        })
    } else if let Some(note) = holiday.rule_note() {
        ParsedRule::parse(note).map(|rule| rule.resolve_in(year))
    } else {
        Err(ResolveError::InvalidDefinition {
            name: holiday.name.clone(),
        })
    }
}

/// Builds a date with the day clamped into the month's valid range, so a
/// fixed "Feb 29" shifts to Feb 28 in non-leap years instead of failing.
/// Returns `None` only when the month itself is out of range.
fn safe_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let max_day = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, max_day))
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    }?;
    Some(next.signed_duration_since(first).num_days() as u32)
}
