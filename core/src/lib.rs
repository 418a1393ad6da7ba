// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

mod agenda;
mod catalog;
mod error;
mod holiday;
mod resolve;
mod rule;

pub use crate::{
    agenda::{Agenda, UpcomingEvent, build_agenda},
    catalog::load_holidays,
    error::{ResolveError, UnparsableReason},
    holiday::HolidayDefinition,
    resolve::next_occurrence,
};

/// The name of the EventDash application.
pub const APP_NAME: &str = "eventdash";
