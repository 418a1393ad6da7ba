// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDate;
use colored::Colorize;
use eventdash_core::UpcomingEvent;

/// Renders upcoming events as countdown lines relative to a reference
/// date.
#[derive(Debug, Clone, Copy)]
pub struct AgendaFormatter {
    today: NaiveDate,
}

impl AgendaFormatter {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn format<'a>(&'a self, events: &'a [UpcomingEvent]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }

    fn countdown(&self, event: &UpcomingEvent) -> String {
        match event.days_until(self.today) {
            0 => "today".green().bold().to_string(),
            // One day out is the original notification lead time.
            1 => "tomorrow".yellow().bold().to_string(),
            n => format!("in {n} days").dimmed().to_string(),
        }
    }
}

pub struct Display<'a> {
    events: &'a [UpcomingEvent],
    formatter: &'a AgendaFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.events {
            let emoji = event.emoji.as_deref().unwrap_or("•");
            writeln!(
                f,
                " {emoji} {:<28} {} ({})",
                event.name,
                event.date.format("%a, %b %d %Y"),
                self.formatter.countdown(event),
            )?;
        }
        Ok(())
    }
}
