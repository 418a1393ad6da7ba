// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod config;
mod formatter;

use std::error::Error;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use eventdash_core::{Agenda, UpcomingEvent, build_agenda, load_holidays};

pub use crate::cli::{Cli, Commands};
use crate::config::{Config, parse_config};
use crate::formatter::AgendaFormatter;

/// How many entries the dashboard shows before cutting off.
const DASHBOARD_MAX: usize = 16;

/// Run the EventDash command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();
    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => cmd_dashboard(cli.config, today).await,
        Commands::List => cmd_list(cli.config, today).await,
        Commands::Next { name } => cmd_next(cli.config, &name, today).await,
    }
}

/// Show the countdown dashboard of upcoming holidays and events.
async fn cmd_dashboard(config: Option<PathBuf>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    tracing::debug!("generating dashboard...");
    let agenda = upcoming_agenda(config, today).await?;

    println!("🗓️ {}", "Upcoming".bold());
    if agenda.events.is_empty() {
        println!("No upcoming events");
        return Ok(());
    }

    let shown = agenda.events.len().min(DASHBOARD_MAX);
    let formatter = AgendaFormatter::new(today);
    print!("{}", formatter.format(&agenda.events[..shown]));
    if agenda.events.len() > DASHBOARD_MAX {
        println!(
            "Displaying the first {DASHBOARD_MAX}/{} events",
            agenda.events.len()
        );
    }
    Ok(())
}

/// List every upcoming holiday and event.
async fn cmd_list(config: Option<PathBuf>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    tracing::debug!("listing events...");
    let agenda = upcoming_agenda(config, today).await?;
    let formatter = AgendaFormatter::new(today);
    print!("{}", formatter.format(&agenda.events));
    Ok(())
}

/// Show the next occurrence of a single holiday or event by name.
async fn cmd_next(
    config: Option<PathBuf>,
    name: &str,
    today: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    tracing::debug!(name, "looking up next occurrence...");
    let agenda = upcoming_agenda(config, today).await?;

    let needle = name.to_lowercase();
    let matched: Vec<UpcomingEvent> = agenda
        .events
        .into_iter()
        .filter(|event| event.name.to_lowercase().contains(&needle))
        .collect();
    if matched.is_empty() {
        return Err(format!("No upcoming event matches {name:?}").into());
    }

    let formatter = AgendaFormatter::new(today);
    print!("{}", formatter.format(&matched));
    Ok(())
}

/// Load the catalog and the configured user events, resolve everything
/// against `today`, and report unresolvable catalog records on stderr.
async fn upcoming_agenda(config: Option<PathBuf>, today: NaiveDate) -> Result<Agenda, Box<dyn Error>> {
    let config = parse_config(config).await?;
    let holidays = load_holidays(&config.holidays_path).await?;
    let user_events = user_events(&config, today);

    let agenda = build_agenda(&holidays, user_events, today);
    for failure in &agenda.failures {
        eprintln!("{} {failure}", "Warning:".yellow());
    }
    Ok(agenda)
}

/// User-created events from the configuration, already-past dates
/// filtered out.
fn user_events(config: &Config, today: NaiveDate) -> Vec<UpcomingEvent> {
    config
        .events
        .iter()
        .cloned()
        .map(UpcomingEvent::from)
        .filter(|event| event.date >= today)
        .collect()
}
