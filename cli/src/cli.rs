// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::ValueHint;
use eventdash_core::APP_NAME;

/// Command-line interface for the EventDash dashboard.
#[derive(Debug, clap::Parser)]
#[command(name = APP_NAME, version, about = "A countdown dashboard for holidays and events")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(PathBuf),
        value_hint = ValueHint::FilePath,
        long_help = "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/eventdash/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/eventdash/config.toml on Windows."
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The commands available in the CLI. Without a subcommand the
/// dashboard is shown.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum Commands {
    /// Show the countdown dashboard of upcoming holidays and events
    Dashboard,

    /// List every upcoming holiday and event
    List,

    /// Show the next occurrence of a single holiday or event
    Next {
        /// Name to look up, matched case-insensitively
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_config_flag() {
        let cli = Cli::try_parse_from(["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_default_as_no_subcommand() {
        let cli = Cli::try_parse_from(["test"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_dashboard() {
        let cli = Cli::try_parse_from(["test", "dashboard"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Dashboard)));
    }

    #[test]
    fn parses_list() {
        let cli = Cli::try_parse_from(["test", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn parses_next_with_name() {
        let cli = Cli::try_parse_from(["test", "next", "Thanksgiving"]).unwrap();
        match cli.command {
            Some(Commands::Next { name }) => assert_eq!(name, "Thanksgiving"),
            other => panic!("Expected Next command, got {other:?}"),
        }
    }

    #[test]
    fn next_requires_a_name() {
        assert!(Cli::try_parse_from(["test", "next"]).is_err());
    }
}
