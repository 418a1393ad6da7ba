// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;

#[tokio::main]
async fn main() {
    if let Err(e) = eventdash_cli::run().await {
        println!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}
