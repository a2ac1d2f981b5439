// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kharcha - a natural-language personal expense tracker.
//!
//! This is the binary entry point: describe a transaction in plain English
//! and Kharcha extracts, stores, lists, and deletes structured records.

mod add;
mod delete;
mod list;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use kharcha_config::KharchaConfig;
use kharcha_core::KharchaError;
use tracing_subscriber::EnvFilter;

use crate::list::RangePreset;

/// Kharcha - a natural-language personal expense tracker.
#[derive(Parser, Debug)]
#[command(name = "kharcha", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a transaction from a free-text description.
    Add {
        /// The transaction in plain English, e.g.
        /// "Spent Rs 800 on petrol yesterday using my SBI debit card".
        description: String,
    },
    /// Show stored transactions, newest first.
    List {
        /// Named date-range preset (defaults to all).
        #[arg(long, value_enum)]
        range: Option<RangePreset>,
        /// Explicit range start (YYYY-MM-DD); requires --to.
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Explicit range end (YYYY-MM-DD); requires --from.
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Show at most this many rows.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete transactions by id (see the ID column of `list`).
    Delete {
        /// One or more record ids.
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match kharcha_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            kharcha_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.tracker.log_level);

    let result = match cli.command {
        Commands::Add { description } => add::run(&config, &description).await,
        Commands::List {
            range,
            from,
            to,
            limit,
        } => {
            list::run(
                &config,
                range.unwrap_or(RangePreset::All),
                from,
                to,
                limit,
            )
            .await
        }
        Commands::Delete { ids } => delete::run(&config, &ids).await,
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber, honoring `RUST_LOG` over the
/// configured level.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The owner identity every data command needs.
pub(crate) fn require_email(config: &KharchaConfig) -> Result<String, KharchaError> {
    config
        .user
        .email
        .clone()
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| {
            KharchaError::Config(
                "user.email is not set. Add it to kharcha.toml or set KHARCHA_USER_EMAIL.".into(),
            )
        })
}
