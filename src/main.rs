//! `ayur-risk` — look up a symptom, classify it, and predict a risk level.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the dataset profile ([`config::load_profile`]).
//! 3. Load the CSV reference table once ([`table::SymptomTable::load`]).
//! 4. Dispatch: `suggest` ([`suggest`]), `predict` ([`score`]), or the
//!    interactive session ([`interactive`]).
//! 5. Render terminal or JSON output ([`report`]).
//! 6. Exit `0`, or `1` when a one-shot `predict` finds nothing.

mod cli;
mod config;
mod dosha;
mod interactive;
mod models;
mod report;
mod score;
mod suggest;
mod table;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Command, ReportFormat};
use config::load_profile;
use models::Prediction;
use table::SymptomTable;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let profile = load_profile(cli.config.as_deref())?;
    let table = SymptomTable::load(&cli.data, &profile)?;

    if table.is_empty() {
        eprintln!("No usable rows found in {}", cli.data.display());
        std::process::exit(1);
    }

    if !cli.quiet {
        eprintln!(
            "  {} {} symptoms loaded from {}",
            "→".cyan(),
            table.len(),
            cli.data.display()
        );
    }

    match cli.command {
        Some(Command::Suggest { query }) => {
            let matches = suggest::suggest(&table, &query, cli.limit);
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_suggestions(&matches, &query),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
            }
        }
        Some(Command::Predict { symptom }) => {
            let prediction = score::predict(&table, &profile, &symptom);
            match cli.report {
                ReportFormat::Terminal => match &prediction {
                    Prediction::Found(assessment) => {
                        report::terminal::render_assessment(assessment, cli.quiet)
                    }
                    Prediction::NotFound { message } => report::terminal::render_not_found(message),
                },
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&prediction)?),
            }
            if matches!(prediction, Prediction::NotFound { .. }) {
                std::process::exit(1);
            }
        }
        None => interactive::run(&table, &profile, cli.limit, cli.quiet)?,
    }

    Ok(())
}
