use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ayur-risk",
    about = "Look up symptoms in an Ayurvedic reference table and predict a weighted risk level",
    version
)]
pub struct Cli {
    /// Reference table (CSV)
    #[arg(long, default_value = "data/symptoms.csv", value_name = "FILE")]
    pub data: PathBuf,

    /// Dataset profile [default: ./.ayur-risk/config.toml, fallback ~/.config/ayur-risk/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Maximum number of suggestions
    #[arg(long, default_value_t = 12, value_name = "N")]
    pub limit: usize,

    /// Suppress banner and decoration
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print ranked suggestions for a partial query
    Suggest {
        /// Partial symptom text
        query: String,
    },
    /// Score one symptom (must match a table entry after case-fold/trim)
    Predict {
        /// Symptom text, exactly as in the table up to casing and whitespace
        symptom: String,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
