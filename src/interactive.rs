use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::*;

use crate::config::Profile;
use crate::models::Prediction;
use crate::report::terminal;
use crate::score;
use crate::suggest::suggest;
use crate::table::SymptomTable;

/// Interactive search-and-predict session.
///
/// Loop: read a partial query, show numbered suggestions, then accept either
/// a number (pick that suggestion), free text (predict it as typed), or an
/// empty line (back to searching). `q` quits at either prompt. Not-found is
/// surfaced and the loop continues; it never terminates the session.
pub fn run(table: &SymptomTable, profile: &Profile, limit: usize, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    if !quiet {
        println!(
            "\n {} v{} — {} symptoms loaded",
            "ayur-risk".bold(),
            env!("CARGO_PKG_VERSION"),
            table.len()
        );
        println!(" Type part of a symptom to search, 'q' to quit.\n");
    }

    loop {
        let Some(query) = prompt(&mut lines, "search> ")? else {
            break;
        };
        if query.eq_ignore_ascii_case("q") {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let matches = suggest(table, &query, limit);
        if matches.is_empty() {
            println!(" No matches for '{}', try another spelling.", query);
            continue;
        }
        terminal::render_suggestions(&matches, &query);

        let Some(choice) = prompt(&mut lines, "pick (number or text)> ")? else {
            break;
        };
        if choice.eq_ignore_ascii_case("q") {
            break;
        }
        if choice.is_empty() {
            continue;
        }

        let selected = match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= matches.len() => matches[n - 1].clone(),
            _ => choice,
        };

        match score::predict(table, profile, &selected) {
            Prediction::Found(assessment) => terminal::render_assessment(&assessment, quiet),
            Prediction::NotFound { message } => terminal::render_not_found(&message),
        }
        println!();
    }

    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!(" {}", label.cyan());
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
