use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Assessment, RiskLevel};

/// Render a ranked suggestion list, one numbered entry per line.
pub fn render_suggestions(matches: &[String], query: &str) {
    if matches.is_empty() {
        println!(" No matches for '{}'", query);
        return;
    }
    for (i, symptom) in matches.iter().enumerate() {
        println!(" {:>3}. {}", i + 1, symptom);
    }
}

/// Render the assessment card for one scored symptom.
pub fn render_assessment(assessment: &Assessment, quiet: bool) {
    if quiet {
        println!(
            "{}: {} ({})",
            assessment.symptom, assessment.risk_score, assessment.risk_level
        );
        return;
    }

    let dosha = assessment
        .dosha
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    table.add_row(vec![Cell::new("Symptom"), Cell::new(&assessment.symptom)]);
    table.add_row(vec![
        Cell::new("Common disease group"),
        Cell::new(&assessment.common_group),
    ]);
    table.add_row(vec![
        Cell::new("Disease group"),
        Cell::new(&assessment.disease_group),
    ]);
    table.add_row(vec![Cell::new("Dosha"), Cell::new(dosha)]);
    table.add_row(vec![
        Cell::new("Group weight"),
        Cell::new(assessment.group_weight.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Dosha weight"),
        Cell::new(assessment.dosha_weight.to_string()),
    ]);
    table.add_row(vec![Cell::new("Formula"), Cell::new(&assessment.formula)]);
    table.add_row(vec![
        Cell::new("Risk score (0–10)"),
        Cell::new(assessment.risk_score.to_string()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Risk level"),
        Cell::new(assessment.risk_level.to_string())
            .fg(level_color(assessment.risk_level))
            .add_attribute(Attribute::Bold),
    ]);

    println!("{}", table);
    println!(
        " Final risk level: {}",
        colorize_level(assessment.risk_level)
    );
}

/// Render the not-found message. Surfaced verbatim, nothing else happens.
pub fn render_not_found(message: &str) {
    eprintln!(" {} {}", "✗".red(), message);
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn colorize_level(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => "Low".green().bold(),
        RiskLevel::Medium => "Medium".yellow().bold(),
        RiskLevel::High => "High".red().bold(),
    }
}
