use std::collections::HashSet;

use crate::table::SymptomTable;

/// Minimum similarity for a fuzzy candidate to be offered at all.
const FUZZY_CUTOFF: f64 = 0.6;

/// Rank suggestion candidates for a partial query.
///
/// Three tiers, highest priority first:
/// 1. case-folded prefix matches, in the table's sorted order;
/// 2. case-folded substring matches not already selected, sorted order;
/// 3. fuzzy matches by character-bigram similarity (Sørensen–Dice), up to
///    `2×limit` candidates at or above the cutoff, best first.
///
/// The result is deduplicated in first-seen order and truncated to `limit`.
/// Pure and side-effect-free; called on every keystroke, so it is a plain
/// linear scan — no index is worth it at a few hundred rows.
pub fn suggest(table: &SymptomTable, query: &str, limit: usize) -> Vec<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut prefix: Vec<&str> = Vec::new();
    let mut substr: Vec<&str> = Vec::new();
    for symptom in table.symptoms() {
        let folded = symptom.to_lowercase();
        if folded.starts_with(&q) {
            prefix.push(symptom);
        } else if folded.contains(&q) {
            substr.push(symptom);
        }
    }

    let selected: HashSet<&str> = prefix.iter().chain(&substr).copied().collect();

    let mut fuzzy: Vec<(&str, f64)> = table
        .symptoms()
        .iter()
        .filter(|s| !selected.contains(s.as_str()))
        .map(|s| (s.as_str(), strsim::sorensen_dice(&q, &s.to_lowercase())))
        .filter(|&(_, ratio)| ratio >= FUZZY_CUTOFF)
        .collect();
    // Stable sort keeps ties in the table's sorted order.
    fuzzy.sort_by(|a, b| b.1.total_cmp(&a.1));
    fuzzy.truncate(2 * limit);

    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for candidate in prefix
        .into_iter()
        .chain(substr)
        .chain(fuzzy.into_iter().map(|(s, _)| s))
    {
        if seen.insert(candidate) {
            out.push(candidate.to_string());
        }
        if out.len() >= limit {
            break;
        }
    }
    out
}
