use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::Profile;
use crate::dosha;
use crate::models::SymptomRecord;

/// The reference table, loaded once at startup and immutable thereafter.
///
/// Holds the parsed rows plus the two derived lookup structures: the sorted
/// list of distinct symptoms (suggestion candidates) and the case-folded →
/// canonical symptom map (exact resolution). When duplicate symptoms differ
/// only by case or whitespace, the first row wins for both structures, so the
/// resolved canonical string and the record it retrieves always agree.
#[derive(Debug)]
pub struct SymptomTable {
    records: Vec<SymptomRecord>,
    symptoms: Vec<String>,
    lookup: HashMap<String, String>,
}

impl SymptomTable {
    /// Load and validate the CSV reference table.
    ///
    /// Header names are trimmed before matching. Each logical column is
    /// resolved through the profile's alias list; a missing required column
    /// is a configuration error naming the accepted spellings. Rows with an
    /// empty symptom cell are skipped.
    pub fn load(path: &Path, profile: &Profile) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .context("failed to read CSV headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let cols = &profile.columns;
        let symptom_idx = require_column(&headers, &cols.symptom)?;
        let common_group_idx = require_column(&headers, &cols.common_group)?;
        let disease_group_idx = require_column(&headers, &cols.disease_group)?;

        // Prefer a pre-normalized dosha column; fall back to a raw one.
        // Either way every value goes through the normalizer, so a stale or
        // hand-edited pre-normalized column cannot leak bad labels.
        let dosha_idx = match resolve_column(&headers, &cols.dosha_clean) {
            Some(idx) => idx,
            None => match resolve_column(&headers, &cols.dosha_raw) {
                Some(idx) => idx,
                None => bail!(
                    "CSV must include {} or a raw dosha column ({})",
                    quote_aliases(&cols.dosha_clean),
                    quote_aliases(&cols.dosha_raw),
                ),
            },
        };

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.context("failed to parse CSV record")?;

            let symptom = record.get(symptom_idx).unwrap_or("").trim();
            if symptom.is_empty() {
                continue;
            }

            let dosha_raw = record
                .get(dosha_idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);

            records.push(SymptomRecord {
                symptom: symptom.to_string(),
                common_group: record
                    .get(common_group_idx)
                    .unwrap_or("")
                    .trim()
                    .to_string(),
                disease_group: record
                    .get(disease_group_idx)
                    .unwrap_or("")
                    .trim()
                    .to_string(),
                dosha: dosha::normalize(dosha_raw.as_deref()),
                dosha_raw,
            });
        }

        let symptoms: Vec<String> = records
            .iter()
            .map(|r| r.symptom.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // First occurrence wins, consistent with record retrieval order.
        let mut lookup = HashMap::new();
        for record in &records {
            lookup
                .entry(record.symptom.trim().to_lowercase())
                .or_insert_with(|| record.symptom.clone());
        }

        Ok(SymptomTable {
            records,
            symptoms,
            lookup,
        })
    }

    /// Sorted distinct symptom strings, in their original casing.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Resolve free text to its record via case-fold + trim, first row wins.
    pub fn resolve(&self, text: &str) -> Option<&SymptomRecord> {
        let canonical = self.lookup.get(&text.trim().to_lowercase())?;
        self.records.iter().find(|r| &r.symptom == canonical)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Index of the first header matching any alias, or a configuration error.
fn require_column(headers: &[String], aliases: &[String]) -> Result<usize> {
    match resolve_column(headers, aliases) {
        Some(idx) => Ok(idx),
        None => bail!("CSV must include {} column", quote_aliases(aliases)),
    }
}

fn resolve_column(headers: &[String], aliases: &[String]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

fn quote_aliases(aliases: &[String]) -> String {
    aliases
        .iter()
        .map(|a| format!("'{}'", a))
        .collect::<Vec<_>>()
        .join(" or ")
}
