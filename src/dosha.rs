use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical constitutional categories from the Ayurvedic tradition.
///
/// Used purely as lookup keys into the profile's dosha weight table. The
/// string forms (`vata`, `vata|pitta`, `tridosha`, ...) match the weight
/// table keys exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dosha {
    #[serde(rename = "vata")]
    Vata,
    #[serde(rename = "pitta")]
    Pitta,
    #[serde(rename = "kapha")]
    Kapha,
    #[serde(rename = "vata|pitta")]
    VataPitta,
    #[serde(rename = "vata|kapha")]
    VataKapha,
    #[serde(rename = "pitta|kapha")]
    PittaKapha,
    #[serde(rename = "tridosha")]
    Tridosha,
}

impl Dosha {
    /// Canonical string form, matching the weight table keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
            Dosha::VataPitta => "vata|pitta",
            Dosha::VataKapha => "vata|kapha",
            Dosha::PittaKapha => "pitta|kapha",
            Dosha::Tridosha => "tridosha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole-word "tri dosha" with optional internal whitespace.
static TRI_DOSHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btri\s*dosha\b").unwrap());

/// Canonicalize a raw free-text constitutional label.
///
/// Handles the heterogeneous formats found in the source datasets:
/// - tridosha spelling variants ("Tridosha", "tri dosha", "trisosha")
/// - mixed separators (`"Pitta, Vata"`, `"vata+kapha"`, `"Vata/Pitta"`)
/// - stray whitespace, casing, and punctuation
///
/// Returns `None` when no recognizable category remains. Pure and total:
/// never fails, and idempotent over its own output.
pub fn normalize(raw: Option<&str>) -> Option<Dosha> {
    let s = raw?.trim().to_lowercase();

    // Tridosha variants dominate everything else in the string.
    if s.contains("tridosha") || s.contains("trisosha") || TRI_DOSHA.is_match(&s) {
        return Some(Dosha::Tridosha);
    }

    // Unify separator runs into '|', drop whitespace and junk characters.
    let mut cleaned = String::with_capacity(s.len());
    let mut prev_sep = false;
    for c in s.chars() {
        match c {
            ';' | ',' | '+' | '/' | '|' => {
                if !prev_sep {
                    cleaned.push('|');
                    prev_sep = true;
                }
            }
            'a'..='z' => {
                cleaned.push(c);
                prev_sep = false;
            }
            _ => {}
        }
    }

    let mut vata = false;
    let mut pitta = false;
    let mut kapha = false;
    for part in cleaned.split('|') {
        match part {
            "vata" => vata = true,
            "pitta" => pitta = true,
            "kapha" => kapha = true,
            _ => {}
        }
    }

    match (vata, pitta, kapha) {
        (false, false, false) => None,
        (true, true, true) => Some(Dosha::Tridosha),
        (true, false, false) => Some(Dosha::Vata),
        (false, true, false) => Some(Dosha::Pitta),
        (false, false, true) => Some(Dosha::Kapha),
        (true, true, false) => Some(Dosha::VataPitta),
        (true, false, true) => Some(Dosha::VataKapha),
        (false, true, true) => Some(Dosha::PittaKapha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tridosha_variants() {
        assert_eq!(normalize(Some("Tridosha")), Some(Dosha::Tridosha));
        assert_eq!(normalize(Some("TRISOSHA")), Some(Dosha::Tridosha));
        assert_eq!(normalize(Some("tri dosha")), Some(Dosha::Tridosha));
        assert_eq!(normalize(Some("Tri  Dosha")), Some(Dosha::Tridosha));
        // Tridosha dominates any other content in the string.
        assert_eq!(
            normalize(Some("vata, pitta (tridosha)")),
            Some(Dosha::Tridosha)
        );
    }

    #[test]
    fn test_tri_dosha_is_whole_word() {
        // "nutridosha" must not match the tri-dosha pattern.
        assert_eq!(normalize(Some("nutridosha")), None);
    }

    #[test]
    fn test_separator_unification() {
        assert_eq!(normalize(Some("Pitta, Vata")), Some(Dosha::VataPitta));
        assert_eq!(normalize(Some("vata+kapha")), Some(Dosha::VataKapha));
        assert_eq!(normalize(Some("kapha;pitta")), Some(Dosha::PittaKapha));
        assert_eq!(normalize(Some("Vata / Pitta")), Some(Dosha::VataPitta));
    }

    #[test]
    fn test_all_three_collapse_to_tridosha() {
        assert_eq!(
            normalize(Some("Vata/Pitta/Kapha")),
            Some(Dosha::Tridosha)
        );
        assert_eq!(
            normalize(Some("kapha, pitta, vata")),
            Some(Dosha::Tridosha)
        );
    }

    #[test]
    fn test_canonical_order_and_dedup() {
        assert_eq!(normalize(Some("pitta, vata, pitta")), Some(Dosha::VataPitta));
        assert_eq!(normalize(Some("Kapha + Vata")), Some(Dosha::VataKapha));
    }

    #[test]
    fn test_single_categories() {
        assert_eq!(normalize(Some("  Vata ")), Some(Dosha::Vata));
        assert_eq!(normalize(Some("PITTA")), Some(Dosha::Pitta));
        assert_eq!(normalize(Some("kapha.")), Some(Dosha::Kapha));
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("unknown")), None);
        assert_eq!(normalize(Some("vatabanana")), None);
        assert_eq!(normalize(Some(";;, / +")), None);
    }

    #[test]
    fn test_idempotent_over_own_output() {
        let inputs = [
            "Pitta, Vata",
            "tri dosha",
            "Vata/Pitta/Kapha",
            "kapha",
            "Vata + Kapha",
        ];
        for raw in inputs {
            let first = normalize(Some(raw)).unwrap();
            assert_eq!(normalize(Some(first.as_str())), Some(first));
        }
    }
}
