use crate::config::Profile;
use crate::models::{Assessment, Prediction, RiskLevel};
use crate::table::SymptomTable;

/// Surfaced verbatim to the user when the submitted text resolves to nothing.
pub const NOT_FOUND_MESSAGE: &str =
    "Symptom not found. Pick from suggestions or type an exact value from the dataset.";

/// Score one symptom against the loaded table.
///
/// The submitted text must resolve exactly (after case-fold + trim) to a
/// canonical symptom; anything else is the not-found outcome, the only
/// failure mode here. Both weight lookups fall back to 0.0 for unmatched
/// keys — a deliberate lenient default, not an error.
pub fn predict(table: &SymptomTable, profile: &Profile, text: &str) -> Prediction {
    let Some(record) = table.resolve(text) else {
        return Prediction::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        };
    };

    let group_weight = profile
        .group_weights
        .get(&record.common_group)
        .copied()
        .unwrap_or(0.0);

    let dosha_weight = record
        .dosha
        .and_then(|d| profile.dosha_weights.get(d.as_str()))
        .copied()
        .unwrap_or(0.0);

    let w = &profile.weights;
    let raw = w.group * group_weight + w.dosha * dosha_weight;
    let risk_score = (raw * 100.0).round() / 100.0;

    Prediction::Found(Assessment {
        symptom: record.symptom.clone(),
        common_group: record.common_group.clone(),
        disease_group: record.disease_group.clone(),
        dosha: record.dosha,
        group_weight,
        dosha_weight,
        formula: format!(
            "Risk = {}×{} + {}×{}",
            w.group, group_weight, w.dosha, dosha_weight
        ),
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dosha::Dosha;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_table(rows: &str) -> SymptomTable {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "Symptom,Common disease group,Disease Group,Dosha Types").unwrap();
        write!(f, "{}", rows).unwrap();
        SymptomTable::load(f.path(), &Profile::default()).unwrap()
    }

    fn expect_found(prediction: Prediction) -> Assessment {
        match prediction {
            Prediction::Found(a) => a,
            Prediction::NotFound { message } => panic!("unexpected not-found: {}", message),
        }
    }

    #[test]
    fn test_worked_example_high_tier() {
        // Group weight 9 (Cardiovascular diseases), dosha weight 8 (pitta):
        // 0.6×9 + 0.4×8 = 8.6 → High.
        let table = load_table("Chest pain,Cardiovascular diseases,Hrudya roga,Pitta\n");
        let a = expect_found(predict(&table, &Profile::default(), "chest pain"));

        assert_eq!(a.symptom, "Chest pain");
        assert_eq!(a.dosha, Some(Dosha::Pitta));
        assert_eq!(a.group_weight, 9.0);
        assert_eq!(a.dosha_weight, 8.0);
        assert_eq!(a.risk_score, 8.6);
        assert_eq!(a.risk_level, RiskLevel::High);
        assert_eq!(a.formula, "Risk = 0.6×9 + 0.4×8");
    }

    #[test]
    fn test_unmatched_weights_default_to_zero() {
        let table = load_table("Odd symptom,Unlisted group,x,no dosha here\n");
        let a = expect_found(predict(&table, &Profile::default(), "Odd symptom"));

        assert_eq!(a.group_weight, 0.0);
        assert_eq!(a.dosha_weight, 0.0);
        assert_eq!(a.risk_score, 0.0);
        assert_eq!(a.risk_level, RiskLevel::Low);
        assert_eq!(a.dosha, None);
    }

    #[test]
    fn test_not_found_carries_message() {
        let table = load_table("Chest pain,Cardiovascular diseases,x,Pitta\n");
        match predict(&table, &Profile::default(), "Nonexistent symptom text") {
            Prediction::NotFound { message } => assert_eq!(message, NOT_FOUND_MESSAGE),
            Prediction::Found(_) => panic!("expected not-found"),
        }
    }

    #[test]
    fn test_resolution_folds_case_and_whitespace() {
        let table = load_table("Night blindness,Eye diseases,Netra roga,Vata\n");
        let a = expect_found(predict(&table, &Profile::default(), "  NIGHT BLINDNESS  "));
        assert_eq!(a.symptom, "Night blindness");
    }

    #[test]
    fn test_boundary_scores() {
        // Custom tables pinning the score exactly on the tier boundaries.
        let mut profile = Profile::default();
        profile.group_weights.insert("G4".into(), 4.0);
        profile.group_weights.insert("G7".into(), 7.0);
        profile.dosha_weights.insert("vata".into(), 4.0);

        let table = load_table("A,G4,x,Vata\nB,G7,x,\n");

        // 0.6×4 + 0.4×4 = 4.0 → Medium (lower-inclusive).
        let a = expect_found(predict(&table, &profile, "A"));
        assert_eq!(a.risk_score, 4.0);
        assert_eq!(a.risk_level, RiskLevel::Medium);

        // 0.6×7 + 0.4×0 = 4.2 is not on the boundary; use dosha weight 7 too.
        profile.dosha_weights.insert("pitta".into(), 7.0);
        let table = load_table("B,G7,x,Pitta\n");
        let b = expect_found(predict(&table, &profile, "B"));
        assert_eq!(b.risk_score, 7.0);
        assert_eq!(b.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let mut profile = Profile::default();
        profile.group_weights.insert("G".into(), 5.55);
        let table = load_table("A,G,x,\n");

        // 0.6×5.55 = 3.33, no rounding artifact past two decimals.
        let a = expect_found(predict(&table, &profile, "A"));
        assert_eq!(a.risk_score, 3.33);
    }
}
