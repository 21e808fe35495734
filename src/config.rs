use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Dataset profile, deserialized from `.ayur-risk/config.toml`.
///
/// The source project shipped two near-duplicate apps that differed only in
/// column spellings and weight tables; the profile collapses them into one
/// configurable core. Any field left out of the TOML falls back to the
/// built-in default below.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Mixing weights for the two score components.
    pub weights: MixWeights,
    /// Accepted header spellings per logical column.
    pub columns: ColumnAliases,
    /// Disease-group weights (0–10), keyed by the exact group string.
    pub group_weights: HashMap<String, f64>,
    /// Dosha weights (0–10), keyed by the canonical label string.
    pub dosha_weights: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MixWeights {
    pub group: f64,
    pub dosha: f64,
}

impl Default for MixWeights {
    fn default() -> Self {
        MixWeights { group: 0.6, dosha: 0.4 }
    }
}

/// Header aliases tried in order when resolving each logical column.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub symptom: Vec<String>,
    pub common_group: Vec<String>,
    pub disease_group: Vec<String>,
    /// Pre-normalized dosha column. Values are re-normalized anyway.
    pub dosha_clean: Vec<String>,
    /// Raw free-text dosha column, used when no pre-normalized one exists.
    pub dosha_raw: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        ColumnAliases {
            symptom: vec!["Symptom".into(), "Symptoms".into()],
            common_group: vec![
                "Common disease group".into(),
                "Disease group (English name)".into(),
            ],
            disease_group: vec!["Disease Group".into()],
            dosha_clean: vec!["Dosha_Clean".into()],
            dosha_raw: vec!["Dosha Types".into(), "Dosha types".into()],
        }
    }
}

impl Default for Profile {
    /// Built-in weight tables used when no config file is found.
    fn default() -> Self {
        let group_weights = HashMap::from([
            ("Urinary tract infections".to_string(), 4.0),
            ("Muscular disorders".to_string(), 5.0),
            ("Cardiomyopathies".to_string(), 7.0),
            ("Cardiovascular diseases".to_string(), 9.0),
            ("Ear diseases".to_string(), 3.0),
            ("Eye diseases".to_string(), 4.0),
            ("Hematological diseases".to_string(), 6.0),
            ("Liver disease".to_string(), 7.0),
            ("Mental health / Psychiatric disorders".to_string(), 6.0),
            ("Nutritional Deficiency Diseases".to_string(), 4.0),
            ("Reproductive system diseases".to_string(), 5.0),
            ("Tropical diseases".to_string(), 6.0),
            ("Endocrine and Metabolic Diseases".to_string(), 7.0),
            ("Cancer and neoplasms".to_string(), 9.0),
            ("Zoonotic diseases".to_string(), 6.0),
        ]);

        let dosha_weights = HashMap::from([
            ("vata".to_string(), 7.5),
            ("pitta".to_string(), 8.0),
            ("kapha".to_string(), 6.5),
            ("vata|pitta".to_string(), 8.5),
            ("vata|kapha".to_string(), 7.0),
            ("pitta|kapha".to_string(), 8.0),
            ("tridosha".to_string(), 9.5),
        ]);

        Profile {
            weights: MixWeights::default(),
            columns: ColumnAliases::default(),
            group_weights,
            dosha_weights,
        }
    }
}

/// Load the dataset profile, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.ayur-risk/config.toml`
/// 3. `~/.config/ayur-risk/config.toml`
/// 4. Built-in [`Profile::default`]
pub fn load_profile(config_override: Option<&Path>) -> Result<Profile> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".ayur-risk").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("ayur-risk").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Profile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_tables() {
        let profile = Profile::default();
        assert_eq!(profile.weights.group, 0.6);
        assert_eq!(profile.weights.dosha, 0.4);
        assert_eq!(
            profile.group_weights.get("Cardiovascular diseases"),
            Some(&9.0)
        );
        assert_eq!(profile.dosha_weights.get("tridosha"), Some(&9.5));
        assert_eq!(profile.dosha_weights.len(), 7);
        assert_eq!(profile.group_weights.len(), 15);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml_str = r#"
            [weights]
            group = 0.7
            dosha = 0.3

            [group_weights]
            "Skin diseases" = 5.0
        "#;
        let profile: Profile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.weights.group, 0.7);
        // Unlisted sections keep their built-in defaults.
        assert_eq!(profile.dosha_weights.get("vata"), Some(&7.5));
        assert_eq!(profile.columns.symptom, vec!["Symptom", "Symptoms"]);
        // A provided table replaces the built-in one wholesale.
        assert_eq!(profile.group_weights.get("Skin diseases"), Some(&5.0));
        assert_eq!(profile.group_weights.get("Liver disease"), None);
    }

    #[test]
    fn test_column_alias_override() {
        let toml_str = r#"
            [columns]
            symptom = ["Sign"]
        "#;
        let profile: Profile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.columns.symptom, vec!["Sign"]);
        assert_eq!(profile.columns.dosha_clean, vec!["Dosha_Clean"]);
    }
}
