use serde::{Deserialize, Serialize};

use crate::dosha::Dosha;

/// One row of the loaded reference table.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomRecord {
    pub symptom: String,
    /// English disease group; scores nonzero only when present in the
    /// profile's group weight table.
    pub common_group: String,
    /// Secondary descriptive group label. Never used in scoring.
    pub disease_group: String,
    pub dosha_raw: Option<String>,
    pub dosha: Option<Dosha>,
}

/// Three-tier label derived from the 0–10 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier boundaries are fixed constants: lower-inclusive at 4.0 and 7.0.
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            RiskLevel::Low
        } else if score < 7.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// A completed risk assessment for one canonical symptom.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub symptom: String,
    pub common_group: String,
    pub disease_group: String,
    pub dosha: Option<Dosha>,
    pub group_weight: f64,
    pub dosha_weight: f64,
    pub formula: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

/// Outcome of a predict call.
///
/// Not-found is expected and recoverable: the user re-searches and
/// re-selects. It is not an error in the `Result` sense.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Found(Assessment),
    NotFound { message: String },
}
