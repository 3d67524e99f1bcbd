//! Dosha records and the remedy shapes they carry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoshaType {
    #[serde(rename = "Kaal Sarp")]
    KaalSarp,
    Manglik,
    Pitra,
    Shrapit,
    Chandal,
    Grahan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// Aggregate over every detected dosha; `None` when nothing fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TotalSeverity {
    None,
    Mild,
    Moderate,
    Severe,
}

impl From<Severity> for TotalSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Mild => TotalSeverity::Mild,
            Severity::Moderate => TotalSeverity::Moderate,
            Severity::Severe => TotalSeverity::Severe,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemedyCategory {
    Mantra,
    Pooja,
    Pilgrimage,
    Charity,
    Fasting,
    Yantra,
    Gemstone,
    #[serde(rename = "Spiritual Practice")]
    SpiritualPractice,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyTiming {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyProcedure {
    pub steps: Vec<String>,
    pub timing: RemedyTiming,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offerings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaRemedy {
    pub category: RemedyCategory,
    pub title: String,
    pub description: String,
    pub procedure: RemedyProcedure,
    pub duration: String,
    pub expected_results: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureReference {
    pub scripture: String,
    pub chapter: String,
    pub verse: String,
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LalKitabRemedy {
    pub title: String,
    pub description: String,
    pub procedure: Vec<String>,
    pub duration: String,
    pub benefits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A detected affliction. Only its detector creates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dosha {
    pub name: String,
    #[serde(rename = "type")]
    pub dosha_type: DoshaType,
    pub severity: Severity,
    pub description: String,
    pub effects: Vec<String>,
    pub formation: String,
    pub cancellation: Vec<String>,
    pub remedies: Vec<DoshaRemedy>,
    pub scripture_reference: Vec<ScriptureReference>,
    pub lal_kitab_remedies: Vec<LalKitabRemedy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bhrigu_samhita_insight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaAnalysis {
    pub doshas: Vec<Dosha>,
    pub total_severity: TotalSeverity,
    pub remedies_required: bool,
    pub enhancement_suggestions: Vec<String>,
}

impl DoshaAnalysis {
    pub fn has(&self, dosha_type: DoshaType) -> bool {
        self.doshas.iter().any(|d| d.dosha_type == dosha_type)
    }
}
