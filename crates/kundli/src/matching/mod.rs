//! Cross-kundli compatibility (Guna Milan plus Manglik and Nadi checks).

pub mod gunas;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::birth::Gender;
use crate::doshas::DoshaType;
use crate::kundli::CompleteKundli;

pub use gunas::{calculate_gunas, GunaCompatibility, GunaScore, MoonProfile, MAX_GUNAS};

const BOTH_MANGLIK: &str =
    "Both partners have Manglik Dosha - This is actually favorable! Double Manglik cancels the dosha.";
const ONE_MANGLIK: &str =
    "One partner has Manglik Dosha while other doesn't - Remedies recommended before marriage";
const ONE_MANGLIK_REMEDY: &str = "Perform Kumbh Vivah or Mangalnath Ujjain puja before marriage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Average,
    Poor,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl MatchVerdict {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            80.. => MatchVerdict::Excellent,
            60..=79 => MatchVerdict::VeryGood,
            40..=59 => MatchVerdict::Good,
            25..=39 => MatchVerdict::Average,
            18..=24 => MatchVerdict::Poor,
            _ => MatchVerdict::NotRecommended,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// Percentage of the 36 available gunas, rounded.
    pub compatibility_score: u32,
    pub matching_gunas: f64,
    pub verdict: MatchVerdict,
    pub guna_scores: Vec<GunaScore>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

fn base_recommendations(percent: u32) -> &'static [&'static str] {
    match percent {
        80.. => &[
            "Excellent match! Proceed with marriage confidently.",
            "Perform Ganesh Pooja before wedding for auspicious beginning.",
        ],
        60..=79 => &[
            "Very good match. Minor adjustments may be needed.",
            "Consult a qualified astrologer for an auspicious Muhurat.",
        ],
        40..=59 => &[
            "Good match with some challenges.",
            "Perform remedial poojas before marriage.",
            "Focus on building strong communication.",
        ],
        _ => &[
            "Match needs attention. Consultation with expert recommended.",
            "Remedial measures are essential before proceeding.",
        ],
    }
}

// Guna Milan is read from the groom's side; same-gender pairs keep input order.
fn groom_and_bride<'a>(
    first: &'a CompleteKundli,
    second: &'a CompleteKundli,
) -> (&'a CompleteKundli, &'a CompleteKundli) {
    match (first.personal_info.gender, second.personal_info.gender) {
        (Gender::Female, Gender::Male) => (second, first),
        _ => (first, second),
    }
}

fn moon_profile(kundli: &CompleteKundli) -> MoonProfile {
    MoonProfile::new(&kundli.birth_chart, &kundli.planetary_positions)
}

/// Score two complete kundlis against each other.
pub fn analyze_cross_kundli_compatibility(
    first: &CompleteKundli,
    second: &CompleteKundli,
) -> CompatibilityResult {
    let (groom, bride) = groom_and_bride(first, second);
    let groom_moon = moon_profile(groom);
    let bride_moon = moon_profile(bride);

    let guna_scores = calculate_gunas(&groom_moon, &bride_moon);
    let matching_gunas: f64 = guna_scores.iter().map(|g| g.scored_points).sum();
    let compatibility_score = (matching_gunas / MAX_GUNAS * 100.0).round() as u32;
    let verdict = MatchVerdict::from_percent(compatibility_score);

    let mut issues = Vec::new();
    let mut recommendations: Vec<String> = base_recommendations(compatibility_score)
        .iter()
        .map(|s| s.to_string())
        .collect();

    let groom_manglik = groom.dosha_analysis.has(DoshaType::Manglik);
    let bride_manglik = bride.dosha_analysis.has(DoshaType::Manglik);
    if groom_manglik && bride_manglik {
        recommendations.push(BOTH_MANGLIK.to_string());
    } else if groom_manglik != bride_manglik {
        issues.push(ONE_MANGLIK.to_string());
        recommendations.push(ONE_MANGLIK_REMEDY.to_string());
    }

    if groom_moon.nakshatra.nadi == bride_moon.nakshatra.nadi {
        issues.push(format!(
            "Nadi Dosha: both Moon nakshatras ({} and {}) share the {:?} Nadi",
            groom_moon.nakshatra.name, bride_moon.nakshatra.name, groom_moon.nakshatra.nadi
        ));
        recommendations
            .push("Perform Nadi Dosha Nivaran puja and donate grains to Brahmins".to_string());
    }

    let distance = gunas::rashi_distance(&groom_moon, &bride_moon);
    if matches!(distance, 2 | 12 | 5 | 9 | 6 | 8) {
        issues.push(format!(
            "Bhakoot Dosha: Moon signs {} and {} fall in a {}/{} relationship",
            groom_moon.rashi,
            bride_moon.rashi,
            distance,
            14 - distance
        ));
    }

    debug!(
        "compatibility {} x {}: {} gunas ({}%), {} issues",
        groom.personal_info.name,
        bride.personal_info.name,
        matching_gunas,
        compatibility_score,
        issues.len()
    );

    CompatibilityResult {
        compatibility_score,
        matching_gunas,
        verdict,
        guna_scores,
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(MatchVerdict::from_percent(100), MatchVerdict::Excellent);
        assert_eq!(MatchVerdict::from_percent(80), MatchVerdict::Excellent);
        assert_eq!(MatchVerdict::from_percent(79), MatchVerdict::VeryGood);
        assert_eq!(MatchVerdict::from_percent(40), MatchVerdict::Good);
        assert_eq!(MatchVerdict::from_percent(25), MatchVerdict::Average);
        assert_eq!(MatchVerdict::from_percent(18), MatchVerdict::Poor);
        assert_eq!(MatchVerdict::from_percent(17), MatchVerdict::NotRecommended);
    }

    #[test]
    fn test_recommendation_bands() {
        assert_eq!(base_recommendations(90).len(), 2);
        assert_eq!(base_recommendations(45).len(), 3);
        assert_eq!(
            base_recommendations(10)[0],
            "Match needs attention. Consultation with expert recommended."
        );
    }

    #[test]
    fn test_verdict_serializes_with_spaces() {
        let json = serde_json::to_string(&MatchVerdict::NotRecommended).unwrap_or_default();
        assert_eq!(json, "\"Not Recommended\"");
    }
}
