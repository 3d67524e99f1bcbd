//! Shrapit dosha: Saturn and Rahu sharing a house.

use crate::chart::{position_of, Planet, PlanetaryPosition};

use super::catalog::{
    plain, DoshaProfile, Finding, LalKitabSpec, RemedySpec, ScriptureSpec, TimingSpec,
};
use super::types::{Dosha, DoshaType, RemedyCategory, Severity};

pub(crate) const REMEDIES: &[RemedySpec] = &[
    plain(
        RemedyCategory::Mantra,
        "Shani and Rahu Mantras",
        "Combined mantras for Saturn and Rahu",
        &[
            "Chant Shani Mantra: \"ॐ प्रां प्रीं प्रौं सः शनैश्चराय नमः\" (108 times)",
            "Chant Rahu Mantra: \"ॐ भ्रां भ्रीं भ्रौं सः राहवे नमः\" (108 times)",
            "Perform on Saturdays during Saturn hora",
        ],
        TimingSpec::at("Early morning or Saturn hora", "Saturday"),
        "108 days continuous",
        "Pacification of both planets, life becomes easier",
    ),
    plain(
        RemedyCategory::Charity,
        "Saturday Seva",
        "Service to underprivileged on Saturdays",
        &[
            "Serve food to poor people",
            "Help handicapped or elderly",
            "Donate black blankets in winter",
            "Feed dogs and crows",
        ],
        TimingSpec::day("Saturday"),
        "Every Saturday for 1 year",
        "Karmic debt repayment, Saturn-Rahu pleased",
    ),
];

const PROFILE: DoshaProfile = DoshaProfile {
    dosha_type: DoshaType::Shrapit,
    effects: &[
        "Multiple obstacles in life",
        "Delays in everything",
        "Sudden unexpected problems",
        "Chronic health issues",
        "Mental stress and anxiety",
        "Obstacles in marriage and career",
    ],
    cancellation: &["Jupiter's strong aspect reduces effects", "Regular spiritual practices"],
    remedies: REMEDIES,
    scriptures: &[ScriptureSpec {
        scripture: "Hora Shastra",
        chapter: "Dosha Chapter",
        verse: "Verse 45",
        text: "शनिराहुयुते शापितयोगः भवति महादुःखकारकः।",
        translation: "When Saturn and Rahu conjoin, it creates Shrapit Yoga causing great suffering.",
    }],
    lal_kitab: &[LalKitabSpec {
        title: "Saturday Iron Remedy",
        description: "Lal Kitab's iron remedy for Saturn-Rahu",
        procedure: &[
            "Donate iron items on Saturdays",
            "Feed crows and dogs",
            "Serve handicapped people",
            "Never harm servants or workers",
        ],
        duration: "43 Saturdays",
        benefits: "Reduces malefic Saturn-Rahu effects",
        note: None,
    }],
    insight: "Shrapit Dosha indicates serious karmic debts from past lives. Intense spiritual practice and service to humanity are required for redemption.",
};

pub fn detect_shrapit_dosha(positions: &[PlanetaryPosition]) -> Option<Dosha> {
    let saturn = position_of(positions, Planet::Saturn)?;
    let rahu = position_of(positions, Planet::Rahu)?;
    if saturn.house != rahu.house {
        return None;
    }

    Some(PROFILE.build(Finding {
        name: "Shrapit Dosha".to_string(),
        severity: Severity::Severe,
        description: "Conjunction of Saturn and Rahu creates Shrapit Dosha, indicating curses from past life requiring intense spiritual remedies.".to_string(),
        formation: "Saturn and Rahu in same house".to_string(),
        leading_effects: Vec::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doshas::test_support::placed;

    #[test]
    fn test_conjunction_triggers() {
        let positions = placed([2, 3, 4, 5, 6, 7, 5, 5, 11]);
        let dosha = detect_shrapit_dosha(&positions).unwrap();
        assert_eq!(dosha.severity, Severity::Severe);
        assert_eq!(dosha.formation, "Saturn and Rahu in same house");
    }

    #[test]
    fn test_order_of_positions_is_irrelevant() {
        let mut positions = placed([2, 3, 4, 5, 6, 7, 5, 5, 11]);
        positions.reverse();
        assert!(detect_shrapit_dosha(&positions).is_some());
    }

    #[test]
    fn test_separate_houses_clear() {
        let positions = placed([2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(detect_shrapit_dosha(&positions).is_none());
    }
}
