//! Guru-Chandal: Jupiter joined by Rahu.

use crate::chart::{position_of, Planet, PlanetaryPosition};

use super::catalog::{
    plain, DoshaProfile, Finding, LalKitabSpec, RemedySpec, ScriptureSpec, TimingSpec,
};
use super::types::{Dosha, DoshaType, RemedyCategory, Severity};

pub(crate) const REMEDIES: &[RemedySpec] = &[
    plain(
        RemedyCategory::Mantra,
        "Guru Mantra",
        "Strengthen Jupiter to overcome Rahu influence",
        &[
            "Chant: \"ॐ ग्रां ग्रीं ग्रौं सः गुरवे नमः\"",
            "Complete 108 repetitions daily",
            "Perform on Thursdays with yellow flowers",
        ],
        TimingSpec::at("Morning sunrise hour", "Thursday"),
        "40 days minimum",
        "Clear judgment, spiritual progress",
    ),
    plain(
        RemedyCategory::SpiritualPractice,
        "Scripture Study",
        "Regular study of sacred texts",
        &[
            "Read Bhagavad Gita daily (one chapter)",
            "Study under a genuine guru",
            "Respect all teachers and elders",
            "Practice humility and truthfulness",
        ],
        TimingSpec::time("Morning or evening"),
        "Lifelong practice",
        "Wisdom deepens, dosha effects minimize",
    ),
];

const PROFILE: DoshaProfile = DoshaProfile {
    dosha_type: DoshaType::Chandal,
    effects: &[
        "Confusion in decision making",
        "Wavering faith and beliefs",
        "Conflicts with teachers or gurus",
        "Misuse of knowledge",
        "Delayed higher education",
    ],
    cancellation: &["Strong Moon or Venus aspect reduces effects", "Regular study of scriptures"],
    remedies: REMEDIES,
    scriptures: &[ScriptureSpec {
        scripture: "Brihat Parashara Hora Shastra",
        chapter: "Chapter 26",
        verse: "Verse 12",
        text: "गुरुराहुयुते धर्मविपर्ययः भवति।",
        translation: "When Jupiter and Rahu conjoin, there is confusion in dharma (righteousness).",
    }],
    lal_kitab: &[LalKitabSpec {
        title: "Turmeric in Running Water",
        description: "Lal Kitab remedy for Jupiter purification",
        procedure: &[
            "Take turmeric on Thursdays",
            "Tie in yellow cloth",
            "Flow in running water",
            "Donate yellow items to Brahmins",
        ],
        duration: "21 Thursdays",
        benefits: "Jupiter becomes purified, wisdom restored",
        note: None,
    }],
    insight: "Chandal Yoga indicates conflicts with spiritual teachers in past lives. Humility and genuine spiritual seeking resolve this dosha.",
};

pub fn detect_chandal_dosha(positions: &[PlanetaryPosition]) -> Option<Dosha> {
    let jupiter = position_of(positions, Planet::Jupiter)?;
    let rahu = position_of(positions, Planet::Rahu)?;
    if jupiter.house != rahu.house {
        return None;
    }

    Some(PROFILE.build(Finding {
        name: "Chandal Dosha (Guru-Chandal Yoga)".to_string(),
        severity: Severity::Moderate,
        description: "Jupiter-Rahu conjunction creates confusion between right and wrong, affecting wisdom and judgment.".to_string(),
        formation: "Jupiter and Rahu in same house".to_string(),
        leading_effects: Vec::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doshas::test_support::placed;

    #[test]
    fn test_jupiter_with_rahu() {
        let positions = placed([2, 3, 4, 5, 9, 7, 8, 9, 3]);
        let dosha = detect_chandal_dosha(&positions).unwrap();
        assert_eq!(dosha.severity, Severity::Moderate);
        assert_eq!(dosha.lal_kitab_remedies[0].title, "Turmeric in Running Water");
    }

    #[test]
    fn test_clear_when_apart() {
        let positions = placed([2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(detect_chandal_dosha(&positions).is_none());
    }
}
