//! Grahan dosha: a luminary eclipsed by one of the nodes.

use crate::chart::{house_of, Planet, PlanetaryPosition};

use super::catalog::{
    plain, DoshaProfile, Finding, LalKitabSpec, RemedySpec, ScriptureSpec, TimingSpec,
};
use super::types::{Dosha, DoshaType, RemedyCategory, Severity};

pub(crate) const REMEDIES: &[RemedySpec] = &[
    plain(
        RemedyCategory::Pooja,
        "Eclipse Day Rituals",
        "Special rituals during eclipses",
        &[
            "Fast during eclipse hours",
            "Take bath before and after eclipse",
            "Chant Surya or Chandra mantras",
            "Donate food and clothes",
            "Visit temple after eclipse",
        ],
        TimingSpec::time("During solar and lunar eclipses"),
        "During every eclipse",
        "Dosha effects reduced over time",
    ),
    plain(
        RemedyCategory::Mantra,
        "Surya and Chandra Mantras",
        "Daily mantras for Sun and Moon",
        &[
            "Chant Surya Mantra: \"ॐ सूर्याय नमः\" (108 times)",
            "Chant Chandra Mantra: \"ॐ चन्द्राय नमः\" (108 times)",
            "Perform daily at sunrise",
        ],
        TimingSpec::time("Sunrise for Surya, evening for Chandra"),
        "Daily for 1 year",
        "Luminaries strengthened, dosha weakened",
    ),
];

const PROFILE: DoshaProfile = DoshaProfile {
    dosha_type: DoshaType::Grahan,
    effects: &[
        "Obstacles from parents",
        "Health issues to father or mother",
        "Mental stress and confusion",
        "Difficulties in government matters",
        "Eye problems or headaches",
    ],
    cancellation: &["Jupiter aspect provides protection", "Performing eclipse remedies"],
    remedies: REMEDIES,
    scriptures: &[ScriptureSpec {
        scripture: "Brihat Samhita",
        chapter: "Eclipse Chapter",
        verse: "Verse 20",
        text: "ग्रहणयोगे जातः दानस्नानमन्त्रैः शुद्धिं कुर्यात्।",
        translation: "One born in eclipse yoga should perform charity, bathing, and mantra recitation for purification.",
    }],
    lal_kitab: &[LalKitabSpec {
        title: "Eclipse Day Charity",
        description: "Lal Kitab's eclipse remedy",
        procedure: &[
            "During every solar/lunar eclipse, donate food",
            "Take bath after eclipse ends",
            "Chant Gayatri Mantra 108 times",
            "Donate to temples",
        ],
        duration: "During every eclipse",
        benefits: "Eclipse dosha effects neutralized",
        note: None,
    }],
    insight: "Grahan Dosha indicates karmic issues with parental relationships. Honoring parents and performing eclipse rituals brings relief.",
};

pub fn detect_grahan_dosha(positions: &[PlanetaryPosition]) -> Option<Dosha> {
    let sun = house_of(positions, Planet::Sun)?;
    let moon = house_of(positions, Planet::Moon)?;
    let rahu = house_of(positions, Planet::Rahu)?;
    let ketu = house_of(positions, Planet::Ketu);

    let eclipsed = |luminary: u8| luminary == rahu || Some(luminary) == ketu;
    if !eclipsed(sun) && !eclipsed(moon) {
        return None;
    }

    Some(PROFILE.build(Finding {
        name: "Grahan Dosha (Eclipse Affliction)".to_string(),
        severity: Severity::Moderate,
        description: "Sun or Moon conjunct with Rahu/Ketu creates eclipse-like effects in life, affecting father (Sun) or mother (Moon) relationships.".to_string(),
        formation: "Sun/Moon with Rahu/Ketu in same house".to_string(),
        leading_effects: Vec::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doshas::test_support::placed;

    #[test]
    fn test_moon_with_ketu() {
        let positions = placed([2, 10, 4, 5, 6, 7, 8, 9, 10]);
        let dosha = detect_grahan_dosha(&positions).unwrap();
        assert_eq!(dosha.dosha_type, DoshaType::Grahan);
    }

    #[test]
    fn test_sun_with_rahu() {
        let positions = placed([9, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(detect_grahan_dosha(&positions).is_some());
    }

    #[test]
    fn test_luminaries_clear_of_nodes() {
        let positions = placed([2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(detect_grahan_dosha(&positions).is_none());
    }
}
