//! Pitra dosha: ancestral affliction through the Sun or the 9th house.

use crate::chart::{position_of, Planet, PlanetaryPosition};

use super::catalog::{
    plain, DoshaProfile, Finding, LalKitabSpec, RemedySpec, ScriptureSpec, TimingSpec,
};
use super::types::{Dosha, DoshaType, RemedyCategory, Severity};

/// A 9th-house Sun or Saturn weaker than this afflicts the ancestors' house.
const AFFLICTED_STRENGTH: u8 = 40;

pub(crate) const REMEDIES: &[RemedySpec] = &[
    RemedySpec {
        category: RemedyCategory::Pilgrimage,
        title: "Gaya Pind Daan",
        description: "The most powerful ritual for Pitra Dosha at Gaya, Bihar",
        steps: &[
            "Travel to Gaya, Bihar (especially during Pitru Paksha)",
            "Perform Pind Daan at Vishnupad Temple",
            "Offer pindas (rice balls) at 45 designated ghats",
            "Perform Tarpan (water offering) to ancestors",
            "Donate food, clothes, and money to Brahmins",
            "Take holy bath in Falgu river",
        ],
        timing: TimingSpec::at(
            "Pitru Paksha (15 days before Diwali) or Amavasya",
            "Any day during Pitru Paksha, or monthly Amavasya",
        ),
        materials: &[],
        direction: None,
        offerings: &[],
        duration: "One-time pilgrimage, powerful lifelong effects",
        expected_results: "Complete liberation for ancestors, dosha fully removed, family prosperity",
        cost: Some("₹21,000 - ₹51,000 (travel + puja + donations)"),
    },
    RemedySpec {
        category: RemedyCategory::Pooja,
        title: "Monthly Shraddh on Amavasya",
        description: "Regular ancestral worship as per Vedic tradition",
        steps: &[
            "Perform shraddh ceremony on every Amavasya",
            "Prepare rice, dal, vegetables, and sweets",
            "Offer to crows first (they represent ancestors)",
            "Invite a Brahmin for ritual meal",
            "Donate dakshina and clothes",
            "Perform tarpan with black sesame and water",
        ],
        timing: TimingSpec::at("Afternoon on Amavasya", "Amavasya (New Moon) every month"),
        materials: &["Food items", "Black sesame", "Kusha grass", "Water in vessel", "Dakshina"],
        direction: None,
        offerings: &[],
        duration: "Monthly practice for lifetime",
        expected_results: "Ancestors remain pleased, family progresses smoothly",
        cost: None,
    },
    RemedySpec {
        category: RemedyCategory::Mantra,
        title: "Pitra Gayatri Mantra",
        description: "Specific mantra for ancestral peace",
        steps: &[
            "Sit facing South on Amavasya",
            "Light a ghee lamp",
            "Chant: \"ॐ पितृगणाय विद्महे जगत धारिणी धीमहि तन्नो पितरः प्रचोदयात्\"",
            "Complete 108 repetitions",
        ],
        timing: TimingSpec::at("Afternoon on Amavasya", "Amavasya"),
        materials: &[],
        direction: Some("Face South (direction of ancestors)"),
        offerings: &[],
        duration: "Every Amavasya for 1 year",
        expected_results: "Ancestral satisfaction, family harmony",
        cost: None,
    },
    plain(
        RemedyCategory::Charity,
        "Feeding the Needy",
        "Charity in ancestors' names",
        &[
            "Feed poor people, especially elderly",
            "Donate on Amavasya or death anniversary of ancestors",
            "Give food, clothes, or money",
            "Mentally dedicate the charity to ancestors",
        ],
        TimingSpec::day("Amavasya or ancestor's death anniversary"),
        "Regular practice",
        "Merit reaches ancestors, brings their blessings",
    ),
];

const PROFILE: DoshaProfile = DoshaProfile {
    dosha_type: DoshaType::Pitra,
    effects: &[
        "Delays in progeny or childlessness",
        "Repeated miscarriages",
        "Financial instability despite efforts",
        "Unfulfilled desires",
        "Dreams of deceased ancestors",
        "Family conflicts and disputes",
    ],
    cancellation: &[
        "Strong Jupiter aspect on Sun reduces effects",
        "Performing ancestral rituals regularly",
    ],
    remedies: REMEDIES,
    scriptures: &[ScriptureSpec {
        scripture: "Garuda Purana",
        chapter: "Pretakalpa",
        verse: "Chapter 2, Verses 15-18",
        text: "पितॄणां अकृता श्राद्धं तेषां शापेन दुःखं भवति। तर्पणं श्राद्धं च कुर्यात् पितॄणां शान्तिः भवेत्।",
        translation: "When rituals for ancestors are not performed, their curse causes suffering. Performing Tarpan and Shraddh brings peace to ancestors and prosperity to descendants.",
    }],
    lal_kitab: &[
        LalKitabSpec {
            title: "Feeding Crows",
            description: "Crows are considered messengers of ancestors in Lal Kitab",
            procedure: &[
                "Feed crows daily, especially on Amavasya (new moon)",
                "Offer rice, roti, and sweets",
                "Make sure crows eat the food",
                "Do this with devotion, remembering ancestors",
            ],
            duration: "Daily practice, minimum 43 days",
            benefits: "Ancestors become satisfied, blessings flow",
            note: None,
        },
        LalKitabSpec {
            title: "Amavasya Water Ritual",
            description: "Lal Kitab's water offering for ancestors",
            procedure: &[
                "On every Amavasya, take water in copper vessel",
                "Add black sesame seeds and barley",
                "Stand facing South",
                "Pour water slowly on ground or in river",
                "Pray: \"May my ancestors be satisfied\"",
            ],
            duration: "Every Amavasya for one year",
            benefits: "Ancestral debts repaid, family prosperity",
            note: None,
        },
    ],
    insight: "Pitra Dosha indicates unfulfilled promises to ancestors in past lives. The soul must complete pending ancestral duties. Regular shraddh ceremonies and charity in ancestors' names bring rapid relief.",
};

fn afflicted_in_ninth(position: Option<&PlanetaryPosition>) -> bool {
    position.map_or(false, |p| p.house == 9 && p.strength < AFFLICTED_STRENGTH)
}

pub fn detect_pitra_dosha(positions: &[PlanetaryPosition]) -> Option<Dosha> {
    let sun = position_of(positions, Planet::Sun)?;
    let rahu = position_of(positions, Planet::Rahu)?;

    let triggered = sun.house == rahu.house
        || afflicted_in_ninth(Some(sun))
        || afflicted_in_ninth(position_of(positions, Planet::Saturn));
    if !triggered {
        return None;
    }

    Some(PROFILE.build(Finding {
        name: "Pitra Dosha (Ancestral Affliction)".to_string(),
        severity: Severity::Moderate,
        description: "Affliction of Sun or 9th house indicates unresolved ancestral karma and requires spiritual remedies to pacify forefathers.".to_string(),
        formation: "Sun-Rahu conjunction or affliction of 9th house (house of father and ancestors)".to_string(),
        leading_effects: Vec::new(),
    }))
}
