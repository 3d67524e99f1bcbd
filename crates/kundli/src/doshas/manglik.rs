//! Manglik (Kuja) dosha: Mars in a marriage-sensitive house.

use crate::chart::{ordinal, position_of, Planet, PlanetaryPosition};

use super::catalog::{
    plain, DoshaProfile, Finding, LalKitabSpec, RemedySpec, ScriptureSpec, TimingSpec,
};
use super::types::{Dosha, DoshaType, RemedyCategory, Severity};

pub const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];
const SEVERE_HOUSES: [u8; 4] = [1, 4, 7, 8];

pub(crate) const REMEDIES: &[RemedySpec] = &[
    RemedySpec {
        category: RemedyCategory::Pilgrimage,
        title: "Mangalnath Temple Ujjain",
        description: "The birthplace of Mars - most powerful temple for Manglik Dosha",
        steps: &[
            "Visit Mangalnath Temple in Ujjain, Madhya Pradesh",
            "Perform Mangal Bhat Puja (₹1,100 - ₹5,100)",
            "Offer red flowers, sindoor, and sweets to Lord Hanuman",
            "Perform Kumbh Vivah before actual marriage (for severe cases)",
            "Donate red items (red cloth, red lentils, sindoor)",
        ],
        timing: TimingSpec::at(
            "Tuesday morning or during Mars hora",
            "Tuesday, or during Mangal Pradosh",
        ),
        materials: &[],
        direction: None,
        offerings: &[],
        duration: "One-time pilgrimage before marriage",
        expected_results: "Dosha effects neutralized, smooth marriage",
        cost: Some("₹10,000 - ₹25,000 (travel + puja)"),
    },
    RemedySpec {
        category: RemedyCategory::Mantra,
        title: "Mangal Beej Mantra",
        description: "Mars seed mantra from tantric texts",
        steps: &[
            "Wake up on Tuesday morning during Brahma Muhurat",
            "Wear red clothes after bath",
            "Sit facing South (Mars direction)",
            "Use red coral mala or rudraksha",
            "Chant: \"ॐ क्रां क्रीं क्रौं सः भौमाय नमः\" (Om Kraam Kreem Kraum Sah Bhaumaya Namah)",
            "Complete 108 repetitions daily",
        ],
        timing: TimingSpec::at("Sunrise hour, Tuesday morning", "Tuesday")
            .nakshatra("Mrigashira, Chitra, Dhanishta (Mars nakshatras)"),
        materials: &[],
        direction: Some("Face South"),
        offerings: &[],
        duration: "40 days for mild, 90 days for severe dosha",
        expected_results: "Mars becomes favorable, obstacles in marriage removed",
        cost: None,
    },
    RemedySpec {
        category: RemedyCategory::Pooja,
        title: "Hanuman Puja on Tuesdays",
        description: "Hanuman is the ruler of Mars energy",
        steps: &[
            "Visit Hanuman temple every Tuesday",
            "Offer red flowers, sindoor, and coconut",
            "Light a ghee lamp",
            "Recite Hanuman Chalisa (one or 11 times)",
            "Distribute prasad (laddoos or bananas) to devotees",
            "Touch feet of Hanuman murti with devotion",
        ],
        timing: TimingSpec::at("Morning 6 AM - 12 PM", "Tuesday"),
        materials: &["Red flowers", "Sindoor", "Coconut", "Sweets", "Ghee lamp"],
        direction: None,
        offerings: &[],
        duration: "Every Tuesday for 1 year",
        expected_results: "Hanuman's blessings, courage, marital harmony",
        cost: None,
    },
    RemedySpec {
        category: RemedyCategory::Gemstone,
        title: "Red Coral (Moonga)",
        description: "Wear Red Coral to strengthen and pacify Mars",
        steps: &[
            "Buy genuine red coral (minimum 6 carats)",
            "Get it set in gold or copper ring",
            "Purify in gangajal and raw milk",
            "Energize on Tuesday during Mars hora",
            "Wear in ring finger of right hand",
            "Touch to Hanuman idol before wearing first time",
        ],
        timing: TimingSpec::at("Tuesday sunrise hour", "Tuesday"),
        materials: &[],
        direction: None,
        offerings: &[],
        duration: "Wear continuously after wearing ceremony",
        expected_results: "Mars energy becomes balanced, confidence increases, relationship improves",
        cost: Some("₹5,000 - ₹50,000 depending on quality"),
    },
    plain(
        RemedyCategory::Fasting,
        "Tuesday Fast",
        "Traditional Mars fasting for dosha reduction",
        &[
            "Fast from sunrise to sunset on Tuesdays",
            "Consume only fruits, milk, or water",
            "No grains, salt, or heavy food",
            "Break fast after sunset with simple food",
            "Maintain celibacy on fast day",
        ],
        TimingSpec::day("Tuesday"),
        "21 or 40 consecutive Tuesdays",
        "Mars becomes pleased, obstacles removed",
    ),
];

const PROFILE: DoshaProfile = DoshaProfile {
    dosha_type: DoshaType::Manglik,
    effects: &[
        "Delays or obstacles in marriage",
        "Marital discord if not properly matched",
        "Accidents or injuries possible",
        "Aggressive temperament",
        "Financial fluctuations in partnership",
    ],
    cancellation: &[
        "If partner also has Manglik Dosha, it gets cancelled (Manglik + Manglik = No Dosha)",
        "Mars in own sign (Aries, Scorpio) or exalted (Capricorn) reduces effects by 50%",
        "Jupiter's aspect on Mars cancels dosha",
        "Manglik dosha effects reduce after age 28",
    ],
    remedies: REMEDIES,
    scriptures: &[
        ScriptureSpec {
            scripture: "Brihat Parashara Hora Shastra",
            chapter: "Chapter 81",
            verse: "Verses 47-50",
            text: "कुजो लग्नात् चतुर्थे सप्तमे अष्टमे द्वादशे वा। तत्र कुजदोषः भवति विवाहे विघ्नकारकः।",
            translation: "Mars in 1st, 4th, 7th, 8th, or 12th house from Lagna creates Kuja Dosha, which causes obstacles in marriage.",
        },
        ScriptureSpec {
            scripture: "Jataka Parijata",
            chapter: "Chapter 7",
            verse: "Verse 28",
            text: "मङ्गलो यदि लग्नादिषु दुःस्थानेषु तदा विवाहे कष्टं भवति।",
            translation: "When Mars occupies inauspicious houses from Lagna, it creates difficulties in married life.",
        },
    ],
    lal_kitab: &[
        LalKitabSpec {
            title: "Red Lentil Remedy",
            description: "Classic Lal Kitab remedy for Mars pacification",
            procedure: &[
                "Take red lentils (masoor dal) every Tuesday",
                "Tie them in a red cloth piece",
                "Donate to a temple or flow in running water",
                "Feed red lentils to birds",
            ],
            duration: "21 Tuesdays continuously",
            benefits: "Reduces Mars aggression, improves marital prospects",
            note: None,
        },
        LalKitabSpec {
            title: "Hanuman Prasad",
            description: "Distributing Hanuman prasad on Tuesdays",
            procedure: &[
                "Visit Hanuman temple every Tuesday",
                "Offer sindoor, red flowers, and sweets",
                "Distribute prasad to at least 7 people",
                "Recite Hanuman Chalisa once",
            ],
            duration: "11 or 21 Tuesdays",
            benefits: "Blessed married life, courage, protection",
            note: None,
        },
        LalKitabSpec {
            title: "Karwa Chauth Fast (for women)",
            description: "Traditional fast for marital bliss",
            procedure: &[
                "Fast from sunrise to moonrise on Karwa Chauth",
                "Worship Lord Shiva and Goddess Parvati",
                "Break fast after seeing moon and spouse's face",
                "Seek blessings from elders",
            ],
            duration: "Annual observance after marriage",
            benefits: "Husband's long life, marital happiness",
            note: None,
        },
    ],
    insight: "Bhrigu Samhita states that Mars in these houses indicates past life conflicts in relationships. The soul chose this placement to learn patience and compromise. Marriage after 28 years or to another Manglik person brings harmony.",
};

/// Severity of a Mars placement, or `None` outside the Manglik houses.
pub fn manglik_severity(mars_house: u8) -> Option<Severity> {
    if !MANGLIK_HOUSES.contains(&mars_house) {
        return None;
    }
    if SEVERE_HOUSES.contains(&mars_house) {
        Some(Severity::Severe)
    } else {
        Some(Severity::Mild)
    }
}

pub fn detect_manglik_dosha(positions: &[PlanetaryPosition]) -> Option<Dosha> {
    let mars = position_of(positions, Planet::Mars)?;
    let severity = manglik_severity(mars.house)?;

    Some(PROFILE.build(Finding {
        name: "Manglik Dosha (Kuja Dosha)".to_string(),
        severity,
        description: format!(
            "Mars is placed in {} house, creating Manglik Dosha. This affects marital harmony and requires proper matching and remedies.",
            ordinal(mars.house)
        ),
        formation: format!("Mars in {} house from Lagna (Ascendant)", ordinal(mars.house)),
        leading_effects: Vec::new(),
    }))
}
