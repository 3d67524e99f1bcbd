//! House and ascendant analysis.

use serde::{Deserialize, Serialize};

use crate::chart::{position_of, BirthChart, Planet, PlanetaryPosition, ZodiacSign};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseAnalysis {
    pub house: u8,
    pub lord: Planet,
    pub lord_position: String,
    pub significance: Vec<String>,
    pub predictions: Vec<String>,
    /// House strength on a 1..5 scale.
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantAnalysis {
    pub sign: ZodiacSign,
    pub lord: Planet,
    pub degree: u8,
    pub personality: Vec<String>,
    pub physical_traits: Vec<String>,
    pub mental_traits: Vec<String>,
    pub life_approach: String,
}

const HOUSE_DETAILS: [[&str; 4]; 12] = [
    [
        "Physical appearance and health",
        "Personality and character",
        "General life direction",
        "Self-confidence",
    ],
    ["Family wealth and possessions", "Speech and voice", "Food habits", "Early childhood"],
    [
        "Siblings and their well-being",
        "Courage and valor",
        "Short distance travels",
        "Communication skills",
    ],
    [
        "Mother and maternal happiness",
        "Home and real estate",
        "Vehicles and conveyances",
        "Inner happiness",
    ],
    [
        "Children and progeny",
        "Romance and love affairs",
        "Intelligence and wisdom",
        "Creative expression",
    ],
    [
        "Health problems and diseases",
        "Enemies and obstacles",
        "Debts and litigation",
        "Service and employment",
    ],
    [
        "Marriage and spouse",
        "Business partnerships",
        "Foreign travels for business",
        "Public image",
    ],
    [
        "Longevity and death",
        "Sudden events and transformations",
        "Inheritance and legacies",
        "Occult knowledge",
    ],
    [
        "Fortune and luck",
        "Father and paternal influence",
        "Higher education and philosophy",
        "Long journeys abroad",
    ],
    ["Career and profession", "Status and fame", "Authority and power", "Government connections"],
    ["Income and gains", "Fulfillment of desires", "Friends and social circle", "Elder siblings"],
    ["Expenses and losses", "Foreign residence", "Spiritual liberation", "Isolation and solitude"],
];

/// Detailed significations of a 1-based house number.
pub fn house_significances(number: u8) -> Vec<String> {
    match number {
        1..=12 => HOUSE_DETAILS[(number - 1) as usize]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// Canned readings driven by Jupiter, Saturn and Mars occupancy.
pub fn house_predictions(occupants: &[Planet]) -> Vec<String> {
    if occupants.is_empty() {
        return vec!["House is empty but receives aspects from other planets".to_string()];
    }

    let mut predictions = Vec::new();
    if occupants.contains(&Planet::Jupiter) {
        predictions.push("Jupiter brings expansion and growth to this area".to_string());
    }
    if occupants.contains(&Planet::Saturn) {
        predictions.push("Saturn may cause delays but ensures lasting results".to_string());
    }
    if occupants.contains(&Planet::Mars) {
        predictions.push("Mars provides energy and courage in this domain".to_string());
    }
    if predictions.is_empty() {
        predictions.push("Positive influences from planetary positions".to_string());
    }
    predictions
}

fn describe_lord_position(lord: Planet, positions: &[PlanetaryPosition]) -> String {
    match position_of(positions, lord) {
        Some(pos) => format!("{} in house {} ({})", lord, pos.house, pos.sign),
        None => format!("{} position unknown", lord),
    }
}

/// One analysis per house, in house order.
pub fn analyze_houses(chart: &BirthChart, positions: &[PlanetaryPosition]) -> Vec<HouseAnalysis> {
    chart
        .houses
        .iter()
        .map(|house| {
            let occupants: Vec<Planet> = positions
                .iter()
                .filter(|p| p.house == house.number)
                .map(|p| p.planet)
                .collect();
            HouseAnalysis {
                house: house.number,
                lord: house.lord,
                lord_position: describe_lord_position(house.lord, positions),
                significance: house_significances(house.number),
                predictions: house_predictions(&occupants),
                rating: house.strength as f64 / 20.0,
            }
        })
        .collect()
}

struct AscendantProfile {
    personality: &'static [&'static str],
    physical: &'static [&'static str],
    mental: &'static [&'static str],
    approach: &'static str,
}

const DEFAULT_PROFILE: AscendantProfile = AscendantProfile {
    personality: &["Unique personality traits", "Balanced approach", "Good interpersonal skills"],
    physical: &["Healthy appearance", "Good features", "Average build"],
    mental: &["Analytical mind", "Balanced thinking", "Good memory"],
    approach: "Balanced approach to life with focus on personal growth.",
};

fn ascendant_profile(sign: ZodiacSign) -> Option<AscendantProfile> {
    let profile = match sign {
        ZodiacSign::Aries => AscendantProfile {
            personality: &[
                "Dynamic and energetic",
                "Natural leader",
                "Impulsive decision maker",
                "Competitive spirit",
            ],
            physical: &["Athletic build", "Sharp features", "Good height", "Energetic appearance"],
            mental: &["Quick thinking", "Courageous", "Sometimes impatient", "Action-oriented"],
            approach: "Direct and straightforward approach to life. Takes initiative but needs to develop patience.",
        },
        ZodiacSign::Taurus => AscendantProfile {
            personality: &[
                "Stable and reliable",
                "Practical nature",
                "Patient and persistent",
                "Appreciation for beauty",
            ],
            physical: &["Strong build", "Attractive features", "Good complexion", "Pleasant voice"],
            mental: &[
                "Patient thinker",
                "Stubborn at times",
                "Practical approach",
                "Sensory oriented",
            ],
            approach: "Steady and methodical progress. Values security and comfort. Loyal and dependable.",
        },
        ZodiacSign::Gemini => AscendantProfile {
            personality: &[
                "Curious and versatile",
                "Witty communicator",
                "Sociable",
                "Restless energy",
            ],
            physical: &["Slender build", "Expressive hands", "Youthful look", "Bright eyes"],
            mental: &["Quick learner", "Multi-tasking mind", "Easily distracted", "Logical"],
            approach: "Explores many paths at once. Thrives on variety and learning but benefits from focus.",
        },
        ZodiacSign::Cancer => AscendantProfile {
            personality: &[
                "Caring and nurturing",
                "Protective of family",
                "Intuitive",
                "Emotionally sensitive",
            ],
            physical: &["Round face", "Medium build", "Soft features", "Pale complexion"],
            mental: &["Strong memory", "Imaginative", "Moody at times", "Empathetic"],
            approach: "Builds life around home and belonging. Guided by feeling, needs emotional security.",
        },
        ZodiacSign::Leo => AscendantProfile {
            personality: &["Confident and generous", "Commanding presence", "Loyal", "Proud"],
            physical: &["Broad shoulders", "Upright posture", "Thick hair", "Radiant appearance"],
            mental: &["Creative", "Decisive", "Seeks recognition", "Optimistic"],
            approach: "Leads from the front and seeks to shine. Generous to others but must guard against ego.",
        },
        ZodiacSign::Virgo => AscendantProfile {
            personality: &[
                "Detail oriented",
                "Helpful and modest",
                "Organised",
                "Health conscious",
            ],
            physical: &["Neat appearance", "Slim build", "Youthful features", "Delicate skin"],
            mental: &["Analytical", "Critical thinker", "Prone to worry", "Methodical"],
            approach: "Improves everything through careful analysis and service. Should avoid perfectionism.",
        },
        ZodiacSign::Libra => AscendantProfile {
            personality: &["Diplomatic and charming", "Fair-minded", "Sociable", "Seeks harmony"],
            physical: &[
                "Well-proportioned body",
                "Attractive smile",
                "Graceful movement",
                "Pleasant features",
            ],
            mental: &["Balanced judgement", "Indecisive at times", "Artistic sense", "Cooperative"],
            approach: "Moves through life by partnership and balance. Values beauty, fairness and peace.",
        },
        ZodiacSign::Scorpio => AscendantProfile {
            personality: &["Intense and determined", "Private", "Magnetic", "Resilient"],
            physical: &["Penetrating eyes", "Strong build", "Sharp features", "Commanding gaze"],
            mental: &["Investigative", "Strategic", "Secretive", "Deeply perceptive"],
            approach: "Pursues goals with total commitment. Transforms through crisis and values loyalty.",
        },
        ZodiacSign::Sagittarius => AscendantProfile {
            personality: &[
                "Optimistic and adventurous",
                "Honest",
                "Philosophical",
                "Freedom loving",
            ],
            physical: &["Tall stature", "Athletic limbs", "Open face", "Cheerful expression"],
            mental: &["Broad-minded", "Idealistic", "Blunt at times", "Eager to learn"],
            approach: "Seeks meaning through travel, study and faith. Generous spirit that needs independence.",
        },
        ZodiacSign::Capricorn => AscendantProfile {
            personality: &["Ambitious and disciplined", "Responsible", "Reserved", "Practical"],
            physical: &["Lean frame", "Prominent bones", "Serious expression", "Ages gracefully"],
            mental: &["Strategic planner", "Patient", "Cautious", "Realistic"],
            approach: "Climbs steadily through hard work and patience. Success tends to grow with age.",
        },
        ZodiacSign::Aquarius => AscendantProfile {
            personality: &[
                "Independent and original",
                "Humanitarian",
                "Friendly but detached",
                "Progressive",
            ],
            physical: &["Tall build", "Distinctive features", "Clear eyes", "Unconventional style"],
            mental: &["Inventive", "Scientific outlook", "Stubborn in views", "Future oriented"],
            approach: "Works for collective good and new ideas. Values freedom and intellectual connection.",
        },
        ZodiacSign::Pisces => AscendantProfile {
            personality: &["Compassionate and gentle", "Spiritual", "Artistic", "Adaptable"],
            physical: &["Soft eyes", "Medium height", "Fleshy build", "Dreamy expression"],
            mental: &["Intuitive", "Imaginative", "Easily influenced", "Empathetic"],
            approach: "Flows with life guided by intuition and faith. Needs boundaries to protect sensitivity.",
        },
    };
    Some(profile)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Personality reading keyed by the rising sign.
pub fn analyze_ascendant(sign: ZodiacSign) -> AscendantAnalysis {
    let profile = ascendant_profile(sign).unwrap_or(DEFAULT_PROFILE);
    AscendantAnalysis {
        sign,
        lord: sign.lord(),
        degree: 15,
        personality: to_strings(profile.personality),
        physical_traits: to_strings(profile.physical),
        mental_traits: to_strings(profile.mental),
        life_approach: profile.approach.to_string(),
    }
}
