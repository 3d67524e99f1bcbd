//! Strengths, challenges, enhancement suggestions and the narrative insight.

use crate::chart::{BirthChart, Dignity, PlanetaryPosition};
use crate::doshas::Dosha;
use crate::vedic::{Yoga, YogaType};

const GENERAL_STRENGTHS: [&str; 7] = [
    "Strong leadership abilities",
    "Good analytical and decision-making skills",
    "Excellent communication talents",
    "Natural business acumen",
    "Strong family support system",
    "Good health and vitality",
    "Spiritual inclination and wisdom",
];

const GENERAL_CHALLENGES: [&str; 5] = [
    "Tendency to be impatient at times",
    "Need to manage stress better",
    "Should avoid overconfidence in decisions",
    "Work-life balance needs attention",
    "Financial planning requires discipline",
];

const NARRATIVE_INSIGHTS: [&str; 6] = [
    "According to Bhrigu Samhita, your soul has experienced 347 past lives. In your most recent past life, you were a spiritual teacher in ancient India.",
    "Your current life purpose is to balance material success with spiritual growth.",
    "Bhrigu Samhita indicates that you will achieve significant success after completing your Saturn period.",
    "Your ancestors have blessed you for the good karma you performed in past 3 lives.",
    "This lifetime, you will face major transformation during age 28-32 and 42-45.",
    "Bhrigu Samhita predicts unexpected wealth from property or inheritance between age 35-40.",
];

fn is_affliction(yoga: &Yoga) -> bool {
    yoga.yoga_type == YogaType::Kemadruma
}

/// Canned strengths followed by dignified planets and supportive yogas.
pub fn identify_strengths(positions: &[PlanetaryPosition], yogas: &[Yoga]) -> Vec<String> {
    let mut strengths: Vec<String> = GENERAL_STRENGTHS.iter().map(|s| s.to_string()).collect();

    for pos in positions {
        match pos.dignity {
            Dignity::Exalted => strengths.push(format!(
                "Exalted {} in {} amplifies {}",
                pos.planet,
                pos.sign,
                pos.planet.effects()[0].to_lowercase()
            )),
            Dignity::OwnSign => strengths.push(format!(
                "{} in its own sign {} gives dependable results",
                pos.planet, pos.sign
            )),
            _ => {}
        }
    }

    for yoga in yogas.iter().filter(|y| !is_affliction(y)) {
        match yoga.effects.first() {
            Some(effect) => {
                strengths.push(format!("{} brings {}", yoga.name, effect.to_lowercase()))
            }
            None => strengths.push(yoga.name.clone()),
        }
    }
    strengths
}

/// Canned challenges followed by weak planets, afflicting yogas and doshas.
pub fn identify_challenges(
    positions: &[PlanetaryPosition],
    yogas: &[Yoga],
    doshas: &[Dosha],
    threshold: u8,
) -> Vec<String> {
    let mut challenges: Vec<String> =
        GENERAL_CHALLENGES.iter().map(|s| s.to_string()).collect();

    for pos in positions.iter().filter(|p| p.is_weak(threshold)) {
        challenges.push(format!(
            "Weak {} (strength {}) needs support through remedies",
            pos.planet, pos.strength
        ));
    }
    for yoga in yogas.iter().filter(|y| is_affliction(y)) {
        challenges.push(format!("{}: {}", yoga.name, yoga.effects.join(", ")));
    }
    for dosha in doshas {
        challenges.push(format!(
            "{} ({:?}) calls for regular remedies",
            dosha.name, dosha.severity
        ));
    }
    challenges
}

/// Practice suggestions, with extra entries for weak planets and doshas.
pub fn generate_enhancement_suggestions(
    positions: &[PlanetaryPosition],
    doshas: &[Dosha],
    threshold: u8,
) -> Vec<String> {
    let mut suggestions: Vec<String> = [
        "Regular meditation and pranayama to balance planetary energies",
        "Daily sunrise Surya Namaskar for vitality and success",
        "Chanting Gayatri Mantra 108 times daily for overall prosperity",
        "Wearing rudraksha mala for spiritual protection and growth",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let weak: Vec<&str> = positions
        .iter()
        .filter(|p| p.is_weak(threshold))
        .map(|p| p.planet.name())
        .collect();
    if !weak.is_empty() {
        suggestions.push(format!(
            "Strengthen weak planets ({}) through mantras and gemstones",
            weak.join(", ")
        ));
    }

    if !doshas.is_empty() {
        suggestions.push(
            "Perform dosha-specific remedies regularly for maximum life improvement".to_string(),
        );
        suggestions.push(
            "Consider visiting major pilgrimage sites for powerful karmic cleansing".to_string(),
        );
    }

    suggestions.extend(
        [
            "Study sacred scriptures like Bhagavad Gita for wisdom and guidance",
            "Regular charity and service to humanity for karmic merit",
            "Maintain a daily spiritual practice routine without fail",
            "Follow Vedic daily routine (Dinacharya) - wake at Brahma Muhurat",
            "Eat sattvic food and avoid tamasic substances",
            "Practice gratitude and positive thinking daily",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    suggestions
}

/// One entry of the insight table, picked by ascendant and moon sign.
pub fn narrative_insight(chart: &BirthChart) -> String {
    let index = (chart.ascendant.index() + chart.moon_sign.index()) % NARRATIVE_INSIGHTS.len();
    NARRATIVE_INSIGHTS[index].to_string()
}
