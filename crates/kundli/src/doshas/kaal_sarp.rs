//! Kaal Sarp: every planet hemmed between the lunar nodes.

use std::cmp::Ordering;

use crate::chart::{ordinal, position_of, Planet, PlanetaryPosition};

use super::catalog::{
    plain, DoshaProfile, Finding, LalKitabSpec, RemedySpec, ScriptureSpec, TimingSpec,
};
use super::types::{Dosha, DoshaType, RemedyCategory, Severity};

/// Named variants keyed by Rahu's house.
const KAAL_SARP_TYPES: [(&str, &str); 12] = [
    ("Anant Kaal Sarp", "Obstacles in life path, mental anxiety"),
    ("Kulik Kaal Sarp", "Financial struggles, family issues"),
    ("Vasuki Kaal Sarp", "Relationship problems, sibling conflicts"),
    ("Shankhpal Kaal Sarp", "Property disputes, mother health issues"),
    ("Padam Kaal Sarp", "Children issues, education obstacles"),
    ("Mahapadam Kaal Sarp", "Health problems, enemy troubles"),
    ("Takshak Kaal Sarp", "Marital conflicts, partnership issues"),
    ("Karkotak Kaal Sarp", "Accidents, sudden losses"),
    ("Shankhachud Kaal Sarp", "Fortune obstacles, father issues"),
    ("Ghatak Kaal Sarp", "Career obstacles, reputation damage"),
    ("Vishdhar Kaal Sarp", "Income problems, friendship betrayals"),
    ("Sheshnag Kaal Sarp", "Expenditure issues, foreign settlement obstacles"),
];

pub(crate) const REMEDIES: &[RemedySpec] = &[
    RemedySpec {
        category: RemedyCategory::Pilgrimage,
        title: "Trimbakeshwar Nag Puja",
        description: "Visit Trimbakeshwar Temple (Nashik, Maharashtra) for the most powerful Kaal Sarp Dosha puja",
        steps: &[
            "Travel to Trimbakeshwar Temple near Nashik",
            "Book Kaal Sarp Puja with temple priests (₹2,100 - ₹11,000)",
            "Perform Rudrabhishek with milk, honey, ghee, and gangajal",
            "Offer Nagdevta puja at the temple's snake shrine",
            "Perform Mahamrityunjaya Jaap (21,000 times minimum)",
            "Take a holy bath in Kushavarta Kund",
            "Donate food to Brahmins after completion",
        ],
        timing: TimingSpec::at(
            "Nag Panchami day (July-August) or any Monday",
            "Monday, Saturday, or Nag Panchami",
        )
        .avoid("Eclipse days, inauspicious nakshatras"),
        materials: &[
            "Milk, honey, ghee, gangajal",
            "Flowers, bilva leaves",
            "Black sesame, rice",
            "Donation items",
        ],
        direction: None,
        offerings: &[],
        duration: "One-time pilgrimage, repeat every 3 years if severe",
        expected_results: "Significant reduction in dosha effects within 6 months. Life obstacles start clearing.",
        cost: Some("₹15,000 - ₹30,000 (travel + puja + donations)"),
    },
    RemedySpec {
        category: RemedyCategory::Mantra,
        title: "Mahamrityunjaya Mantra",
        description: "The most powerful mantra for Kaal Sarp Dosha from Rigveda",
        steps: &[
            "Wake up during Brahma Muhurat (4:00 AM - 6:00 AM)",
            "Take bath and wear clean white clothes",
            "Sit facing East on a woolen mat",
            "Light a ghee lamp and incense",
            "Keep a rudraksha mala (108 beads)",
            "Chant \"ॐ त्र्यम्बकं यजामहे सुगन्धिं पुष्टिवर्धनम् । उर्वारुकमिव बन्धनान्मृत्योर्मुक्षीय माऽमृतात् ।।\"",
            "Complete 108 repetitions (one mala) daily",
            "Conclude with 3 pranams to Lord Shiva",
        ],
        timing: TimingSpec::at(
            "Brahma Muhurat (4:00 AM - 6:00 AM) or Evening 6:00 PM - 7:00 PM",
            "Monday, Saturday for enhanced results",
        )
        .nakshatra("Ardra, Ashlesha, Mrigashira are most powerful"),
        materials: &[],
        direction: Some("Face East during morning, North during evening"),
        offerings: &["Bilva leaves to Shiva", "Milk for Abhishek", "White flowers"],
        duration: "108 days continuous, then daily practice",
        expected_results: "Mental peace, obstacle removal, protection from accidents and sudden problems",
        cost: None,
    },
    RemedySpec {
        category: RemedyCategory::Pooja,
        title: "Nag Panchami Puja",
        description: "Annual worship of serpent deities on Nag Panchami",
        steps: &[
            "Wake up early on Nag Panchami day (Shravana Shukla Panchami)",
            "Create a clay snake or use silver/brass snake idol",
            "Place it on a clean altar with rice and turmeric",
            "Offer milk, flowers, sweets, and incense",
            "Chant \"Om Namah Shivaya\" 108 times",
            "Visit a nearby snake temple or anthill",
            "Offer milk to the anthill (snake abode)",
            "Don't harm any reptiles throughout life",
        ],
        timing: TimingSpec::at(
            "Morning 6:00 AM - 12:00 PM on Nag Panchami",
            "Nag Panchami (annually in July-August)",
        )
        .avoid("After sunset"),
        materials: &[
            "Clay/silver snake idol",
            "Milk, honey",
            "Flowers, rice, turmeric",
            "Sweets",
        ],
        direction: None,
        offerings: &[],
        duration: "Annual ritual, perform every Nag Panchami",
        expected_results: "Serpent deities become pleased, reduce dosha malefic effects",
        cost: None,
    },
    plain(
        RemedyCategory::Charity,
        "Saturday Charity",
        "Regular donations to reduce Rahu-Ketu effects",
        &[
            "Every Saturday, donate black items (black sesame, black clothes, black blanket)",
            "Feed poor people or beggars",
            "Donate iron items or mustard oil",
            "Give food to dogs and crows",
            "Donate to snake rescue organizations",
        ],
        TimingSpec::at("Morning or evening on Saturdays", "Saturday"),
        "Every Saturday for 1 year minimum",
        "Karmic debt repayment, smoother life progress",
    ),
    plain(
        RemedyCategory::SpiritualPractice,
        "Meditation and Pranayama",
        "Daily spiritual practices to balance energies",
        &[
            "Practice Nadi Shodhana Pranayama (Alternate Nostril Breathing) for 10 minutes",
            "Meditate on Lord Shiva or your chosen deity for 15 minutes",
            "Practice mindfulness throughout the day",
            "Read or listen to Shiva Purana or Bhagavad Gita",
            "Avoid negative thoughts and anger",
        ],
        TimingSpec::time("Morning after waking, evening before sunset"),
        "Daily practice for life",
        "Mental clarity, emotional balance, spiritual growth, reduced karmic burden",
    ),
];

const PROFILE: DoshaProfile = DoshaProfile {
    dosha_type: DoshaType::KaalSarp,
    effects: &[
        "Delays in important life events",
        "Repeated obstacles in endeavors",
        "Vivid dreams or nightmares",
        "Mental restlessness",
        "Sudden ups and downs in life",
    ],
    cancellation: &[
        "If any planet is outside Rahu-Ketu axis, dosha is cancelled",
        "If Rahu-Ketu are in 3-9 or 6-12 axis, effects are reduced",
        "Jupiter's strong placement can minimize effects",
    ],
    remedies: REMEDIES,
    scriptures: &[
        ScriptureSpec {
            scripture: "Brihat Parashara Hora Shastra",
            chapter: "Chapter 47",
            verse: "Verses 12-15",
            text: "यदा सर्वे ग्रहाः सर्पमुखे स्युः तदा कालसर्पः। राहुकेत्वोर्मध्ये सर्वे ग्रहाः कालसर्पयोगः।",
            translation: "When all planets are situated in the serpent's mouth (between Rahu and Ketu), it forms Kaal Sarp Yoga.",
        },
        ScriptureSpec {
            scripture: "Phaladeepika",
            chapter: "Chapter 11",
            verse: "Verse 8",
            text: "कालसर्पयोगे जातस्य जीवनं दुःखमयं भवति।",
            translation: "One born with Kaal Sarp Yoga experiences struggles throughout life, but with remedies, effects can be nullified.",
        },
    ],
    lal_kitab: &[
        LalKitabSpec {
            title: "Coconut in Flowing Water",
            description: "The most powerful Lal Kitab remedy for Kaal Sarp Dosha",
            procedure: &[
                "Take a coconut on a Saturday or Nag Panchami",
                "Make 8 small holes in the coconut",
                "Fill it with mustard oil",
                "Plug the holes with wax",
                "Flow it in a river or sea with devotion",
                "While releasing, pray for forgiveness from ancestors",
            ],
            duration: "108 Saturdays for severe dosha, 27 for mild",
            benefits: "Reduces malefic effects by 70-80% within 6 months",
            note: Some("This remedy is specifically prescribed in Lal Kitab for Rahu-Ketu afflictions"),
        },
        LalKitabSpec {
            title: "Feed Birds Daily",
            description: "Simple daily remedy from Lal Kitab",
            procedure: &[
                "Feed wheat flour balls to fish in river",
                "Feed black sesame seeds to ants",
                "Keep a water pot for birds on terrace",
                "Never harm snakes or reptiles",
            ],
            duration: "Continue for 43 days minimum, ideally lifelong",
            benefits: "Removes obstacles, brings mental peace",
            note: None,
        },
        LalKitabSpec {
            title: "Silver Snake Remedy",
            description: "Lal Kitab's metallic remedy for Rahu-Ketu balance",
            procedure: &[
                "Make a small silver snake (minimum 5 grams)",
                "Keep it immersed in milk on Nag Panchami night",
                "Next morning, donate the milk to a Shiva temple",
                "Keep the silver snake in your puja room",
                "Worship it every Saturday with incense",
            ],
            duration: "One-time remedy with Saturday worship",
            benefits: "Pacifies serpent energies, brings stability",
            note: None,
        },
    ],
    insight: "According to Bhrigu Samhita, individuals with Kaal Sarp Dosha have strong past life karma related to ancestral curses or unfulfilled promises. The dosha indicates a soul that must learn patience and perseverance. Success comes after age 36, and spiritual practices accelerate progress.",
};

fn is_house(number: u8) -> bool {
    (1..=12).contains(&number)
}

/// Houses walked forward from `from` to `to`, both ends included.
/// The walk never takes more than one lap of the wheel.
fn arc(from: u8, to: u8) -> Vec<u8> {
    let mut houses = vec![from];
    let mut current = from;
    for _ in 0..12 {
        if current == to {
            break;
        }
        current = current % 12 + 1;
        houses.push(current);
    }
    houses
}

/// True when every non-node planet sits on the shorter Rahu-Ketu arc.
/// With the nodes exactly opposite either half qualifies. A node outside
/// houses 1..=12 never hems anything.
pub fn is_hemmed(positions: &[PlanetaryPosition], rahu_house: u8, ketu_house: u8) -> bool {
    if !is_house(rahu_house) || !is_house(ketu_house) {
        return false;
    }
    let forward = arc(rahu_house, ketu_house);
    let backward = arc(ketu_house, rahu_house);
    let candidates = match forward.len().cmp(&backward.len()) {
        Ordering::Less => vec![forward],
        Ordering::Greater => vec![backward],
        Ordering::Equal => vec![forward, backward],
    };

    let others: Vec<u8> = positions
        .iter()
        .filter(|p| !p.planet.is_node())
        .map(|p| p.house)
        .collect();
    !others.is_empty()
        && candidates
            .iter()
            .any(|span| others.iter().all(|house| span.contains(house)))
}

/// Variant name and its headline effect for Rahu's house.
pub fn kaal_sarp_type(rahu_house: u8) -> (&'static str, &'static str) {
    let index = (rahu_house as usize).saturating_sub(1);
    KAAL_SARP_TYPES.get(index).copied().unwrap_or(KAAL_SARP_TYPES[0])
}

pub fn detect_kaal_sarp_dosha(positions: &[PlanetaryPosition]) -> Option<Dosha> {
    let rahu = position_of(positions, Planet::Rahu)?;
    let ketu = position_of(positions, Planet::Ketu)?;
    if !is_hemmed(positions, rahu.house, ketu.house) {
        return None;
    }

    let (name, headline) = kaal_sarp_type(rahu.house);
    Some(PROFILE.build(Finding {
        name: name.to_string(),
        severity: Severity::Severe,
        description: format!(
            "{} is formed when all seven planets are situated between Rahu and Ketu. This creates a powerful karmic influence requiring spiritual remedies.",
            name
        ),
        formation: format!(
            "Rahu in {} house, all planets hemmed between Rahu-Ketu axis",
            ordinal(rahu.house)
        ),
        leading_effects: vec![headline.to_string()],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doshas::test_support::placed;

    #[test]
    fn test_arc_wraps() {
        assert_eq!(arc(11, 2), vec![11, 12, 1, 2]);
        assert_eq!(arc(4, 4), vec![4]);
    }

    #[test]
    fn test_adjacent_nodes_do_not_hem() {
        let positions = placed([2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(detect_kaal_sarp_dosha(&positions).is_none());
    }

    #[test]
    fn test_planets_inside_opposite_nodes() {
        // Rahu 1, Ketu 7; everyone else in 2..6
        let positions = placed([2, 3, 4, 5, 6, 2, 3, 1, 7]);
        let dosha = detect_kaal_sarp_dosha(&positions).unwrap();
        assert_eq!(dosha.name, "Anant Kaal Sarp");
        assert_eq!(dosha.severity, Severity::Severe);
        assert_eq!(dosha.effects[0], "Obstacles in life path, mental anxiety");
        assert_eq!(dosha.remedies.len(), 5);
        assert_eq!(dosha.lal_kitab_remedies.len(), 3);
    }

    #[test]
    fn test_other_half_also_qualifies_when_opposite() {
        // Rahu 1, Ketu 7; everyone in 8..12
        let positions = placed([8, 9, 10, 11, 12, 8, 9, 1, 7]);
        let dosha = detect_kaal_sarp_dosha(&positions).unwrap();
        assert_eq!(
            dosha.formation,
            "Rahu in 1st house, all planets hemmed between Rahu-Ketu axis"
        );
    }

    #[test]
    fn test_one_planet_outside_breaks_hemming() {
        let positions = placed([2, 3, 4, 5, 6, 2, 9, 1, 7]);
        assert!(detect_kaal_sarp_dosha(&positions).is_none());
    }

    #[test]
    fn test_node_outside_wheel_is_ignored() {
        let ketu_off_wheel = placed([1, 2, 3, 4, 5, 6, 7, 1, 13]);
        assert!(detect_kaal_sarp_dosha(&ketu_off_wheel).is_none());
        let rahu_at_zero = placed([2, 3, 4, 5, 6, 2, 3, 0, 7]);
        assert!(detect_kaal_sarp_dosha(&rahu_at_zero).is_none());
        assert_eq!(arc(1, 13).len(), 13);
    }

    #[test]
    fn test_type_by_rahu_house() {
        assert_eq!(kaal_sarp_type(7).0, "Takshak Kaal Sarp");
        assert_eq!(kaal_sarp_type(12).0, "Sheshnag Kaal Sarp");
        assert_eq!(kaal_sarp_type(0).0, "Anant Kaal Sarp");
    }
}
