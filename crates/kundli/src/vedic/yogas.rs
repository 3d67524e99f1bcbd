//! Yoga detection helpers for Vedic astrology.
//!
//! Yogas are planetary combinations that indicate specific life outcomes.
//! Every rule here works on whole-house placements.

use serde::{Deserialize, Serialize};

use crate::chart::{house_of, position_of, BirthChart, Dignity, Planet, PlanetaryPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaType {
    #[serde(rename = "Raja Yoga")]
    Raja,
    #[serde(rename = "Dhana Yoga")]
    Dhana,
    #[serde(rename = "Vipreet Yoga")]
    Vipreet,
    #[serde(rename = "Kemadruma Yoga")]
    Kemadruma,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaStrength {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Yoga {
    pub name: String,
    pub yoga_type: YogaType,
    pub planets: Vec<Planet>,
    pub description: String,
    pub effects: Vec<String>,
    pub strength: YogaStrength,
    pub timing: String,
}

const KENDRA: [u8; 4] = [1, 4, 7, 10];
const TRIKONA: [u8; 3] = [1, 5, 9];
const DUSTHANA: [u8; 3] = [6, 8, 12];
const MAHAPURUSHA: [(Planet, &str); 5] = [
    (Planet::Mars, "Ruchaka"),
    (Planet::Mercury, "Bhadra"),
    (Planet::Jupiter, "Hamsa"),
    (Planet::Venus, "Malavya"),
    (Planet::Saturn, "Sasa"),
];

/// House of `to` counted from `from`, both 1-based (same house = 1).
pub fn house_distance(from: u8, to: u8) -> u8 {
    ((to as i16 - from as i16).rem_euclid(12) + 1) as u8
}

fn in_kendra(house: u8) -> bool {
    KENDRA.contains(&house)
}

fn in_trikona(house: u8) -> bool {
    TRIKONA.contains(&house)
}

fn strength_of(positions: &[PlanetaryPosition], planets: &[Planet]) -> YogaStrength {
    let values: Vec<u32> = planets
        .iter()
        .filter_map(|&p| position_of(positions, p))
        .map(|p| p.strength as u32)
        .collect();
    if values.is_empty() {
        return YogaStrength::Weak;
    }
    let average = values.iter().sum::<u32>() / values.len() as u32;
    match average {
        75.. => YogaStrength::Strong,
        60..=74 => YogaStrength::Moderate,
        _ => YogaStrength::Weak,
    }
}

fn dasha_timing(planets: &[Planet]) -> String {
    let names: Vec<&str> = planets.iter().map(|p| p.name()).collect();
    format!("Active during {} dasha periods", names.join(" and "))
}

fn yoga(
    name: &str,
    yoga_type: YogaType,
    planets: Vec<Planet>,
    description: String,
    effects: &[&str],
    positions: &[PlanetaryPosition],
) -> Yoga {
    Yoga {
        name: name.to_string(),
        yoga_type,
        strength: strength_of(positions, &planets),
        timing: dasha_timing(&planets),
        planets,
        description,
        effects: effects.iter().map(|e| e.to_string()).collect(),
    }
}

/// Identify classic Vedic yogas from planetary positions.
pub fn detect_yogas(positions: &[PlanetaryPosition], _chart: &BirthChart) -> Vec<Yoga> {
    let mut yogas: Vec<Yoga> = Vec::new();
    let house = |planet: Planet| house_of(positions, planet);

    // 1. Gajakesari - Jupiter in a kendra from the Moon
    if let (Some(moon), Some(jupiter)) = (house(Planet::Moon), house(Planet::Jupiter)) {
        if in_kendra(house_distance(moon, jupiter)) {
            yogas.push(yoga(
                "Gajakesari Yoga",
                YogaType::Raja,
                vec![Planet::Jupiter, Planet::Moon],
                "Jupiter and Moon in mutual angle creates this auspicious yoga".to_string(),
                &[
                    "Fame and recognition",
                    "Wealth and prosperity",
                    "Good character",
                    "Leadership abilities",
                ],
                positions,
            ));
        }
    }

    // 2. Budh-Aditya - Sun and Mercury together
    if let (Some(sun), Some(mercury)) = (house(Planet::Sun), house(Planet::Mercury)) {
        if sun == mercury {
            yogas.push(yoga(
                "Budh-Aditya Yoga",
                YogaType::Other,
                vec![Planet::Sun, Planet::Mercury],
                format!("Sun and Mercury together in house {}", sun),
                &["Sharp intellect", "Skill in communication", "Recognition for learning"],
                positions,
            ));
        }
    }

    // 3. Chandra-Mangal - Moon and Mars together
    if let (Some(moon), Some(mars)) = (house(Planet::Moon), house(Planet::Mars)) {
        if moon == mars {
            yogas.push(yoga(
                "Chandra-Mangal Yoga",
                YogaType::Dhana,
                vec![Planet::Moon, Planet::Mars],
                format!("Moon and Mars together in house {}", moon),
                &["Earning capacity", "Enterprise and drive", "Emotional intensity"],
                positions,
            ));
        }
    }

    // 4. Raja - benefics holding both a kendra and a trikona
    let benefics: Vec<&PlanetaryPosition> = positions
        .iter()
        .filter(|p| p.planet.is_natural_benefic())
        .collect();
    let pair = benefics.iter().find_map(|k| {
        if !in_kendra(k.house) {
            return None;
        }
        benefics
            .iter()
            .find(|t| t.planet != k.planet && in_trikona(t.house))
            .map(|t| (k.planet, t.planet))
    });
    if let Some((kendra_planet, trikona_planet)) = pair {
        yogas.push(yoga(
            "Raja Yoga",
            YogaType::Raja,
            vec![kendra_planet, trikona_planet],
            "Benefic planets in both kendras and trikonas - brings power and authority".to_string(),
            &["Authority and status", "Success in career", "Respect in society"],
            positions,
        ));
    }

    // 5. Dhana - Venus or Jupiter in the 2nd or 11th
    let wealth_planets: Vec<Planet> = [Planet::Venus, Planet::Jupiter]
        .into_iter()
        .filter(|&p| matches!(house(p), Some(2) | Some(11)))
        .collect();
    if !wealth_planets.is_empty() {
        yogas.push(yoga(
            "Dhana Yoga",
            YogaType::Dhana,
            wealth_planets,
            "Wealth-giving planets in 2nd or 11th house - brings financial prosperity".to_string(),
            &["Financial prosperity", "Accumulation of assets", "Steady income"],
            positions,
        ));
    }

    // 6. Vipreet Raja - a malefic in a dusthana
    if let Some(malefic) = positions
        .iter()
        .find(|p| p.planet.is_natural_malefic() && DUSTHANA.contains(&p.house))
    {
        yogas.push(yoga(
            "Vipreet Raja Yoga",
            YogaType::Vipreet,
            vec![malefic.planet],
            format!("{} in house {} - turns adversity into success", malefic.planet, malefic.house),
            &["Victory over adversaries", "Gains through crisis", "Resilience"],
            positions,
        ));
    }

    // 7. Pancha Mahapurusha - a true planet in a kendra, exalted or in own sign
    for (planet, title) in MAHAPURUSHA {
        let Some(pos) = position_of(positions, planet) else {
            continue;
        };
        if in_kendra(pos.house) && matches!(pos.dignity, Dignity::Exalted | Dignity::OwnSign) {
            yogas.push(yoga(
                &format!("{} Yoga (Pancha Mahapurusha)", title),
                YogaType::Raja,
                vec![planet],
                format!(
                    "{} strong in {} and placed in kendra house {}",
                    planet, pos.sign, pos.house
                ),
                &["Distinguished personality", "Great achievements", "Lasting reputation"],
                positions,
            ));
        }
    }

    // 8. Kemadruma - Moon with no support on either side
    if let Some(moon) = house(Planet::Moon) {
        let second = moon % 12 + 1;
        let twelfth = (moon + 10) % 12 + 1;
        let supported = positions.iter().any(|p| {
            !matches!(p.planet, Planet::Sun | Planet::Moon | Planet::Rahu | Planet::Ketu)
                && (p.house == second || p.house == twelfth)
        });
        if !supported {
            yogas.push(yoga(
                "Kemadruma Yoga",
                YogaType::Kemadruma,
                vec![Planet::Moon],
                "No planets flank the Moon on either side".to_string(),
                &["Periods of loneliness", "Financial fluctuations", "Need for self-reliance"],
                positions,
            ));
        }
    }

    yogas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{House, ZodiacSign};
    use crate::settings::ChartStyle;

    fn position(
        planet: Planet,
        house: u8,
        sign: ZodiacSign,
        dignity: Dignity,
    ) -> PlanetaryPosition {
        PlanetaryPosition {
            planet,
            sign,
            house,
            degree: 10,
            retrograde: false,
            dignity,
            strength: 80,
            effects: Vec::new(),
        }
    }

    fn placed(houses: [u8; 9]) -> Vec<PlanetaryPosition> {
        Planet::ALL
            .iter()
            .zip(houses)
            .map(|(&p, h)| position(p, h, ZodiacSign::Gemini, Dignity::Neutral))
            .collect()
    }

    fn chart() -> BirthChart {
        BirthChart {
            ascendant: ZodiacSign::Aries,
            moon_sign: ZodiacSign::Aries,
            sun_sign: ZodiacSign::Aries,
            houses: Vec::<House>::new(),
            chart_type: ChartStyle::NorthIndian,
        }
    }

    fn names(yogas: &[Yoga]) -> Vec<&str> {
        yogas.iter().map(|y| y.name.as_str()).collect()
    }

    #[test]
    fn test_house_distance() {
        assert_eq!(house_distance(3, 3), 1);
        assert_eq!(house_distance(3, 6), 4);
        assert_eq!(house_distance(10, 1), 4);
        assert_eq!(house_distance(1, 12), 12);
    }

    #[test]
    fn test_default_layout_yogas() {
        let positions = placed([2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let found = detect_yogas(&positions, &chart());
        let found = names(&found);
        assert!(found.contains(&"Gajakesari Yoga"));
        assert!(found.contains(&"Raja Yoga"));
        assert!(found.contains(&"Vipreet Raja Yoga"));
        assert!(!found.contains(&"Kemadruma Yoga"));
        assert!(!found.contains(&"Budh-Aditya Yoga"));
    }

    #[test]
    fn test_conjunction_yogas() {
        // Sun+Mercury in 1, Moon+Mars in 5
        let positions = placed([1, 5, 5, 1, 3, 2, 11, 4, 10]);
        let found = detect_yogas(&positions, &chart());
        let found = names(&found);
        assert!(found.contains(&"Budh-Aditya Yoga"));
        assert!(found.contains(&"Chandra-Mangal Yoga"));
        assert!(found.contains(&"Dhana Yoga"));
        assert!(!found.contains(&"Gajakesari Yoga"));
    }

    #[test]
    fn test_kemadruma_when_moon_isolated() {
        // Moon in 6; 5 and 7 hold only Sun and Rahu
        let positions = placed([5, 6, 1, 10, 11, 2, 3, 7, 1]);
        let found = detect_yogas(&positions, &chart());
        assert!(names(&found).contains(&"Kemadruma Yoga"));
    }

    #[test]
    fn test_mahapurusha_requires_dignity() {
        let mut positions = placed([2, 3, 4, 5, 6, 7, 8, 9, 10]);
        positions[2] = position(Planet::Mars, 4, ZodiacSign::Capricorn, Dignity::Exalted);
        let found = detect_yogas(&positions, &chart());
        let ruchaka = found.iter().find(|y| y.name.starts_with("Ruchaka")).unwrap();
        assert_eq!(ruchaka.yoga_type, YogaType::Raja);
        assert_eq!(ruchaka.strength, YogaStrength::Strong);
        assert_eq!(ruchaka.timing, "Active during Mars dasha periods");
    }
}
