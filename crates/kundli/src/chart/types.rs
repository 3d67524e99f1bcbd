//! Chart data model: signs, planets, placements and the house ring.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::settings::ChartStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Sign `steps` places further along the zodiac.
    pub fn offset(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine grahas, in the canonical listing order used for positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    pub fn is_node(self) -> bool {
        matches!(self, Planet::Rahu | Planet::Ketu)
    }

    pub fn is_natural_benefic(self) -> bool {
        matches!(self, Planet::Jupiter | Planet::Venus | Planet::Mercury | Planet::Moon)
    }

    pub fn is_natural_malefic(self) -> bool {
        matches!(self, Planet::Mars | Planet::Saturn | Planet::Rahu | Planet::Ketu)
    }

    /// General significations carried on every placement of this planet.
    pub fn effects(self) -> &'static [&'static str] {
        match self {
            Planet::Sun => &[
                "Leadership qualities",
                "Confidence",
                "Authority",
                "Father figure influence",
            ],
            Planet::Moon => &[
                "Emotional nature",
                "Mental peace",
                "Mother influence",
                "Public relations",
            ],
            Planet::Mars => &[
                "Energy and courage",
                "Property matters",
                "Siblings",
                "Technical skills",
            ],
            Planet::Mercury => &[
                "Intelligence",
                "Communication",
                "Business acumen",
                "Analytical mind",
            ],
            Planet::Jupiter => &["Wisdom", "Good fortune", "Spiritual growth", "Higher education"],
            Planet::Venus => &["Relationships", "Artistic talents", "Luxury", "Marital happiness"],
            Planet::Saturn => &[
                "Discipline",
                "Hard work",
                "Delays but permanence",
                "Karmic lessons",
            ],
            Planet::Rahu => &["Ambition", "Foreign connections", "Sudden changes", "Technology"],
            Planet::Ketu => &[
                "Spirituality",
                "Detachment",
                "Past life karma",
                "Research abilities",
            ],
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    #[serde(rename = "Own Sign")]
    OwnSign,
    Friendly,
    Neutral,
    Debilitated,
    Enemy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryPosition {
    pub planet: Planet,
    pub sign: ZodiacSign,
    /// House number, 1..=12.
    pub house: u8,
    /// Degree within the sign, 0..30.
    pub degree: u8,
    pub retrograde: bool,
    pub dignity: Dignity,
    /// 0..=100.
    pub strength: u8,
    pub effects: Vec<String>,
}

impl PlanetaryPosition {
    pub fn is_weak(&self, threshold: u8) -> bool {
        self.strength < threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub number: u8,
    pub sign: ZodiacSign,
    pub lord: Planet,
    pub planets: Vec<Planet>,
    pub aspects: Vec<String>,
    pub strength: u8,
    pub significance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub ascendant: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub sun_sign: ZodiacSign,
    pub houses: Vec<House>,
    pub chart_type: ChartStyle,
}

impl BirthChart {
    /// House record for a 1-based house number.
    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }
}

/// Lookup helper over the nine placements.
pub fn position_of(positions: &[PlanetaryPosition], planet: Planet) -> Option<&PlanetaryPosition> {
    positions.iter().find(|p| p.planet == planet)
}

/// House occupied by `planet`, if it is present in `positions`.
pub fn house_of(positions: &[PlanetaryPosition], planet: Planet) -> Option<u8> {
    position_of(positions, planet).map(|p| p.house)
}

/// English ordinal for a house number: `1st`, `2nd`, `11th`, `12th`.
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_wraps() {
        assert_eq!(ZodiacSign::from_index(3), ZodiacSign::Cancer);
        assert_eq!(ZodiacSign::from_index(15), ZodiacSign::Cancer);
        assert_eq!(ZodiacSign::Pisces.offset(1), ZodiacSign::Aries);
    }

    #[test]
    fn test_elements_cycle() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Capricorn.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
    }

    #[test]
    fn test_dignity_serializes_with_space() {
        let json = serde_json::to_string(&Dignity::OwnSign).unwrap();
        assert_eq!(json, "\"Own Sign\"");
    }

    #[test]
    fn test_house_ordinals() {
        let rendered: Vec<String> = (1..=13).map(ordinal).collect();
        assert_eq!(
            rendered,
            [
                "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th", "11th",
                "12th", "13th"
            ]
        );
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(112), "112th");
    }

    #[test]
    fn test_planet_order_is_canonical() {
        let names: Vec<&str> = Planet::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            ["Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu"]
        );
    }
}
