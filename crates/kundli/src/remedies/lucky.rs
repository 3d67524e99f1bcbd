//! Lucky numbers, colours, days, directions and gemstones.

use serde::{Deserialize, Serialize};

use crate::chart::{natural_friends, BirthChart, Planet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyElements {
    pub numbers: Vec<u32>,
    pub colors: Vec<String>,
    pub days: Vec<String>,
    pub directions: Vec<String>,
    pub gemstones: Vec<String>,
}

struct PlanetTokens {
    colors: &'static [&'static str],
    day: &'static str,
    direction: &'static str,
    gemstone: &'static str,
}

fn tokens(planet: Planet) -> PlanetTokens {
    match planet {
        Planet::Sun => PlanetTokens {
            colors: &["Red", "Orange", "Gold"],
            day: "Sunday",
            direction: "East",
            gemstone: "Ruby",
        },
        Planet::Moon => PlanetTokens {
            colors: &["White", "Silver", "Cream"],
            day: "Monday",
            direction: "North-West",
            gemstone: "Pearl",
        },
        Planet::Mars => PlanetTokens {
            colors: &["Red", "Coral", "Maroon"],
            day: "Tuesday",
            direction: "South",
            gemstone: "Red Coral",
        },
        Planet::Mercury => PlanetTokens {
            colors: &["Green", "Light Green", "Turquoise"],
            day: "Wednesday",
            direction: "North",
            gemstone: "Emerald",
        },
        Planet::Jupiter => PlanetTokens {
            colors: &["Yellow", "Saffron", "Gold"],
            day: "Thursday",
            direction: "North-East",
            gemstone: "Yellow Sapphire",
        },
        Planet::Venus => PlanetTokens {
            colors: &["White", "Pink", "Light Blue"],
            day: "Friday",
            direction: "South-East",
            gemstone: "Diamond",
        },
        Planet::Saturn => PlanetTokens {
            colors: &["Blue", "Black", "Dark Purple"],
            day: "Saturday",
            direction: "West",
            gemstone: "Blue Sapphire",
        },
        Planet::Rahu => PlanetTokens {
            colors: &["Smoky Grey", "Dark Blue"],
            day: "Saturday",
            direction: "South-West",
            gemstone: "Hessonite",
        },
        Planet::Ketu => PlanetTokens {
            colors: &["Grey", "Brown"],
            day: "Tuesday",
            direction: "North-West",
            gemstone: "Cat's Eye",
        },
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Elements keyed by the ascendant: numbers from the sign index, the rest
/// from its lord and the lord's first two natural friends.
pub fn generate_lucky_elements(chart: &BirthChart) -> LuckyElements {
    let index = chart.ascendant.index() as u32;
    let lord = chart.ascendant.lord();
    let planets: Vec<Planet> = std::iter::once(lord)
        .chain(natural_friends(lord).iter().copied())
        .take(3)
        .collect();

    let mut elements = LuckyElements {
        numbers: vec![index + 1, index + 5, index + 9],
        colors: Vec::new(),
        days: Vec::new(),
        directions: Vec::new(),
        gemstones: Vec::new(),
    };
    for color in tokens(lord).colors {
        push_unique(&mut elements.colors, color);
    }
    for planet in planets {
        let t = tokens(planet);
        if let Some(primary) = t.colors.first() {
            push_unique(&mut elements.colors, primary);
        }
        push_unique(&mut elements.days, t.day);
        push_unique(&mut elements.directions, t.direction);
        push_unique(&mut elements.gemstones, t.gemstone);
    }
    elements
}
