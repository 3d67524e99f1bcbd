//! Deterministic chart placement.
//!
//! Signs and houses follow fixed formulas over the birth month, day and
//! hour rather than true planetary longitudes. Only degree, retrograde flag
//! and strength come from the seeded draws in [`crate::chart::rng`].

use log::debug;

use crate::birth::ValidatedBirth;
use crate::chart::rng::ChartRng;
use crate::chart::rulers::calculate_dignity;
use crate::chart::types::{BirthChart, House, Planet, PlanetaryPosition, ZodiacSign};
use crate::settings::EngineSettings;

const HOUSE_SIGNIFICANCE: [&str; 12] = [
    "Self, Personality, Health, Appearance",
    "Wealth, Family, Speech, Food",
    "Siblings, Courage, Short Travels, Communication",
    "Mother, Home, Vehicles, Education, Happiness",
    "Children, Intelligence, Romance, Speculation",
    "Health Issues, Enemies, Debts, Service",
    "Marriage, Partnerships, Business, Spouse",
    "Longevity, Transformation, Inheritance, Occult",
    "Fortune, Father, Religion, Higher Education, Long Journeys",
    "Career, Status, Authority, Profession",
    "Gains, Income, Friends, Fulfillment of Desires",
    "Losses, Expenses, Foreign Lands, Spirituality, Isolation",
];

/// One-line significance of a 1-based house number; empty outside 1..=12.
pub fn house_significance(number: u8) -> &'static str {
    match number {
        1..=12 => HOUSE_SIGNIFICANCE[(number - 1) as usize],
        _ => "",
    }
}

/// Ascendant index = (hour + month) mod 12, month zero-based.
pub fn ascendant_sign(birth: &ValidatedBirth) -> ZodiacSign {
    ZodiacSign::from_index(birth.hour as usize + birth.month_index())
}

/// Moon sign index = (day of month + month) mod 12.
pub fn moon_sign(birth: &ValidatedBirth) -> ZodiacSign {
    ZodiacSign::from_index(birth.day_of_month() + birth.month_index())
}

/// Sun sign index = month mod 12.
pub fn sun_sign(birth: &ValidatedBirth) -> ZodiacSign {
    ZodiacSign::from_index(birth.month_index())
}

/// Sign of the planet at canonical index `i`: (month + i) mod 12.
pub fn planet_sign(birth: &ValidatedBirth, planet: Planet) -> ZodiacSign {
    ZodiacSign::from_index(birth.month_index() + planet.index())
}

/// House of the planet at canonical index `i`: (i + 1) mod 12 + 1.
pub fn planet_house(planet: Planet) -> u8 {
    ((planet.index() + 1) % 12 + 1) as u8
}

/// Build the ascendant-anchored ring of twelve houses.
///
/// `House::planets` is left empty here; [`assign_occupants`] fills it once
/// positions are known.
pub fn calculate_birth_chart(birth: &ValidatedBirth, settings: &EngineSettings) -> BirthChart {
    let ascendant = ascendant_sign(birth);
    let mut rng = ChartRng::for_houses(birth.seed(&settings.seed_salt));

    let houses = (0..12u8)
        .map(|offset| {
            let sign = ascendant.offset(offset as usize);
            let number = offset + 1;
            House {
                number,
                sign,
                lord: sign.lord(),
                planets: Vec::new(),
                aspects: Vec::new(),
                strength: rng.house_strength(),
                significance: house_significance(number).to_string(),
            }
        })
        .collect();

    let chart = BirthChart {
        ascendant,
        moon_sign: moon_sign(birth),
        sun_sign: sun_sign(birth),
        houses,
        chart_type: settings.chart_style,
    };
    debug!(
        "chart: ascendant {} moon {} sun {}",
        chart.ascendant, chart.moon_sign, chart.sun_sign
    );
    chart
}

/// Place all nine planets, in canonical order.
pub fn calculate_planetary_positions(
    birth: &ValidatedBirth,
    settings: &EngineSettings,
) -> Vec<PlanetaryPosition> {
    let mut rng = ChartRng::for_planets(birth.seed(&settings.seed_salt));

    Planet::ALL
        .iter()
        .map(|&planet| {
            let sign = planet_sign(birth, planet);
            let draw = rng.placement();
            PlanetaryPosition {
                planet,
                sign,
                house: planet_house(planet),
                degree: draw.degree,
                retrograde: draw.retrograde,
                dignity: calculate_dignity(planet, sign),
                strength: draw.strength,
                effects: planet.effects().iter().map(|e| e.to_string()).collect(),
            }
        })
        .collect()
}

/// Record each planet in the house it occupies.
pub fn assign_occupants(chart: &mut BirthChart, positions: &[PlanetaryPosition]) {
    for house in &mut chart.houses {
        house.planets = positions
            .iter()
            .filter(|p| p.house == house.number)
            .map(|p| p.planet)
            .collect();
    }
}

/// Sidereal longitude of the Moon used for nakshatra lookups.
pub fn moon_longitude(chart: &BirthChart, positions: &[PlanetaryPosition]) -> f64 {
    let degree = crate::chart::types::position_of(positions, Planet::Moon)
        .map(|p| p.degree as f64)
        .unwrap_or(0.0);
    chart.moon_sign.index() as f64 * 30.0 + degree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::{BirthDetails, Gender, PlaceOfBirth};

    fn birth(date: &str, time: &str) -> ValidatedBirth {
        BirthDetails {
            name: "Test".to_string(),
            date_of_birth: date.to_string(),
            time_of_birth: time.to_string(),
            place_of_birth: PlaceOfBirth {
                city: "Delhi".to_string(),
                country: "India".to_string(),
                latitude: 28.61,
                longitude: 77.21,
                timezone: "Asia/Kolkata".to_string(),
            },
            gender: Gender::Male,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_sign_formulas() {
        let b = birth("1992-06-20", "10:15");
        assert_eq!(ascendant_sign(&b), ZodiacSign::Cancer);
        // (20 + 5) mod 12 = 1
        assert_eq!(moon_sign(&b), ZodiacSign::Taurus);
        assert_eq!(sun_sign(&b), ZodiacSign::Gemini);
    }

    #[test]
    fn test_houses_rotate_from_ascendant() {
        let b = birth("1992-06-20", "10:15");
        let chart = calculate_birth_chart(&b, &EngineSettings::default());
        assert_eq!(chart.houses.len(), 12);
        for (i, house) in chart.houses.iter().enumerate() {
            assert_eq!(house.number as usize, i + 1);
            assert_eq!(house.sign, ZodiacSign::Cancer.offset(i));
            assert_eq!(house.lord, house.sign.lord());
            assert!((60..100).contains(&house.strength));
        }
    }

    #[test]
    fn test_planet_houses_are_fixed() {
        let houses: Vec<u8> = Planet::ALL.iter().map(|&p| planet_house(p)).collect();
        assert_eq!(houses, vec![2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_positions_are_reproducible() {
        let b = birth("2001-01-05", "23:59");
        let settings = EngineSettings::default();
        let first = calculate_planetary_positions(&b, &settings);
        let second = calculate_planetary_positions(&b, &settings);
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
        assert_eq!(first[0].sign, ZodiacSign::Aries);
        assert_eq!(first[8].sign, ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_assign_occupants_fills_houses() {
        let b = birth("2001-01-05", "04:00");
        let settings = EngineSettings::default();
        let mut chart = calculate_birth_chart(&b, &settings);
        let positions = calculate_planetary_positions(&b, &settings);
        assign_occupants(&mut chart, &positions);
        assert!(chart.house(1).unwrap().planets.is_empty());
        assert_eq!(chart.house(7).unwrap().planets, vec![Planet::Venus]);
        let total: usize = chart.houses.iter().map(|h| h.planets.len()).sum();
        assert_eq!(total, 9);
    }
}
