#![allow(dead_code)]

use chrono::NaiveDate;
use kundli::{
    BirthDetails, Dignity, EngineSettings, Gender, KundliEngine, PlaceOfBirth, Planet,
    PlanetaryPosition, ZodiacSign,
};

pub fn birth(name: &str, date: &str, time: &str, gender: Gender) -> BirthDetails {
    BirthDetails {
        name: name.to_string(),
        date_of_birth: date.to_string(),
        time_of_birth: time.to_string(),
        place_of_birth: PlaceOfBirth {
            city: "Varanasi".to_string(),
            country: "India".to_string(),
            latitude: 25.3176,
            longitude: 82.9739,
            timezone: "Asia/Kolkata".to_string(),
        },
        gender,
    }
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Engine pinned to a fixed "today" so dasha selection is stable.
pub fn engine() -> KundliEngine {
    KundliEngine::with_settings(EngineSettings {
        reference_date: Some(reference_date()),
        ..EngineSettings::default()
    })
}

/// Nine positions in canonical planet order with the given houses.
pub fn placed(houses: [u8; 9]) -> Vec<PlanetaryPosition> {
    Planet::ALL
        .iter()
        .zip(houses)
        .map(|(&planet, house)| PlanetaryPosition {
            planet,
            sign: ZodiacSign::from_index(house as usize),
            house,
            degree: 10,
            retrograde: false,
            dignity: Dignity::Neutral,
            strength: 75,
            effects: Vec::new(),
        })
        .collect()
}
