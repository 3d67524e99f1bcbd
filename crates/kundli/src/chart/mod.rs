pub mod calculator;
pub mod rng;
pub mod rulers;
pub mod types;

pub use calculator::{
    assign_occupants, calculate_birth_chart, calculate_planetary_positions, moon_longitude,
};
pub use rulers::{calculate_dignity, natural_friends, natural_relation, Relation};
pub use types::{
    house_of, ordinal, position_of, BirthChart, Dignity, Element, House, Planet,
    PlanetaryPosition, ZodiacSign,
};
