//! Remedies, lucky elements and the reference catalogs.

pub mod catalog;
pub mod insights;
pub mod lucky;
pub mod planetary;

pub use catalog::{get_all_mantras, get_pilgrimage_guides, MantraDetails, PilgrimageGuide};
pub use insights::{
    generate_enhancement_suggestions, identify_challenges, identify_strengths, narrative_insight,
};
pub use lucky::{generate_lucky_elements, LuckyElements};
pub use planetary::{
    generate_remedies, generate_remedy_for_planet, planet_remedy_details, PlanetRemedyDetails,
    Remedy, RemedyType,
};
