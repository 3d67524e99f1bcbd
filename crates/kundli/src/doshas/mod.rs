//! Dosha detection.
//!
//! Six independent detectors each look at the planetary positions and
//! return a fully populated [`Dosha`] when their trigger holds. The engine
//! runs all of them, keeps the hits in detector order and folds their
//! severities into a single total.

mod catalog;
pub mod chandal;
pub mod grahan;
pub mod kaal_sarp;
pub mod manglik;
pub mod pitra;
pub mod shrapit;
pub mod types;

use crate::chart::PlanetaryPosition;
use crate::remedies::generate_enhancement_suggestions;
use crate::settings::EngineSettings;

pub use chandal::detect_chandal_dosha;
pub use grahan::detect_grahan_dosha;
pub use kaal_sarp::detect_kaal_sarp_dosha;
pub use manglik::{detect_manglik_dosha, manglik_severity, MANGLIK_HOUSES};
pub use pitra::detect_pitra_dosha;
pub use shrapit::detect_shrapit_dosha;
pub use types::{
    Dosha, DoshaAnalysis, DoshaRemedy, DoshaType, LalKitabRemedy, RemedyCategory, RemedyProcedure,
    RemedyTiming, ScriptureReference, Severity, TotalSeverity,
};

type Detector = fn(&[PlanetaryPosition]) -> Option<Dosha>;

const DETECTORS: [Detector; 6] = [
    detect_kaal_sarp_dosha,
    detect_manglik_dosha,
    detect_pitra_dosha,
    detect_shrapit_dosha,
    detect_chandal_dosha,
    detect_grahan_dosha,
];

/// Worst severity present, or `None` for an empty set.
pub fn calculate_total_severity(doshas: &[Dosha]) -> TotalSeverity {
    doshas
        .iter()
        .map(|d| d.severity)
        .max()
        .map(TotalSeverity::from)
        .unwrap_or(TotalSeverity::None)
}

/// Run every detector over `positions` and fold the hits into one analysis.
pub fn detect_all_doshas(
    positions: &[PlanetaryPosition],
    settings: &EngineSettings,
) -> DoshaAnalysis {
    let doshas: Vec<Dosha> = DETECTORS
        .iter()
        .filter_map(|detect| detect(positions))
        .collect();

    let enhancement_suggestions =
        generate_enhancement_suggestions(positions, &doshas, settings.weak_planet_threshold);
    DoshaAnalysis {
        total_severity: calculate_total_severity(&doshas),
        remedies_required: !doshas.is_empty(),
        enhancement_suggestions,
        doshas,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::chart::{Dignity, Planet, PlanetaryPosition, ZodiacSign};

    /// Positions in canonical planet order with the given houses.
    pub fn placed(houses: [u8; 9]) -> Vec<PlanetaryPosition> {
        Planet::ALL
            .iter()
            .zip(houses)
            .map(|(&planet, house)| PlanetaryPosition {
                planet,
                sign: ZodiacSign::from_index(house as usize + 2),
                house,
                degree: 12,
                retrograde: false,
                dignity: Dignity::Neutral,
                strength: 80,
                effects: Vec::new(),
            })
            .collect()
    }
}
