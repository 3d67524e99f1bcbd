//! Per-planet remedies for weak placements.

use serde::{Deserialize, Serialize};

use crate::chart::{Planet, PlanetaryPosition};
use crate::vedic::Yoga;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemedyType {
    Gemstone,
    Mantra,
    Pooja,
    Charity,
    Fasting,
    Yantra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remedy {
    #[serde(rename = "type")]
    pub remedy_type: RemedyType,
    pub planet: Planet,
    pub item: String,
    pub procedure: String,
    pub benefit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    pub frequency: String,
}

/// The full remedy set traditionally prescribed for a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRemedyDetails {
    pub gemstone: &'static str,
    pub mantra: &'static str,
    pub pooja: &'static str,
    pub charity: &'static str,
    pub fasting: &'static str,
}

pub fn planet_remedy_details(planet: Planet) -> PlanetRemedyDetails {
    let (gemstone, mantra, pooja, charity, fasting) = match planet {
        Planet::Sun => (
            "Ruby (Manik)",
            "Om Suryaya Namaha",
            "Surya Puja on Sundays",
            "Donate wheat and jaggery on Sundays",
            "Fast on Sundays",
        ),
        Planet::Moon => (
            "Pearl (Moti)",
            "Om Chandraya Namaha",
            "Chandra Puja on Mondays",
            "Donate white items on Mondays",
            "Fast on Mondays",
        ),
        Planet::Mars => (
            "Red Coral (Moonga)",
            "Om Mangalaya Namaha",
            "Hanuman Puja on Tuesdays",
            "Donate red lentils on Tuesdays",
            "Fast on Tuesdays",
        ),
        Planet::Mercury => (
            "Emerald (Panna)",
            "Om Budhaya Namaha",
            "Vishnu Puja on Wednesdays",
            "Donate green items on Wednesdays",
            "Fast on Wednesdays",
        ),
        Planet::Jupiter => (
            "Yellow Sapphire (Pukhraj)",
            "Om Gurave Namaha",
            "Guru Puja on Thursdays",
            "Donate yellow items to priests",
            "Fast on Thursdays",
        ),
        Planet::Venus => (
            "Diamond (Heera) or White Sapphire",
            "Om Shukraya Namaha",
            "Lakshmi Puja on Fridays",
            "Donate white items on Fridays",
            "Fast on Fridays",
        ),
        Planet::Saturn => (
            "Blue Sapphire (Neelam)",
            "Om Shanaye Namaha",
            "Shani Puja on Saturdays",
            "Donate black items on Saturdays",
            "Fast on Saturdays",
        ),
        Planet::Rahu => (
            "Hessonite (Gomed)",
            "Om Rahave Namaha",
            "Durga Puja on Saturdays",
            "Donate to the poor",
            "Fast on Saturdays",
        ),
        Planet::Ketu => (
            "Cat's Eye (Lehsunia)",
            "Om Ketave Namaha",
            "Ganesha Puja on Tuesdays",
            "Donate to spiritual causes",
            "Fast on Tuesdays",
        ),
    };
    PlanetRemedyDetails {
        gemstone,
        mantra,
        pooja,
        charity,
        fasting,
    }
}

/// Gemstone prescription for a single planet.
pub fn generate_remedy_for_planet(planet: Planet) -> Remedy {
    let details = planet_remedy_details(planet);
    Remedy {
        remedy_type: RemedyType::Gemstone,
        planet,
        item: details.gemstone.to_string(),
        procedure: format!(
            "Wear {} in ring finger after proper energization by priest",
            details.gemstone
        ),
        benefit: format!("Strengthens {} and reduces negative effects", planet),
        cost: Some("Varies based on quality (₹5,000 - ₹50,000)".to_string()),
        frequency: "Wear continuously after wearing".to_string(),
    }
}

/// One remedy per planet whose strength is below `threshold`.
pub fn generate_remedies(
    positions: &[PlanetaryPosition],
    _yogas: &[Yoga],
    threshold: u8,
) -> Vec<Remedy> {
    positions
        .iter()
        .filter(|p| p.is_weak(threshold))
        .map(|p| generate_remedy_for_planet(p.planet))
        .collect()
}
