//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters). Besides the dasha lord,
//! every mansion carries the yoni, gana and nadi used in compatibility scoring.

use serde::{Deserialize, Serialize};

use crate::chart::Planet;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Dev,
    Manushya,
    Rakshasa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

use Gana::*;
use Nadi::*;
use Planet as P;
use Yoni as Y;

// (display_name, dasha lord, nadi, yoni, gana)
const NAKSHATRA_ORDER: [(&str, Planet, Nadi, Yoni, Gana); 27] = [
    ("Ashwini", P::Ketu, Adi, Y::Horse, Dev),
    ("Bharani", P::Venus, Madhya, Y::Elephant, Manushya),
    ("Krittika", P::Sun, Antya, Y::Sheep, Rakshasa),
    ("Rohini", P::Moon, Adi, Y::Serpent, Manushya),
    ("Mrigashira", P::Mars, Madhya, Y::Serpent, Dev),
    ("Ardra", P::Rahu, Antya, Y::Dog, Manushya),
    ("Punarvasu", P::Jupiter, Adi, Y::Cat, Dev),
    ("Pushya", P::Saturn, Madhya, Y::Sheep, Dev),
    ("Ashlesha", P::Mercury, Antya, Y::Cat, Rakshasa),
    ("Magha", P::Ketu, Adi, Y::Rat, Rakshasa),
    ("Purva Phalguni", P::Venus, Madhya, Y::Rat, Manushya),
    ("Uttara Phalguni", P::Sun, Antya, Y::Cow, Manushya),
    ("Hasta", P::Moon, Adi, Y::Buffalo, Dev),
    ("Chitra", P::Mars, Madhya, Y::Tiger, Rakshasa),
    ("Swati", P::Rahu, Antya, Y::Buffalo, Dev),
    ("Vishakha", P::Jupiter, Adi, Y::Tiger, Rakshasa),
    ("Anuradha", P::Saturn, Madhya, Y::Deer, Dev),
    ("Jyeshtha", P::Mercury, Antya, Y::Deer, Rakshasa),
    ("Mula", P::Ketu, Adi, Y::Dog, Rakshasa),
    ("Purva Ashadha", P::Venus, Madhya, Y::Monkey, Manushya),
    ("Uttara Ashadha", P::Sun, Antya, Y::Mongoose, Manushya),
    ("Shravana", P::Moon, Adi, Y::Monkey, Dev),
    ("Dhanishta", P::Mars, Madhya, Y::Lion, Rakshasa),
    ("Shatabhisha", P::Rahu, Antya, Y::Horse, Rakshasa),
    ("Purva Bhadrapada", P::Jupiter, Adi, Y::Lion, Manushya),
    ("Uttara Bhadrapada", P::Saturn, Madhya, Y::Cow, Manushya),
    ("Revati", P::Mercury, Antya, Y::Elephant, Dev),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseNakshatraRecord {
    pub name: String,
    pub lord: Planet,
    pub start: f64,
    pub end: f64,
    pub index: usize,
    pub nadi: Nadi,
    pub yoni: Yoni,
    pub gana: Gana,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraMetadata {
    #[serde(flatten)]
    pub base: BaseNakshatraRecord,
    pub offset: f64,
    /// Fraction of the mansion already traversed, 0..1.
    pub progress: f64,
    pub pada: u8,
    pub pada_fraction: f64,
}

fn build_nakshatra_table() -> Vec<BaseNakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, &(name, lord, nadi, yoni, gana))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            BaseNakshatraRecord {
                name: name.to_string(),
                lord,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
                index: idx,
                nadi,
                yoni,
                gana,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<BaseNakshatraRecord> = build_nakshatra_table();
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Nakshatra record by 0-based index, wrapping modulo 27.
pub fn nakshatra_by_index(index: usize) -> &'static BaseNakshatraRecord {
    &NAKSHATRA_TABLE[index % NAKSHATRA_TABLE.len()]
}

/// Return metadata for the nakshatra containing the given longitude.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    // Whole-degree longitudes land on mansion boundaries (40°, 80°, ...);
    // nudge so they fall into the mansion that starts there.
    let index = (lon / NAKSHATRA_SEGMENT_SIZE + 1e-9) as usize % NAKSHATRA_TABLE.len();
    let entry = &NAKSHATRA_TABLE[index];

    let offset = (lon - entry.start).max(0.0);
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;
    let pada_offset = offset - ((pada - 1) as f64 * PADA_SIZE);

    NakshatraMetadata {
        base: entry.clone(),
        offset,
        progress: offset / NAKSHATRA_SEGMENT_SIZE,
        pada,
        pada_fraction: pada_offset / PADA_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moon_longitudes_wrap() {
        // Sign index times thirty can exceed a turn only through bad input
        assert_eq!(normalize_degrees(390.0), 30.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(get_nakshatra_for_longitude(360.0).base.name, "Ashwini");
    }

    #[test]
    fn test_whole_degree_boundaries() {
        // 40 degrees opens Rohini exactly
        let rohini = get_nakshatra_for_longitude(40.0);
        assert_eq!(rohini.base.name, "Rohini");
        assert_eq!(rohini.pada, 1);
        assert!(rohini.progress < 1e-6);

        let late = get_nakshatra_for_longitude(53.0);
        assert_eq!(late.base.name, "Rohini");
        assert_eq!(late.pada, 4);
        assert!(late.progress > 0.9 && late.progress < 1.0);

        let revati = get_nakshatra_for_longitude(359.0);
        assert_eq!(revati.base.name, "Revati");
        assert_eq!(revati.base.lord, Planet::Mercury);
    }

    #[test]
    fn test_lords_follow_vimshottari_cycle() {
        for i in 0..27 {
            assert_eq!(nakshatra_by_index(i).lord, nakshatra_by_index(i + 9).lord);
        }
    }

    #[test]
    fn test_compatibility_attributes() {
        let rohini = nakshatra_by_index(3);
        assert_eq!(rohini.yoni, Yoni::Serpent);
        assert_eq!(rohini.gana, Gana::Manushya);
        assert_eq!(rohini.nadi, Nadi::Adi);
    }
}
