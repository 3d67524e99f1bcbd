//! Ashtakoot Guna Milan: eight factors worth 36 points in total.
//!
//! Every factor compares the Moon rashi or Moon nakshatra of the groom and
//! the bride. Directional factors (Varna, Vashya) read groom against bride.

use serde::{Deserialize, Serialize};

use crate::chart::{
    moon_longitude, natural_relation, BirthChart, Element, PlanetaryPosition, Relation, ZodiacSign,
};
use crate::vedic::nakshatra::{get_nakshatra_for_longitude, nakshatra_by_index, BaseNakshatraRecord};
use crate::vedic::yogas::house_distance;
use crate::vedic::{Gana, Yoni};

pub const MAX_GUNAS: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GunaCompatibility {
    Excellent,
    Good,
    Average,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GunaScore {
    pub name: String,
    pub description: String,
    pub max_points: f64,
    pub scored_points: f64,
    pub compatibility: GunaCompatibility,
    pub analysis: String,
}

/// Moon placement of one partner.
#[derive(Debug, Clone, Copy)]
pub struct MoonProfile {
    pub rashi: ZodiacSign,
    pub nakshatra: &'static BaseNakshatraRecord,
}

impl MoonProfile {
    pub fn new(chart: &BirthChart, positions: &[PlanetaryPosition]) -> Self {
        let meta = get_nakshatra_for_longitude(moon_longitude(chart, positions));
        MoonProfile {
            rashi: chart.moon_sign,
            nakshatra: nakshatra_by_index(meta.base.index),
        }
    }
}

fn score(
    name: &str,
    description: &str,
    max_points: f64,
    scored_points: f64,
    compatibility: GunaCompatibility,
    analysis: &str,
) -> GunaScore {
    GunaScore {
        name: name.to_string(),
        description: description.to_string(),
        max_points,
        scored_points,
        compatibility,
        analysis: analysis.to_string(),
    }
}

fn varna_rank(sign: ZodiacSign) -> u8 {
    match sign.element() {
        Element::Water => 4, // Brahmin
        Element::Fire => 3,  // Kshatriya
        Element::Earth => 2, // Vaishya
        Element::Air => 1,   // Shudra
    }
}

pub fn varna_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    if varna_rank(groom.rashi) >= varna_rank(bride.rashi) {
        score(
            "Varna (Caste/Class)",
            "Spiritual compatibility and ego levels",
            1.0,
            1.0,
            GunaCompatibility::Good,
            "Varna compatibility is good. The boy's spiritual inclination is equal or higher, which is favorable for marital harmony.",
        )
    } else {
        score(
            "Varna (Caste/Class)",
            "Spiritual compatibility and ego levels",
            1.0,
            0.0,
            GunaCompatibility::Poor,
            "Varna mismatch detected. This may indicate differences in spiritual outlook and social values. Remedies recommended.",
        )
    }
}

fn vashya_signs(sign: ZodiacSign) -> &'static [ZodiacSign] {
    use ZodiacSign::*;
    match sign {
        Aries => &[Leo, Scorpio],
        Taurus => &[Cancer, Libra],
        Gemini => &[Virgo],
        Cancer => &[Scorpio, Sagittarius],
        Leo => &[Libra],
        Virgo => &[Pisces, Gemini],
        Libra => &[Capricorn, Virgo],
        Scorpio => &[Cancer],
        Sagittarius => &[Pisces],
        Capricorn => &[Aquarius, Aries],
        Aquarius => &[Aries],
        Pisces => &[Capricorn],
    }
}

pub fn vashya_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    let attracted = groom.rashi == bride.rashi || vashya_signs(groom.rashi).contains(&bride.rashi);
    let (points, compatibility, analysis) = if attracted {
        (
            2.0,
            GunaCompatibility::Excellent,
            "Strong mutual attraction and understanding. Both partners will have good control over each other.",
        )
    } else {
        (
            0.0,
            GunaCompatibility::Poor,
            "Limited mutual attraction. May need conscious efforts to maintain harmony.",
        )
    };
    score(
        "Vashya (Mutual Attraction)",
        "Magnetic control and attraction between partners",
        2.0,
        points,
        compatibility,
        analysis,
    )
}

// 1.5 points unless counting `from` -> `to` lands on Vipat, Pratyari or Vadha.
fn tara_half(from: usize, to: usize) -> f64 {
    let count = (to + 27 - from) % 27 + 1;
    match count % 9 {
        3 | 5 | 7 => 0.0,
        _ => 1.5,
    }
}

pub fn tara_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    let points = tara_half(bride.nakshatra.index, groom.nakshatra.index)
        + tara_half(groom.nakshatra.index, bride.nakshatra.index);
    let (compatibility, analysis) = if points >= 3.0 {
        (
            GunaCompatibility::Excellent,
            "Birth star compatibility indicates good destiny alignment and fortune in married life.",
        )
    } else if points > 0.0 {
        (
            GunaCompatibility::Average,
            "Birth stars are partly supportive. Fortune improves with shared effort.",
        )
    } else {
        (
            GunaCompatibility::Poor,
            "Birth stars fall in inauspicious taras from each other. Remedies for destiny alignment recommended.",
        )
    };
    score(
        "Tara (Star)",
        "Birth star compatibility and destiny",
        3.0,
        points,
        compatibility,
        analysis,
    )
}

fn yoni_relations(yoni: Yoni) -> (&'static [Yoni], &'static [Yoni]) {
    use Yoni::*;
    match yoni {
        Horse => (&[Horse, Elephant], &[Buffalo]),
        Elephant => (&[Elephant, Horse], &[Lion]),
        Sheep => (&[Sheep, Monkey], &[Dog]),
        Serpent => (&[Serpent], &[Mongoose]),
        Dog => (&[Dog, Cat], &[Sheep]),
        Cat => (&[Cat, Dog], &[Rat]),
        Rat => (&[Rat], &[Cat]),
        Cow => (&[Cow, Buffalo], &[Tiger]),
        Buffalo => (&[Buffalo, Cow], &[Horse]),
        Tiger => (&[Tiger], &[Cow]),
        Deer => (&[Deer], &[Dog]),
        Monkey => (&[Monkey, Sheep], &[Lion]),
        Mongoose => (&[Mongoose], &[Serpent]),
        Lion => (&[Lion], &[Elephant, Monkey]),
    }
}

pub fn yoni_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    let (friendly, enemy) = yoni_relations(groom.nakshatra.yoni);
    let bride_yoni = bride.nakshatra.yoni;
    let points = if groom.nakshatra.yoni == bride_yoni {
        4.0
    } else if friendly.contains(&bride_yoni) {
        3.0
    } else if enemy.contains(&bride_yoni) {
        0.0
    } else {
        2.0
    };
    let (compatibility, analysis) = if points >= 3.0 {
        (
            GunaCompatibility::Excellent,
            "Excellent physical and sexual compatibility. Strong biological attraction.",
        )
    } else if points >= 2.0 {
        (
            GunaCompatibility::Good,
            "Moderate physical compatibility. Mutual understanding will develop over time.",
        )
    } else {
        (
            GunaCompatibility::Poor,
            "Physical compatibility needs attention. Open communication is essential.",
        )
    };
    score(
        "Yoni (Sexual Compatibility)",
        "Physical and sexual compatibility",
        4.0,
        points,
        compatibility,
        analysis,
    )
}

pub fn graha_maitri_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    let groom_lord = groom.rashi.lord();
    let bride_lord = bride.rashi.lord();
    let points = match (
        natural_relation(groom_lord, bride_lord),
        natural_relation(bride_lord, groom_lord),
    ) {
        (Relation::Friend, Relation::Friend) => 5.0,
        (Relation::Friend, Relation::Neutral) | (Relation::Neutral, Relation::Friend) => 4.0,
        (Relation::Neutral, Relation::Neutral) => 3.0,
        (Relation::Friend, Relation::Enemy) | (Relation::Enemy, Relation::Friend) => 1.0,
        (Relation::Neutral, Relation::Enemy) | (Relation::Enemy, Relation::Neutral) => 0.5,
        (Relation::Enemy, Relation::Enemy) => 0.0,
    };
    let (compatibility, analysis) = if points >= 4.0 {
        (
            GunaCompatibility::Excellent,
            "Good mental compatibility. Both partners will understand each other's thoughts and emotions.",
        )
    } else if points >= 3.0 {
        (
            GunaCompatibility::Good,
            "Rashi lords are on neutral terms. Mutual respect keeps the mental bond steady.",
        )
    } else {
        (
            GunaCompatibility::Average,
            "Rashi lords are unfriendly. Differences in outlook need patience and dialogue.",
        )
    };
    score(
        "Graha Maitri (Planetary Friendship)",
        "Mental compatibility and intellectual bonding",
        5.0,
        points,
        compatibility,
        analysis,
    )
}

fn gana_points(groom: Gana, bride: Gana) -> f64 {
    use Gana::*;
    match (groom, bride) {
        (Dev, Dev) | (Manushya, Manushya) | (Rakshasa, Rakshasa) => 6.0,
        (Dev, Manushya) | (Manushya, Dev) => 5.0,
        (Manushya, Rakshasa) | (Rakshasa, Manushya) => 3.0,
        (Dev, Rakshasa) | (Rakshasa, Dev) => 1.0,
    }
}

pub fn gana_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    let points = gana_points(groom.nakshatra.gana, bride.nakshatra.gana);
    let (compatibility, analysis) = if points >= 5.0 {
        (
            GunaCompatibility::Excellent,
            "Excellent temperament match. Both have similar nature and behavioral patterns.",
        )
    } else if points >= 3.0 {
        (
            GunaCompatibility::Good,
            "Moderate temperament compatibility. Adjustments will be needed.",
        )
    } else {
        (
            GunaCompatibility::Poor,
            "Significant differences in nature. Strong efforts needed for harmony.",
        )
    };
    score(
        "Gan (Temperament)",
        "Nature and behavior compatibility",
        6.0,
        points,
        compatibility,
        analysis,
    )
}

/// Sign distance from bride to groom, counted inclusively (1..=12).
pub fn rashi_distance(groom: &MoonProfile, bride: &MoonProfile) -> u8 {
    house_distance(bride.rashi.index() as u8 + 1, groom.rashi.index() as u8 + 1)
}

pub fn bhakoot_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    let afflicted = matches!(rashi_distance(groom, bride), 2 | 12 | 5 | 9 | 6 | 8);
    let (points, compatibility, analysis) = if afflicted {
        (
            0.0,
            GunaCompatibility::Poor,
            "Moon signs form an inauspicious axis. Emotional and financial harmony need remedies.",
        )
    } else {
        (
            7.0,
            GunaCompatibility::Excellent,
            "Strong emotional bond and love compatibility. Family life will be harmonious.",
        )
    };
    score(
        "Bhakoot (Love & Compatibility)",
        "Emotional bonding and family welfare",
        7.0,
        points,
        compatibility,
        analysis,
    )
}

pub fn nadi_score(groom: &MoonProfile, bride: &MoonProfile) -> GunaScore {
    if groom.nakshatra.nadi != bride.nakshatra.nadi {
        score(
            "Nadi (Health & Progeny)",
            "Health compatibility and children prospects",
            8.0,
            8.0,
            GunaCompatibility::Excellent,
            "Perfect Nadi compatibility. Excellent health for both partners and healthy progeny.",
        )
    } else {
        score(
            "Nadi (Health & Progeny)",
            "Health compatibility and children prospects",
            8.0,
            0.0,
            GunaCompatibility::Poor,
            "Nadi Dosha detected! Same Nadi may cause health issues and difficulties in having children. Remedies are strongly recommended.",
        )
    }
}

/// All eight factors in the traditional order.
pub fn calculate_gunas(groom: &MoonProfile, bride: &MoonProfile) -> Vec<GunaScore> {
    vec![
        varna_score(groom, bride),
        vashya_score(groom, bride),
        tara_score(groom, bride),
        yoni_score(groom, bride),
        graha_maitri_score(groom, bride),
        gana_score(groom, bride),
        bhakoot_score(groom, bride),
        nadi_score(groom, bride),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(rashi: ZodiacSign, nakshatra: usize) -> MoonProfile {
        MoonProfile {
            rashi,
            nakshatra: nakshatra_by_index(nakshatra),
        }
    }

    #[test]
    fn test_identical_moons() {
        // Same rashi and nakshatra: everything but Nadi scores full
        let p = profile(ZodiacSign::Taurus, 3);
        let gunas = calculate_gunas(&p, &p);
        let points: Vec<f64> = gunas.iter().map(|g| g.scored_points).collect();
        assert_eq!(points, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 0.0]);
        let max: f64 = gunas.iter().map(|g| g.max_points).sum();
        assert_eq!(max, MAX_GUNAS);
    }

    #[test]
    fn test_varna_is_directional() {
        let cancer = profile(ZodiacSign::Cancer, 7);
        let gemini = profile(ZodiacSign::Gemini, 6);
        assert_eq!(varna_score(&cancer, &gemini).scored_points, 1.0);
        assert_eq!(varna_score(&gemini, &cancer).scored_points, 0.0);
    }

    #[test]
    fn test_tara_counts() {
        // Ashwini to Krittika counts 3 (Vipat); Krittika back to Ashwini counts 26 -> 8
        assert_eq!(tara_half(0, 2), 0.0);
        assert_eq!(tara_half(2, 0), 1.5);
        assert_eq!(tara_half(4, 4), 1.5);
    }

    #[test]
    fn test_yoni_enemies() {
        // Rohini is Serpent, Uttara Ashadha is Mongoose
        let serpent = profile(ZodiacSign::Taurus, 3);
        let mongoose = profile(ZodiacSign::Capricorn, 20);
        assert_eq!(yoni_score(&serpent, &mongoose).scored_points, 0.0);
        // Ashwini Horse with Bharani Elephant
        let horse = profile(ZodiacSign::Aries, 0);
        let elephant = profile(ZodiacSign::Aries, 1);
        assert_eq!(yoni_score(&horse, &elephant).scored_points, 3.0);
    }

    #[test]
    fn test_graha_maitri_table() {
        // Leo (Sun) and Aries (Mars) are mutual friends
        let leo = profile(ZodiacSign::Leo, 9);
        let aries = profile(ZodiacSign::Aries, 0);
        assert_eq!(graha_maitri_score(&leo, &aries).scored_points, 5.0);
        // Sun regards Saturn as enemy and Saturn returns it
        let capricorn = profile(ZodiacSign::Capricorn, 21);
        assert_eq!(graha_maitri_score(&leo, &capricorn).scored_points, 0.0);
    }

    #[test]
    fn test_gana_matrix() {
        assert_eq!(gana_points(Gana::Dev, Gana::Rakshasa), 1.0);
        assert_eq!(gana_points(Gana::Rakshasa, Gana::Manushya), 3.0);
        assert_eq!(gana_points(Gana::Manushya, Gana::Dev), 5.0);
    }

    #[test]
    fn test_bhakoot_axes() {
        let aries = profile(ZodiacSign::Aries, 0);
        for (sign, expected) in [
            (ZodiacSign::Taurus, 0.0),
            (ZodiacSign::Leo, 0.0),
            (ZodiacSign::Virgo, 0.0),
            (ZodiacSign::Libra, 7.0),
            (ZodiacSign::Gemini, 7.0),
            (ZodiacSign::Aries, 7.0),
        ] {
            let other = profile(sign, 5);
            assert_eq!(bhakoot_score(&other, &aries).scored_points, expected, "{:?}", sign);
            assert_eq!(bhakoot_score(&aries, &other).scored_points, expected, "{:?}", sign);
        }
    }

    #[test]
    fn test_nadi_same_is_dosha() {
        let a = profile(ZodiacSign::Aries, 0);
        let b = profile(ZodiacSign::Cancer, 9);
        assert_eq!(nadi_score(&a, &b).scored_points, 0.0);
        let c = profile(ZodiacSign::Aries, 1);
        assert_eq!(nadi_score(&a, &c).scored_points, 8.0);
    }
}
