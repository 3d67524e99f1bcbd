//! Sign rulers, exaltations and natural planetary relationships.
//!
//! Rahu and Ketu own no sign and have no exaltation in this table set.

use crate::chart::types::{Dignity, Planet, ZodiacSign};

const SIGN_LORDS: [Planet; 12] = [
    Planet::Mars,    // Aries
    Planet::Venus,   // Taurus
    Planet::Mercury, // Gemini
    Planet::Moon,    // Cancer
    Planet::Sun,     // Leo
    Planet::Mercury, // Virgo
    Planet::Venus,   // Libra
    Planet::Mars,    // Scorpio
    Planet::Jupiter, // Sagittarius
    Planet::Saturn,  // Capricorn
    Planet::Saturn,  // Aquarius
    Planet::Jupiter, // Pisces
];

const EXALTATIONS: &[(Planet, ZodiacSign)] = &[
    (Planet::Sun, ZodiacSign::Aries),
    (Planet::Moon, ZodiacSign::Taurus),
    (Planet::Mars, ZodiacSign::Capricorn),
    (Planet::Mercury, ZodiacSign::Virgo),
    (Planet::Jupiter, ZodiacSign::Cancer),
    (Planet::Venus, ZodiacSign::Pisces),
    (Planet::Saturn, ZodiacSign::Libra),
];

// (planet, friends, enemies); everyone else is neutral
const NATURAL_RELATIONS: &[(Planet, &[Planet], &[Planet])] = &[
    (Planet::Sun, &[Planet::Moon, Planet::Mars, Planet::Jupiter], &[Planet::Venus, Planet::Saturn]),
    (Planet::Moon, &[Planet::Sun, Planet::Mercury], &[]),
    (Planet::Mars, &[Planet::Sun, Planet::Moon, Planet::Jupiter], &[Planet::Mercury]),
    (Planet::Mercury, &[Planet::Sun, Planet::Venus], &[Planet::Moon]),
    (
        Planet::Jupiter,
        &[Planet::Sun, Planet::Moon, Planet::Mars],
        &[Planet::Mercury, Planet::Venus],
    ),
    (Planet::Venus, &[Planet::Mercury, Planet::Saturn], &[Planet::Sun, Planet::Moon]),
    (Planet::Saturn, &[Planet::Mercury, Planet::Venus], &[Planet::Sun, Planet::Moon, Planet::Mars]),
    (Planet::Rahu, &[Planet::Venus, Planet::Saturn], &[Planet::Sun, Planet::Moon, Planet::Mars]),
    (Planet::Ketu, &[Planet::Mars, Planet::Venus], &[Planet::Sun, Planet::Moon]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

impl ZodiacSign {
    /// Ruling planet of the sign.
    pub fn lord(self) -> Planet {
        SIGN_LORDS[self.index()]
    }
}

/// Exaltation sign of `planet`, if it has one.
pub fn exaltation_sign(planet: Planet) -> Option<ZodiacSign> {
    EXALTATIONS
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, sign)| *sign)
}

pub fn is_own_sign(planet: Planet, sign: ZodiacSign) -> bool {
    sign.lord() == planet
}

/// Dignity of `planet` placed in `sign`: exaltation first, then own sign,
/// otherwise neutral.
pub fn calculate_dignity(planet: Planet, sign: ZodiacSign) -> Dignity {
    if exaltation_sign(planet) == Some(sign) {
        return Dignity::Exalted;
    }
    if is_own_sign(planet, sign) {
        return Dignity::OwnSign;
    }
    Dignity::Neutral
}

/// Natural friends of `planet` in table order.
pub fn natural_friends(planet: Planet) -> &'static [Planet] {
    NATURAL_RELATIONS
        .iter()
        .find(|(p, _, _)| *p == planet)
        .map_or(&[], |(_, friends, _)| friends)
}

/// How `planet` naturally regards `other`.
pub fn natural_relation(planet: Planet, other: Planet) -> Relation {
    if planet == other {
        return Relation::Friend;
    }
    let Some((_, friends, enemies)) = NATURAL_RELATIONS.iter().find(|(p, _, _)| *p == planet) else {
        return Relation::Neutral;
    };
    if friends.contains(&other) {
        Relation::Friend
    } else if enemies.contains(&other) {
        Relation::Enemy
    } else {
        Relation::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_lords() {
        assert_eq!(ZodiacSign::Aries.lord(), Planet::Mars);
        assert_eq!(ZodiacSign::Cancer.lord(), Planet::Moon);
        assert_eq!(ZodiacSign::Leo.lord(), Planet::Sun);
        assert_eq!(ZodiacSign::Scorpio.lord(), Planet::Mars);
        assert_eq!(ZodiacSign::Aquarius.lord(), Planet::Saturn);
        assert_eq!(ZodiacSign::Pisces.lord(), Planet::Jupiter);
    }

    #[test]
    fn test_dignity_prefers_exaltation() {
        assert_eq!(calculate_dignity(Planet::Sun, ZodiacSign::Aries), Dignity::Exalted);
        assert_eq!(calculate_dignity(Planet::Mars, ZodiacSign::Aries), Dignity::OwnSign);
        assert_eq!(calculate_dignity(Planet::Saturn, ZodiacSign::Aries), Dignity::Neutral);
        assert_eq!(calculate_dignity(Planet::Rahu, ZodiacSign::Gemini), Dignity::Neutral);
    }

    #[test]
    fn test_fall_signs_read_as_neutral() {
        // Sun in Libra and Jupiter in Capricorn sit opposite their exaltation
        assert_eq!(calculate_dignity(Planet::Sun, ZodiacSign::Libra), Dignity::Neutral);
        assert_eq!(calculate_dignity(Planet::Jupiter, ZodiacSign::Capricorn), Dignity::Neutral);
    }

    #[test]
    fn test_natural_relations() {
        assert_eq!(natural_relation(Planet::Sun, Planet::Jupiter), Relation::Friend);
        assert_eq!(natural_relation(Planet::Saturn, Planet::Sun), Relation::Enemy);
        assert_eq!(natural_relation(Planet::Moon, Planet::Saturn), Relation::Neutral);
    }
}
