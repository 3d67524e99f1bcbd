//! Seeded draws for the non-formulaic parts of a chart.
//!
//! A birth record hashes to a 32-byte seed; house strengths and planet
//! placements read from separate ChaCha streams of that seed so either can
//! be computed on its own and still agree with the full pipeline.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const HOUSE_STREAM: u64 = 0;
const PLANET_STREAM: u64 = 1;

pub struct ChartRng {
    inner: ChaCha8Rng,
}

/// One planet's random attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementDraw {
    pub degree: u8,
    pub retrograde: bool,
    pub strength: u8,
}

impl ChartRng {
    fn with_stream(seed: [u8; 32], stream: u64) -> Self {
        let mut inner = ChaCha8Rng::from_seed(seed);
        inner.set_stream(stream);
        Self { inner }
    }

    pub fn for_houses(seed: [u8; 32]) -> Self {
        Self::with_stream(seed, HOUSE_STREAM)
    }

    pub fn for_planets(seed: [u8; 32]) -> Self {
        Self::with_stream(seed, PLANET_STREAM)
    }

    /// House strength in [60, 100).
    pub fn house_strength(&mut self) -> u8 {
        self.inner.gen_range(60..100)
    }

    /// Degree in [0, 30), roughly one in five retrograde, strength in [50, 100).
    pub fn placement(&mut self) -> PlacementDraw {
        let degree = self.inner.gen_range(0..30);
        let retrograde = self.inner.gen_bool(0.2);
        let strength = self.inner.gen_range(50..100);
        PlacementDraw {
            degree,
            retrograde,
            strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_are_bounded() {
        let mut rng = ChartRng::for_planets([7u8; 32]);
        for _ in 0..500 {
            let draw = rng.placement();
            assert!(draw.degree < 30);
            assert!((50..100).contains(&draw.strength));
        }
        let mut rng = ChartRng::for_houses([7u8; 32]);
        for _ in 0..500 {
            assert!((60..100).contains(&rng.house_strength()));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ChartRng::for_planets([1u8; 32]);
        let mut b = ChartRng::for_planets([1u8; 32]);
        for _ in 0..9 {
            assert_eq!(a.placement(), b.placement());
        }
    }
}
