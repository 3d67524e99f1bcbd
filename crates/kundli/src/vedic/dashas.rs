//! Vimshottari dasha calculation.
//!
//! Dashas are time periods ruled by planets, calculated based on the Moon's
//! nakshatra. Every boundary is `birth + round(years * 365.25)` days measured
//! from the same origin, so consecutive periods never drift apart.

use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::birth::ValidatedBirth;
use crate::chart::calculator::moon_sign;
use crate::chart::{position_of, Planet, PlanetaryPosition};
use crate::vedic::nakshatra::get_nakshatra_for_longitude;

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.25;
/// Upcoming maha-dashas listed past the current one at most.
pub const MAX_UPCOMING_DASHAS: usize = 9;

type PlanetYears = (Planet, f64);

pub const VIMSHOTTARI_SEQUENCE: [PlanetYears; 9] = [
    (Planet::Ketu, 7.0),
    (Planet::Venus, 20.0),
    (Planet::Sun, 6.0),
    (Planet::Moon, 10.0),
    (Planet::Mars, 7.0),
    (Planet::Rahu, 18.0),
    (Planet::Jupiter, 16.0),
    (Planet::Saturn, 19.0),
    (Planet::Mercury, 17.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    pub planet: Planet,
    pub start_date: NaiveDate,
    /// Inclusive; the day before the next period starts.
    pub end_date: NaiveDate,
    pub duration: String,
    pub predictions: Vec<String>,
    /// 1..=5
    pub rating: u8,
    pub favorable: bool,
    pub focus: Vec<String>,
    pub opportunities: Vec<String>,
    pub challenges: Vec<String>,
}

impl DashaPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaSystem {
    #[serde(rename = "type")]
    pub system: String,
    pub birth_nakshatra: String,
    pub current_dasha: DashaPeriod,
    pub upcoming_dashas: Vec<DashaPeriod>,
    pub antardasha: DashaPeriod,
    pub antardashas: Vec<DashaPeriod>,
}

impl DashaSystem {
    /// Current maha-dasha followed by the upcoming ones.
    pub fn listed_periods(&self) -> impl Iterator<Item = &DashaPeriod> {
        std::iter::once(&self.current_dasha).chain(self.upcoming_dashas.iter())
    }
}

struct DashaEffect {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    remedies: &'static [&'static str],
    life_areas: &'static [&'static str],
}

fn dasha_effect(planet: Planet) -> DashaEffect {
    match planet {
        Planet::Sun => DashaEffect {
            positive: &[
                "Career advancement and recognition",
                "Government favor and authority",
                "Leadership opportunities",
                "Improved health and vitality",
                "Father's blessings",
            ],
            negative: &[
                "Ego clashes with authority",
                "Health issues (heart, eyes, bones)",
                "Conflicts with father",
                "Over-confidence leading to failures",
            ],
            remedies: &[
                "Chant Gayatri Mantra",
                "Surya Namaskar daily",
                "Offer water to Sun at sunrise",
            ],
            life_areas: &["Career", "Authority", "Father", "Health", "Vitality"],
        },
        Planet::Moon => DashaEffect {
            positive: &[
                "Emotional stability and peace",
                "Good relationship with mother",
                "Improved mental health",
                "Travel opportunities (especially water)",
                "Public recognition and popularity",
            ],
            negative: &[
                "Mood swings and depression",
                "Digestive problems",
                "Insomnia and anxiety",
                "Over-sensitivity",
            ],
            remedies: &[
                "Chant Chandra Mantra",
                "Fast on Mondays",
                "Donate white rice, milk on Mondays",
            ],
            life_areas: &["Mind", "Mother", "Emotions", "Public", "Travel"],
        },
        Planet::Mars => DashaEffect {
            positive: &[
                "Courage and confidence",
                "Victory over enemies and competition",
                "Property and land acquisition",
                "Good relationship with siblings",
                "Energy and stamina",
            ],
            negative: &[
                "Accidents and injuries",
                "Conflicts and aggression",
                "Property disputes",
                "Impulsiveness",
            ],
            remedies: &[
                "Hanuman Chalisa recitation",
                "Donate red lentils on Tuesdays",
                "Avoid spicy food and anger",
            ],
            life_areas: &["Courage", "Property", "Siblings", "Energy", "Competition"],
        },
        Planet::Mercury => DashaEffect {
            positive: &[
                "Intelligence and communication skills",
                "Business and trade success",
                "Education and learning",
                "Writing and speaking abilities",
                "Technology and mathematics",
            ],
            negative: &[
                "Nervous disorders",
                "Business losses",
                "Over-thinking and anxiety",
                "Skin diseases",
            ],
            remedies: &[
                "Chant Budh Mantra",
                "Donate green vegetables on Wednesdays",
                "Help students and teachers",
            ],
            life_areas: &["Communication", "Business", "Education", "Friends", "Skills"],
        },
        Planet::Jupiter => DashaEffect {
            positive: &[
                "Wealth and prosperity",
                "Spiritual growth and wisdom",
                "Marriage and children",
                "Higher education",
                "Good luck and fortune",
            ],
            negative: &[
                "Over-optimism and complacency",
                "Weight gain and diabetes",
                "Financial over-expansion",
                "Liver problems",
            ],
            remedies: &[
                "Chant Guru Mantra",
                "Donate yellow items on Thursdays",
                "Respect teachers and elders",
            ],
            life_areas: &["Wealth", "Marriage", "Children", "Wisdom", "Fortune"],
        },
        Planet::Venus => DashaEffect {
            positive: &[
                "Love and romance",
                "Material comforts and luxury",
                "Artistic talents",
                "Vehicle acquisition",
                "Happy married life",
            ],
            negative: &[
                "Relationship problems",
                "Over-indulgence in pleasures",
                "Extravagance",
                "Laziness",
            ],
            remedies: &[
                "Worship Goddess Lakshmi",
                "Donate white items on Fridays",
                "Maintain cleanliness",
            ],
            life_areas: &["Love", "Luxury", "Art", "Marriage", "Comfort"],
        },
        Planet::Saturn => DashaEffect {
            positive: &[
                "Discipline and hard work rewards",
                "Spiritual progress",
                "Justice in legal matters",
                "Longevity",
                "Detachment and wisdom",
            ],
            negative: &[
                "Delays and obstacles",
                "Depression and isolation",
                "Career setbacks",
                "Chronic diseases",
            ],
            remedies: &[
                "Chant Shani Mantra",
                "Donate black sesame, iron on Saturdays",
                "Serve poor and handicapped",
            ],
            life_areas: &["Discipline", "Karma", "Hardship", "Longevity", "Service"],
        },
        Planet::Rahu => DashaEffect {
            positive: &[
                "Sudden gains and lottery",
                "Foreign travel and settlement",
                "Political success",
                "Research and innovation",
                "Technology expertise",
            ],
            negative: &[
                "Confusion and deception",
                "Addictions",
                "Sudden losses",
                "Mental instability",
            ],
            remedies: &[
                "Durga worship",
                "Donate mustard oil on Saturdays",
                "Avoid alcohol and drugs",
            ],
            life_areas: &["Foreign", "Technology", "Politics", "Sudden Events", "Illusion"],
        },
        Planet::Ketu => DashaEffect {
            positive: &[
                "Spiritual liberation (Moksha)",
                "Occult and psychic abilities",
                "Detachment from materialism",
                "Healing powers",
                "Research abilities",
            ],
            negative: &[
                "Confusion about life direction",
                "Isolation and loneliness",
                "Mysterious diseases",
                "Accidents",
            ],
            remedies: &[
                "Ganesha worship",
                "Meditation and yoga",
                "Donate sesame, blankets on Tuesdays",
            ],
            life_areas: &["Spirituality", "Moksha", "Occult", "Detachment", "Healing"],
        },
    }
}

/// Traditional remedies for a running dasha of `planet`.
pub fn dasha_remedies(planet: Planet) -> &'static [&'static str] {
    dasha_effect(planet).remedies
}

/// Nominal maha-dasha length of `planet` in years.
pub fn dasha_years(planet: Planet) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, years)| *years)
        .unwrap_or(0.0)
}

fn sequence_index(planet: Planet) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(p, _)| *p == planet)
        .unwrap_or(0)
}

/// A favorable dasha needs a lord of strength 60 or more.
pub fn is_dasha_favorable(strength: u8) -> bool {
    strength >= 60
}

/// `"NY NM ND"` label for an inclusive span of days.
pub fn format_duration(days: i64) -> String {
    const MONTH_DAYS: f64 = 365.0 / 12.0;
    let days = days.max(0);
    let years = days / 365;
    let remainder = days % 365;
    let months = (remainder as f64 / MONTH_DAYS).floor() as i64;
    let rest = remainder - (months as f64 * MONTH_DAYS).round() as i64;
    format!("{}Y {}M {}D", years, months, rest)
}

fn year_days(years: f64) -> i64 {
    (years * VIMSHOTTARI_YEAR_DAYS).round() as i64
}

// A period as year offsets from birth; end is exclusive.
#[derive(Debug, Clone, Copy)]
struct Span {
    planet: Planet,
    start_years: f64,
    end_years: f64,
}

impl Span {
    fn start_day(&self) -> i64 {
        year_days(self.start_years)
    }

    fn end_day(&self) -> i64 {
        year_days(self.end_years)
    }

    fn contains(&self, day: i64) -> bool {
        self.start_day() <= day && day < self.end_day()
    }
}

// Maha spans from birth up to `upcoming` periods past the one holding
// `reference_day`. Returns the spans and the index of the current one.
fn maha_spans(
    start_index: usize,
    progress: f64,
    reference_day: i64,
    upcoming: usize,
) -> (Vec<Span>, usize) {
    let mut spans: Vec<Span> = Vec::new();
    let mut current: Option<usize> = None;
    let mut cursor = 0.0;
    let mut offset = 0;

    loop {
        let (planet, years) =
            VIMSHOTTARI_SEQUENCE[(start_index + offset) % VIMSHOTTARI_SEQUENCE.len()];
        // First period is partial depending on Moon's position within the nakshatra
        let length = if offset == 0 { years * (1.0 - progress) } else { years };
        let span = Span {
            planet,
            start_years: cursor,
            end_years: cursor + length,
        };
        cursor += length;
        offset += 1;
        if span.end_day() <= span.start_day() {
            continue;
        }
        spans.push(span);
        if current.is_none() && reference_day < span.end_day() {
            current = Some(spans.len() - 1);
        }
        if let Some(index) = current {
            if spans.len() > index.saturating_add(upcoming) {
                return (spans, index);
            }
        }
    }
}

// Nine proportional sub-periods over the nominal span of `maha`.
fn antar_spans(maha: &Span) -> Vec<Span> {
    let maha_years = dasha_years(maha.planet);
    let first = sequence_index(maha.planet);
    let mut cursor = maha.end_years - maha_years;
    let mut spans: Vec<Span> = (0..VIMSHOTTARI_SEQUENCE.len())
        .map(|offset| {
            let (planet, years) =
                VIMSHOTTARI_SEQUENCE[(first + offset) % VIMSHOTTARI_SEQUENCE.len()];
            let length = maha_years * years / VIMSHOTTARI_TOTAL_YEARS;
            let span = Span {
                planet,
                start_years: cursor,
                end_years: cursor + length,
            };
            cursor += length;
            span
        })
        .collect();
    if let Some(last) = spans.last_mut() {
        last.end_years = maha.end_years;
    }
    spans
}

fn build_period(span: &Span, birth: NaiveDate, positions: &[PlanetaryPosition]) -> DashaPeriod {
    let start_date = birth + Duration::days(span.start_day());
    let end_date = birth + Duration::days(span.end_day() - 1);
    let strength = position_of(positions, span.planet)
        .map(|p| p.strength)
        .unwrap_or(50);
    let effect = dasha_effect(span.planet);

    let mut predictions = vec![format!(
        "{} dasha brings focus on {}",
        span.planet,
        effect.life_areas.join(", ")
    )];
    predictions.extend(effect.positive.iter().take(2).map(|s| s.to_string()));
    predictions.push(format!("Watch for: {}", effect.negative[0]));

    DashaPeriod {
        planet: span.planet,
        start_date,
        end_date,
        duration: format_duration(span.end_day() - span.start_day()),
        predictions,
        rating: (strength / 20).clamp(1, 5),
        favorable: is_dasha_favorable(strength),
        focus: effect.life_areas.iter().map(|s| s.to_string()).collect(),
        opportunities: effect.positive.iter().skip(2).map(|s| s.to_string()).collect(),
        challenges: effect.negative.iter().take(3).map(|s| s.to_string()).collect(),
    }
}

/// Build the Vimshottari sequence for a birth as seen on `reference`.
///
/// The Moon's longitude is its sign index times thirty plus its degree; the
/// nakshatra there picks the opening lord and the unelapsed balance. At most
/// [`MAX_UPCOMING_DASHAS`] upcoming periods are listed.
pub fn calculate_dasha_system(
    birth: &ValidatedBirth,
    positions: &[PlanetaryPosition],
    reference: NaiveDate,
    upcoming: usize,
) -> DashaSystem {
    let moon_degree = position_of(positions, Planet::Moon)
        .map(|p| p.degree as f64)
        .unwrap_or(0.0);
    let moon_longitude = moon_sign(birth).index() as f64 * 30.0 + moon_degree;
    let nakshatra = get_nakshatra_for_longitude(moon_longitude);

    let reference_day = (reference - birth.date).num_days();

    let (spans, current_index) = maha_spans(
        sequence_index(nakshatra.base.lord),
        nakshatra.progress,
        reference_day,
        upcoming.min(MAX_UPCOMING_DASHAS),
    );
    let current_span = spans[current_index];

    let antar = antar_spans(&current_span);
    let antar_index = antar
        .iter()
        .position(|s| s.contains(reference_day))
        .unwrap_or(if reference_day < current_span.start_day() {
            0
        } else {
            antar.len() - 1
        });

    let antardashas: Vec<DashaPeriod> = antar
        .iter()
        .map(|s| build_period(s, birth.date, positions))
        .collect();

    debug!(
        "dasha: nakshatra {} lord {} current {} antar {}",
        nakshatra.base.name, nakshatra.base.lord, current_span.planet, antar[antar_index].planet
    );

    DashaSystem {
        system: "Vimshottari".to_string(),
        birth_nakshatra: nakshatra.base.name.clone(),
        current_dasha: build_period(&current_span, birth.date, positions),
        upcoming_dashas: spans[current_index + 1..]
            .iter()
            .map(|s| build_period(s, birth.date, positions))
            .collect(),
        antardasha: antardashas[antar_index].clone(),
        antardashas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_sums_to_120_years() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0Y 0M 0D");
        assert_eq!(format_duration(400), "1Y 1M 5D");
        assert_eq!(format_duration(364), "0Y 11M 29D");
    }

    #[test]
    fn test_maha_spans_start_with_balance() {
        let (spans, current) = maha_spans(0, 0.5, 0, 3);
        assert_eq!(current, 0);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].planet, Planet::Ketu);
        assert!((spans[0].end_years - 3.5).abs() < 1e-9);
        assert_eq!(spans[1].planet, Planet::Venus);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end_day(), pair[1].start_day());
        }
    }

    #[test]
    fn test_maha_spans_wrap_past_one_cycle() {
        // 130 years in: one full cycle plus the opening 10 years
        let reference_day = year_days(130.0);
        let (spans, current) = maha_spans(3, 0.0, reference_day, 2);
        assert!(spans[current].contains(reference_day));
        assert_eq!(spans[current].planet, Planet::Mars);
        assert_eq!(spans.len(), current + 3);
    }

    #[test]
    fn test_antar_spans_fill_nominal_maha() {
        let maha = Span {
            planet: Planet::Venus,
            start_years: 0.0,
            end_years: 20.0,
        };
        let antar = antar_spans(&maha);
        assert_eq!(antar.len(), 9);
        assert_eq!(antar[0].planet, Planet::Venus);
        assert!((antar[0].end_years - 20.0 * 20.0 / 120.0).abs() < 1e-9);
        assert_eq!(antar[8].end_day(), maha.end_day());
        for pair in antar.windows(2) {
            assert_eq!(pair[0].end_day(), pair[1].start_day());
        }
    }

    #[test]
    fn test_favorable_threshold() {
        assert!(is_dasha_favorable(60));
        assert!(!is_dasha_favorable(59));
    }
}
