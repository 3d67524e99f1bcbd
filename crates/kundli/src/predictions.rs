//! Life-domain predictions.
//!
//! The narrative text is fixed per domain. Timing windows come from the
//! listed maha-dashas: a domain picks the periods ruled by its significators
//! and falls back to an age-based window when none of them is listed.

use serde::{Deserialize, Serialize};

use crate::chart::{BirthChart, Planet, PlanetaryPosition};
use crate::vedic::dashas::dasha_remedies;
use crate::vedic::{DashaPeriod, DashaSystem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub description: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPrediction {
    pub suitable_fields: Vec<String>,
    pub success_periods: Vec<Period>,
    pub challenging_periods: Vec<Period>,
    pub business_or_job: String,
    pub peak_age: String,
    pub predictions: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriagePrediction {
    pub timing: String,
    pub spouse_characteristics: Vec<String>,
    pub marriage_happiness: String,
    pub children_prediction: String,
    pub relationship_advice: Vec<String>,
    pub favorable_periods: Vec<Period>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPrediction {
    pub general_health: String,
    pub vulnerable_areas: Vec<String>,
    pub strong_areas: Vec<String>,
    pub critical_periods: Vec<Period>,
    pub longevity: String,
    pub health_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthPrediction {
    pub financial_stability: String,
    pub wealth_sources: Vec<String>,
    pub peak_wealth_period: String,
    pub savings_ability: String,
    pub inheritance: String,
    pub financial_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPrediction {
    pub academic_strength: String,
    pub suitable_fields: Vec<String>,
    pub higher_education: String,
    pub focus_periods: Vec<Period>,
    pub study_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyPrediction {
    pub parents_relation: String,
    pub siblings_relation: String,
    pub family_support: String,
    pub ancestral_property: String,
    pub family_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignTravelPrediction {
    pub likelihood: String,
    pub favorable_periods: Vec<Period>,
    pub purposes: Vec<String>,
    pub settlement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiritualityPrediction {
    pub spiritual_inclination: String,
    pub enlightenment_path: String,
    pub religious_observance: String,
    pub spiritual_practices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifePredictions {
    pub career: CareerPrediction,
    pub marriage: MarriagePrediction,
    pub health: HealthPrediction,
    pub wealth: WealthPrediction,
    pub education: EducationPrediction,
    pub family: FamilyPrediction,
    pub foreign_travel: ForeignTravelPrediction,
    pub spirituality: SpiritualityPrediction,
}

const CAREER_LORDS: [Planet; 4] = [Planet::Sun, Planet::Jupiter, Planet::Saturn, Planet::Mercury];
const MARRIAGE_LORDS: [Planet; 3] = [Planet::Venus, Planet::Jupiter, Planet::Moon];
const HEALTH_LORDS: [Planet; 4] = [Planet::Saturn, Planet::Rahu, Planet::Ketu, Planet::Mars];
const EDUCATION_LORDS: [Planet; 2] = [Planet::Mercury, Planet::Jupiter];
const TRAVEL_LORDS: [Planet; 3] = [Planet::Rahu, Planet::Ketu, Planet::Moon];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn period(description: &str, timeframe: &str) -> Period {
    Period {
        description: description.to_string(),
        timeframe: timeframe.to_string(),
    }
}

fn timeframe(dasha: &DashaPeriod) -> String {
    format!(
        "{} to {}",
        dasha.start_date.format("%b %Y"),
        dasha.end_date.format("%b %Y")
    )
}

/// Listed periods whose lord is in `lords` and which pass `keep`, or the
/// fallback windows when nothing matches.
fn dasha_windows<F>(
    dashas: &DashaSystem,
    lords: &[Planet],
    keep: F,
    label: &str,
    fallback: Vec<Period>,
) -> Vec<Period>
where
    F: Fn(&DashaPeriod) -> bool,
{
    let windows: Vec<Period> = dashas
        .listed_periods()
        .filter(|d| lords.contains(&d.planet) && keep(d))
        .map(|d| Period {
            description: format!("{} Mahadasha - {}", d.planet, label),
            timeframe: timeframe(d),
        })
        .collect();
    if windows.is_empty() {
        fallback
    } else {
        windows
    }
}

fn any_period(_: &DashaPeriod) -> bool {
    true
}

pub fn generate_life_predictions(
    _chart: &BirthChart,
    _positions: &[PlanetaryPosition],
    dashas: &DashaSystem,
) -> LifePredictions {
    let career = CareerPrediction {
        suitable_fields: strings(&[
            "Technology and IT",
            "Business and Finance",
            "Education and Teaching",
            "Government Service",
        ]),
        success_periods: dasha_windows(
            dashas,
            &CAREER_LORDS,
            any_period,
            "career growth and recognition",
            vec![
                period("Major career breakthrough", "Age 28-35"),
                period("Peak professional period", "Age 40-50"),
            ],
        ),
        challenging_periods: dasha_windows(
            dashas,
            &Planet::ALL,
            |d| !d.favorable,
            "career uncertainty, move carefully",
            vec![period("Career uncertainty", "Age 25-27")],
        ),
        business_or_job: "Both suitable, but business after age 30 is highly favorable".to_string(),
        peak_age: "38-45 years".to_string(),
        predictions: strings(&[
            "Strong career growth indicated",
            "Leadership positions likely",
            "International opportunities possible",
            "Multiple income sources",
        ]),
        recommendations: strings(&[
            "Focus on skill development",
            "Build strong professional network",
            "Consider entrepreneurship after age 30",
            "Invest in continuous learning",
        ]),
    };

    let marriage = MarriagePrediction {
        timing: "Age 25-28 for favorable marriage".to_string(),
        spouse_characteristics: strings(&[
            "Well-educated partner",
            "Supportive and understanding nature",
            "From good family background",
            "Spiritual inclination",
        ]),
        marriage_happiness: "Very good marital happiness indicated. Minor adjustments needed initially.".to_string(),
        children_prediction: "2-3 children, first child likely to be successful".to_string(),
        relationship_advice: strings(&[
            "Communicate openly with partner",
            "Respect each other's space",
            "Maintain work-life balance",
            "Celebrate small moments together",
        ]),
        favorable_periods: dasha_windows(
            dashas,
            &MARRIAGE_LORDS,
            any_period,
            "favorable for marriage and partnership",
            vec![period("Best time for marriage", "This year to next 2 years")],
        ),
    };

    let health = HealthPrediction {
        general_health: "Generally good health with strong immunity".to_string(),
        vulnerable_areas: strings(&["Digestive system", "Stress-related issues"]),
        strong_areas: strings(&["Heart", "Bones", "Overall vitality"]),
        critical_periods: dasha_windows(
            dashas,
            &HEALTH_LORDS,
            any_period,
            "extra care needed for health",
            vec![period("Extra care needed for health", "Age 42-44")],
        ),
        longevity: "Long and healthy life indicated with proper care".to_string(),
        health_advice: strings(&[
            "Regular exercise routine essential",
            "Yoga and meditation highly beneficial",
            "Avoid excessive oily and spicy food",
            "Regular health check-ups after age 40",
            "Adequate sleep crucial",
        ]),
    };

    let wealth = WealthPrediction {
        financial_stability: "Excellent financial prospects with multiple income sources".to_string(),
        wealth_sources: strings(&[
            "Salary/Business income",
            "Property investments",
            "Stock market gains",
            "Inheritance possible",
        ]),
        peak_wealth_period: "Age 38-55 years".to_string(),
        savings_ability: "Good savings ability. Tendency to invest wisely.".to_string(),
        inheritance: "Likely to receive ancestral property or wealth".to_string(),
        financial_advice: strings(&[
            "Start investing early in life",
            "Diversify investments",
            "Real estate investments favorable",
            "Avoid risky speculations before age 35",
            "Build emergency fund",
            "Plan for retirement systematically",
        ]),
    };

    let education = EducationPrediction {
        academic_strength: "Strong academic abilities, especially in technical/scientific subjects".to_string(),
        suitable_fields: strings(&[
            "Engineering and Technology",
            "Science and Research",
            "Business Administration",
            "Medicine and Healthcare",
        ]),
        higher_education: "Masters or PhD education indicated and beneficial".to_string(),
        focus_periods: dasha_windows(
            dashas,
            &EDUCATION_LORDS,
            any_period,
            "best period for learning and higher studies",
            vec![period("Best period for higher studies", "Age 22-26")],
        ),
        study_advice: strings(&[
            "Pursue higher education for career growth",
            "Foreign education opportunities likely",
            "Research-oriented fields suit you",
            "Continuous learning mindset important",
        ]),
    };

    let family = FamilyPrediction {
        parents_relation: "Good relationship with parents, especially with mother".to_string(),
        siblings_relation: "Supportive siblings, may need to help them occasionally".to_string(),
        family_support: "Strong family support throughout life".to_string(),
        ancestral_property: "Likely to benefit from ancestral property".to_string(),
        family_advice: strings(&[
            "Maintain close family bonds",
            "Respect elders for blessings",
            "Support siblings when needed",
            "Create happy memories together",
        ]),
    };

    let foreign_travel = ForeignTravelPrediction {
        likelihood: "High probability of foreign travel and possible settlement".to_string(),
        favorable_periods: dasha_windows(
            dashas,
            &TRAVEL_LORDS,
            any_period,
            "foreign opportunities and long journeys",
            vec![
                period("Best time for foreign opportunities", "Age 28-35"),
                period("Settlement abroad possible", "Age 32-40"),
            ],
        ),
        purposes: strings(&[
            "Higher education",
            "Career opportunities",
            "Business expansion",
            "Spiritual journeys",
        ]),
        settlement: "Foreign settlement possible and favorable if pursued".to_string(),
    };

    let running = dashas.current_dasha.planet;
    let mut spiritual_practices = strings(&[
        "Daily meditation recommended",
        "Mantra chanting beneficial",
        "Pilgrimage to holy places",
        "Study of scriptures",
        "Service to humanity",
    ]);
    spiritual_practices.push(format!(
        "For the running {} dasha: {}",
        running,
        dasha_remedies(running).join(", ")
    ));
    let spirituality = SpiritualityPrediction {
        spiritual_inclination: "Growing spiritual inclination, especially after age 35".to_string(),
        enlightenment_path: "Bhakti (devotional) and Karma (action) yoga paths suit you".to_string(),
        religious_observance: "Regular worship and religious practices beneficial".to_string(),
        spiritual_practices,
    };

    LifePredictions {
        career,
        marriage,
        health,
        wealth,
        education,
        family,
        foreign_travel,
        spirituality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ZodiacSign;
    use crate::settings::ChartStyle;
    use chrono::NaiveDate;

    fn dasha(planet: Planet, start: (i32, u32), end: (i32, u32), favorable: bool) -> DashaPeriod {
        DashaPeriod {
            planet,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, 1).unwrap(),
            duration: String::new(),
            predictions: Vec::new(),
            rating: 3,
            favorable,
            focus: Vec::new(),
            opportunities: Vec::new(),
            challenges: Vec::new(),
        }
    }

    fn system(current: DashaPeriod, upcoming: Vec<DashaPeriod>) -> DashaSystem {
        DashaSystem {
            system: "Vimshottari".to_string(),
            birth_nakshatra: "Rohini".to_string(),
            antardasha: current.clone(),
            antardashas: vec![current.clone()],
            current_dasha: current,
            upcoming_dashas: upcoming,
        }
    }

    fn chart() -> BirthChart {
        BirthChart {
            ascendant: ZodiacSign::Aries,
            moon_sign: ZodiacSign::Aries,
            sun_sign: ZodiacSign::Aries,
            houses: Vec::new(),
            chart_type: ChartStyle::NorthIndian,
        }
    }

    #[test]
    fn test_windows_follow_dasha_lords() {
        let dashas = system(
            dasha(Planet::Venus, (2020, 1), (2039, 12), true),
            vec![
                dasha(Planet::Sun, (2040, 1), (2045, 12), true),
                dasha(Planet::Moon, (2046, 1), (2055, 12), false),
            ],
        );
        let predictions = generate_life_predictions(&chart(), &[], &dashas);

        let career = &predictions.career.success_periods;
        assert_eq!(career.len(), 1);
        assert_eq!(career[0].description, "Sun Mahadasha - career growth and recognition");
        assert_eq!(career[0].timeframe, "Jan 2040 to Dec 2045");

        let marriage: Vec<&str> = predictions
            .marriage
            .favorable_periods
            .iter()
            .map(|p| p.description.as_str())
            .collect();
        assert_eq!(marriage.len(), 2);
        assert!(marriage[0].starts_with("Venus"));

        assert_eq!(predictions.career.challenging_periods.len(), 1);
        assert!(predictions.career.challenging_periods[0].description.starts_with("Moon"));
    }

    #[test]
    fn test_fallback_to_age_windows() {
        let dashas = system(dasha(Planet::Venus, (2020, 1), (2039, 12), true), Vec::new());
        let predictions = generate_life_predictions(&chart(), &[], &dashas);
        assert_eq!(
            predictions.health.critical_periods,
            vec![period("Extra care needed for health", "Age 42-44")]
        );
        assert_eq!(predictions.education.focus_periods[0].timeframe, "Age 22-26");
        assert_eq!(predictions.foreign_travel.favorable_periods.len(), 2);
    }

    #[test]
    fn test_running_dasha_practice() {
        let dashas = system(dasha(Planet::Saturn, (2020, 1), (2038, 12), true), Vec::new());
        let predictions = generate_life_predictions(&chart(), &[], &dashas);
        let last = predictions.spirituality.spiritual_practices.last().unwrap();
        assert!(last.starts_with("For the running Saturn dasha: "));
    }
}
