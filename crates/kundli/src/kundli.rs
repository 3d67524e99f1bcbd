//! The complete kundli aggregate and the pipeline that builds it.

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::birth::{BirthDetails, Gender, ValidatedBirth};
use crate::chart::{
    assign_occupants, calculate_birth_chart, calculate_planetary_positions, BirthChart,
    PlanetaryPosition,
};
use crate::doshas::{detect_all_doshas, DoshaAnalysis, DoshaRemedy};
use crate::error::Result;
use crate::matching::{analyze_cross_kundli_compatibility, CompatibilityResult};
use crate::predictions::{generate_life_predictions, LifePredictions};
use crate::remedies::{
    generate_lucky_elements, generate_remedies, get_all_mantras, get_pilgrimage_guides,
    identify_challenges, identify_strengths, narrative_insight, LuckyElements, MantraDetails,
    PilgrimageGuide, Remedy,
};
use crate::settings::EngineSettings;
use crate::vedic::{
    analyze_ascendant, analyze_houses, calculate_dasha_system, detect_yogas, AscendantAnalysis,
    DashaSystem, HouseAnalysis, Yoga,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    /// `DD/MM/YYYY`.
    pub date_of_birth: String,
    pub time_of_birth: String,
    /// `"City, Country"`.
    pub place_of_birth: String,
    pub age: u32,
    pub gender: Gender,
}

impl PersonalInfo {
    fn from_birth(birth: &ValidatedBirth, today: NaiveDate) -> Self {
        let details = &birth.details;
        PersonalInfo {
            name: details.name.trim().to_string(),
            date_of_birth: birth.date.format("%d/%m/%Y").to_string(),
            time_of_birth: format!("{:02}:{:02}", birth.hour, birth.minute),
            place_of_birth: format!(
                "{}, {}",
                details.place_of_birth.city.trim(),
                details.place_of_birth.country.trim()
            ),
            age: birth.age_on(today),
            gender: details.gender,
        }
    }
}

/// Everything computed for one person. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteKundli {
    pub personal_info: PersonalInfo,
    pub birth_chart: BirthChart,
    pub planetary_positions: Vec<PlanetaryPosition>,
    pub house_analysis: Vec<HouseAnalysis>,
    pub ascendant_analysis: AscendantAnalysis,
    pub yogas: Vec<Yoga>,
    pub dashas: DashaSystem,
    pub life_predictions: LifePredictions,
    pub dosha_analysis: DoshaAnalysis,
    pub remedies: Vec<Remedy>,
    pub lucky_elements: LuckyElements,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub bhrigu_samhita_insight: String,
    pub all_mantras: Vec<MantraDetails>,
    pub pilgrimage_guides: Vec<PilgrimageGuide>,
}

/// Every remedy carried by a kundli, grouped by source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllRemedies {
    pub dosha_remedies: Vec<DoshaRemedy>,
    pub planetary_remedies: Vec<Remedy>,
    pub mantras: Vec<MantraDetails>,
    pub pilgrimages: Vec<PilgrimageGuide>,
}

/// Runs the kundli pipeline with a fixed set of settings.
///
/// The engine holds no state between calls, so one instance can be shared
/// across threads and used for any number of births.
#[derive(Debug, Clone, Default)]
pub struct KundliEngine {
    settings: EngineSettings,
}

impl KundliEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        KundliEngine { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Validate `details` and build the full aggregate.
    ///
    /// Validation happens before any computation; a rejected input produces
    /// no partial result.
    pub fn generate(&self, details: &BirthDetails) -> Result<CompleteKundli> {
        let birth = details.validate()?;
        let settings = &self.settings;
        let today = settings.reference_date_or_today();

        debug!(
            "charting {} ({} {:02}:{:02}) as of {}",
            details.name, birth.date, birth.hour, birth.minute, today
        );
        let mut birth_chart = calculate_birth_chart(&birth, settings);
        let planetary_positions = calculate_planetary_positions(&birth, settings);
        assign_occupants(&mut birth_chart, &planetary_positions);

        debug!("analyzing houses and ascendant {}", birth_chart.ascendant);
        let house_analysis = analyze_houses(&birth_chart, &planetary_positions);
        let ascendant_analysis = analyze_ascendant(birth_chart.ascendant);

        let yogas = detect_yogas(&planetary_positions, &birth_chart);
        debug!("{} yogas detected", yogas.len());

        let dashas =
            calculate_dasha_system(&birth, &planetary_positions, today, settings.upcoming_dashas);
        debug!(
            "birth nakshatra {}, running {} mahadasha",
            dashas.birth_nakshatra, dashas.current_dasha.planet
        );

        let life_predictions =
            generate_life_predictions(&birth_chart, &planetary_positions, &dashas);

        let dosha_analysis = detect_all_doshas(&planetary_positions, settings);
        debug!(
            "dosha scan for {} ascendant found {} dosha(s)",
            birth_chart.ascendant,
            dosha_analysis.doshas.len()
        );

        let remedies =
            generate_remedies(&planetary_positions, &yogas, settings.weak_planet_threshold);
        let lucky_elements = generate_lucky_elements(&birth_chart);
        let strengths = identify_strengths(&planetary_positions, &yogas);
        let challenges = identify_challenges(
            &planetary_positions,
            &yogas,
            &dosha_analysis.doshas,
            settings.weak_planet_threshold,
        );
        let bhrigu_samhita_insight = narrative_insight(&birth_chart);
        debug!(
            "{} planetary remedies, {} strengths, {} challenges",
            remedies.len(),
            strengths.len(),
            challenges.len()
        );

        info!(
            "kundli for {}: ascendant {}, {} doshas (total {:?})",
            details.name,
            birth_chart.ascendant,
            dosha_analysis.doshas.len(),
            dosha_analysis.total_severity
        );

        Ok(CompleteKundli {
            personal_info: PersonalInfo::from_birth(&birth, today),
            birth_chart,
            planetary_positions,
            house_analysis,
            ascendant_analysis,
            yogas,
            dashas,
            life_predictions,
            dosha_analysis,
            remedies,
            lucky_elements,
            strengths,
            challenges,
            bhrigu_samhita_insight,
            all_mantras: get_all_mantras(),
            pilgrimage_guides: get_pilgrimage_guides(),
        })
    }
}

/// Build a kundli with default settings.
pub fn generate_complete_kundli(details: &BirthDetails) -> Result<CompleteKundli> {
    KundliEngine::new().generate(details)
}

pub fn compare_kundlis(first: &CompleteKundli, second: &CompleteKundli) -> CompatibilityResult {
    analyze_cross_kundli_compatibility(first, second)
}

/// Collect the remedies already present in `kundli`; nothing is recomputed.
pub fn get_all_remedies_from_kundli(kundli: &CompleteKundli) -> AllRemedies {
    AllRemedies {
        dosha_remedies: kundli
            .dosha_analysis
            .doshas
            .iter()
            .flat_map(|d| d.remedies.iter().cloned())
            .collect(),
        planetary_remedies: kundli.remedies.clone(),
        mantras: kundli.all_mantras.clone(),
        pilgrimages: kundli.pilgrimage_guides.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::PlaceOfBirth;
    use crate::error::{KundliError, ValidationError};

    fn details() -> BirthDetails {
        BirthDetails {
            name: "Asha Verma".to_string(),
            date_of_birth: "1990-06-15".to_string(),
            time_of_birth: "10:30".to_string(),
            place_of_birth: PlaceOfBirth {
                city: "Pune".to_string(),
                country: "India".to_string(),
                latitude: 18.52,
                longitude: 73.85,
                timezone: "Asia/Kolkata".to_string(),
            },
            gender: Gender::Female,
        }
    }

    fn engine() -> KundliEngine {
        KundliEngine::with_settings(EngineSettings {
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..EngineSettings::default()
        })
    }

    #[test]
    fn test_personal_info_formatting() {
        let kundli = engine().generate(&details()).unwrap();
        let info = &kundli.personal_info;
        assert_eq!(info.date_of_birth, "15/06/1990");
        assert_eq!(info.time_of_birth, "10:30");
        assert_eq!(info.place_of_birth, "Pune, India");
        assert_eq!(info.age, 34);
    }

    #[test]
    fn test_age_and_dashas_share_one_reference_day() {
        // Day before the 35th birthday: age and current dasha must both read it.
        let eve = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let engine = KundliEngine::with_settings(EngineSettings {
            reference_date: Some(eve),
            ..EngineSettings::default()
        });
        let kundli = engine.generate(&details()).unwrap();
        assert_eq!(kundli.personal_info.age, 34);
        assert!(kundli.dashas.current_dasha.start_date <= eve);
        assert!(eve <= kundli.dashas.current_dasha.end_date);

        let birth = details().validate().unwrap();
        let direct = calculate_dasha_system(&birth, &kundli.planetary_positions, eve, 3);
        assert_eq!(direct, kundli.dashas);
    }

    #[test]
    fn test_generate_rejects_before_computing() {
        let mut bad = details();
        bad.time_of_birth = "25:00".to_string();
        let err = engine().generate(&bad).unwrap_err();
        assert!(matches!(err, KundliError::Validation(ValidationError::InvalidTime { .. })));
    }

    #[test]
    fn test_remedy_projection_matches_kundli() {
        let kundli = engine().generate(&details()).unwrap();
        let all = get_all_remedies_from_kundli(&kundli);
        let expected: usize = kundli.dosha_analysis.doshas.iter().map(|d| d.remedies.len()).sum();
        assert_eq!(all.dosha_remedies.len(), expected);
        assert_eq!(all.planetary_remedies, kundli.remedies);
        assert_eq!(all.mantras.len(), 11);
        assert_eq!(all.pilgrimages.len(), 5);
    }
}
