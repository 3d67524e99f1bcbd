use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chart drawing convention carried as a tag on the birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartStyle {
    #[default]
    #[serde(rename = "North Indian", alias = "north_indian")]
    NorthIndian,
    #[serde(rename = "South Indian", alias = "south_indian")]
    SouthIndian,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub chart_style: ChartStyle,

    // Mixed into the per-birth seed; changing it reshuffles degrees and strengths
    pub seed_salt: String,

    // Dasha listing
    pub upcoming_dashas: usize,

    // Planets below this strength receive remedies
    pub weak_planet_threshold: u8,

    // "Today" for dasha selection and age; None means the current UTC date
    pub reference_date: Option<NaiveDate>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            chart_style: ChartStyle::NorthIndian,
            seed_salt: String::new(),
            upcoming_dashas: 3,
            weak_planet_threshold: 50,
            reference_date: None,
        }
    }
}

impl EngineSettings {
    /// Resolve the reference date, falling back to today's UTC date.
    pub fn reference_date_or_today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
