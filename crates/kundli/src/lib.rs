//! Deterministic Vedic kundli engine.
//!
//! Birth details go in, a [`CompleteKundli`] comes out: chart, houses,
//! yogas, Vimshottari dashas, doshas with remedies, life predictions and
//! reference catalogs. Placement is a fixed function of the calendar date
//! and clock time plus a seeded random stream, not an ephemeris, so the
//! same input always yields the same kundli.

pub mod birth;
pub mod chart;
pub mod doshas;
pub mod error;
pub mod kundli;
pub mod matching;
pub mod predictions;
pub mod remedies;
pub mod settings;
pub mod vedic;

pub use birth::{BirthDetails, Gender, PlaceOfBirth, ValidatedBirth};
pub use chart::{BirthChart, Dignity, House, Planet, PlanetaryPosition, ZodiacSign};
pub use doshas::{Dosha, DoshaAnalysis, DoshaType, Severity, TotalSeverity};
pub use error::{KundliError, Result, ValidationError};
pub use kundli::{
    compare_kundlis, generate_complete_kundli, get_all_remedies_from_kundli, AllRemedies,
    CompleteKundli, KundliEngine, PersonalInfo,
};
pub use matching::{
    analyze_cross_kundli_compatibility, CompatibilityResult, GunaScore, MatchVerdict,
};
pub use predictions::LifePredictions;
pub use remedies::{get_all_mantras, get_pilgrimage_guides, MantraDetails, PilgrimageGuide};
pub use settings::{ChartStyle, EngineSettings};
