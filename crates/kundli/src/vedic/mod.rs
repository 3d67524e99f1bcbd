pub mod dashas;
pub mod houses;
pub mod nakshatra;
pub mod yogas;

pub use dashas::{calculate_dasha_system, DashaPeriod, DashaSystem};
pub use houses::{analyze_ascendant, analyze_houses, AscendantAnalysis, HouseAnalysis};
pub use nakshatra::{get_nakshatra_for_longitude, Gana, Nadi, NakshatraMetadata, Yoni};
pub use yogas::{detect_yogas, Yoga, YogaStrength, YogaType};
