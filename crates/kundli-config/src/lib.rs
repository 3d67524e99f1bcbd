use kundli::vedic::dashas::MAX_UPCOMING_DASHAS;
use kundli::EngineSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATHS: [&str; 2] = ["configs/kundli.toml", "../../configs/kundli.toml"];

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineSettings>,
}

/// Try the common relative locations for `configs/kundli.toml`.
/// Returns `None` when neither exists.
pub fn read_config_toml_text() -> Option<String> {
    CONFIG_PATHS.iter().find_map(|p| fs::read_to_string(p).ok())
}

pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundli.toml: {e}"))?;
    let settings = root.engine.unwrap_or_default();
    validate_engine_settings(&settings)?;
    Ok(settings)
}

pub fn validate_engine_settings(settings: &EngineSettings) -> anyhow::Result<()> {
    if settings.weak_planet_threshold > 100 {
        anyhow::bail!(
            "engine.weak_planet_threshold must be within 0..=100, got {}",
            settings.weak_planet_threshold
        );
    }
    if settings.upcoming_dashas > MAX_UPCOMING_DASHAS {
        anyhow::bail!(
            "engine.upcoming_dashas must be at most {}, got {}",
            MAX_UPCOMING_DASHAS,
            settings.upcoming_dashas
        );
    }
    Ok(())
}

/// Settings from an explicit file. A missing file is an error here.
pub fn load_engine_settings_from(path: &Path) -> anyhow::Result<EngineSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_engine_settings(&text)
}

/// Settings from the default locations, or defaults when no file is present.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    match read_config_toml_text() {
        Some(text) => parse_engine_settings(&text),
        None => Ok(EngineSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli::ChartStyle;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = parse_engine_settings("").unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_partial_engine_table() {
        let settings = parse_engine_settings(
            r#"
            [engine]
            chart_style = "South Indian"
            reference_date = "2030-05-01"
            "#,
        )
        .unwrap();
        assert_eq!(settings.chart_style, ChartStyle::SouthIndian);
        assert_eq!(settings.reference_date.map(|d| d.to_string()), Some("2030-05-01".to_string()));
        assert_eq!(settings.upcoming_dashas, 3);
        assert_eq!(settings.weak_planet_threshold, 50);
    }

    #[test]
    fn test_malformed_file_is_error() {
        assert!(parse_engine_settings("[engine\nseed_salt = 1").is_err());
        assert!(parse_engine_settings("[engine]\nupcoming_dashas = \"three\"").is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(parse_engine_settings("[engine]\nweak_planet_threshold = 150").is_err());
        assert!(parse_engine_settings("[engine]\nupcoming_dashas = 40").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]\nseed_salt = \"family-tree\"\nupcoming_dashas = 5").unwrap();
        let settings = load_engine_settings_from(file.path()).unwrap();
        assert_eq!(settings.seed_salt, "family-tree");
        assert_eq!(settings.upcoming_dashas, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_engine_settings_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_repo_config_parses() {
        let text = include_str!("../../../configs/kundli.toml");
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.chart_style, ChartStyle::NorthIndian);
    }
}
