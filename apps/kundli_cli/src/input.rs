use anyhow::Context;
use clap::{Args, ValueEnum};
use kundli::{BirthDetails, Gender, PlaceOfBirth};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Birth details either from a JSON file or from individual flags.
#[derive(Args, Debug)]
pub(crate) struct BirthArgs {
    /// JSON file holding a `BirthDetails` object (camelCase keys).
    #[arg(long, conflicts_with_all = ["name", "date", "time"])]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    /// Date of birth, YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<String>,

    /// Time of birth, HH:MM (24-hour).
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long, default_value = "New Delhi")]
    pub city: String,

    #[arg(long, default_value = "India")]
    pub country: String,

    #[arg(long, default_value_t = 28.6139, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, default_value_t = 77.2090, allow_negative_numbers = true)]
    pub lon: f64,

    #[arg(long, default_value = "Asia/Kolkata")]
    pub timezone: String,

    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    pub gender: GenderArg,
}

pub(crate) fn read_birth_file(path: &Path) -> anyhow::Result<BirthDetails> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read birth details {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse birth details {}", path.display()))
}

impl BirthArgs {
    pub(crate) fn into_details(self) -> anyhow::Result<BirthDetails> {
        if let Some(path) = &self.input {
            return read_birth_file(path);
        }
        let (Some(name), Some(date), Some(time)) = (self.name, self.date, self.time) else {
            anyhow::bail!("Pass --input <file.json> or all of --name, --date and --time");
        };
        Ok(BirthDetails {
            name,
            date_of_birth: date,
            time_of_birth: time,
            place_of_birth: PlaceOfBirth {
                city: self.city,
                country: self.country,
                latitude: self.lat,
                longitude: self.lon,
                timezone: self.timezone,
            },
            gender: self.gender.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn flags() -> BirthArgs {
        BirthArgs {
            input: None,
            name: Some("Kiran".to_string()),
            date: Some("1990-06-15".to_string()),
            time: Some("10:30".to_string()),
            city: "Pune".to_string(),
            country: "India".to_string(),
            lat: 18.52,
            lon: 73.85,
            timezone: "Asia/Kolkata".to_string(),
            gender: GenderArg::Female,
        }
    }

    #[test]
    fn test_flags_build_details() {
        let details = flags().into_details().unwrap();
        assert_eq!(details.name, "Kiran");
        assert_eq!(details.place_of_birth.city, "Pune");
        assert_eq!(details.gender, Gender::Female);
    }

    #[test]
    fn test_missing_flags_rejected() {
        let mut args = flags();
        args.time = None;
        assert!(args.into_details().is_err());
    }

    #[test]
    fn test_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name":"Dev","dateOfBirth":"1985-01-20","timeOfBirth":"05:45",
               "placeOfBirth":{{"city":"Chennai","country":"India","latitude":13.08,
               "longitude":80.27,"timezone":"Asia/Kolkata"}},"gender":"male"}}"#
        )
        .unwrap();
        let details = read_birth_file(file.path()).unwrap();
        assert_eq!(details.date_of_birth, "1985-01-20");
        assert_eq!(details.gender, Gender::Male);
    }
}
