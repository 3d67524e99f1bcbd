//! Birth details as supplied by callers, and their validated form.

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ValidationError;

lazy_static::lazy_static! {
    static ref TIME_PATTERN: regex::Regex =
        regex::Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").expect("static time pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOfBirth {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// Raw birth input. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Local clock time, `HH:MM` (24-hour).
    pub time_of_birth: String,
    pub place_of_birth: PlaceOfBirth,
    pub gender: Gender,
}

/// Birth details that passed validation, with the date and time parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBirth {
    pub details: BirthDetails,
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

impl BirthDetails {
    pub fn validate(&self) -> Result<ValidatedBirth, ValidationError> {
        let result = self.validate_fields();
        if let Err(err) = &result {
            warn!("rejecting birth details for {:?}: {}", self.name, err);
        }
        result
    }

    fn validate_fields(&self) -> Result<ValidatedBirth, ValidationError> {
        require("name", &self.name)?;
        require("dateOfBirth", &self.date_of_birth)?;
        require("timeOfBirth", &self.time_of_birth)?;
        require("placeOfBirth.city", &self.place_of_birth.city)?;
        require("placeOfBirth.country", &self.place_of_birth.country)?;
        require("placeOfBirth.timezone", &self.place_of_birth.timezone)?;

        let date = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate {
                value: self.date_of_birth.clone(),
            })?;
        let (hour, minute) = parse_clock_time(&self.time_of_birth)?;

        let place = &self.place_of_birth;
        check_coordinate("latitude", place.latitude, 90.0)?;
        check_coordinate("longitude", place.longitude, 180.0)?;

        Ok(ValidatedBirth {
            details: self.clone(),
            date,
            hour,
            minute,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn check_coordinate(axis: &'static str, value: f64, limit: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value.abs() > limit {
        return Err(ValidationError::InvalidCoordinate { axis, value });
    }
    Ok(())
}

/// Parse `HH:MM` into an (hour, minute) pair.
pub fn parse_clock_time(value: &str) -> Result<(u32, u32), ValidationError> {
    let invalid = || ValidationError::InvalidTime {
        value: value.to_string(),
    };
    let caps = TIME_PATTERN.captures(value).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

impl ValidatedBirth {
    /// Zero-based month (January = 0).
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    pub fn day_of_month(&self) -> usize {
        self.date.day() as usize
    }

    /// Completed years between birth and `on`, never negative.
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        on.years_since(self.date).unwrap_or(0)
    }

    /// SHA-256 of the canonical birth record plus `salt`, used to seed chart draws.
    pub fn seed(&self, salt: &str) -> [u8; 32] {
        let d = &self.details;
        let p = &d.place_of_birth;
        let canonical = format!(
            "{}|{}|{:02}:{:02}|{}|{}|{:.6}|{:.6}|{}|{:?}|{}",
            d.name.trim(),
            self.date,
            self.hour,
            self.minute,
            p.city.trim(),
            p.country.trim(),
            p.latitude,
            p.longitude,
            p.timezone.trim(),
            d.gender,
            salt,
        );
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BirthDetails {
        BirthDetails {
            name: "Asha".to_string(),
            date_of_birth: "1990-06-15".to_string(),
            time_of_birth: "10:30".to_string(),
            place_of_birth: PlaceOfBirth {
                city: "Pune".to_string(),
                country: "India".to_string(),
                latitude: 18.52,
                longitude: 73.86,
                timezone: "Asia/Kolkata".to_string(),
            },
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_validate_parses_date_and_time() {
        let birth = sample().validate().unwrap();
        assert_eq!(birth.month_index(), 5);
        assert_eq!(birth.day_of_month(), 15);
        assert_eq!((birth.hour, birth.minute), (10, 30));
    }

    #[test]
    fn test_parse_clock_time_rejects_out_of_range() {
        assert_eq!(parse_clock_time("7:05").unwrap(), (7, 5));
        assert!(parse_clock_time("24:00").is_err());
        assert!(parse_clock_time("12:60").is_err());
        assert!(parse_clock_time("noon").is_err());
        assert!(parse_clock_time("12-30").is_err());
    }

    #[test]
    fn test_missing_city_is_reported() {
        let mut details = sample();
        details.place_of_birth.city = "  ".to_string();
        assert_eq!(
            details.validate().unwrap_err(),
            ValidationError::MissingField { field: "placeOfBirth.city" }
        );
    }

    #[test]
    fn test_invalid_date_and_latitude() {
        let mut details = sample();
        details.date_of_birth = "1990-02-30".to_string();
        assert!(matches!(details.validate(), Err(ValidationError::InvalidDate { .. })));

        let mut details = sample();
        details.place_of_birth.latitude = 91.0;
        assert!(matches!(
            details.validate(),
            Err(ValidationError::InvalidCoordinate { axis: "latitude", .. })
        ));
    }

    #[test]
    fn test_seed_depends_on_salt() {
        let birth = sample().validate().unwrap();
        assert_eq!(birth.seed(""), birth.seed(""));
        assert_ne!(birth.seed(""), birth.seed("other"));
    }

    #[test]
    fn test_age_is_never_negative() {
        let birth = sample().validate().unwrap();
        let before = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2020, 6, 14).unwrap();
        assert_eq!(birth.age_on(before), 0);
        assert_eq!(birth.age_on(later), 29);
    }
}
