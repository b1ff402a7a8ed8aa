//! Field-level validator for airplane records

use chrono::{Datelike, Utc};

use super::errors::{ValidationError, ValidationResult};
use super::{MAX_DESTINATION_LEN, MIN_YEAR};
use crate::catalog::{self, AirplaneModel, Manufacturer};

/// Raw, untyped field values of a candidate airplane.
///
/// Absent fields are `None`. Nothing has been checked yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AirplaneFields<'a> {
    pub manufacturer: Option<&'a str>,
    pub model: Option<&'a str>,
    pub year: Option<&'a str>,
    pub fuel_capacity: Option<&'a str>,
    pub next_destination: Option<&'a str>,
}

/// A candidate airplane whose every field has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAirplane {
    pub manufacturer: Manufacturer,
    pub model: AirplaneModel,
    pub year: Option<i32>,
    pub fuel_capacity: Option<i64>,
    pub next_destination: Option<String>,
}

/// Validator for airplane field values.
///
/// The upper bound for `year` is the calendar year captured when the
/// validator is built.
#[derive(Debug, Clone, Copy)]
pub struct AirplaneValidator {
    current_year: i32,
}

impl AirplaneValidator {
    /// Creates a validator bound to the current UTC calendar year.
    pub fn new() -> Self {
        Self::with_current_year(Utc::now().year())
    }

    /// Creates a validator with an explicit current year.
    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Returns the latest accepted build year.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Validates a full candidate record.
    ///
    /// Fields are checked in declaration order and the first rejection is
    /// returned. The pairing is only checked once manufacturer and model
    /// are individually valid.
    pub fn validate_airplane(&self, fields: AirplaneFields<'_>) -> ValidationResult<ValidAirplane> {
        let manufacturer = self.validate_manufacturer(fields.manufacturer)?;
        let model = self.validate_model(fields.model)?;
        let year = self.validate_year(fields.year)?;
        let fuel_capacity = self.validate_fuel_capacity(fields.fuel_capacity)?;
        let next_destination = self.validate_next_destination(fields.next_destination)?;

        if !catalog::is_valid_pairing(manufacturer.name(), model.name()) {
            return Err(ValidationError::invalid_pairing(manufacturer.name(), model.name()));
        }

        Ok(ValidAirplane {
            manufacturer,
            model,
            year,
            fuel_capacity,
            next_destination,
        })
    }

    /// Required; must name a catalog manufacturer.
    pub fn validate_manufacturer(&self, value: Option<&str>) -> ValidationResult<Manufacturer> {
        let value = required("manufacturer", value)?;
        Manufacturer::from_name(value).ok_or_else(|| {
            let allowed: Vec<&str> = Manufacturer::ALL.iter().map(|m| m.name()).collect();
            ValidationError::invalid_enum("manufacturer", value, &allowed)
        })
    }

    /// Required; must name a catalog model.
    pub fn validate_model(&self, value: Option<&str>) -> ValidationResult<AirplaneModel> {
        let value = required("model", value)?;
        AirplaneModel::from_name(value).ok_or_else(|| {
            let allowed: Vec<&str> = AirplaneModel::ALL.iter().map(|m| m.name()).collect();
            ValidationError::invalid_enum("model", value, &allowed)
        })
    }

    /// Optional; digits only, within [1900, current year].
    pub fn validate_year(&self, value: Option<&str>) -> ValidationResult<Option<i32>> {
        let Some(value) = value else {
            return Ok(None);
        };
        let expected = format!("{} to {}", MIN_YEAR, self.current_year);
        parse_digits("year", value)?;
        let year: i32 = value
            .parse()
            .map_err(|_| ValidationError::out_of_range("year", value, expected.as_str()))?;

        if !(MIN_YEAR..=self.current_year).contains(&year) {
            return Err(ValidationError::out_of_range("year", value, expected));
        }
        Ok(Some(year))
    }

    /// Optional; digits only, non-negative.
    pub fn validate_fuel_capacity(&self, value: Option<&str>) -> ValidationResult<Option<i64>> {
        let Some(value) = value else {
            return Ok(None);
        };
        parse_digits("fuel_capacity", value)?;
        let capacity: i64 = value.parse().map_err(|_| {
            ValidationError::out_of_range("fuel_capacity", value, format!("0 to {}", i64::MAX))
        })?;

        if capacity < 0 {
            return Err(ValidationError::out_of_range("fuel_capacity", value, "a non-negative value"));
        }
        Ok(Some(capacity))
    }

    /// Optional; at most 85 characters, any character set.
    pub fn validate_next_destination(&self, value: Option<&str>) -> ValidationResult<Option<String>> {
        let Some(value) = value else {
            return Ok(None);
        };
        let length = value.chars().count();
        if length > MAX_DESTINATION_LEN {
            return Err(ValidationError::too_long("next_destination", length, MAX_DESTINATION_LEN));
        }
        Ok(Some(value.to_string()))
    }
}

impl Default for AirplaneValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> ValidationResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::required_field_missing(field)),
    }
}

/// Rejects anything that is not a non-empty run of ASCII digits.
fn parse_digits(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(field, value));
    }
    Ok(())
}
