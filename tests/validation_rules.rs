//! Validation Rule Tests
//!
//! Field rules applied before any write:
//! - Manufacturer and model come from closed catalogs
//! - Year and fuel capacity are digit strings within range
//! - Destination is at most 85 characters
//! - Manufacturer and model must be paired in the catalog

use airplane_registry::catalog;
use airplane_registry::validation::{
    AirplaneFields, AirplaneValidator, ValidationErrorCode, MAX_DESTINATION_LEN, MIN_YEAR,
};

// =============================================================================
// Helper Functions
// =============================================================================

const CURRENT_YEAR: i32 = 2026;

fn validator() -> AirplaneValidator {
    AirplaneValidator::with_current_year(CURRENT_YEAR)
}

fn code_of(fields: AirplaneFields<'_>) -> Option<ValidationErrorCode> {
    validator().validate_airplane(fields).err().map(|e| e.code())
}

fn pair<'a>(manufacturer: &'a str, model: &'a str) -> AirplaneFields<'a> {
    AirplaneFields {
        manufacturer: Some(manufacturer),
        model: Some(model),
        ..Default::default()
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

/// Every manufacturer outside {Airbus, Boeing} is an enum failure.
#[test]
fn test_unknown_manufacturers_rejected() {
    for name in ["Embraer", "Bombardier", "AIRBUS", "boeing", "Airbus ", "Boeing-"] {
        assert_eq!(
            code_of(pair(name, "A220")),
            Some(ValidationErrorCode::InvalidEnum),
            "{:?}",
            name
        );
    }
}

/// Every model outside the catalog is an enum failure.
#[test]
fn test_unknown_models_rejected() {
    for name in ["A320", "737", "747", "a220", "787-9", "A350-1000"] {
        assert_eq!(
            code_of(pair("Airbus", name)),
            Some(ValidationErrorCode::InvalidEnum),
            "{:?}",
            name
        );
    }
}

/// Only catalog pairings pass, every other combination fails as a pairing.
#[test]
fn test_all_cross_pairings() {
    for make in catalog::Manufacturer::ALL {
        for model in catalog::AirplaneModel::ALL {
            let result = validator().validate_airplane(pair(make.name(), model.name()));
            if model.manufacturer() == make {
                assert!(result.is_ok(), "{} {} should be accepted", make, model);
            } else {
                assert_eq!(
                    result.unwrap_err().code(),
                    ValidationErrorCode::InvalidPairing,
                    "{} {} should be a pairing failure",
                    make,
                    model
                );
            }
        }
    }
}

/// Required fields may be neither absent nor empty.
#[test]
fn test_required_fields() {
    assert_eq!(
        code_of(AirplaneFields::default()),
        Some(ValidationErrorCode::RequiredFieldMissing)
    );
    assert_eq!(code_of(pair("", "A220")), Some(ValidationErrorCode::RequiredFieldMissing));
    assert_eq!(
        code_of(AirplaneFields {
            manufacturer: Some("Airbus"),
            ..Default::default()
        }),
        Some(ValidationErrorCode::RequiredFieldMissing)
    );
}

// =============================================================================
// Numeric Field Tests
// =============================================================================

/// Any non-digit character in a year is a format failure.
#[test]
fn test_year_with_non_digits() {
    for year in ["2O15", "2015a", "-1950", "1950.5", "１９５０", "0x7e0"] {
        let fields = AirplaneFields {
            year: Some(year),
            ..pair("Airbus", "A330")
        };
        assert_eq!(code_of(fields), Some(ValidationErrorCode::InvalidFormat), "{:?}", year);
    }
}

/// Digit strings outside [1900, current year] are range failures.
#[test]
fn test_year_range() {
    let v = validator();
    assert!(v.validate_year(Some(&MIN_YEAR.to_string())).is_ok());
    assert!(v.validate_year(Some(&CURRENT_YEAR.to_string())).is_ok());

    for year in ["0", "1899", "0999", "2027", "9999"] {
        assert_eq!(
            v.validate_year(Some(year)).unwrap_err().code(),
            ValidationErrorCode::OutOfRange,
            "{:?}",
            year
        );
    }
}

/// Leading zeros are still digits.
#[test]
fn test_year_leading_zeros() {
    assert_eq!(validator().validate_year(Some("02015")).unwrap(), Some(2015));
}

/// Negative-looking and non-digit capacities fail; digit strings pass.
#[test]
fn test_fuel_capacity_rules() {
    let v = validator();
    for good in ["0", "1", "200000", "0000"] {
        assert!(v.validate_fuel_capacity(Some(good)).is_ok(), "{:?}", good);
    }
    for bad in ["-1", "-0", "12 000", "3.5", "ten", ""] {
        assert_eq!(
            v.validate_fuel_capacity(Some(bad)).unwrap_err().code(),
            ValidationErrorCode::InvalidFormat,
            "{:?}",
            bad
        );
    }
}

// =============================================================================
// Destination Tests
// =============================================================================

/// 85 characters pass, 86 and more fail.
#[test]
fn test_destination_boundary() {
    let v = validator();
    assert!(v.validate_next_destination(Some(&"a".repeat(MAX_DESTINATION_LEN))).is_ok());
    for len in [86, 87, 200] {
        assert_eq!(
            v.validate_next_destination(Some(&"a".repeat(len))).unwrap_err().code(),
            ValidationErrorCode::TooLong
        );
    }
}

/// No character-set restriction applies.
#[test]
fn test_destination_any_characters() {
    let v = validator();
    for dest in ["São Paulo", "Zürich", "東京", "Rome; DROP TABLE airplane", "  "] {
        assert_eq!(v.validate_next_destination(Some(dest)).unwrap().as_deref(), Some(dest));
    }
}

/// The same input is judged the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let fields = AirplaneFields {
        year: Some("1850"),
        ..pair("Boeing", "767")
    };
    let first = validator().validate_airplane(fields).unwrap_err();
    for _ in 0..50 {
        assert_eq!(validator().validate_airplane(fields).unwrap_err(), first);
    }
}
