//! Validation error types
//!
//! Error codes:
//! - REQUIRED_FIELD_MISSING
//! - INVALID_ENUM
//! - INVALID_FORMAT
//! - OUT_OF_RANGE
//! - TOO_LONG
//! - INVALID_PAIRING
//!
//! All of them reject the request; none is fatal or retried.

use std::fmt;

/// Validation failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// Required field absent or empty
    RequiredFieldMissing,
    /// Value outside a closed catalog
    InvalidEnum,
    /// Value is not a decimal digit string
    InvalidFormat,
    /// Parsed value outside its accepted range
    OutOfRange,
    /// Text longer than allowed
    TooLong,
    /// Manufacturer and model are not paired in the catalog
    InvalidPairing,
}

impl ValidationErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::RequiredFieldMissing => "REQUIRED_FIELD_MISSING",
            ValidationErrorCode::InvalidEnum => "INVALID_ENUM",
            ValidationErrorCode::InvalidFormat => "INVALID_FORMAT",
            ValidationErrorCode::OutOfRange => "OUT_OF_RANGE",
            ValidationErrorCode::TooLong => "TOO_LONG",
            ValidationErrorCode::InvalidPairing => "INVALID_PAIRING",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rejected field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    code: ValidationErrorCode,
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn required_field_missing(field: &'static str) -> Self {
        Self {
            code: ValidationErrorCode::RequiredFieldMissing,
            field,
            message: format!("{} is required", field),
        }
    }

    pub fn invalid_enum(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self {
            code: ValidationErrorCode::InvalidEnum,
            field,
            message: format!("'{}' is not one of [{}]", value, allowed.join(", ")),
        }
    }

    pub fn invalid_format(field: &'static str, value: &str) -> Self {
        Self {
            code: ValidationErrorCode::InvalidFormat,
            field,
            message: format!("'{}' must contain only decimal digits", value),
        }
    }

    pub fn out_of_range(field: &'static str, value: &str, expected: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::OutOfRange,
            field,
            message: format!("{} is out of range, expected {}", value, expected.into()),
        }
    }

    pub fn too_long(field: &'static str, length: usize, max: usize) -> Self {
        Self {
            code: ValidationErrorCode::TooLong,
            field,
            message: format!("length {} exceeds maximum of {} characters", length, max),
        }
    }

    pub fn invalid_pairing(manufacturer: &str, model: &str) -> Self {
        Self {
            code: ValidationErrorCode::InvalidPairing,
            field: "model",
            message: format!("model '{}' is not built by '{}'", model, manufacturer),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Returns the offending field name
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
