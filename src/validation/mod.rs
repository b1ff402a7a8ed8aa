//! Airplane record validation
//!
//! Every field value arrives as optional text. The validator either accepts
//! it (returning the typed value) or rejects it with a specific
//! [`ValidationErrorCode`]. It never coerces.
//!
//! # Rules
//!
//! - `manufacturer`, `model`: required, closed catalogs
//! - `year`: optional, digits only, 1900 ..= current year
//! - `fuel_capacity`: optional, digits only, >= 0
//! - `next_destination`: optional, at most 85 characters
//! - (`manufacturer`, `model`) must be a catalog pairing
//!
//! Validation runs before any write reaches storage and has no side effects.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationErrorCode, ValidationResult};
pub use validator::{AirplaneFields, AirplaneValidator, ValidAirplane};

/// Lowest accepted build year
pub const MIN_YEAR: i32 = 1900;

/// Maximum length of `next_destination`, in characters
pub const MAX_DESTINATION_LEN: usize = 85;
