//! Request and response shapes at the transport boundary

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ServiceError;
use crate::storage::StoredAirplane;
use crate::validation::AirplaneFields;

/// Positive integer identifier of an airplane row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AirplaneId(i64);

impl AirplaneId {
    /// Wraps `value` if it is positive.
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for AirplaneId {
    type Err = ServiceError;

    /// Accepts only a run of ASCII digits denoting a positive `i64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ServiceError::InvalidIdentifier(s.to_string());
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<i64>().ok().and_then(Self::new).ok_or_else(invalid)
    }
}

impl fmt::Display for AirplaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of a create request.
///
/// Every field is optional text. JSON integers are accepted and kept as
/// their decimal text; `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateAirplaneRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub fuel_capacity: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub next_destination: Option<String>,
}

impl CreateAirplaneRequest {
    pub fn fields(&self) -> AirplaneFields<'_> {
        AirplaneFields {
            manufacturer: self.manufacturer.as_deref(),
            model: self.model.as_deref(),
            year: self.year.as_deref(),
            fuel_capacity: self.fuel_capacity.as_deref(),
            next_destination: self.next_destination.as_deref(),
        }
    }
}

/// Body of an update request. An absent destination clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateAirplaneRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub next_destination: Option<String>,
}

/// A stored airplane as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirplaneRecord {
    pub id: i64,
    pub manufacturer: String,
    pub model: String,
    pub year: Option<i32>,
    pub fuel_capacity: Option<i64>,
    pub next_destination: Option<String>,
}

impl From<StoredAirplane> for AirplaneRecord {
    fn from(stored: StoredAirplane) -> Self {
        Self {
            id: stored.id,
            manufacturer: stored.manufacturer,
            model: stored.model,
            year: stored.year,
            fuel_capacity: stored.fuel_capacity,
            next_destination: stored.next_destination,
        }
    }
}

/// Acknowledgement of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionConfirmation {
    pub id: i64,
    pub msg: String,
}

impl DeletionConfirmation {
    pub fn new(id: AirplaneId) -> Self {
        Self {
            id: id.get(),
            msg: format!("Airplane with Id: {} has been deleted!", id),
        }
    }
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or an integer, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
