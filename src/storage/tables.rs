//! Relational tables and constraint enforcement
//!
//! Logical schema:
//!
//! ```text
//! manufacturer(name PK)
//! airplane_model(name PK)
//! manufacturer_model(make FK, model FK, PK(make, model))
//! airplane(id PK, manufacturer, model, year, fuel_capacity, next_destination,
//!          FK(manufacturer, model) -> manufacturer_model(make, model))
//! ```
//!
//! Every mutating method checks the affected row against all constraints
//! before touching the table, so a rejected write leaves the tables as
//! they were.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::errors::IntegrityError;
use crate::catalog;
use crate::validation::{MAX_DESTINATION_LEN, MIN_YEAR};

const AIRPLANE: &str = "airplane";
const MANUFACTURER: &str = "manufacturer";
const AIRPLANE_MODEL: &str = "airplane_model";
const MANUFACTURER_MODEL: &str = "manufacturer_model";

/// Column values of an `airplane` row, without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirplaneRow {
    pub manufacturer: String,
    pub model: String,
    pub year: Option<i32>,
    pub fuel_capacity: Option<i64>,
    pub next_destination: Option<String>,
}

/// A committed `airplane` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAirplane {
    pub id: i64,
    pub manufacturer: String,
    pub model: String,
    pub year: Option<i32>,
    pub fuel_capacity: Option<i64>,
    pub next_destination: Option<String>,
}

impl StoredAirplane {
    pub fn from_row(id: i64, row: &AirplaneRow) -> Self {
        Self {
            id,
            manufacturer: row.manufacturer.clone(),
            model: row.model.clone(),
            year: row.year,
            fuel_capacity: row.fuel_capacity,
            next_destination: row.next_destination.clone(),
        }
    }
}

/// The full table set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    manufacturer: BTreeSet<String>,
    airplane_model: BTreeSet<String>,
    manufacturer_model: BTreeSet<(String, String)>,
    airplane: BTreeMap<i64, AirplaneRow>,
    /// Next identifier handed out by `insert_airplane`; never reused.
    next_airplane_id: i64,
}

impl Tables {
    /// Creates the schema with every table empty.
    pub fn empty() -> Self {
        Self {
            manufacturer: BTreeSet::new(),
            airplane_model: BTreeSet::new(),
            manufacturer_model: BTreeSet::new(),
            airplane: BTreeMap::new(),
            next_airplane_id: 1,
        }
    }

    /// Populates the three catalog tables.
    ///
    /// Expected to run once against an empty schema.
    pub fn seed_catalogs(&mut self) -> Result<(), IntegrityError> {
        let rows = catalog::seed_rows();
        for name in rows.manufacturers {
            self.insert_manufacturer(name)?;
        }
        for name in rows.models {
            self.insert_model(name)?;
        }
        for (make, model) in rows.pairings {
            self.insert_pairing(make, model)?;
        }
        Ok(())
    }

    pub fn insert_manufacturer(&mut self, name: &str) -> Result<(), IntegrityError> {
        if !self.manufacturer.insert(name.to_string()) {
            return Err(IntegrityError::primary_key(
                MANUFACTURER,
                format!("manufacturer '{}' already exists", name),
            ));
        }
        Ok(())
    }

    pub fn insert_model(&mut self, name: &str) -> Result<(), IntegrityError> {
        if !self.airplane_model.insert(name.to_string()) {
            return Err(IntegrityError::primary_key(
                AIRPLANE_MODEL,
                format!("model '{}' already exists", name),
            ));
        }
        Ok(())
    }

    pub fn insert_pairing(&mut self, make: &str, model: &str) -> Result<(), IntegrityError> {
        self.check_pairing(make, model)?;
        if !self.manufacturer_model.insert((make.to_string(), model.to_string())) {
            return Err(IntegrityError::primary_key(
                MANUFACTURER_MODEL,
                format!("pairing ({}, {}) already exists", make, model),
            ));
        }
        Ok(())
    }

    /// Inserts an airplane under a fresh identifier.
    pub fn insert_airplane(&mut self, row: AirplaneRow) -> Result<StoredAirplane, IntegrityError> {
        self.check_airplane(&row)?;

        let id = self.next_airplane_id;
        if self.airplane.contains_key(&id) {
            return Err(IntegrityError::primary_key(AIRPLANE, format!("id {} already exists", id)));
        }
        let next = id.checked_add(1).ok_or_else(|| {
            IntegrityError::check(AIRPLANE, format!("identifier sequence exhausted at {}", id))
        })?;

        let stored = StoredAirplane::from_row(id, &row);
        self.airplane.insert(id, row);
        self.next_airplane_id = next;
        Ok(stored)
    }

    pub fn airplane(&self, id: i64) -> Option<StoredAirplane> {
        self.airplane.get(&id).map(|row| StoredAirplane::from_row(id, row))
    }

    /// Rewrites only the `next_destination` column of an existing row.
    pub fn set_destination(
        &mut self,
        id: i64,
        next_destination: Option<String>,
    ) -> Result<StoredAirplane, IntegrityError> {
        let current = self
            .airplane
            .get(&id)
            .ok_or_else(|| IntegrityError::row_missing(AIRPLANE, id))?;

        let candidate = AirplaneRow {
            next_destination,
            ..current.clone()
        };
        self.check_airplane(&candidate)?;

        let stored = StoredAirplane::from_row(id, &candidate);
        self.airplane.insert(id, candidate);
        Ok(stored)
    }

    /// Removes an airplane row.
    ///
    /// No table references `airplane`, so the only failure is a row that
    /// no longer exists.
    pub fn delete_airplane(&mut self, id: i64) -> Result<AirplaneRow, IntegrityError> {
        self.airplane
            .remove(&id)
            .ok_or_else(|| IntegrityError::row_missing(AIRPLANE, id))
    }

    pub fn airplane_count(&self) -> usize {
        self.airplane.len()
    }

    pub fn manufacturer_count(&self) -> usize {
        self.manufacturer.len()
    }

    pub fn model_count(&self) -> usize {
        self.airplane_model.len()
    }

    pub fn pairing_count(&self) -> usize {
        self.manufacturer_model.len()
    }

    /// Re-checks every stored row against every constraint.
    ///
    /// Used when loading tables from disk.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        if self.next_airplane_id < 1 {
            return Err(IntegrityError::check(
                AIRPLANE,
                format!("identifier sequence at {} is not positive", self.next_airplane_id),
            ));
        }
        for (make, model) in &self.manufacturer_model {
            self.check_pairing(make, model)?;
        }
        for (id, row) in &self.airplane {
            self.check_airplane(row)?;
            if *id >= self.next_airplane_id || *id <= 0 {
                return Err(IntegrityError::check(
                    AIRPLANE,
                    format!("id {} outside assigned range 1..{}", id, self.next_airplane_id),
                ));
            }
        }
        Ok(())
    }

    fn check_pairing(&self, make: &str, model: &str) -> Result<(), IntegrityError> {
        if !self.manufacturer.contains(make) {
            return Err(IntegrityError::foreign_key(
                MANUFACTURER_MODEL,
                format!("make '{}' not present in manufacturer", make),
            ));
        }
        if !self.airplane_model.contains(model) {
            return Err(IntegrityError::foreign_key(
                MANUFACTURER_MODEL,
                format!("model '{}' not present in airplane_model", model),
            ));
        }
        Ok(())
    }

    fn check_airplane(&self, row: &AirplaneRow) -> Result<(), IntegrityError> {
        if row.manufacturer.is_empty() {
            return Err(IntegrityError::not_null(AIRPLANE, "manufacturer"));
        }
        if row.model.is_empty() {
            return Err(IntegrityError::not_null(AIRPLANE, "model"));
        }

        let key = (row.manufacturer.clone(), row.model.clone());
        if !self.manufacturer_model.contains(&key) {
            return Err(IntegrityError::foreign_key(
                AIRPLANE,
                format!(
                    "({}, {}) not present in manufacturer_model",
                    row.manufacturer, row.model
                ),
            ));
        }

        if let Some(year) = row.year {
            let current_year = Utc::now().year();
            if !(MIN_YEAR..=current_year).contains(&year) {
                return Err(IntegrityError::check(
                    AIRPLANE,
                    format!("year {} outside {}..={}", year, MIN_YEAR, current_year),
                ));
            }
        }
        if let Some(capacity) = row.fuel_capacity {
            if capacity < 0 {
                return Err(IntegrityError::check(
                    AIRPLANE,
                    format!("fuel_capacity {} is negative", capacity),
                ));
            }
        }
        if let Some(destination) = &row.next_destination {
            if destination.chars().count() > MAX_DESTINATION_LEN {
                return Err(IntegrityError::check(
                    AIRPLANE,
                    format!("next_destination longer than {} characters", MAX_DESTINATION_LEN),
                ));
            }
        }
        Ok(())
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::empty()
    }
}
