//! Reference data for the airplane registry
//!
//! The manufacturer and model catalogs are closed sets. The pairing relation
//! restricts which model names may appear under which manufacturer, e.g. the
//! A220 is only ever built by Airbus.
//!
//! Catalog values are compared exactly: `"airbus"` is not `"Airbus"`.
//!
//! The storage layer seeds its `manufacturer`, `airplane_model` and
//! `manufacturer_model` tables from [`seed_rows`] once during
//! initialization; nothing mutates them afterwards.

mod types;

pub use types::{AirplaneModel, Manufacturer};

/// Returns true if `name` is a member of the manufacturer catalog.
pub fn is_valid_manufacturer(name: &str) -> bool {
    Manufacturer::from_name(name).is_some()
}

/// Returns true if `name` is a member of the model catalog.
pub fn is_valid_model(name: &str) -> bool {
    AirplaneModel::from_name(name).is_some()
}

/// Returns true if (`manufacturer`, `model`) is an entry of the pairing relation.
pub fn is_valid_pairing(manufacturer: &str, model: &str) -> bool {
    match (Manufacturer::from_name(manufacturer), AirplaneModel::from_name(model)) {
        (Some(make), Some(model)) => model.manufacturer() == make,
        _ => false,
    }
}

/// All entries of the pairing relation, in catalog order.
pub fn pairings() -> impl Iterator<Item = (Manufacturer, AirplaneModel)> {
    AirplaneModel::ALL.iter().map(|model| (model.manufacturer(), *model))
}

/// Rows used to seed the three catalog tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRows {
    pub manufacturers: Vec<&'static str>,
    pub models: Vec<&'static str>,
    pub pairings: Vec<(&'static str, &'static str)>,
}

/// Returns the seeding rows for an empty schema.
pub fn seed_rows() -> SeedRows {
    SeedRows {
        manufacturers: Manufacturer::ALL.iter().map(|m| m.name()).collect(),
        models: AirplaneModel::ALL.iter().map(|m| m.name()).collect(),
        pairings: pairings().map(|(make, model)| (make.name(), model.name())).collect(),
    }
}
