//! Persistence for the registry
//!
//! Holds the `manufacturer`, `airplane_model`, `manufacturer_model` and
//! `airplane` tables and enforces their constraints on every write.
//!
//! # Design Principles
//!
//! - One call, one transaction (commit or rollback as a unit)
//! - Constraints checked on commit, even for validated input
//! - Catalog tables are written only by initialization
//! - Identifiers are never reused
//! - File-backed stores persist before acknowledging a write

mod errors;
mod gateway;
mod snapshot;
mod tables;

pub use errors::{ConstraintKind, IntegrityError, StorageError, StorageResult};
pub use gateway::{AirplaneGateway, Database};
pub use snapshot::{read_snapshot, write_snapshot};
pub use tables::{AirplaneRow, StoredAirplane, Tables};
