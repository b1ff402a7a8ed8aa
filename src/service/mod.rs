//! Record service for airplanes
//!
//! The only entry point for reading and mutating airplane rows. Holds an
//! explicit gateway reference passed at construction; no global state.

mod errors;
mod service;
mod types;

pub use errors::{Operation, OutcomeKind, ServiceError, ServiceResult};
pub use service::RecordService;
pub use types::{
    AirplaneId, AirplaneRecord, CreateAirplaneRequest, DeletionConfirmation, UpdateAirplaneRequest,
};
