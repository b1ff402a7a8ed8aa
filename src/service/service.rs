//! Record service
//!
//! Orchestrates create/read/update/delete: validate first, then hand the
//! write to the gateway and translate its outcome.

use std::sync::Arc;

use super::errors::{Operation, ServiceError, ServiceResult};
use super::types::{
    AirplaneId, AirplaneRecord, CreateAirplaneRequest, DeletionConfirmation, UpdateAirplaneRequest,
};
use crate::observability::{log_event, Event};
use crate::storage::{AirplaneGateway, AirplaneRow, StoredAirplane};
use crate::validation::AirplaneValidator;

/// Stateless request orchestrator over an injected gateway.
#[derive(Clone)]
pub struct RecordService {
    gateway: Arc<dyn AirplaneGateway>,
    validator: Option<AirplaneValidator>,
}

impl RecordService {
    /// Creates a service whose year bound follows the calendar.
    pub fn new(gateway: Arc<dyn AirplaneGateway>) -> Self {
        Self {
            gateway,
            validator: None,
        }
    }

    /// Creates a service with a fixed validator.
    pub fn with_validator(gateway: Arc<dyn AirplaneGateway>, validator: AirplaneValidator) -> Self {
        Self {
            gateway,
            validator: Some(validator),
        }
    }

    fn validator(&self) -> AirplaneValidator {
        self.validator.unwrap_or_default()
    }

    /// Validates every field, then inserts the row.
    pub fn create(&self, request: &CreateAirplaneRequest) -> ServiceResult<AirplaneRecord> {
        let valid = self
            .validator()
            .validate_airplane(request.fields())
            .map_err(|e| {
                log_event(
                    Event::AirplaneCreateRejected,
                    &[("code", e.code().code()), ("reason", e.message())],
                );
                ServiceError::from(e)
            })?;

        let row = AirplaneRow {
            manufacturer: valid.manufacturer.name().to_string(),
            model: valid.model.name().to_string(),
            year: valid.year,
            fuel_capacity: valid.fuel_capacity,
            next_destination: valid.next_destination,
        };

        let stored = self.gateway.create(row).map_err(|e| {
            log_event(Event::AirplaneCreateRejected, &[("reason", &e.to_string())]);
            ServiceError::from_storage(Operation::Create, e)
        })?;

        log_event(Event::AirplaneCreated, &[("id", &stored.id.to_string())]);
        Ok(stored.into())
    }

    pub fn read(&self, id: AirplaneId) -> ServiceResult<AirplaneRecord> {
        let stored = self.find(id)?;
        log_event(Event::AirplaneRead, &[("id", &id.to_string())]);
        Ok(stored.into())
    }

    /// Replaces the destination of an existing airplane.
    ///
    /// Only the destination is re-validated; the remaining columns were
    /// accepted when the row was created and are re-checked by storage.
    pub fn update(
        &self,
        id: AirplaneId,
        request: &UpdateAirplaneRequest,
    ) -> ServiceResult<AirplaneRecord> {
        self.find(id)?;
        let id_label = id.to_string();

        let destination = self
            .validator()
            .validate_next_destination(request.next_destination.as_deref())
            .map_err(|e| {
                log_event(
                    Event::AirplaneUpdateRejected,
                    &[("id", &id_label), ("code", e.code().code()), ("reason", e.message())],
                );
                ServiceError::from(e)
            })?;

        let stored = self
            .gateway
            .update_destination(id.get(), destination)
            .map_err(|e| {
                log_event(
                    Event::AirplaneUpdateRejected,
                    &[("id", &id_label), ("reason", &e.to_string())],
                );
                ServiceError::from_storage(Operation::Update, e)
            })?;

        log_event(Event::AirplaneUpdated, &[("id", &id_label)]);
        Ok(stored.into())
    }

    pub fn delete(&self, id: AirplaneId) -> ServiceResult<DeletionConfirmation> {
        self.find(id)?;
        let id_label = id.to_string();

        self.gateway.delete(id.get()).map_err(|e| {
            log_event(
                Event::AirplaneDeleteFailed,
                &[("id", &id_label), ("reason", &e.to_string())],
            );
            ServiceError::from_storage(Operation::Delete, e)
        })?;

        log_event(Event::AirplaneDeleted, &[("id", &id_label)]);
        Ok(DeletionConfirmation::new(id))
    }

    /// Fails with `NotFound` unless `id` names a stored airplane.
    pub fn ensure_exists(&self, id: AirplaneId) -> ServiceResult<()> {
        self.find(id).map(|_| ())
    }

    fn find(&self, id: AirplaneId) -> ServiceResult<StoredAirplane> {
        self.gateway.find_by_id(id.get()).ok_or_else(|| {
            log_event(Event::AirplaneNotFound, &[("id", &id.to_string())]);
            ServiceError::NotFound(id)
        })
    }
}
