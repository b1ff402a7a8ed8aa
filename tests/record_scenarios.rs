//! Record Service Scenario Tests
//!
//! End-to-end behavior of create/read/update/delete over a seeded store:
//! - Valid records round-trip unchanged
//! - Invalid pairings never reach storage
//! - Destination updates touch nothing else
//! - Deleted and unknown identifiers are not found

use std::collections::BTreeSet;
use std::sync::Arc;

use airplane_registry::service::{
    AirplaneId, CreateAirplaneRequest, OutcomeKind, RecordService, ServiceError,
    UpdateAirplaneRequest,
};
use airplane_registry::storage::Database;
use airplane_registry::validation::{AirplaneValidator, ValidationErrorCode};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (Arc<Database>, RecordService) {
    let db = Arc::new(Database::in_memory_seeded().unwrap());
    let service =
        RecordService::with_validator(db.clone(), AirplaneValidator::with_current_year(2026));
    (db, service)
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn scenario_a_request() -> CreateAirplaneRequest {
    CreateAirplaneRequest {
        manufacturer: text("Airbus"),
        model: text("A220"),
        year: text("2015"),
        fuel_capacity: text("200000"),
        next_destination: text("Rome"),
    }
}

fn id(raw: i64) -> AirplaneId {
    AirplaneId::new(raw).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Scenario A: a valid create echoes every field under a new id.
#[test]
fn test_scenario_a_create() {
    let (_db, service) = setup();
    let record = service.create(&scenario_a_request()).unwrap();

    assert!(record.id > 0);
    assert_eq!(record.manufacturer, "Airbus");
    assert_eq!(record.model, "A220");
    assert_eq!(record.year, Some(2015));
    assert_eq!(record.fuel_capacity, Some(200000));
    assert_eq!(record.next_destination.as_deref(), Some("Rome"));
}

/// Scenario B: Boeing does not build the A220, nothing is stored.
#[test]
fn test_scenario_b_invalid_pairing() {
    let (db, service) = setup();
    let request = CreateAirplaneRequest {
        manufacturer: text("Boeing"),
        model: text("A220"),
        ..Default::default()
    };

    let err = service.create(&request).unwrap_err();
    assert_eq!(err.outcome(), OutcomeKind::ClientError);
    match err {
        ServiceError::Validation(e) => assert_eq!(e.code(), ValidationErrorCode::InvalidPairing),
        other => panic!("expected pairing failure, got {:?}", other),
    }
    assert_eq!(db.airplane_count(), 0);
}

/// Scenario C: updating the destination leaves other fields untouched.
#[test]
fn test_scenario_c_update_destination() {
    let (_db, service) = setup();
    let created = service.create(&scenario_a_request()).unwrap();
    let created_id = id(created.id);

    let updated = service
        .update(created_id, &UpdateAirplaneRequest { next_destination: text("Athens") })
        .unwrap();
    assert_eq!(updated.next_destination.as_deref(), Some("Athens"));

    let read = service.read(created_id).unwrap();
    assert_eq!(read, updated);
    assert_eq!(read.manufacturer, created.manufacturer);
    assert_eq!(read.model, created.model);
    assert_eq!(read.year, created.year);
    assert_eq!(read.fuel_capacity, created.fuel_capacity);
}

/// Scenario D: a deleted id is no longer found.
#[test]
fn test_scenario_d_delete() {
    let (db, service) = setup();
    let created = service.create(&scenario_a_request()).unwrap();

    let confirmation = service.delete(id(created.id)).unwrap();
    assert_eq!(confirmation.id, created.id);
    assert!(confirmation.msg.contains(&created.id.to_string()));

    assert!(matches!(service.read(id(created.id)), Err(ServiceError::NotFound(_))));
    assert_eq!(db.airplane_count(), 0);
}

/// Scenario E: read, update and delete on a never-created id.
#[test]
fn test_scenario_e_unknown_identifier() {
    let (_db, service) = setup();
    let unknown = id(999);

    for err in [
        service.read(unknown).unwrap_err(),
        service
            .update(unknown, &UpdateAirplaneRequest { next_destination: text("Oslo") })
            .unwrap_err(),
        service.delete(unknown).unwrap_err(),
    ] {
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.outcome(), OutcomeKind::NotFound);
    }
}

// =============================================================================
// Properties
// =============================================================================

/// Reading twice without an update returns identical records.
#[test]
fn test_read_is_idempotent() {
    let (_db, service) = setup();
    let created = service.create(&scenario_a_request()).unwrap();
    let first = service.read(id(created.id)).unwrap();
    let second = service.read(id(created.id)).unwrap();
    assert_eq!(first, second);
}

/// Create then read yields a record equal in all fields.
#[test]
fn test_create_read_round_trip() {
    let (_db, service) = setup();
    let requests = [
        scenario_a_request(),
        CreateAirplaneRequest {
            manufacturer: text("Boeing"),
            model: text("747-8"),
            year: text("1900"),
            ..Default::default()
        },
        CreateAirplaneRequest {
            manufacturer: text("Airbus"),
            model: text("A350"),
            fuel_capacity: text("0"),
            next_destination: text(""),
            ..Default::default()
        },
    ];

    for request in &requests {
        let created = service.create(request).unwrap();
        assert_eq!(service.read(id(created.id)).unwrap(), created);
    }
}

/// Each create gets a distinct identifier.
#[test]
fn test_identifiers_are_unique() {
    let (_db, service) = setup();
    let ids: BTreeSet<i64> = (0..5)
        .map(|_| service.create(&scenario_a_request()).unwrap().id)
        .collect();
    assert_eq!(ids.len(), 5);
}

/// Rejected field values never create a row.
#[test]
fn test_rejected_creates_store_nothing() {
    let (db, service) = setup();
    let bad = [
        CreateAirplaneRequest { year: text("18x0"), ..scenario_a_request() },
        CreateAirplaneRequest { year: text("3000"), ..scenario_a_request() },
        CreateAirplaneRequest { fuel_capacity: text("-5"), ..scenario_a_request() },
        CreateAirplaneRequest { next_destination: Some("z".repeat(86)), ..scenario_a_request() },
        CreateAirplaneRequest { manufacturer: None, ..scenario_a_request() },
    ];
    for request in &bad {
        let err = service.create(request).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "{:?}", request);
    }
    assert_eq!(db.airplane_count(), 0);
}

/// An update rejected by validation leaves the stored row unchanged.
#[test]
fn test_rejected_update_keeps_row() {
    let (_db, service) = setup();
    let created = service.create(&scenario_a_request()).unwrap();
    let err = service
        .update(id(created.id), &UpdateAirplaneRequest { next_destination: Some("q".repeat(120)) })
        .unwrap_err();
    assert_eq!(err.outcome(), OutcomeKind::ClientError);
    assert_eq!(service.read(id(created.id)).unwrap(), created);
}
