//! Persistence gateway
//!
//! Each mutating call is one transaction: the tables are cloned, the change
//! is applied and constraint-checked on the clone, the clone is persisted
//! (when file-backed) and only then swapped in. Any failure drops the clone,
//! which is the rollback.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::errors::{IntegrityError, StorageError, StorageResult};
use super::snapshot::{read_snapshot, write_snapshot};
use super::tables::{AirplaneRow, StoredAirplane, Tables};
use crate::observability::{log_event, Event};

/// Durable storage of airplane rows.
///
/// Implementations enforce every table constraint and apply each call
/// atomically.
pub trait AirplaneGateway: Send + Sync {
    /// Inserts a row under a fresh identifier.
    fn create(&self, row: AirplaneRow) -> StorageResult<StoredAirplane>;

    /// Looks up a row by identifier.
    fn find_by_id(&self, id: i64) -> Option<StoredAirplane>;

    /// Replaces the `next_destination` column of an existing row.
    fn update_destination(
        &self,
        id: i64,
        next_destination: Option<String>,
    ) -> StorageResult<StoredAirplane>;

    /// Removes a row.
    fn delete(&self, id: i64) -> StorageResult<()>;
}

/// Table store, optionally backed by a snapshot file.
pub struct Database {
    tables: Mutex<Tables>,
    path: Option<PathBuf>,
}

impl Database {
    /// Creates an in-memory store with an empty, unseeded schema.
    pub fn in_memory() -> Self {
        Self {
            tables: Mutex::new(Tables::empty()),
            path: None,
        }
    }

    /// Creates an in-memory store with seeded catalogs.
    pub fn in_memory_seeded() -> StorageResult<Self> {
        let db = Self::in_memory();
        db.initialize()?;
        Ok(db)
    }

    /// Opens the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the file does not exist, `Corruption` if it
    /// cannot be trusted.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let tables = read_snapshot(&path)?;
        log_event(
            Event::DatabaseOpened,
            &[
                ("path", &path.display().to_string()),
                ("airplanes", &tables.airplane_count().to_string()),
            ],
        );
        Ok(Self {
            tables: Mutex::new(tables),
            path: Some(path),
        })
    }

    /// Creates a fresh, seeded database at `path`, replacing any existing one.
    pub fn initialize_at(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::io(format!("failed to create {}", parent.display()), e)
            })?;
        }
        let db = Self {
            tables: Mutex::new(Tables::empty()),
            path: Some(path),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Drops every table, recreates the schema and seeds the catalogs.
    pub fn initialize(&self) -> StorageResult<()> {
        let mut guard = self.lock();
        let mut fresh = Tables::empty();
        fresh.seed_catalogs()?;
        self.persist(&fresh)?;
        *guard = fresh;
        drop(guard);

        log_event(Event::DatabaseInitialized, &[("path", &self.path_label())]);
        Ok(())
    }

    /// Number of committed airplane rows.
    pub fn airplane_count(&self) -> usize {
        self.lock().airplane_count()
    }

    /// Copy of the committed tables.
    pub fn tables(&self) -> Tables {
        self.lock().clone()
    }

    /// Runs `apply` as a single transaction.
    fn transaction<T>(
        &self,
        operation: &'static str,
        apply: impl FnOnce(&mut Tables) -> Result<T, IntegrityError>,
    ) -> StorageResult<T> {
        let mut guard = self.lock();
        let mut working = guard.clone();

        let result = apply(&mut working)
            .map_err(StorageError::from)
            .and_then(|value| self.persist(&working).map(|_| value));

        match result {
            Ok(value) => {
                *guard = working;
                Ok(value)
            }
            Err(e) => {
                log_event(
                    Event::TransactionRolledBack,
                    &[("operation", operation), ("reason", &e.to_string())],
                );
                Err(e)
            }
        }
    }

    fn persist(&self, tables: &Tables) -> StorageResult<()> {
        match &self.path {
            Some(path) => write_snapshot(path, tables),
            None => Ok(()),
        }
    }

    /// Committed state is only ever replaced by a fully checked clone, so a
    /// poisoned guard still holds consistent tables.
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn path_label(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ":memory:".to_string())
    }
}

impl AirplaneGateway for Database {
    fn create(&self, row: AirplaneRow) -> StorageResult<StoredAirplane> {
        self.transaction("create", |tables| tables.insert_airplane(row))
    }

    fn find_by_id(&self, id: i64) -> Option<StoredAirplane> {
        self.lock().airplane(id)
    }

    fn update_destination(
        &self,
        id: i64,
        next_destination: Option<String>,
    ) -> StorageResult<StoredAirplane> {
        self.transaction("update_destination", |tables| {
            tables.set_destination(id, next_destination)
        })
    }

    fn delete(&self, id: i64) -> StorageResult<()> {
        self.transaction("delete", |tables| tables.delete_airplane(id).map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ConstraintKind;
    use tempfile::TempDir;

    fn row(manufacturer: &str, model: &str) -> AirplaneRow {
        AirplaneRow {
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            year: None,
            fuel_capacity: None,
            next_destination: None,
        }
    }

    #[test]
    fn test_rejected_create_leaves_no_row() {
        let db = Database::in_memory_seeded().unwrap();
        let err = db.create(row("Boeing", "A330")).unwrap_err();
        assert_eq!(err.as_integrity().map(|e| e.kind()), Some(ConstraintKind::ForeignKey));
        assert_eq!(db.airplane_count(), 0);
    }

    #[test]
    fn test_failed_write_does_not_consume_identifier() {
        let db = Database::in_memory_seeded().unwrap();
        db.create(row("Boeing", "A330")).unwrap_err();
        let stored = db.create(row("Airbus", "A330")).unwrap();
        assert_eq!(stored.id, 1);
    }

    #[test]
    fn test_update_and_delete() {
        let db = Database::in_memory_seeded().unwrap();
        let stored = db.create(row("Boeing", "777")).unwrap();

        let updated = db.update_destination(stored.id, Some("Athens".into())).unwrap();
        assert_eq!(db.find_by_id(stored.id), Some(updated));

        db.delete(stored.id).unwrap();
        assert!(db.find_by_id(stored.id).is_none());

        let err = db.delete(stored.id).unwrap_err();
        assert_eq!(err.as_integrity().map(|e| e.kind()), Some(ConstraintKind::RowMissing));
    }

    #[test]
    fn test_file_backed_commits_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("instance").join("db.json");

        let db = Database::initialize_at(&path).unwrap();
        let stored = db.create(row("Airbus", "A220")).unwrap();
        db.create(row("Boeing", "A220")).unwrap_err();
        drop(db);

        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.airplane_count(), 1);
        assert_eq!(reopened.find_by_id(stored.id), Some(stored));
    }

    #[test]
    fn test_open_requires_initialization() {
        let tmp = TempDir::new().unwrap();
        let err = Database::open(tmp.path().join("db.json")).err().unwrap();
        assert!(matches!(err, StorageError::NotInitialized(_)));
    }

    #[test]
    fn test_initialize_drops_existing_rows() {
        let db = Database::in_memory_seeded().unwrap();
        db.create(row("Airbus", "A220")).unwrap();
        db.initialize().unwrap();
        assert_eq!(db.airplane_count(), 0);
        assert_eq!(db.tables().pairing_count(), 6);
    }
}
