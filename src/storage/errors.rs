//! Storage error types
//!
//! Error codes:
//! - INTEGRITY_VIOLATION (REJECT) - a write would break a table constraint
//! - STORAGE_IO_ERROR (ERROR)
//! - DATA_CORRUPTION (FATAL) - snapshot failed checksum or constraint replay
//! - NOT_INITIALIZED (FATAL) - no snapshot exists yet
//!
//! Every failed write is rolled back before the error is returned.

use std::fmt;
use std::io;

use thiserror::Error;

/// The table constraint a write would have violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Duplicate primary key
    PrimaryKey,
    /// Missing referenced row
    ForeignKey,
    /// Required column absent
    NotNull,
    /// Column value outside its CHECK bounds
    Check,
    /// Target row vanished before the write
    RowMissing,
}

impl ConstraintKind {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "PRIMARY_KEY",
            ConstraintKind::ForeignKey => "FOREIGN_KEY",
            ConstraintKind::NotNull => "NOT_NULL",
            ConstraintKind::Check => "CHECK",
            ConstraintKind::RowMissing => "ROW_MISSING",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A constraint violation raised by the tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} constraint failed on {table}: {message}")]
pub struct IntegrityError {
    kind: ConstraintKind,
    table: &'static str,
    message: String,
}

impl IntegrityError {
    pub fn new(kind: ConstraintKind, table: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            table,
            message: message.into(),
        }
    }

    pub fn primary_key(table: &'static str, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::PrimaryKey, table, message)
    }

    pub fn foreign_key(table: &'static str, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::ForeignKey, table, message)
    }

    pub fn not_null(table: &'static str, column: &str) -> Self {
        Self::new(ConstraintKind::NotNull, table, format!("{}.{} may not be null", table, column))
    }

    pub fn check(table: &'static str, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Check, table, message)
    }

    pub fn row_missing(table: &'static str, id: i64) -> Self {
        Self::new(ConstraintKind::RowMissing, table, format!("row {} does not exist", id))
    }

    /// Returns the violated constraint kind
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Returns the table the constraint belongs to
    pub fn table(&self) -> &'static str {
        self.table
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Write rejected by a table constraint
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Snapshot file could not be read or written
    #[error("storage I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Snapshot exists but cannot be trusted
    #[error("data corruption: {0}")]
    Corruption(String),

    /// No snapshot exists at the configured path
    #[error("database not initialized at {0}, run `init-db` first")]
    NotInitialized(String),
}

impl StorageError {
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Integrity(_) => "INTEGRITY_VIOLATION",
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Corruption(_) => "DATA_CORRUPTION",
            StorageError::NotInitialized(_) => "NOT_INITIALIZED",
        }
    }

    /// Returns the integrity violation, if this is one
    pub fn as_integrity(&self) -> Option<&IntegrityError> {
        match self {
            StorageError::Integrity(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the process cannot continue serving from this store
    pub fn is_fatal(&self) -> bool {
        matches!(self, StorageError::Corruption(_) | StorageError::NotInitialized(_))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
