//! Observable events
//!
//! Every event carries a fixed severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Schema recreated and catalogs seeded
    DatabaseInitialized,
    /// Snapshot loaded from disk
    DatabaseOpened,
    /// HTTP listener bound
    ServerListening,

    // Airplane records
    /// Airplane row committed
    AirplaneCreated,
    /// Create rejected by validation or integrity check
    AirplaneCreateRejected,
    /// Airplane row read
    AirplaneRead,
    /// Destination committed
    AirplaneUpdated,
    /// Update rejected by validation or integrity check
    AirplaneUpdateRejected,
    /// Airplane row removed
    AirplaneDeleted,
    /// Delete failed unexpectedly
    AirplaneDeleteFailed,
    /// Identifier did not resolve to a row
    AirplaneNotFound,
    /// Identifier was not a positive integer
    InvalidIdentifier,

    // Storage
    /// In-flight write discarded
    TransactionRolledBack,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatabaseInitialized => "DATABASE_INITIALIZED",
            Event::DatabaseOpened => "DATABASE_OPENED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::AirplaneCreated => "AIRPLANE_CREATED",
            Event::AirplaneCreateRejected => "AIRPLANE_CREATE_REJECTED",
            Event::AirplaneRead => "AIRPLANE_READ",
            Event::AirplaneUpdated => "AIRPLANE_UPDATED",
            Event::AirplaneUpdateRejected => "AIRPLANE_UPDATE_REJECTED",
            Event::AirplaneDeleted => "AIRPLANE_DELETED",
            Event::AirplaneDeleteFailed => "AIRPLANE_DELETE_FAILED",
            Event::AirplaneNotFound => "AIRPLANE_NOT_FOUND",
            Event::InvalidIdentifier => "INVALID_IDENTIFIER",
            Event::TransactionRolledBack => "TRANSACTION_ROLLED_BACK",
        }
    }

    /// Returns the severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::BootStart
            | Event::ConfigLoaded
            | Event::DatabaseInitialized
            | Event::DatabaseOpened
            | Event::ServerListening => Severity::Info,

            Event::AirplaneCreated
            | Event::AirplaneRead
            | Event::AirplaneUpdated
            | Event::AirplaneDeleted
            | Event::AirplaneNotFound => Severity::Debug,

            Event::AirplaneCreateRejected
            | Event::AirplaneUpdateRejected
            | Event::InvalidIdentifier
            | Event::TransactionRolledBack => Severity::Warn,

            Event::AirplaneDeleteFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
