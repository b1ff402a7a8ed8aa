//! Record service outcomes
//!
//! | Error               | Outcome                                  |
//! |---------------------|------------------------------------------|
//! | Validation          | client error                             |
//! | Integrity           | client error (create/update), internal (delete) |
//! | NotFound            | not found                                |
//! | InvalidIdentifier   | client error                             |
//! | Storage             | internal error                           |

use thiserror::Error;

use super::types::AirplaneId;
use crate::storage::{IntegrityError, StorageError};
use crate::validation::ValidationError;

/// The request-level write an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(&self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
        }
    }
}

/// How a failure is surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    ClientError,
    NotFound,
    InternalError,
}

/// Record service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A field value was rejected before any write
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Storage rejected the write and rolled it back
    #[error("Airplane could not be {}: {source}", .operation.past_tense())]
    Integrity {
        operation: Operation,
        #[source]
        source: IntegrityError,
    },

    /// Identifier does not resolve to a row
    #[error("Airplane with id = {0} doesn't exist")]
    NotFound(AirplaneId),

    /// Identifier is not a positive integer
    #[error("Id should be a positive integer, got '{0}'")]
    InvalidIdentifier(String),

    /// Storage failed for a reason other than a constraint
    #[error(transparent)]
    Storage(StorageError),
}

impl ServiceError {
    /// Splits a storage error into integrity and non-integrity failures.
    pub fn from_storage(operation: Operation, error: StorageError) -> Self {
        match error {
            StorageError::Integrity(source) => ServiceError::Integrity { operation, source },
            other => ServiceError::Storage(other),
        }
    }

    /// Returns how the failure is surfaced
    pub fn outcome(&self) -> OutcomeKind {
        match self {
            ServiceError::Validation(_) | ServiceError::InvalidIdentifier(_) => {
                OutcomeKind::ClientError
            }
            ServiceError::Integrity { operation, .. } => match operation {
                Operation::Delete => OutcomeKind::InternalError,
                _ => OutcomeKind::ClientError,
            },
            ServiceError::NotFound(_) => OutcomeKind::NotFound,
            ServiceError::Storage(_) => OutcomeKind::InternalError,
        }
    }

    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(e) => e.code().code(),
            ServiceError::Integrity { .. } => "INTEGRITY_VIOLATION",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            ServiceError::Storage(e) => e.code(),
        }
    }
}

/// Result type for record service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn integrity(operation: Operation) -> ServiceError {
        ServiceError::from_storage(
            operation,
            StorageError::from(IntegrityError::row_missing("airplane", 1)),
        )
    }

    #[test]
    fn test_integrity_outcome_depends_on_operation() {
        assert_eq!(integrity(Operation::Create).outcome(), OutcomeKind::ClientError);
        assert_eq!(integrity(Operation::Update).outcome(), OutcomeKind::ClientError);
        assert_eq!(integrity(Operation::Delete).outcome(), OutcomeKind::InternalError);
    }

    #[test]
    fn test_non_integrity_storage_is_internal() {
        let err = ServiceError::from_storage(
            Operation::Create,
            StorageError::Corruption("checksum".into()),
        );
        assert!(matches!(err, ServiceError::Storage(_)));
        assert_eq!(err.outcome(), OutcomeKind::InternalError);
        assert_eq!(err.code(), "DATA_CORRUPTION");
    }

    #[test]
    fn test_messages() {
        let id = AirplaneId::new(4).unwrap();
        assert_eq!(ServiceError::NotFound(id).to_string(), "Airplane with id = 4 doesn't exist");
        assert!(integrity(Operation::Update).to_string().starts_with("Airplane could not be updated"));
        assert!(integrity(Operation::Delete).to_string().starts_with("Airplane could not be deleted"));
        assert_eq!(ServiceError::NotFound(id).outcome(), OutcomeKind::NotFound);
    }
}
