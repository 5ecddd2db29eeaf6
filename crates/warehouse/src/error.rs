use thiserror::Error;

use depot_audit::{AuditAction, AuditError};
use depot_core::DomainError;

pub type WarehouseResult<T> = Result<T, WarehouseError>;

/// Failure of a warehouse operation.
///
/// `Rejected` means the operation was refused and nothing changed. `Audit`
/// means the state change was applied but its audit record could not be
/// written; it is a warning about the log, not about the operation.
///
/// Callers that only need the pass/fail flag use `result.is_ok()`.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error("{action} was applied but its audit record was not written: {source}")]
    Audit {
        action: AuditAction,
        #[source]
        source: AuditError,
    },
}

impl WarehouseError {
    /// Refused by a domain rule; no state was touched.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn is_audit_failure(&self) -> bool {
        matches!(self, Self::Audit { .. })
    }

    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Audit { .. } => None,
        }
    }
}
