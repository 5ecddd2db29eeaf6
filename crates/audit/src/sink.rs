use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::AuditRecord;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to write audit log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode audit record: {0}")]
    Encode(#[from] serde_json::Error),

    /// Append failed due to internal lock poisoning.
    #[error("audit log lock poisoned")]
    Poisoned,
}

/// Append-only destination for audit records.
///
/// Implementations make one attempt per record. No stronger durability than
/// "attempted append" is assumed by callers.
pub trait AuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError>;
}

impl<S: AuditSink + ?Sized> AuditSink for &S {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        (**self).append(record)
    }
}

impl<S: AuditSink + ?Sized> AuditSink for Box<S> {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        (**self).append(record)
    }
}

impl<S: AuditSink + ?Sized> AuditSink for Arc<S> {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        (**self).append(record)
    }
}
