//! In-memory audit log for tests/dev.

use std::sync::RwLock;

use crate::{AuditAction, AuditError, AuditRecord, AuditSink};

/// In-memory append-only audit log.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    records: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything appended so far, oldest first.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn actions(&self) -> Vec<AuditAction> {
        self.records
            .read()
            .map(|r| r.iter().map(|rec| rec.action).collect())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<AuditRecord> {
        self.records.read().ok().and_then(|r| r.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for InMemoryAuditLog {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut records = self.records.write().map_err(|_| AuditError::Poisoned)?;
        records.push(record.clone());
        Ok(())
    }
}
