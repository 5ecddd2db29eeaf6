//! `depot-audit` — append-only audit trail for warehouse operations.
//!
//! The warehouse emits one [`AuditRecord`] per successful operation through an
//! injected [`AuditSink`]. Sinks only promise an attempted append; a failed
//! append is reported back to the caller and never undoes the operation.

pub mod config;
pub mod file;
pub mod memory;
pub mod record;
pub mod sink;

pub use config::{AuditConfig, AuditFormat};
pub use file::FileAuditLog;
pub use memory::InMemoryAuditLog;
pub use record::{AuditAction, AuditRecord};
pub use sink::{AuditError, AuditSink};
