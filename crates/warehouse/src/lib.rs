//! `depot-warehouse` — authorization-gated bookkeeping for one warehouse.
//!
//! Orders move `pending → delivering → (delivered)` with `delivering →
//! pending` on return and `pending → (canceled)` on cancel. Every successful
//! operation writes one audit record through the injected
//! [`depot_audit::AuditSink`].

pub mod error;
pub mod orders;
pub mod report;
pub mod warehouse;

pub use error::{WarehouseError, WarehouseResult};
pub use orders::{Assignment, OrderBook};
pub use warehouse::Warehouse;
