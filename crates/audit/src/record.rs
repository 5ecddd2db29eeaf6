use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which warehouse operation produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    EmployeeAuthorized,
    EmployeeRevoked,
    CourierAuthorized,
    CourierRevoked,
    ProductReceived,
    ProductUpdated,
    OrderCreated,
    OrderCanceled,
    OrderTaken,
    OrderReturned,
    OrderDelivered,
    InventoryListed,
    PendingOrdersListed,
    DeliveringOrdersListed,
}

impl AuditAction {
    /// Stable dotted name (e.g. "warehouse.order.created").
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::EmployeeAuthorized => "warehouse.employee.authorized",
            AuditAction::EmployeeRevoked => "warehouse.employee.revoked",
            AuditAction::CourierAuthorized => "warehouse.courier.authorized",
            AuditAction::CourierRevoked => "warehouse.courier.revoked",
            AuditAction::ProductReceived => "warehouse.product.received",
            AuditAction::ProductUpdated => "warehouse.product.updated",
            AuditAction::OrderCreated => "warehouse.order.created",
            AuditAction::OrderCanceled => "warehouse.order.canceled",
            AuditAction::OrderTaken => "warehouse.order.taken",
            AuditAction::OrderReturned => "warehouse.order.returned",
            AuditAction::OrderDelivered => "warehouse.order.delivered",
            AuditAction::InventoryListed => "warehouse.report.inventory",
            AuditAction::PendingOrdersListed => "warehouse.report.pending_orders",
            AuditAction::DeliveringOrdersListed => "warehouse.report.delivering_orders",
        }
    }
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One append-only audit entry: free text plus the time it was produced.
///
/// Records are facts; nothing edits them after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub action: AuditAction,
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Stamp a record with the current time.
    pub fn new(action: AuditAction, message: impl Into<String>) -> Self {
        Self::at(action, message, Utc::now())
    }

    pub fn at(action: AuditAction, message: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            action,
            message: message.into(),
            recorded_at,
        }
    }
}
