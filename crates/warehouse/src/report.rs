//! Read-and-audit operations: dump a collection into the audit trail.
//!
//! Reports never mutate state. A refused report emits nothing.

use core::fmt::Display;

use depot_audit::{AuditAction, AuditSink};
use depot_auth::Role;
use depot_parties::{Actor, Employee};
use depot_products::Product;
use depot_sales::Order;

use crate::error::WarehouseResult;
use crate::orders::Assignment;
use crate::warehouse::{Warehouse, check};

const ENTRY_SEPARATOR: &str = "+++++++++++++++++";

fn dump<T: Display>(header: String, label: &str, items: impl IntoIterator<Item = T>) -> String {
    let mut out = header;
    let mut count = 0usize;
    for item in items {
        count += 1;
        out.push_str(&format!("\n\n{label}:\n{item}\n{ENTRY_SEPARATOR}"));
    }
    out.push_str(&format!("\n\ntotal: {count}"));
    out
}

impl<S: AuditSink> Warehouse<S> {
    /// Dump every stock line. Employees only.
    pub fn list_inventory(&self, employee: &Employee) -> WarehouseResult<Vec<Product>> {
        check("list_inventory", self.registry.require(Role::Employee, employee.actor_id()))?;

        let lines = self.inventory.snapshot();
        let message = dump(format!("inventory requested by {employee}"), "product", &lines);
        self.record(AuditAction::InventoryListed, message)?;
        Ok(lines)
    }

    /// Dump every pending order. Employees and couriers.
    pub fn list_pending_orders<A>(&self, actor: &A) -> WarehouseResult<Vec<Order>>
    where
        A: Actor + Display,
    {
        check(
            "list_pending_orders",
            self.registry
                .require_any(&[Role::Employee, Role::Courier], actor.actor_id()),
        )?;

        let orders = self.orders.pending_snapshot();
        let message = dump(format!("pending orders requested by {actor}"), "order", &orders);
        self.record(AuditAction::PendingOrdersListed, message)?;
        Ok(orders)
    }

    /// Dump every order out for delivery with its courier. Employees only.
    pub fn list_delivering_orders(&self, employee: &Employee) -> WarehouseResult<Vec<Assignment>> {
        check(
            "list_delivering_orders",
            self.registry.require(Role::Employee, employee.actor_id()),
        )?;

        let assignments = self.orders.delivering_snapshot();
        let message = dump(
            format!("delivering orders requested by {employee}"),
            "order",
            assignments
                .iter()
                .map(|a| format!("{}\nheld by courier: {}", a.order, a.courier)),
        );
        self.record(AuditAction::DeliveringOrdersListed, message)?;
        Ok(assignments)
    }
}
