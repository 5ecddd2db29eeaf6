//! Where live orders are: waiting in the warehouse or out with a courier.

use std::collections::HashMap;

use serde::Serialize;

use depot_core::{ActorId, DomainError, DomainResult, OrderId};
use depot_sales::{Order, OrderStatus};

/// An order out for delivery and the courier holding it.
///
/// This is the only record of courier possession; per-courier views are
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub order: Order,
    pub courier: ActorId,
}

/// Pending and delivering orders.
///
/// Invariant: an order id is in at most one of the two maps.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    pending: HashMap<OrderId, Order>,
    delivering: HashMap<OrderId, Assignment>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, id: &OrderId) -> Option<OrderStatus> {
        if self.pending.contains_key(id) {
            Some(OrderStatus::Pending)
        } else if self.delivering.contains_key(id) {
            Some(OrderStatus::Delivering)
        } else {
            None
        }
    }

    /// Fail with `Conflict` if the id is already tracked anywhere.
    pub fn ensure_untracked(&self, id: &OrderId) -> DomainResult<()> {
        match self.status(id) {
            Some(status) => Err(DomainError::conflict(format!(
                "order {id} already exists ({status:?})"
            ))),
            None => Ok(()),
        }
    }

    /// Caller must have checked [`OrderBook::ensure_untracked`].
    pub(crate) fn insert_pending(&mut self, order: Order) {
        debug_assert!(self.status(&order.id_typed()).is_none());
        self.pending.insert(order.id_typed(), order);
    }

    pub fn pending(&self, id: &OrderId) -> Option<&Order> {
        self.pending.get(id)
    }

    pub fn delivering(&self, id: &OrderId) -> Option<&Assignment> {
        self.delivering.get(id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn delivering_len(&self) -> usize {
        self.delivering.len()
    }

    pub(crate) fn remove_pending(&mut self, id: &OrderId) -> DomainResult<Order> {
        self.pending
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("order {id} is not pending")))
    }

    /// Pending → delivering, held by `courier`.
    pub(crate) fn assign(&mut self, id: &OrderId, courier: ActorId) -> DomainResult<&Assignment> {
        let order = self.remove_pending(id)?;
        let assignment: &Assignment = self
            .delivering
            .entry(*id)
            .insert_entry(Assignment { order, courier })
            .into_mut();
        Ok(assignment)
    }

    /// Delivering → pending. Returns the assignment that was dropped.
    pub(crate) fn unassign(&mut self, id: &OrderId) -> DomainResult<Assignment> {
        let assignment = self.remove_delivering(id)?;
        self.pending.insert(*id, assignment.order.clone());
        Ok(assignment)
    }

    /// Delivering → gone.
    pub(crate) fn remove_delivering(&mut self, id: &OrderId) -> DomainResult<Assignment> {
        self.delivering
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("order {id} is not out for delivery")))
    }

    /// Orders currently held by `courier`, sorted by order id.
    pub fn held_by(&self, courier: ActorId) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .delivering
            .values()
            .filter(|a| a.courier == courier)
            .map(|a| &a.order)
            .collect();
        orders.sort_by_key(|o| o.id_typed());
        orders
    }

    pub fn pending_snapshot(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.pending.values().cloned().collect();
        orders.sort_by_key(|o| o.id_typed());
        orders
    }

    pub fn delivering_snapshot(&self) -> Vec<Assignment> {
        let mut assignments: Vec<Assignment> = self.delivering.values().cloned().collect();
        assignments.sort_by_key(|a| a.order.id_typed());
        assignments
    }
}
