//! The warehouse state machine.
//!
//! Every operation follows the same shape: check authorization, check state
//! preconditions, mutate, then emit exactly one audit record. Refused
//! operations mutate nothing and emit nothing.

use core::fmt::Display;

use depot_audit::{AuditAction, AuditRecord, AuditSink};
use depot_auth::{AuthorizationRegistry, Role};
use depot_core::{ActorId, ArticleId, DomainError, OrderId};
use depot_inventory::Inventory;
use depot_parties::{Actor, Courier, Employee};
use depot_products::Product;
use depot_sales::{Order, OrderStatus};

use crate::error::{WarehouseError, WarehouseResult};
use crate::orders::OrderBook;

/// Authorization sets, inventory and live orders of one warehouse.
///
/// Not synchronized: every mutating operation takes `&mut self`. Embedders
/// with concurrent callers must serialize access themselves (for example a
/// `Mutex<Warehouse<_>>`).
#[derive(Debug)]
pub struct Warehouse<S> {
    pub(crate) registry: AuthorizationRegistry,
    pub(crate) inventory: Inventory,
    pub(crate) orders: OrderBook,
    audit: S,
}

/// Map a refusal into `WarehouseError::Rejected`, logging why.
pub(crate) fn check<T, E>(op: &'static str, result: Result<T, E>) -> WarehouseResult<T>
where
    E: Into<DomainError> + Display,
{
    result.map_err(|e| {
        tracing::debug!(op, reason = %e, "operation rejected");
        WarehouseError::Rejected(e.into())
    })
}

impl<S: AuditSink> Warehouse<S> {
    pub fn new(audit: S) -> Self {
        Self {
            registry: AuthorizationRegistry::new(),
            inventory: Inventory::new(),
            orders: OrderBook::new(),
            audit,
        }
    }

    pub fn audit(&self) -> &S {
        &self.audit
    }

    pub fn into_audit(self) -> S {
        self.audit
    }

    /// Append one record. The state change it describes has already happened.
    pub(crate) fn record(&self, action: AuditAction, message: String) -> WarehouseResult<()> {
        let record = AuditRecord::new(action, message);
        self.audit.append(&record).map_err(|source| {
            tracing::warn!(%action, error = %source, "audit append failed; state change kept");
            WarehouseError::Audit { action, source }
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────

    pub fn authorize_employee(&mut self, employee: &Employee) -> WarehouseResult<()> {
        self.set_authorization(Role::Employee, employee.actor_id(), employee, true)
    }

    pub fn revoke_employee(&mut self, employee: &Employee) -> WarehouseResult<()> {
        self.set_authorization(Role::Employee, employee.actor_id(), employee, false)
    }

    pub fn authorize_courier(&mut self, courier: &Courier) -> WarehouseResult<()> {
        self.set_authorization(Role::Courier, courier.actor_id(), courier, true)
    }

    pub fn revoke_courier(&mut self, courier: &Courier) -> WarehouseResult<()> {
        self.set_authorization(Role::Courier, courier.actor_id(), courier, false)
    }

    fn set_authorization(
        &mut self,
        role: Role,
        actor: ActorId,
        who: &dyn Display,
        grant: bool,
    ) -> WarehouseResult<()> {
        let (action, verb) = match (role, grant) {
            (Role::Employee, true) => (AuditAction::EmployeeAuthorized, "granted to"),
            (Role::Employee, false) => (AuditAction::EmployeeRevoked, "withdrawn from"),
            (Role::Courier, true) => (AuditAction::CourierAuthorized, "granted to"),
            (Role::Courier, false) => (AuditAction::CourierRevoked, "withdrawn from"),
        };

        if grant {
            self.registry.grant(role, actor);
        } else {
            self.registry.revoke(role, actor);
        }
        tracing::info!(%actor, %role, grant, "authorization changed");

        self.record(action, format!("{role} authorization {verb} {who}"))
    }

    pub fn is_employee_authorized(&self, actor: ActorId) -> bool {
        self.registry.is_authorized(Role::Employee, actor)
    }

    pub fn is_courier_authorized(&self, actor: ActorId) -> bool {
        self.registry.is_authorized(Role::Courier, actor)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Inventory
    // ─────────────────────────────────────────────────────────────────────

    /// Take goods into stock.
    ///
    /// Known article: count is increased, every other field is replaced by
    /// the incoming values. Unknown article: the product becomes the line.
    pub fn receive(&mut self, employee: &Employee, product: Product) -> WarehouseResult<()> {
        check("receive", self.registry.require(Role::Employee, employee.actor_id()))?;
        let receipt = check("receive", self.inventory.receive(product))?;

        tracing::info!(
            article = %receipt.current.article_id(),
            count = receipt.current.count(),
            "product received"
        );

        let before = receipt
            .previous
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "(new line)".to_string());
        self.record(
            AuditAction::ProductReceived,
            format!(
                "product received by {employee}\nbefore:\n{before}\nafter:\n{}",
                receipt.current
            ),
        )
    }

    /// Replace an existing stock line wholesale, count included.
    ///
    /// Never creates a line; an unknown article is refused.
    pub fn update_product(&mut self, employee: &Employee, product: Product) -> WarehouseResult<()> {
        check("update_product", self.registry.require(Role::Employee, employee.actor_id()))?;
        let old = check("update_product", self.inventory.update(product.clone()))?;

        tracing::info!(article = %product.article_id(), "product information updated");

        self.record(
            AuditAction::ProductUpdated,
            format!(
                "product updated by {employee}\n\
                 old information:\n{old}\n\
                 new information:\n{product}"
            ),
        )
    }

    pub fn product(&self, article: &ArticleId) -> Option<&Product> {
        self.inventory.get(article)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_len(&self) -> usize {
        self.inventory.len()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Order lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Accept an order into the warehouse (→ pending) and take its goods out
    /// of stock.
    ///
    /// All or nothing: a duplicate id or any short line refuses the order
    /// with inventory untouched.
    pub fn create_order(&mut self, employee: &Employee, order: Order) -> WarehouseResult<()> {
        check("create_order", self.registry.require(Role::Employee, employee.actor_id()))?;

        let id = order.id_typed();
        check("create_order", self.orders.ensure_untracked(&id))?;
        let demand = check("create_order", order.demand())?;
        check("create_order", self.inventory.reserve(&demand))?;

        tracing::info!(order = %id, total = order.total_price(), "order created");
        let message = format!("order created by {employee}\n{order}");
        self.orders.insert_pending(order);

        self.record(AuditAction::OrderCreated, message)
    }

    /// Cancel a pending order (→ gone) and put its goods back into stock.
    ///
    /// Orders already out for delivery cannot be canceled.
    pub fn cancel_order(
        &mut self,
        employee: &Employee,
        id: OrderId,
        reason: &str,
    ) -> WarehouseResult<()> {
        check("cancel_order", self.registry.require(Role::Employee, employee.actor_id()))?;

        let order = match self.orders.pending(&id) {
            Some(order) => order,
            None => {
                let err = match self.orders.status(&id) {
                    Some(OrderStatus::Delivering) => {
                        DomainError::conflict(format!("order {id} is out for delivery"))
                    }
                    _ => DomainError::not_found(format!("order {id} is not pending")),
                };
                return check("cancel_order", Err(err));
            }
        };
        let demand = check("cancel_order", order.demand())?;
        check("cancel_order", self.inventory.release(&demand))?;
        let order = check("cancel_order", self.orders.remove_pending(&id))?;

        tracing::info!(order = %id, "order canceled");

        self.record(
            AuditAction::OrderCanceled,
            format!("order canceled by {employee}\n{order}\nreason: {reason}"),
        )
    }

    /// Hand a pending order to a courier (→ delivering).
    pub fn take_order(&mut self, courier: &Courier, id: OrderId) -> WarehouseResult<()> {
        check("take_order", self.registry.require(Role::Courier, courier.actor_id()))?;
        let assignment = check("take_order", self.orders.assign(&id, courier.actor_id()))?;

        tracing::info!(order = %id, courier = %courier.actor_id(), "order taken for delivery");
        let message = format!("order taken for delivery by {courier}\n{}", assignment.order);

        self.record(AuditAction::OrderTaken, message)
    }

    /// Bring a delivering order back into the warehouse (→ pending).
    ///
    /// A location change only; stock is not touched.
    pub fn return_order(
        &mut self,
        courier: &Courier,
        id: OrderId,
        reason: &str,
    ) -> WarehouseResult<()> {
        check("return_order", self.registry.require(Role::Courier, courier.actor_id()))?;
        let assignment = check("return_order", self.orders.unassign(&id))?;

        if assignment.courier != courier.actor_id() {
            tracing::warn!(
                order = %id,
                assigned = %assignment.courier,
                returned_by = %courier.actor_id(),
                "order returned by a courier other than the one holding it"
            );
        }
        tracing::info!(order = %id, "order returned to warehouse");

        self.record(
            AuditAction::OrderReturned,
            format!(
                "order returned by {courier}\n{}\nreason: {reason}",
                assignment.order
            ),
        )
    }

    /// Mark a delivering order as delivered (→ gone). No stock effect.
    pub fn deliver_order(&mut self, courier: &Courier, id: OrderId) -> WarehouseResult<()> {
        check("deliver_order", self.registry.require(Role::Courier, courier.actor_id()))?;
        let assignment = check("deliver_order", self.orders.remove_delivering(&id))?;

        if assignment.courier != courier.actor_id() {
            tracing::warn!(
                order = %id,
                assigned = %assignment.courier,
                delivered_by = %courier.actor_id(),
                "order delivered by a courier other than the one holding it"
            );
        }
        tracing::info!(order = %id, "order delivered");

        self.record(
            AuditAction::OrderDelivered,
            format!("order delivered by {courier}\n{}", assignment.order),
        )
    }

    pub fn order_status(&self, id: &OrderId) -> Option<OrderStatus> {
        self.orders.status(id)
    }

    pub fn pending_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.pending(id)
    }

    pub fn delivering_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.delivering(id).map(|a| &a.order)
    }

    pub fn assigned_courier(&self, id: &OrderId) -> Option<ActorId> {
        self.orders.delivering(id).map(|a| a.courier)
    }

    /// Orders currently in `courier`'s possession.
    pub fn courier_orders(&self, courier: ActorId) -> Vec<&Order> {
        self.orders.held_by(courier)
    }

    pub fn pending_len(&self) -> usize {
        self.orders.pending_len()
    }

    pub fn delivering_len(&self) -> usize {
        self.orders.delivering_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_audit::{AuditError, InMemoryAuditLog};
    use depot_parties::Client;
    use depot_products::Article;
    use std::cell::Cell;

    /// Sink that fails every append while `failing` is set.
    #[derive(Default)]
    struct FlakySink {
        failing: Cell<bool>,
        written: Cell<usize>,
    }

    impl AuditSink for FlakySink {
        fn append(&self, _record: &AuditRecord) -> Result<(), AuditError> {
            if self.failing.get() {
                Err(AuditError::Poisoned)
            } else {
                self.written.set(self.written.get() + 1);
                Ok(())
            }
        }
    }

    fn client() -> Client {
        Client::new("Client", "Address", "+996555555555")
    }

    fn setup() -> (Warehouse<InMemoryAuditLog>, Employee, Courier, Article) {
        let mut wh = Warehouse::new(InMemoryAuditLog::new());
        let employee = Employee::new("Employee");
        let courier = Courier::new("Courier");
        let article = Article::new("Phone", "Can call");
        wh.authorize_employee(&employee).unwrap();
        wh.authorize_courier(&courier).unwrap();
        wh.receive(&employee, Product::new(10, 200, article.clone())).unwrap();
        (wh, employee, courier, article)
    }

    #[test]
    fn each_successful_operation_writes_one_record() {
        let (mut wh, employee, courier, article) = setup();
        let order = Order::new(vec![Product::new(2, 200, article)], client()).unwrap();
        let id = order.id_typed();

        wh.create_order(&employee, order).unwrap();
        wh.take_order(&courier, id).unwrap();
        wh.deliver_order(&courier, id).unwrap();

        assert_eq!(
            wh.audit().actions(),
            vec![
                AuditAction::EmployeeAuthorized,
                AuditAction::CourierAuthorized,
                AuditAction::ProductReceived,
                AuditAction::OrderCreated,
                AuditAction::OrderTaken,
                AuditAction::OrderDelivered,
            ]
        );
    }

    #[test]
    fn refused_operations_write_nothing() {
        let (mut wh, employee, courier, article) = setup();
        let before = wh.audit().len();

        let too_many = Order::new(vec![Product::new(11, 200, article)], client()).unwrap();
        assert!(wh.create_order(&employee, too_many).is_err());
        assert!(wh.take_order(&courier, OrderId::new()).is_err());
        assert!(wh.cancel_order(&employee, OrderId::new(), "none").is_err());

        assert_eq!(wh.audit().len(), before);
    }

    #[test]
    fn audit_failure_is_reported_but_state_change_stays() {
        let mut wh = Warehouse::new(FlakySink::default());
        let employee = Employee::new("Employee");
        let article = Article::new("Phone", "Can call");
        wh.authorize_employee(&employee).unwrap();

        wh.audit().failing.set(true);
        let err = wh
            .receive(&employee, Product::new(5, 100, article.clone()))
            .unwrap_err();

        assert!(err.is_audit_failure());
        assert!(!err.is_rejection());
        assert!(matches!(
            err,
            WarehouseError::Audit {
                action: AuditAction::ProductReceived,
                ..
            }
        ));
        assert_eq!(wh.product(&article.id_typed()).unwrap().count(), 5);
    }

    #[test]
    fn refusal_is_reported_before_touching_the_sink() {
        let mut wh = Warehouse::new(FlakySink::default());
        wh.audit().failing.set(true);
        let stranger = Employee::new("Stranger");

        let err = wh
            .receive(&stranger, Product::new(5, 100, Article::new("x", "y")))
            .unwrap_err();

        assert!(err.is_rejection());
        assert_eq!(err.domain(), Some(&DomainError::Unauthorized));
        assert!(wh.inventory().is_empty());
    }

    #[test]
    fn revoke_is_audited_even_when_not_held() {
        let mut wh = Warehouse::new(InMemoryAuditLog::new());
        let courier = Courier::new("Courier");

        wh.revoke_courier(&courier).unwrap();

        assert!(!wh.is_courier_authorized(courier.actor_id()));
        let record = wh.audit().last().unwrap();
        assert_eq!(record.action, AuditAction::CourierRevoked);
        assert!(record.message.contains("courier authorization withdrawn from courier Courier"));
    }

    #[test]
    fn canceling_a_delivering_order_is_a_conflict() {
        let (mut wh, employee, courier, article) = setup();
        let order = Order::new(vec![Product::new(2, 200, article)], client()).unwrap();
        let id = order.id_typed();
        wh.create_order(&employee, order).unwrap();
        wh.take_order(&courier, id).unwrap();

        let err = wh.cancel_order(&employee, id, "too late").unwrap_err();
        assert!(err.domain().is_some_and(DomainError::is_conflict));
        assert_eq!(wh.order_status(&id), Some(OrderStatus::Delivering));
    }

    #[test]
    fn return_by_another_courier_still_moves_the_order() {
        let (mut wh, employee, courier, article) = setup();
        let other = Courier::new("Other");
        wh.authorize_courier(&other).unwrap();
        let order = Order::new(vec![Product::new(1, 200, article)], client()).unwrap();
        let id = order.id_typed();
        wh.create_order(&employee, order).unwrap();
        wh.take_order(&courier, id).unwrap();

        wh.return_order(&other, id, "handed over").unwrap();

        assert_eq!(wh.order_status(&id), Some(OrderStatus::Pending));
        assert!(wh.courier_orders(courier.actor_id()).is_empty());
        assert!(wh.courier_orders(other.actor_id()).is_empty());
    }
}
