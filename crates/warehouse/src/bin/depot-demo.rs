//! Scripted walk through a day at the warehouse, written to the configured
//! audit log. Takes no arguments; see `DEPOT_AUDIT_LOG` / `DEPOT_AUDIT_FORMAT`.

use anyhow::Context;

use depot_audit::{AuditConfig, FileAuditLog};
use depot_parties::{Client, Courier, Employee};
use depot_products::{Article, Product};
use depot_sales::Order;
use depot_warehouse::Warehouse;

fn main() -> anyhow::Result<()> {
    depot_observability::init();

    let config = AuditConfig::from_env();
    tracing::info!(path = %config.path.display(), format = ?config.format, "audit log configured");
    let mut wh = Warehouse::new(FileAuditLog::from_config(&config));

    let employee = Employee::new("Employee");
    let courier = Courier::new("Courier");
    let phone = Article::new("Phone", "Can call");
    let tv = Article::new("TV", "Can broadcast TV");
    let client = Client::new("Client", "Address", "+996555555555");

    wh.authorize_employee(&employee)?;
    wh.authorize_courier(&courier)?;
    wh.receive(&employee, Product::new(100, 200, phone.clone()))?;
    wh.receive(&employee, Product::new(1000, 500, tv.clone()))?;

    let order = Order::new(
        vec![Product::new(3, 200, phone.clone()), Product::new(2, 500, tv.clone())],
        client.clone(),
    )?;
    let id = order.id_typed();
    tracing::info!(order = %id, total = order.total_price(), "placing order");
    wh.create_order(&employee, order)?;

    wh.take_order(&courier, id)?;
    wh.return_order(&courier, id, "client not at home")?;
    wh.take_order(&courier, id)?;
    wh.list_delivering_orders(&employee)?;
    wh.deliver_order(&courier, id)?;

    let second = Order::new(vec![Product::new(10, 200, phone.clone())], client)?;
    let second_id = second.id_typed();
    wh.create_order(&employee, second)?;
    wh.list_pending_orders(&courier)?;
    wh.cancel_order(&employee, second_id, "client changed their mind")?;

    let lines = wh.list_inventory(&employee)?;
    for line in &lines {
        tracing::info!(
            article = %line.article_id(),
            name = line.article().name(),
            count = line.count(),
            "stock on hand"
        );
    }

    let phones = wh
        .product(&phone.id_typed())
        .context("phone line missing after demo run")?;
    tracing::info!(phones = phones.count(), "demo finished");
    Ok(())
}
