use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult, Invoice};
use crate::error::{KyrelError, Result};
use crate::ids::IdNamespace;
use crate::ledger;
use crate::model::{MovementKind, Sale};
use crate::store::DataStore;

use super::helpers::{load_document, require_positive, require_product, require_text};

/// Register a sale: decrement stock, bump the employee's sale count and log a
/// `Sale` movement, all in one save.
pub fn run<S: DataStore>(
    store: &mut S,
    customer: &str,
    employee_badge: &str,
    product_id: u64,
    quantity: u32,
    date: NaiveDate,
) -> Result<CmdResult> {
    let customer = require_text(customer, "Customer name")?;
    let badge = require_text(employee_badge, "Employee badge")?.to_uppercase();
    let quantity = require_positive(quantity, "Quantity")?;

    let mut result = CmdResult::default();
    let mut doc = load_document(store, &mut result);

    if doc.employee(&badge).is_none() {
        return Err(KyrelError::not_found(format!(
            "Employee with badge {} not found",
            badge
        )));
    }
    let product = require_product(&doc, product_id)?;
    if product.quantity < quantity {
        return Err(KyrelError::conflict(format!(
            "Insufficient stock for product #{}: {} available, {} requested",
            product_id, product.quantity, quantity
        )));
    }
    let total = f64::from(quantity) * product.unit_price;
    let location = product.location;

    let sale = Sale {
        id: doc.configuration.next(IdNamespace::Sale),
        date,
        customer,
        product_id,
        quantity,
        total,
        employee_badge: badge.clone(),
        returned: 0,
    };
    doc.sales.push(sale.clone());
    if let Some(product) = doc.product_mut(product_id) {
        product.quantity -= quantity;
    }
    if let Some(employee) = doc.employee_mut(&badge) {
        employee.sales_count += 1;
    }
    let movement = ledger::record(
        &mut doc,
        product_id,
        MovementKind::Sale,
        quantity,
        location,
        date,
    );

    store.save(&doc)?;
    tracing::info!(sale_id = sale.id, product_id, quantity, total, badge = %badge, "sale registered");

    let invoice = Invoice::resolve(&doc, sale);
    result.add_message(CmdMessage::success(format!(
        "Sale #{} registered: {} x{} for {}, total ${:.2}",
        invoice.sale.id,
        invoice
            .product
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("?"),
        quantity,
        invoice.sale.customer,
        invoice.sale.total
    )));
    let affected = invoice.product.clone().into_iter().collect();
    Ok(result
        .with_affected_products(affected)
        .with_movement(movement)
        .with_invoice(invoice))
}
