use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult, Invoice};
use crate::error::{KyrelError, Result};
use crate::ledger;
use crate::model::MovementKind;
use crate::store::DataStore;

use super::helpers::{load_document, require_positive, require_product};

/// Take back `quantity` units of a sale. Returns are tracked cumulatively on
/// the sale, so the sum of all returns can never exceed what was sold.
pub fn run<S: DataStore>(
    store: &mut S,
    sale_id: u64,
    quantity: u32,
    reason: &str,
    date: NaiveDate,
) -> Result<CmdResult> {
    let quantity = require_positive(quantity, "Return quantity")?;

    let mut result = CmdResult::default();
    let mut doc = load_document(store, &mut result);

    let sale = doc
        .sale(sale_id)
        .ok_or_else(|| KyrelError::not_found(format!("Invoice #{} not found", sale_id)))?;
    if quantity > sale.returnable() {
        return Err(KyrelError::conflict(format!(
            "Cannot return {} units on invoice #{}: sold {}, already returned {}",
            quantity, sale_id, sale.quantity, sale.returned
        )));
    }
    let product_id = sale.product_id;
    let current = require_product(&doc, product_id)?;
    let location = current.location;
    let restocked = current.quantity.checked_add(quantity).ok_or_else(|| {
        KyrelError::conflict(format!(
            "Product #{} cannot hold {} more units",
            product_id, quantity
        ))
    })?;

    if let Some(product) = doc.product_mut(product_id) {
        product.quantity = restocked;
    }
    let sale = match doc.sale_mut(sale_id) {
        Some(sale) => {
            sale.returned += quantity;
            sale.clone()
        }
        None => return Err(KyrelError::not_found(format!("Invoice #{} not found", sale_id))),
    };
    let movement = ledger::record(
        &mut doc,
        product_id,
        MovementKind::Return,
        quantity,
        location,
        date,
    );

    store.save(&doc)?;
    let reason = reason.trim();
    tracing::info!(sale_id, product_id, quantity, reason, "return processed");

    let invoice = Invoice::resolve(&doc, sale);
    if let Some(product) = &invoice.product {
        result.add_message(CmdMessage::success(format!(
            "Returned {} x {} on invoice #{}; stock now {}",
            quantity, product.name, sale_id, product.quantity
        )));
    }
    if !reason.is_empty() {
        result.add_message(CmdMessage::info(format!("Reason: {}", reason)));
    }
    let affected = invoice.product.clone().into_iter().collect();
    Ok(result
        .with_affected_products(affected)
        .with_movement(movement)
        .with_invoice(invoice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sale;
    use crate::store::memory::fixtures::stocked_store;
    use crate::store::memory::InMemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    fn sold(quantity: u32) -> InMemoryStore {
        let mut store = stocked_store();
        sale::run(&mut store, "Luis", "E1", 1, quantity, date()).unwrap();
        store
    }

    #[test]
    fn full_return_restores_pre_sale_stock() {
        let mut store = sold(3);
        assert_eq!(store.snapshot().products[0].quantity, 7);

        let movements_before = store.snapshot().movements.len();
        run(&mut store, 1, 3, "wrong size", date()).unwrap();

        let doc = store.snapshot();
        assert_eq!(doc.products[0].quantity, 10);
        assert_eq!(doc.movements.len(), movements_before + 1);
        assert_eq!(doc.sales[0].returned, 3);
        let movement = doc.movements.last().unwrap();
        assert_eq!(movement.kind, MovementKind::Return);
        assert_eq!(movement.quantity, 3);
        assert_eq!(movement.product_id, 1);
    }

    #[test]
    fn exceeding_sold_quantity_is_conflict_without_mutation() {
        let mut store = sold(3);
        let before = store.snapshot();

        let err = run(&mut store, 1, 5, "", date()).unwrap_err();
        assert!(matches!(err, KyrelError::Conflict(_)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn repeated_returns_cannot_exceed_sale() {
        let mut store = sold(2);
        run(&mut store, 1, 1, "", date()).unwrap();
        run(&mut store, 1, 1, "", date()).unwrap();

        let err = run(&mut store, 1, 1, "", date()).unwrap_err();
        assert!(matches!(err, KyrelError::Conflict(_)));

        let doc = store.snapshot();
        assert_eq!(doc.products[0].quantity, 10);
        assert_eq!(doc.sales[0].returned, 2);
    }

    #[test]
    fn original_sale_figures_are_kept() {
        let mut store = sold(3);
        run(&mut store, 1, 1, "", date()).unwrap();

        let sale = &store.snapshot().sales[0];
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.total, 3.0 * 9.99);
    }

    #[test]
    fn failed_save_leaves_stock_sale_and_ledger_untouched() {
        let mut store = sold(3);
        let before = store.snapshot();
        store.set_simulate_write_error(true);

        let err = run(&mut store, 1, 2, "", date()).unwrap_err();
        assert!(matches!(err, KyrelError::Persistence(_)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn restock_overflow_is_conflict_without_mutation() {
        let mut store = sold(3);
        let mut doc = store.snapshot();
        doc.products[0].quantity = u32::MAX - 1;
        store.save(&doc).unwrap();

        let err = run(&mut store, 1, 2, "", date()).unwrap_err();
        assert!(matches!(err, KyrelError::Conflict(_)));
        assert_eq!(store.snapshot(), doc);
    }

    #[test]
    fn unknown_sale_is_not_found() {
        let mut store = stocked_store();
        let err = run(&mut store, 9, 1, "", date()).unwrap_err();
        assert!(matches!(err, KyrelError::NotFound(_)));
    }

    #[test]
    fn missing_product_is_not_found() {
        let mut store = sold(1);
        let mut doc = store.snapshot();
        doc.products.clear();
        store.save(&doc).unwrap();

        let err = run(&mut store, 1, 1, "", date()).unwrap_err();
        assert!(matches!(err, KyrelError::NotFound(_)));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut store = sold(1);
        assert!(matches!(
            run(&mut store, 1, 0, "", date()),
            Err(KyrelError::Validation(_))
        ));
    }

    #[test]
    fn reason_is_reported() {
        let mut store = sold(1);
        let result = run(&mut store, 1, 1, "  torn seam ", date()).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Reason: torn seam"));
    }
}
