use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KyrelError, Result};
use crate::ids::IdNamespace;
use crate::ledger;
use crate::model::{Category, Location, MovementKind, Product};
use crate::store::DataStore;

use super::helpers::{load_document, require_text};

pub fn run<S: DataStore>(
    store: &mut S,
    location: Location,
    category: Category,
    name: &str,
    quantity: u32,
    unit_price: f64,
    date: NaiveDate,
) -> Result<CmdResult> {
    let name = require_text(name, "Product name")?;
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(KyrelError::validation(
            "Unit price must be a non-negative number",
        ));
    }

    let mut result = CmdResult::default();
    let mut doc = load_document(store, &mut result);

    let product = Product {
        id: doc.configuration.next(IdNamespace::Product),
        name,
        category,
        location,
        quantity,
        unit_price,
    };
    doc.products.push(product.clone());
    let movement = ledger::record(
        &mut doc,
        product.id,
        MovementKind::Entry,
        quantity,
        location,
        date,
    );

    store.save(&doc)?;
    tracing::info!(product_id = product.id, %location, %category, quantity, "product added");

    result.add_message(CmdMessage::success(format!(
        "Product #{} added: {} ({} units at ${:.2}, {} / {})",
        product.id, product.name, quantity, unit_price, location, category
    )));
    Ok(result
        .with_affected_products(vec![product])
        .with_movement(movement))
}
