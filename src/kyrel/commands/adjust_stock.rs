use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KyrelError, Result};
use crate::ledger;
use crate::model::{Category, Direction, Location, MovementKind};
use crate::store::DataStore;

use super::helpers::{load_document, require_positive, require_product};

pub fn run<S: DataStore>(
    store: &mut S,
    product_id: u64,
    location: Location,
    category: Category,
    delta: u32,
    direction: Direction,
    date: NaiveDate,
) -> Result<CmdResult> {
    let delta = require_positive(delta, "Quantity")?;

    let mut result = CmdResult::default();
    let mut doc = load_document(store, &mut result);

    let current = require_product(&doc, product_id)?;
    if current.location != location || current.category != category {
        return Err(KyrelError::conflict(format!(
            "Product #{} belongs to {} / {}, not {} / {}",
            product_id, current.location, current.category, location, category
        )));
    }
    let new_quantity = match direction {
        Direction::Increase => current.quantity.checked_add(delta).ok_or_else(|| {
            KyrelError::validation(format!("Quantity {} is too large", delta))
        })?,
        Direction::Decrease => current.quantity.checked_sub(delta).ok_or_else(|| {
            KyrelError::conflict(format!(
                "Not enough stock for product #{}: {} available",
                product_id, current.quantity
            ))
        })?,
    };

    let product = match doc.product_mut(product_id) {
        Some(product) => {
            product.quantity = new_quantity;
            product.clone()
        }
        None => return Err(KyrelError::not_found(format!("Product #{} not found", product_id))),
    };
    let kind = match direction {
        Direction::Increase => MovementKind::Entry,
        Direction::Decrease => MovementKind::Exit,
    };
    let movement = ledger::record(&mut doc, product_id, kind, delta, location, date);

    store.save(&doc)?;
    tracing::info!(product_id, %kind, delta, stock = product.quantity, "stock adjusted");

    let verb = match direction {
        Direction::Increase => "added to",
        Direction::Decrease => "removed from",
    };
    result.add_message(CmdMessage::success(format!(
        "{} units {} {} (#{}); stock now {}",
        delta, verb, product.name, product.id, product.quantity
    )));
    Ok(result
        .with_affected_products(vec![product])
        .with_movement(movement))
}
