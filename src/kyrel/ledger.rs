//! The movement ledger: an append-only record of every stock change.
//!
//! Recording is a pure in-memory append on the [`Document`]; it becomes
//! durable together with the rest of the mutation when the document is saved.

use chrono::NaiveDate;

use crate::ids::IdNamespace;
use crate::model::{Location, Movement, MovementKind};
use crate::store::Document;

pub fn record(
    doc: &mut Document,
    product_id: u64,
    kind: MovementKind,
    quantity: u32,
    location: Location,
    date: NaiveDate,
) -> Movement {
    let movement = Movement {
        id: doc.configuration.next(IdNamespace::Movement),
        date,
        product_id,
        kind,
        quantity,
        location,
    };
    doc.movements.push(movement.clone());
    movement
}

/// The last `n` movements, newest first.
pub fn recent(doc: &Document, n: usize) -> Vec<Movement> {
    doc.movements.iter().rev().take(n).cloned().collect()
}
