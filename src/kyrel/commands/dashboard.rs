use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::ledger;
use crate::model::{Category, Location, Movement};
use crate::store::DataStore;

use super::helpers::load_document;

/// A ledger entry with the product name resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementLine {
    pub movement: Movement,
    pub product_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub total_units: u64,
    pub sales_today: f64,
    pub invoices: usize,
    pub product_models: usize,
    pub units_by_location: Vec<(Location, u64)>,
    pub units_by_category: Vec<(Category, u64)>,
    pub recent_movements: Vec<MovementLine>,
}

pub fn run<S: DataStore>(store: &S, today: NaiveDate, recent: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);

    let mut by_location: BTreeMap<Location, u64> = BTreeMap::new();
    let mut by_category: BTreeMap<Category, u64> = BTreeMap::new();
    for product in &doc.products {
        *by_location.entry(product.location).or_default() += u64::from(product.quantity);
        *by_category.entry(product.category).or_default() += u64::from(product.quantity);
    }

    let recent_movements = ledger::recent(&doc, recent)
        .into_iter()
        .map(|movement| MovementLine {
            product_name: doc.product(movement.product_id).map(|p| p.name.clone()),
            movement,
        })
        .collect();

    result.dashboard = Some(Dashboard {
        date: today,
        total_units: by_location.values().sum(),
        sales_today: doc
            .sales
            .iter()
            .filter(|s| s.date == today)
            .map(|s| s.total)
            .sum(),
        invoices: doc.sales.len(),
        product_models: doc.products.len(),
        units_by_location: by_location.into_iter().collect(),
        units_by_category: by_category.into_iter().collect(),
        recent_movements,
    });
    Ok(result)
}
