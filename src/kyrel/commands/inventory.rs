use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Category, Location, Product};
use crate::store::DataStore;

use super::helpers::load_document;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView {
    pub location: Location,
    pub category: Category,
    pub products: Vec<Product>,
}

impl InventoryView {
    pub fn total_units(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }
}

pub fn run<S: DataStore>(store: &S, location: Location, category: Category) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);

    let products = doc
        .products
        .into_iter()
        .filter(|p| p.location == location && p.category == category)
        .collect();

    result.inventory = Some(InventoryView {
        location,
        category,
        products,
    });
    Ok(result)
}
