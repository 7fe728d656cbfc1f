use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Location;
use crate::store::DataStore;

use super::helpers::load_document;

/// Stock for one product name across the locations that carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockByName {
    pub name: String,
    pub locations: Vec<(Location, u32)>,
}

impl StockByName {
    pub fn total(&self) -> u64 {
        self.locations.iter().map(|(_, qty)| u64::from(*qty)).sum()
    }
}

/// Case-insensitive substring search over product names, grouped by name and
/// then by location. Groups keep the order in which names first appear.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        result.add_message(CmdMessage::info("Enter part of a product name to search"));
        return Ok(result);
    }

    let doc = load_document(store, &mut result);
    let mut groups: Vec<StockByName> = Vec::new();

    for product in doc
        .products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term_lower))
    {
        let idx = match groups.iter().position(|g| g.name == product.name) {
            Some(idx) => idx,
            None => {
                groups.push(StockByName {
                    name: product.name.clone(),
                    locations: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        match group
            .locations
            .iter_mut()
            .find(|(loc, _)| *loc == product.location)
        {
            Some((_, qty)) => *qty = qty.saturating_add(product.quantity),
            None => group.locations.push((product.location, product.quantity)),
        }
    }

    if groups.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products match '{}'",
            term.trim()
        )));
    }
    result.stock = groups;
    Ok(result)
}
