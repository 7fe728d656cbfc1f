use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, Product, Sale};
use crate::store::{DataStore, Document};

use super::helpers::load_document;

/// A sale with the product and employee it points at, when they still resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub sale: Sale,
    pub product: Option<Product>,
    pub employee: Option<Employee>,
}

impl Invoice {
    pub fn resolve(doc: &Document, sale: Sale) -> Self {
        let product = doc.product(sale.product_id).cloned();
        let employee = doc.employee(&sale.employee_badge).cloned();
        Self {
            sale,
            product,
            employee,
        }
    }
}

pub fn run<S: DataStore>(store: &S, sale_id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);

    match doc.sale(sale_id).cloned() {
        Some(sale) => Ok(result.with_invoice(Invoice::resolve(&doc, sale))),
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Invoice #{} not found",
                sale_id
            )));
            Ok(result)
        }
    }
}
