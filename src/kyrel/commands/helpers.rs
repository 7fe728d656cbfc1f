use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KyrelError, Result};
use crate::model::Product;
use crate::store::{DataStore, Document, LoadOrigin};

/// Load the current snapshot, flagging a recovered (corrupt) store on the result.
pub fn load_document<S: DataStore>(store: &S, result: &mut CmdResult) -> Document {
    let loaded = store.load();
    if loaded.origin == LoadOrigin::Recovered {
        result.add_message(CmdMessage::warning(
            "Stored data could not be read; working from an empty store",
        ));
    }
    loaded.document
}

pub fn require_product(doc: &Document, id: u64) -> Result<&Product> {
    doc.product(id)
        .ok_or_else(|| KyrelError::not_found(format!("Product #{} not found", id)))
}

pub fn require_text(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KyrelError::validation(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

pub fn require_positive(quantity: u32, what: &str) -> Result<u32> {
    if quantity == 0 {
        return Err(KyrelError::validation(format!(
            "{} must be greater than 0",
            what
        )));
    }
    Ok(quantity)
}
