use super::{DataStore, Document, LoadOrigin, Loaded};
use crate::error::{KyrelError, Result};
use std::io;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<Document>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// What a load would return right now, without the origin.
    pub fn snapshot(&self) -> Document {
        self.document.clone().unwrap_or_default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Loaded {
        match &self.document {
            Some(document) => Loaded {
                document: document.clone(),
                origin: LoadOrigin::Loaded,
            },
            None => Loaded::fresh(),
        }
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        if self.simulate_write_error {
            return Err(KyrelError::Persistence(io::Error::other(
                "Simulated write error",
            )));
        }
        self.document = Some(doc.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, Employee, Location, Product};

    /// A store holding one product (id 1, 10 units at 9.99 in North/Shirts)
    /// and one employee with badge `E1`.
    pub fn stocked_store() -> InMemoryStore {
        let mut doc = Document::default();
        doc.products.push(Product {
            id: 1,
            name: "Basic Tee".to_string(),
            category: Category::Shirts,
            location: Location::North,
            quantity: 10,
            unit_price: 9.99,
        });
        doc.configuration.next_product_id = 2;
        doc.employees
            .push(Employee::new("E1", "Ana Torres", Location::North));
        InMemoryStore::with_document(doc)
    }
}
