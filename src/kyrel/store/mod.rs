//! # Storage Layer
//!
//! Kyrel keeps its whole dataset in a single document. Every operation loads
//! the full snapshot, mutates it in memory and writes it back once, so each
//! command is its own unit of work against the store. There is no caching
//! between operations.
//!
//! ## Recovery
//!
//! Loading never fails. A missing document yields the empty schema with
//! [`LoadOrigin::Fresh`]; an unreadable or unparsable one yields the empty
//! schema with [`LoadOrigin::Recovered`]. This is the one place where an error
//! is swallowed on purpose, and the origin lets callers tell the cases apart.
//!
//! Unknown top-level keys make a document unparsable, so a file written in some
//! other schema is reported as recovered instead of loading as empty.
//!
//! The Spanish layout (`productos`, `ventas`, `configuracion.proximo_id_*`,
//! `sede`, `cantidad`, `"Norte"`, `"Entrada"`, ...) is read through serde
//! aliases. Saves always write the English field names.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk, replaced atomically on save
//!   (write to a temp file in the same directory, then rename).
//! - [`memory::InMemoryStore`]: for testing command logic without the
//!   filesystem. Can simulate write failures.
//!
//! ## Concurrency
//!
//! None. Two processes running load→mutate→save at the same time race and the
//! later save wins.
//!
//! ## Storage Layout
//!
//! ```text
//! datos.json
//! {
//!   "products": [...], "sales": [...], "employees": [...],
//!   "attendance": [...], "leaves": [...], "movements": [...],
//!   "configuration": { "next_product_id": 1, "next_sale_id": 1, "next_movement_id": 1 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::Configuration;
use crate::model::{Attendance, Employee, Leave, Movement, Product, Sale};

pub mod fs;
pub mod memory;

/// The full persisted dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default, alias = "productos")]
    pub products: Vec<Product>,
    #[serde(default, alias = "ventas")]
    pub sales: Vec<Sale>,
    #[serde(default, alias = "empleados")]
    pub employees: Vec<Employee>,
    #[serde(default, alias = "asistencias")]
    pub attendance: Vec<Attendance>,
    #[serde(default, alias = "incapacidades")]
    pub leaves: Vec<Leave>,
    #[serde(default, alias = "movimientos")]
    pub movements: Vec<Movement>,
    #[serde(default, alias = "configuracion")]
    pub configuration: Configuration,
}

impl Document {
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn sale(&self, id: u64) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    pub fn sale_mut(&mut self, id: u64) -> Option<&mut Sale> {
        self.sales.iter_mut().find(|s| s.id == id)
    }

    pub fn employee(&self, badge: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.has_badge(badge))
    }

    pub fn employee_mut(&mut self, badge: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.has_badge(badge))
    }
}

/// How a document came out of [`DataStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Read and parsed successfully.
    Loaded,
    /// Nothing persisted yet; empty schema.
    Fresh,
    /// Persisted data could not be read or parsed; empty schema.
    Recovered,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub document: Document,
    pub origin: LoadOrigin,
}

impl Loaded {
    pub fn fresh() -> Self {
        Self {
            document: Document::default(),
            origin: LoadOrigin::Fresh,
        }
    }

    pub fn recovered() -> Self {
        Self {
            document: Document::default(),
            origin: LoadOrigin::Recovered,
        }
    }
}

/// Abstract interface for document storage.
pub trait DataStore {
    /// Load the full dataset. Never fails; see module docs on recovery.
    fn load(&self) -> Loaded;

    /// Persist the full dataset, replacing what was there.
    fn save(&mut self, doc: &Document) -> Result<()>;
}
