//! Identifier allocation.
//!
//! Counters live inside the persisted document's `configuration` block, so an
//! id handed out by [`Configuration::next`] only becomes durable when the
//! document it was allocated from is saved. Ids are never reused.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdNamespace {
    Product,
    Sale,
    Movement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "first_id", alias = "proximo_id_producto")]
    pub next_product_id: u64,
    #[serde(default = "first_id", alias = "proximo_id_venta")]
    pub next_sale_id: u64,
    #[serde(default = "first_id", alias = "proximo_id_movimiento")]
    pub next_movement_id: u64,
}

fn first_id() -> u64 {
    1
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            next_product_id: first_id(),
            next_sale_id: first_id(),
            next_movement_id: first_id(),
        }
    }
}

impl Configuration {
    /// Hand out the current id for `namespace` and advance the counter.
    pub fn next(&mut self, namespace: IdNamespace) -> u64 {
        let id = self.peek(namespace);
        *self.counter_mut(namespace) = id + 1;
        id
    }

    fn peek(&self, namespace: IdNamespace) -> u64 {
        match namespace {
            IdNamespace::Product => self.next_product_id,
            IdNamespace::Sale => self.next_sale_id,
            IdNamespace::Movement => self.next_movement_id,
        }
    }

    fn counter_mut(&mut self, namespace: IdNamespace) -> &mut u64 {
        match namespace {
            IdNamespace::Product => &mut self.next_product_id,
            IdNamespace::Sale => &mut self.next_sale_id,
            IdNamespace::Movement => &mut self.next_movement_id,
        }
    }
}
