//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every kyrel operation, whatever UI sits in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: location and category names are parsed, signed
//!   quantities coming from a UI are checked and narrowed
//! - **Supplies the date** stamped on sales and movements
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business rules (those live in `commands/*.rs`) and does no
//! I/O of its own beyond what the store does.
//!
//! ## Generic Over DataStore
//!
//! `KyrelApi<S: DataStore>` is generic over the storage backend:
//! - Production: `KyrelApi<FileStore>`
//! - Testing: `KyrelApi<InMemoryStore>`

use crate::commands;
use crate::error::{KyrelError, Result};
use crate::model::{today, Category, Direction, Location};
use crate::store::{DataStore, LoadOrigin};

/// The main API facade for kyrel operations.
pub struct KyrelApi<S: DataStore> {
    store: S,
    paths: commands::KyrelPaths,
    recent_movements: usize,
}

impl<S: DataStore> KyrelApi<S> {
    pub fn new(store: S, paths: commands::KyrelPaths) -> Self {
        Self {
            store,
            paths,
            recent_movements: crate::config::KyrelConfig::default().recent_movements,
        }
    }

    pub fn with_recent_movements(mut self, n: usize) -> Self {
        self.recent_movements = n;
        self
    }

    pub fn add_product(
        &mut self,
        location: &str,
        category: &str,
        name: &str,
        quantity: i64,
        unit_price: f64,
    ) -> Result<commands::CmdResult> {
        let location: Location = location.parse()?;
        let category: Category = category.parse()?;
        let quantity = to_quantity(quantity, "Quantity")?;
        commands::add_product::run(
            &mut self.store,
            location,
            category,
            name,
            quantity,
            unit_price,
            today(),
        )
    }

    pub fn adjust_stock(
        &mut self,
        product_id: u64,
        location: &str,
        category: &str,
        delta: i64,
        direction: Direction,
    ) -> Result<commands::CmdResult> {
        let location: Location = location.parse()?;
        let category: Category = category.parse()?;
        let delta = to_quantity(delta, "Quantity")?;
        commands::adjust_stock::run(
            &mut self.store,
            product_id,
            location,
            category,
            delta,
            direction,
            today(),
        )
    }

    pub fn register_sale(
        &mut self,
        customer: &str,
        employee_badge: &str,
        product_id: u64,
        quantity: i64,
    ) -> Result<commands::CmdResult> {
        let quantity = to_quantity(quantity, "Quantity")?;
        commands::sale::run(
            &mut self.store,
            customer,
            employee_badge,
            product_id,
            quantity,
            today(),
        )
    }

    pub fn find_invoice(&self, sale_id: u64) -> Result<commands::CmdResult> {
        commands::invoice::run(&self.store, sale_id)
    }

    pub fn process_return(
        &mut self,
        sale_id: u64,
        quantity: i64,
        reason: &str,
    ) -> Result<commands::CmdResult> {
        let quantity = to_quantity(quantity, "Return quantity")?;
        commands::returns::run(&mut self.store, sale_id, quantity, reason, today())
    }

    pub fn query_stock(&self, term: &str) -> Result<commands::CmdResult> {
        commands::stock::run(&self.store, term)
    }

    pub fn inventory(&self, location: &str, category: &str) -> Result<commands::CmdResult> {
        commands::inventory::run(&self.store, location.parse()?, category.parse()?)
    }

    pub fn dashboard(&self) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.store, today(), self.recent_movements)
    }

    pub fn find_employee(&self, badge: &str) -> Result<commands::CmdResult> {
        commands::employees::find(&self.store, badge)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::employees::list(&self.store)
    }

    pub fn employee_report(&self, badge: &str) -> Result<commands::CmdResult> {
        commands::employees::report(&self.store, badge)
    }

    pub fn staff_summary(&self) -> Result<commands::CmdResult> {
        commands::staff::run(&self.store)
    }

    pub fn seed_employees(&mut self, roster: commands::Roster) -> Result<commands::CmdResult> {
        commands::employees::seed(&mut self.store, roster)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Whether the store currently holds data, is empty, or had to be reset.
    pub fn load_origin(&self) -> LoadOrigin {
        self.store.load().origin
    }

    pub fn paths(&self) -> &commands::KyrelPaths {
        &self.paths
    }
}

fn to_quantity(value: i64, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        if value < 0 {
            KyrelError::validation(format!("{} cannot be negative", what))
        } else {
            KyrelError::validation(format!("{} {} is too large", what, value))
        }
    })
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, Dashboard, EmployeeReport, InventoryView, Invoice, KyrelPaths,
    MessageLevel, MovementLine, Roster, StaffSummary, StockByName,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovementKind;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> KyrelApi<InMemoryStore> {
        let paths = KyrelPaths {
            config_dir: PathBuf::from("/nonexistent"),
            data_file: PathBuf::from("/nonexistent/datos.json"),
        };
        KyrelApi::new(InMemoryStore::new(), paths)
    }

    #[test]
    fn add_product_parses_spanish_names() {
        let mut api = api();
        let result = api
            .add_product("Norte", "Camisas", "Basic Tee", 10, 9.99)
            .unwrap();
        let product = &result.affected_products[0];
        assert_eq!(product.location, Location::North);
        assert_eq!(product.category, Category::Shirts);
    }

    #[test]
    fn negative_quantity_is_validation_error() {
        let mut api = api();
        let err = api
            .add_product("North", "Shirts", "Basic Tee", -1, 9.99)
            .unwrap_err();
        assert!(matches!(err, KyrelError::Validation(_)));
        assert_eq!(api.load_origin(), LoadOrigin::Fresh);
    }

    #[test]
    fn unknown_location_is_validation_error() {
        let mut api = api();
        assert!(matches!(
            api.add_product("Moon", "Shirts", "Tee", 1, 1.0),
            Err(KyrelError::Validation(_))
        ));
    }

    #[test]
    fn dispatches_adjust_with_direction() {
        let mut api = api();
        api.add_product("South", "Jackets", "Parka", 5, 60.0).unwrap();
        let result = api
            .adjust_stock(1, "sur", "sacos", 2, Direction::Decrease)
            .unwrap();
        assert_eq!(result.affected_products[0].quantity, 3);
        assert_eq!(result.movements[0].kind, MovementKind::Exit);
        assert_eq!(api.load_origin(), LoadOrigin::Loaded);
    }

    #[test]
    fn dashboard_uses_configured_recent_count() {
        let mut api = api().with_recent_movements(1);
        api.add_product("North", "Shirts", "A", 1, 1.0).unwrap();
        api.add_product("North", "Shirts", "B", 1, 1.0).unwrap();
        let dash = api.dashboard().unwrap().dashboard.unwrap();
        assert_eq!(dash.recent_movements.len(), 1);
    }
}
