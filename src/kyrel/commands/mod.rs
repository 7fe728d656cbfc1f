use crate::config::KyrelConfig;
use crate::model::{Employee, Movement, Product, Sale};
use std::path::PathBuf;

pub mod add_product;
pub mod adjust_stock;
pub mod config;
pub mod dashboard;
pub mod employees;
pub mod helpers;
pub mod inventory;
pub mod invoice;
pub mod returns;
pub mod sale;
pub mod staff;
pub mod stock;

pub use dashboard::{Dashboard, MovementLine};
pub use employees::{EmployeeReport, Roster};
pub use inventory::InventoryView;
pub use invoice::Invoice;
pub use staff::StaffSummary;
pub use stock::StockByName;

/// Where this installation keeps its files.
#[derive(Debug, Clone)]
pub struct KyrelPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI. Each command fills the parts it
/// produces and leaves the rest empty.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub movements: Vec<Movement>,
    pub invoice: Option<Invoice>,
    pub inventory: Option<InventoryView>,
    pub stock: Vec<StockByName>,
    pub employees: Vec<Employee>,
    pub employee_report: Option<EmployeeReport>,
    pub staff: Option<StaffSummary>,
    pub dashboard: Option<Dashboard>,
    pub config: Option<KyrelConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movements.push(movement);
        self
    }

    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoice = Some(invoice);
        self
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_config(mut self, config: KyrelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The sale carried by the invoice, if any.
    pub fn sale(&self) -> Option<&Sale> {
        self.invoice.as_ref().map(|inv| &inv.sale)
    }
}
