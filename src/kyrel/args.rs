use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kyrel", version)]
#[command(about = "Stock, sales and staff for multi-location shops", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use (overrides config and KYREL_DATA)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AdjustDirection {
    Add,
    Remove,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show stock, today's sales and the latest movements
    #[command(alias = "d")]
    Dashboard,

    /// List products at a location for one category
    #[command(alias = "inv")]
    Inventory {
        /// Location (North, Central, South)
        location: String,

        /// Category (Shirts, Jackets)
        category: String,
    },

    /// Add a new product with its initial stock
    AddProduct {
        location: String,

        category: String,

        /// Product name
        name: String,

        /// Initial quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Add or remove stock of an existing product
    Adjust {
        /// Product id
        id: u64,

        location: String,

        category: String,

        #[arg(value_enum)]
        direction: AdjustDirection,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Register a sale
    #[command(alias = "s")]
    Sell {
        /// Customer name
        #[arg(long)]
        customer: String,

        /// Badge of the employee who made the sale
        #[arg(long)]
        badge: String,

        /// Product id
        #[arg(long)]
        product: u64,

        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Look up an invoice
    Invoice {
        /// Invoice (sale) number
        id: u64,
    },

    /// Process a return against an invoice
    Return {
        /// Invoice (sale) number
        invoice: u64,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Why the goods came back
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Search stock by (partial) product name
    Stock {
        /// Part of the product name
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show one employee and their sales
    Employee { badge: String },

    /// List all employees
    Employees,

    /// Staff summary: headcount, leaves, attendance per location
    Staff,

    /// Import employees, attendance and leaves from a JSON roster file
    SeedEmployees { file: PathBuf },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, recent-movements)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
