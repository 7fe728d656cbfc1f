//! # Kyrel Architecture
//!
//! Kyrel tracks stock, sales, returns and staff for a shop with several
//! locations ("sedes"). It is a library with a command-line client on top:
//! the core never prints, never prompts and never exits the process.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses location/category names, checks raw quantities    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One unit of work per operation: load → validate →        │
//! │    mutate → record movements → save once                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, ids.rs, ledger.rs)                  │
//! │  - One JSON document holding the whole dataset              │
//! │  - Id counters and the movement ledger live inside it       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Rules
//!
//! - Stock never goes negative; decreases are checked before anything changes.
//! - Every stock change (new product, adjustment, sale, return) appends
//!   exactly one [`model::Movement`].
//! - A sale decrements stock, bumps the employee's sale count and logs its
//!   movement in the same save. Its total is frozen at that moment.
//! - Returns are counted against the sale, so their sum never exceeds what was
//!   sold.
//! - Validation, not-found and conflict errors happen before any mutation. A
//!   failed save means nothing happened.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Document schema, storage trait and implementations
//! - [`ids`]: Id counters
//! - [`ledger`]: The movement log
//! - [`model`]: Core data types (`Product`, `Sale`, `Employee`, ...)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod ledger;
pub mod model;
pub mod store;
