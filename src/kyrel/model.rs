use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KyrelError;

/// A physical shop ("sede").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    #[serde(alias = "Norte")]
    North,
    #[serde(alias = "Centro")]
    Central,
    #[serde(alias = "Sur")]
    South,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::North, Location::Central, Location::South];
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::North => "North",
            Location::Central => "Central",
            Location::South => "South",
        };
        f.write_str(name)
    }
}

impl FromStr for Location {
    type Err = KyrelError;

    // Staff still type the Spanish names, so both are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "norte" => Ok(Location::North),
            "central" | "centro" => Ok(Location::Central),
            "south" | "sur" => Ok(Location::South),
            other => Err(KyrelError::validation(format!("Unknown location: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "Camisas")]
    Shirts,
    #[serde(alias = "Sacos")]
    Jackets,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Shirts, Category::Jackets];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Shirts => "Shirts",
            Category::Jackets => "Jackets",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = KyrelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shirts" | "camisas" => Ok(Category::Shirts),
            "jackets" | "sacos" => Ok(Category::Jackets),
            other => Err(KyrelError::validation(format!("Unknown category: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "categoria")]
    pub category: Category,
    #[serde(alias = "sede")]
    pub location: Location,
    #[serde(alias = "cantidad")]
    pub quantity: u32,
    #[serde(alias = "precio")]
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u64,
    #[serde(alias = "fecha")]
    pub date: NaiveDate,
    #[serde(alias = "cliente")]
    pub customer: String,
    #[serde(alias = "producto_id")]
    pub product_id: u64,
    #[serde(alias = "cantidad")]
    pub quantity: u32,
    /// Frozen at registration time; later price changes do not touch it.
    pub total: f64,
    #[serde(alias = "empleado_carnet")]
    pub employee_badge: String,
    /// Units already taken back through returns.
    #[serde(default)]
    pub returned: u32,
}

impl Sale {
    pub fn returnable(&self) -> u32 {
        self.quantity.saturating_sub(self.returned)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "carnet")]
    pub badge: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "sede")]
    pub location: Location,
    #[serde(default, alias = "horas_trabajadas")]
    pub hours_worked: f64,
    #[serde(default, alias = "ventas_realizadas")]
    pub sales_count: u32,
}

impl Employee {
    pub fn new(badge: impl Into<String>, name: impl Into<String>, location: Location) -> Self {
        Self {
            badge: badge.into().trim().to_uppercase(),
            name: name.into(),
            location,
            hours_worked: 0.0,
            sales_count: 0,
        }
    }

    pub fn has_badge(&self, badge: &str) -> bool {
        self.badge.eq_ignore_ascii_case(badge.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(alias = "empleado_carnet")]
    pub employee_badge: String,
    #[serde(alias = "fecha")]
    pub date: NaiveDate,
    #[serde(alias = "presente")]
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    #[serde(alias = "empleado_carnet")]
    pub employee_badge: String,
    #[serde(alias = "fecha_inicio")]
    pub start: NaiveDate,
    #[serde(default, alias = "fecha_fin")]
    pub end: Option<NaiveDate>,
    #[serde(default, alias = "motivo")]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    #[serde(alias = "Entrada")]
    Entry,
    #[serde(alias = "Salida")]
    Exit,
    #[serde(alias = "Venta")]
    Sale,
    #[serde(alias = "Devolución", alias = "Devolucion")]
    Return,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovementKind::Entry => "Entry",
            MovementKind::Exit => "Exit",
            MovementKind::Sale => "Sale",
            MovementKind::Return => "Return",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: u64,
    #[serde(alias = "fecha")]
    pub date: NaiveDate,
    #[serde(alias = "producto_id")]
    pub product_id: u64,
    #[serde(alias = "tipo")]
    pub kind: MovementKind,
    #[serde(alias = "cantidad")]
    pub quantity: u32,
    #[serde(alias = "sede")]
    pub location: Location,
}

/// Which way a stock adjustment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
