//! Frontend Models
//!
//! Data structures for the catalog and the persisted shopping list.

use serde::{Deserialize, Serialize};

/// One product tracked in the shopping list.
///
/// `price` is a snapshot taken when the item was added (or when prices were
/// last refreshed), not a live reference into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// One catalog product with its current unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: f64,
}
