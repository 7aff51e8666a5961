//! Product domain — catalog entries and lookup.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Product ─────────────────────────────────────────────────────────────────

/// A purchasable product, immutable from the form's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub cost: Decimal,
}

impl Product {
    /// Label shown in the product selector: `"Widget - $12.50"`.
    pub fn label(&self) -> String {
        format!("{} - ${}", self.name, self.cost)
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The backend-provided product list, in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by the raw value of a selection control.
    ///
    /// Values that are not integer identifiers (including the empty
    /// placeholder) never match.
    pub fn find_by_value(&self, value: &str) -> Option<&Product> {
        let id = value.parse::<ProductId>().ok()?;
        self.find(&id)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    MissingName(ProductId),
    NegativeCost(ProductId, Decimal),
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductValidationError::MissingName(id) => write!(f, "Product {}: missing name", id),
            ProductValidationError::NegativeCost(id, cost) => {
                write!(f, "Product {}: negative cost {}", id, cost)
            }
        }
    }
}

impl std::error::Error for ProductValidationError {}
