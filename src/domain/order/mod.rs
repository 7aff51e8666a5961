//! Order domain — drafts, payloads, placed orders.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{money, serde_util, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── DraftField ──────────────────────────────────────────────────────────────

/// One editable field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    CustomerName,
    CustomerId,
    Product,
    Quantity,
    ProductCost,
    UserEmail,
}

impl DraftField {
    /// Fields in the order the form presents them.
    pub const ALL: [DraftField; 6] = [
        DraftField::CustomerName,
        DraftField::CustomerId,
        DraftField::Product,
        DraftField::Quantity,
        DraftField::ProductCost,
        DraftField::UserEmail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::CustomerName => "Customer Name",
            DraftField::CustomerId => "Customer ID",
            DraftField::Product => "Product",
            DraftField::Quantity => "Quantity",
            DraftField::ProductCost => "Product Cost (Unit)",
            DraftField::UserEmail => "User Email",
        }
    }

    /// Name of the field in the backend payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::CustomerName => "customer_name",
            DraftField::CustomerId => "customer_id",
            DraftField::Product => "product",
            DraftField::Quantity => "quantity",
            DraftField::ProductCost => "product_cost",
            DraftField::UserEmail => "user_email",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderDraft ──────────────────────────────────────────────────────────────

/// The in-progress order exactly as typed. Every field is raw text; parsing
/// happens when the draft is converted into an [`OrderRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_id: String,
    pub product: String,
    pub quantity: String,
    pub product_cost: String,
    pub user_email: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::CustomerName => &self.customer_name,
            DraftField::CustomerId => &self.customer_id,
            DraftField::Product => &self.product,
            DraftField::Quantity => &self.quantity,
            DraftField::ProductCost => &self.product_cost,
            DraftField::UserEmail => &self.user_email,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::CustomerName => self.customer_name = value,
            DraftField::CustomerId => self.customer_id = value,
            DraftField::Product => self.product = value,
            DraftField::Quantity => self.quantity = value,
            DraftField::ProductCost => self.product_cost = value,
            DraftField::UserEmail => self.user_email = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// `quantity × product_cost`, or `None` while either field is blank.
    ///
    /// Unparsable numbers count as zero here; strict parsing only applies on
    /// submission.
    pub fn total(&self) -> Option<Decimal> {
        if self.quantity.trim().is_empty() || self.product_cost.trim().is_empty() {
            return None;
        }
        let qty = Decimal::from_str(self.quantity.trim()).unwrap_or(Decimal::ZERO);
        let cost = Decimal::from_str(self.product_cost.trim()).unwrap_or(Decimal::ZERO);
        Some(qty.checked_mul(cost).unwrap_or(Decimal::ZERO))
    }

    /// [`Self::total`] rendered to cents, e.g. `"37.50"`.
    pub fn total_display(&self) -> Option<String> {
        self.total().map(|t| money(&t))
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Status recorded with a newly created order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Order Placed")]
    Placed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Order Placed",
        }
    }
}

// ─── OrderRequest ────────────────────────────────────────────────────────────

/// Body of `POST /api/orders/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_id: String,
    pub product: ProductId,
    pub quantity: u32,
    #[serde(
        serialize_with = "serde_util::decimal_as_float::serialize",
        deserialize_with = "serde_util::decimal_lenient::deserialize"
    )]
    pub product_cost: Decimal,
    pub user_email: String,
    pub status: OrderStatus,
}

impl OrderRequest {
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.product_cost
    }
}

// ─── PlacedOrder ─────────────────────────────────────────────────────────────

/// What the backend echoed back for a created order. The backend's schema is
/// not fixed, so only the commonly present keys are lifted out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacedOrder {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub raw: serde_json::Value,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    MissingField(DraftField),
    InvalidNumber { field: DraftField, value: String },
    QuantityBelowMinimum(i64),
    NegativeCost(Decimal),
    TooManyDecimalPlaces(Decimal),
    InvalidEmail(String),
    UnknownProduct(ProductId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(errors) => {
                writeln!(f, "Order draft validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingField(field) => write!(f, "{} is required", field.label()),
            ValidationError::InvalidNumber { field, value } => {
                write!(f, "{}: not a valid number: {:?}", field.label(), value)
            }
            ValidationError::QuantityBelowMinimum(q) => {
                write!(f, "Quantity must be at least 1 (got {})", q)
            }
            ValidationError::NegativeCost(c) => write!(f, "Product cost must not be negative ({})", c),
            ValidationError::TooManyDecimalPlaces(c) => {
                write!(f, "Product cost has more than two decimal places ({})", c)
            }
            ValidationError::InvalidEmail(e) => write!(f, "Invalid e-mail address: {:?}", e),
            ValidationError::UnknownProduct(id) => write!(f, "Product {} is not in the catalog", id),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Collapse a list of problems: one error stays as is, several become
    /// [`ValidationError::Multiple`].
    pub fn from_list(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ValidationError::Multiple(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(quantity: &str, cost: &str) -> OrderDraft {
        OrderDraft {
            quantity: quantity.to_string(),
            product_cost: cost.to_string(),
            ..OrderDraft::default()
        }
    }

    #[test]
    fn test_total_three_at_twelve_fifty() {
        assert_eq!(draft("3", "12.50").total_display().as_deref(), Some("37.50"));
    }

    #[test]
    fn test_total_hidden_when_either_field_blank() {
        assert_eq!(draft("", "12.50").total(), None);
        assert_eq!(draft("3", "").total(), None);
        assert_eq!(draft("  ", "1").total(), None);
    }

    #[test]
    fn test_total_rounds_to_cents() {
        assert_eq!(draft("3", "0.335").total_display().as_deref(), Some("1.01"));
        assert_eq!(draft("1", "2.675").total_display().as_deref(), Some("2.68"));
    }

    #[test]
    fn test_total_treats_garbage_as_zero() {
        assert_eq!(draft("abc", "12.50").total_display().as_deref(), Some("0.00"));
        assert_eq!(draft("2", "x").total_display().as_deref(), Some("0.00"));
    }

    #[test]
    fn test_set_and_clear() {
        let mut d = OrderDraft::new();
        assert!(d.is_empty());
        d.set(DraftField::UserEmail, "a@b.c");
        assert_eq!(d.get(DraftField::UserEmail), "a@b.c");
        assert!(!d.is_empty());
        d.clear();
        assert!(d.is_empty());
    }

    #[test]
    fn test_status_serializes_as_literal() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Placed).unwrap(),
            "\"Order Placed\""
        );
    }

    #[test]
    fn test_from_list() {
        assert_eq!(ValidationError::from_list(vec![]), None);
        assert_eq!(
            ValidationError::from_list(vec![ValidationError::QuantityBelowMinimum(0)]),
            Some(ValidationError::QuantityBelowMinimum(0))
        );
        assert!(matches!(
            ValidationError::from_list(vec![
                ValidationError::QuantityBelowMinimum(0),
                ValidationError::NegativeCost(Decimal::NEGATIVE_ONE),
            ]),
            Some(ValidationError::Multiple(v)) if v.len() == 2
        ));
    }
}
