//! Conversions: OrderDraft → OrderRequest (validated), response → PlacedOrder.

use super::{
    wire, DraftField, OrderDraft, OrderRequest, OrderStatus, PlacedOrder, ValidationError,
};
use crate::shared::ProductId;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<&OrderDraft> for OrderRequest {
    type Error = ValidationError;

    fn try_from(draft: &OrderDraft) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let customer_name = required(draft, DraftField::CustomerName, &mut errors);
        let customer_id = required(draft, DraftField::CustomerId, &mut errors);

        let product = required(draft, DraftField::Product, &mut errors).and_then(|raw| {
            ProductId::from_str(&raw)
                .map_err(|_| {
                    errors.push(ValidationError::InvalidNumber {
                        field: DraftField::Product,
                        value: raw.clone(),
                    })
                })
                .ok()
        });

        // `3.0` is a whole quantity, `2.5` is not.
        let quantity = required(draft, DraftField::Quantity, &mut errors).and_then(|raw| {
            let whole = Decimal::from_str(&raw)
                .ok()
                .filter(|q| q.fract().is_zero())
                .and_then(|q| q.to_i64());
            match whole {
                Some(q) if q < 1 => {
                    errors.push(ValidationError::QuantityBelowMinimum(q));
                    None
                }
                Some(q) => match u32::try_from(q) {
                    Ok(q) => Some(q),
                    Err(_) => {
                        errors.push(ValidationError::InvalidNumber {
                            field: DraftField::Quantity,
                            value: raw,
                        });
                        None
                    }
                },
                None => {
                    errors.push(ValidationError::InvalidNumber {
                        field: DraftField::Quantity,
                        value: raw,
                    });
                    None
                }
            }
        });

        let product_cost = required(draft, DraftField::ProductCost, &mut errors).and_then(|raw| {
            match Decimal::from_str(&raw) {
                Ok(c) if c < Decimal::ZERO => {
                    errors.push(ValidationError::NegativeCost(c));
                    None
                }
                Ok(c) if c.normalize().scale() > 2 => {
                    errors.push(ValidationError::TooManyDecimalPlaces(c));
                    None
                }
                Ok(c) => Some(c),
                Err(_) => {
                    errors.push(ValidationError::InvalidNumber {
                        field: DraftField::ProductCost,
                        value: raw,
                    });
                    None
                }
            }
        });

        let user_email = required(draft, DraftField::UserEmail, &mut errors).and_then(|raw| {
            if is_email(&raw) {
                Some(raw)
            } else {
                errors.push(ValidationError::InvalidEmail(raw));
                None
            }
        });

        if let Some(err) = ValidationError::from_list(errors) {
            return Err(err);
        }

        match (
            customer_name,
            customer_id,
            product,
            quantity,
            product_cost,
            user_email,
        ) {
            (
                Some(customer_name),
                Some(customer_id),
                Some(product),
                Some(quantity),
                Some(product_cost),
                Some(user_email),
            ) => Ok(OrderRequest {
                customer_name,
                customer_id,
                product,
                quantity,
                product_cost,
                user_email,
                status: OrderStatus::Placed,
            }),
            // Every `None` above pushed an error.
            _ => Err(ValidationError::Multiple(Vec::new())),
        }
    }
}

/// Trimmed field value, or a `MissingField` error when blank.
fn required(draft: &OrderDraft, field: DraftField, errors: &mut Vec<ValidationError>) -> Option<String> {
    let value = draft.get(field).trim();
    if value.is_empty() {
        errors.push(ValidationError::MissingField(field));
        None
    } else {
        Some(value.to_string())
    }
}

/// Same shape check a browser applies to `<input type="email">`: one `@`,
/// non-empty local part and domain, no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

impl From<serde_json::Value> for PlacedOrder {
    fn from(raw: serde_json::Value) -> Self {
        let lifted: wire::OrderResponse = match &raw {
            serde_json::Value::Object(_) => {
                serde_json::from_value(raw.clone()).unwrap_or_default()
            }
            _ => wire::OrderResponse::default(),
        };
        PlacedOrder {
            id: lifted.id,
            status: lifted.status,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Ada Lovelace".into(),
            customer_id: "C-100".into(),
            product: "7".into(),
            quantity: "3".into(),
            product_cost: "12.50".into(),
            user_email: "ada@example.com".into(),
        }
    }

    #[test]
    fn test_valid_draft_converts() {
        let req = OrderRequest::try_from(&valid_draft()).unwrap();
        assert_eq!(req.customer_name, "Ada Lovelace");
        assert_eq!(req.product, ProductId::new(7));
        assert_eq!(req.quantity, 3);
        assert_eq!(req.product_cost, Decimal::new(1250, 2));
        assert_eq!(req.status, OrderStatus::Placed);
        assert_eq!(req.total(), Decimal::new(3750, 2));
    }

    #[test]
    fn test_payload_shape() {
        let req = OrderRequest::try_from(&valid_draft()).unwrap();
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "customer_name": "Ada Lovelace",
                "customer_id": "C-100",
                "product": 7,
                "quantity": 3,
                "product_cost": 12.5,
                "user_email": "ada@example.com",
                "status": "Order Placed"
            })
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut draft = valid_draft();
        draft.customer_name = "  Ada  ".into();
        draft.quantity = " 2 ".into();
        let req = OrderRequest::try_from(&draft).unwrap();
        assert_eq!(req.customer_name, "Ada");
        assert_eq!(req.quantity, 2);
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        match OrderRequest::try_from(&OrderDraft::default()) {
            Err(ValidationError::Multiple(errors)) => {
                assert_eq!(errors.len(), 6);
                assert!(errors.contains(&ValidationError::MissingField(DraftField::UserEmail)));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_quantity_rules() {
        let mut draft = valid_draft();
        draft.quantity = "0".into();
        assert_eq!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::QuantityBelowMinimum(0))
        );

        draft.quantity = "-4".into();
        assert_eq!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::QuantityBelowMinimum(-4))
        );

        draft.quantity = "2.5".into();
        assert!(matches!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::InvalidNumber { field: DraftField::Quantity, .. })
        ));

        draft.quantity = "3.0".into();
        assert_eq!(OrderRequest::try_from(&draft).unwrap().quantity, 3);

        draft.quantity = "0.0".into();
        assert_eq!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::QuantityBelowMinimum(0))
        );

        draft.quantity = "three".into();
        assert!(matches!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::InvalidNumber { field: DraftField::Quantity, .. })
        ));
    }

    #[test]
    fn test_cost_rules() {
        let mut draft = valid_draft();
        draft.product_cost = "-0.01".into();
        assert!(matches!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::NegativeCost(_))
        ));

        draft.product_cost = "1.234".into();
        assert!(matches!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::TooManyDecimalPlaces(_))
        ));

        draft.product_cost = "1.500".into();
        assert_eq!(
            OrderRequest::try_from(&draft).unwrap().product_cost,
            Decimal::new(1500, 3)
        );

        draft.product_cost = "0".into();
        assert!(OrderRequest::try_from(&draft).is_ok());
    }

    #[test]
    fn test_product_must_be_integer() {
        let mut draft = valid_draft();
        draft.product = "widget".into();
        assert!(matches!(
            OrderRequest::try_from(&draft),
            Err(ValidationError::InvalidNumber { field: DraftField::Product, .. })
        ));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("a@b"));
        assert!(is_email("first.last@example.co.uk"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@"));
        assert!(!is_email("a@b@c"));
        assert!(!is_email("a b@c.d"));
        assert!(!is_email("a@.com"));
    }

    #[test]
    fn test_placed_order_from_response() {
        let placed = PlacedOrder::from(json!({"id": 11, "status": "Order Placed", "quantity": 3}));
        assert_eq!(placed.id, Some(11));
        assert_eq!(placed.status.as_deref(), Some("Order Placed"));
        assert_eq!(placed.raw["quantity"], 3);

        let empty = PlacedOrder::from(serde_json::Value::Null);
        assert_eq!(empty.id, None);
    }
}
