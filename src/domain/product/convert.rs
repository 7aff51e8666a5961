//! Conversion: ProductResponse → Product (TryFrom + validation).

use super::{wire, Catalog, Product, ProductValidationError};
use rust_decimal::Decimal;

impl TryFrom<wire::ProductResponse> for Product {
    type Error = ProductValidationError;

    fn try_from(source: wire::ProductResponse) -> Result<Self, Self::Error> {
        let name = source
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(ProductValidationError::MissingName(source.id))?;

        if source.cost < Decimal::ZERO {
            return Err(ProductValidationError::NegativeCost(source.id, source.cost));
        }

        Ok(Product {
            id: source.id,
            name,
            cost: source.cost,
        })
    }
}

impl From<wire::ProductsResponse> for Catalog {
    fn from(entries: wire::ProductsResponse) -> Self {
        let mut products = Vec::with_capacity(entries.len());
        for entry in entries {
            match Product::try_from(entry) {
                Ok(product) => products.push(product),
                Err(err) => tracing::warn!("Skipping catalog entry: {}", err),
            }
        }
        Catalog::new(products)
    }
}
