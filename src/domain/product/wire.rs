//! Wire types for the product catalog endpoint.

use crate::shared::{serde_util, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of `GET /api/products/`.
#[derive(Deserialize, Debug, Clone)]
pub struct ProductResponse {
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "serde_util::decimal_lenient")]
    pub cost: Decimal,
}

/// The endpoint returns a bare JSON array.
pub type ProductsResponse = Vec<ProductResponse>;
