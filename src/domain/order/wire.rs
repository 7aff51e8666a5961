//! Wire types for the order endpoint.

use serde::Deserialize;

/// The lifted keys of a `POST /api/orders/` response body. Any other keys
/// the backend sends are ignored here and kept in [`super::PlacedOrder::raw`].
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrderResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}
