//! Orders sub-client — place an order.

use crate::client::OrderEntryClient;
use crate::domain::order::{OrderRequest, PlacedOrder};
use crate::error::OrderEntryError;

pub struct Orders<'a> {
    pub(crate) client: &'a OrderEntryClient,
}

impl<'a> Orders<'a> {
    /// Submit a validated order. Never retried: a second POST could create a
    /// duplicate order.
    pub async fn place(&self, request: &OrderRequest) -> Result<PlacedOrder, OrderEntryError> {
        tracing::debug!(
            product = %request.product,
            quantity = request.quantity,
            product_cost = %request.product_cost,
            "Submitting order"
        );
        let resp = self.client.http.post_order(request).await?;
        let placed = PlacedOrder::from(resp);
        tracing::info!(id = ?placed.id, "Order placed");
        Ok(placed)
    }
}
