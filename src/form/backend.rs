//! The seam between the form and whatever serves the catalog and accepts orders.

use crate::domain::order::{OrderRequest, PlacedOrder};
use crate::domain::product::Catalog;
use crate::error::OrderEntryError;
use async_trait::async_trait;

/// Backend operations the order form depends on.
///
/// [`crate::client::OrderEntryClient`] implements this over HTTP; tests and
/// offline front ends can provide their own.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait OrderBackend {
    /// `GET /api/products/`
    async fn fetch_products(&self) -> Result<Catalog, OrderEntryError>;

    /// `POST /api/orders/`, exactly once.
    async fn place_order(&self, request: &OrderRequest) -> Result<PlacedOrder, OrderEntryError>;
}

#[cfg(feature = "http")]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl OrderBackend for crate::client::OrderEntryClient {
    async fn fetch_products(&self) -> Result<Catalog, OrderEntryError> {
        self.products().list().await
    }

    async fn place_order(&self, request: &OrderRequest) -> Result<PlacedOrder, OrderEntryError> {
        self.orders().place(request).await
    }
}
