//! High-level client — `OrderEntryClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::order::client::Orders;
use crate::domain::product::client::Products;
use crate::error::OrderEntryError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{OrderApiHttp, RetryPolicy};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::product::client::Products as ProductsClient;

/// The primary entry point for talking to the order-management backend.
///
/// `client.products()` and `client.orders()` expose one sub-client per
/// endpoint family.
#[derive(Clone)]
pub struct OrderEntryClient {
    pub(crate) http: OrderApiHttp,
    /// Retry policy for the catalog GET. Orders are never retried.
    pub(crate) catalog_retry: RetryPolicy,
}

impl OrderEntryClient {
    pub fn builder() -> OrderEntryClientBuilder {
        OrderEntryClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OrderEntryClientBuilder {
    base_url: String,
    timeout: Duration,
    catalog_retry: RetryPolicy,
}

impl Default for OrderEntryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            catalog_retry: RetryPolicy::None,
        }
    }
}

impl OrderEntryClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (ignored on WASM, where the browser decides).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn catalog_retry(mut self, policy: RetryPolicy) -> Self {
        self.catalog_retry = policy;
        self
    }

    pub fn build(self) -> Result<OrderEntryClient, OrderEntryError> {
        Ok(OrderEntryClient {
            http: OrderApiHttp::with_timeout(&self.base_url, self.timeout)?,
            catalog_retry: self.catalog_retry,
        })
    }
}
