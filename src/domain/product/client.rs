//! Products sub-client — catalog fetch.

use crate::client::OrderEntryClient;
use crate::domain::product::Catalog;
use crate::error::OrderEntryError;

pub struct Products<'a> {
    pub(crate) client: &'a OrderEntryClient,
}

impl<'a> Products<'a> {
    /// Fetch the catalog. Entries that fail validation are skipped.
    pub async fn list(&self) -> Result<Catalog, OrderEntryError> {
        let resp = self
            .client
            .http
            .get_products(self.client.catalog_retry.clone())
            .await?;
        let catalog = Catalog::from(resp);
        tracing::info!(count = catalog.len(), "Products fetched");
        Ok(catalog)
    }
}
