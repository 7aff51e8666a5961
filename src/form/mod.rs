//! Order form — state container, render model and the async driver that
//! runs the fetch/submit data flow.
//!
//! ```rust,ignore
//! use order_entry::prelude::*;
//!
//! let client = OrderEntryClient::builder().base_url("http://localhost:8000").build()?;
//! let mut form = OrderFormView::mount(client).await;
//!
//! form.set_field(DraftField::Product, "1");
//! form.set_field(DraftField::Quantity, "3");
//! println!("total: {:?}", form.snapshot().total);
//!
//! if let Some(note) = form.submit().await {
//!     println!("{note}");
//! }
//! ```

pub mod backend;
pub mod render;
pub mod state;

pub use backend::OrderBackend;
pub use render::{Banner, BannerKind, FormSnapshot, Notification, NotificationLevel};
pub use state::{
    CatalogState, OrderFormState, SubmissionState, SubmissionStatus, SubmitRejected,
    CATALOG_ERROR_MESSAGE,
};

use crate::domain::order::DraftField;

/// The order-entry form bound to a backend.
///
/// Methods take `&mut self`, so a fetch or submit can never overlap another
/// one on the same form.
pub struct OrderFormView<B> {
    backend: B,
    state: OrderFormState,
}

impl<B: OrderBackend> OrderFormView<B> {
    /// A form whose catalog is still `Loading`; call [`Self::load_products`]
    /// next. [`Self::mount`] does both.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: OrderFormState::new(),
        }
    }

    pub async fn mount(backend: B) -> Self {
        let mut view = Self::new(backend);
        view.load_products().await;
        view
    }

    pub fn state(&self) -> &OrderFormState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.snapshot()
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    /// Fetch the catalog, replacing whatever was loaded before.
    pub async fn load_products(&mut self) {
        self.state.begin_catalog_load();
        let result = self.backend.fetch_products().await;
        self.state.apply_catalog(result);
    }

    /// Retry after a failed fetch. Returns `false` without fetching when the
    /// catalog has not failed.
    pub async fn retry_products(&mut self) -> bool {
        if !self.state.retry_catalog() {
            return false;
        }
        let result = self.backend.fetch_products().await;
        self.state.apply_catalog(result);
        true
    }

    /// Submit the draft once.
    ///
    /// Returns `None` when the submit control is disabled (catalog not
    /// loaded); otherwise the notification to show.
    pub async fn submit(&mut self) -> Option<Notification> {
        let request = match self.state.begin_submit() {
            Ok(request) => request,
            Err(SubmitRejected::Invalid(err)) => {
                tracing::error!("Error submitting order: {}", err);
                return Some(Notification::FAILED);
            }
            Err(rejected) => {
                tracing::debug!("Submit ignored: {}", rejected);
                return None;
            }
        };

        tracing::debug!(?request, "Submitting order data");
        let result = self.backend.place_order(&request).await;
        Some(self.state.finish_submit(result))
    }
}
