//! # order-entry
//!
//! Client-side order entry for an order-management REST backend: load the
//! product catalog, edit an order draft, show the running total and place
//! the order.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes and domain models (always available, WASM-safe)
//! 2. **HTTP API** — `OrderApiHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `OrderEntryClient` with nested sub-clients
//! 4. **Form** — `OrderFormState` (pure state + render model) and
//!    `OrderFormView` (async driver over any `OrderBackend`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_entry::prelude::*;
//!
//! let client = OrderEntryClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let catalog = client.products().list().await?;
//! let mut form = OrderFormView::mount(client).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `OrderEntryClient` — the primary entry point for the backend.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Form ────────────────────────────────────────────────────────────

/// Order form state, render model and driver.
pub mod form;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{money, ProductId};

    // Domain types
    pub use crate::domain::order::{
        DraftField, OrderDraft, OrderRequest, OrderStatus, PlacedOrder, ValidationError,
    };
    pub use crate::domain::product::{Catalog, Product, ProductValidationError};

    // Errors
    pub use crate::error::{HttpError, OrderEntryError};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        OrderEntryClient, OrderEntryClientBuilder, OrdersClient, ProductsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Form
    pub use crate::form::{
        Banner, BannerKind, CatalogState, FormSnapshot, Notification, NotificationLevel,
        OrderBackend, OrderFormState, OrderFormView, SubmissionState, SubmissionStatus,
        SubmitRejected,
    };
}
