//! Order form state container — app-owned, crate-provided update logic.
//!
//! Every method here is synchronous and pure with respect to I/O; the async
//! driver in [`super::OrderFormView`] feeds it backend results.

use super::render::{
    Banner, FormSnapshot, Notification, ProductSelect, SelectOption, SubmitButton,
    PLACEHOLDER_EMPTY, PLACEHOLDER_FAILED, PLACEHOLDER_LOADING, PLACEHOLDER_SELECT, SUBMIT_LABEL,
    SUBMIT_LABEL_BUSY,
};
use crate::domain::order::{DraftField, OrderDraft, OrderRequest, PlacedOrder, ValidationError};
use crate::domain::product::Catalog;
use crate::error::OrderEntryError;
use std::fmt;

/// Shown in place of the catalog after a failed fetch.
pub const CATALOG_ERROR_MESSAGE: &str = "Failed to load products. Please try again.";

// ─── CatalogState ────────────────────────────────────────────────────────────

/// Product fetch: `Loading → Loaded | Failed`, `Failed → Loading` on retry.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Loaded(Catalog),
    Failed(String),
}

impl CatalogState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// Outcome of the last submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success,
    Error,
}

/// `Idle(None) → Submitting → Idle(Success | Error)`; no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle(SubmissionStatus),
    Submitting,
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle(SubmissionStatus::None)
    }
}

/// Why a submit did not produce a request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    /// A submit is already in flight (button disabled).
    InFlight,
    /// The catalog is loading or failed (button disabled).
    CatalogUnavailable,
    /// The draft does not convert into a valid payload.
    Invalid(ValidationError),
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::InFlight => write!(f, "A submission is already in progress"),
            SubmitRejected::CatalogUnavailable => write!(f, "Products are not loaded"),
            SubmitRejected::Invalid(err) => write!(f, "{}", err),
        }
    }
}

// ─── OrderFormState ──────────────────────────────────────────────────────────

/// Local state of the order form: draft, catalog and submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFormState {
    draft: OrderDraft,
    catalog: CatalogState,
    submission: SubmissionState,
}

impl OrderFormState {
    /// A freshly mounted form: empty draft, catalog loading.
    pub fn new() -> Self {
        Self {
            draft: OrderDraft::new(),
            catalog: CatalogState::Loading,
            submission: SubmissionState::default(),
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting)
    }

    /// Status of the last finished attempt; `None` while one is in flight.
    pub fn status(&self) -> SubmissionStatus {
        match self.submission {
            SubmissionState::Idle(status) => status,
            SubmissionState::Submitting => SubmissionStatus::None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.catalog.is_loaded()
    }

    // ── Catalog ──────────────────────────────────────────────────────────

    pub fn begin_catalog_load(&mut self) {
        self.catalog = CatalogState::Loading;
    }

    /// Re-enter `Loading` after a failure. Returns `false` (and changes
    /// nothing) unless the catalog is currently `Failed`.
    pub fn retry_catalog(&mut self) -> bool {
        if matches!(self.catalog, CatalogState::Failed(_)) {
            self.catalog = CatalogState::Loading;
            true
        } else {
            false
        }
    }

    pub fn apply_catalog(&mut self, result: Result<Catalog, OrderEntryError>) {
        self.catalog = match result {
            Ok(catalog) => CatalogState::Loaded(catalog),
            Err(err) => {
                tracing::error!("Could not fetch the products: {}", err);
                CatalogState::Failed(CATALOG_ERROR_MESSAGE.to_string())
            }
        };
    }

    // ── Draft ────────────────────────────────────────────────────────────

    /// Update one field. Selecting a product copies its catalog cost into
    /// `product_cost`, replacing whatever was typed there.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        if field == DraftField::Product {
            if let Some(product) = self
                .catalog
                .catalog()
                .filter(|c| !c.is_empty())
                .and_then(|c| c.find_by_value(&value))
            {
                self.draft.product_cost = product.cost.to_string();
            }
        }
        self.draft.set(field, value);
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Start a submit: clears the banner, enters `Submitting` and returns the
    /// payload to send.
    ///
    /// A disabled submit (in flight, catalog not loaded) leaves the state
    /// untouched. An invalid draft ends the attempt straight away with the
    /// error banner and keeps the draft.
    pub fn begin_submit(&mut self) -> Result<OrderRequest, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        let Some(catalog) = self.catalog.catalog() else {
            return Err(SubmitRejected::CatalogUnavailable);
        };

        let request = OrderRequest::try_from(&self.draft).and_then(|req| {
            if catalog.find(&req.product).is_some() {
                Ok(req)
            } else {
                Err(ValidationError::UnknownProduct(req.product))
            }
        });

        match request {
            Ok(req) => {
                self.submission = SubmissionState::Submitting;
                Ok(req)
            }
            Err(err) => {
                self.submission = SubmissionState::Idle(SubmissionStatus::Error);
                Err(SubmitRejected::Invalid(err))
            }
        }
    }

    /// Settle a submit. Success clears the draft; failure keeps it for
    /// correction.
    pub fn finish_submit(&mut self, result: Result<PlacedOrder, OrderEntryError>) -> Notification {
        match result {
            Ok(_) => {
                self.draft.clear();
                self.submission = SubmissionState::Idle(SubmissionStatus::Success);
                Notification::SUBMITTED
            }
            Err(err) => {
                tracing::error!("Error submitting order: {}", err);
                self.submission = SubmissionState::Idle(SubmissionStatus::Error);
                Notification::FAILED
            }
        }
    }

    // ── Render ───────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> FormSnapshot {
        let options = match &self.catalog {
            CatalogState::Loading => vec![SelectOption::placeholder(PLACEHOLDER_LOADING)],
            CatalogState::Failed(_) => vec![SelectOption::placeholder(PLACEHOLDER_FAILED)],
            CatalogState::Loaded(catalog) if catalog.is_empty() => {
                vec![SelectOption::placeholder(PLACEHOLDER_EMPTY)]
            }
            CatalogState::Loaded(catalog) => {
                let mut options = Vec::with_capacity(catalog.len() + 1);
                options.push(SelectOption::placeholder(PLACEHOLDER_SELECT));
                options.extend(catalog.products().iter().map(|p| SelectOption {
                    value: p.id.to_string(),
                    label: p.label(),
                }));
                options
            }
        };

        let banner = match self.status() {
            SubmissionStatus::None => None,
            SubmissionStatus::Success => Some(Banner::SUCCESS),
            SubmissionStatus::Error => Some(Banner::ERROR),
        };

        FormSnapshot {
            product_select: ProductSelect {
                enabled: self.catalog.is_loaded(),
                options,
                selected: self.draft.product.clone(),
            },
            loading_products: matches!(self.catalog, CatalogState::Loading),
            catalog_error: match &self.catalog {
                CatalogState::Failed(message) => Some(message.clone()),
                _ => None,
            },
            total: self.draft.total_display(),
            submit: SubmitButton {
                enabled: self.can_submit(),
                label: if self.is_submitting() {
                    SUBMIT_LABEL_BUSY
                } else {
                    SUBMIT_LABEL
                },
            },
            banner,
        }
    }
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new()
    }
}
