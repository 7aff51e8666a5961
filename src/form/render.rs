//! Render model — what a front end should draw for the current form state.

use std::fmt;

pub const PLACEHOLDER_LOADING: &str = "Loading products...";
pub const PLACEHOLDER_FAILED: &str = "Failed to load products";
pub const PLACEHOLDER_SELECT: &str = "Select a product";
pub const PLACEHOLDER_EMPTY: &str = "No products available";

pub const SUBMIT_LABEL: &str = "Place Order";
pub const SUBMIT_LABEL_BUSY: &str = "Processing Order...";

/// One `<option>` of the product selector. Placeholders have an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelect {
    pub enabled: bool,
    pub options: Vec<SelectOption>,
    pub selected: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: &'static str,
}

// ─── Banner ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline status message shown after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Banner {
    pub const SUCCESS: Banner = Banner {
        kind: BannerKind::Success,
        title: "Order Placed Successfully!",
        message: "Your order has been submitted and saved to the database.",
    };

    pub const ERROR: Banner = Banner {
        kind: BannerKind::Error,
        title: "Order Submission Failed",
        message: "There was an error processing your order. Please try again.",
    };
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

// ─── Notification ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient toast-style message produced by a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: &'static str,
}

impl Notification {
    pub const SUBMITTED: Notification = Notification {
        level: NotificationLevel::Success,
        message: "Order Submitted Successfully",
    };

    pub const FAILED: Notification = Notification {
        level: NotificationLevel::Error,
        message: "Error Submitting Order",
    };
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

// ─── FormSnapshot ────────────────────────────────────────────────────────────

/// Everything a front end needs to draw the form, derived from
/// [`super::OrderFormState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub product_select: ProductSelect,
    /// Spinner under the selector while the catalog loads.
    pub loading_products: bool,
    /// Catalog error text; a retry control is shown alongside it.
    pub catalog_error: Option<String>,
    /// `quantity × cost` to cents, when both are filled in.
    pub total: Option<String>,
    pub submit: SubmitButton,
    pub banner: Option<Banner>,
}

impl FormSnapshot {
    pub fn retry_visible(&self) -> bool {
        self.catalog_error.is_some()
    }

    /// Options that stand for real products.
    pub fn product_options(&self) -> impl Iterator<Item = &SelectOption> {
        self.product_select
            .options
            .iter()
            .filter(|o| !o.is_placeholder())
    }
}
