//! Low-level HTTP client — `OrderApiHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients).

use crate::domain::order::OrderRequest;
use crate::domain::product::wire::ProductsResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout (native only).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the order-management REST API.
#[derive(Clone)]
pub struct OrderApiHttp {
    base_url: String,
    client: Client,
}

impl OrderApiHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables, unused_mut))]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Products ─────────────────────────────────────────────────────────

    pub async fn get_products(&self, retry: RetryPolicy) -> Result<ProductsResponse, HttpError> {
        let url = format!("{}/api/products/", self.base_url);
        self.get(&url, retry).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    /// Create an order. Never retried.
    ///
    /// The status code alone decides success: once the backend answers `2xx`
    /// the order exists, whatever the body holds. A body that is not JSON is
    /// kept as a string, an empty one as `null`.
    pub async fn post_order(&self, request: &OrderRequest) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/api/orders/", self.base_url);
        let resp = self.send(&reqwest::Method::POST, &url, Some(request)).await?;
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Order created but its response body was unreadable: {}", e);
                String::new()
            }
        };
        Ok(lenient_json(&text))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, retry: RetryPolicy) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut attempt = 0;
        loop {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if !config.should_retry(&e) {
                        return Err(e);
                    }
                    if attempt >= config.max_retries {
                        return Err(HttpError::MaxRetriesExceeded {
                            attempts: attempt + 1,
                            last_error: e.to_string(),
                        });
                    }
                    let delay = match &e {
                        HttpError::RateLimited {
                            retry_after_ms: Some(ms),
                        } => Duration::from_millis(*ms),
                        _ => config.delay_for_attempt(attempt),
                    };
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying request to {}: {}",
                        url,
                        e
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let resp = self.send(method, url, body).await?;
        let bytes = resp.bytes().await.map_err(transport_error)?;
        // 201/204 with an empty body still counts as success.
        let payload: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(payload).map_err(|e| HttpError::Decode(e.to_string()))
    }

    /// Send one request and map any non-`2xx` status to an error.
    async fn send<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(b) = body {
            // `json` also sets `Content-Type: application/json`.
            req = req.json(b);
        }

        let resp = req.send().await.map_err(transport_error)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let retry_after_ms = retry_after_ms(resp.headers());
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "{} {} failed: {}", method, url, body_text);
        Err(match HttpError::from_status(status.as_u16(), body_text) {
            HttpError::RateLimited { .. } => HttpError::RateLimited { retry_after_ms },
            other => other,
        })
    }
}

fn transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

/// `Retry-After` in delta-seconds form, as milliseconds. HTTP dates are
/// ignored and fall back to the backoff schedule.
fn retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    let secs: u64 = headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()?;
    Some(secs.saturating_mul(1000))
}

fn lenient_json(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}
