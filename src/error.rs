//! Error types for the click-to-forecast pipeline

use thiserror::Error;

/// Failure taxonomy for the lookup chain.
///
/// Every variant is terminal for the click that raised it: the
/// pipeline logs it, leaves the view's prior forecast untouched and
/// performs no retries.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport or HTTP-status failure talking to an upstream service
    #[error("network failure: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The reverse geocoder matched nothing for the query.
    /// Recoverable in the sense that it is an expected outcome for
    /// clicks on open water, not a fault.
    #[error("no geocoding result for query '{query}'")]
    NoResult { query: String },

    /// Upstream returned a body that does not match the expected schema
    #[error("malformed {endpoint} response: {detail}")]
    MalformedResponse {
        endpoint: &'static str,
        detail: String,
    },
}

impl LookupError {
    /// Create a no-result error for the given query
    pub fn no_result<S: Into<String>>(query: S) -> Self {
        Self::NoResult {
            query: query.into(),
        }
    }

    /// Create a malformed-response error for the given endpoint
    pub fn malformed<D: ToString>(endpoint: &'static str, detail: D) -> Self {
        Self::MalformedResponse {
            endpoint,
            detail: detail.to_string(),
        }
    }

    /// Whether this is the recoverable zero-match outcome
    #[must_use]
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResult { .. })
    }
}
