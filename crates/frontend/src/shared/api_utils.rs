//! API utilities for talking to the REST backend.
//!
//! Provides helpers for constructing API URLs and fetching JSON documents.

use crate::repositories::RepositoryError;
use gloo_net::http::Request;
use serde_json::Value;

/// Get the base URL for API requests.
///
/// The backend is served from the same origin as the page.
///
/// # Returns
/// - Origin like "http://localhost:8080"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/API/1.1/remitoVentaBean");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build the URL of a single record: `{collection}/{percent-encoded id}`.
pub fn entity_url(collection_url: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection_url.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

/// GET a JSON document.
///
/// Non-2xx responses become [`RepositoryError::Status`] so callers can tell a
/// 404 apart from other failures.
pub async fn get_json(url: &str) -> Result<Value, RepositoryError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| RepositoryError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RepositoryError::Status {
            status: response.status(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| RepositoryError::Decode(e.to_string()))
}
