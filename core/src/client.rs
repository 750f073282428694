//! Stateless HTTP request builder and response inspector.
//!
//! # Design
//! `RestClient` holds only a `ClientConfig` and carries no mutable state
//! between calls. `build_request` turns a `Request` into an `HttpRequest`;
//! the caller executes the round-trip and passes the `HttpResponse` back to
//! `status_warning` and `parse_body`. Nothing here touches the network.

use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
use crate::request::Request;

/// Synchronous, stateless client for a JSON REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: ClientConfig,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Full URL for `endpoint`: base URL and fragment concatenated as-is.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url(), endpoint)
    }

    /// Build the wire request for `request`.
    ///
    /// GET carries no body and no headers. POST requires a body, which is
    /// encoded as JSON and sent with `JSON_CONTENT_TYPE`.
    pub fn build_request(&self, request: &Request) -> Result<HttpRequest, ApiError> {
        let url = self.url_for(&request.endpoint);
        let http = match request.method {
            HttpMethod::Get => HttpRequest {
                method: HttpMethod::Get,
                url,
                headers: Vec::new(),
                body: None,
            },
            HttpMethod::Post => {
                let payload = request.body.as_ref().ok_or(ApiError::MissingBody)?;
                let body = serde_json::to_string(payload)
                    .map_err(|e| ApiError::Serialization(e.to_string()))?;
                HttpRequest {
                    method: HttpMethod::Post,
                    url,
                    headers: vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())],
                    body: Some(body),
                }
            }
        };
        debug!(method = %http.method, url = %http.url, "built request");
        Ok(http)
    }

    /// Early, non-fatal check: a message for any status outside `[200, 300)`.
    pub fn status_warning(&self, response: &HttpResponse) -> Option<String> {
        if response.is_success() {
            return None;
        }
        Some(format!(
            "Error: Request failed with HTTP Status Code - {}",
            response.status
        ))
    }

    /// Parse the response body as an arbitrary JSON value.
    pub fn parse_body(&self, response: &HttpResponse) -> Result<Value, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
