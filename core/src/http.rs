//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and inspects `HttpResponse` values; the binary owns the socket.
//! Keeping both sides as owned values means the whole request/response
//! handling can be tested without a network.

use std::fmt;

use serde::Deserialize;

/// Content type sent with every POST payload.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP method for a request. Only the two verbs the client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `RestClient::build_request`. The caller executes it and returns
/// the matching `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Strict success: status in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The broader "ok" flag: any status below 400.
    pub fn is_ok(&self) -> bool {
        self.status < 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn success_range_is_2xx_only() {
        assert!(!response(199).is_success());
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(response(299).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
    }

    #[test]
    fn ok_flag_covers_everything_below_400() {
        assert!(response(200).is_ok());
        assert!(response(304).is_ok());
        assert!(response(399).is_ok());
        assert!(!response(400).is_ok());
        assert!(!response(500).is_ok());
    }

    #[test]
    fn redirect_status_is_ok_but_not_success() {
        let r = response(301);
        assert!(r.is_ok());
        assert!(!r.is_success());
    }

    #[test]
    fn method_displays_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
