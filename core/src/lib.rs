//! Synchronous client core for a JSON REST API.
//!
//! # Overview
//! Builds `HttpRequest` values, inspects `HttpResponse` values and renders
//! response bodies as JSON or CSV, all without touching the network or the
//! filesystem (host-does-IO pattern). The `restful` binary performs the
//! actual round-trip and writes the results.
//!
//! # Design
//! - `RestClient` is stateless: it holds only an immutable `ClientConfig`.
//! - A run is one `Request` in, one `HttpResponse` out; nothing is retried.
//! - Two status checks live side by side: `HttpResponse::is_success`
//!   (strict 2xx) drives a warning, `HttpResponse::is_ok` (below 400) drives
//!   the failure exit.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod request;

pub use client::RestClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
pub use output::{render_csv, render_json, OutputFormat};
pub use request::Request;
