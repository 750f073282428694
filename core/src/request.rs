//! The single request a run performs.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::http::HttpMethod;

/// What the user asked for: one call, plus where its result should go.
///
/// `endpoint` is appended to the base URL without escaping. `body` is only
/// meaningful for POST, where it is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Request {
    pub method: HttpMethod,
    pub endpoint: String,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Request {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            body: None,
            output: None,
        }
    }

    pub fn post(endpoint: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: HttpMethod::Post,
            endpoint: endpoint.into(),
            body,
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}
