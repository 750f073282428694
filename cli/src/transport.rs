//! Executes an `HttpRequest` over the network.
//!
//! # Design
//! The core only describes requests; this is the one place that opens a
//! socket. `Transport` is the seam tests replace with a canned response.

use anyhow::Result;
use restful_core::{HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;
use ureq::{Agent, RequestBuilder};

pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking transport backed by a ureq agent.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
/// come back as data and the caller decides what they mean. No timeout is
/// configured: an unresponsive server blocks the call.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let mut response = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(request.url.as_str()), &request.headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(request.url.as_str()), &request.headers);
                match request.body.as_deref() {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}
