//! Builds and sends the one request of a run.
//!
//! # Design
//! `Dispatcher` pairs a stateless `RestClient` with a `Transport`. All
//! user-facing messages go to the supplied writer (stdout in the binary), so
//! a whole run can be captured in tests. The result is an `Outcome` that the
//! binary maps to an exit code; unexpected failures come back as `Err`.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use restful_core::{ApiError, ClientConfig, Request, RestClient};
use tracing::debug;

use crate::handler;
use crate::transport::Transport;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was ok and its body was printed or saved.
    Completed,
    /// The server answered with status 400 or above.
    Failed,
    /// The request was refused before anything was sent.
    Rejected,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::Failed => 1,
            Outcome::Rejected => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

pub struct Dispatcher<T> {
    client: RestClient,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            client: RestClient::new(config),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request`, then hand the response to the handler.
    ///
    /// A POST without a body, or one whose body cannot be encoded, is
    /// reported and rejected without touching the network. A status outside
    /// 2xx is reported but does not stop the run.
    pub fn dispatch<W: Write>(&self, request: &Request, out: &mut W) -> Result<Outcome> {
        let http_request = match self.client.build_request(request) {
            Ok(http_request) => http_request,
            Err(ApiError::MissingBody) => {
                writeln!(out, "Data is required for POST method.")?;
                return Ok(Outcome::Rejected);
            }
            Err(ApiError::Serialization(reason)) => {
                debug!(%reason, "payload serialization failed");
                writeln!(out, "Invalid JSON format for data.")?;
                return Ok(Outcome::Rejected);
            }
            Err(e) => return Err(e.into()),
        };

        let response = self
            .transport
            .execute(&http_request)
            .with_context(|| format!("{} {} failed", http_request.method, http_request.url))?;

        if let Some(warning) = self.client.status_warning(&response) {
            debug!(status = response.status, "response outside 2xx");
            writeln!(out, "{warning}")?;
        }

        handler::handle(&self.client, &response, request.output.as_deref(), out)
    }
}
