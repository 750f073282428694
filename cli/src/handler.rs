//! Reports a response and routes its body.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use restful_core::{render_json, HttpResponse, RestClient};

use crate::dispatch::Outcome;
use crate::writer;

/// Print the status line, then either stop on a non-ok response or hand the
/// body to the console or the output file.
///
/// The gate here is `HttpResponse::is_ok` (below 400), which is deliberately
/// wider than the 2xx check the dispatcher warns on.
pub fn handle<W: Write>(
    client: &RestClient,
    response: &HttpResponse,
    output: Option<&Path>,
    out: &mut W,
) -> Result<Outcome> {
    writeln!(out, "HTTP Status Code: {}", response.status)?;

    if !response.is_ok() {
        writeln!(out, "Error: {}", response.body)?;
        return Ok(Outcome::Failed);
    }

    match output {
        Some(path) => writer::save(client, response, path, out)?,
        None => {
            let body = client
                .parse_body(response)
                .context("response body is not valid JSON")?;
            writeln!(out, "{}", render_json(&body)?)?;
        }
    }
    Ok(Outcome::Completed)
}
