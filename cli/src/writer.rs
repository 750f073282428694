//! Persists a response body to disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use restful_core::{render_csv, render_json, ApiError, HttpResponse, OutputFormat, RestClient};
use tracing::debug;

/// Write the response body to `path` in the format its suffix selects.
///
/// Unsupported suffixes and non-array CSV bodies are reported on `out` and
/// leave the filesystem untouched. The body is only parsed once the format
/// is known to be supported.
pub fn save<W: Write>(
    client: &RestClient,
    response: &HttpResponse,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    let Some(format) = OutputFormat::from_path(path) else {
        writeln!(out, "Unsupported output format.")?;
        return Ok(());
    };

    let body = client
        .parse_body(response)
        .context("response body is not valid JSON")?;
    let bytes = match format {
        OutputFormat::Json => render_json(&body)?.into_bytes(),
        OutputFormat::Csv => match render_csv(&body) {
            Ok(bytes) => bytes,
            Err(ApiError::InvalidCsvShape) => {
                writeln!(out, "Invalid data format for CSV output.")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        },
    };

    fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), ?format, bytes = bytes.len(), "saved response");
    Ok(())
}
