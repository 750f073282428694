//! Rendering a response body for the console or an output file.
//!
//! Both renderers work on an already-parsed `serde_json::Value` and return
//! the bytes to write; the caller decides where they go.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;

/// File format selected by the output path's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// Plain, case-sensitive suffix match on the path as given. `None` means
    /// the format is unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".json") {
            Some(OutputFormat::Json)
        } else if name.ends_with(".csv") {
            Some(OutputFormat::Csv)
        } else {
            None
        }
    }
}

/// Pretty-print `value` with 2-space indentation and no trailing newline.
pub fn render_json(value: &Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Encode a JSON array of objects as CSV.
///
/// The header row is the key set of the first object, in document order.
/// Every later object is aligned to that header: missing keys and `null`
/// become empty cells, while a key the header lacks is an error. An empty
/// array yields a lone, empty header row. Records end with CRLF.
pub fn render_csv(value: &Value) -> Result<Vec<u8>, ApiError> {
    let rows = value.as_array().ok_or(ApiError::InvalidCsvShape)?;
    let records = rows
        .iter()
        .map(|row| row.as_object().ok_or(ApiError::InvalidCsvShape))
        .collect::<Result<Vec<&Map<String, Value>>, _>>()?;

    let Some(first) = records.first() else {
        return Ok(b"\r\n".to_vec());
    };
    let header: Vec<&str> = first.keys().map(String::as_str).collect();

    for (index, record) in records.iter().enumerate() {
        if let Some(field) = record.keys().find(|key| !first.contains_key(key.as_str())) {
            return Err(ApiError::UnexpectedCsvField {
                row: index + 1,
                field: field.clone(),
            });
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(&header)?;
    for record in &records {
        writer.write_record(header.iter().map(|key| cell(record.get(*key))))?;
    }
    debug!(columns = header.len(), rows = records.len(), "rendered csv");

    writer
        .into_inner()
        .map_err(|e| ApiError::Csv(e.into_error().into()))
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
