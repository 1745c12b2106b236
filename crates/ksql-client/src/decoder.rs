//! Decoder for the newline-delimited JSON stream returned by `/query`.

use serde_json::Value;

use crate::error::KsqlError;

/// Decode a buffered `/query` response body into the last row's columns.
///
/// Every non-blank line is a standalone JSON document. Data documents carry
/// `row.columns`; the decoder keeps only the most recent one, matching
/// result streams that emit a progressively-complete row followed by a
/// terminal `finalMessage` document. The final message carries no row data
/// and leaves the accumulated columns untouched.
///
/// A body with no data lines decodes to an empty sequence. A non-final line
/// that parses as JSON but lacks `row.columns` is an error, never silently
/// skipped.
pub fn decode_query_body(body: &str) -> Result<Vec<Value>, KsqlError> {
    let mut columns: Vec<Value> = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let document: Value = serde_json::from_str(line)?;

        if document.get("finalMessage").is_some() {
            continue;
        }

        match document.pointer("/row/columns") {
            Some(Value::Array(cols)) => columns = cols.clone(),
            _ => {
                return Err(KsqlError::MalformedRow {
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(columns)
}
