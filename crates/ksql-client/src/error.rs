//! Error types for the ksqlDB client.

use thiserror::Error;

/// Errors surfaced by the ksqlDB client and result decoder.
#[derive(Debug, Error)]
pub enum KsqlError {
    /// Non-2xx response from the server, carrying its decoded JSON error
    /// body rather than a generic HTTP error.
    #[error("ksql request failed with status {status}: {body}")]
    Statement {
        status: reqwest::StatusCode,
        body: serde_json::Value,
    },

    /// A non-final query-stream line parsed as JSON but carried no row data.
    #[error("malformed query result line (missing row.columns): {line}")]
    MalformedRow { line: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statement_error_carries_server_body() {
        let body = json!({
            "@type": "statement_error",
            "error_code": 40001,
            "message": "Line: 1, Col: 8: SELECT column cannot be resolved.",
        });

        let err = KsqlError::Statement {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: body.clone(),
        };

        // The decoded body must survive verbatim, both structurally and in
        // the rendered message.
        if let KsqlError::Statement { status, body: held } = &err {
            assert_eq!(*status, reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(*held, body);
        } else {
            panic!("expected Statement variant");
        }
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("statement_error"));
    }

    #[test]
    fn test_malformed_row_error_names_the_line() {
        let err = KsqlError::MalformedRow {
            line: r#"{"unexpected":true}"#.to_string(),
        };

        assert!(err.to_string().contains("row.columns"));
        assert!(err.to_string().contains("unexpected"));
    }
}
