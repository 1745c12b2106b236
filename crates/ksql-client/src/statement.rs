//! Statement formatting for the ksqlDB REST API.

use serde::Serialize;
use serde_json::{Map, Value};

/// Collapse a (possibly multi-line) query into the single-line,
/// semicolon-terminated form ksqlDB expects.
///
/// Not idempotent: every call appends another `;`, so call it exactly once
/// per statement.
pub fn format_statement(query: &str) -> String {
    let mut statement = query.replace('\n', " ");
    statement.push(';');
    statement
}

/// Request body shared by the `/ksql` and `/query` endpoints.
///
/// ksqlDB distinguishes "no properties supplied" from "empty properties
/// object", so `streamsProperties` is omitted entirely when the bag is
/// absent rather than serialized as `{}` or `null`.
#[derive(Debug, Clone, Serialize)]
pub struct StatementRequest {
    pub ksql: String,
    #[serde(
        rename = "streamsProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub streams_properties: Option<Map<String, Value>>,
}

impl StatementRequest {
    /// Build a request body from a raw query and an optional property bag.
    pub fn new(query: &str, properties: Option<Map<String, Value>>) -> Self {
        Self {
            ksql: format_statement(query),
            streams_properties: properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_statement_collapses_newlines() {
        let query = "CREATE TABLE users (\n  id BIGINT,\n  name VARCHAR\n)";
        let statement = format_statement(query);

        assert!(!statement.contains('\n'));
        assert_eq!(statement, "CREATE TABLE users (   id BIGINT,   name VARCHAR );");
    }

    #[test]
    fn test_format_statement_terminates_with_single_semicolon() {
        let statement = format_statement("SELECT * FROM users");

        assert!(statement.ends_with(';'));
        assert_eq!(statement.matches(';').count(), 1);
    }

    #[test]
    fn test_format_statement_single_line_passthrough() {
        assert_eq!(format_statement("SHOW TOPICS"), "SHOW TOPICS;");
    }

    #[test]
    fn test_request_body_omits_absent_properties() {
        let body = StatementRequest::new("SELECT * FROM users", None);
        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(json, r#"{"ksql":"SELECT * FROM users;"}"#);
        assert!(!json.contains("streamsProperties"));
    }

    #[test]
    fn test_request_body_keeps_empty_properties() {
        let body = StatementRequest::new("SELECT * FROM users", Some(Map::new()));
        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(
            json,
            r#"{"ksql":"SELECT * FROM users;","streamsProperties":{}}"#
        );
    }

    #[test]
    fn test_request_body_serializes_properties() {
        let mut properties = Map::new();
        properties.insert(
            "auto.offset.reset".to_string(),
            Value::String("earliest".to_string()),
        );

        let body = StatementRequest::new("SELECT * FROM users", Some(properties));
        let json = serde_json::to_string(&body).unwrap();

        assert!(json.contains(r#""streamsProperties":{"auto.offset.reset":"earliest"}"#));
    }
}
