//! HTTP client for the two ksqlDB execution endpoints.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::decoder::decode_query_body;
use crate::error::KsqlError;
use crate::statement::StatementRequest;

/// Content type ksqlDB requires on `/ksql` statement calls.
const STATEMENT_CONTENT_TYPE: &str = "application/vnd.ksql.v1+json;charset=UTF-8";

/// Content type for `/query` streaming calls.
const QUERY_CONTENT_TYPE: &str = "application/json";

/// Client for a single ksqlDB server.
///
/// The endpoint is fixed at construction and the underlying HTTP client is
/// built once and reused across calls. No read timeout is set: `/query`
/// responses for push queries stay open until the server sends its final
/// message.
pub struct KsqlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl KsqlClient {
    /// Create a client for the given base URL, e.g. `http://localhost:8088`.
    pub fn new(endpoint: &str) -> Result<Self, KsqlError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Execute a one-shot statement (DDL or admin) against `/ksql`.
    ///
    /// Returns the server's JSON response document. A non-2xx response
    /// fails with [`KsqlError::Statement`] carrying the decoded error body;
    /// if that body itself is malformed, the decode failure propagates.
    pub async fn execute_statement(
        &self,
        query: &str,
        properties: Option<Map<String, Value>>,
    ) -> Result<Value, KsqlError> {
        let url = format!("{}/ksql", self.endpoint);
        let body = StatementRequest::new(query, properties);

        tracing::debug!("Executing statement against {url}: {}", body.ksql);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, STATEMENT_CONTENT_TYPE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await?;
            return Err(KsqlError::Statement { status, body });
        }

        Ok(response.json().await?)
    }

    /// Execute a streaming pull/push query against `/query`.
    ///
    /// The response body is a newline-delimited JSON stream; the whole body
    /// is read and handed to [`decode_query_body`], yielding the column
    /// values of the last row observed before the final message.
    pub async fn execute_query(
        &self,
        query: &str,
        properties: Option<Map<String, Value>>,
    ) -> Result<Vec<Value>, KsqlError> {
        let url = format!("{}/query", self.endpoint);
        let body = StatementRequest::new(query, properties);

        tracing::debug!("Executing query against {url}: {}", body.ksql);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, QUERY_CONTENT_TYPE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await?;
            return Err(KsqlError::Statement { status, body });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes of query results", body.len());

        decode_query_body(&body)
    }
}
