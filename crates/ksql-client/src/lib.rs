//! Minimal client for the ksqlDB REST API.
//!
//! ksqlDB exposes two HTTP endpoints with different response shapes: `/ksql`
//! executes a one-shot statement and answers with a single JSON document,
//! while `/query` streams results back as newline-delimited JSON terminated
//! by a final-message marker. [`KsqlClient`] wraps both; the streamed shape
//! is handled by [`decode_query_body`].

pub mod client;
pub mod decoder;
pub mod error;
pub mod statement;

pub use client::KsqlClient;
pub use decoder::decode_query_body;
pub use error::KsqlError;
pub use statement::{format_statement, StatementRequest};
