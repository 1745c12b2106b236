//! Error types for the Kafka seeding layer.

use thiserror::Error;

/// Errors that can occur while creating topics or producing records.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The transport rejected a record or batch send.
    #[error("failed to send to topic '{topic}': {source}")]
    Send {
        topic: String,
        source: rdkafka::error::KafkaError,
    },

    #[error("topic creation error: {0}")]
    TopicCreation(String),

    #[error("record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
