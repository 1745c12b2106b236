//! Kafka producer and the send seam used by the seeding loops.

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::ClientConfig;

use crate::error::SeedError;
use crate::record::KeyedMessage;
use crate::topic::TopicSpec;

/// Delivery timeout for individual sends.
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Abstraction over the record transport.
///
/// The production implementation is [`SeedProducer`]; tests substitute
/// scripted sinks to exercise the seeding loops without a broker.
#[async_trait]
pub trait RecordSink {
    /// Send a single keyed message and wait for its delivery report.
    async fn send_one(&self, topic: &str, message: &KeyedMessage) -> Result<(), SeedError>;

    /// Send a batch of keyed messages; fails as a whole on the first
    /// delivery failure, with no partial-success reporting.
    async fn send_all(&self, topic: &str, messages: &[KeyedMessage]) -> Result<(), SeedError>;
}

/// Kafka-backed producer for the seed tool.
///
/// Holds one connected `FutureProducer` for the lifetime of a session; the
/// broker list is kept so admin operations can share the configuration.
pub struct SeedProducer {
    producer: FutureProducer,
    brokers: String,
}

impl SeedProducer {
    /// Create a producer for the given brokers, e.g. `localhost:9092`.
    pub fn new(brokers: &str) -> Result<Self, SeedError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self {
            producer,
            brokers: brokers.to_string(),
        })
    }

    /// Create a topic, tolerating "already exists" results.
    pub async fn create_topic(&self, spec: &TopicSpec) -> Result<(), SeedError> {
        let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", &self.brokers)
            .create()?;

        let mut new_topic = NewTopic::new(
            &spec.name,
            spec.partitions,
            TopicReplication::Fixed(spec.replication),
        );
        for (key, value) in &spec.config {
            new_topic = new_topic.set(key, value);
        }

        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(5)));

        match admin_client.create_topics(&[new_topic], &opts).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(topic_name) => {
                            tracing::info!("Topic '{topic_name}' created");
                        }
                        Err((topic_name, err)) => {
                            if err.to_string().contains("already exists") {
                                tracing::info!("Topic '{topic_name}' already exists");
                            } else {
                                return Err(SeedError::TopicCreation(format!(
                                    "failed to create topic {topic_name}: {err}"
                                )));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                return Err(SeedError::TopicCreation(format!(
                    "failed to create topics: {e}"
                )));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl RecordSink for SeedProducer {
    async fn send_one(&self, topic: &str, message: &KeyedMessage) -> Result<(), SeedError> {
        let record = FutureRecord::to(topic)
            .key(message.key())
            .payload(message.payload());

        self.producer
            .send(record, SEND_TIMEOUT)
            .await
            .map_err(|(err, _)| SeedError::Send {
                topic: topic.to_string(),
                source: err,
            })?;

        Ok(())
    }

    async fn send_all(&self, topic: &str, messages: &[KeyedMessage]) -> Result<(), SeedError> {
        // Enqueue everything first, then wait for every delivery report.
        let mut deliveries = Vec::with_capacity(messages.len());
        for message in messages {
            let record = FutureRecord::to(topic)
                .key(message.key())
                .payload(message.payload());
            deliveries.push(self.producer.send(record, SEND_TIMEOUT));
        }

        for delivery in deliveries {
            delivery.await.map_err(|(err, _)| SeedError::Send {
                topic: topic.to_string(),
                source: err,
            })?;
        }

        Ok(())
    }
}
