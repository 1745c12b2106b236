//! Tailing consumer that logs every record on a topic.

use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use rdkafka::ClientConfig;

use crate::error::SeedError;

/// Subscribe to a topic and log each message as it arrives.
///
/// Reads from the earliest offset with auto-commit off, so repeated runs
/// replay the topic from the start. Runs until the caller cancels it.
pub async fn log_messages(brokers: &str, group_id: &str, topic: &str) -> Result<(), SeedError> {
    let consumer: StreamConsumer = ClientConfig::new()
        .set("bootstrap.servers", brokers)
        .set("group.id", group_id)
        .set("auto.offset.reset", "earliest")
        .set("enable.auto.commit", "false")
        .create()?;

    consumer.subscribe(&[topic])?;

    tracing::info!("Tailing topic '{topic}', Ctrl-C to exit");

    loop {
        let message = consumer.recv().await?;
        let key = String::from_utf8_lossy(message.key().unwrap_or_default());
        let payload = String::from_utf8_lossy(message.payload().unwrap_or_default());

        tracing::info!(
            "Received message at offset {} key={key} payload={payload}",
            message.offset()
        );
    }
}
