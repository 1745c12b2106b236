//! Seeding operations: topic specs, ksql DDL, and the composed seed flows.

use anyhow::Context;
use ksql_client::KsqlClient;
use seed_kafka::{SeedProducer, TopicSpec};
use serde_json::{Map, Value};

use crate::DIFF_TOPIC;

/// Spec for a user topic: single partition, compacted so the latest record
/// per user id wins.
pub fn users_topic_spec(topic: &str) -> TopicSpec {
    TopicSpec::new(topic).with_config("cleanup.policy", "compact")
}

/// Spec for the diff topic; plain retention, defaults otherwise.
pub fn diff_topic_spec(topic: &str) -> TopicSpec {
    TopicSpec::new(topic)
}

/// The CREATE TABLE statement exposing a user topic to ksql.
pub fn users_table_ddl(topic: &str) -> String {
    format!(
        "CREATE TABLE {topic} (
      id BIGINT,
      name VARCHAR,
      phone VARCHAR,
      email VARCHAR
    ) WITH (
      KAFKA_TOPIC = '{topic}',
      VALUE_FORMAT = 'JSON',
      KEY = 'id'
    )"
    )
}

/// Create the compacted users topic.
pub async fn create_users_topic(producer: &SeedProducer, topic: &str) -> anyhow::Result<()> {
    tracing::info!("Creating users topic '{topic}'");
    producer
        .create_topic(&users_topic_spec(topic))
        .await
        .with_context(|| format!("Failed to create topic '{topic}'"))?;
    tracing::info!("Done creating topic '{topic}'");
    Ok(())
}

/// Register the ksql table over a user topic.
pub async fn create_users_table(client: &KsqlClient, topic: &str) -> anyhow::Result<()> {
    tracing::info!("Creating ksql table for '{topic}'");
    let response = client
        .execute_statement(&users_table_ddl(topic), None)
        .await
        .with_context(|| format!("Failed to create ksql table for '{topic}'"))?;
    tracing::info!("Done creating ksql table for '{topic}': {response}");
    Ok(())
}

/// Later half of the users-diff seed: the new-users topic and its table.
pub async fn diff_seed(producer: &SeedProducer, client: &KsqlClient) -> anyhow::Result<()> {
    tracing::info!("Creating diff topic '{DIFF_TOPIC}'");
    producer
        .create_topic(&diff_topic_spec(DIFF_TOPIC))
        .await
        .with_context(|| format!("Failed to create topic '{DIFF_TOPIC}'"))?;
    create_users_table(client, DIFF_TOPIC).await
}

/// Full seed: users topic, users table, then the diff-processing half.
pub async fn full_seed(
    producer: &SeedProducer,
    client: &KsqlClient,
    topic: &str,
) -> anyhow::Result<()> {
    create_users_topic(producer, topic).await?;
    create_users_table(client, topic).await?;
    diff_seed(producer, client).await
}

/// Run a ksql query from the beginning of the topic and return the last
/// row's column values.
pub async fn execute_ksql(client: &KsqlClient, query: &str) -> anyhow::Result<Vec<Value>> {
    let mut properties = Map::new();
    properties.insert(
        "auto.offset.reset".to_string(),
        Value::String("earliest".to_string()),
    );

    client
        .execute_query(query, Some(properties))
        .await
        .context("ksql query failed")
}
