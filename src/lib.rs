//! ksql-seed library: shared CLI options and seeding orchestration.
//!
//! The heavy lifting lives in the member crates: `ksql-client` talks to the
//! ksqlDB REST API and `seed-kafka` owns topic admin, user generation, and
//! the producers. This crate wires them to the command-line surface.

use clap::Parser;

pub mod seed;

/// Default topic seeded with user records.
pub const DEFAULT_TOPIC: &str = "users";

/// Topic holding the later half of the users-diff seed.
pub const DIFF_TOPIC: &str = "new_users";

#[derive(Parser, Clone, Debug)]
pub struct KafkaOpts {
    /// Kafka brokers (comma-separated)
    #[arg(long, default_value = "localhost:9092", env = "KAFKA_BROKERS")]
    pub brokers: String,
}

#[derive(Parser, Clone, Debug)]
pub struct KsqlOpts {
    /// ksqlDB server endpoint
    #[arg(long, default_value = "http://localhost:8088", env = "KSQL_ENDPOINT")]
    pub ksql_endpoint: String,
}
