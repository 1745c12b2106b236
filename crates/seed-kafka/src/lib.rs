//! Kafka side of the seed tool: topic creation, synthetic user generation,
//! and the continuous / batch producers.
//!
//! The seeding loops are written against the [`RecordSink`] trait so they
//! can be exercised without a broker; [`SeedProducer`] is the rdkafka-backed
//! implementation used by the CLI.

pub mod consumer;
pub mod error;
pub mod generator;
pub mod producer;
pub mod record;
pub mod runner;
pub mod topic;

pub use error::SeedError;
pub use generator::UserGenerator;
pub use producer::{RecordSink, SeedProducer};
pub use record::{KeyedMessage, User};
pub use runner::{run_batch, run_continuous, DEFAULT_INTERVAL_MS};
pub use topic::TopicSpec;
