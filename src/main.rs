//! Command-line interface for ksql-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Create the compacted users topic, its ksql table, and the diff half
//! ksql-seed full-seed
//!
//! # Insert 50 random users into the users topic
//! ksql-seed insert --count 50
//!
//! # Continuously produce one user every 250 milliseconds until Ctrl-C
//! ksql-seed produce --interval-ms 250
//!
//! # Execute a ksql query from the earliest offset
//! ksql-seed ksql "SELECT * FROM users WHERE id = 7"
//!
//! # Tail the users topic, logging every message
//! ksql-seed consume
//! ```

use std::time::Duration;

use clap::{Parser, Subcommand};
use ksql_client::KsqlClient;
use ksql_seed::seed;
use ksql_seed::{KafkaOpts, KsqlOpts, DEFAULT_TOPIC};
use seed_kafka::{run_batch, run_continuous, SeedProducer, UserGenerator, DEFAULT_INTERVAL_MS};

#[derive(Parser)]
#[command(name = "ksql-seed")]
#[command(about = "Seed a local Kafka + ksqlDB stack with topics, synthetic users, and queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the compacted users topic
    CreateTopic {
        #[command(flatten)]
        kafka: KafkaOpts,

        /// Topic to create
        #[arg(long, short = 't', default_value = DEFAULT_TOPIC)]
        topic: String,
    },

    /// Create a ksql table over a user topic
    CreateTable {
        #[command(flatten)]
        ksql: KsqlOpts,

        /// Topic the table reads from
        #[arg(long, short = 't', default_value = DEFAULT_TOPIC)]
        topic: String,
    },

    /// Insert a batch of random users
    Insert {
        #[command(flatten)]
        kafka: KafkaOpts,

        /// Number of users to insert
        #[arg(long, short = 'c')]
        count: usize,

        /// Topic to insert into
        #[arg(long, short = 't', default_value = DEFAULT_TOPIC)]
        topic: String,
    },

    /// Continuously produce one random user per interval until Ctrl-C
    Produce {
        #[command(flatten)]
        kafka: KafkaOpts,

        /// Milliseconds to wait between records
        #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
        interval_ms: u64,

        /// Topic to produce to
        #[arg(long, short = 't', default_value = DEFAULT_TOPIC)]
        topic: String,
    },

    /// Execute a ksql query from the earliest offset and print the result
    Ksql {
        #[command(flatten)]
        ksql: KsqlOpts,

        /// The query to execute
        query: String,
    },

    /// Users topic and table, then the users-diff seed
    FullSeed {
        #[command(flatten)]
        kafka: KafkaOpts,

        #[command(flatten)]
        ksql: KsqlOpts,

        /// Topic for the primary users table
        #[arg(long, short = 't', default_value = DEFAULT_TOPIC)]
        topic: String,
    },

    /// Later half of the seed, for users-diff processing
    DiffSeed {
        #[command(flatten)]
        kafka: KafkaOpts,

        #[command(flatten)]
        ksql: KsqlOpts,
    },

    /// Tail a topic, logging every message
    Consume {
        #[command(flatten)]
        kafka: KafkaOpts,

        /// Topic to tail
        #[arg(long, short = 't', default_value = DEFAULT_TOPIC)]
        topic: String,

        /// Consumer group id
        #[arg(long, default_value = "ksql-seed-log")]
        group_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateTopic { kafka, topic } => {
            let producer = SeedProducer::new(&kafka.brokers)?;
            seed::create_users_topic(&producer, &topic).await?;
        }
        Commands::CreateTable { ksql, topic } => {
            let client = KsqlClient::new(&ksql.ksql_endpoint)?;
            seed::create_users_table(&client, &topic).await?;
        }
        Commands::Insert {
            kafka,
            count,
            topic,
        } => {
            let producer = SeedProducer::new(&kafka.brokers)?;
            run_batch(&producer, UserGenerator::new(), count, &topic).await?;
        }
        Commands::Produce {
            kafka,
            interval_ms,
            topic,
        } => {
            let producer = SeedProducer::new(&kafka.brokers)?;
            run_continuous(
                &producer,
                UserGenerator::new(),
                &topic,
                Duration::from_millis(interval_ms),
            )
            .await;
        }
        Commands::Ksql { ksql, query } => {
            let client = KsqlClient::new(&ksql.ksql_endpoint)?;
            let columns = seed::execute_ksql(&client, &query).await?;
            println!("{}", serde_json::Value::Array(columns));
        }
        Commands::FullSeed { kafka, ksql, topic } => {
            let producer = SeedProducer::new(&kafka.brokers)?;
            let client = KsqlClient::new(&ksql.ksql_endpoint)?;
            seed::full_seed(&producer, &client, &topic).await?;
        }
        Commands::DiffSeed { kafka, ksql } => {
            let producer = SeedProducer::new(&kafka.brokers)?;
            let client = KsqlClient::new(&ksql.ksql_endpoint)?;
            seed::diff_seed(&producer, &client).await?;
        }
        Commands::Consume {
            kafka,
            topic,
            group_id,
        } => {
            seed_kafka::consumer::log_messages(&kafka.brokers, &group_id, &topic).await?;
        }
    }

    Ok(())
}
