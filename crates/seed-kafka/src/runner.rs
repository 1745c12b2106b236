//! The continuous and batch seeding loops.

use std::time::Duration;

use crate::error::SeedError;
use crate::producer::RecordSink;
use crate::record::{KeyedMessage, User};

/// Pacing interval, in milliseconds, used when the caller passes none.
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Produce one record per interval, indefinitely.
///
/// Each iteration sleeps for `interval`, pulls the next record, and
/// attempts exactly one send. Failures are logged and the loop moves on to
/// the next record after the next interval: delivery is best-effort,
/// at-most-once, with no retry of the failed record. There is no internal
/// exit condition for an infinite generator; the loop ends when the caller
/// cancels it (the sleep and the send are both cancellation-safe await
/// points) or when a finite test generator runs dry.
pub async fn run_continuous<S, G>(sink: &S, mut generator: G, topic: &str, interval: Duration)
where
    S: RecordSink + ?Sized,
    G: Iterator<Item = User>,
{
    tracing::info!(
        "Producing one user to '{topic}' every {}ms, Ctrl-C to exit",
        interval.as_millis()
    );

    loop {
        tokio::time::sleep(interval).await;

        let Some(user) = generator.next() else {
            break;
        };

        match send_user(sink, topic, &user).await {
            Ok(()) => tracing::info!("Inserted user {user:?}"),
            Err(e) => tracing::warn!("Failed to insert user: {e}"),
        }
    }
}

async fn send_user<S>(sink: &S, topic: &str, user: &User) -> Result<(), SeedError>
where
    S: RecordSink + ?Sized,
{
    let message = KeyedMessage::from_user(user)?;
    sink.send_one(topic, &message).await
}

/// Materialize `count` records and send them as one batch.
///
/// Records are pulled synchronously with no pacing and sent in generation
/// order. The first serialization or delivery failure propagates; there is
/// no partial-batch reporting.
pub async fn run_batch<S, G>(
    sink: &S,
    generator: G,
    count: usize,
    topic: &str,
) -> Result<(), SeedError>
where
    S: RecordSink + ?Sized,
    G: Iterator<Item = User>,
{
    let users: Vec<User> = generator.take(count).collect();
    tracing::info!("Inserting {} users into '{topic}'", users.len());

    let messages = users
        .iter()
        .map(KeyedMessage::from_user)
        .collect::<Result<Vec<_>, _>>()?;

    sink.send_all(topic, &messages).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Sink that records every attempt and fails on scripted call numbers.
    struct ScriptedSink {
        // (message key, whether the send succeeded), in call order
        sends: Mutex<Vec<(String, bool)>>,
        batches: Mutex<Vec<Vec<KeyedMessage>>>,
        fail_on: Vec<usize>,
    }

    impl ScriptedSink {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                sends: Mutex::new(Vec::new()),
                batches: Mutex::new(Vec::new()),
                fail_on,
            }
        }

        fn send_error(topic: &str) -> SeedError {
            SeedError::Send {
                topic: topic.to_string(),
                source: rdkafka::error::KafkaError::MessageProduction(
                    rdkafka::types::RDKafkaErrorCode::QueueFull,
                ),
            }
        }
    }

    #[async_trait]
    impl RecordSink for ScriptedSink {
        async fn send_one(&self, topic: &str, message: &KeyedMessage) -> Result<(), SeedError> {
            let mut sends = self.sends.lock().unwrap();
            let failing = self.fail_on.contains(&(sends.len() + 1));
            sends.push((message.key().to_string(), !failing));

            if failing {
                Err(Self::send_error(topic))
            } else {
                Ok(())
            }
        }

        async fn send_all(&self, topic: &str, messages: &[KeyedMessage]) -> Result<(), SeedError> {
            let mut batches = self.batches.lock().unwrap();
            let failing = self.fail_on.contains(&(batches.len() + 1));
            batches.push(messages.to_vec());

            if failing {
                Err(Self::send_error(topic))
            } else {
                Ok(())
            }
        }
    }

    fn scripted_users(count: usize) -> Vec<User> {
        (1..=count as i64)
            .map(|id| User {
                id,
                email: format!("user{id}@example.com"),
                name: format!("User{id}"),
                phone: "(555) 000-0000".to_string(),
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_continuous_survives_a_send_failure() {
        let sink = ScriptedSink::new(vec![2]);
        let users = scripted_users(3);

        run_continuous(&sink, users.into_iter(), "users", Duration::from_millis(500)).await;

        let sends = sink.sends.lock().unwrap();
        // All three records were attempted, in generation order, despite
        // the second send failing.
        assert_eq!(
            *sends,
            vec![
                ("1".to_string(), true),
                ("2".to_string(), false),
                ("3".to_string(), true),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_continuous_paces_by_the_interval() {
        let sink = ScriptedSink::new(vec![]);
        let users = scripted_users(4);
        let interval = Duration::from_millis(500);

        let started = tokio::time::Instant::now();
        run_continuous(&sink, users.into_iter(), "users", interval).await;

        // Four records plus the final sleep that discovers exhaustion.
        assert_eq!(started.elapsed(), interval * 5);
        assert_eq!(sink.sends.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_batch_issues_exactly_one_send() {
        let sink = ScriptedSink::new(vec![]);
        let users = scripted_users(10);

        run_batch(&sink, users.into_iter(), 5, "users").await.unwrap();

        let batches = sink.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);

        let keys: Vec<&str> = batches[0].iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec!["1", "2", "3", "4", "5"]);
        assert!(sink.sends.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_batch_of_zero_sends_an_empty_batch() {
        let sink = ScriptedSink::new(vec![]);

        run_batch(&sink, scripted_users(3).into_iter(), 0, "users")
            .await
            .unwrap();

        let batches = sink.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_empty());
    }

    #[tokio::test]
    async fn test_batch_propagates_send_failure() {
        let sink = ScriptedSink::new(vec![1]);

        let result = run_batch(&sink, scripted_users(5).into_iter(), 5, "users").await;

        assert!(matches!(result, Err(SeedError::Send { .. })));
    }
}
