//! Infinite synthetic user generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::User;

/// Inclusive range user ids are drawn from.
///
/// Deliberately small: colliding ids simulate metadata updates to the same
/// logical user, which is what compacted topics are seeded to exercise.
pub const USER_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=20;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Ines", "Jun", "Kwame",
    "Lena", "Mateo", "Nadia", "Omar", "Priya", "Quinn", "Rosa", "Sven", "Tomoko",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "seed.dev"];

/// Infinite, pull-based sequence of random users.
///
/// Implements [`Iterator`] and never yields `None`, so one generator can
/// feed an unbounded producer session. Any other `Iterator<Item = User>`
/// (for instance a finite scripted sequence) stands in for it in tests.
pub struct UserGenerator {
    rng: StdRng,
}

impl UserGenerator {
    /// Entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn next_user(&mut self) -> User {
        let id = self.rng.random_range(USER_ID_RANGE);
        let name = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let domain = EMAIL_DOMAINS[self.rng.random_range(0..EMAIL_DOMAINS.len())];
        let email = format!(
            "{}.{}@{domain}",
            name.to_lowercase(),
            self.rng.random_range(1..1000u32)
        );
        let phone = format!(
            "({:03}) {:03}-{:04}",
            self.rng.random_range(200..1000u32),
            self.rng.random_range(100..1000u32),
            self.rng.random_range(0..10000u32)
        );

        User {
            id,
            email,
            name: name.to_string(),
            phone,
        }
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for UserGenerator {
    type Item = User;

    fn next(&mut self) -> Option<User> {
        Some(self.next_user())
    }
}
