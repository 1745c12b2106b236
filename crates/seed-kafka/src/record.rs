//! The seeded record type and its keyed wire form.

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// A synthetic user record.
///
/// Ids are drawn from a small bounded range so that repeated sends collide
/// on the same logical user and act as metadata overwrites under topic
/// compaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
}

/// A record ready for the wire: partitioning key plus JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedMessage {
    key: String,
    payload: String,
}

impl KeyedMessage {
    /// Build the keyed message for a user.
    ///
    /// The key is always the string form of the user id, keeping
    /// compaction and partitioning aligned with logical identity.
    pub fn from_user(user: &User) -> Result<Self, SeedError> {
        Ok(Self {
            key: user.id.to_string(),
            payload: serde_json::to_string(user)?,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}
