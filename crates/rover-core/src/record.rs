//! Record types as stored by the remote record store

use serde::{Deserialize, Deserializer, Serialize};

use crate::command::Command;

/// One stored device-status event. `status` stays free text on the read side
/// because the store accepts anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub date: String,
}

impl Record {
    /// The id as an integer, if it parses as one
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

/// Payload for a create call; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub name: String,
    pub status: Command,
    pub ip: String,
    pub date: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
