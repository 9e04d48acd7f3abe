//! # Domain Model
//!
//! Payload types exchanged with the job-board API. Every type here is plain data:
//! the slices decide how payloads are stored and combined.
//!
//! The backend is not consistent about identifiers (MongoDB `_id` strings in some
//! collections, numeric ids in others), so every `id` field goes through
//! [`flexible_id`], which accepts either and stores a `String`.

pub mod admin;
pub mod company;
pub mod company_type;
pub mod student;
pub mod subscription;

pub use admin::*;
pub use company::*;
pub use company_type::*;
pub use student::*;
pub use subscription::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an identifier that may be sent as a string or a number.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(alias = "_id", deserialize_with = "flexible_id")]
        id: String,
    }

    #[test]
    fn test_flexible_id_accepts_strings_and_numbers() {
        let row: Row = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(row.id, "42");
        let row: Row = serde_json::from_value(json!({"_id": "64f0c2"})).unwrap();
        assert_eq!(row.id, "64f0c2");
    }

    #[test]
    fn test_flexible_id_rejects_other_shapes() {
        assert!(serde_json::from_value::<Row>(json!({"id": [1]})).is_err());
        assert!(serde_json::from_value::<Row>(json!({"id": null})).is_err());
    }
}
