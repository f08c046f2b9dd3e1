//! Vector store records and payload filters.
//!
//! A record is what the vector store persists: an id, the embedding and a loosely
//! typed JSON payload. Payload fields are validated only when a record is decoded
//! into a [`Turn`](crate::Turn), so malformed records can be skipped instead of
//! failing a whole query.

use serde_json::{Map, Value};

/// Payload attached to a stored vector.
pub type Payload = Map<String, Value>;

/// Payload field holding the owning user's id.
pub const FIELD_USER_ID: &str = "user_id";
/// Payload field holding the role label.
pub const FIELD_ROLE: &str = "role";
/// Payload field holding the message text.
pub const FIELD_CONTENT: &str = "content";
/// Payload field holding the write time in seconds.
pub const FIELD_TIMESTAMP: &str = "timestamp";

/// A stored point: id, vector and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorRecord {
    pub id: u64,
    pub vector: Vec<f32>,
    pub payload: Payload,
}

/// A record returned by similarity search, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub score: f32,
    pub record: VectorRecord,
}

/// A single condition on a payload field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCondition {
    /// Field equals the given string.
    Matches { key: String, value: String },
    /// Field is a number strictly below `bound`.
    LessThan { key: String, bound: f64 },
}

impl FieldCondition {
    pub fn matches(key: impl Into<String>, value: impl Into<String>) -> Self {
        FieldCondition::Matches {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn less_than(key: impl Into<String>, bound: f64) -> Self {
        FieldCondition::LessThan {
            key: key.into(),
            bound,
        }
    }

    /// Evaluates the condition against a payload. Missing fields never match.
    pub fn check(&self, payload: &Payload) -> bool {
        match self {
            FieldCondition::Matches { key, value } => {
                payload.get(key).and_then(Value::as_str) == Some(value.as_str())
            }
            FieldCondition::LessThan { key, bound } => payload
                .get(key)
                .and_then(Value::as_f64)
                .map(|v| v < *bound)
                .unwrap_or(false),
        }
    }
}

/// Conjunction of field conditions (all must hold).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub must: Vec<FieldCondition>,
}

impl RecordFilter {
    pub fn must(conditions: impl IntoIterator<Item = FieldCondition>) -> Self {
        Self {
            must: conditions.into_iter().collect(),
        }
    }

    /// Records belonging to `user_id`.
    pub fn for_user(user_id: &str) -> Self {
        Self::must([FieldCondition::matches(FIELD_USER_ID, user_id)])
    }

    /// Records written strictly before `cutoff` (seconds since epoch).
    pub fn older_than(cutoff: f64) -> Self {
        Self::must([FieldCondition::less_than(FIELD_TIMESTAMP, cutoff)])
    }

    pub fn check(&self, payload: &Payload) -> bool {
        self.must.iter().all(|c| c.check(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_user_filter_matches_only_that_user() {
        let filter = RecordFilter::for_user("u1");
        assert!(filter.check(&payload(json!({"user_id": "u1"}))));
        assert!(!filter.check(&payload(json!({"user_id": "u2"}))));
        assert!(!filter.check(&payload(json!({}))));
    }

    #[test]
    fn test_older_than_is_strict_and_skips_missing_timestamp() {
        let filter = RecordFilter::older_than(100.0);
        assert!(filter.check(&payload(json!({"timestamp": 99.5}))));
        assert!(!filter.check(&payload(json!({"timestamp": 100.0}))));
        assert!(!filter.check(&payload(json!({"role": "user"}))));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(RecordFilter::default().check(&payload(json!({"x": 1}))));
    }
}
