//! Payload schema for chat turns.
//!
//! Encodes a [`Turn`] into a [`VectorRecord`] and decodes records back. Decoding
//! is the store-read boundary: role labels are normalized here and records
//! missing `role` or `content` are rejected.

use serde_json::Value;

use crate::record::{
    Payload, ScoredRecord, VectorRecord, FIELD_CONTENT, FIELD_ROLE, FIELD_TIMESTAMP,
    FIELD_USER_ID,
};
use crate::types::{StoredRole, Turn};

/// Builds the record persisted for `turn`.
pub fn encode_turn(turn: &Turn) -> VectorRecord {
    let mut payload = Payload::new();
    payload.insert(FIELD_USER_ID.to_string(), Value::from(turn.user_id.clone()));
    payload.insert(FIELD_ROLE.to_string(), Value::from(turn.role.as_str()));
    payload.insert(FIELD_CONTENT.to_string(), Value::from(turn.content.clone()));
    payload.insert(FIELD_TIMESTAMP.to_string(), Value::from(turn.timestamp));

    VectorRecord {
        id: turn.id,
        vector: turn.embedding.clone(),
        payload,
    }
}

/// Decodes a stored record. Returns `None` for malformed payloads.
///
/// A missing `timestamp` decodes as `0.0` and a missing `user_id` as the empty
/// string, so such records sort first and never match a real user.
pub fn decode_turn(record: VectorRecord) -> Option<Turn> {
    let payload = &record.payload;
    let role = payload
        .get(FIELD_ROLE)
        .and_then(Value::as_str)
        .and_then(StoredRole::parse)?
        .normalize();
    let content = payload.get(FIELD_CONTENT).and_then(Value::as_str)?.to_string();
    let user_id = payload
        .get(FIELD_USER_ID)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let timestamp = payload
        .get(FIELD_TIMESTAMP)
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    Some(Turn {
        id: record.id,
        user_id,
        role,
        content,
        timestamp,
        embedding: record.vector,
    })
}

/// Decodes a list of records, dropping malformed ones.
pub fn decode_turns(records: impl IntoIterator<Item = VectorRecord>) -> Vec<Turn> {
    records.into_iter().filter_map(decode_turn).collect()
}

/// Decodes scored search hits in their ranked order, dropping malformed ones.
pub fn decode_scored(hits: impl IntoIterator<Item = ScoredRecord>) -> Vec<(f32, Turn)> {
    hits.into_iter()
        .filter_map(|hit| decode_turn(hit.record).map(|turn| (hit.score, turn)))
        .collect()
}
