//! Conversions between memory-core records and Qdrant points.

use std::collections::HashMap;

use memory_core::{FieldCondition, Payload, RecordFilter, VectorRecord};
use qdrant_client::qdrant::{
    point_id::PointIdOptions, value::Kind, vectors::VectorsOptions, Condition, Filter, PointId,
    Range, RetrievedPoint, ScoredPoint, Value as QdrantValue, Vectors,
};
use serde_json::{Map, Number, Value};

pub(crate) fn to_qdrant_filter(filter: &RecordFilter) -> Filter {
    let conditions: Vec<Condition> = filter
        .must
        .iter()
        .map(|condition| match condition {
            FieldCondition::Matches { key, value } => Condition::matches(key.clone(), value.clone()),
            FieldCondition::LessThan { key, bound } => Condition::range(
                key.clone(),
                Range {
                    lt: Some(*bound),
                    ..Default::default()
                },
            ),
        })
        .collect();
    Filter::must(conditions)
}

pub(crate) fn to_qdrant_payload(payload: &Payload) -> HashMap<String, QdrantValue> {
    payload
        .iter()
        .map(|(k, v)| (k.clone(), json_to_qdrant(v)))
        .collect()
}

fn json_to_qdrant(value: &Value) -> QdrantValue {
    match value {
        Value::String(s) => QdrantValue::from(s.clone()),
        Value::Bool(b) => QdrantValue::from(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => QdrantValue::from(i),
            None => QdrantValue::from(n.as_f64().unwrap_or_default()),
        },
        Value::Null => QdrantValue { kind: Some(Kind::NullValue(0)) },
        other => QdrantValue::from(other.to_string()),
    }
}

fn qdrant_to_json(value: QdrantValue) -> Value {
    match value.kind {
        Some(Kind::StringValue(s)) => Value::String(s),
        Some(Kind::BoolValue(b)) => Value::Bool(b),
        Some(Kind::IntegerValue(i)) => Value::from(i),
        Some(Kind::DoubleValue(d)) => Number::from_f64(d).map(Value::Number).unwrap_or(Value::Null),
        Some(Kind::ListValue(list)) => {
            Value::Array(list.values.into_iter().map(qdrant_to_json).collect())
        }
        Some(Kind::StructValue(s)) => Value::Object(
            s.fields
                .into_iter()
                .map(|(k, v)| (k, qdrant_to_json(v)))
                .collect(),
        ),
        Some(Kind::NullValue(_)) | None => Value::Null,
    }
}

fn point_id(id: Option<PointId>) -> Option<u64> {
    match id?.point_id_options? {
        PointIdOptions::Num(n) => Some(n),
        PointIdOptions::Uuid(_) => None,
    }
}

fn dense_vector(vectors: Option<Vectors>) -> Vec<f32> {
    match vectors.and_then(|v| v.vectors_options) {
        Some(VectorsOptions::Vector(v)) => v.data,
        _ => Vec::new(),
    }
}

fn to_payload(payload: HashMap<String, QdrantValue>) -> Payload {
    payload
        .into_iter()
        .map(|(k, v)| (k, qdrant_to_json(v)))
        .collect::<Map<String, Value>>()
}

/// Points without a numeric id are not produced by this store and are skipped.
pub(crate) fn from_retrieved(point: RetrievedPoint) -> Option<VectorRecord> {
    Some(VectorRecord {
        id: point_id(point.id)?,
        vector: dense_vector(point.vectors),
        payload: to_payload(point.payload),
    })
}

pub(crate) fn from_scored(point: ScoredPoint) -> Option<(f32, VectorRecord)> {
    let score = point.score;
    let record = VectorRecord {
        id: point_id(point.id)?,
        vector: dense_vector(point.vectors),
        payload: to_payload(point.payload),
    };
    Some((score, record))
}
