//! Relation references: bare ids or embedded entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::EntityId;

/// The minimal `{ "id": n }` object used to set or change a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationPayload {
    /// Id of the linked entity
    pub id: EntityId,
}

impl RelationPayload {
    /// Creates a payload linking to `id`.
    pub const fn new(id: EntityId) -> Self {
        Self { id }
    }
}

/// Builds the relation payload submitted instead of the full related entity.
pub const fn build_relation_payload(id: EntityId) -> RelationPayload {
    RelationPayload::new(id)
}

/// Reads the related entity's id out of whatever shape the backend sent.
///
/// A number is the id itself; an object yields its `id` member, numeric
/// strings included. Absent, `null`, non-numeric and non-integral values
/// resolve to `None`.
///
/// # Examples
///
/// ```
/// use clubadmin_core::{EntityId, resolve_relation_id};
/// use serde_json::json;
///
/// assert_eq!(resolve_relation_id(Some(&json!(5))), Some(EntityId::new(5)));
/// assert_eq!(resolve_relation_id(Some(&json!({ "id": "7" }))), Some(EntityId::new(7)));
/// assert_eq!(resolve_relation_id(Some(&json!({}))), None);
/// ```
pub fn resolve_relation_id(raw: Option<&Value>) -> Option<EntityId> {
    let raw = raw?;
    match raw {
        Value::Number(_) => coerce_id(raw),
        Value::Object(object) => coerce_id(object.get("id")?),
        _ => None,
    }
}

fn coerce_id(value: &Value) -> Option<EntityId> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral))
            .map(EntityId::new),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
                .map(EntityId::new)
        }
        _ => None,
    }
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
        .then_some(value as i64)
}
