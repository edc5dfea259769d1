//! League and team wire models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gateway::Resource;
use crate::relation::RelationPayload;
use crate::types::EntityId;

/// A league as returned by the `/liga` endpoint.
///
/// The team relation arrives either as a bare id or as an embedded team, so it
/// is kept raw and read through [`resolve_relation_id`](crate::resolve_relation_id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Identifier
    #[serde(default)]
    pub id: EntityId,

    /// Display name
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,

    /// Related team, id or embedded object
    #[serde(rename = "equipo", default)]
    pub team: Option<Value>,
}

impl Resource for League {
    const PATH: &'static str = "liga";
    const LABEL: &'static str = "liga";
    type Draft = LeagueDraft;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Partial league sent on update: the name and the team link only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueDraft {
    /// League being updated
    pub id: EntityId,

    /// Trimmed display name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Minimal team reference
    #[serde(rename = "equipo")]
    pub team: RelationPayload,
}

/// A team, listed as a league's candidate relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Identifier
    #[serde(default)]
    pub id: EntityId,

    /// Display name
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
}

impl Resource for Team {
    const PATH: &'static str = "equipo";
    const LABEL: &'static str = "equipo";
    type Draft = Team;

    fn id(&self) -> EntityId {
        self.id
    }
}
