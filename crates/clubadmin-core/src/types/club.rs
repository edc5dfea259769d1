//! Club wire model and submission payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gateway::Resource;
use crate::types::EntityId;

/// A club as returned by the `/club` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Club {
    /// Identifier, `0` for a club that does not exist yet
    #[serde(default)]
    pub id: EntityId,

    /// Display name
    #[serde(rename = "nombre", default)]
    pub name: String,

    /// Postal address
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,

    /// Contact phone
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    /// Registration date as stored by the backend (`YYYY-MM-DDTHH:MM:SS`)
    #[serde(rename = "fechaAlta", default)]
    pub registration_date: Option<String>,

    /// Image reference
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

impl Resource for Club {
    const PATH: &'static str = "club";
    const LABEL: &'static str = "club";
    type Draft = ClubDraft;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Payload sent on club create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubDraft {
    /// Present only when updating an existing club
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Postal address, verbatim from the form
    #[serde(rename = "direccion")]
    pub address: String,

    /// Contact phone, verbatim from the form
    #[serde(rename = "telefono")]
    pub phone: String,

    /// Registration date in storage format
    #[serde(rename = "fechaAlta")]
    pub registration_date: String,

    /// Image reference, serialized as `null` when absent
    #[serde(rename = "imagen")]
    pub image: Option<String>,

    /// Empty relation collections required by the creation contract
    #[serde(flatten)]
    pub collections: Option<NewClubCollections>,
}

/// Relation collections a newly created club must carry, all empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewClubCollections {
    /// Seasons
    #[serde(rename = "temporadas")]
    pub seasons: Vec<Value>,

    /// News items
    #[serde(rename = "noticias")]
    pub news: Vec<Value>,

    /// Article types
    #[serde(rename = "tipoarticulos")]
    pub article_types: Vec<Value>,

    /// Users
    #[serde(rename = "usuarios")]
    pub users: Vec<Value>,
}
