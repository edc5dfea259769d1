//! Remote entity gateway trait.
//!
//! This module defines the `EntityGateway` trait that every remote backend
//! must satisfy, plus the `Resource` trait that ties an entity type to its
//! endpoint and submission payload.
//!
//! # Implementations
//!
//! - `HttpGateway` (in `clubadmin-client`): REST calls through reqwest
//! - `MockGateway` (in `clubadmin-client`): in-memory, records calls
//!
//! # Example
//!
//! ```rust,ignore
//! use clubadmin_core::{Club, EntityGateway, EntityId};
//!
//! async fn show(gateway: &dyn EntityGateway<Club>) -> clubadmin_core::Result<()> {
//!     let club = gateway.get(EntityId::new(3)).await?;
//!     println!("{}", club.name);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::types::{EntityId, Page, PageRequest};

/// An entity type served by one REST resource.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Path segment below the server URL, e.g. `club`.
    const PATH: &'static str;

    /// Label used in logs and error messages.
    const LABEL: &'static str;

    /// Body sent on create and update.
    type Draft: Serialize + Send + Sync;

    /// Identifier of this entity.
    fn id(&self) -> EntityId;
}

/// Fetch, list, create and update entities of one type.
///
/// Every call is a fresh remote round trip: no caching, no retries. A failed
/// call surfaces exactly one error to the caller.
#[async_trait]
pub trait EntityGateway<R: Resource>: Send + Sync {
    /// Fetches one entity by id.
    async fn get(&self, id: EntityId) -> Result<R>;

    /// Fetches one page of entities.
    async fn get_page(&self, request: &PageRequest) -> Result<Page<R>>;

    /// Creates an entity and returns the id the backend assigned.
    async fn create(&self, draft: &R::Draft) -> Result<EntityId>;

    /// Updates an entity and returns its id.
    async fn update(&self, draft: &R::Draft) -> Result<EntityId>;
}
