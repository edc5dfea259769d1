//! REST implementation of [`EntityGateway`].
//!
//! | operation | request |
//! |---|---|
//! | `get` | `GET {server}/{path}/{id}` |
//! | `get_page` | `GET {server}/{path}?page=&size=&sort={field},{dir}` |
//! | `create` | `POST {server}/{path}` with the draft as JSON |
//! | `update` | `PUT {server}/{path}` with the draft as JSON |
//!
//! `create` and `update` answer with the entity id as a bare JSON number.

use async_trait::async_trait;
use clubadmin_core::{EntityGateway, EntityId, Error, Page, PageRequest, Resource, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Gateway for one resource type over a shared reqwest client.
pub struct HttpGateway<R> {
    client: Client,
    base_url: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpGateway<R> {
    /// Creates a gateway rooted at `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            _resource: PhantomData,
        }
    }

    /// URL of the resource collection, e.g. `http://host/club`.
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, R::PATH)
    }

    fn entity_url(&self, id: EntityId) -> String {
        format!("{}/{id}", self.collection_url())
    }

    fn page_url(&self, request: &PageRequest) -> Result<Url> {
        let params = [
            ("page", request.page.to_string()),
            ("size", request.size.to_string()),
            ("sort", request.sort_param()),
        ];
        Url::parse_with_params(&self.collection_url(), &params)
            .map_err(|e| Error::transport_with_source(format!("list {} URL", R::LABEL), e))
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        request.send().await.map_err(|e| {
            tracing::warn!(resource = R::LABEL, operation, error = %e, "Request failed");
            Error::transport_with_source(format!("{operation} {} failed", R::LABEL), e)
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                body
            };
            tracing::warn!(
                resource = R::LABEL,
                operation,
                status = status.as_u16(),
                "Remote error"
            );
            return Err(Error::remote(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(|e| {
            Error::decode_with_source(format!("{operation} {} response", R::LABEL), e)
        })
    }
}

impl<R> Clone for HttpGateway<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for HttpGateway<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGateway")
            .field("resource", &R::PATH)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl<R: Resource> EntityGateway<R> for HttpGateway<R> {
    async fn get(&self, id: EntityId) -> Result<R> {
        tracing::debug!(resource = R::LABEL, %id, "Fetching entity");
        let response = self.send(self.client.get(self.entity_url(id)), "get").await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                resource: R::LABEL,
                id,
            });
        }
        Self::decode(response, "get").await
    }

    async fn get_page(&self, request: &PageRequest) -> Result<Page<R>> {
        tracing::debug!(
            resource = R::LABEL,
            page = request.page,
            size = request.size,
            sort = %request.sort_param(),
            "Fetching page"
        );
        let builder = self.client.get(self.page_url(request)?);
        let response = self.send(builder, "list").await?;
        Self::decode(response, "list").await
    }

    async fn create(&self, draft: &R::Draft) -> Result<EntityId> {
        let builder = self.client.post(self.collection_url()).json(draft);
        let response = self.send(builder, "create").await?;
        let id: EntityId = Self::decode(response, "create").await?;
        tracing::info!(resource = R::LABEL, %id, "Entity created");
        Ok(id)
    }

    async fn update(&self, draft: &R::Draft) -> Result<EntityId> {
        let builder = self.client.put(self.collection_url()).json(draft);
        let response = self.send(builder, "update").await?;
        let id: EntityId = Self::decode(response, "update").await?;
        tracing::info!(resource = R::LABEL, %id, "Entity updated");
        Ok(id)
    }
}
