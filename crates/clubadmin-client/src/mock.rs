//! In-memory [`EntityGateway`] for tests and offline demos.
//!
//! Records every call (drafts are captured as serialized JSON, exactly what
//! the HTTP gateway would send), can be told to fail per operation, and can
//! hold every response behind a latch until the test releases it.

use async_trait::async_trait;
use clubadmin_core::{EntityGateway, EntityId, Error, Page, PageRequest, Resource, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// Gateway operation, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    /// `get`
    Get,
    /// `get_page`
    GetPage,
    /// `create`
    Create,
    /// `update`
    Update,
}

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    /// `get(id)`
    Get(EntityId),
    /// `get_page(request)`
    GetPage(PageRequest),
    /// `create(draft)`, draft as sent on the wire
    Create(Value),
    /// `update(draft)`, draft as sent on the wire
    Update(Value),
}

impl GatewayCall {
    /// Operation this call exercised.
    pub fn op(&self) -> GatewayOp {
        match self {
            GatewayCall::Get(_) => GatewayOp::Get,
            GatewayCall::GetPage(_) => GatewayOp::GetPage,
            GatewayCall::Create(_) => GatewayOp::Create,
            GatewayCall::Update(_) => GatewayOp::Update,
        }
    }

    /// Draft body for create/update calls.
    pub fn draft(&self) -> Option<&Value> {
        match self {
            GatewayCall::Create(draft) | GatewayCall::Update(draft) => Some(draft),
            _ => None,
        }
    }
}

/// Mock gateway backed by a map of entities.
pub struct MockGateway<R> {
    entities: Mutex<BTreeMap<EntityId, R>>,
    calls: Mutex<Vec<GatewayCall>>,
    failures: Mutex<HashSet<GatewayOp>>,
    latch: Option<Arc<Notify>>,
}

impl<R: Resource + Clone> MockGateway<R> {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self {
            entities: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashSet::new()),
            latch: None,
        }
    }

    /// Adds an entity served by `get` and `get_page`.
    pub fn with_entity(self, entity: R) -> Self {
        lock(&self.entities).insert(entity.id(), entity);
        self
    }

    /// Adds several entities.
    pub fn with_entities(self, entities: impl IntoIterator<Item = R>) -> Self {
        {
            let mut map = lock(&self.entities);
            for entity in entities {
                map.insert(entity.id(), entity);
            }
        }
        self
    }

    /// Makes every call of `op` fail with a remote 500.
    pub fn failing(self, op: GatewayOp) -> Self {
        self.set_failing(op, true);
        self
    }

    /// Holds every response until `latch` is notified (one permit per call).
    pub fn with_latch(mut self, latch: Arc<Notify>) -> Self {
        self.latch = Some(latch);
        self
    }

    /// Turns failure injection for `op` on or off.
    pub fn set_failing(&self, op: GatewayOp, failing: bool) {
        let mut failures = lock(&self.failures);
        if failing {
            failures.insert(op);
        } else {
            failures.remove(&op);
        }
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        lock(&self.calls).clone()
    }

    /// Number of calls so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Number of calls of one operation so far.
    pub fn count(&self, op: GatewayOp) -> usize {
        lock(&self.calls).iter().filter(|c| c.op() == op).count()
    }

    /// Body of the most recent create or update.
    pub fn last_draft(&self) -> Option<Value> {
        lock(&self.calls)
            .iter()
            .rev()
            .find_map(|call| call.draft().cloned())
    }

    async fn enter(&self, call: GatewayCall) -> Result<()> {
        let op = call.op();
        lock(&self.calls).push(call);

        if let Some(latch) = &self.latch {
            latch.notified().await;
        }

        if lock(&self.failures).contains(&op) {
            return Err(Error::remote(500, format!("{} {op:?} failed", R::LABEL)));
        }
        Ok(())
    }

    /// Stores `body` as the entity `id`, or under the next free id.
    fn store(&self, id: Option<EntityId>, mut body: Value) -> Result<EntityId> {
        let mut entities = lock(&self.entities);
        let id = id.unwrap_or_else(|| {
            let max = entities.keys().next_back().map_or(0, |id| id.get());
            EntityId::new(max + 1)
        });
        if let Value::Object(fields) = &mut body {
            fields.insert("id".to_string(), Value::from(id.get()));
        }
        let entity: R = serde_json::from_value(body)?;
        entities.insert(id, entity);
        Ok(id)
    }
}

impl<R: Resource + Clone> Default for MockGateway<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource + Clone> EntityGateway<R> for MockGateway<R> {
    async fn get(&self, id: EntityId) -> Result<R> {
        self.enter(GatewayCall::Get(id)).await?;
        lock(&self.entities)
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound {
                resource: R::LABEL,
                id,
            })
    }

    async fn get_page(&self, request: &PageRequest) -> Result<Page<R>> {
        self.enter(GatewayCall::GetPage(request.clone())).await?;
        let entities = lock(&self.entities);
        let start = request.page as usize * request.size as usize;
        let content: Vec<R> = entities
            .values()
            .skip(start)
            .take(request.size as usize)
            .cloned()
            .collect();
        let total = entities.len() as u64;
        let size = u64::from(request.size.max(1));
        Ok(Page {
            content,
            total_elements: total,
            total_pages: total.div_ceil(size) as u32,
            size: request.size,
            number: request.page,
        })
    }

    async fn create(&self, draft: &R::Draft) -> Result<EntityId> {
        let body = serde_json::to_value(draft)?;
        self.enter(GatewayCall::Create(body.clone())).await?;
        self.store(None, body)
    }

    async fn update(&self, draft: &R::Draft) -> Result<EntityId> {
        let body = serde_json::to_value(draft)?;
        let id = body.get("id").and_then(Value::as_i64);
        self.enter(GatewayCall::Update(body.clone())).await?;
        let id = id
            .map(EntityId::new)
            .ok_or_else(|| Error::remote(400, format!("{} update without id", R::LABEL)))?;
        self.store(Some(id), body)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
