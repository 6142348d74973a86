//! Pool resource client

use std::sync::Arc;

use super::http::{ClientInner, require};
use super::operations::OperationsClient;
use super::results::{ModificationResult, SearchResult};
use crate::error::Result;
use crate::models::{Pool, PoolPatch};
use crate::operations::Operation;
use crate::search::SearchRequest;

pub struct PoolsClient {
    inner: Arc<ClientInner>,
    operations: OperationsClient,
}

impl PoolsClient {
    pub(crate) fn new(inner: Arc<ClientInner>, operations: OperationsClient) -> Self {
        Self { inner, operations }
    }

    /// Fetch one pool; `Ok(None)` when the id does not exist.
    pub async fn get(&self, pool_id: &str) -> Result<Option<Pool>> {
        require(pool_id, "pool id must not be empty")?;
        self.inner.get_optional(&format!("pools/{pool_id}")).await
    }

    /// Search pools with filter/range/sort parameters.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResult<Pool>> {
        self.inner.find("pools", request).await
    }

    pub async fn create(&self, pool: &Pool) -> Result<ModificationResult<Pool>> {
        self.inner.create("pools", pool).await
    }

    /// Full replacement of an existing pool.
    pub async fn replace(&self, pool_id: &str, pool: &Pool) -> Result<Pool> {
        require(pool_id, "pool id must not be empty")?;
        self.inner.replace(&format!("pools/{pool_id}"), pool).await
    }

    /// Partial update; only the fields present in `patch` change.
    pub async fn patch(&self, pool_id: &str, patch: &PoolPatch) -> Result<Pool> {
        require(pool_id, "pool id must not be empty")?;
        self.inner.patch(&format!("pools/{pool_id}"), patch).await
    }

    /// Start serving the pool to workers. 204 (already open) yields a
    /// pseudo-operation.
    pub async fn open_async(&self, pool_id: &str) -> Result<Operation> {
        self.fire(pool_id, "open").await
    }

    /// Stop serving the pool. 204 (already closed) yields a
    /// pseudo-operation.
    pub async fn close_async(&self, pool_id: &str) -> Result<Operation> {
        self.fire(pool_id, "close").await
    }

    /// Archive a closed pool.
    pub async fn archive_async(&self, pool_id: &str) -> Result<Operation> {
        self.fire(pool_id, "archive").await
    }

    async fn fire(&self, pool_id: &str, action: &str) -> Result<Operation> {
        require(pool_id, "pool id must not be empty")?;
        self.inner
            .post_operation(
                &format!("pools/{pool_id}/{action}"),
                self.operations.as_poller(),
            )
            .await
    }
}
