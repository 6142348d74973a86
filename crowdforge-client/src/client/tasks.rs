//! Task resource client

use std::sync::Arc;

use super::http::{ClientInner, require};
use super::operations::OperationsClient;
use super::results::{BatchCreateResult, SearchResult};
use crate::error::{Error, Result};
use crate::models::{Task, TaskPatch};
use crate::operations::Operation;
use crate::search::SearchRequest;

pub struct TasksClient {
    inner: Arc<ClientInner>,
    operations: OperationsClient,
}

impl TasksClient {
    pub(crate) fn new(inner: Arc<ClientInner>, operations: OperationsClient) -> Self {
        Self { inner, operations }
    }

    /// Fetch one task; `Ok(None)` when the id does not exist.
    pub async fn get(&self, task_id: &str) -> Result<Option<Task>> {
        require(task_id, "task id must not be empty")?;
        self.inner.get_optional(&format!("tasks/{task_id}")).await
    }

    /// Search tasks with filter/range/sort parameters.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResult<Task>> {
        self.inner.find("tasks", request).await
    }

    /// Create several tasks in one synchronous call; rejected items come
    /// back per input index instead of failing the whole batch.
    pub async fn create_batch(&self, tasks: &[Task]) -> Result<BatchCreateResult<Task>> {
        if tasks.is_empty() {
            return Err(Error::InvalidArgument("task batch must not be empty"));
        }
        self.inner.batch_create("tasks", tasks).await
    }

    /// Submit a batch for asynchronous creation; returns the tracking
    /// operation.
    pub async fn create_batch_async(&self, tasks: Vec<Task>) -> Result<Operation> {
        if tasks.is_empty() {
            return Err(Error::InvalidArgument("task batch must not be empty"));
        }
        self.create_batch_streaming(tasks).await
    }

    /// Like [`create_batch_async`](TasksClient::create_batch_async), but
    /// accepts any iterator and streams elements onto the request body as
    /// they are produced, so arbitrarily large inputs upload without an
    /// O(n) staging buffer.
    pub async fn create_batch_streaming<I>(&self, tasks: I) -> Result<Operation>
    where
        I: IntoIterator<Item = Task> + Send + 'static,
        I::IntoIter: Send,
    {
        self.inner
            .batch_create_async("tasks?async_mode=true", tasks, self.operations.as_poller())
            .await
    }

    /// Partial update; only the fields present in `patch` change.
    pub async fn patch(&self, task_id: &str, patch: &TaskPatch) -> Result<Task> {
        require(task_id, "task id must not be empty")?;
        self.inner.patch(&format!("tasks/{task_id}"), patch).await
    }
}
