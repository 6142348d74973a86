//! Operations resource client

use std::sync::Arc;

use async_trait::async_trait;

use super::http::{ClientInner, require};
use super::results::SearchResult;
use crate::error::{Error, Result};
use crate::operations::{Operation, OperationPoller};
use crate::search::SearchRequest;

/// Client for the operations resource; also the poll collaborator every
/// bound [`Operation`] refreshes through.
#[derive(Clone)]
pub struct OperationsClient {
    inner: Arc<ClientInner>,
}

impl OperationsClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn as_poller(&self) -> Arc<dyn OperationPoller> {
        Arc::new(self.clone())
    }

    /// Fetch one operation, bound and ready for the wait helpers. `Ok(None)`
    /// when the id does not exist.
    pub async fn get(&self, operation_id: &str) -> Result<Option<Operation>> {
        require(operation_id, "operation id must not be empty")?;
        let operation: Option<Operation> = self
            .inner
            .get_optional(&format!("operations/{operation_id}"))
            .await?;
        Ok(operation.map(|op| op.bind(self.as_poller())))
    }

    /// Search operations; every returned operation comes back bound.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResult<Operation>> {
        let page: SearchResult<Operation> = self.inner.find("operations", request).await?;
        Ok(SearchResult {
            items: page
                .items
                .into_iter()
                .map(|op| op.bind(self.as_poller()))
                .collect(),
            has_more: page.has_more,
        })
    }
}

#[async_trait]
impl OperationPoller for OperationsClient {
    async fn get_operation(&self, id: &str) -> Result<Operation> {
        match self
            .inner
            .get_optional::<Operation>(&format!("operations/{id}"))
            .await?
        {
            Some(operation) => Ok(operation),
            // The wait loop cannot proceed without the state, so a vanished
            // id is an error on this path.
            None => Err(Error::NotFound {
                code: "DOES_NOT_EXIST".to_string(),
                message: format!("operation {id} does not exist"),
            }),
        }
    }
}
