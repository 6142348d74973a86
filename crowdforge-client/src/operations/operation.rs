//! Long-running operation model

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::flex::flex_enum;
use crate::search::SearchParam;

/// Sentinel id of client-synthesized operations for actions the server
/// completed synchronously.
pub const PSEUDO_ID: &str = "PSEUDO_ID";

flex_enum! {
    /// Lifecycle state of a server-side operation.
    pub enum OperationStatus {
        Pending = "PENDING",
        Running = "RUNNING",
        Success = "SUCCESS",
        Fail = "FAIL",
    }
}

impl OperationStatus {
    /// Terminal states never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Success | OperationStatus::Fail)
    }
}

flex_enum! {
    /// Kind of server-side job an operation tracks.
    pub enum OperationType {
        ProjectArchive = "PROJECT.ARCHIVE",
        PoolOpen = "POOL.OPEN",
        PoolClose = "POOL.CLOSE",
        PoolArchive = "POOL.ARCHIVE",
        TaskBatchCreate = "TASK.BATCH_CREATE",
    }
}

/// Searchable operation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationField {
    Id,
    Type,
    Status,
    Submitted,
    Finished,
}

impl SearchParam for OperationField {
    fn wire_name(&self) -> &'static str {
        match self {
            OperationField::Id => "id",
            OperationField::Type => "type",
            OperationField::Status => "status",
            OperationField::Submitted => "submitted",
            OperationField::Finished => "finished",
        }
    }
}

/// Poll-capable collaborator a real operation is bound to. Implemented by
/// [`OperationsClient`](crate::client::OperationsClient); tests substitute
/// stubs.
#[async_trait]
pub trait OperationPoller: Send + Sync {
    /// Fetch current operation state by id. A vanished id is an error here,
    /// not a `None`: the wait loop cannot proceed without the state.
    async fn get_operation(&self, id: &str) -> Result<Operation>;
}

/// A server-side asynchronous job.
///
/// Deserialized from `202 Accepted` bodies and bound to an
/// [`OperationPoller`] afterwards, because the deserializer cannot inject
/// collaborators through constructors. Status only moves toward one of the
/// terminal states; the client observes, it never writes.
#[derive(Clone, Deserialize)]
pub struct Operation {
    pub id: String,
    #[serde(rename = "type", default)]
    pub op_type: Option<OperationType>,
    pub status: OperationStatus,
    #[serde(default)]
    pub submitted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
    /// Completion percentage, 0-100, when the server reports one.
    #[serde(default)]
    pub progress: Option<u8>,
    /// Parameters the operation was submitted with, verbatim.
    #[serde(default)]
    pub parameters: Option<Value>,
    /// Opaque result/failure payload; see [`Operation::details_map`].
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(skip)]
    pub(crate) poller: Option<Arc<dyn OperationPoller>>,
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("id", &self.id)
            .field("op_type", &self.op_type)
            .field("status", &self.status)
            .field("submitted", &self.submitted)
            .field("started", &self.started)
            .field("finished", &self.finished)
            .field("progress", &self.progress)
            .field("bound", &self.poller.is_some())
            .finish()
    }
}

impl Operation {
    /// Synthesize an already-successful stand-in for an action the server
    /// reported as completed synchronously (`204 No Content`). Never polled.
    pub fn pseudo_success() -> Self {
        Operation {
            id: PSEUDO_ID.to_string(),
            op_type: None,
            status: OperationStatus::Success,
            submitted: None,
            started: None,
            finished: Some(Utc::now()),
            progress: Some(100),
            parameters: None,
            details: None,
            poller: None,
        }
    }

    pub fn is_pseudo(&self) -> bool {
        self.id == PSEUDO_ID
    }

    /// True iff the status is terminal (SUCCESS or FAIL).
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Attach the poll collaborator used by [`refresh`](Operation::refresh)
    /// and the wait helpers.
    pub fn bind(mut self, poller: Arc<dyn OperationPoller>) -> Self {
        self.poller = Some(poller);
        self
    }

    /// The details payload decoded as a JSON object, when it is one.
    pub fn details_map(&self) -> Option<&Map<String, Value>> {
        self.details.as_ref().and_then(Value::as_object)
    }

    /// Re-fetch current state by id through the bound poller.
    ///
    /// Pseudo-operations return themselves unchanged. A not-found or
    /// transport failure propagates as-is; nothing retries at this layer.
    pub async fn refresh(self) -> Result<Operation> {
        if self.is_pseudo() {
            return Ok(self);
        }
        let poller = self.poller.clone().ok_or(Error::Detached)?;
        let fresh = poller.get_operation(&self.id).await?;
        Ok(fresh.bind(poller))
    }
}
