//! Project resource client

use std::sync::Arc;

use super::http::{ClientInner, require};
use super::operations::OperationsClient;
use super::results::{ModificationResult, SearchResult};
use crate::error::Result;
use crate::models::{Project, ProjectPatch};
use crate::operations::Operation;
use crate::search::SearchRequest;

pub struct ProjectsClient {
    inner: Arc<ClientInner>,
    operations: OperationsClient,
}

impl ProjectsClient {
    pub(crate) fn new(inner: Arc<ClientInner>, operations: OperationsClient) -> Self {
        Self { inner, operations }
    }

    /// Fetch one project; `Ok(None)` when the id does not exist.
    pub async fn get(&self, project_id: &str) -> Result<Option<Project>> {
        require(project_id, "project id must not be empty")?;
        self.inner.get_optional(&format!("projects/{project_id}")).await
    }

    /// Search projects with filter/range/sort parameters.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResult<Project>> {
        self.inner.find("projects", request).await
    }

    pub async fn create(&self, project: &Project) -> Result<ModificationResult<Project>> {
        self.inner.create("projects", project).await
    }

    /// Full replacement of an existing project.
    pub async fn replace(&self, project_id: &str, project: &Project) -> Result<Project> {
        require(project_id, "project id must not be empty")?;
        self.inner
            .replace(&format!("projects/{project_id}"), project)
            .await
    }

    /// Partial update; only the fields present in `patch` change.
    pub async fn patch(&self, project_id: &str, patch: &ProjectPatch) -> Result<Project> {
        require(project_id, "project id must not be empty")?;
        self.inner
            .patch(&format!("projects/{project_id}"), patch)
            .await
    }

    /// Request archival. 202 yields a pollable operation; 204 means the
    /// project is already archived and yields a pseudo-operation.
    pub async fn archive_async(&self, project_id: &str) -> Result<Operation> {
        require(project_id, "project id must not be empty")?;
        self.inner
            .post_operation(
                &format!("projects/{project_id}/archive"),
                self.operations.as_poller(),
            )
            .await
    }
}
