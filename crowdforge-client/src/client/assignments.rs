//! Assignment resource client

use std::sync::Arc;

use super::http::{ClientInner, require};
use super::results::SearchResult;
use crate::error::Result;
use crate::models::assignment::AssignmentVerdict;
use crate::models::{Assignment, AssignmentStatus};
use crate::search::SearchRequest;

pub struct AssignmentsClient {
    inner: Arc<ClientInner>,
}

impl AssignmentsClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one assignment; `Ok(None)` when the id does not exist.
    pub async fn get(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        require(assignment_id, "assignment id must not be empty")?;
        self.inner
            .get_optional(&format!("assignments/{assignment_id}"))
            .await
    }

    /// Search assignments with filter/range/sort parameters.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResult<Assignment>> {
        self.inner.find("assignments", request).await
    }

    /// Accept a submitted assignment. Completes synchronously and returns
    /// the updated assignment.
    pub async fn accept(
        &self,
        assignment_id: &str,
        public_comment: Option<&str>,
    ) -> Result<Assignment> {
        self.verdict(assignment_id, AssignmentStatus::Accepted, public_comment)
            .await
    }

    /// Reject a submitted assignment, normally with a comment the worker
    /// sees.
    pub async fn reject(
        &self,
        assignment_id: &str,
        public_comment: Option<&str>,
    ) -> Result<Assignment> {
        self.verdict(assignment_id, AssignmentStatus::Rejected, public_comment)
            .await
    }

    async fn verdict(
        &self,
        assignment_id: &str,
        status: AssignmentStatus,
        public_comment: Option<&str>,
    ) -> Result<Assignment> {
        require(assignment_id, "assignment id must not be empty")?;
        let body = AssignmentVerdict {
            status,
            public_comment: public_comment.map(str::to_string),
        };
        self.inner
            .patch(&format!("assignments/{assignment_id}"), &body)
            .await
    }
}
