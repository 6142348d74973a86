//! Crowdforge API client
//!
//! One [`CrowdforgeClient`] owns the shared HTTP transport; per-resource
//! clients are cheap handles onto it.

mod http;

pub mod assignments;
pub mod operations;
pub mod pools;
pub mod projects;
pub mod results;
pub mod skills;
pub mod tasks;

use std::sync::Arc;

use http::ClientInner;

use crate::config::ClientConfig;
use crate::error::Result;

pub use assignments::AssignmentsClient;
pub use operations::OperationsClient;
pub use pools::PoolsClient;
pub use projects::ProjectsClient;
pub use results::{BatchCreateResult, ItemErrors, ModificationResult, SearchResult};
pub use skills::SkillsClient;
pub use tasks::TasksClient;

/// Entry point to the API; hands out per-resource clients over one shared
/// connection pool.
pub struct CrowdforgeClient {
    inner: Arc<ClientInner>,
}

impl CrowdforgeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner::new(&config)?),
        })
    }

    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::new(self.inner.clone(), self.operations())
    }

    pub fn pools(&self) -> PoolsClient {
        PoolsClient::new(self.inner.clone(), self.operations())
    }

    pub fn tasks(&self) -> TasksClient {
        TasksClient::new(self.inner.clone(), self.operations())
    }

    pub fn assignments(&self) -> AssignmentsClient {
        AssignmentsClient::new(self.inner.clone())
    }

    pub fn skills(&self) -> SkillsClient {
        SkillsClient::new(self.inner.clone())
    }

    pub fn operations(&self) -> OperationsClient {
        OperationsClient::new(self.inner.clone())
    }
}
