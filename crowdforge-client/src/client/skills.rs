//! Skill resource client

use std::sync::Arc;

use super::http::{ClientInner, require};
use super::results::{ModificationResult, SearchResult};
use crate::error::Result;
use crate::models::Skill;
use crate::search::SearchRequest;

pub struct SkillsClient {
    inner: Arc<ClientInner>,
}

impl SkillsClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one skill; `Ok(None)` when the id does not exist.
    pub async fn get(&self, skill_id: &str) -> Result<Option<Skill>> {
        require(skill_id, "skill id must not be empty")?;
        self.inner.get_optional(&format!("skills/{skill_id}")).await
    }

    /// Search skills with filter/range/sort parameters.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResult<Skill>> {
        self.inner.find("skills", request).await
    }

    pub async fn create(&self, skill: &Skill) -> Result<ModificationResult<Skill>> {
        self.inner.create("skills", skill).await
    }

    /// Full replacement of an existing skill.
    pub async fn replace(&self, skill_id: &str, skill: &Skill) -> Result<Skill> {
        require(skill_id, "skill id must not be empty")?;
        self.inner.replace(&format!("skills/{skill_id}"), skill).await
    }

    /// Create-or-replace under a caller-chosen id; the result says which
    /// happened.
    pub async fn upsert(&self, skill_id: &str, skill: &Skill) -> Result<ModificationResult<Skill>> {
        require(skill_id, "skill id must not be empty")?;
        self.inner.upsert(&format!("skills/{skill_id}"), skill).await
    }

    /// Delete a skill. A missing id raises, unlike `get`.
    pub async fn delete(&self, skill_id: &str) -> Result<()> {
        require(skill_id, "skill id must not be empty")?;
        self.inner.delete(&format!("skills/{skill_id}")).await
    }
}
