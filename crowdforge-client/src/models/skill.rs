//! Skill records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::SearchParam;

/// A named worker attribute used for pool access rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_name: Option<String>,
    /// Hidden skills are invisible to the workers they are assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Searchable skill fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Id,
    Name,
    Created,
}

impl SearchParam for SkillField {
    fn wire_name(&self) -> &'static str {
        match self {
            SkillField::Id => "id",
            SkillField::Name => "name",
            SkillField::Created => "created",
        }
    }
}
