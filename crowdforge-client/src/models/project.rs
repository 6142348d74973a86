//! Project records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flex::flex_enum;
use crate::search::SearchParam;

flex_enum! {
    /// Project lifecycle status.
    pub enum ProjectStatus {
        Active = "ACTIVE",
        Archived = "ARCHIVED",
    }
}

/// A project groups pools that share instructions and a task interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned; absent before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name shown to workers.
    pub public_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Partial update payload; only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_instructions: Option<String>,
}

/// Searchable project fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Id,
    Status,
    Created,
    PublicName,
}

impl SearchParam for ProjectField {
    fn wire_name(&self) -> &'static str {
        match self {
            ProjectField::Id => "id",
            ProjectField::Status => "status",
            ProjectField::Created => "created",
            ProjectField::PublicName => "public_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_json_properties_ignored() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "42",
                "public_name": "Label photos",
                "status": "ACTIVE",
                "quality_control": {"rules": []}
            }"#,
        )
        .unwrap();
        assert_eq!(project.id.as_deref(), Some("42"));
        assert_eq!(project.status, Some(ProjectStatus::Active));
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ProjectPatch {
            public_name: Some("New name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"public_name":"New name"}"#
        );
    }
}
