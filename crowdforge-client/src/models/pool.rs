//! Pool records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flex::flex_enum;
use crate::search::SearchParam;

flex_enum! {
    /// Pool lifecycle status.
    pub enum PoolStatus {
        Open = "OPEN",
        Closed = "CLOSED",
        Archived = "ARCHIVED",
        Locked = "LOCKED",
    }
}

/// A pool is a batch of tasks served to workers under one price and set of
/// access rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    /// Server-assigned; absent before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub project_id: String,
    /// Name visible to the requester only.
    pub private_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_per_assignment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_max_duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PoolStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_started: Option<DateTime<Utc>>,
}

/// Partial update payload; only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PoolPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_per_assignment: Option<f64>,
}

/// Searchable pool fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolField {
    Id,
    ProjectId,
    Status,
    Created,
    LastStarted,
}

impl SearchParam for PoolField {
    fn wire_name(&self) -> &'static str {
        match self {
            PoolField::Id => "id",
            PoolField::ProjectId => "project_id",
            PoolField::Status => "status",
            PoolField::Created => "created",
            PoolField::LastStarted => "last_started",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tolerates_server_added_values() {
        let pool: Pool = serde_json::from_str(
            r#"{"id": "7", "project_id": "42", "private_name": "batch 1", "status": "DRAINING"}"#,
        )
        .unwrap();
        assert!(matches!(pool.status, Some(PoolStatus::Unknown(_))));
    }

    #[test]
    fn test_new_pool_serializes_without_server_fields() {
        let pool = Pool {
            id: None,
            project_id: "42".to_string(),
            private_name: "batch 1".to_string(),
            reward_per_assignment: Some(0.05),
            assignment_max_duration_seconds: Some(600),
            priority: None,
            status: None,
            created: None,
            last_started: None,
        };
        let json = serde_json::to_value(&pool).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["reward_per_assignment"], 0.05);
    }
}
