//! Assignment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flex::flex_enum;
use crate::search::SearchParam;

flex_enum! {
    /// Assignment lifecycle status.
    pub enum AssignmentStatus {
        Active = "ACTIVE",
        Submitted = "SUBMITTED",
        Accepted = "ACCEPTED",
        Rejected = "REJECTED",
        Skipped = "SKIPPED",
        Expired = "EXPIRED",
    }
}

/// A worker's pass over a set of tasks, including submitted solutions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub pool_id: String,
    pub worker_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<f64>,
    /// Solutions keyed like the project's output interface, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<DateTime<Utc>>,
}

/// Status change payload for accept/reject verdicts.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AssignmentVerdict {
    pub status: AssignmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_comment: Option<String>,
}

/// Searchable assignment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentField {
    Id,
    PoolId,
    WorkerId,
    Status,
    Created,
    Submitted,
}

impl SearchParam for AssignmentField {
    fn wire_name(&self) -> &'static str {
        match self {
            AssignmentField::Id => "id",
            AssignmentField::PoolId => "pool_id",
            AssignmentField::WorkerId => "worker_id",
            AssignmentField::Status => "status",
            AssignmentField::Created => "created",
            AssignmentField::Submitted => "submitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serialization() {
        let verdict = AssignmentVerdict {
            status: AssignmentStatus::Rejected,
            public_comment: Some("wrong label".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"status":"REJECTED","public_comment":"wrong label"}"#
        );
    }
}
