//! Task records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::search::SearchParam;

/// One unit of work served to workers, carrying arbitrary input values keyed
/// by the project's task interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned; absent before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub pool_id: String,
    pub input_values: Map<String, Value>,
    /// How many distinct workers should complete this task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Task {
    /// Convenience constructor for the common create path.
    pub fn new(pool_id: impl Into<String>, input_values: Map<String, Value>) -> Self {
        Self {
            id: None,
            pool_id: pool_id.into(),
            input_values,
            overlap: None,
            created: None,
        }
    }
}

/// Partial update payload; only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<u32>,
}

/// Searchable task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Id,
    PoolId,
    Overlap,
    Created,
}

impl SearchParam for TaskField {
    fn wire_name(&self) -> &'static str {
        match self {
            TaskField::Id => "id",
            TaskField::PoolId => "pool_id",
            TaskField::Overlap => "overlap",
            TaskField::Created => "created",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_values_round_trip() {
        let mut inputs = Map::new();
        inputs.insert("image_url".to_string(), json!("https://img.example/1.png"));
        let task = Task::new("pool-1", inputs);

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pool_id, "pool-1");
        assert_eq!(parsed.input_values["image_url"], "https://img.example/1.png");
        assert!(parsed.id.is_none());
    }
}
