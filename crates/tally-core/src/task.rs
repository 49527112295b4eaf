//! Task entities: the persisted wire shape of the task list.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A single to-do item.
///
/// `id` is assigned by the service, strictly increasing, and never reused
/// after deletion. `description` is stored untrimmed; the blank check happens
/// on trimmed content in the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// The persisted aggregate: every task plus the next id to assign.
///
/// `next_id` is authoritative as persisted. It is never recomputed from the
/// task sequence, so hand-edited files with id gaps are trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskList {
    /// Tasks in insertion order (ascending creation time).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
    #[serde(default = "default_next_id")]
    pub next_id: i64,
}

const fn default_next_id() -> i64 {
    1
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: default_next_id(),
        }
    }
}

/// Treat an explicit `"tasks": null` the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Task>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_list_is_empty_with_next_id_one() {
        let list = TaskList::default();
        assert!(list.tasks.is_empty());
        assert_eq!(list.next_id, 1);
    }

    #[test]
    fn null_tasks_deserialize_as_empty() {
        let list: TaskList =
            serde_json::from_str(r#"{"tasks": null, "next_id": 4}"#).expect("should parse");
        assert!(list.tasks.is_empty());
        assert_eq!(list.next_id, 4);
    }

    #[test]
    fn absent_tasks_deserialize_as_empty() {
        let list: TaskList = serde_json::from_str(r#"{"next_id": 2}"#).expect("should parse");
        assert!(list.tasks.is_empty());
        assert_eq!(list.next_id, 2);
    }

    #[test]
    fn created_at_serializes_as_sortable_string() {
        let task = Task {
            id: 1,
            description: "buy groceries".into(),
            completed: false,
            created_at: "2026-01-15T09:30:00Z".parse().expect("valid timestamp"),
        };
        let value = serde_json::to_value(&task).expect("should serialize");
        assert_eq!(value["created_at"], "2026-01-15T09:30:00Z");
    }
}
