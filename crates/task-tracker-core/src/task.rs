//! Task Entity
//!
//! A to-do item as stored by the remote API.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store
pub type TaskId = u32;

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never changed by the client
    pub id: TaskId,
    /// Free-text label
    pub title: String,
    /// Completion status
    pub completed: bool,
    /// Owner id, returned by some stores and sent back untouched
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            user_id: None,
        }
    }
}

/// Creation payload: a task the store has not assigned an id to yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_store_payload() {
        let json = r#"{"userId":1,"id":3,"title":"fugiat veniam minus","completed":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 3);
        assert_eq!(task.title, "fugiat veniam minus");
        assert!(!task.completed);
        assert_eq!(task.user_id, Some(1));
    }

    #[test]
    fn test_decode_without_user_id() {
        let task: Task = serde_json::from_str(r#"{"id":201,"title":"x","completed":true}"#).unwrap();
        assert_eq!(task, Task::new(201, "x", true));
    }

    #[test]
    fn test_new_task_has_no_id() {
        let value = serde_json::to_value(NewTask::new("buy milk")).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "buy milk", "completed": false }));
    }

    #[test]
    fn test_user_id_omitted_when_absent() {
        let value = serde_json::to_value(Task::new(1, "x", false)).unwrap();
        assert!(value.get("userId").is_none());
    }
}
