//! Wire types for the task API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; the integration tests catch schema drift between
//! the two. Field names travel as camelCase (`dueDate`) per the backend
//! contract.
//!
//! The envelope's `data` field is type-ambiguous on the wire (a single task,
//! a list, or null/absent), so it is modeled as the tagged union
//! [`ResponseData`] and callers pattern-match instead of probing the shape at
//! runtime.

use serde::{Deserialize, Serialize};

/// A single task returned by the API. The id is assigned by the backend; the
/// client never mutates a task in place, it refetches the list instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Request payload for creating a task: the subset of fields the form
/// collects. Built from form values immediately before submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

/// The uniform envelope every backend call returns.
///
/// `status == "OK"` signals success; any other value is a soft failure that
/// the component surfaces as an informational message, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommonResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub data: ResponseData,
}

impl CommonResponse {
    /// Whether the envelope signals application-level success.
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// The envelope's `data` payload: absent, one task, or a list of tasks.
///
/// Untagged: `null` (or a missing field) parses as `Empty`, a JSON object as
/// `Single`, a JSON array as `Many`. The variants do not overlap, so the
/// order serde tries them in does not matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResponseData {
    #[default]
    Empty,
    Single(Task),
    Many(Vec<Task>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_round_trips_camel_case() {
        let json = r#"{"id":7,"title":"Buy milk","description":"2%","completed":false,"dueDate":"2025-10-20"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.due_date.as_deref(), Some("2025-10-20"));

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["dueDate"], "2025-10-20");
        assert!(back.get("due_date").is_none());
    }

    #[test]
    fn task_without_due_date() {
        let json = r#"{"id":1,"title":"t","description":"d","completed":true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.due_date.is_none());
        let back = serde_json::to_value(&task).unwrap();
        assert!(back.get("dueDate").is_none());
    }

    #[test]
    fn task_request_serializes_due_date_camel_case() {
        let request = TaskRequest {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            due_date: "2025-10-20".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["dueDate"], "2025-10-20");
    }

    #[test]
    fn envelope_data_null_is_empty() {
        let json = r#"{"status":"OK","message":"nothing pending","data":null}"#;
        let response: CommonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data, ResponseData::Empty);
    }

    #[test]
    fn envelope_data_absent_is_empty() {
        let json = r#"{"status":"NOT_FOUND","message":"Task not found"}"#;
        let response: CommonResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.data, ResponseData::Empty);
    }

    #[test]
    fn envelope_data_object_is_single() {
        let json = r#"{"status":"OK","message":"ok","data":{"id":3,"title":"t","description":"d","completed":false}}"#;
        let response: CommonResponse = serde_json::from_str(json).unwrap();
        match response.data {
            ResponseData::Single(task) => assert_eq!(task.id, 3),
            other => panic!("expected Single, got {other:?}"),
        }
    }

    #[test]
    fn envelope_data_array_is_many() {
        let json = r#"{"status":"OK","message":"ok","data":[{"id":1,"title":"a","description":"","completed":false},{"id":2,"title":"b","description":"","completed":false}]}"#;
        let response: CommonResponse = serde_json::from_str(json).unwrap();
        match response.data {
            ResponseData::Many(tasks) => {
                assert_eq!(tasks.len(), 2);
                assert_eq!(tasks[0].id, 1);
                assert_eq!(tasks[1].id, 2);
            }
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn envelope_data_empty_array_is_many_not_empty() {
        let json = r#"{"status":"OK","message":"ok","data":[]}"#;
        let response: CommonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data, ResponseData::Many(Vec::new()));
    }

    #[test]
    fn is_ok_requires_exact_status() {
        for (status, expected) in [("OK", true), ("ok", false), ("FAIL", false), ("", false)] {
            let response = CommonResponse {
                status: status.to_string(),
                message: String::new(),
                data: ResponseData::Empty,
            };
            assert_eq!(response.is_ok(), expected, "status {status:?}");
        }
    }
}
