//! Mutation intents: pure descriptions of state-changing requests.
//!
//! Nothing here performs I/O. The remote data source executes an intent and
//! the caller refetches; local state is never patched optimistically.

use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

use crate::enums::{Priority, Status};
use crate::notification::Notification;
use crate::task::{Column, NewTask, Task};

/// HTTP method of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending request: method, API path, optional JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationIntent {
    pub method: Method,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl MutationIntent {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
        }
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Display for MutationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// ---------------------------------------------------------------------------
// Task intents
// ---------------------------------------------------------------------------

pub fn change_status(task: &Task, status: &Status) -> MutationIntent {
    MutationIntent::new(Method::Put, format!("/task/status/{}", task.id))
        .with_body(json!({ "status": status }))
}

pub fn change_priority(task: &Task, priority: &Priority) -> MutationIntent {
    MutationIntent::new(Method::Put, format!("/task/priority/{}", task.id))
        .with_body(json!({ "priority": priority }))
}

pub fn delete_task(task: &Task) -> MutationIntent {
    MutationIntent::new(Method::Delete, format!("/task/{}", task.id))
}

pub fn create_task(project_id: &str, task: &NewTask) -> MutationIntent {
    // NewTask only holds strings and timestamps; serialization cannot fail.
    let body = serde_json::to_value(task).unwrap_or(Value::Null);
    MutationIntent::new(Method::Post, format!("/task/{project_id}")).with_body(body)
}

// ---------------------------------------------------------------------------
// Notification intents
// ---------------------------------------------------------------------------

pub fn mark_read(notification: &Notification) -> MutationIntent {
    MutationIntent::new(
        Method::Patch,
        format!("/notification/{}/read", notification.id),
    )
}

pub fn mark_all_read() -> MutationIntent {
    MutationIntent::new(Method::Patch, "/notification/read-all".to_string())
}

pub fn clear_all() -> MutationIntent {
    MutationIntent::new(Method::Delete, "/notification/clear-all".to_string())
}

// ---------------------------------------------------------------------------
// Transition choices
// ---------------------------------------------------------------------------

/// Statuses a task can move to: the board's columns, or the built-in
/// statuses when no columns are known, minus the current status if any.
pub fn status_choices(current: Option<&Status>, columns: &[Column]) -> Vec<Status> {
    let all: Vec<Status> = if columns.is_empty() {
        Status::BUILTIN.to_vec()
    } else {
        columns.iter().map(|c| Status::from(c.id.as_str())).collect()
    };
    all.into_iter().filter(|s| Some(s) != current).collect()
}

/// The five priorities minus the current one.
pub fn priority_choices(current: &Priority) -> Vec<Priority> {
    Priority::BUILTIN
        .iter()
        .filter(|p| *p != current)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ResourceType;
    use crate::task::TaskBuilder;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            title: String::new(),
            content: String::new(),
            resource_type: ResourceType::Task,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn change_status_descriptor() {
        let task = TaskBuilder::new("42").status(Status::ToDo).build();
        let intent = change_status(&task, &Status::Done);
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({"method": "PUT", "path": "/task/status/42", "body": {"status": "done"}})
        );
        // The task itself is untouched.
        assert_eq!(task.status, Some(Status::ToDo));
    }

    #[test]
    fn change_priority_descriptor() {
        let task = TaskBuilder::new("7").build();
        let intent = change_priority(&task, &Priority::Urgent);
        assert_eq!(intent.method, Method::Put);
        assert_eq!(intent.path, "/task/priority/7");
        assert_eq!(intent.body, Some(json!({"priority": "urgent"})));
    }

    #[test]
    fn delete_task_has_no_body() {
        let intent = delete_task(&TaskBuilder::new("9").build());
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({"method": "DELETE", "path": "/task/9"})
        );
    }

    #[test]
    fn notification_descriptors() {
        assert_eq!(mark_read(&notification("n1")).path, "/notification/n1/read");
        assert_eq!(mark_read(&notification("n1")).method, Method::Patch);
        assert_eq!(mark_all_read().path, "/notification/read-all");
        assert_eq!(mark_all_read().method, Method::Patch);
        assert_eq!(clear_all().path, "/notification/clear-all");
        assert_eq!(clear_all().method, Method::Delete);
    }

    #[test]
    fn create_task_descriptor() {
        let mut new = NewTask::new("Draft release notes");
        new.status = Status::Backlog;
        let intent = create_task("p1", &new);
        assert_eq!(intent.method, Method::Post);
        assert_eq!(intent.path, "/task/p1");
        let body = intent.body.unwrap();
        assert_eq!(body["title"], "Draft release notes");
        assert_eq!(body["status"], "backlog");
        assert_eq!(body["priority"], "no-priority");
    }

    #[test]
    fn display_is_method_and_path() {
        let intent = delete_task(&TaskBuilder::new("3").build());
        assert_eq!(intent.to_string(), "DELETE /task/3");
    }

    #[test]
    fn choices_exclude_current_value() {
        let choices = priority_choices(&Priority::Medium);
        assert_eq!(choices.len(), 4);
        assert!(!choices.contains(&Priority::Medium));

        let columns = vec![Column::new("to-do", "To Do"), Column::new("qa", "QA")];
        assert_eq!(
            status_choices(Some(&Status::ToDo), &columns),
            vec![Status::Custom("qa".into())]
        );
        assert_eq!(status_choices(Some(&Status::Done), &[]).len(), 4);
        assert_eq!(status_choices(None, &[]).len(), 5);
    }
}
