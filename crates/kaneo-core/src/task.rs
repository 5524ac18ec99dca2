//! Task, column and board types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de::{epoch, lenient_datetime, null_as_default, status_or_none, timestamp_or_epoch};
use crate::enums::{Priority, Status, priority_or_default};

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Raw description; may contain `<p>`/`<br>` markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `None` when the payload has no usable status; such a task belongs
    /// to no column.
    #[serde(
        default,
        deserialize_with = "status_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Status>,

    #[serde(default, deserialize_with = "priority_or_default")]
    pub priority: Priority,

    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(
        default,
        alias = "assignee",
        alias = "userName",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignee_name: Option<String>,

    #[serde(default = "epoch", deserialize_with = "timestamp_or_epoch")]
    pub created_at: DateTime<Utc>,

    /// Owning project, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// A workflow column and the tasks the server placed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}

/// The columns of one project, as returned by the task-board endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default, alias = "projectId")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub columns: Vec<Column>,
}

impl Board {
    /// All tasks on the board, column by column.
    pub fn tasks(&self) -> Vec<Task> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().cloned())
            .collect()
    }

    /// Finds a task anywhere on the board.
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.id == id)
    }
}

/// Fields for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: Status::default(),
            priority: Priority::default(),
            due_date: None,
        }
    }
}

/// Parses the timestamp shapes the API is known to emit.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Task`], mostly useful in tests and fixtures.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            task: Task {
                id: id.into(),
                title: String::new(),
                description: None,
                status: None,
                priority: Priority::default(),
                due_date: None,
                assignee_name: None,
                created_at: DateTime::<Utc>::UNIX_EPOCH,
                project_id: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.task.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.task.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: impl Into<Status>) -> Self {
        self.task.status = Some(status.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.task.priority = priority.into();
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.task.due_date = Some(due);
        self
    }

    pub fn assignee(mut self, name: impl Into<String>) -> Self {
        self.task.assignee_name = Some(name.into());
        self
    }

    pub fn created_at(mut self, t: DateTime<Utc>) -> Self {
        self.task.created_at = t;
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.task.project_id = Some(project_id.into());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_minimal_task_defaults_priority() {
        let json = r#"{"id":"t1","title":"Write docs","status":"to-do","createdAt":"2024-05-01T10:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::NoPriority);
        assert_eq!(task.status, Some(Status::ToDo));
        assert!(task.due_date.is_none());
        assert!(task.description.is_none());
    }

    #[test]
    fn deserialize_null_priority_and_empty_due_date() {
        let json = r#"{"id":"t1","priority":null,"dueDate":""}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::NoPriority);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn deserialize_unknown_priority_is_kept() {
        let json = r#"{"id":"t1","priority":"critical"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Custom("critical".into()));
    }

    #[test]
    fn deserialize_due_date_shapes() {
        let rfc: Task = serde_json::from_str(r#"{"id":"a","dueDate":"2024-06-01T12:30:00.000Z"}"#).unwrap();
        assert_eq!(
            rfc.due_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap())
        );

        let date_only: Task = serde_json::from_str(r#"{"id":"b","dueDate":"2024-06-01"}"#).unwrap();
        assert_eq!(
            date_only.due_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        );

        let naive: Task = serde_json::from_str(r#"{"id":"c","dueDate":"2024-06-01T08:00:00"}"#).unwrap();
        assert_eq!(
            naive.due_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn missing_or_null_status_is_absent() {
        let missing: Task = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(missing.status, None);

        let null: Task =
            serde_json::from_str(r#"{"id":"1","status":null,"title":null}"#).unwrap();
        assert_eq!(null.status, None);
        assert_eq!(null.title, "");

        let blank: Task = serde_json::from_str(r#"{"id":"1","status":""}"#).unwrap();
        assert_eq!(blank.status, None);
    }

    #[test]
    fn missing_created_at_is_epoch() {
        let task: Task = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(task.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn unparseable_due_date_does_not_sink_the_board() {
        let json = r#"{
            "id": "p1",
            "columns": [{"id": "to-do", "name": null, "tasks": [
                {"id": "1", "dueDate": "2024-06-01"},
                {"id": "2", "dueDate": "06/01/2024"},
                {"id": "3", "dueDate": 1717200000}
            ]}]
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        let tasks = board.tasks();
        assert_eq!(tasks.len(), 3);
        assert!(tasks[0].due_date.is_some());
        assert!(tasks[1].due_date.is_none());
        assert!(tasks[2].due_date.is_none());
        assert_eq!(board.columns[0].name, "");
    }

    #[test]
    fn board_flattens_tasks_in_column_order() {
        let json = r#"{
            "id": "p1",
            "name": "Website",
            "columns": [
                {"id": "to-do", "name": "To Do", "tasks": [{"id": "1"}, {"id": "2"}]},
                {"id": "done", "name": "Done", "tasks": [{"id": "3"}]}
            ]
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = board.tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(board.find_task("3").is_some());
        assert!(board.find_task("9").is_none());
    }

    #[test]
    fn new_task_serializes_camel_case() {
        let mut new = NewTask::new("Ship it");
        new.priority = Priority::High;
        new.due_date = Some(Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap());
        let value = serde_json::to_value(&new).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Ship it",
                "description": "",
                "status": "to-do",
                "priority": "high",
                "dueDate": "2024-07-04T00:00:00Z"
            })
        );
    }
}
