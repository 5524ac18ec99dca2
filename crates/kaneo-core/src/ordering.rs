//! Client-side ordering and grouping of task and notification collections.
//!
//! Every function takes a slice and returns a new `Vec`; inputs are never
//! reordered in place. All sorts are stable.

use std::cmp::Reverse;

use serde::Serialize;

use crate::enums::SortMode;
use crate::notification::Notification;
use crate::task::{Column, Task};

/// Orders tasks urgent, high, medium, low, no-priority, then unrecognized.
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| t.priority.rank());
    sorted
}

/// Orders tasks by ascending due date.
///
/// A task without a due date sorts as the earliest possible instant, so
/// undated tasks always precede dated ones.
pub fn sort_by_due_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    // `None < Some(_)` for every timestamp, including pre-epoch ones.
    sorted.sort_by_key(|t| t.due_date);
    sorted
}

/// Sorts tasks according to `mode`.
pub fn sort_tasks(tasks: &[Task], mode: SortMode) -> Vec<Task> {
    match mode {
        SortMode::Priority => sort_by_priority(tasks),
        SortMode::DueDate => sort_by_due_date(tasks),
    }
}

/// One column with the tasks whose status matches its identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnGroup {
    pub id: String,
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Result of [`group_by_column`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Grouping {
    /// Columns in the order the server supplied them.
    pub columns: Vec<ColumnGroup>,
    /// Tasks whose status matched no column, in input order.
    pub unmatched: Vec<Task>,
}

impl Grouping {
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum::<usize>() + self.unmatched.len()
    }
}

/// Partitions `tasks` into `columns` by status and sorts each column by `mode`.
///
/// A task belongs to the first column whose identifier equals its status.
/// A task without a status matches no column.
/// Tasks without a matching column are never placed in a column; they are
/// returned separately in [`Grouping::unmatched`].
pub fn group_by_column(tasks: &[Task], columns: &[Column], mode: SortMode) -> Grouping {
    let mut buckets: Vec<Vec<Task>> = vec![Vec::new(); columns.len()];
    let mut unmatched = Vec::new();

    for task in tasks {
        let column = task
            .status
            .as_ref()
            .and_then(|status| columns.iter().position(|c| c.id == status.as_str()));
        match column {
            Some(idx) => buckets[idx].push(task.clone()),
            None => unmatched.push(task.clone()),
        }
    }

    let columns = columns
        .iter()
        .zip(buckets)
        .map(|(column, bucket)| ColumnGroup {
            id: column.id.clone(),
            name: column.name.clone(),
            tasks: sort_tasks(&bucket, mode),
        })
        .collect();

    Grouping { columns, unmatched }
}

/// Orders notifications unread first, each partition newest first.
pub fn order_notifications(notifications: &[Notification]) -> Vec<Notification> {
    let mut sorted = notifications.to_vec();
    sorted.sort_by_key(|n| (n.is_read, Reverse(n.created_at)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Priority, ResourceType, Status};
    use crate::task::TaskBuilder;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
    }

    fn notification(id: &str, is_read: bool, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id: id.to_string(),
            title: String::new(),
            content: String::new(),
            resource_type: ResourceType::Task,
            is_read,
            created_at,
        }
    }

    #[test]
    fn priority_sort_follows_rank() {
        let tasks = vec![
            TaskBuilder::new("low").priority(Priority::Low).build(),
            TaskBuilder::new("odd").priority("critical").build(),
            TaskBuilder::new("none").build(),
            TaskBuilder::new("urgent").priority(Priority::Urgent).build(),
            TaskBuilder::new("medium").priority(Priority::Medium).build(),
            TaskBuilder::new("high").priority(Priority::High).build(),
        ];
        let sorted = sort_by_priority(&tasks);
        assert_eq!(
            ids(&sorted),
            vec!["urgent", "high", "medium", "low", "none", "odd"]
        );
        // Input untouched.
        assert_eq!(tasks[0].id, "low");
    }

    #[test]
    fn priority_sort_is_stable() {
        let tasks = vec![
            TaskBuilder::new("a").priority(Priority::High).build(),
            TaskBuilder::new("b").priority(Priority::Low).build(),
            TaskBuilder::new("c").priority(Priority::High).build(),
            TaskBuilder::new("d").priority(Priority::Low).build(),
            TaskBuilder::new("e").priority(Priority::High).build(),
        ];
        assert_eq!(ids(&sort_by_priority(&tasks)), vec!["a", "c", "e", "b", "d"]);
    }

    #[test]
    fn due_date_sort_puts_undated_first() {
        let tasks = vec![
            TaskBuilder::new("late").due_date(day(20)).build(),
            TaskBuilder::new("undated-1").build(),
            TaskBuilder::new("early").due_date(day(2)).build(),
            TaskBuilder::new("undated-2").build(),
            TaskBuilder::new("pre-epoch")
                .due_date(Utc.with_ymd_and_hms(1969, 7, 20, 0, 0, 0).unwrap())
                .build(),
        ];
        let sorted = sort_by_due_date(&tasks);
        assert_eq!(
            ids(&sorted),
            vec!["undated-1", "undated-2", "pre-epoch", "early", "late"]
        );
    }

    #[test]
    fn due_date_sort_ties_keep_input_order() {
        let tasks = vec![
            TaskBuilder::new("x").due_date(day(5)).build(),
            TaskBuilder::new("y").due_date(day(5)).build(),
            TaskBuilder::new("z").due_date(day(1)).build(),
        ];
        assert_eq!(ids(&sort_by_due_date(&tasks)), vec!["z", "x", "y"]);
    }

    #[test]
    fn sort_tasks_dispatches_on_mode() {
        let tasks = vec![
            TaskBuilder::new("a").priority(Priority::Low).due_date(day(1)).build(),
            TaskBuilder::new("b").priority(Priority::Urgent).due_date(day(9)).build(),
        ];
        assert_eq!(ids(&sort_tasks(&tasks, SortMode::Priority)), vec!["b", "a"]);
        assert_eq!(ids(&sort_tasks(&tasks, SortMode::DueDate)), vec!["a", "b"]);
    }

    #[test]
    fn group_by_column_partitions_by_status() {
        let columns = vec![Column::new("to-do", "To Do"), Column::new("done", "Done")];
        let tasks = vec![
            TaskBuilder::new("task1").status(Status::ToDo).build(),
            TaskBuilder::new("task2").status(Status::Done).build(),
            TaskBuilder::new("task3").status(Status::ToDo).build(),
        ];
        let grouping = group_by_column(&tasks, &columns, SortMode::Priority);

        assert_eq!(grouping.columns.len(), 2);
        assert_eq!(grouping.columns[0].id, "to-do");
        assert_eq!(ids(&grouping.columns[0].tasks), vec!["task1", "task3"]);
        assert_eq!(grouping.columns[1].id, "done");
        assert_eq!(ids(&grouping.columns[1].tasks), vec!["task2"]);
        assert!(grouping.unmatched.is_empty());
        assert_eq!(grouping.task_count(), 3);
    }

    #[test]
    fn group_by_column_sorts_within_columns() {
        let columns = vec![Column::new("to-do", "To Do")];
        let tasks = vec![
            TaskBuilder::new("a").status(Status::ToDo).priority(Priority::Low).build(),
            TaskBuilder::new("b").status(Status::ToDo).priority(Priority::Urgent).build(),
        ];
        let grouping = group_by_column(&tasks, &columns, SortMode::Priority);
        assert_eq!(ids(&grouping.columns[0].tasks), vec!["b", "a"]);
    }

    #[test]
    fn group_by_column_keeps_column_order_and_reports_unmatched() {
        let columns = vec![
            Column::new("done", "Done"),
            Column::new("backlog", "Backlog"),
        ];
        let tasks = vec![
            TaskBuilder::new("1").status("archived").build(),
            TaskBuilder::new("2").status(Status::Backlog).build(),
            TaskBuilder::new("3").build(),
        ];
        let grouping = group_by_column(&tasks, &columns, SortMode::DueDate);
        assert_eq!(grouping.columns[0].id, "done");
        assert!(grouping.columns[0].tasks.is_empty());
        assert_eq!(ids(&grouping.columns[1].tasks), vec!["2"]);
        assert_eq!(ids(&grouping.unmatched), vec!["1", "3"]);
    }

    #[test]
    fn notifications_unread_first_then_newest() {
        let t0 = day(1);
        let t1 = day(2);
        let input = vec![notification("1", true, t1), notification("2", false, t0)];
        let ordered = order_notifications(&input);
        let ids: Vec<&str> = ordered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn notifications_partitions_sorted_descending() {
        let input = vec![
            notification("read-old", true, day(1)),
            notification("unread-old", false, day(2)),
            notification("read-new", true, day(9)),
            notification("unread-new", false, day(8)),
        ];
        let ordered = order_notifications(&input);
        let ids: Vec<&str> = ordered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["unread-new", "unread-old", "read-new", "read-old"]);
    }
}
