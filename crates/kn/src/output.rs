//! Output formatting helpers for the `kn` CLI.
//!
//! Provides JSON output, table formatting, and human-readable task and
//! notification lines.

use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use kaneo_core::notification::Notification;
use kaneo_core::ordering::Grouping;
use kaneo_core::task::Task;
use kaneo_core::text::clean_description;
use kaneo_core::urgency::{Urgency, classify_urgency};
use kaneo_ui::styles;
use kaneo_ui::terminal::truncate;
use serde::Serialize;

/// Widest title shown in one-line task rows.
const TITLE_WIDTH: usize = 60;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Render a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(w) if i + 1 < cells.len() => format!("{:<width$}", cell, width = *w),
                _ => cell.clone(),
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let _ = writeln!(out, "{}", line(headers.iter().map(|h| h.to_string()).collect()));
    let _ = writeln!(out, "{}", line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        let _ = writeln!(out, "{}", line(row.clone()));
    }
    out
}

/// Print a table to stdout. Nothing is printed for an empty row set.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }
    print!("{}", format_table(headers, rows));
}

/// Classifies a due date against the local calendar day.
pub fn urgency_of(due: &DateTime<Utc>, now: &DateTime<Local>) -> Urgency {
    classify_urgency(&due.with_timezone(&Local), now)
}

/// The task's status, or a muted placeholder when it has none.
pub fn render_task_status(task: &Task) -> String {
    match &task.status {
        Some(status) => styles::render_status(status),
        None => styles::render_muted("(no status)"),
    }
}

/// Due date as `YYYY-MM-DD`, colored by urgency, with an `(overdue)` tag.
pub fn format_due(due: Option<&DateTime<Utc>>, now: &DateTime<Local>) -> String {
    let Some(due) = due else {
        return String::new();
    };
    let urgency = urgency_of(due, now);
    let date = due.with_timezone(&Local).format("%Y-%m-%d").to_string();
    let text = match urgency {
        Urgency::Overdue => format!("{date} (overdue)"),
        Urgency::DueSoon => format!("{date} (soon)"),
        Urgency::Upcoming => date,
    };
    styles::render_urgency(&text, urgency)
}

/// One-line task summary.
///
/// Format: `{priority icon} {id}  {title}  {due}  @{assignee}`
pub fn format_task_row(task: &Task, now: &DateTime<Local>) -> String {
    let mut line = format!(
        "{} {}  {}",
        styles::render_priority_icon(&task.priority),
        styles::render_muted(&task.id),
        truncate(&task.title, TITLE_WIDTH),
    );
    let due = format_due(task.due_date.as_ref(), now);
    if !due.is_empty() {
        let _ = write!(line, "  {due}");
    }
    if let Some(assignee) = task.assignee_name.as_deref().filter(|a| !a.is_empty()) {
        let _ = write!(line, "  @{assignee}");
    }
    line
}

/// Multi-line task detail view.
pub fn format_task_detail(task: &Task, now: &DateTime<Local>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styles::render_bold(&task.title));
    let _ = writeln!(out, "{}", styles::render_separator());
    let _ = writeln!(out, "ID:        {}", task.id);
    let _ = writeln!(out, "Status:    {}", render_task_status(task));
    let _ = writeln!(out, "Priority:  {}", styles::render_priority(&task.priority));
    if task.due_date.is_some() {
        let _ = writeln!(out, "Due:       {}", format_due(task.due_date.as_ref(), now));
    }
    if let Some(assignee) = task.assignee_name.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "Assignee:  {assignee}");
    }
    let _ = writeln!(
        out,
        "Created:   {}",
        task.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", clean_description(task.description.as_deref()));
    out
}

/// Board view: one header per column, then any tasks no column claimed.
pub fn format_grouping(grouping: &Grouping, now: &DateTime<Local>) -> String {
    let mut out = String::new();
    for column in &grouping.columns {
        let header = format!("{} ({})", column.name, column.tasks.len());
        let _ = writeln!(out, "{}", styles::render_header(&header));
        if column.tasks.is_empty() {
            let _ = writeln!(out, "  {}", styles::render_muted("no tasks"));
        }
        for task in &column.tasks {
            let _ = writeln!(out, "  {}", format_task_row(task, now));
        }
        let _ = writeln!(out);
    }

    if !grouping.unmatched.is_empty() {
        let _ = writeln!(
            out,
            "{} {} task(s) have a status that matches no column:",
            styles::render_warn_icon(),
            grouping.unmatched.len()
        );
        for task in &grouping.unmatched {
            let _ = writeln!(
                out,
                "  {}  [{}]",
                format_task_row(task, now),
                render_task_status(task)
            );
        }
    }
    out
}

/// One-line notification summary.
pub fn format_notification_row(notification: &Notification) -> String {
    let when = notification
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    let title = if notification.is_read {
        styles::render_muted(&notification.title)
    } else {
        styles::render_bold(&notification.title)
    };
    let mut line = format!(
        "{} {} {}  {}  {}",
        styles::render_read_marker(notification.is_read),
        styles::resource_icon(&notification.resource_type),
        styles::render_muted(&notification.id),
        title,
        styles::render_muted(&when.to_string()),
    );
    if !notification.content.is_empty() {
        let _ = write!(line, "\n    {}", truncate(&notification.content, 100));
    }
    line
}
