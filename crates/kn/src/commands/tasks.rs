//! `kn tasks` -- a project's tasks as one sorted list.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use kaneo_core::enums::Status;
use kaneo_core::ordering::sort_tasks;
use kaneo_core::task::Task;
use kaneo_core::urgency::Urgency;
use kaneo_ui::pager;

use crate::cli::TasksArgs;
use crate::context::RuntimeContext;
use crate::output::{format_task_row, output_json, urgency_of};

/// Execute the `kn tasks` command.
pub fn run(ctx: &RuntimeContext, args: &TasksArgs) -> Result<()> {
    let (client, config) = ctx.client()?;
    let mode = RuntimeContext::sort_mode(&config, args.sort);

    let board = client
        .get_board(&args.project)
        .with_context(|| format!("failed to load tasks for project {}", args.project))?;

    let now = Local::now();
    let status = args.status.as_deref().map(Status::from);
    let filtered = filter_tasks(board.tasks(), status.as_ref(), args.overdue, &now);

    let mut sorted = sort_tasks(&filtered, mode);
    if args.limit > 0 {
        sorted.truncate(args.limit);
    }
    tracing::debug!(total = filtered.len(), shown = sorted.len(), %mode, "tasks");

    if ctx.json {
        output_json(&sorted);
        return Ok(());
    }

    if sorted.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let mut out = String::new();
    for task in &sorted {
        out.push_str(&format_task_row(task, &now));
        out.push('\n');
    }
    pager::page(&out);
    Ok(())
}

/// Keeps tasks with the given status and, with `overdue`, only those
/// whose due day has passed.
fn filter_tasks(
    tasks: Vec<Task>,
    status: Option<&Status>,
    overdue: bool,
    now: &DateTime<Local>,
) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|t| status.is_none_or(|s| t.status.as_ref() == Some(s)))
        .filter(|t| {
            !overdue
                || t
                    .due_date
                    .as_ref()
                    .is_some_and(|due| urgency_of(due, now) == Urgency::Overdue)
        })
        .collect()
}
