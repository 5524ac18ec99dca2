//! `kn task` -- show, create, move, reprioritize and delete a single task.

use anyhow::{Context, Result, bail};
use chrono::Local;
use kaneo_client::KaneoClient;
use kaneo_core::enums::{Priority, Status};
use kaneo_core::intent::{self, priority_choices, status_choices};
use kaneo_core::snapshot::Snapshot;
use kaneo_core::task::{Column, NewTask, Task, parse_timestamp};
use kaneo_ui::styles;

use crate::cli::{
    TaskArgs, TaskCommands, TaskCreateArgs, TaskDeleteArgs, TaskIdArgs, TaskPriorityArgs,
    TaskStatusArgs,
};
use crate::context::RuntimeContext;
use crate::output::{format_task_detail, output_json, render_task_status};

/// Execute the `kn task` command.
pub fn run(ctx: &RuntimeContext, args: &TaskArgs) -> Result<()> {
    match &args.command {
        TaskCommands::Show(a) => run_show(ctx, a),
        TaskCommands::Create(a) => run_create(ctx, a),
        TaskCommands::Status(a) => run_status(ctx, a),
        TaskCommands::Priority(a) => run_priority(ctx, a),
        TaskCommands::Delete(a) => run_delete(ctx, a),
    }
}

fn fetch_task(client: &KaneoClient, id: &str) -> Result<Task> {
    client
        .get_task(id)
        .with_context(|| format!("failed to load task {id}"))
}

fn print_task(ctx: &RuntimeContext, task: &Task) {
    if ctx.json {
        output_json(task);
    } else {
        print!("{}", format_task_detail(task, &Local::now()));
    }
}

fn run_show(ctx: &RuntimeContext, args: &TaskIdArgs) -> Result<()> {
    let (client, _) = ctx.client()?;
    let task = fetch_task(&client, &args.id)?;
    print_task(ctx, &task);
    Ok(())
}

fn run_create(ctx: &RuntimeContext, args: &TaskCreateArgs) -> Result<()> {
    let new = new_task_from_args(args)?;
    let (client, _) = ctx.client()?;

    let created = client
        .create_task(&args.project, &new)
        .with_context(|| format!("failed to create task in project {}", args.project))?;

    if ctx.json {
        output_json(&created);
    } else {
        println!(
            "{} Created task {}: {}",
            styles::render_pass_icon(),
            created.id,
            created.title
        );
    }
    Ok(())
}

/// Builds the create payload, rejecting empty titles, unknown priorities
/// and unparseable due dates before any request is made.
fn new_task_from_args(args: &TaskCreateArgs) -> Result<NewTask> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("task title must not be empty");
    }

    let mut new = NewTask::new(title);
    if let Some(description) = &args.description {
        new.description = description.clone();
    }
    if let Some(status) = &args.status {
        new.status = Status::from(status.trim());
    }
    if let Some(priority) = &args.priority {
        new.priority = parse_priority(priority)?;
    }
    if let Some(due) = &args.due {
        let parsed = parse_timestamp(due.trim())
            .with_context(|| format!("invalid due date '{due}' (expected YYYY-MM-DD or RFC 3339)"))?;
        new.due_date = Some(parsed);
    }
    Ok(new)
}

fn parse_priority(raw: &str) -> Result<Priority> {
    let priority = Priority::from(raw.trim());
    if !priority.is_builtin() {
        bail!(
            "unknown priority '{}' (expected one of: {})",
            raw,
            join(Priority::BUILTIN.iter().map(Priority::as_str))
        );
    }
    Ok(priority)
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Columns of the task's project, or none when the task does not say
/// which project it belongs to or the board cannot be loaded.
fn project_columns(client: &KaneoClient, task: &Task) -> Vec<Column> {
    let Some(project_id) = task.project_id.as_deref() else {
        return Vec::new();
    };
    match client.get_board(project_id) {
        Ok(board) => board.columns,
        Err(e) => {
            tracing::warn!(project = project_id, error = %e, "could not load columns");
            Vec::new()
        }
    }
}

fn run_status(ctx: &RuntimeContext, args: &TaskStatusArgs) -> Result<()> {
    let (client, _) = ctx.client()?;
    let mut snapshot = Snapshot::new(fetch_task(&client, &args.id)?);
    let Some(task) = snapshot.get() else {
        bail!("task {} not loaded", args.id);
    };

    let target = Status::from(args.status.trim());
    if task.status.as_ref() == Some(&target) {
        bail!("task {} is already {}", task.id, target);
    }
    let choices = status_choices(task.status.as_ref(), &project_columns(&client, task));
    if !choices.contains(&target) {
        bail!(
            "cannot move task {} to '{}' (expected one of: {})",
            task.id,
            target,
            join(choices.iter().map(Status::as_str))
        );
    }

    let change = intent::change_status(task, &target);
    tracing::debug!(%change, "mutating");
    let updated = client
        .mutate_and_refetch(&change, &mut snapshot, |c| c.get_task(&args.id))
        .with_context(|| format!("failed to move task {}", args.id))?;

    if ctx.json {
        output_json(updated);
    } else {
        println!(
            "{} Moved task {} to {}",
            styles::render_pass_icon(),
            updated.id,
            render_task_status(updated)
        );
    }
    Ok(())
}

fn run_priority(ctx: &RuntimeContext, args: &TaskPriorityArgs) -> Result<()> {
    let target = parse_priority(&args.priority)?;
    let (client, _) = ctx.client()?;
    let mut snapshot = Snapshot::new(fetch_task(&client, &args.id)?);
    let Some(task) = snapshot.get() else {
        bail!("task {} not loaded", args.id);
    };

    if !priority_choices(&task.priority).contains(&target) {
        bail!("task {} already has priority {}", task.id, task.priority);
    }

    let change = intent::change_priority(task, &target);
    tracing::debug!(%change, "mutating");
    let updated = client
        .mutate_and_refetch(&change, &mut snapshot, |c| c.get_task(&args.id))
        .with_context(|| format!("failed to change priority of task {}", args.id))?;

    if ctx.json {
        output_json(updated);
    } else {
        println!(
            "{} Task {} priority is now {}",
            styles::render_pass_icon(),
            updated.id,
            styles::render_priority(&updated.priority)
        );
    }
    Ok(())
}

fn run_delete(ctx: &RuntimeContext, args: &TaskDeleteArgs) -> Result<()> {
    if !args.force {
        bail!(
            "deletion is destructive and cannot be undone.\n\
            Use --force to confirm deletion of task {}",
            args.id
        );
    }

    let (client, _) = ctx.client()?;
    let task = fetch_task(&client, &args.id)?;
    let Some(project_id) = task.project_id.clone() else {
        bail!(
            "task {} does not name its project; cannot refresh the board after deleting",
            task.id
        );
    };

    let mut board = Snapshot::empty();
    let remaining = client
        .mutate_and_refetch(&intent::delete_task(&task), &mut board, |c| {
            c.get_board(&project_id)
        })
        .with_context(|| format!("failed to delete task {}", task.id))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "deleted": task.id,
            "board": remaining,
        }));
    } else {
        println!(
            "{} Deleted task {}: {} ({} task(s) left in project {})",
            styles::render_pass_icon(),
            task.id,
            task.title,
            remaining.tasks().len(),
            project_id
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn create_args(title: &str) -> TaskCreateArgs {
        TaskCreateArgs {
            project: "p1".into(),
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            due: None,
        }
    }

    #[test]
    fn new_task_defaults() {
        let new = new_task_from_args(&create_args("  Ship it ")).unwrap();
        assert_eq!(new.title, "Ship it");
        assert_eq!(new.status, Status::ToDo);
        assert_eq!(new.priority, Priority::NoPriority);
        assert!(new.due_date.is_none());
    }

    #[test]
    fn new_task_parses_fields() {
        let mut args = create_args("Ship it");
        args.status = Some("in-progress".into());
        args.priority = Some("urgent".into());
        args.due = Some("2024-07-04".into());
        let new = new_task_from_args(&args).unwrap();
        assert_eq!(new.status, Status::InProgress);
        assert_eq!(new.priority, Priority::Urgent);
        assert_eq!(
            new.due_date,
            Some(Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn new_task_rejects_bad_input() {
        assert!(new_task_from_args(&create_args("   ")).is_err());

        let mut args = create_args("x");
        args.priority = Some("critical".into());
        assert!(new_task_from_args(&args).is_err());

        let mut args = create_args("x");
        args.due = Some("tomorrow".into());
        assert!(new_task_from_args(&args).is_err());
    }

    #[test]
    fn parse_priority_lists_choices() {
        let err = parse_priority("p0").unwrap_err().to_string();
        assert!(err.contains("no-priority, low, medium, high, urgent"));
        assert_eq!(parse_priority("HIGH ").ok(), None);
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
    }
}
