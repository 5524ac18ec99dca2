//! `kn board` -- a project's tasks grouped by column.

use anyhow::{Context, Result};
use chrono::Local;
use kaneo_core::ordering::group_by_column;
use kaneo_ui::{pager, styles};

use crate::cli::BoardArgs;
use crate::context::RuntimeContext;
use crate::output::{format_grouping, output_json};

/// Execute the `kn board` command.
pub fn run(ctx: &RuntimeContext, args: &BoardArgs) -> Result<()> {
    let (client, config) = ctx.client()?;
    let mode = RuntimeContext::sort_mode(&config, args.sort);

    let board = client
        .get_board(&args.project)
        .with_context(|| format!("failed to load board for project {}", args.project))?;

    let grouping = group_by_column(&board.tasks(), &board.columns, mode);
    tracing::debug!(
        columns = grouping.columns.len(),
        tasks = grouping.task_count(),
        %mode,
        "grouped board"
    );
    if !grouping.unmatched.is_empty() {
        tracing::warn!(
            count = grouping.unmatched.len(),
            "tasks with a status that matches no column"
        );
    }

    if ctx.json {
        output_json(&grouping);
        return Ok(());
    }

    let mut out = String::new();
    if !board.name.is_empty() {
        out.push_str(&styles::render_bold(&board.name));
        out.push_str(&format!(
            "  {}\n\n",
            styles::render_muted(&format!("sorted by {mode}"))
        ));
    }
    out.push_str(&format_grouping(&grouping, &Local::now()));

    pager::page(&out);
    Ok(())
}
