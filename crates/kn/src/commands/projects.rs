//! `kn projects` -- list the projects of the configured workspace.

use anyhow::{Context, Result};
use kaneo_core::project::Project;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `kn projects` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let (client, config) = ctx.client()?;
    let workspace = config.require_workspace()?;

    let projects = client
        .list_projects(workspace)
        .with_context(|| format!("failed to list projects of workspace {workspace}"))?;

    if ctx.json {
        output_json(&projects);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects in workspace {workspace}.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = projects.iter().map(project_row).collect();
    output_table(&["ID", "NAME", "TASKS", "DONE"], &rows);
    Ok(())
}

fn project_row(project: &Project) -> Vec<String> {
    vec![
        project.id.clone(),
        project.name.clone(),
        project.total_tasks().to_string(),
        format!("{:.0}%", project.completion()),
    ]
}
