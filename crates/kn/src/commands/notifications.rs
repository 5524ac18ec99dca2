//! `kn notifications` -- list, mark read and clear notifications.

use anyhow::{Context, Result, bail};
use kaneo_client::{ClientError, KaneoClient};
use kaneo_core::intent;
use kaneo_core::notification::Notification;
use kaneo_core::ordering::order_notifications;
use kaneo_core::snapshot::Snapshot;
use kaneo_ui::{pager, styles};

use crate::cli::{ClearArgs, NotificationCommands, NotificationIdArgs, NotificationsArgs};
use crate::context::RuntimeContext;
use crate::output::{format_notification_row, output_json};

/// Execute the `kn notifications` command.
pub fn run(ctx: &RuntimeContext, args: &NotificationsArgs) -> Result<()> {
    match &args.command {
        None => run_list(ctx, args.unread),
        Some(NotificationCommands::Read(a)) => run_read(ctx, a),
        Some(NotificationCommands::ReadAll) => run_read_all(ctx),
        Some(NotificationCommands::Clear(a)) => run_clear(ctx, a),
    }
}

/// Fetches notifications, unread first and newest first within each group.
fn fetch_ordered(client: &KaneoClient) -> Result<Vec<Notification>, ClientError> {
    client
        .list_notifications()
        .map(|list| order_notifications(&list))
}

fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

fn print_list(ctx: &RuntimeContext, notifications: &[Notification], unread_only: bool) {
    let shown: Vec<&Notification> = notifications
        .iter()
        .filter(|n| !unread_only || !n.is_read)
        .collect();

    if ctx.json {
        output_json(&shown);
        return;
    }

    if shown.is_empty() {
        println!("No notifications.");
        return;
    }

    let mut out = format!(
        "{} ({} unread)\n\n",
        styles::render_bold("Notifications"),
        unread_count(notifications)
    );
    for n in shown {
        out.push_str(&format_notification_row(n));
        out.push('\n');
    }
    pager::page(&out);
}

fn run_list(ctx: &RuntimeContext, unread_only: bool) -> Result<()> {
    let (client, _) = ctx.client()?;
    let notifications = fetch_ordered(&client).context("failed to load notifications")?;
    print_list(ctx, &notifications, unread_only);
    Ok(())
}

fn run_read(ctx: &RuntimeContext, args: &NotificationIdArgs) -> Result<()> {
    let (client, _) = ctx.client()?;
    let mut snapshot = Snapshot::new(fetch_ordered(&client).context("failed to load notifications")?);

    let Some(target) = snapshot
        .get()
        .and_then(|list| list.iter().find(|n| n.id == args.id))
        .cloned()
    else {
        bail!("notification {} not found", args.id);
    };

    if target.is_read {
        if ctx.json {
            output_json(&target);
        } else {
            println!("Notification {} is already read.", target.id);
        }
        return Ok(());
    }

    let updated = client
        .mutate_and_refetch(&intent::mark_read(&target), &mut snapshot, fetch_ordered)
        .with_context(|| format!("failed to mark notification {} as read", target.id))?;

    if ctx.json {
        match updated.iter().find(|n| n.id == target.id) {
            Some(n) => output_json(n),
            None => output_json(&serde_json::json!({ "read": target.id })),
        }
    } else {
        println!(
            "{} Marked notification {} as read ({} unread left)",
            styles::render_pass_icon(),
            target.id,
            unread_count(updated)
        );
    }
    Ok(())
}

fn run_read_all(ctx: &RuntimeContext) -> Result<()> {
    let (client, _) = ctx.client()?;
    let mut snapshot = Snapshot::empty();
    let updated = client
        .mutate_and_refetch(&intent::mark_all_read(), &mut snapshot, fetch_ordered)
        .context("failed to mark notifications as read")?;

    if ctx.json {
        output_json(updated);
    } else {
        println!(
            "{} Marked all notifications as read",
            styles::render_pass_icon()
        );
    }
    Ok(())
}

fn run_clear(ctx: &RuntimeContext, args: &ClearArgs) -> Result<()> {
    if !args.force {
        bail!(
            "clearing notifications cannot be undone.\n\
            Use --force to confirm deleting all notifications"
        );
    }

    let (client, _) = ctx.client()?;
    let mut snapshot = Snapshot::empty();
    let remaining = client
        .mutate_and_refetch(&intent::clear_all(), &mut snapshot, fetch_ordered)
        .context("failed to clear notifications")?;

    if ctx.json {
        output_json(remaining);
    } else {
        println!(
            "{} Cleared all notifications ({} left)",
            styles::render_pass_icon(),
            remaining.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kaneo_core::enums::ResourceType;

    #[test]
    fn counts_unread() {
        let make = |id: &str, is_read: bool| Notification {
            id: id.into(),
            title: String::new(),
            content: String::new(),
            resource_type: ResourceType::Task,
            is_read,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let list = vec![make("a", false), make("b", true), make("c", false)];
        assert_eq!(unread_count(&list), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
