//! Clap CLI definitions for the `kn` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use kaneo_core::enums::SortMode;

/// kn -- terminal client for the kaneo project-management API.
#[derive(Parser, Debug)]
#[command(
    name = "kn",
    about = "Terminal client for kaneo projects, tasks and notifications",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file (default: ~/.config/kaneo/config.yaml).
    #[arg(long, global = true, value_name = "PATH", env = "KANEO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects in the configured workspace.
    Projects,

    /// Show a project's board: tasks grouped by column.
    Board(BoardArgs),

    /// List a project's tasks as a single sorted list.
    Tasks(TasksArgs),

    /// Show or change a single task.
    Task(TaskArgs),

    /// List and manage notifications.
    #[command(alias = "inbox")]
    Notifications(NotificationsArgs),

    /// Show or edit configuration.
    Config(ConfigArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

// ---------------------------------------------------------------------------
// Board / Tasks
// ---------------------------------------------------------------------------

/// Arguments for `kn board`.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Project ID.
    pub project: String,

    /// Ordering inside each column (default: configured sort-mode).
    #[arg(long, value_name = "MODE")]
    pub sort: Option<SortMode>,
}

/// Arguments for `kn tasks`.
#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Project ID.
    pub project: String,

    /// Ordering (default: configured sort-mode).
    #[arg(long, value_name = "MODE")]
    pub sort: Option<SortMode>,

    /// Only tasks with this status.
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Only tasks whose due date has passed.
    #[arg(long)]
    pub overdue: bool,

    /// Limit results (0 for unlimited).
    #[arg(short = 'n', long, default_value = "0")]
    pub limit: usize,
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// Arguments for `kn task`.
#[derive(Args, Debug)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

/// Task subcommands.
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Show task details.
    #[command(alias = "view")]
    Show(TaskIdArgs),

    /// Create a task in a project.
    #[command(alias = "new")]
    Create(TaskCreateArgs),

    /// Move a task to another status column.
    Status(TaskStatusArgs),

    /// Change a task's priority.
    Priority(TaskPriorityArgs),

    /// Delete a task.
    Delete(TaskDeleteArgs),
}

/// A single task ID.
#[derive(Args, Debug)]
pub struct TaskIdArgs {
    /// Task ID.
    pub id: String,
}

/// Arguments for `kn task create`.
#[derive(Args, Debug)]
pub struct TaskCreateArgs {
    /// Project ID.
    pub project: String,

    /// Task title.
    pub title: String,

    /// Description.
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Initial status (default: to-do).
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Priority: no-priority, low, medium, high, urgent.
    #[arg(short = 'p', long)]
    pub priority: Option<String>,

    /// Due date (YYYY-MM-DD or RFC 3339).
    #[arg(long)]
    pub due: Option<String>,
}

/// Arguments for `kn task status`.
#[derive(Args, Debug)]
pub struct TaskStatusArgs {
    /// Task ID.
    pub id: String,

    /// New status (a column identifier such as in-progress).
    pub status: String,
}

/// Arguments for `kn task priority`.
#[derive(Args, Debug)]
pub struct TaskPriorityArgs {
    /// Task ID.
    pub id: String,

    /// New priority: no-priority, low, medium, high, urgent.
    pub priority: String,
}

/// Arguments for `kn task delete`.
#[derive(Args, Debug)]
pub struct TaskDeleteArgs {
    /// Task ID.
    pub id: String,

    /// Confirm the deletion.
    #[arg(short = 'f', long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Arguments for `kn notifications`.
#[derive(Args, Debug)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: Option<NotificationCommands>,

    /// Only unread notifications.
    #[arg(short = 'u', long)]
    pub unread: bool,
}

/// Notification subcommands.
#[derive(Subcommand, Debug)]
pub enum NotificationCommands {
    /// Mark one notification as read.
    Read(NotificationIdArgs),

    /// Mark every notification as read.
    ReadAll,

    /// Delete all notifications.
    Clear(ClearArgs),
}

/// A single notification ID.
#[derive(Args, Debug)]
pub struct NotificationIdArgs {
    /// Notification ID.
    pub id: String,
}

/// Arguments for `kn notifications clear`.
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Confirm clearing all notifications.
    #[arg(short = 'f', long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Arguments for `kn config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (file + environment).
    Show(ConfigShowArgs),
    /// Get one configuration value.
    Get(ConfigGetArgs),
    /// Set a value in the config file.
    Set(ConfigSetArgs),
    /// Print the config file path.
    Path,
}

/// Arguments for `kn config show`.
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Print the token unmasked.
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for `kn config get`.
#[derive(Args, Debug)]
pub struct ConfigGetArgs {
    /// Configuration key.
    pub key: String,

    /// Print the token unmasked.
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for `kn config set`.
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `kn completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for.
    pub shell: Shell,
}
