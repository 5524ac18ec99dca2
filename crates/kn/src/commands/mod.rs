//! Command handlers, one module per top-level subcommand.

pub mod board;
pub mod completion;
pub mod config_cmd;
pub mod notifications;
pub mod projects;
pub mod task;
pub mod tasks;
pub mod version;
